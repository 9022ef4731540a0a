//! Request middleware and extractors.

pub mod role;

pub use role::ActingRole;

//! Weekly payment-schedule period generation.
//!
//! Finance views lay out payments on a grid of week columns grouped under
//! month headers. This module produces that sequence of week markers
//! deterministically from project date ranges or a fixed half-year window.

pub mod generator;
pub mod marker;

pub use generator::{DateRange, PeriodPolicy, generate};
pub use marker::{MonthGroup, PeriodMarker, group_by_month};

//! Demo fixture data.
//!
//! The stores are in-memory and start empty; in demo mode the server seeds
//! them with a small consistent data set so every view has something to show.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::state::MemoryStore;
use ledgerdesk_core::authz::Role;
use ledgerdesk_core::directory::{
    AccountingSubtype, AccountingTask, Department, Employee, Project, Subcontractor,
};
use ledgerdesk_core::ledger::{BucketKey, EmployeeShare, PaymentEntry, PaymentReason, TaskRef};
use ledgerdesk_core::payroll::{PayrollLine, PayrollRun, PayrollRunType};
use ledgerdesk_core::timesheet::WorkDayRecord;
use ledgerdesk_shared::types::{
    DepartmentId, EmployeeId, MonthKey, PayrollRunId, ProjectId, SubcontractorId, TaskId,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

fn amount(value: i64) -> Decimal {
    Decimal::from(value)
}

/// Populates an empty store with demo fixtures.
///
/// Returns the seeded store. Seeding is deterministic apart from the
/// generated IDs.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn demo_fixtures() -> MemoryStore {
    let mut store = MemoryStore::new();

    let engineering = Department {
        id: DepartmentId::new(),
        name: "Engineering".into(),
    };
    let design = Department {
        id: DepartmentId::new(),
        name: "Design".into(),
    };

    let bridge = Project {
        id: ProjectId::new(),
        name: "Bridge retrofit".into(),
        budget: amount(1_200_000),
        start_date: date(2026, 1, 12),
        end_date: date(2026, 6, 30),
        department_id: engineering.id,
    };
    let terminal = Project {
        id: ProjectId::new(),
        name: "Terminal facade".into(),
        budget: amount(800_000),
        start_date: date(2026, 2, 2),
        end_date: date(2026, 8, 31),
        department_id: design.id,
    };

    let lead = Employee {
        id: EmployeeId::new(),
        full_name: "Maria Sokolova".into(),
        roles: vec![Role::ProjectLead],
        daily_rate: Some(amount(1500)),
        contract_rate: None,
        department_id: engineering.id,
    };
    let executor = Employee {
        id: EmployeeId::new(),
        full_name: "Dmitry Volkov".into(),
        roles: vec![Role::Executor],
        daily_rate: Some(amount(1000)),
        contract_rate: None,
        department_id: engineering.id,
    };
    let contractor = Employee {
        id: EmployeeId::new(),
        full_name: "Elena Roze".into(),
        roles: vec![Role::Executor],
        daily_rate: None,
        contract_rate: Some(amount(90_000)),
        department_id: design.id,
    };
    let accountant = Employee {
        id: EmployeeId::new(),
        full_name: "Olga Klimova".into(),
        roles: vec![Role::Accountant],
        daily_rate: Some(amount(1100)),
        contract_rate: None,
        department_id: design.id,
    };

    let steelworks = Subcontractor {
        id: SubcontractorId::new(),
        name: "Nord Steelworks".into(),
        agreed_amount: amount(250_000),
    };
    let glazing = Subcontractor {
        id: SubcontractorId::new(),
        name: "Crystal Glazing".into(),
        agreed_amount: amount(140_000),
    };

    let steel_task = AccountingTask {
        id: TaskId::new(),
        title: "Steel delivery, stage 2".into(),
        project_id: Some(bridge.id),
        subtype: AccountingSubtype::Payment,
        selected_employee_ids: vec![lead.id, executor.id],
    };
    let invoice_task = AccountingTask {
        id: TaskId::new(),
        title: "Client invoice, February".into(),
        project_id: Some(terminal.id),
        subtype: AccountingSubtype::Income,
        selected_employee_ids: vec![],
    };

    // March work-days: Dmitry splits weeks between the two projects.
    let march = MonthKey::new(2026, 3).expect("valid month");
    for (project_id, days) in [(bridge.id, 12), (terminal.id, 6)] {
        store.timesheet.record(WorkDayRecord {
            employee_id: executor.id,
            project_id,
            month: march,
            days,
        });
    }
    store.timesheet.record(WorkDayRecord {
        employee_id: lead.id,
        project_id: bridge.id,
        month: march,
        days: 20,
    });

    // Payroll: a processed February salary run and a draft March advance.
    let february_salary = PayrollRun {
        id: PayrollRunId::new(),
        date: date(2026, 2, 28),
        run_type: PayrollRunType::Salary,
        month: MonthKey::new(2026, 2).expect("valid month"),
        lines: vec![
            PayrollLine {
                employee_id: lead.id,
                employee_name: lead.full_name.clone(),
                amount: amount(30_000),
                paid: true,
            },
            PayrollLine {
                employee_id: executor.id,
                employee_name: executor.full_name.clone(),
                amount: amount(18_000),
                paid: true,
            },
            PayrollLine {
                employee_id: contractor.id,
                employee_name: contractor.full_name.clone(),
                amount: amount(90_000),
                paid: true,
            },
        ],
        processed: true,
    };
    let march_advance = PayrollRun {
        id: PayrollRunId::new(),
        date: date(2026, 3, 15),
        run_type: PayrollRunType::Advance,
        month: march,
        lines: vec![
            PayrollLine {
                employee_id: lead.id,
                employee_name: lead.full_name.clone(),
                amount: amount(15_000),
                paid: false,
            },
            PayrollLine {
                employee_id: executor.id,
                employee_name: executor.full_name.clone(),
                amount: amount(9_000),
                paid: false,
            },
        ],
        processed: false,
    };
    store.payroll.add_run(february_salary);
    store.payroll.add_run(march_advance);

    // Ledger entries: salaries with breakdown, a subcontract payment, office
    // rent in the unassigned bucket, and a client payment on the income side.
    let bridge_bucket = BucketKey::Project(bridge.id);
    let terminal_bucket = BucketKey::Project(terminal.id);

    store
        .expense
        .append(
            bridge_bucket,
            6,
            PaymentEntry::new(amount(48_000))
                .with_reason(PaymentReason::Salary)
                .with_employee_payments(vec![
                    EmployeeShare {
                        employee_id: lead.id,
                        name: lead.full_name.clone(),
                        amount: amount(30_000),
                    },
                    EmployeeShare {
                        employee_id: executor.id,
                        name: executor.full_name.clone(),
                        amount: amount(18_000),
                    },
                ]),
        )
        .expect("valid seed entry");
    store
        .expense
        .append(
            bridge_bucket,
            8,
            PaymentEntry::new(amount(120_000))
                .with_reason(PaymentReason::Subcontract)
                .with_subcontractor(steelworks.id)
                .with_task(TaskRef {
                    id: steel_task.id,
                    title: steel_task.title.clone(),
                }),
        )
        .expect("valid seed entry");
    store
        .expense
        .append(
            terminal_bucket,
            9,
            PaymentEntry::new(amount(45_000))
                .with_reason(PaymentReason::Subcontract)
                .with_subcontractor(glazing.id),
        )
        .expect("valid seed entry");
    store
        .expense
        .append(
            BucketKey::Unassigned,
            6,
            PaymentEntry::new(amount(22_000)).with_reason(PaymentReason::Other),
        )
        .expect("valid seed entry");
    store
        .income
        .append(
            terminal_bucket,
            7,
            PaymentEntry::new(amount(300_000))
                .with_reason(PaymentReason::Income)
                .with_task(TaskRef {
                    id: invoice_task.id,
                    title: invoice_task.title.clone(),
                }),
        )
        .expect("valid seed entry");

    store.departments = vec![engineering, design];
    store.projects = vec![bridge, terminal];
    store.employees = vec![lead, executor, contractor, accountant];
    store.subcontractors = vec![steelworks, glazing];
    store.tasks = vec![steel_task, invoice_task];

    store
}

//! One row of the payroll report.

use rust_decimal::Decimal;
use uuid::Uuid;

use super::{AdditionResult, Employee};

/// A payroll report row: the employee's store attributes joined with the
/// computed addition.
#[derive(Debug, Clone, PartialEq)]
pub struct PayrollReportRow {
    /// The employee's id.
    pub employee_id: Uuid,
    /// Given name.
    pub name: String,
    /// Family name.
    pub surname: String,
    /// Department name.
    pub department: String,
    /// Base remuneration in whole currency units.
    pub base_remuneration: u64,
    /// The computed addition.
    pub addition_amount: Decimal,
    /// Label of the bonus kind applied.
    pub bonus_type: String,
    /// Base remuneration plus addition.
    pub final_remuneration: Decimal,
}

impl PayrollReportRow {
    /// Joins an employee with the addition computed for them.
    pub fn from_calculation(employee: &Employee, addition: AdditionResult) -> Self {
        Self {
            employee_id: employee.id,
            name: employee.name.clone(),
            surname: employee.surname.clone(),
            department: employee.department_name().to_string(),
            base_remuneration: employee.remuneration_base,
            addition_amount: addition.additional_amount(),
            bonus_type: addition.bonus_kind().to_string(),
            final_remuneration: addition.final_remuneration(),
        }
    }
}

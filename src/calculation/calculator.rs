//! Dispatch of employees to bonus strategies.

use tracing::error;

use crate::error::{ReportError, ReportResult};
use crate::models::{AdditionResult, Employee};

use super::{BonusStrategy, FixedBonusStrategy, PercentageBonusStrategy};

/// Selects the bonus strategy for an employee's department and delegates to it.
///
/// Strategies are scanned in registration order and the first one that
/// supports the department's bonus kind wins. The strategy list is never
/// mutated after construction.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use payroll_report::calculation::RemunerationCalculator;
/// use payroll_report::models::{BonusKind, Department, Employee};
/// use rust_decimal::Decimal;
///
/// let calculator = RemunerationCalculator::default();
/// let department = Arc::new(Department::new("Support", BonusKind::PercentBonus, 10));
/// let employee = Employee::new("Ann", "Lee", 5000, None, department);
///
/// let result = calculator.calculate(&employee).unwrap();
/// assert_eq!(result.final_remuneration(), Decimal::from(5500));
/// ```
pub struct RemunerationCalculator {
    strategies: Vec<Box<dyn BonusStrategy>>,
}

impl RemunerationCalculator {
    /// Creates a calculator over the given strategies, in priority order.
    pub fn with_strategies(strategies: Vec<Box<dyn BonusStrategy>>) -> Self {
        Self { strategies }
    }

    /// Computes the addition for an employee.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::StrategyNotFound`] naming the bonus kind when no
    /// registered strategy supports the employee's department.
    pub fn calculate(&self, employee: &Employee) -> ReportResult<AdditionResult> {
        let kind = employee.department.bonus_kind;

        match self.strategies.iter().find(|strategy| strategy.supports(kind)) {
            Some(strategy) => Ok(strategy.calculate(employee)),
            None => {
                error!(
                    bonus_kind = %kind,
                    employee_id = %employee.id,
                    department = %employee.department.name,
                    "No bonus strategy registered for department bonus kind"
                );
                Err(ReportError::StrategyNotFound {
                    kind: kind.label().to_string(),
                })
            }
        }
    }
}

impl Default for RemunerationCalculator {
    /// Registers a strategy for every [`BonusKind`](crate::models::BonusKind).
    fn default() -> Self {
        Self::with_strategies(vec![
            Box::new(FixedBonusStrategy),
            Box::new(PercentageBonusStrategy),
        ])
    }
}

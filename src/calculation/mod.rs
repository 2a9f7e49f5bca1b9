//! Remuneration calculation for the payroll report engine.
//!
//! This module contains the bonus strategies, one per department bonus
//! kind, and the [`RemunerationCalculator`] that dispatches an employee
//! to the strategy matching their department.

mod calculator;
mod fixed_bonus;
mod percentage_bonus;
mod strategy;

pub use calculator::RemunerationCalculator;
pub use fixed_bonus::{FixedBonusStrategy, MAX_BONUS_YEARS};
pub use percentage_bonus::PercentageBonusStrategy;
pub use strategy::BonusStrategy;

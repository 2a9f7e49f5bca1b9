//! The capability shared by every bonus strategy.

use crate::models::{AdditionResult, BonusKind, Employee};

/// Computes the addition for employees of departments with a given bonus kind.
///
/// Strategies are registered with a
/// [`RemunerationCalculator`](super::RemunerationCalculator) and shared
/// across concurrent report builds, so they must be `Send + Sync`.
pub trait BonusStrategy: Send + Sync {
    /// Returns true if this strategy handles the given bonus kind.
    fn supports(&self, kind: BonusKind) -> bool;

    /// Computes the addition for an employee whose department this strategy supports.
    fn calculate(&self, employee: &Employee) -> AdditionResult;
}

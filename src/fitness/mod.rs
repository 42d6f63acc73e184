//! Fitness scoring over decoded domain models.

pub mod risk_reward;

pub use risk_reward::RiskRewardFitness;

use crate::error::Result;

/// Scorer contract: a deterministic, side-effect-free mapping from a
/// decoded model to a numeric fitness.
///
/// The model's shape is enforced by the associated type at compile time;
/// value-level shape violations that typing cannot rule out (an empty list
/// where at least one element is required, a non-positive quantity) fail
/// with a `TypeMismatch` error.
pub trait FitnessFunction {
    type Model;

    fn fitness(&self, model: &Self::Model) -> Result<f64>;
}

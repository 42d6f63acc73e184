use super::FitnessFunction;
use crate::error::{EvogenError, Result};
use crate::rosetta::StrategyModel;

/// Highest score this function can assign; a test oracle, not enforced
/// by the engine.
pub const PERFECT_FITNESS: f64 = 100.0;

/// Scores a [`StrategyModel`] as a weighted sum of independent terms:
///
/// - reward/risk ratio (take-profit over stop-loss, saturating at 5x): 40
/// - moving-average periods in strictly ascending order: 20
/// - tightness of the entry-threshold band: 20
/// - tag length (saturating at 10 characters): 10
/// - long-only bonus: 10
///
/// All terms are deterministic functions of the model's fields, so equal
/// models always score equally.
#[derive(Debug, Clone, Default)]
pub struct RiskRewardFitness;

impl RiskRewardFitness {
    pub fn new() -> Self {
        Self
    }
}

impl FitnessFunction for RiskRewardFitness {
    type Model = StrategyModel;

    fn fitness(&self, model: &StrategyModel) -> Result<f64> {
        if model.ma_periods.is_empty() {
            return Err(EvogenError::type_mismatch(
                "non-empty ma_periods",
                "empty list",
            ));
        }
        if model.stop_loss_pct <= 0.0 {
            return Err(EvogenError::type_mismatch(
                "positive stop_loss_pct",
                model.stop_loss_pct.to_string(),
            ));
        }

        let ratio = model.take_profit_pct / model.stop_loss_pct;
        let ratio_term = (ratio / 5.0).min(1.0) * 40.0;

        let ordered_pairs = model
            .ma_periods
            .windows(2)
            .filter(|pair| pair[0] < pair[1])
            .count();
        let order_term = if model.ma_periods.len() < 2 {
            20.0
        } else {
            ordered_pairs as f64 / (model.ma_periods.len() - 1) as f64 * 20.0
        };

        let band = (model.entry_max - model.entry_min).clamp(0.0, 100.0);
        let band_term = (1.0 - band / 100.0) * 20.0;

        let tag_term = (model.tag.chars().count() as f64 / 10.0).min(1.0) * 10.0;

        let long_term = if model.long_only { 10.0 } else { 0.0 };

        Ok(ratio_term + order_term + band_term + tag_term + long_term)
    }
}

use super::RosettaStone;
use crate::error::Result;
use crate::genetics::{ChromosomeSpec, EncodingType, Genome};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Chromosome ids making up the strategy schema
pub const LONG_ONLY: &str = "long_only";
pub const STOP_LOSS: &str = "stop_loss";
pub const TAKE_PROFIT: &str = "take_profit";
pub const MA_PERIODS: &str = "ma_periods";
pub const ENTRY_THRESHOLDS: &str = "entry_thresholds";
pub const TAG: &str = "tag";

/// Decoded trading-strategy parameters.
///
/// Ephemeral: created fresh by each decode, consumed by a fitness
/// function, then discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyModel {
    pub long_only: bool,
    /// Stop distance in percent of entry price
    pub stop_loss_pct: f64,
    /// Profit target in percent of entry price
    pub take_profit_pct: f64,
    /// Moving-average lookback periods, in chromosome order
    pub ma_periods: Vec<i64>,
    /// Statistics over the variable-length entry-threshold chromosome
    pub entry_min: f64,
    pub entry_avg: f64,
    pub entry_max: f64,
    /// Free-form label evolved alongside the numeric parameters
    pub tag: String,
}

/// Translator for [`StrategyModel`]: six chromosomes covering every
/// aggregation kind (scalar, list, min/avg/max, concatenation).
#[derive(Debug, Clone, Default)]
pub struct StrategyRosetta;

impl StrategyRosetta {
    pub fn new() -> Self {
        Self
    }
}

impl RosettaStone for StrategyRosetta {
    type Model = StrategyModel;

    fn genome_template<R: Rng>(&self, rng: &mut R) -> Genome {
        let mut genome = Genome::new();
        genome.add_chromosome(
            LONG_ONLY,
            EncodingType::Boolean,
            ChromosomeSpec {
                n_genes: Some(1),
                ..ChromosomeSpec::default()
            },
            rng,
        );
        genome.add_chromosome(
            STOP_LOSS,
            EncodingType::Float,
            ChromosomeSpec {
                n_genes: Some(1),
                min: Some(0.5),
                max: Some(10.0),
                ..ChromosomeSpec::default()
            },
            rng,
        );
        genome.add_chromosome(
            TAKE_PROFIT,
            EncodingType::Float,
            ChromosomeSpec {
                n_genes: Some(1),
                min: Some(1.0),
                max: Some(25.0),
                ..ChromosomeSpec::default()
            },
            rng,
        );
        genome.add_chromosome(
            MA_PERIODS,
            EncodingType::Integer,
            ChromosomeSpec {
                n_genes: Some(3),
                min: Some(2.0),
                max: Some(200.0),
                ..ChromosomeSpec::default()
            },
            rng,
        );
        genome.add_chromosome(
            ENTRY_THRESHOLDS,
            EncodingType::Float,
            ChromosomeSpec {
                min: Some(0.0),
                max: Some(100.0),
                ..ChromosomeSpec::default()
            },
            rng,
        );
        genome.add_chromosome(
            TAG,
            EncodingType::String,
            ChromosomeSpec::default(),
            rng,
        );
        genome
    }

    fn genome_to_model(&self, genome: &Genome) -> Result<StrategyModel> {
        let thresholds = genome.chromosome(ENTRY_THRESHOLDS)?;
        Ok(StrategyModel {
            long_only: genome.chromosome(LONG_ONLY)?.value()?.as_bool()?,
            stop_loss_pct: genome.chromosome(STOP_LOSS)?.value()?.as_f64()?,
            take_profit_pct: genome.chromosome(TAKE_PROFIT)?.value()?.as_f64()?,
            ma_periods: genome
                .chromosome(MA_PERIODS)?
                .list()
                .iter()
                .map(|v| v.as_i64())
                .collect::<Result<Vec<i64>>>()?,
            entry_min: thresholds.lowest()?,
            entry_avg: thresholds.average()?,
            entry_max: thresholds.highest()?,
            tag: genome.chromosome(TAG)?.concatenated()?,
        })
    }
}

use super::traits::ConfigSection;
use crate::error::EvogenError;
use serde::{Deserialize, Serialize};

/// Per-operator trigger percentages for one mutation pass.
///
/// Every field except `gaussian_sigma` is a chance in percent (0-100).
/// An operator fires iff `chance * multiplier > roll` for a fresh uniform
/// roll in `[0, 100)`, evaluated independently per operator, so several
/// operators may fire in the same pass. Fields that do not apply to a given
/// gene or chromosome variant are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MutationChances {
    pub uniform: f64,
    pub flip: f64,
    pub boundary: f64,
    pub gaussian: f64,
    /// Standard deviation for the gaussian operator, not a percentage
    pub gaussian_sigma: f64,
    pub bitstring: f64,
    pub duplication: f64,
    pub deletion: f64,
    pub insertion: f64,
    pub swap: f64,
    pub split: f64,
    pub merge: f64,
}

impl Default for MutationChances {
    fn default() -> Self {
        Self {
            uniform: 1.0,
            flip: 1.0,
            boundary: 1.0,
            gaussian: 1.0,
            gaussian_sigma: 1.0,
            bitstring: 1.0,
            duplication: 1.0,
            deletion: 1.0,
            insertion: 1.0,
            swap: 1.0,
            split: 1.0,
            merge: 1.0,
        }
    }
}

impl MutationChances {
    /// All chances zero: no operator can fire. Useful as a base for
    /// enabling single operators in isolation.
    pub fn none() -> Self {
        Self {
            uniform: 0.0,
            flip: 0.0,
            boundary: 0.0,
            gaussian: 0.0,
            gaussian_sigma: 1.0,
            bitstring: 0.0,
            duplication: 0.0,
            deletion: 0.0,
            insertion: 0.0,
            swap: 0.0,
            split: 0.0,
            merge: 0.0,
        }
    }
}

impl ConfigSection for MutationChances {
    fn section_name() -> &'static str {
        "mutation"
    }

    fn validate(&self) -> Result<(), EvogenError> {
        let chances = [
            ("uniform", self.uniform),
            ("flip", self.flip),
            ("boundary", self.boundary),
            ("gaussian", self.gaussian),
            ("bitstring", self.bitstring),
            ("duplication", self.duplication),
            ("deletion", self.deletion),
            ("insertion", self.insertion),
            ("swap", self.swap),
            ("split", self.split),
            ("merge", self.merge),
        ];
        for (name, chance) in chances {
            if !(0.0..=100.0).contains(&chance) {
                return Err(EvogenError::Configuration(format!(
                    "Mutation chance '{}' must be between 0 and 100, got {}",
                    name, chance
                )));
            }
        }
        if self.gaussian_sigma <= 0.0 {
            return Err(EvogenError::Configuration(format!(
                "gaussian_sigma must be positive, got {}",
                self.gaussian_sigma
            )));
        }
        Ok(())
    }
}

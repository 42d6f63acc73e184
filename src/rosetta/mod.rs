//! Translation layer between raw genomes and domain scoring models.

pub mod strategy;

pub use strategy::{StrategyModel, StrategyRosetta};

use crate::error::{EvogenError, Result};
use crate::genetics::Genome;
use rand::Rng;

/// Translator contract for one domain model.
///
/// A translator fixes the genome "shape" a model needs (the template) and
/// projects a populated genome onto a fresh model instance. Decoding never
/// mutates the genome.
pub trait RosettaStone {
    type Model;

    /// Build the genome schema for this domain: one `add_chromosome` call
    /// per chromosome the model reads, with encoding type, gene count and
    /// any bounds or charset. Gene values start randomized.
    fn genome_template<R: Rng>(&self, rng: &mut R) -> Genome;

    /// Project a populated genome onto a model. Fails fast with
    /// `MissingChromosome` when the genome does not match the template's
    /// shape.
    fn genome_to_model(&self, genome: &Genome) -> Result<Self::Model>;

    /// Inverse mapping from a model back to a genome.
    ///
    /// Declared by the contract but not implemented by any translator so
    /// far; an explicit extension point rather than an oversight. The
    /// default body reports the gap instead of guessing at an inverse.
    fn model_to_genome(&self, _model: &Self::Model) -> Result<Genome> {
        Err(EvogenError::Configuration(
            "model_to_genome is not implemented for this translator".to_string(),
        ))
    }
}

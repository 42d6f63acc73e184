use crate::config::MutationChances;
use crate::error::{EvogenError, Result};
use crate::genetics::chromosome::{Chromosome, ChromosomeSpec};
use crate::genetics::encoding::{EncodingType, Value};
use indexmap::IndexMap;
use rand::Rng;
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Named, ordered collection of chromosomes; the unit of evolution.
///
/// Chromosome insertion order is semantically significant: it participates
/// in the content identity and in snapshot output. Fitness is assigned by
/// an external evaluator after each decode+score cycle, never by the genome
/// itself.
#[derive(Debug, Clone, Default)]
pub struct Genome {
    chromosomes: IndexMap<String, Chromosome>,
    fitness: Option<f64>,
}

/// Serializable snapshot of a genome: id, raw gene values per chromosome,
/// and current fitness. Format stability is not guaranteed.
#[derive(Debug, Clone, Serialize)]
pub struct GenomeSnapshot {
    pub id: String,
    pub chromosomes: IndexMap<String, Vec<Value>>,
    pub fitness: Option<f64>,
}

impl Genome {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct, randomize and store a chromosome under `id`. A duplicate
    /// id overwrites the previous chromosome (last write wins, original
    /// insertion position kept).
    pub fn add_chromosome<R: Rng>(
        &mut self,
        id: impl Into<String>,
        encoding_type: EncodingType,
        spec: ChromosomeSpec,
        rng: &mut R,
    ) {
        let id = id.into();
        let chromosome = Chromosome::new(id.clone(), encoding_type, spec, rng);
        self.chromosomes.insert(id, chromosome);
    }

    /// Lookup by id; a missing id is a contract violation and fails fast
    pub fn chromosome(&self, id: &str) -> Result<&Chromosome> {
        self.chromosomes
            .get(id)
            .ok_or_else(|| EvogenError::MissingChromosome(id.to_string()))
    }

    pub fn chromosome_mut(&mut self, id: &str) -> Result<&mut Chromosome> {
        self.chromosomes
            .get_mut(id)
            .ok_or_else(|| EvogenError::MissingChromosome(id.to_string()))
    }

    pub fn chromosomes(&self) -> impl Iterator<Item = &Chromosome> {
        self.chromosomes.values()
    }

    pub fn len(&self) -> usize {
        self.chromosomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }

    pub fn fitness(&self) -> Option<f64> {
        self.fitness
    }

    /// Record the score an external evaluator produced for this genome
    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = Some(fitness);
    }

    /// Deterministic content identity.
    ///
    /// Hashes the ordered trace `"<chromosome-ordinal>|<gene-ordinal>:<value> "`
    /// over every gene with SHA-256 and hex-encodes the digest. Identical
    /// chromosome insertion order plus identical gene values give an
    /// identical id; no randomness is involved.
    pub fn id(&self) -> String {
        let mut trace = String::new();
        for (chromosome_idx, chromosome) in self.chromosomes.values().enumerate() {
            for (gene_idx, gene) in chromosome.genes().iter().enumerate() {
                trace.push_str(&format!("{}|{}:{} ", chromosome_idx, gene_idx, gene.value()));
            }
        }
        let mut hasher = Sha256::new();
        hasher.update(trace.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// One chance-gated mutation pass over every chromosome and gene
    pub fn mutate<R: Rng>(&mut self, chances: &MutationChances, multiplier: f64, rng: &mut R) {
        for chromosome in self.chromosomes.values_mut() {
            chromosome.mutate(chances, multiplier, rng);
        }
    }

    pub fn snapshot(&self) -> GenomeSnapshot {
        GenomeSnapshot {
            id: self.id(),
            chromosomes: self
                .chromosomes
                .iter()
                .map(|(id, chromosome)| (id.clone(), chromosome.list()))
                .collect(),
            fitness: self.fitness,
        }
    }
}

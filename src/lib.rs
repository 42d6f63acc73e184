//! Genetic encoding and mutation engine.
//!
//! A candidate solution is a [`Genome`]: a named, insertion-ordered
//! collection of [`Chromosome`]s, each an ordered sequence of same-typed
//! [`Gene`]s. Chance-gated mutation operators evolve genes in place and
//! restructure variable-length chromosomes; a [`RosettaStone`] translator
//! decodes a genome into a domain model, and a [`FitnessFunction`] scores
//! that model. The resulting score is written back onto the genome by the
//! external evolutionary driver.
//!
//! The engine is single-threaded and synchronous. All randomness flows
//! through caller-supplied [`rand::Rng`] handles, so a seeded `StdRng`
//! makes every mutation path reproducible. Genome identity is a pure
//! SHA-256 function of chromosome order and gene values and involves no
//! randomness at all.

pub mod config;
pub mod error;
pub mod fitness;
pub mod genetics;
pub mod rosetta;

pub use config::{EngineConfig, MutationChances};
pub use error::{EvogenError, Result};
pub use fitness::FitnessFunction;
pub use genetics::{Chromosome, ChromosomeSpec, EncodingType, Gene, Genome, Value};
pub use rosetta::RosettaStone;

pub mod chromosome;
pub mod encoding;
pub mod genome;
pub mod mutation;

pub use chromosome::{Chromosome, ChromosomeSpec, MAX_GENES};
pub use encoding::{EncodingType, Gene, Value, DEFAULT_CHARSET};
pub use genome::{Genome, GenomeSnapshot};
pub use mutation::MAX_STRING_LEN;

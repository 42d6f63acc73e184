pub mod manager;
pub mod mutation;
pub mod traits;

pub use manager::EngineConfig;
pub use mutation::MutationChances;
pub use traits::ConfigSection;

pub mod hash_functions;
pub mod integrity_metadata;

pub use hash_functions::{IntegrityHashFunctions, Sha2HashFunction};
pub use integrity_metadata::IntegrityMetadata;

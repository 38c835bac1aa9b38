// src/extractors/mod.rs
pub mod parameters;
pub mod section;

// Re-export key extraction types for convenience
pub use parameters::extract_connection_parameters;
pub use section::SectionExtractor;

// src/profile/mod.rs
pub mod models;
pub mod readme;

pub use models::{Document, SectionKind};

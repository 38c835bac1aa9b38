// src/utils/error.rs
use std::path::PathBuf;
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Section not found: {0}")]
    SectionNotFound(String),

    #[error("Required parameter not found: {0}")]
    ParameterNotFound(String),

    #[error("Invalid value '{value}' for parameter {name}")]
    InvalidParameter { name: String, value: String },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Cannot derive output name from path: {0}")]
    InvalidPath(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("File '{}' does not exist.", .0.display())]
    InputNotFound(PathBuf),

    #[error("Reading file: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

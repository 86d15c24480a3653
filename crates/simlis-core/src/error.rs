use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{artist} - {title}: unrecognized difficulty {difficulty:?}")]
    UnrecognizedDifficulty {
        difficulty: String,
        title: String,
        artist: String,
    },

    #[error("Pack directory not found: {0}")]
    PackNotFound(PathBuf),

    #[error("Unsupported simfile extension: {0}")]
    UnsupportedExtension(String),

    #[error("Malformed simfile {path}: {message}")]
    MalformedSimfile { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

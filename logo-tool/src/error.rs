use std::path::PathBuf;

use thiserror::Error;

/// Failures of a single conversion run. None of them are retried.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Input image not found: {}", path.display())]
    MissingInput { path: PathBuf },

    #[error("Failed to decode image: {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Scaled image would be empty ({width}x{height})")]
    EmptyOutput { width: u32, height: u32 },

    #[error("Failed to write header: {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConvertError>;

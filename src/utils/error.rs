//! Error handling for icoforge

use std::path::PathBuf;
use thiserror::Error;

/// Failure converting a single image into an icon
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("{0}")]
    Image(#[from] image::ImageError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("conversion task aborted: {0}")]
    Aborted(String),
}

/// Main error type for icoforge
#[derive(Debug, Error)]
pub enum IcoForgeError {
    #[error("Extension is incorrect!")]
    InvalidExtension(String),

    #[error("Path '{}' is incorrect or does not exist!", .0.display())]
    PathNotFound(PathBuf),

    #[error("Cannot read folder '{}': {source}", .path.display())]
    FolderUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error occurred while creating result directory! ('{}') {source}", .path.display())]
    DirectoryAllocation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to convert '{}': {source}", .path.display())]
    Conversion {
        path: PathBuf,
        #[source]
        source: ConversionError,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Coarse category of an [`IcoForgeError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad user input; aborts only the current top-level operation
    Input,
    /// Destination folder could not be created; aborts the batch
    DirectoryAllocation,
    /// A single file failed to convert
    Conversion,
    /// Settings could not be loaded or are invalid
    Config,
}

impl IcoForgeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            IcoForgeError::InvalidExtension(_)
            | IcoForgeError::PathNotFound(_)
            | IcoForgeError::FolderUnreadable { .. } => ErrorKind::Input,
            IcoForgeError::DirectoryAllocation { .. } => ErrorKind::DirectoryAllocation,
            IcoForgeError::Conversion { .. } => ErrorKind::Conversion,
            IcoForgeError::InvalidConfig(_)
            | IcoForgeError::IoError(_)
            | IcoForgeError::SerializationError(_) => ErrorKind::Config,
        }
    }
}

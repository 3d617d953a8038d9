//! Utility modules for error handling, configuration and naming

pub mod config;
pub mod error;
pub mod naming;

// Re-export for convenience
pub use config::{default_settings_path, ConverterSettings, ResizeFilter};
pub use error::{ConversionError, ErrorKind, IcoForgeError};
pub use naming::{normalize_path_input, output_stem, strip_extension};

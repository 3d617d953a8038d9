//! icoforge library

pub mod cli;
pub mod codec;
pub mod converter;
pub mod selector;
pub mod utils;

// Re-export main types for easier use
pub use codec::{IconCodec, ImageCodec};
pub use converter::{
    convert_file, BatchSummary, ConversionResult, Converter, DispatchOutcome, ExtensionFilter,
};
pub use selector::{select_sizes, Dimension, SizeLadder};
pub use utils::{ConversionError, ConverterSettings, IcoForgeError};

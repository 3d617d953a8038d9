//! Single-file and folder conversion

pub mod batch;
pub mod orchestrator;
pub mod single;
pub mod target;

pub use batch::{allocate_destination, collect_sources, BatchSummary, ExtensionFilter, FileOutcome};
pub use orchestrator::{Converter, DispatchOutcome};
pub use single::{convert_file, format_sizes, ConversionResult, SingleOutcome};
pub use target::{resolve_target, Target};

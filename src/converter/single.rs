//! Converting one image into one icon

use crate::codec::IconCodec;
use crate::selector::{Dimension, SizeLadder};
use crate::utils::error::{ConversionError, IcoForgeError};
use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Written icon and the frame sizes it holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    pub output_path: PathBuf,
    pub sizes: Vec<Dimension>,
}

/// Render sizes as `[(256, 256), (128, 128)]`
pub fn format_sizes(sizes: &[Dimension]) -> String {
    let parts: Vec<String> = sizes.iter().map(|d| d.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

/// Convert `source` into `<output_dir>/<output_base_name>.ico`
pub fn convert_file<C: IconCodec + ?Sized>(
    codec: &C,
    ladder: &SizeLadder,
    source: &Path,
    output_base_name: &OsStr,
    output_dir: &Path,
) -> Result<ConversionResult, ConversionError> {
    let image = codec.open(source)?;
    let native = codec.dimensions(&image);
    let sizes = ladder.select(native.width).to_vec();
    let mut output_name = output_base_name.to_os_string();
    output_name.push(".ico");
    let output_path = output_dir.join(output_name);

    debug!(
        "Converting {:?} ({}x{}) -> {:?} with {}",
        source,
        native.width,
        native.height,
        output_path,
        format_sizes(&sizes)
    );

    codec.save_ico(&image, &output_path, &sizes)?;
    // `image` is dropped here, releasing the decoded pixels
    Ok(ConversionResult { output_path, sizes })
}

/// Outcome of converting a single file in place
#[derive(Debug)]
pub struct SingleOutcome {
    pub source: PathBuf,
    pub result: Result<ConversionResult, ConversionError>,
}

impl SingleOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Attach the source path to a failure
    pub fn into_result(self) -> Result<ConversionResult, IcoForgeError> {
        let source = self.source;
        self.result
            .map_err(|e| IcoForgeError::Conversion { path: source, source: e })
    }
}

impl fmt::Display for SingleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            Ok(done) => write!(
                f,
                "File converted successfully! (converted file: {}, ico sizes: {})",
                done.output_path.display(),
                format_sizes(&done.sizes)
            ),
            Err(e) => write!(f, "File conversion ERROR: {}", e),
        }
    }
}

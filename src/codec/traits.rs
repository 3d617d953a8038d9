use crate::selector::Dimension;
use crate::utils::error::ConversionError;
use std::path::Path;

/// Core trait for the image codec used by the converters
///
/// This trait isolates the conversion logic from the library that actually
/// decodes pixels and writes ICO containers. Resources held by an opened
/// image are released when the handle is dropped.
pub trait IconCodec: Send + Sync {
    /// Decoded source image
    type Image;

    /// Open and decode the image at `path`
    fn open(&self, path: &Path) -> Result<Self::Image, ConversionError>;

    /// Native size of an opened image
    fn dimensions(&self, image: &Self::Image) -> Dimension;

    /// Write `image` to `destination` as an ICO holding one frame per entry of `sizes`
    fn save_ico(
        &self,
        image: &Self::Image,
        destination: &Path,
        sizes: &[Dimension],
    ) -> Result<(), ConversionError>;
}

//! `image`-crate backed codec

use crate::codec::traits::IconCodec;
use crate::selector::Dimension;
use crate::utils::config::ResizeFilter;
use crate::utils::error::ConversionError;
use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::{DynamicImage, ExtendedColorType, ImageReader};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Decoded source image
pub struct DecodedImage {
    inner: DynamicImage,
}

impl DecodedImage {
    pub fn new(inner: DynamicImage) -> Self {
        Self { inner }
    }
}

/// Production codec: any format `image` can sniff in, PNG-compressed ICO frames out
#[derive(Debug, Clone, Copy)]
pub struct ImageCodec {
    filter: ResizeFilter,
}

impl ImageCodec {
    pub fn new(filter: ResizeFilter) -> Self {
        Self { filter }
    }

    /// Downscale to fit inside `size`, keeping the aspect ratio, and pack as a PNG frame
    fn frame(&self, image: &DynamicImage, size: Dimension) -> Result<IcoFrame<'static>, ConversionError> {
        let resized = image
            .resize(size.width, size.height, self.filter.as_filter_type())
            .to_rgba8();
        let (width, height) = resized.dimensions();
        Ok(IcoFrame::as_png(
            resized.as_raw(),
            width,
            height,
            ExtendedColorType::Rgba8,
        )?)
    }
}

impl Default for ImageCodec {
    fn default() -> Self {
        Self::new(ResizeFilter::Lanczos3)
    }
}

impl IconCodec for ImageCodec {
    type Image = DecodedImage;

    fn open(&self, path: &Path) -> Result<DecodedImage, ConversionError> {
        // Sniff the format from content so misnamed files still decode
        let reader = ImageReader::open(path)?.with_guessed_format()?;
        let inner = reader.decode()?;
        debug!(
            "Decoded {:?} ({}x{})",
            path,
            inner.width(),
            inner.height()
        );
        Ok(DecodedImage::new(inner))
    }

    fn dimensions(&self, image: &DecodedImage) -> Dimension {
        Dimension::new(image.inner.width(), image.inner.height())
    }

    fn save_ico(
        &self,
        image: &DecodedImage,
        destination: &Path,
        sizes: &[Dimension],
    ) -> Result<(), ConversionError> {
        let frames = sizes
            .iter()
            .map(|&size| self.frame(&image.inner, size))
            .collect::<Result<Vec<_>, _>>()?;

        let mut writer = BufWriter::new(File::create(destination)?);
        IcoEncoder::new(&mut writer).encode_images(&frames)?;
        writer.flush()?;

        debug!("Wrote {} frame(s) to {:?}", frames.len(), destination);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};

    fn write_png(path: &Path, width: u32, height: u32) {
        RgbaImage::from_pixel(width, height, Rgba([200, 40, 40, 255]))
            .save_with_format(path, ImageFormat::Png)
            .unwrap();
    }

    #[test]
    fn test_open_reports_native_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("wide.png");
        write_png(&src, 300, 120);

        let codec = ImageCodec::default();
        let image = codec.open(&src).unwrap();
        assert_eq!(codec.dimensions(&image), Dimension::new(300, 120));
    }

    #[test]
    fn test_open_sniffs_content_not_extension() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("actually_png.jpg");
        write_png(&src, 20, 20);

        assert!(ImageCodec::default().open(&src).is_ok());
    }

    #[test]
    fn test_open_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("broken.png");
        std::fs::write(&src, b"definitely not an image").unwrap();

        let err = ImageCodec::default().open(&src).err().unwrap();
        assert!(matches!(err, ConversionError::Image(_)));
    }

    #[test]
    fn test_open_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ImageCodec::default()
            .open(&dir.path().join("absent.png"))
            .err()
            .unwrap();
        assert!(matches!(err, ConversionError::Io(_)));
    }

    #[test]
    fn test_save_ico_writes_all_frames() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("square.png");
        let dest = dir.path().join("square.ico");
        write_png(&src, 64, 64);

        let codec = ImageCodec::new(ResizeFilter::Nearest);
        let image = codec.open(&src).unwrap();
        let sizes = [Dimension::square(64), Dimension::square(32), Dimension::square(16)];
        codec.save_ico(&image, &dest, &sizes).unwrap();

        let bytes = std::fs::read(&dest).unwrap();
        // ICONDIR: reserved 0, type 1 (icon), frame count
        assert_eq!(&bytes[0..4], &[0, 0, 1, 0]);
        assert_eq!(u16::from_le_bytes([bytes[4], bytes[5]]), 3);

        let decoded = image::load_from_memory_with_format(&bytes, ImageFormat::Ico).unwrap();
        assert_eq!(decoded.width(), 64);
    }
}

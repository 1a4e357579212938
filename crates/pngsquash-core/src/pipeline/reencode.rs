//! Lossy re-encode of a source PNG into a temporary JPEG.

use image::codecs::jpeg::JpegEncoder;
use image::{ColorType, DynamicImage, GenericImageView, ImageFormat, ImageReader};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::PipelineError;

use super::cleanup::remove_if_present;

/// Re-encodes images as JPEG at a fixed, explicit quality.
pub struct ReEncoder {
    quality: u8,
}

impl ReEncoder {
    /// Create a re-encoder for the given JPEG quality (1-100).
    pub fn new(quality: u8) -> Self {
        Self {
            quality: quality.clamp(1, 100),
        }
    }

    /// Quality passed to the JPEG encoder.
    pub fn quality(&self) -> u8 {
        self.quality
    }

    /// Decode `source` and write it to `temporary` as a JPEG with unchanged
    /// dimensions. Returns the raster's dimensions.
    ///
    /// On failure any partially-written `temporary` file is removed.
    pub fn reencode(&self, source: &Path, temporary: &Path) -> Result<(u32, u32), PipelineError> {
        let image = decode(source)?;
        let dimensions = image.dimensions();

        if let Err(e) = self.write_jpeg(&image, temporary) {
            if let Err(cleanup) = remove_if_present(temporary) {
                tracing::warn!("Could not remove partial {:?}: {}", temporary, cleanup);
            }
            return Err(e);
        }

        tracing::trace!(
            "Re-encoded {:?} -> {:?} at quality {}",
            source,
            temporary,
            self.quality
        );
        Ok(dimensions)
    }

    fn write_jpeg(&self, image: &DynamicImage, path: &Path) -> Result<(), PipelineError> {
        let encode_err = |message: String| PipelineError::Encode {
            path: path.to_path_buf(),
            message,
        };

        let file = File::create(path).map_err(|e| encode_err(e.to_string()))?;
        let mut writer = BufWriter::new(file);
        let encoder = JpegEncoder::new_with_quality(&mut writer, self.quality);
        jpeg_compatible(image)
            .write_with_encoder(encoder)
            .map_err(|e| encode_err(e.to_string()))?;
        writer.flush().map_err(|e| encode_err(e.to_string()))
    }
}

/// Decode an image, choosing the codec from the file extension.
pub(crate) fn decode(path: &Path) -> Result<DynamicImage, PipelineError> {
    let decode_err = |message: String| PipelineError::Decode {
        path: path.to_path_buf(),
        message,
    };
    ImageReader::open(path)
        .map_err(|e| decode_err(format!("Cannot open file: {}", e)))?
        .decode()
        .map_err(|e| decode_err(e.to_string()))
}

/// Convert rasters the JPEG encoder rejects into 8-bit luma or RGB.
///
/// Alpha is dropped and 16/32-bit channels are narrowed; dimensions never change.
fn jpeg_compatible(image: &DynamicImage) -> std::borrow::Cow<'_, DynamicImage> {
    use std::borrow::Cow;

    match image.color() {
        ColorType::L8 | ColorType::Rgb8 => Cow::Borrowed(image),
        ColorType::La8 | ColorType::L16 | ColorType::La16 => {
            Cow::Owned(DynamicImage::ImageLuma8(image.to_luma8()))
        }
        _ => Cow::Owned(DynamicImage::ImageRgb8(image.to_rgb8())),
    }
}

/// Check that this build can decode PNG and encode JPEG.
pub fn ensure_codecs() -> Result<(), PipelineError> {
    if !ImageFormat::Png.reading_enabled() {
        return Err(PipelineError::EncoderUnavailable {
            format: "png",
            direction: "decoder",
        });
    }
    if !ImageFormat::Jpeg.writing_enabled() || !ImageFormat::Jpeg.reading_enabled() {
        return Err(PipelineError::EncoderUnavailable {
            format: "jpeg",
            direction: "encoder",
        });
    }
    Ok(())
}

//! Fixed-size resize of the temporary JPEG into the final output.

use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};
use std::path::Path;

use crate::config::ConversionConfig;
use crate::error::PipelineError;

use super::cleanup::remove_if_present;
use super::reencode::decode;

/// Stretches images to an exact output size.
///
/// Aspect ratio is not preserved: a 400×300 source and a 300×400 source
/// both come out at exactly `width × height`.
pub struct Resizer {
    width: u32,
    height: u32,
    filter: FilterType,
}

impl Resizer {
    /// Create a resizer from the conversion settings.
    pub fn new(config: &ConversionConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            filter: config.filter.into(),
        }
    }

    /// Target dimensions.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Scale a raster to exactly the target size, keeping its pixel layout.
    pub fn resize(&self, image: &DynamicImage) -> DynamicImage {
        image.resize_exact(self.width, self.height, self.filter)
    }

    /// Read `input`, resize it, and write `output` in the format its
    /// extension implies, with that encoder's default settings.
    ///
    /// Nothing is written when `input` can't be read. A partially-written
    /// `output` is removed if encoding fails.
    pub fn resize_file(&self, input: &Path, output: &Path) -> Result<(u32, u32), PipelineError> {
        let format = ImageFormat::from_path(output).map_err(|_| {
            PipelineError::UnsupportedOutput {
                path: output.to_path_buf(),
            }
        })?;
        let source = decode(input)?;
        let resized = self.resize(&source);
        drop(source);

        if let Err(e) = resized.save_with_format(output, format) {
            if let Err(cleanup) = remove_if_present(output) {
                tracing::warn!("Could not remove partial {:?}: {}", output, cleanup);
            }
            return Err(PipelineError::Encode {
                path: output.to_path_buf(),
                message: e.to_string(),
            });
        }

        Ok((resized.width(), resized.height()))
    }
}

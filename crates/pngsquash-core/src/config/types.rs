//! Sub-configuration structs and their defaults.

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Directory tree scanned for PNG files (`~` is expanded)
    pub root_dir: PathBuf,

    /// Follow symbolic links while walking the tree
    pub follow_links: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("~/MeasurementImages"),
            follow_links: false,
        }
    }
}

/// Conversion settings for the re-encode and resize stages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// JPEG quality factor on a 0-1 scale for the re-encode stage
    pub quality: f32,

    /// Output width in pixels
    pub width: u32,

    /// Output height in pixels
    pub height: u32,

    /// Resampling filter used when stretching to the output size
    pub filter: ResizeFilter,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            quality: 0.3,
            width: 1200,
            height: 900,
            filter: ResizeFilter::default(),
        }
    }
}

impl ConversionConfig {
    /// Quality factor mapped onto the JPEG encoder's 1-100 scale.
    pub fn jpeg_quality(&self) -> u8 {
        (self.quality * 100.0).round().clamp(1.0, 100.0) as u8
    }
}

/// Resampling filter for the resize stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeFilter {
    /// Nearest neighbour, the cheapest and blockiest
    #[default]
    Nearest,
    /// Linear
    Triangle,
    /// Cubic
    CatmullRom,
    /// Gaussian
    Gaussian,
    /// Lanczos with window 3
    Lanczos3,
}

impl From<ResizeFilter> for FilterType {
    fn from(filter: ResizeFilter) -> Self {
        match filter {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

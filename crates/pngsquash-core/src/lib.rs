//! pngsquash core - batch PNG to JPEG conversion.
//!
//! Every PNG under a root directory is re-encoded as a low-quality JPEG,
//! stretched to a fixed size, and written next to the source:
//!
//! ```text
//! a.png → a_temp.jpg (quality 0.3) → a.jpg (1200×900) ; a_temp.jpg removed
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use pngsquash_core::{Config, ConversionEvent, ImageConverter};
//!
//! fn main() -> pngsquash_core::Result<()> {
//!     let config = Config::load()?;
//!     let converter = ImageConverter::new(&config)?;
//!
//!     let mut log = |event: &ConversionEvent| println!("{event:?}");
//!     let summary = converter.run(&config.root_dir(), &mut log)?;
//!     println!("converted {} file(s)", summary.converted);
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod pipeline;
pub mod types;

// Re-exports for convenient access
pub use config::Config;
pub use error::{ConfigError, PipelineError, PngSquashError, Result};
pub use pipeline::{ConversionEvent, ConversionObserver, ConversionPaths, ImageConverter};
pub use types::{FileReport, FileStatus, RunSummary, Stage};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}

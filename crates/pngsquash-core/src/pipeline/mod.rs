//! PNG to JPEG conversion pipeline.
//!
//! - **paths**: derive output and temporary paths, classify candidates
//! - **discovery**: walk the root directory
//! - **reencode**: PNG to lossy temporary JPEG
//! - **resize**: temporary JPEG to fixed-size final JPEG
//! - **cleanup**: temporary file removal
//! - **events**: observer interface for progress reporting
//! - **converter**: orchestrates the stages per file

pub mod cleanup;
pub mod converter;
pub mod discovery;
pub mod events;
pub mod paths;
pub mod reencode;
pub mod resize;

// Re-exports for convenient access
pub use cleanup::TemporaryFile;
pub use converter::ImageConverter;
pub use discovery::FileDiscovery;
pub use events::{ConversionEvent, ConversionObserver, NoopObserver};
pub use paths::{classify, is_png_candidate, ConversionPaths};
pub use reencode::ReEncoder;
pub use resize::Resizer;

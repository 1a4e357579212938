//! Progress events emitted while converting.
//!
//! The pipeline never prints. Callers implement [`ConversionObserver`] (or
//! pass a closure) and render events however they like.

use std::path::PathBuf;

use crate::types::Stage;

/// Something that happened to one discovered file.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionEvent {
    /// A file was not a PNG candidate
    Skipped { path: PathBuf },

    /// Conversion of a PNG candidate began
    Started { source: PathBuf, output: PathBuf },

    /// The temporary JPEG was written
    ReEncoded {
        source: PathBuf,
        temporary: PathBuf,
        quality: u8,
    },

    /// The final JPEG was written
    Succeeded {
        source: PathBuf,
        output: PathBuf,
        width: u32,
        height: u32,
    },

    /// A stage failed and the rest of this file's pipeline was skipped
    Failed {
        source: PathBuf,
        stage: Stage,
        message: String,
    },

    /// The temporary JPEG could not be removed
    CleanupFailed { temporary: PathBuf, message: String },
}

/// Receives conversion events in processing order.
pub trait ConversionObserver {
    fn on_event(&mut self, event: &ConversionEvent);
}

impl<F> ConversionObserver for F
where
    F: FnMut(&ConversionEvent),
{
    fn on_event(&mut self, event: &ConversionEvent) {
        self(event)
    }
}

/// Observer that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ConversionObserver for NoopObserver {
    fn on_event(&mut self, _event: &ConversionEvent) {}
}

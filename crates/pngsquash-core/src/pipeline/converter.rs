//! Pipeline orchestration: discovery, re-encode, resize, cleanup.

use std::path::Path;
use std::time::Instant;

use crate::config::Config;
use crate::error::PipelineError;
use crate::types::{FileReport, FileStatus, RunSummary, Stage};

use super::cleanup::TemporaryFile;
use super::discovery::FileDiscovery;
use super::events::{ConversionEvent, ConversionObserver};
use super::paths::{classify, ConversionPaths};
use super::reencode::{ensure_codecs, ReEncoder};
use super::resize::Resizer;

/// Converts PNG files into resized, compressed JPEGs.
///
/// Each file goes through `re-encode -> resize -> cleanup` before the next
/// one is touched. Per-file failures are reported, never returned.
pub struct ImageConverter {
    reencoder: ReEncoder,
    resizer: Resizer,
    discovery: FileDiscovery,
}

impl ImageConverter {
    /// Create a converter with the given configuration.
    ///
    /// Fails if this build cannot decode PNG or encode JPEG.
    pub fn new(config: &Config) -> Result<Self, PipelineError> {
        ensure_codecs()?;
        Ok(Self {
            reencoder: ReEncoder::new(config.conversion.jpeg_quality()),
            resizer: Resizer::new(&config.conversion),
            discovery: FileDiscovery::new(&config.general),
        })
    }

    /// Walk `root` and convert every PNG candidate found.
    ///
    /// Returns an error only for fatal conditions: a missing root or a
    /// traversal failure. Files already processed keep their outputs.
    pub fn run(
        &self,
        root: &Path,
        observer: &mut dyn ConversionObserver,
    ) -> Result<RunSummary, PipelineError> {
        if !root.exists() {
            return Err(PipelineError::RootNotFound(root.to_path_buf()));
        }

        let start = Instant::now();
        let mut summary = RunSummary::new(root.to_path_buf());
        tracing::debug!("Walking {:?}", root);

        for entry in self.discovery.discover(root) {
            let path = entry?;
            summary.discovered += 1;

            match classify(&path) {
                Some(paths) => summary.record(self.convert_file(&paths, observer)),
                None => {
                    summary.skipped += 1;
                    observer.on_event(&ConversionEvent::Skipped { path });
                }
            }
        }

        summary.elapsed_ms = start.elapsed().as_millis() as u64;
        tracing::debug!(
            "Walk of {:?} done: {} converted, {} failed, {} skipped",
            root,
            summary.converted,
            summary.failed,
            summary.skipped
        );
        Ok(summary)
    }

    /// Run one file through the full pipeline.
    ///
    /// Always reads from `paths.source`, never from a previous output, and
    /// always removes `paths.temporary` before returning.
    pub fn convert_file(
        &self,
        paths: &ConversionPaths,
        observer: &mut dyn ConversionObserver,
    ) -> FileReport {
        let start = Instant::now();
        observer.on_event(&ConversionEvent::Started {
            source: paths.source.clone(),
            output: paths.output.clone(),
        });

        let temporary = TemporaryFile::new(paths.temporary.clone());
        let status = self.run_stages(paths, &temporary, observer);

        let cleanup_error = match temporary.remove() {
            Ok(removed) => {
                if removed {
                    tracing::trace!("Removed {:?}", paths.temporary);
                }
                None
            }
            Err(e) => {
                let message = e.to_string();
                observer.on_event(&ConversionEvent::CleanupFailed {
                    temporary: paths.temporary.clone(),
                    message: message.clone(),
                });
                Some(message)
            }
        };

        match &status {
            FileStatus::Converted { width, height } => {
                tracing::debug!("Converted {:?} in {:?}", paths.source, start.elapsed());
                observer.on_event(&ConversionEvent::Succeeded {
                    source: paths.source.clone(),
                    output: paths.output.clone(),
                    width: *width,
                    height: *height,
                });
            }
            FileStatus::Failed { stage, message } => {
                observer.on_event(&ConversionEvent::Failed {
                    source: paths.source.clone(),
                    stage: *stage,
                    message: message.clone(),
                });
            }
        }

        FileReport {
            source: paths.source.clone(),
            output: paths.output.clone(),
            status,
            cleanup_error,
        }
    }

    fn run_stages(
        &self,
        paths: &ConversionPaths,
        temporary: &TemporaryFile,
        observer: &mut dyn ConversionObserver,
    ) -> FileStatus {
        if let Err(e) = self.reencoder.reencode(&paths.source, temporary.path()) {
            return FileStatus::Failed {
                stage: Stage::ReEncode,
                message: e.to_string(),
            };
        }
        observer.on_event(&ConversionEvent::ReEncoded {
            source: paths.source.clone(),
            temporary: paths.temporary.clone(),
            quality: self.reencoder.quality(),
        });

        match self.resizer.resize_file(temporary.path(), &paths.output) {
            Ok((width, height)) => FileStatus::Converted { width, height },
            Err(e) => FileStatus::Failed {
                stage: Stage::Resize,
                message: e.to_string(),
            },
        }
    }

    /// Output dimensions every converted file ends up with.
    pub fn output_dimensions(&self) -> (u32, u32) {
        self.resizer.dimensions()
    }
}

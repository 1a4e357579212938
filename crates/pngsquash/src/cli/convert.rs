//! The `pngsquash convert` command.

use clap::{Args, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use pngsquash_core::config::ResizeFilter;
use pngsquash_core::{Config, ConversionEvent, ConversionObserver, ImageConverter, RunSummary};
use std::path::PathBuf;
use std::time::Duration;

/// Arguments for the `convert` command.
#[derive(Args, Debug, Default)]
pub struct ConvertArgs {
    /// Directory tree to convert (defaults to general.root_dir)
    pub root: Option<PathBuf>,

    /// JPEG quality factor for the re-encode stage, 0 < q <= 1
    #[arg(short, long)]
    pub quality: Option<f32>,

    /// Output width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Output height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Resampling filter for the resize stage
    #[arg(long, value_enum)]
    pub filter: Option<FilterArg>,

    /// Follow symbolic links while walking the tree
    #[arg(long)]
    pub follow_links: bool,

    /// Print the run summary as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

/// Resampling filters selectable from the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FilterArg {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<FilterArg> for ResizeFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::Nearest => ResizeFilter::Nearest,
            FilterArg::Triangle => ResizeFilter::Triangle,
            FilterArg::CatmullRom => ResizeFilter::CatmullRom,
            FilterArg::Gaussian => ResizeFilter::Gaussian,
            FilterArg::Lanczos3 => ResizeFilter::Lanczos3,
        }
    }
}

/// Execute the convert command.
pub fn execute(args: ConvertArgs, config: Config) -> anyhow::Result<()> {
    let config = apply_overrides(config, &args)?;
    let root = args.root.clone().unwrap_or_else(|| config.root_dir());

    let converter = ImageConverter::new(&config)?;
    let (width, height) = converter.output_dimensions();
    tracing::info!(
        "Converting PNGs under {:?} to {}x{} JPEG (quality {})",
        root,
        width,
        height,
        config.conversion.quality
    );

    let mut reporter = ConsoleReporter::new();
    let result = converter.run(&root, &mut reporter);
    reporter.finish();
    let summary = result?;

    print_summary(&summary);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }
    Ok(())
}

/// Merge command-line values over the loaded config and re-validate.
fn apply_overrides(mut config: Config, args: &ConvertArgs) -> anyhow::Result<Config> {
    if let Some(quality) = args.quality {
        config.conversion.quality = quality;
    }
    if let Some(width) = args.width {
        config.conversion.width = width;
    }
    if let Some(height) = args.height {
        config.conversion.height = height;
    }
    if let Some(filter) = args.filter {
        config.conversion.filter = filter.into();
    }
    if args.follow_links {
        config.general.follow_links = true;
    }
    config.validate()?;
    Ok(config)
}

/// Renders conversion events as log lines around a spinner.
struct ConsoleReporter {
    progress: ProgressBar,
    processed: u64,
}

impl ConsoleReporter {
    fn new() -> Self {
        let progress = ProgressBar::new_spinner();
        progress.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {pos} converted {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        progress.enable_steady_tick(Duration::from_millis(120));
        Self {
            progress,
            processed: 0,
        }
    }

    fn finish(&self) {
        self.progress.finish_and_clear();
    }
}

impl ConversionObserver for ConsoleReporter {
    fn on_event(&mut self, event: &ConversionEvent) {
        let progress = &self.progress;
        match event {
            ConversionEvent::Skipped { path } => {
                tracing::trace!("Skipping {:?}", path);
            }
            ConversionEvent::Started { source, output } => {
                let name = source.file_name().unwrap_or(source.as_os_str());
                progress.set_message(name.to_string_lossy().into_owned());
                progress.suspend(|| tracing::debug!("Converting {:?} => {:?}", source, output));
            }
            ConversionEvent::ReEncoded {
                temporary, quality, ..
            } => {
                tracing::trace!("Wrote {:?} at quality {}", temporary, quality);
            }
            ConversionEvent::Succeeded {
                source,
                output,
                width,
                height,
            } => {
                self.processed += 1;
                progress.set_position(self.processed);
                progress.suspend(|| {
                    tracing::info!("Converted {:?} => {:?} ({}x{})", source, output, width, height)
                });
            }
            ConversionEvent::Failed {
                source,
                stage,
                message,
            } => {
                progress.suspend(|| tracing::error!("Failed {:?} at {}: {}", source, stage, message));
            }
            ConversionEvent::CleanupFailed { temporary, message } => {
                progress.suspend(|| {
                    tracing::warn!("Could not delete temporary {:?}: {}", temporary, message)
                });
            }
        }
    }
}

/// Print a formatted summary table after a run.
fn print_summary(summary: &RunSummary) {
    let elapsed = summary.elapsed_ms as f64 / 1000.0;

    eprintln!();
    eprintln!("  ====================================");
    eprintln!("               Summary");
    eprintln!("  ====================================");
    eprintln!("    Converted:    {:>8}", summary.converted);
    if summary.failed > 0 {
        eprintln!("    Failed:       {:>8}", summary.failed);
    }
    eprintln!("    Skipped:      {:>8}", summary.skipped);
    eprintln!("  ------------------------------------");
    eprintln!("    Files seen:   {:>8}", summary.discovered);
    eprintln!("    Duration:     {:>7.1}s", elapsed);
    eprintln!("  ====================================");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_config_values() {
        let args = ConvertArgs {
            quality: Some(0.8),
            width: Some(640),
            filter: Some(FilterArg::Lanczos3),
            follow_links: true,
            ..ConvertArgs::default()
        };

        let config = apply_overrides(Config::default(), &args).unwrap();
        assert!((config.conversion.quality - 0.8).abs() < f32::EPSILON);
        assert_eq!(config.conversion.width, 640);
        assert_eq!(config.conversion.height, 900);
        assert_eq!(config.conversion.filter, ResizeFilter::Lanczos3);
        assert!(config.general.follow_links);
    }

    #[test]
    fn test_overrides_are_validated() {
        let args = ConvertArgs {
            quality: Some(3.0),
            ..ConvertArgs::default()
        };
        assert!(apply_overrides(Config::default(), &args).is_err());
    }

    #[test]
    fn test_execute_converts_tree() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("readme.txt"), "hi").unwrap();
        image::RgbImage::new(8, 6)
            .save(dir.path().join("a.png"))
            .unwrap();

        let args = ConvertArgs {
            root: Some(dir.path().to_path_buf()),
            width: Some(32),
            height: Some(24),
            ..ConvertArgs::default()
        };
        execute(args, Config::default()).unwrap();

        assert!(dir.path().join("a.jpg").exists());
        assert!(!dir.path().join("a_temp.jpg").exists());
        assert!(!dir.path().join("readme.jpg").exists());
    }

    #[test]
    fn test_execute_missing_root_fails() {
        let dir = tempfile::tempdir().unwrap();
        let args = ConvertArgs {
            root: Some(dir.path().join("nowhere")),
            ..ConvertArgs::default()
        };
        assert!(execute(args, Config::default()).is_err());
    }
}

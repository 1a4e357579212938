//! End-to-end runs over generated directory trees.

use image::{GenericImageView, Rgb, RgbImage, Rgba, RgbaImage};
use pngsquash_core::pipeline::NoopObserver;
use pngsquash_core::{
    Config, ConversionEvent, FileStatus, ImageConverter, PipelineError, RunSummary, Stage,
};
use std::path::Path;

fn gradient_png(path: &Path, width: u32, height: u32) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    })
    .save(path)
    .unwrap();
}

fn run(root: &Path) -> RunSummary {
    let converter = ImageConverter::new(&Config::default()).unwrap();
    converter.run(root, &mut NoopObserver).unwrap()
}

#[test]
fn converts_png_and_ignores_other_files() {
    let dir = tempfile::tempdir().unwrap();
    gradient_png(&dir.path().join("a.png"), 400, 300);
    std::fs::write(dir.path().join("b.txt"), "leave me alone").unwrap();

    let summary = run(dir.path());

    assert_eq!(summary.discovered, 2);
    assert_eq!(summary.converted, 1);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.failed, 0);

    let output = image::open(dir.path().join("a.jpg")).unwrap();
    assert_eq!(output.dimensions(), (1200, 900));
    assert!(!dir.path().join("a_temp.jpg").exists());
    assert!(!dir.path().join("b.jpg").exists());
    assert_eq!(
        std::fs::read_to_string(dir.path().join("b.txt")).unwrap(),
        "leave me alone"
    );
}

#[test]
fn corrupt_png_leaves_nothing_behind() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("bad.png"), b"not an image").unwrap();
    gradient_png(&dir.path().join("good.png"), 20, 20);

    let summary = run(dir.path());

    assert_eq!(summary.converted, 1);
    assert_eq!(summary.failed, 1);
    assert!(!dir.path().join("bad.jpg").exists());
    assert!(!dir.path().join("bad_temp.jpg").exists());
    assert!(dir.path().join("good.jpg").exists());

    let bad = summary
        .files
        .iter()
        .find(|r| r.source.ends_with("bad.png"))
        .unwrap();
    assert!(matches!(
        bad.status,
        FileStatus::Failed {
            stage: Stage::ReEncode,
            ..
        }
    ));
}

#[test]
fn rerun_reads_from_source_and_keeps_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    gradient_png(&dir.path().join("a.png"), 400, 300);

    let first = run(dir.path());
    let second = run(dir.path());

    // The first run's a.jpg is discovered on the second pass but never used as input
    assert_eq!(first.converted, 1);
    assert_eq!(second.converted, 1);
    assert_eq!(second.discovered, 2);
    assert_eq!(second.files[0].source, dir.path().join("a.png"));
    assert_eq!(
        image::open(dir.path().join("a.jpg")).unwrap().dimensions(),
        (1200, 900)
    );
}

#[test]
fn nested_outputs_land_next_to_sources() {
    let dir = tempfile::tempdir().unwrap();
    gradient_png(&dir.path().join("2024/march/scan.png"), 50, 80);
    gradient_png(&dir.path().join("top.png"), 16, 16);
    std::fs::copy(dir.path().join("top.png"), dir.path().join("skip.PNG")).unwrap();
    std::fs::copy(dir.path().join("top.png"), dir.path().join("old.png.bak")).unwrap();

    let summary = run(dir.path());

    assert_eq!(summary.converted, 2);
    assert_eq!(summary.skipped, 2);
    assert!(dir.path().join("2024/march/scan.jpg").exists());
    assert!(dir.path().join("top.jpg").exists());
    assert!(!dir.path().join("skip.jpg").exists());
    assert!(!dir.path().join("2024/march/scan_temp.jpg").exists());
}

#[test]
fn alpha_png_is_flattened() {
    let dir = tempfile::tempdir().unwrap();
    RgbaImage::from_pixel(30, 20, Rgba([10, 20, 30, 0]))
        .save(dir.path().join("transparent.png"))
        .unwrap();

    let summary = run(dir.path());

    assert_eq!(summary.converted, 1);
    let output = image::open(dir.path().join("transparent.jpg")).unwrap();
    assert_eq!(output.dimensions(), (1200, 900));
}

#[test]
fn observer_sees_every_file() {
    let dir = tempfile::tempdir().unwrap();
    gradient_png(&dir.path().join("a.png"), 10, 10);
    std::fs::write(dir.path().join("notes.md"), "# notes").unwrap();

    let converter = ImageConverter::new(&Config::default()).unwrap();
    let mut events = Vec::new();
    let mut observer = |event: &ConversionEvent| events.push(event.clone());
    converter.run(dir.path(), &mut observer).unwrap();

    assert!(events.iter().any(|e| matches!(
        e,
        ConversionEvent::Succeeded {
            width: 1200,
            height: 900,
            ..
        }
    )));
    assert!(events
        .iter()
        .any(|e| matches!(e, ConversionEvent::Skipped { path } if path.ends_with("notes.md"))));
}

#[test]
fn missing_root_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let converter = ImageConverter::new(&Config::default()).unwrap();

    let err = converter
        .run(&dir.path().join("MeasurementImages"), &mut NoopObserver)
        .unwrap_err();
    assert!(matches!(err, PipelineError::RootNotFound(_)));
}

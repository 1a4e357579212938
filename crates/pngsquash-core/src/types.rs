//! Report types produced by a conversion run.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Pipeline stage a per-file failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// PNG decode and lossy JPEG re-encode
    ReEncode,
    /// Temporary JPEG decode, resize and final write
    Resize,
    /// Temporary file removal
    Cleanup,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::ReEncode => write!(f, "re-encode"),
            Stage::Resize => write!(f, "resize"),
            Stage::Cleanup => write!(f, "cleanup"),
        }
    }
}

/// Terminal state of one file's conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileStatus {
    /// The final JPEG was written
    Converted { width: u32, height: u32 },
    /// A stage failed; no final JPEG was produced by this run
    Failed { stage: Stage, message: String },
}

/// Outcome of converting a single source image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    /// Source PNG
    pub source: PathBuf,

    /// Final JPEG path (written only when converted)
    pub output: PathBuf,

    #[serde(flatten)]
    pub status: FileStatus,

    /// Set when the temporary file could not be removed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleanup_error: Option<String>,
}

impl FileReport {
    /// Whether the final JPEG was produced.
    pub fn is_converted(&self) -> bool {
        matches!(self.status, FileStatus::Converted { .. })
    }
}

/// Aggregate result of walking one root directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSummary {
    /// Root directory that was walked
    pub root: PathBuf,

    /// Regular files seen during traversal
    pub discovered: u64,

    /// Files that were not PNG candidates
    pub skipped: u64,

    /// PNG files converted successfully
    pub converted: u64,

    /// PNG files whose pipeline failed
    pub failed: u64,

    /// Wall-clock duration of the run
    pub elapsed_ms: u64,

    /// One entry per PNG candidate, in processing order
    pub files: Vec<FileReport>,
}

impl RunSummary {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            ..Self::default()
        }
    }

    /// Fold a file report into the counters.
    pub fn record(&mut self, report: FileReport) {
        if report.is_converted() {
            self.converted += 1;
        } else {
            self.failed += 1;
        }
        self.files.push(report);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(status: FileStatus) -> FileReport {
        FileReport {
            source: PathBuf::from("/photos/a.png"),
            output: PathBuf::from("/photos/a.jpg"),
            status,
            cleanup_error: None,
        }
    }

    #[test]
    fn test_summary_counts() {
        let mut summary = RunSummary::new(PathBuf::from("/photos"));
        summary.record(report(FileStatus::Converted {
            width: 1200,
            height: 900,
        }));
        summary.record(report(FileStatus::Failed {
            stage: Stage::ReEncode,
            message: "corrupt".into(),
        }));

        assert_eq!(summary.converted, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.files.len(), 2);
    }

    #[test]
    fn test_report_serializes_flat_status() {
        let json = serde_json::to_value(report(FileStatus::Failed {
            stage: Stage::Resize,
            message: "unreadable".into(),
        }))
        .unwrap();

        assert_eq!(json["status"], "failed");
        assert_eq!(json["stage"], "resize");
        assert!(json.get("cleanup_error").is_none());
    }
}

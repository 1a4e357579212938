//! Recursive file discovery under the root directory.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::GeneralConfig;
use crate::error::PipelineError;

/// Walks a directory tree and yields every regular file in it.
pub struct FileDiscovery {
    follow_links: bool,
}

impl FileDiscovery {
    /// Create a new file discovery instance.
    pub fn new(config: &GeneralConfig) -> Self {
        Self {
            follow_links: config.follow_links,
        }
    }

    /// Lazily enumerate regular files under `root`, sorted by file name
    /// within each directory.
    ///
    /// Files are yielded one at a time so conversion can start before the
    /// walk finishes. Traversal errors are yielded in place and are fatal to
    /// the caller.
    pub fn discover<'a>(
        &self,
        root: &'a Path,
    ) -> impl Iterator<Item = Result<PathBuf, PipelineError>> + 'a {
        WalkDir::new(root)
            .follow_links(self.follow_links)
            .sort_by_file_name()
            .into_iter()
            .filter_map(move |entry| match entry {
                // `Path::is_file` follows symlinks, so linked files count as regular files
                Ok(entry) if entry.path().is_file() => Some(Ok(entry.into_path())),
                Ok(_) => None,
                Err(e) => Some(Err(PipelineError::Traversal {
                    path: e.path().unwrap_or(root).to_path_buf(),
                    message: e.to_string(),
                })),
            })
    }
}

//! Output and temporary path derivation for source images.
//!
//! A file name qualifies only when it has exactly one `.` separating a
//! non-empty stem from a non-empty extension. `a.png` qualifies,
//! `a.png.bak`, `.png` and `a` do not.

use std::path::{Path, PathBuf};

/// Extension a source file must carry, compared case-sensitively.
pub const SOURCE_EXTENSION: &str = "png";

/// Extension of the final and temporary outputs.
pub const OUTPUT_EXTENSION: &str = "jpg";

/// Appended to the stem of the temporary JPEG.
pub const TEMP_SUFFIX: &str = "_temp";

/// The three paths involved in converting one source image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionPaths {
    /// Source PNG
    pub source: PathBuf,
    /// Final JPEG, `<stem>.jpg` next to the source
    pub output: PathBuf,
    /// Temporary JPEG, `<stem>_temp.jpg` next to the source
    pub temporary: PathBuf,
}

impl ConversionPaths {
    /// Derive output and temporary paths for `source`.
    ///
    /// Returns `None` if the file name doesn't have exactly one extension
    /// separator.
    pub fn derive(source: &Path) -> Option<Self> {
        let name = source.file_name()?.to_str()?;
        let (stem, _) = split_name(name)?;

        Some(Self {
            source: source.to_path_buf(),
            output: source.with_extension(OUTPUT_EXTENSION),
            temporary: source.with_file_name(format!("{stem}{TEMP_SUFFIX}.{OUTPUT_EXTENSION}")),
        })
    }
}

/// Split a file name into stem and extension.
///
/// Only names with exactly one `.` and text on both sides split.
pub fn split_name(file_name: &str) -> Option<(&str, &str)> {
    if file_name.matches('.').count() != 1 {
        return None;
    }
    let name = Path::new(file_name);
    let stem = name.file_stem()?.to_str()?;
    let extension = name.extension()?.to_str()?;
    if stem.is_empty() || extension.is_empty() {
        return None;
    }
    Some((stem, extension))
}

/// Extension of a path's file name, under the single-dot rule.
pub fn extension(path: &Path) -> Option<&str> {
    let name = path.file_name()?.to_str()?;
    split_name(name).map(|(_, ext)| ext)
}

/// Check whether a path names a PNG conversion candidate.
pub fn is_png_candidate(path: &Path) -> bool {
    extension(path) == Some(SOURCE_EXTENSION)
}

/// Derive conversion paths for PNG candidates, `None` for everything else.
pub fn classify(path: &Path) -> Option<ConversionPaths> {
    if is_png_candidate(path) {
        ConversionPaths::derive(path)
    } else {
        None
    }
}

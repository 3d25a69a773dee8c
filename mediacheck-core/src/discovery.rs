//! File discovery module for finding media files to check.
//!
//! Files are selected purely by their (case-insensitive) extension; content is
//! not inspected until a checker runs. The order of the returned paths is the
//! traversal order reported by the file system, which is also the order the
//! results appear in the report.

use crate::config::{SUPPORTED_IMAGE_EXTENSIONS, SUPPORTED_VIDEO_EXTENSIONS};
use crate::error::{CoreError, CoreResult};

use std::fmt;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// The kind of media a file is treated as, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classifies a path by its lowercased extension.
    ///
    /// Returns `None` for files that are neither a supported image nor a
    /// supported video.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = lowercase_extension(path)?;
        if SUPPORTED_IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            Some(MediaKind::Image)
        } else if SUPPORTED_VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            Some(MediaKind::Video)
        } else {
            None
        }
    }

    /// Upper-case label used in the report's type column.
    pub fn label(&self) -> &'static str {
        match self {
            MediaKind::Image => "IMAGE",
            MediaKind::Video => "VIDEO",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returns the extension of `path` in lowercase, without the leading dot.
pub fn lowercase_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
}

/// Finds media files in `root`, descending into subdirectories when
/// `recursive` is set.
///
/// # Arguments
///
/// * `root` - The directory to scan
/// * `recursive` - Whether to include files in subdirectories
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` - Paths of all supported media files, possibly empty
/// * `Err(CoreError::InvalidDirectory)` - If `root` is not a directory
/// * `Err(CoreError::Walkdir)` - If `root` itself cannot be read
///
/// Unreadable entries below the root are logged and skipped. A directory's
/// own files are listed before anything inside its subdirectories.
///
/// # Examples
///
/// ```rust,no_run
/// use mediacheck_core::find_media_files;
/// use std::path::Path;
///
/// let files = find_media_files(Path::new("/path/to/photos"), true).unwrap();
/// println!("Found {} media files", files.len());
/// ```
pub fn find_media_files(root: &Path, recursive: bool) -> CoreResult<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(CoreError::InvalidDirectory(root.to_path_buf()));
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut files = Vec::new();

    // Files of a directory come before its subdirectories; read_dir order is
    // kept within each group.
    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(max_depth)
        .sort_by(|a, b| a.file_type().is_dir().cmp(&b.file_type().is_dir()));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            // Failing to list the root itself means there is nothing to scan.
            Err(e) if e.depth() == 0 => return Err(e.into()),
            Err(e) => {
                log::warn!("Skipping unreadable entry during scan: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        if MediaKind::from_path(entry.path()).is_some() {
            files.push(entry.into_path());
        }
    }

    log::debug!(
        "Discovered {} media files in {} ({})",
        files.len(),
        root.display(),
        if recursive { "recursive" } else { "top level" }
    );
    Ok(files)
}

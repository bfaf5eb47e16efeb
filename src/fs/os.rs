//! Real filesystem backed by `std::fs`

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

use super::{Classification, EntryMetadata, FileSystem};

/// The host filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl OsFileSystem {
    fn entry_metadata(meta: &fs::Metadata) -> EntryMetadata {
        #[cfg(unix)]
        let mode = Some(meta.permissions().mode());
        #[cfg(not(unix))]
        let mode = None;

        EntryMetadata {
            len: meta.len(),
            readonly: meta.permissions().readonly(),
            mode,
        }
    }
}

impl FileSystem for OsFileSystem {
    fn classify(&self, path: &Path) -> Classification {
        let is_symlink = path.is_symlink();

        // Follows symlinks; a dangling link lands in the error arm
        let meta = match fs::metadata(path) {
            Ok(m) => m,
            Err(e) => {
                log::trace!("cannot stat '{}': {}", path.display(), e);
                return Classification::inaccessible().with_symlink(is_symlink);
            }
        };

        let metadata = Self::entry_metadata(&meta);
        // Sockets, fifos and devices are listed like files
        let classification = if meta.is_dir() {
            Classification::directory(metadata)
        } else {
            Classification::file(metadata)
        };
        classification.with_symlink(is_symlink)
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        let entries = fs::read_dir(path)?;
        Ok(entries.filter_map(|e| e.ok()).map(|e| e.path()).collect())
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}

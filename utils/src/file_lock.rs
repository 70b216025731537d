//! Advisory locks on sidecar `.lock` files.
//!
//! The data file itself is replaced by rename on every write, so it cannot
//! carry the lock. A stable sidecar next to it does.

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Held for as long as the exclusive lock should last. Unlocks on drop.
#[derive(Debug)]
pub struct FileLockGuard {
    file: File,
    path: PathBuf,
}

impl FileLockGuard {
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for FileLockGuard {
    fn drop(&mut self) {
        if let Err(e) = self.file.unlock() {
            debug!(path = %self.path.display(), "Unlock failed (released on close): {e}");
        }
    }
}

/// `analytics.json` -> `analytics.json.lock`
#[must_use]
pub fn lock_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("counters"));
    name.push(".lock");
    path.with_file_name(name)
}

/// Block until an exclusive lock on `lock_path` is held.
///
/// Creates the lock file (and its parent directory) if needed.
pub fn lock_exclusive(lock_path: &Path) -> io::Result<FileLockGuard> {
    if let Some(parent) = lock_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(lock_path)?;
    file.lock()?;
    Ok(FileLockGuard {
        file,
        path: lock_path.to_path_buf(),
    })
}

//! Crash-safe whole-file replacement.
//!
//! Bytes go to a temp file in the target's directory, which is then renamed
//! over the target. Where rename cannot replace an existing file, the old
//! file is parked at `<name>.bak` for the duration of the swap and
//! [`restore_backup`] puts it back if the process dies in between.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// How hard to push bytes to disk before returning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Durability {
    /// `fsync` the new file, then best-effort `fsync` its directory.
    #[default]
    Synced,
    /// Rename only. For tests and scratch files.
    Unsynced,
}

/// `analytics.json` -> `analytics.bak`
#[must_use]
pub fn backup_path_for(path: &Path) -> PathBuf {
    path.with_extension("bak")
}

/// Put `<name>.bak` back in place if a swap was interrupted.
///
/// Returns true when a backup was restored. Does nothing while the target
/// exists.
pub fn restore_backup(path: &Path) -> bool {
    let backup = backup_path_for(path);
    if path.exists() || !backup.exists() {
        return false;
    }
    match fs::rename(&backup, path) {
        Ok(()) => {
            warn!(path = %path.display(), "Restored backup left by an interrupted write");
            true
        }
        Err(e) => {
            warn!(path = %path.display(), "Failed to restore backup: {e}");
            false
        }
    }
}

fn directory_of(path: &Path) -> &Path {
    path.parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}

fn sync_directory(dir: &Path) {
    #[cfg(unix)]
    {
        if let Err(e) = File::open(dir).and_then(|d| d.sync_all()) {
            debug!(path = %dir.display(), "Directory sync failed (best-effort): {e}");
        }
    }

    #[cfg(not(unix))]
    {
        debug!(path = %dir.display(), "Directory sync not supported here");
    }
}

/// Replace `path` with `bytes` so readers see the old or the new content,
/// never a mix.
pub fn replace_file(path: &Path, bytes: &[u8], durability: Durability) -> io::Result<()> {
    let dir = directory_of(path);

    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(bytes)?;
    if durability == Durability::Synced {
        staged.as_file().sync_all()?;
    }

    let staged = match staged.persist(path) {
        Ok(_) => None,
        Err(failed) if path.exists() => Some(failed.file),
        Err(failed) => return Err(failed.error),
    };

    if let Some(staged) = staged {
        swap_through_backup(path, staged)?;
    }

    if durability == Durability::Synced {
        sync_directory(dir);
    }
    Ok(())
}

/// Fallback for platforms where rename refuses to overwrite.
fn swap_through_backup(path: &Path, staged: NamedTempFile) -> io::Result<()> {
    let backup = backup_path_for(path);
    let _ = fs::remove_file(&backup);
    fs::rename(path, &backup)?;

    if let Err(failed) = staged.persist(path) {
        let _ = fs::rename(&backup, path);
        return Err(failed.error);
    }
    if let Err(e) = fs::remove_file(&backup) {
        warn!(path = %backup.display(), "Failed to remove backup after write: {e}");
    }
    Ok(())
}

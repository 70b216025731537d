//! Shared infrastructure utilities for Cupid.
//!
//! This crate provides cross-cutting utilities that don't belong in the
//! domain-pure `cupid-types` crate:
//!
//! - **`atomic_write`**: Crash-safe whole-file replacement (temp + rename, `.bak` restore)
//! - **`file_lock`**: Exclusive advisory locks on sidecar lock files

pub mod atomic_write;
pub mod file_lock;

pub use atomic_write::{Durability, backup_path_for, replace_file, restore_backup};
pub use file_lock::{FileLockGuard, lock_exclusive, lock_path_for};

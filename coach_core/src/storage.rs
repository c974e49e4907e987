//! Locked reads and atomic writes for small JSON documents.
//!
//! Used by the saved profile and the progress log. Every document has a
//! sidecar `<file>.lock`; readers hold it shared and writers hold it
//! exclusively for the whole read-modify-write. Writes go to a temp file in
//! the target directory, are fsynced, and renamed over the original.

use crate::{Error, Result};
use fs2::FileExt;
use serde::Serialize;
use std::ffi::OsString;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Path of the sidecar lock file guarding `path`
pub fn lock_path(path: &Path) -> PathBuf {
    suffixed(path, ".lock")
}

fn suffixed(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

fn open_lock_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .open(lock_path(path))?;
    Ok(file)
}

/// Take the exclusive lock for `path`
///
/// The lock is held until the returned file is dropped.
pub fn lock_exclusive(path: &Path) -> Result<File> {
    let file = open_lock_file(path)?;
    file.lock_exclusive()?;
    Ok(file)
}

/// Read a whole file without locking
///
/// Returns `Ok(None)` if the file does not exist. Callers must already hold
/// the lock from [`lock_exclusive`].
pub fn read_if_exists(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Read a whole file under the shared lock
///
/// Returns `Ok(None)` if the file does not exist.
pub fn read_locked(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }

    let lock = open_lock_file(path)?;
    lock.lock_shared()?;
    let contents = read_if_exists(path);
    lock.unlock()?;
    contents
}

/// Serialize `value` as pretty JSON and atomically replace `path`
///
/// Does not lock; see [`write_json_locked`].
pub fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let parent = path.parent().ok_or_else(|| {
        Error::Other(format!("{:?} has no parent directory", path))
    })?;
    std::fs::create_dir_all(parent)?;

    let temp = NamedTempFile::new_in(parent)?;
    {
        let mut writer = std::io::BufWriter::new(temp.as_file());
        serde_json::to_writer_pretty(&mut writer, value)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }
    temp.as_file().sync_all()?;

    temp.persist(path).map_err(|e| Error::Io(e.error))?;
    Ok(())
}

/// [`write_json_atomic`] under the exclusive lock
pub fn write_json_locked<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let _lock = lock_exclusive(path)?;
    write_json_atomic(path, value)
}

/// Move an unreadable document aside so it is never overwritten
///
/// Uses `<file>.corrupt`, or `<file>.corrupt.N` if earlier copies exist.
pub fn quarantine(path: &Path) -> Result<PathBuf> {
    let mut target = suffixed(path, ".corrupt");
    let mut n = 1;
    while target.exists() {
        target = suffixed(path, &format!(".corrupt.{}", n));
        n += 1;
    }
    std::fs::rename(path, &target)?;
    Ok(target)
}

//! Atomic file replacement.
//!
//! Values are written to a hidden temporary sibling, flushed, and renamed
//! over the target so readers observe either the old or the new contents.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use cap_std::fs::{Dir, OpenOptions};

use crate::key::StoreKey;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Replace the file named by `key` with `contents`.
///
/// The temporary file is removed again when any step fails.
pub(crate) fn write_atomic(dir: &Dir, key: &StoreKey, contents: &str) -> io::Result<()> {
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    let tmp_name = format!(
        ".{}.tmp.{}.{}.{}",
        key.as_str(),
        std::process::id(),
        suffix,
        counter
    );

    if let Err(err) = write_to_temp_file(dir, &tmp_name, contents) {
        discard_temp_file(dir, &tmp_name);
        return Err(err);
    }
    if let Err(err) = rename_temp_to_target(dir, &tmp_name, key.as_str()) {
        discard_temp_file(dir, &tmp_name);
        return Err(err);
    }
    sync_directory(dir);
    Ok(())
}

fn write_to_temp_file(dir: &Dir, tmp_name: &str, contents: &str) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir.open_with(tmp_name, &options)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()
}

#[cfg(windows)]
fn rename_temp_to_target(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    // Windows rename fails if the target exists, so remove it first.
    match dir.remove_file(target_name) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(tmp_name, dir, target_name)
}

#[cfg(not(windows))]
fn rename_temp_to_target(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    dir.rename(tmp_name, dir, target_name)
}

fn discard_temp_file(dir: &Dir, tmp_name: &str) {
    if dir.remove_file(tmp_name).is_err() {
        // The temp file may never have been created.
    }
}

fn sync_directory(dir: &Dir) {
    if dir.open(".").and_then(|handle| handle.sync_all()).is_err() {
        // Best-effort; some platforms cannot fsync directories.
    }
}

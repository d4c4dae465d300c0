//! Atomic fixture writes.
//!
//! Dumps land in a hidden temporary file next to the target and are renamed
//! over it, so a fake server watching the fixture never reads half a file.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use cap_std::fs::{Dir, OpenOptions};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Writes `contents` to the file `file_name` inside `dir` using a temp file
/// and rename.
///
/// `file_name` must be a single path component; callers own that check.
///
/// # Errors
///
/// Returns the underlying I/O error if the temp file cannot be written or
/// renamed. The temp file is removed on failure where possible.
pub(crate) fn write_atomic(dir: &Dir, file_name: &str, contents: &str) -> io::Result<()> {
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    let tmp_name = format!(
        ".{}.tmp.{}.{}.{}",
        file_name,
        std::process::id(),
        suffix,
        counter
    );

    if let Err(err) = write_to_temp_file(dir, &tmp_name, contents)
        .and_then(|()| rename_temp_to_target(dir, &tmp_name, file_name))
    {
        if dir.remove_file(&tmp_name).is_err() {
            // Leftover temp files are hidden and harmless.
        }
        return Err(err);
    }
    sync_parent_directory(dir);

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
    // Windows rename fails if the target exists.
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

fn sync_parent_directory(parent: &Dir) {
    if parent.open(".").and_then(|dir| dir.sync_all()).is_err() {
        // Best effort.
    }
}

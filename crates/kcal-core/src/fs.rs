//! Filesystem utilities for atomic writes.

use std::fs;
use std::io;
use std::path::Path;

/// Atomically rename a file, with fallback for platforms where rename fails if target exists.
///
/// On some platforms (notably Windows), `fs::rename` fails if the destination
/// already exists. This function handles that case by removing the destination
/// first and retrying. If the rename ultimately fails, the temp file is
/// cleaned up.
///
/// # Errors
///
/// Returns an error if the rename fails even after the fallback attempt.
pub(crate) fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}

use std::path::{Path, PathBuf};

use crate::error::{Result, WavCarveError};

/// Return the next free output path `<dir>/<prefix><n><extension>`.
///
/// `n` is the smallest non-negative integer for which no file of that name
/// exists yet, so numbering fills gaps and never reuses a taken name. The
/// directory must already exist; creating it is the caller's job. The
/// exists-check is not race-free against concurrent external writers, which
/// is acceptable for a single-threaded tool.
pub fn next_output_path(dir: &Path, prefix: &str, extension: &str) -> Result<PathBuf> {
    if !dir.is_dir() {
        return Err(WavCarveError::OutputDirectoryMissing(dir.to_path_buf()));
    }
    let mut counter: u64 = 0;
    loop {
        let candidate = dir.join(format!("{prefix}{counter}{extension}"));
        if !candidate.exists() {
            return Ok(candidate);
        }
        counter += 1;
    }
}

//! Shared fixtures for wavcarve integration tests.

use std::fs;
use std::path::{Path, PathBuf};

/// Build an embedded wav chunk: 12-byte RIFF/WAVE header plus payload.
///
/// `chunk_size` is set to cover the whole span from the signature on
/// (header included), so extracting this chunk yields exactly these bytes.
pub fn wav_chunk(payload: &[u8]) -> Vec<u8> {
    let chunk_size = (12 + payload.len()) as u32;
    let mut bytes = Vec::with_capacity(12 + payload.len());
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&chunk_size.to_le_bytes());
    bytes.extend_from_slice(b"WAVE");
    bytes.extend_from_slice(payload);
    bytes
}

/// Write a resource fixture into `dir` and return its path.
pub fn write_resource(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, bytes).expect("write resource fixture");
    path
}

/// File names in `dir`, sorted, for asserting on extractor output.
pub fn sorted_file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read output dir")
        .map(|entry| entry.expect("dir entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

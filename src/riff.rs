//! RIFF/WAVE header parsing.
//!
//! RIFF (Resource Interchange File Format) frames its outer chunk with a
//! 12-byte header: a 4-byte id, a little-endian u32 size, and a 4-byte form
//! type. Only the WAVE form is of interest here.

/// RIFF header magic bytes
pub const RIFF_MAGIC: &[u8; 4] = b"RIFF";

/// WAV form type
pub const WAVE_FORM: &[u8; 4] = b"WAVE";

/// Length of the fixed RIFF header
pub const RIFF_HEADER_LEN: usize = 12;

/// The fixed 12-byte header at the start of a RIFF container.
///
/// - Bytes 0-3: chunk id ("RIFF")
/// - Bytes 4-7: chunk size (little-endian u32), nominally the byte count of
///   everything after the 8-byte id+size prefix
/// - Bytes 8-11: form type (e.g. "WAVE")
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiffHeader {
    pub chunk_id: [u8; 4],
    pub chunk_size: u32,
    pub format: [u8; 4],
}

impl RiffHeader {
    /// Read the 12 bytes at the start of `data` as a RIFF header.
    ///
    /// Returns `None` when fewer than 12 bytes remain; a truncated candidate
    /// is an invalid header, never an out-of-bounds read.
    pub fn read_from(data: &[u8]) -> Option<Self> {
        if data.len() < RIFF_HEADER_LEN {
            return None;
        }
        let mut chunk_id = [0u8; 4];
        chunk_id.copy_from_slice(&data[0..4]);
        let chunk_size = u32::from_le_bytes([data[4], data[5], data[6], data[7]]);
        let mut format = [0u8; 4];
        format.copy_from_slice(&data[8..12]);
        Some(Self {
            chunk_id,
            chunk_size,
            format,
        })
    }

    /// Basic validity tests on a potential WAV header.
    pub fn is_valid_wav(&self) -> bool {
        &self.chunk_id == RIFF_MAGIC && &self.format == WAVE_FORM
    }

    /// Number of bytes the extractor copies for this chunk, counted from the
    /// signature offset.
    ///
    /// The copy spans `chunk_size` bytes starting at the signature itself,
    /// header included, not the `chunk_size + 8` of strict RIFF framing.
    pub fn extracted_len(&self) -> u64 {
        self.chunk_size as u64
    }
}

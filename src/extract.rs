//! # Extract Module
//!
//! The extractor drives the whole pass: load the resource file, scan it for
//! `RIFF` signatures, validate each candidate header, bounds-check the
//! declared size, and copy accepted chunks to sequentially numbered output
//! files. Candidates that fail validation are skipped, never fatal.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::{debug, error, info, warn};

use crate::config::{ConfigValue, ExtractorConfig};
use crate::error::{Result, WavCarveError};
use crate::output::next_output_path;
use crate::riff::{RiffHeader, RIFF_MAGIC};
use crate::scan::SignatureIter;

/// Counters for one `extract()` pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractStats {
    /// Signature offsets the scanner reported
    pub hits_found: u64,
    /// Candidates whose 12-byte header validated as RIFF/WAVE
    pub chunks_found: u64,
    /// Valid chunks rejected because they ran past the end of the buffer
    pub out_of_bounds: u64,
    /// Output files actually written
    pub files_written: u64,
    /// Total bytes written across all output files
    pub bytes_written: u64,
}

/// Extracts embedded WAV chunks from a resource file.
///
/// Holds no cross-call state beyond the resource path and the active
/// configuration; every `extract()` call is an independent pass over the
/// file, and re-running against an unchanged output directory adds new
/// numbered files rather than overwriting old ones.
#[derive(Debug)]
pub struct Extractor {
    resource_path: PathBuf,
    config: ExtractorConfig,
}

impl Extractor {
    /// Create an extractor for the given resource file.
    ///
    /// Fails with `InputNotFound` unless the path names an existing regular
    /// file. The output filename prefix is derived from the file's basename
    /// right away (see [`reset_config`](Self::reset_config)).
    pub fn new(resource_path: impl Into<PathBuf>) -> Result<Self> {
        let resource_path = resource_path.into();
        if !resource_path.is_file() {
            return Err(WavCarveError::InputNotFound(resource_path));
        }
        let mut extractor = Self {
            resource_path,
            config: ExtractorConfig::default(),
        };
        extractor.reset_config()?;
        Ok(extractor)
    }

    /// The resource file this extractor scans.
    pub fn resource_path(&self) -> &Path {
        &self.resource_path
    }

    /// Read access to the active configuration.
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Apply named configuration overrides in order.
    ///
    /// Application stops at the first failure; overrides applied before it
    /// stay applied, with no rollback. An unrecognized key is logged and
    /// returned as `UnknownConfigOption`; an invalid value surfaces that
    /// attribute's own validation error.
    pub fn configure<I, K>(&mut self, overrides: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, ConfigValue)>,
        K: AsRef<str>,
    {
        for (key, value) in overrides {
            let key = key.as_ref();
            match self.config.apply(key, value) {
                Ok(()) => {}
                Err(err @ WavCarveError::UnknownConfigOption(_)) => {
                    if self.config.debug_enable_log() {
                        error!("can't set attribute {key}");
                    }
                    return Err(err);
                }
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }

    /// Restore default configuration, then derive the output filename prefix
    /// from the resource file's basename without its extension.
    ///
    /// The derived prefix goes through the validating setter, so a basename
    /// containing `{` is rejected here (and therefore at construction).
    pub fn reset_config(&mut self) -> Result<()> {
        let mut config = ExtractorConfig::default();
        let stem = self
            .resource_path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        config.set_out_file_name_prefix(format!("{stem}_"))?;
        self.config = config;
        Ok(())
    }

    /// Scan the resource file and write every accepted chunk to its own
    /// output file.
    ///
    /// Creates the output directory (and parents) if missing. Invalid
    /// headers are skipped with a debug trace only; out-of-bounds sizes are
    /// counted and warned about; both leave the scan running. Progress lines
    /// are gated on `debug_enable_log`, and `debug_skip_write` suppresses
    /// the writes while keeping the rest of the pass intact.
    pub fn extract(&self) -> Result<ExtractStats> {
        let out_dir = self.config.out_dir()?;
        if self.config.debug_enable_log() {
            info!("will output files to {}", out_dir.display());
        }
        fs::create_dir_all(&out_dir)?;

        let data = fs::read(&self.resource_path)?;
        let total_len = data.len() as u64;
        let mut stats = ExtractStats::default();

        for riff_start in SignatureIter::new(&data, RIFF_MAGIC) {
            stats.hits_found += 1;

            let header = match RiffHeader::read_from(&data[riff_start..]) {
                Some(header) if header.is_valid_wav() => header,
                _ => {
                    debug!("no valid wav header at offset 0x{riff_start:02X}");
                    continue;
                }
            };
            stats.chunks_found += 1;

            if self.config.debug_enable_log() {
                info!(
                    "found wav file of size 0x{:02X} at offset 0x{:02X}",
                    header.chunk_size, riff_start
                );
            }

            // Basic sanity of chunk_size: the declared span must stay inside
            // the resource buffer.
            let chunk_len = header.extracted_len();
            if riff_start as u64 + chunk_len > total_len {
                if self.config.debug_enable_log() {
                    warn!("file size {} is out of bounds", header.chunk_size);
                }
                stats.out_of_bounds += 1;
                continue;
            }

            let out_path = next_output_path(
                &out_dir,
                self.config.out_file_name_prefix(),
                self.config.out_file_extension(),
            )?;
            let chunk = &data[riff_start..riff_start + chunk_len as usize];

            if !self.config.debug_skip_write() {
                let mut out_file = File::create(&out_path)?;
                out_file.write_all(chunk)?;
                out_file.flush()?;
                stats.files_written += 1;
                stats.bytes_written += chunk.len() as u64;
                if self.config.debug_enable_log() {
                    info!("file {} created", out_path.display());
                }
                debug!("sha256={}", hex::encode(Sha256::digest(chunk)));
            } else if self.config.debug_enable_log() {
                info!("skipping write due to debug flag");
            }

            if self.config.debug_enable_log() {
                info!("---");
            }
        }

        Ok(stats)
    }
}

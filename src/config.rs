//! # Config Module
//!
//! Extraction configuration with per-attribute lazy defaulting: each
//! attribute stores an optional override and computes its default at read
//! time, so unset attributes track the environment (the current working
//! directory, for one) instead of freezing it at construction. Setters
//! validate before storing; a rejected value leaves the attribute untouched.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, WavCarveError};

/// Directory created under the cwd when no output dir is configured
pub const DEFAULT_OUT_DIR_NAME: &str = "WAVs";

/// Generic prefix used when none has been derived from the input name
pub const DEFAULT_PREFIX: &str = "output_";

/// Default extension for extracted chunks
pub const DEFAULT_EXTENSION: &str = ".wav";

/// A value for one named configuration attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    Path(PathBuf),
    Str(String),
    Bool(bool),
}

impl ConfigValue {
    fn kind(&self) -> &'static str {
        match self {
            ConfigValue::Path(_) => "path",
            ConfigValue::Str(_) => "string",
            ConfigValue::Bool(_) => "bool",
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::Str(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::Str(value)
    }
}

impl From<&Path> for ConfigValue {
    fn from(value: &Path) -> Self {
        ConfigValue::Path(value.to_path_buf())
    }
}

impl From<PathBuf> for ConfigValue {
    fn from(value: PathBuf) -> Self {
        ConfigValue::Path(value)
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Bool(value)
    }
}

/// Extraction configuration.
///
/// Reads return the stored override when present, otherwise the computed
/// default. `Default` yields a configuration with no overrides at all.
#[derive(Debug, Clone, Default)]
pub struct ExtractorConfig {
    out_dir: Option<PathBuf>,
    out_file_name_prefix: Option<String>,
    out_file_extension: Option<String>,
    debug_skip_write: Option<bool>,
    debug_enable_log: Option<bool>,
}

impl ExtractorConfig {
    /// Output directory; defaults to `<cwd>/WAVs`, resolved at read time.
    pub fn out_dir(&self) -> Result<PathBuf> {
        match &self.out_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(env::current_dir()?.join(DEFAULT_OUT_DIR_NAME)),
        }
    }

    /// Prefix for output file names.
    pub fn out_file_name_prefix(&self) -> &str {
        self.out_file_name_prefix.as_deref().unwrap_or(DEFAULT_PREFIX)
    }

    /// Extension appended to output file names.
    pub fn out_file_extension(&self) -> &str {
        self.out_file_extension
            .as_deref()
            .unwrap_or(DEFAULT_EXTENSION)
    }

    /// When set, candidates are logged but no output file is written.
    pub fn debug_skip_write(&self) -> bool {
        self.debug_skip_write.unwrap_or(false)
    }

    /// Gates the per-candidate progress lines.
    pub fn debug_enable_log(&self) -> bool {
        self.debug_enable_log.unwrap_or(true)
    }

    /// Set the output directory.
    ///
    /// The path is absolutized against the cwd. Its prospective parent must
    /// exist, be a directory, and not be read-only; the directory itself is
    /// created later by `extract()`.
    pub fn set_out_dir(&mut self, value: impl Into<PathBuf>) -> Result<()> {
        let dir = absolutize(value.into())?;
        let parent = dir.parent().unwrap_or(&dir);
        let writable = fs::metadata(parent)
            .map(|meta| meta.is_dir() && !meta.permissions().readonly())
            .unwrap_or(false);
        if !writable {
            return Err(WavCarveError::invalid_config(
                "out_dir",
                format!("illegal path: {}", dir.display()),
            ));
        }
        self.out_dir = Some(dir);
        Ok(())
    }

    /// Set the output filename prefix. Must be non-empty and free of `{`.
    pub fn set_out_file_name_prefix(&mut self, value: impl Into<String>) -> Result<()> {
        let prefix = value.into();
        if prefix.trim().is_empty() {
            return Err(WavCarveError::invalid_config(
                "out_file_name_prefix",
                "name must not be empty",
            ));
        }
        if prefix.contains('{') {
            return Err(WavCarveError::invalid_config(
                "out_file_name_prefix",
                format!("illegal name: {prefix}"),
            ));
        }
        self.out_file_name_prefix = Some(prefix);
        Ok(())
    }

    /// Set the output filename extension. Must be free of `{`.
    pub fn set_out_file_extension(&mut self, value: impl Into<String>) -> Result<()> {
        let extension = value.into();
        if extension.contains('{') {
            return Err(WavCarveError::invalid_config(
                "out_file_extension",
                format!("illegal extension: {extension}"),
            ));
        }
        self.out_file_extension = Some(extension);
        Ok(())
    }

    pub fn set_debug_skip_write(&mut self, value: bool) {
        self.debug_skip_write = Some(value);
    }

    pub fn set_debug_enable_log(&mut self, value: bool) {
        self.debug_enable_log = Some(value);
    }

    /// Apply one named override.
    ///
    /// Unrecognized keys fail with `UnknownConfigOption`; a value of the
    /// wrong shape for a recognized key fails that key's validation.
    pub fn apply(&mut self, key: &str, value: ConfigValue) -> Result<()> {
        match key {
            "out_dir" => match value {
                ConfigValue::Path(path) => self.set_out_dir(path),
                ConfigValue::Str(text) => self.set_out_dir(PathBuf::from(text)),
                other => Err(type_mismatch("out_dir", "path", &other)),
            },
            "out_file_name_prefix" => match value {
                ConfigValue::Str(text) => self.set_out_file_name_prefix(text),
                other => Err(type_mismatch("out_file_name_prefix", "string", &other)),
            },
            "out_file_extension" => match value {
                ConfigValue::Str(text) => self.set_out_file_extension(text),
                other => Err(type_mismatch("out_file_extension", "string", &other)),
            },
            "debug_skip_write" => match value {
                ConfigValue::Bool(flag) => {
                    self.set_debug_skip_write(flag);
                    Ok(())
                }
                other => Err(type_mismatch("debug_skip_write", "bool", &other)),
            },
            "debug_enable_log" => match value {
                ConfigValue::Bool(flag) => {
                    self.set_debug_enable_log(flag);
                    Ok(())
                }
                other => Err(type_mismatch("debug_enable_log", "bool", &other)),
            },
            _ => Err(WavCarveError::UnknownConfigOption(key.to_string())),
        }
    }
}

fn absolutize(path: PathBuf) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path)
    } else {
        Ok(env::current_dir()?.join(path))
    }
}

fn type_mismatch(option: &'static str, expected: &str, got: &ConfigValue) -> WavCarveError {
    WavCarveError::invalid_config(option, format!("expected {expected}, got {}", got.kind()))
}

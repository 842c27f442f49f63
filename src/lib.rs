//! # wavcarve
//!
//! Carves embedded RIFF/WAVE chunks out of arbitrary binary files.
//!
//! The input is treated as an opaque byte blob: every `RIFF` signature is a
//! candidate, and candidates with a valid 12-byte RIFF/WAVE header and an
//! in-bounds declared size are copied verbatim to sequentially numbered
//! output files.

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod logging;
pub mod output;
pub mod riff;
pub mod scan;

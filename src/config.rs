// symgen/src/config.rs
//! Scan configuration. One instance per run, passed into the scan operation,
//! so tests can inject temporary trees instead of leaning on the
//! working-directory convention.

use std::path::PathBuf;

/// How undecodable bytes in a source file are handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingPolicy {
    /// Invalid UTF-8 is a per-file failure; the file is skipped.
    Strict,
    /// Invalid sequences become U+FFFD and the file is scanned anyway.
    Lossy,
}

impl Default for EncodingPolicy {
    fn default() -> Self { EncodingPolicy::Strict }
}

/// Parameters for one scan-and-write run.
#[derive(Clone, Debug)]
pub struct ScanConfig {
    /// Root directory to walk.
    pub source_root: PathBuf,
    /// File-name extension (no dot) selecting which files are scanned.
    pub extension: String,
    /// A line is recorded when its trimmed form starts with this token.
    pub marker: String,
    /// Report path; truncated and rewritten on every run.
    pub output_path: PathBuf,
    pub encoding: EncodingPolicy,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            source_root: PathBuf::from("src"),
            extension: "rs".into(),
            marker: "pub ".into(),
            output_path: PathBuf::from("symbols.txt"),
            encoding: EncodingPolicy::Strict,
        }
    }
}

/* ================================== Tests ================================== */

// symgen/src/record.rs
//! One matched line: where it was found and the line as written.
//!
//! The report format is plain text, one record per line, fields joined with
//! `:` — `path:line_number:line_text`. Line text is not escaped; an embedded
//! `:` passes through verbatim, which is why parsing only splits on the first
//! two separators.

use anyhow::{anyhow, Result};
use std::fmt;

/// Primary record emitted per match. One line in the report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolRecord {
    /// Path of the file the line came from, forward-slash normalized.
    pub path: String,
    /// 1-based position of the line in its file.
    pub line: usize,
    /// Original line with trailing whitespace stripped, leading preserved.
    pub text: String,
}

impl fmt::Display for SymbolRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.path, self.line, self.text)
    }
}

/// Parse one report line back into a record.
pub fn parse_record(s: &str) -> Result<SymbolRecord> {
    let mut parts = s.splitn(3, ':');
    let path = parts.next().unwrap_or_default();
    let line = parts
        .next()
        .ok_or_else(|| anyhow!("missing line number in record: {s:?}"))?;
    let text = parts
        .next()
        .ok_or_else(|| anyhow!("missing line text in record: {s:?}"))?;
    let line: usize = line
        .parse()
        .map_err(|_| anyhow!("bad line number {line:?} in record: {s:?}"))?;
    Ok(SymbolRecord {
        path: path.to_string(),
        line,
        text: text.to_string(),
    })
}

/* ================================== Tests ================================== */

// symgen/src/scan.rs

use anyhow::{
    Context,
    Result
};
use std::{
    fs,
    io::{
        BufRead,
        BufReader,
        Write
    },
    path::{
        Path
    },
};
use walkdir::WalkDir;
use crate::{
    config::{
        EncodingPolicy,
        ScanConfig
    },
    record::{
        parse_record,
        SymbolRecord
    }
};


/// One file the scan could not read. The run keeps going without it.
#[derive(Debug)]
pub struct FileFailure {
    pub path: String,
    pub cause: anyhow::Error,
}

/// Everything one scan produced: matches in traversal order, plus the files
/// that had to be skipped along the way.
#[derive(Debug, Default)]
pub struct ScanReport {
    pub records: Vec<SymbolRecord>,
    pub failures: Vec<FileFailure>,
    pub files_scanned: usize,
}

/// Full scan-and-emit pass: walk the tree, then rewrite the symbols file from
/// scratch. The output file is created even when there are zero matches.
/// Per-file trouble lands in the report; only output-file trouble is fatal.
pub fn scan_and_write_symbols(cfg: &ScanConfig) -> Result<ScanReport> {
    let report = scan_tree(cfg);
    write_symbols(&cfg.output_path, &report.records)?;
    Ok(report)
}

/// Walk `source_root` and scan every file carrying the configured extension.
/// Siblings are visited in file-name order, so the report is repeatable
/// across runs on an unchanged tree. Never fails as a whole: a bad entry
/// (unreadable file, undecodable bytes, vanished mid-walk) becomes a
/// `FileFailure` and the walk continues.
pub fn scan_tree(cfg: &ScanConfig) -> ScanReport {
    let mut report = ScanReport::default();

    for dent in WalkDir::new(&cfg.source_root).sort_by_file_name() {
        let dent = match dent {
            Ok(d) => d,
            Err(e) => {
                let path = e
                    .path()
                    .map(normalize_path)
                    .unwrap_or_else(|| normalize_path(&cfg.source_root));
                report.failures.push(FileFailure { path, cause: e.into() });
                continue;
            }
        };
        if !dent.file_type().is_file() {
            continue;
        }
        let path = dent.path();
        if !has_extension(path, &cfg.extension) {
            continue;
        }

        match scan_file(path, &cfg.marker, cfg.encoding) {
            Ok(mut records) => {
                report.files_scanned += 1;
                report.records.append(&mut records);
            }
            Err(cause) => report.failures.push(FileFailure {
                path: normalize_path(path),
                cause,
            }),
        }
    }

    report
}

/// Scan a single file, recording every line whose trimmed form starts with
/// the marker. Line numbers are 1-based; recorded text keeps its leading
/// whitespace and loses trailing whitespace. The handle is scoped to this
/// call, so it closes on the error path too.
pub fn scan_file(path: &Path, marker: &str, encoding: EncodingPolicy) -> Result<Vec<SymbolRecord>> {
    let content = read_source(path, encoding)?;
    let rel = normalize_path(path);

    let mut records = Vec::new();
    for (idx, raw) in content.lines().enumerate() {
        if raw.trim().starts_with(marker) {
            records.push(SymbolRecord {
                path: rel.clone(),
                line: idx + 1,
                text: raw.trim_end().to_string(),
            });
        }
    }
    Ok(records)
}

/// Write the report, one record per line, truncating anything already there.
/// A failure here is fatal to the run.
pub fn write_symbols(out: &Path, records: &[SymbolRecord]) -> Result<()> {
    let mut f = fs::File::create(out)
        .with_context(|| format!("creating symbols file {}", out.display()))?;
    for record in records {
        writeln!(f, "{record}")
            .with_context(|| format!("writing {}", out.display()))?;
    }
    Ok(())
}

// Reading a previous report back, for comparing runs.
pub fn read_symbols(path: &Path) -> Result<Vec<SymbolRecord>> {
    let f = fs::File::open(path)
        .with_context(|| format!("open symbols file {}", path.display()))?;
    let rdr = BufReader::new(f);
    let mut records = Vec::new();
    for (i, line) in rdr.lines().enumerate() {
        let line = line.with_context(|| format!("read symbols line {}", i + 1))?;
        let record = parse_record(&line)
            .with_context(|| format!("parse symbols line {}", i + 1))?;
        records.push(record);
    }
    Ok(records)
}

/* ----------------------------- helpers ----------------------------- */

fn read_source(path: &Path, encoding: EncodingPolicy) -> Result<String> {
    match encoding {
        EncodingPolicy::Strict => {
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
        }
        EncodingPolicy::Lossy => {
            let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
    }
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == ext)
        .unwrap_or(false)
}

fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/* ===================================== Tests ===================================== */

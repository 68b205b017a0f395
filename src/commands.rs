// symgen/src/commands.rs

use anyhow::{
    Result,
    Context
};
use crate::{
    config::ScanConfig,
    scan
};


/// Entry point for the `symgen` binary. No argument surface: every run walks
/// `src`, collects `pub ` lines, and rewrites `symbols.txt` in the working
/// directory.
pub fn run_cli() -> Result<()> {
    let cfg = ScanConfig::default();
    let report = scan::scan_and_write_symbols(&cfg)
        .context("scan/write failed")?;

    // Skipped files go to stderr; the run still counts as a success.
    for failure in &report.failures {
        eprintln!("[scan] warn: skipped {}: {:#}", failure.path, failure.cause);
    }
    println!("Public symbols generated in {}", cfg.output_path.display());
    Ok(())
}

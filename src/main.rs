// src/main.rs

pub mod commands;
pub mod config;
pub mod record;
pub mod scan;

use anyhow::Result;

fn main() -> Result<()> {
    commands::run_cli()
}

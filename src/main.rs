// mqch: MultiQC configuration header generation for NGS pipelines.
//
// Copyright 2025 Tommi Mäklin [tommi@maklin.fi].
//
// Copyrights in this project are retained by contributors. No copyright assignment
// is required to contribute to this project.
//
// Except as otherwise noted (below and/or in individual files), this
// project is licensed under the Apache License, Version 2.0
// <LICENSE-APACHE> or <http://www.apache.org/licenses/LICENSE-2.0> or
// the MIT license, <LICENSE-MIT> or <http://opensource.org/licenses/MIT>,
// at your option.
//
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use clap::Parser;
use log::info;

use mqch::HeaderConfig;

mod cli;

type E = Box<dyn std::error::Error>;

/// Initializes the logger with verbosity given in `log_max_level`.
fn init_log(log_max_level: usize) {
    stderrlog::new()
    .module(module_path!())
    .quiet(false)
    .verbosity(log_max_level)
    .timestamp(stderrlog::Timestamp::Off)
    .init()
    .unwrap();
}

fn main() -> Result<(), E> {
    let cli = cli::Cli::parse();
    init_log(if cli.verbose { 2 } else { 1 });

    let install_dir = match &cli.install_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_exe()?
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(PathBuf::new),
    };
    info!("Using installation root {}", install_dir.display());

    if let Some(path) = &cli.splan {
        info!("Renaming samples from {}", path.display());
    }
    if let Some(path) = &cli.metadata {
        info!("Reading report metadata from {}", path.display());
    }

    let config = HeaderConfig {
        title: cli.name,
        version: cli.version,
        nbreads: cli.nbreads,
        install_dir,
    };

    let stdout = std::io::stdout();
    let mut conn_out = BufWriter::new(stdout.lock());
    mqch::build_from_files_to_write(
        &config,
        cli.splan.as_deref(),
        cli.metadata.as_deref(),
        &mut conn_out,
    )?;
    conn_out.flush()?;

    Ok(())
}

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
use std::path::PathBuf;

use clap::Parser;

/// Write the MultiQC configuration header for a sequencing run to stdout.
#[derive(Parser)]
pub struct Cli {
    // Report title, typically the pipeline name
    #[arg(short = 'n', long = "name", default_value = "")]
    pub name: String,

    // Pipeline version; a literal "dev" suffix marks non-stable results
    #[arg(short = 'v', long = "version", default_value = "")]
    pub version: String,

    // Tab-separated key/value file with project metadata
    #[arg(short = 'm', long = "metadata")]
    pub metadata: Option<PathBuf>,

    // Comma-separated sample plan with sample ID to display name pairs
    #[arg(short = 's', long = "splan")]
    pub splan: Option<PathBuf>,

    // Read count to mark on the preseq plot, 0 disables the marker
    #[arg(short = 'x', long = "nbreads", default_value_t = 0)]
    pub nbreads: u64,

    // Installation root used to locate the logo asset, defaults to the
    // directory containing the executable
    #[arg(long = "install-dir")]
    pub install_dir: Option<PathBuf>,

    // Verbosity
    #[arg(long = "verbose", default_value_t = false)]
    pub verbose: bool,
}

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

//! mqch is a library and a command-line client for generating the MultiQC
//! configuration fragment that customizes sequencing reports produced by the
//! Institut Curie NGS pipelines.
//!
//! The fragment is plain YAML written to one output sink and controls:
//!
//!   - The report title and the facility subtitle.
//!   - A warning banner shown when the pipeline version has a `dev` suffix.
//!   - The facility logo, logo title, and logo link.
//!   - Buttons for switching the sample display between sample IDs and
//!     human-readable sample names, read from a comma-separated sample plan.
//!   - A vertical marker for the median read count on the preseq plot.
//!   - Project-level attributes listed under `report_header_info`, read from
//!     a tab-separated metadata file.
//!
//! ## Usage
//!
//! ### Command line
//!
//! ```sh
//! mqch -n raw-qc -v 1.2.3 -s sample_plan.csv -m metadata.tsv -x 2500000
//! ```
//!
//! The fragment is printed to stdout; diagnostics go to stderr.
//!
//! ### Rust API
//!
//! [build_from_files_to_write] reads the side files itself, while
//! [build_to_write] operates on sample and metadata maps already in memory.
//! Both write the complete fragment to anything that implements
//! [Write](std::io::Write). The side-file readers are available separately
//! in [parser] and the per-block formatters in [printer].

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use indexmap::IndexMap;

pub mod parser;
pub mod printer;

type E = Box<dyn std::error::Error>;

/// Settings controlling the contents of the configuration fragment.
///
/// The optional side files are not part of the settings; they are passed
/// separately to [build_from_files_to_write] or pre-parsed to
/// [build_to_write].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderConfig {
    /// Report title, typically the pipeline name.
    pub title: String,
    /// Pipeline version string. A literal `dev` suffix marks the results as
    /// generated by a non-stable version.
    pub version: String,
    /// Read count marked on the preseq plot. Zero disables the marker.
    pub nbreads: u64,
    /// Installation root used to locate the logo asset.
    pub install_dir: PathBuf,
}

/// Build the configuration fragment from maps in memory.
///
/// Writes the complete fragment built from `config`, the optional sample ID
/// to display name map `samples`, and the optional metadata record `fields`
/// to `conn_out`.
///
/// ## Usage
///
/// ```rust
/// use mqch::{HeaderConfig, build_to_write};
/// use indexmap::IndexMap;
///
/// let config = HeaderConfig {
///     title: "raw-qc".to_string(),
///     version: "1.2.3".to_string(),
///     nbreads: 0,
///     install_dir: "/opt/pipeline/bin".into(),
/// };
///
/// let mut samples: IndexMap<String, String> = IndexMap::new();
/// samples.insert("S1".to_string(), "Sample One".to_string());
/// samples.insert("S2".to_string(), "Sample Two".to_string());
///
/// let mut output: Vec<u8> = Vec::new();
/// build_to_write(&config, Some(&samples), None, &mut output).unwrap();
///
/// let mut expected = String::new();
/// expected += "title: 'raw-qc'\n";
/// expected += "subtitle: Institut Curie NGS/Bioinformatics core facilities\n";
/// expected += "custom_logo: '/opt/pipeline/bin/../assets/institutCurieLogo.png'\n";
/// expected += "custom_logo_title: Institut Curie\n";
/// expected += "custom_logo_url: https://science.curie.fr/plateformes/sequencage-adn-haut-debit-ngs/\n";
/// expected += "sample_names_rename_buttons:\n";
/// expected += "    - 'Sample ID'\n";
/// expected += "    - 'Sample Name'\n";
/// expected += "sample_names_rename:\n";
/// expected += "    - [\"S1\",\"Sample One\"]\n";
/// expected += "    - [\"S2\",\"Sample Two\"]\n";
/// expected += "report_header_info:\n";
///
/// assert_eq!(String::from_utf8(output).unwrap(), expected);
/// ```
pub fn build_to_write<W: Write>(
    config: &HeaderConfig,
    samples: Option<&IndexMap<String, String>>,
    fields: Option<&IndexMap<String, String>>,
    conn_out: &mut W,
) -> Result<(), E> {
    printer::print_config(config, samples, fields, conn_out)
}

/// Build the configuration fragment from side files.
///
/// Reads the optional comma-separated sample plan from `sample_plan` and the
/// optional tab-separated metadata file from `metadata`, then writes the
/// complete fragment to `conn_out`.
///
/// ## Errors
///
/// Propagates I/O errors from unreadable side files and
/// [MalformedRecord](parser::MalformedRecord) from lines that do not contain
/// the expected separator. Nothing is recovered; callers are expected to
/// abort.
///
/// ## Usage
///
/// ```rust
/// use mqch::{HeaderConfig, build_from_files_to_write};
/// use std::io::Write;
///
/// let mut splan = tempfile::NamedTempFile::new().unwrap();
/// writeln!(splan, "S1,Sample One").unwrap();
/// writeln!(splan, "S2,Sample Two").unwrap();
///
/// let config = HeaderConfig{ title: "raw-qc".to_string(), ..Default::default() };
///
/// let mut output: Vec<u8> = Vec::new();
/// build_from_files_to_write(&config, Some(splan.path()), None, &mut output).unwrap();
///
/// let text = String::from_utf8(output).unwrap();
/// assert!(text.contains("sample_names_rename:\n    - [\"S1\",\"Sample One\"]\n    - [\"S2\",\"Sample Two\"]\n"));
/// ```
pub fn build_from_files_to_write<W: Write>(
    config: &HeaderConfig,
    sample_plan: Option<&Path>,
    metadata: Option<&Path>,
    conn_out: &mut W,
) -> Result<(), E> {
    let samples = match sample_plan {
        Some(path) => Some(parser::splan::read_splan(&mut File::open(path)?)?),
        None => None,
    };
    let fields = match metadata {
        Some(path) => Some(parser::metadata::read_metadata(&mut File::open(path)?)?),
        None => None,
    };

    printer::print_config(config, samples.as_ref(), fields.as_ref(), conn_out)
}

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

//! Printer for the YAML configuration fragment.
//!
//! Each block of the fragment has its own `format_*` function that writes
//! pre-formatted YAML lines to a [Write](std::io::Write); [print_config]
//! runs them in the fixed output order and decides which conditional blocks
//! appear. Every block is self-contained, so the fragment stays valid YAML
//! for any combination of present and absent inputs.
//!
//! The block order is:
//!
//!   1. `title` and `subtitle` (always).
//!   2. `report_comment` (only for a version with a `dev` suffix).
//!   3. `custom_logo`, `custom_logo_title`, `custom_logo_url` (always).
//!   4. `sample_names_rename_buttons` and `sample_names_rename` (only with
//!      a sample plan).
//!   5. `custom_plot_config` (only with a read count above zero).
//!   6. `report_header_info` (always; items only with a metadata record).

use std::io::Write;

use indexmap::IndexMap;

use crate::HeaderConfig;

// Per-block formatters
pub mod header;
pub mod metadata;
pub mod plot;
pub mod samples;

type E = Box<dyn std::error::Error>;

/// Write the complete configuration fragment to `conn_out`.
///
/// `samples` maps sample IDs to display names and `fields` holds the
/// metadata record; either may be absent, which drops the corresponding
/// conditional block (the `report_header_info` key itself is always
/// emitted).
pub fn print_config<W: Write>(
    config: &HeaderConfig,
    samples: Option<&IndexMap<String, String>>,
    fields: Option<&IndexMap<String, String>>,
    conn_out: &mut W,
) -> Result<(), E> {
    header::format_title(&config.title, conn_out)?;
    if config.version.ends_with("dev") {
        header::format_dev_warning(conn_out)?;
    }
    header::format_logo(&config.install_dir, conn_out)?;

    if let Some(samples) = samples {
        samples::format_sample_renames(samples, conn_out)?;
    }

    if config.nbreads > 0 {
        plot::format_read_marker(config.nbreads, conn_out)?;
    }

    metadata::format_header_info(fields, conn_out)?;

    conn_out.flush()?;
    Ok(())
}

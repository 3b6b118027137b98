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
use std::io::Write;

type E = Box<dyn std::error::Error>;

/// Unit of the preseq plot x axis, in reads.
const READS_PER_UNIT: f64 = 1_000_000.0;

/// Format the preseq plot marker block
///
/// Writes a `custom_plot_config` block containing one vertical line on the
/// preseq plot at `nbreads` scaled to millions of reads with two decimal
/// digits.
///
pub fn format_read_marker<W: Write>(
    nbreads: u64,
    conn: &mut W,
) -> Result<(), E> {
    let value = format!("{:.2}", nbreads as f64 / READS_PER_UNIT);

    let mut formatted: String = String::new();
    formatted += "custom_plot_config:\n";
    formatted += "   preseq_plot:\n";
    formatted += "      xPlotLines:\n";
    formatted += "         - color: '#a9a9a9'\n";
    formatted += &format!("           value: {}\n", value);
    formatted += "           dashStyle: 'LongDash'\n";
    formatted += "           width: 1\n";
    formatted += "           label:\n";
    formatted += "              style: {color: '#a9a9a9'}\n";
    formatted += "              text: 'Median Reads Number'\n";
    formatted += "              verticalAlign: 'top'\n";
    formatted += "              y: 0\n";

    conn.write_all(formatted.as_bytes())?;
    Ok(())
}

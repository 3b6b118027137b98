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

use indexmap::IndexMap;

type E = Box<dyn std::error::Error>;

/// Displayable metadata fields and their report labels, in output order.
///
/// Record keys missing from the table are never shown; table keys missing
/// from the record are skipped without error. The `team_leader|unit` key is
/// matched verbatim against the raw key text in the metadata file.
pub const FIELD_LABELS: [(&str, &str); 12] = [
    ("RIMS_ID", "RIMS code"),
    ("project_name", "Project name"),
    ("project_id", "Project ID"),
    ("runs", "Runs"),
    ("sequencer", "Sequencing setup"),
    ("biological_application", "Application type"),
    ("nature_of_material", "Material"),
    ("protocol", "Protocol"),
    ("bed", "BED of targets"),
    ("technical_contact", "Main contact"),
    ("team_leader|unit", "Team leader"),
    ("ngs_contact", "Contact E-mail"),
];

/// Format the report header info block
///
/// Writes the `report_header_info` key followed by one relabeled item per
/// [FIELD_LABELS] entry present in `fields`, in table order. Without a
/// metadata record the key is emitted with no items.
///
pub fn format_header_info<W: Write>(
    fields: Option<&IndexMap<String, String>>,
    conn: &mut W,
) -> Result<(), E> {
    let mut formatted: String = String::new();
    formatted += "report_header_info:\n";
    if let Some(fields) = fields {
        for (key, label) in FIELD_LABELS {
            if let Some(value) = fields.get(key) {
                formatted += &format!("    - {}: \"{}\"\n", label, value);
            }
        }
    }

    conn.write_all(formatted.as_bytes())?;
    Ok(())
}

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
use std::io::BufRead;
use std::io::BufReader;
use std::io::Read;

use indexmap::IndexMap;

use crate::parser::MalformedRecord;

type E = Box<dyn std::error::Error>;

/// Contact address always advertised in the report header.
pub const NGS_CONTACT: &str = "ngs.lab@curie.fr";

/// Read a metadata file
///
/// Reads tab-separated key/value records from `conn`. Each line is split on
/// its first tab; the value is everything after the tab with surrounding
/// whitespace trimmed. There is no header row and no blank-line allowance.
///
/// The `ngs_contact` key is set to [NGS_CONTACT] after reading, replacing
/// any value from the file.
///
/// Errors with [MalformedRecord] on a line with no tab.
///
pub fn read_metadata<R: Read>(
    conn: &mut R,
) -> Result<IndexMap<String, String>, E> {
    let separator: char = '\t';
    let reader = BufReader::new(conn);

    let mut fields: IndexMap<String, String> = IndexMap::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let (key, value) = line
            .split_once(separator)
            .ok_or(MalformedRecord{ line_num: idx + 1, separator })?;
        fields.insert(key.to_string(), value.trim().to_string());
    }

    fields.insert("ngs_contact".to_string(), NGS_CONTACT.to_string());

    Ok(fields)
}

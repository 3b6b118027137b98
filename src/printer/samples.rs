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

/// Format the sample rename block
///
/// Writes the two fixed `sample_names_rename_buttons` labels followed by
/// one `["<id>","<name>"]` item per entry of `samples`, in map iteration
/// order.
///
pub fn format_sample_renames<W: Write>(
    samples: &IndexMap<String, String>,
    conn: &mut W,
) -> Result<(), E> {
    let mut formatted: String = String::new();
    formatted += "sample_names_rename_buttons:\n";
    formatted += "    - 'Sample ID'\n";
    formatted += "    - 'Sample Name'\n";
    formatted += "sample_names_rename:\n";
    for (id, name) in samples {
        formatted += &format!("    - [\"{}\",\"{}\"]\n", id, name);
    }

    conn.write_all(formatted.as_bytes())?;
    Ok(())
}

// Tests
#[cfg(test)]
mod tests {

    #[test]
    fn format_sample_renames_lists_entries_in_order() {
        use indexmap::IndexMap;
        use super::format_sample_renames;

        let mut samples: IndexMap<String, String> = IndexMap::new();
        samples.insert("S1".to_string(), "Sample One".to_string());
        samples.insert("S2".to_string(), "Sample Two".to_string());

        let mut expected = String::new();
        expected += "sample_names_rename_buttons:\n";
        expected += "    - 'Sample ID'\n";
        expected += "    - 'Sample Name'\n";
        expected += "sample_names_rename:\n";
        expected += "    - [\"S1\",\"Sample One\"]\n";
        expected += "    - [\"S2\",\"Sample Two\"]\n";

        let mut output: Vec<u8> = Vec::new();
        format_sample_renames(&samples, &mut output).unwrap();
        let got = String::from_utf8(output).unwrap();

        assert_eq!(got, expected);
    }

    #[test]
    fn format_sample_renames_empty_map_keeps_keys_self_contained() {
        use indexmap::IndexMap;
        use super::format_sample_renames;

        let samples: IndexMap<String, String> = IndexMap::new();

        let mut expected = String::new();
        expected += "sample_names_rename_buttons:\n";
        expected += "    - 'Sample ID'\n";
        expected += "    - 'Sample Name'\n";
        expected += "sample_names_rename:\n";

        let mut output: Vec<u8> = Vec::new();
        format_sample_renames(&samples, &mut output).unwrap();
        let got = String::from_utf8(output).unwrap();

        assert_eq!(got, expected);
    }
}

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

/// Read a sample plan
///
/// Reads comma-separated sample ID to display name pairs from `conn`. Each
/// line is split on its first comma; the display name is everything after
/// the comma with surrounding whitespace trimmed. Blank lines are skipped.
///
/// Returns the pairs in file order. A sample ID that appears more than once
/// keeps its original position but takes the last display name.
///
/// Errors with [MalformedRecord] on a non-blank line with no comma.
///
pub fn read_splan<R: Read>(
    conn: &mut R,
) -> Result<IndexMap<String, String>, E> {
    let separator: char = ',';
    let reader = BufReader::new(conn);

    let mut samples: IndexMap<String, String> = IndexMap::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        let (id, name) = line
            .split_once(separator)
            .ok_or(MalformedRecord{ line_num: idx + 1, separator })?;
        samples.insert(id.to_string(), name.trim().to_string());
    }

    Ok(samples)
}

// Tests
#[cfg(test)]
mod tests {

    #[test]
    fn read_splan_pairs_in_file_order() {
        use std::io::Cursor;
        use super::read_splan;

        let data: Vec<u8> = b"S1,Sample One\nS2,Sample Two\n".to_vec();
        let expected = vec![
            ("S1".to_string(), "Sample One".to_string()),
            ("S2".to_string(), "Sample Two".to_string()),
        ];

        let mut input: Cursor<Vec<u8>> = Cursor::new(data);
        let got = read_splan(&mut input).unwrap();

        assert_eq!(got.into_iter().collect::<Vec<(String, String)>>(), expected);
    }

    #[test]
    fn read_splan_skips_blank_lines() {
        use std::io::Cursor;
        use super::read_splan;

        let data: Vec<u8> = b"S1,Sample One\n\r\n\nS2,Sample Two\n".to_vec();
        let expected = vec![
            ("S1".to_string(), "Sample One".to_string()),
            ("S2".to_string(), "Sample Two".to_string()),
        ];

        let mut input: Cursor<Vec<u8>> = Cursor::new(data);
        let got = read_splan(&mut input).unwrap();

        assert_eq!(got.into_iter().collect::<Vec<(String, String)>>(), expected);
    }

    #[test]
    fn read_splan_splits_on_first_comma() {
        use std::io::Cursor;
        use super::read_splan;

        let data: Vec<u8> = b"S1,Patient 1, day 0  \n".to_vec();
        let expected = "Patient 1, day 0";

        let mut input: Cursor<Vec<u8>> = Cursor::new(data);
        let got = read_splan(&mut input).unwrap();

        assert_eq!(got.get("S1").unwrap(), expected);
    }

    #[test]
    fn read_splan_duplicate_id_takes_last_name() {
        use std::io::Cursor;
        use super::read_splan;

        let data: Vec<u8> = b"S1,First\nS2,Sample Two\nS1,Second\n".to_vec();
        let expected = vec![
            ("S1".to_string(), "Second".to_string()),
            ("S2".to_string(), "Sample Two".to_string()),
        ];

        let mut input: Cursor<Vec<u8>> = Cursor::new(data);
        let got = read_splan(&mut input).unwrap();

        assert_eq!(got.into_iter().collect::<Vec<(String, String)>>(), expected);
    }

    #[test]
    fn read_splan_line_without_comma_is_an_error() {
        use std::io::Cursor;
        use super::read_splan;

        let data: Vec<u8> = b"S1,Sample One\nS2 Sample Two\n".to_vec();

        let mut input: Cursor<Vec<u8>> = Cursor::new(data);
        let got = read_splan(&mut input);

        assert!(got.is_err());
        assert_eq!(got.unwrap_err().to_string(), "record on line 2 contains no ',' separator");
    }

    #[test]
    fn read_splan_whitespace_only_line_is_an_error() {
        use std::io::Cursor;
        use super::read_splan;

        let data: Vec<u8> = b"S1,Sample One\n  \n".to_vec();

        let mut input: Cursor<Vec<u8>> = Cursor::new(data);
        let got = read_splan(&mut input);

        assert!(got.is_err());
    }
}

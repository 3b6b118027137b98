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

//! Readers for the two side-file formats: the comma-separated sample plan
//! and the tab-separated metadata file.
//!
//! Both readers consume the whole input line by line and return the records
//! as an [IndexMap](indexmap::IndexMap) so the file order is the iteration
//! order. A line that does not contain the expected separator aborts the
//! read with [MalformedRecord].

// Format specific implementations
pub mod metadata;
pub mod splan;

/// A record line that does not contain the expected field separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRecord {
    /// 1-based line number of the offending record.
    pub line_num: usize,
    /// Separator the record was expected to contain.
    pub separator: char,
}

impl std::fmt::Display for MalformedRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "record on line {} contains no {:?} separator", self.line_num, self.separator)
    }
}

impl std::error::Error for MalformedRecord {}

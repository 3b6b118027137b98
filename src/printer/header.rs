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
use std::path::Path;

type E = Box<dyn std::error::Error>;

/// Fixed subtitle naming the sequencing facility.
pub const SUBTITLE: &str = "Institut Curie NGS/Bioinformatics core facilities";

/// Warning shown when the pipeline version carries a `dev` suffix.
pub const DEV_WARNING: &str = "This software is currently under active development and the results have been generated with a non stable version. The reliability, reproducibility and the quality of the results are therefore not guaranteed.";

/// Logo asset location relative to the installation root. The asset is not
/// checked for existence; only the path string is emitted.
pub const LOGO_ASSET: &str = "../assets/institutCurieLogo.png";

/// Title shown when hovering the logo.
pub const LOGO_TITLE: &str = "Institut Curie";

/// Link opened by clicking the logo.
pub const LOGO_URL: &str = "https://science.curie.fr/plateformes/sequencage-adn-haut-debit-ngs/";

/// Format the title and subtitle lines
///
/// `name` is interpolated into the quoted `title` value literally; escaping
/// embedded quotes is the caller's responsibility.
///
pub fn format_title<W: Write>(
    name: &str,
    conn: &mut W,
) -> Result<(), E> {
    writeln!(conn, "title: '{}'", name)?;
    writeln!(conn, "subtitle: {}", SUBTITLE)?;
    Ok(())
}

/// Format the non-stable version warning
///
/// Writes the `report_comment` block containing [DEV_WARNING] as a folded
/// scalar.
///
pub fn format_dev_warning<W: Write>(
    conn: &mut W,
) -> Result<(), E> {
    writeln!(conn, "report_comment: >")?;
    writeln!(conn, " {}", DEV_WARNING)?;
    Ok(())
}

/// Format the logo block
///
/// The logo path joins `install_dir` with [LOGO_ASSET]; the result is
/// emitted as-is without normalizing the `..` component.
///
pub fn format_logo<W: Write>(
    install_dir: &Path,
    conn: &mut W,
) -> Result<(), E> {
    writeln!(conn, "custom_logo: '{}'", install_dir.join(LOGO_ASSET).display())?;
    writeln!(conn, "custom_logo_title: {}", LOGO_TITLE)?;
    writeln!(conn, "custom_logo_url: {}", LOGO_URL)?;
    Ok(())
}

// Tests
#[cfg(test)]
mod tests {

    #[test]
    fn format_title_quotes_name_literally() {
        use super::format_title;

        let mut expected = String::new();
        expected += "title: 'raw-qc'\n";
        expected += "subtitle: Institut Curie NGS/Bioinformatics core facilities\n";

        let mut output: Vec<u8> = Vec::new();
        format_title("raw-qc", &mut output).unwrap();
        let got = String::from_utf8(output).unwrap();

        assert_eq!(got, expected);
    }

    #[test]
    fn format_title_empty_name() {
        use super::format_title;

        let mut output: Vec<u8> = Vec::new();
        format_title("", &mut output).unwrap();
        let got = String::from_utf8(output).unwrap();

        assert!(got.starts_with("title: ''\n"));
    }

    #[test]
    fn format_dev_warning_is_two_lines() {
        use super::format_dev_warning;

        let mut output: Vec<u8> = Vec::new();
        format_dev_warning(&mut output).unwrap();
        let got = String::from_utf8(output).unwrap();

        let lines: Vec<&str> = got.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "report_comment: >");
        assert!(lines[1].starts_with(" This software is currently under active development"));
    }

    #[test]
    fn format_logo_joins_install_dir() {
        use super::format_logo;
        use std::path::Path;

        let mut expected = String::new();
        expected += "custom_logo: '/opt/pipeline/bin/../assets/institutCurieLogo.png'\n";
        expected += "custom_logo_title: Institut Curie\n";
        expected += "custom_logo_url: https://science.curie.fr/plateformes/sequencage-adn-haut-debit-ngs/\n";

        let mut output: Vec<u8> = Vec::new();
        format_logo(Path::new("/opt/pipeline/bin"), &mut output).unwrap();
        let got = String::from_utf8(output).unwrap();

        assert_eq!(got, expected);
    }
}

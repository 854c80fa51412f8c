//! Dotenv line parsing.
//!
//! The default [`DotenvSyntax::Naive`] parser reproduces what the build hook
//! has always done: skip `#` lines and blank lines, split on the first `=`,
//! trim the value and peel off one quote character at each end. It does not
//! check that the quotes match. [`DotenvSyntax::Strict`] hands the same
//! source to `dotenvy` instead.

use crate::error::LoadError;
use crate::models::ConfigEntry;
use log::debug;
use std::io::{BufRead, Lines};
use std::path::{Path, PathBuf};

const QUOTES: [char; 2] = ['\'', '"'];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DotenvSyntax {
    #[default]
    Naive,
    Strict,
}

impl DotenvSyntax {
    /// Parses `naive` / `strict`, case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "naive" => Some(Self::Naive),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }
}

/// Parses one raw line. `Ok(None)` means the line is a comment or blank.
pub fn parse_line(line: &str, line_number: usize) -> Result<Option<ConfigEntry>, LoadError> {
    if line.starts_with('#') || line.trim().is_empty() {
        return Ok(None);
    }

    let (key, raw_value) = line
        .trim()
        .split_once('=')
        .ok_or(LoadError::Parse { line: line_number })?;

    Ok(Some(ConfigEntry {
        key: key.to_string(),
        value: strip_quotes(raw_value.trim()).to_string(),
    }))
}

/// Removes at most one `'` or `"` from each end, independently.
pub fn strip_quotes(value: &str) -> &str {
    let value = value.strip_prefix(QUOTES).unwrap_or(value);
    value.strip_suffix(QUOTES).unwrap_or(value)
}

/// Lazily yields entries from a line source, one forward pass.
///
/// Comment and blank lines are skipped. I/O failures are reported against
/// `path`; the first error ends the iteration for the caller.
pub struct Entries<R> {
    lines: Lines<R>,
    line_number: usize,
    path: PathBuf,
}

impl<R: BufRead> Entries<R> {
    pub fn new(reader: R, path: impl Into<PathBuf>) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
            path: path.into(),
        }
    }
}

impl<R: BufRead> Iterator for Entries<R> {
    type Item = Result<ConfigEntry, LoadError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(error) => return Some(Err(LoadError::file(&self.path, error))),
            };
            self.line_number += 1;

            match parse_line(&line, self.line_number) {
                Ok(Some(entry)) => return Some(Ok(entry)),
                Ok(None) => debug!("skipping line {} of {}", self.line_number, self.path.display()),
                Err(error) => return Some(Err(error)),
            }
        }
    }
}

/// Lazy entry stream for either syntax. `path` only labels I/O errors.
pub fn entries<'a, R: BufRead + 'a>(
    reader: R,
    path: &Path,
    syntax: DotenvSyntax,
) -> Box<dyn Iterator<Item = Result<ConfigEntry, LoadError>> + 'a> {
    match syntax {
        DotenvSyntax::Naive => Box::new(Entries::new(reader, path)),
        DotenvSyntax::Strict => {
            let path = path.to_path_buf();
            Box::new(dotenvy::from_read_iter(reader).map(move |item| {
                item.map(|(key, value)| ConfigEntry { key, value })
                    .map_err(|error| from_dotenvy(error, &path))
            }))
        }
    }
}

/// Reads every entry of `reader`, stopping at the first error.
pub fn read_entries<R: BufRead>(
    reader: R,
    path: &Path,
    syntax: DotenvSyntax,
) -> Result<Vec<ConfigEntry>, LoadError> {
    entries(reader, path, syntax).collect()
}

fn from_dotenvy(error: dotenvy::Error, path: &Path) -> LoadError {
    match error {
        dotenvy::Error::LineParse(_, position) => LoadError::Syntax { position },
        dotenvy::Error::Io(source) => LoadError::file(path, source),
        // `EnvVar` comes from `dotenvy::var`, never from the iterator.
        _ => LoadError::Syntax { position: 0 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn naive(input: &str) -> Result<Vec<ConfigEntry>, LoadError> {
        read_entries(Cursor::new(input), Path::new(".env"), DotenvSyntax::Naive)
    }

    fn entry(key: &str, value: &str) -> ConfigEntry {
        ConfigEntry {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn plain_pair() {
        assert_eq!(parse_line("FOO=bar", 1).unwrap(), Some(entry("FOO", "bar")));
    }

    #[test]
    fn splits_on_first_equals_only() {
        assert_eq!(
            parse_line("URL=http://host/?a=b", 1).unwrap(),
            Some(entry("URL", "http://host/?a=b"))
        );
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        assert_eq!(parse_line("# a comment", 1).unwrap(), None);
        assert_eq!(parse_line("#FOO=bar", 1).unwrap(), None);
        assert_eq!(parse_line("", 1).unwrap(), None);
        assert_eq!(parse_line("   \t", 1).unwrap(), None);
    }

    #[test]
    fn indented_hash_is_not_a_comment() {
        // Only a `#` in the very first column counts.
        assert_eq!(parse_line("  #FOO=bar", 1).unwrap(), Some(entry("#FOO", "bar")));
    }

    #[test]
    fn key_comes_from_trimmed_line() {
        assert_eq!(
            parse_line("  KEY = value  ", 1).unwrap(),
            Some(entry("KEY ", "value"))
        );
    }

    #[test]
    fn missing_equals_reports_line_number() {
        let error = parse_line("justsometext", 7).unwrap_err();
        assert!(matches!(error, LoadError::Parse { line: 7 }));
        assert!(!error.to_string().contains("justsometext"));
    }

    #[test]
    fn strips_matching_quotes() {
        assert_eq!(strip_quotes(r#""Alice""#), "Alice");
        assert_eq!(strip_quotes("'Alice'"), "Alice");
    }

    #[test]
    fn strips_mismatched_quotes_independently() {
        assert_eq!(strip_quotes(r#"'Alice""#), "Alice");
        assert_eq!(strip_quotes(r#""Alice"#), "Alice");
        assert_eq!(strip_quotes("Alice'"), "Alice");
    }

    #[test]
    fn strips_only_one_layer() {
        assert_eq!(strip_quotes(r#""'Alice'""#), "'Alice'");
        assert_eq!(strip_quotes(r#""""#), "");
        assert_eq!(strip_quotes(r#"""#), "");
    }

    #[test]
    fn value_is_trimmed_before_unquoting() {
        assert_eq!(
            parse_line(r#"NAME=  "Alice"  "#, 1).unwrap(),
            Some(entry("NAME", "Alice"))
        );
    }

    #[test]
    fn entries_skip_and_count_lines() {
        let input = "FOO=bar\n# a comment\n\nNAME=\"Alice\"\n";
        assert_eq!(
            naive(input).unwrap(),
            vec![entry("FOO", "bar"), entry("NAME", "Alice")]
        );
    }

    #[test]
    fn entries_stop_at_first_malformed_line() {
        let mut entries = Entries::new(Cursor::new("A=1\n\nbroken\nB=2\n"), ".env");
        assert_eq!(entries.next().unwrap().unwrap(), entry("A", "1"));
        assert!(matches!(
            entries.next().unwrap(),
            Err(LoadError::Parse { line: 3 })
        ));
    }

    #[test]
    fn windows_line_endings() {
        assert_eq!(naive("FOO=bar\r\n").unwrap(), vec![entry("FOO", "bar")]);
    }

    #[test]
    fn strict_syntax_handles_export_and_escapes() {
        let input = "export FOO=bar\nNAME=\"Al\\\"ice\"\n";
        let entries = read_entries(Cursor::new(input), Path::new(".env"), DotenvSyntax::Strict)
            .unwrap();
        assert_eq!(entries, vec![entry("FOO", "bar"), entry("NAME", "Al\"ice")]);
    }

    #[test]
    fn strict_syntax_error_hides_content() {
        let error = read_entries(
            Cursor::new("A=1\nhunter2\n"),
            Path::new(".env"),
            DotenvSyntax::Strict,
        )
        .unwrap_err();
        assert!(matches!(error, LoadError::Syntax { .. }));
        assert!(!error.to_string().contains("hunter2"));
    }

    #[test]
    fn syntax_names() {
        assert_eq!(DotenvSyntax::from_name("Strict"), Some(DotenvSyntax::Strict));
        assert_eq!(DotenvSyntax::from_name(" naive "), Some(DotenvSyntax::Naive));
        assert_eq!(DotenvSyntax::from_name("python"), None);
    }
}

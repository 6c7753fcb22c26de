//! Paragraph parser for dpkg/apt control-style files.
//!
//! A stanza is a run of `Key: Value` lines; blank lines separate stanzas.
//! Continuation lines (leading space or tab) fold into the value of the
//! field above them. The parser never rejects structurally odd input:
//! junk lines are dropped and whatever fields were recognizable are
//! yielded for the caller to validate.

use std::io::{self, BufRead};

/// One parsed paragraph: ordered `(key, value)` pairs with surrounding
/// whitespace trimmed.
///
/// When a key occurs twice in the same stanza the first occurrence wins;
/// a stray duplicate further down cannot override it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stanza {
    fields: Vec<(String, String)>,
}

impl Stanza {
    /// Value of the first field named `key`, if any. Keys match
    /// case-sensitively.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn absorb(&mut self, line: &str) {
        if line.starts_with(' ') || line.starts_with('\t') {
            // Continuation of the field above. A lone `.` stands for a
            // blank line inside the value.
            let Some((_, value)) = self.fields.last_mut() else {
                return;
            };
            let content = line[1..].trim_end();
            value.push('\n');
            if content.trim() != "." {
                value.push_str(content);
            }
        } else if let Some((key, value)) = line.split_once(':') {
            self.fields
                .push((key.trim().to_string(), value.trim().to_string()));
        }
        // Lines with neither a separator nor a continuation marker are junk.
    }
}

/// Lazy stanza sequence over a buffered reader. Yields one [`Stanza`] per
/// paragraph that produced at least one field; a final paragraph without a
/// trailing blank line is still yielded.
pub struct Stanzas<R> {
    lines: io::Lines<R>,
}

impl<R: BufRead> Stanzas<R> {
    pub fn new(reader: R) -> Self {
        Stanzas {
            lines: reader.lines(),
        }
    }
}

impl<R: BufRead> Iterator for Stanzas<R> {
    type Item = io::Result<Stanza>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut stanza = Stanza::default();
        loop {
            match self.lines.next() {
                Some(Ok(line)) if line.trim().is_empty() => {
                    if !stanza.is_empty() {
                        return Some(Ok(stanza));
                    }
                }
                Some(Ok(line)) => stanza.absorb(&line),
                Some(Err(err)) => return Some(Err(err)),
                None => {
                    if stanza.is_empty() {
                        return None;
                    }
                    return Some(Ok(stanza));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Vec<Stanza> {
        Stanzas::new(input.as_bytes())
            .collect::<io::Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_splits_paragraphs_on_blank_lines() {
        let stanzas = parse(
            "Package: dpkg\nStatus: install ok installed\n\n\nPackage: tar\nStatus: install ok installed\n",
        );
        assert_eq!(stanzas.len(), 2);
        assert_eq!(stanzas[0].get("Package"), Some("dpkg"));
        assert_eq!(stanzas[1].get("Package"), Some("tar"));
    }

    #[test]
    fn test_final_stanza_without_trailing_newline() {
        let stanzas = parse("Package: dpkg\nStatus: install ok installed");
        assert_eq!(stanzas.len(), 1);
        assert_eq!(stanzas[0].get("Status"), Some("install ok installed"));
    }

    #[test]
    fn test_values_are_trimmed_and_keys_case_sensitive() {
        let stanzas = parse("Package:   spaced   \n");
        assert_eq!(stanzas[0].get("Package"), Some("spaced"));
        assert_eq!(stanzas[0].get("package"), None);
    }

    #[test]
    fn test_first_duplicate_wins() {
        let stanzas = parse("Package: first\nPackage: second\n");
        assert_eq!(stanzas.len(), 1);
        assert_eq!(stanzas[0].get("Package"), Some("first"));
    }

    #[test]
    fn test_value_may_contain_colons() {
        let stanzas = parse("Version: 2:9.0.1378-2\n");
        assert_eq!(stanzas[0].get("Version"), Some("2:9.0.1378-2"));
    }

    #[test]
    fn test_continuation_lines_fold_into_value() {
        let stanzas = parse(
            "Package: libc6\nDescription: GNU C Library: Shared libraries\n Contains the standard libraries\n .\n and a dynamic linker.\n",
        );
        assert_eq!(
            stanzas[0].get("Description"),
            Some("GNU C Library: Shared libraries\nContains the standard libraries\n\nand a dynamic linker.")
        );
    }

    #[test]
    fn test_leading_continuation_without_field_is_dropped() {
        let stanzas = parse(" floating continuation\nPackage: dpkg\n");
        assert_eq!(stanzas.len(), 1);
        assert_eq!(stanzas[0].get("Package"), Some("dpkg"));
        assert_eq!(stanzas[0].get("Description"), None);
    }

    #[test]
    fn test_junk_lines_do_not_abort_the_stanza() {
        let stanzas = parse(
            "garbage without separator\nPackage: dpkg\nmore garbage\nStatus: install ok installed\n",
        );
        assert_eq!(stanzas.len(), 1);
        assert_eq!(stanzas[0].get("Package"), Some("dpkg"));
        assert_eq!(stanzas[0].get("Status"), Some("install ok installed"));
    }

    #[test]
    fn test_junk_only_paragraph_yields_nothing() {
        let stanzas = parse("no fields here\n\nPackage: dpkg\n");
        assert_eq!(stanzas.len(), 1);
        assert_eq!(stanzas[0].get("Package"), Some("dpkg"));
    }

    #[test]
    fn test_whitespace_only_line_separates_stanzas() {
        let stanzas = parse("Package: dpkg\n \t\nPackage: tar\n");
        assert_eq!(stanzas.len(), 2);
    }

    #[test]
    fn test_empty_input_yields_no_stanzas() {
        assert!(parse("").is_empty());
        assert!(parse("\n\n\n").is_empty());
    }
}

//! Key-value properties payload reader.
//!
//! Supports the common properties-file syntax: `key=value`, `key: value` and
//! `key value` pairs, `#`/`!` comment lines, backslash line continuations and
//! the `\t \n \r \f \\ \uXXXX` escapes. Later keys overwrite earlier ones.

use std::collections::BTreeMap;
use std::io::{self, Read};

/// Parsed properties payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: BTreeMap<String, String>,
}

impl Properties {
    /// Reads and parses a whole payload.
    ///
    /// # Errors
    /// - Returns the underlying I/O error when reading fails or the payload
    ///   is not UTF-8.
    pub fn load(mut reader: impl Read) -> io::Result<Self> {
        let mut raw = String::new();
        reader.read_to_string(&mut raw)?;
        Ok(Self::parse(&raw))
    }

    pub fn parse(raw: &str) -> Self {
        let mut entries = BTreeMap::new();
        for logical in logical_lines(raw) {
            let (key, value) = split_pair(&logical);
            entries.insert(unescape(key), unescape(value));
        }
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Joins continued physical lines and drops blanks and comments.
fn logical_lines(raw: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut pending: Option<String> = None;

    for physical in raw.lines() {
        let trimmed = physical.trim_start();
        let mut current = match pending.take() {
            Some(mut acc) => {
                acc.push_str(trimmed);
                acc
            }
            None => {
                if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
                    continue;
                }
                trimmed.to_string()
            }
        };

        if ends_with_continuation(&current) {
            current.pop();
            pending = Some(current);
        } else {
            lines.push(current);
        }
    }

    if let Some(last) = pending {
        lines.push(last);
    }
    lines
}

/// An odd number of trailing backslashes continues the line.
fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

fn split_pair(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();
    for (idx, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' | ' ' | '\t' | '\x0c' => {
                key_end = idx;
                break;
            }
            _ => {}
        }
    }

    let key = &line[..key_end];
    let rest = line[key_end..].trim_start_matches([' ', '\t', '\x0c']);
    let value = rest
        .strip_prefix(['=', ':'])
        .map(|value| value.trim_start_matches([' ', '\t', '\x0c']))
        .unwrap_or(rest);
    (key, value)
}

fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\x0c'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(decoded) if hex.len() == 4 => out.push(decoded),
                    _ => {
                        out.push_str("\\u");
                        out.push_str(&hex);
                    }
                }
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::Properties;

    #[test]
    fn parses_all_separator_styles() {
        let props = Properties::parse("a=1\nb: 2\nc 3\nd   =   4\n");
        assert_eq!(props.get("a"), Some("1"));
        assert_eq!(props.get("b"), Some("2"));
        assert_eq!(props.get("c"), Some("3"));
        assert_eq!(props.get("d"), Some("4"));
        assert_eq!(props.len(), 4);
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let props = Properties::parse("# comment\n! also comment\n\n   \nkey=value\n");
        assert_eq!(props.len(), 1);
        assert_eq!(props.get("key"), Some("value"));
    }

    #[test]
    fn joins_continuation_lines() {
        let props = Properties::parse("packages = com.acme.foo, \\\n    com.acme.bar\n");
        assert_eq!(props.get("packages"), Some("com.acme.foo, com.acme.bar"));
    }

    #[test]
    fn escaped_backslash_does_not_continue() {
        let props = Properties::parse("path=c:\\\\\nnext=1\n");
        assert_eq!(props.get("path"), Some("c:\\"));
        assert_eq!(props.get("next"), Some("1"));
    }

    #[test]
    fn decodes_escapes_in_keys_and_values() {
        let props = Properties::parse("my\\ key=tab\\there\nuni=\\u0041B\n");
        assert_eq!(props.get("my key"), Some("tab\there"));
        assert_eq!(props.get("uni"), Some("AB"));
    }

    #[test]
    fn key_without_value_maps_to_empty_string() {
        let props = Properties::parse("flag\n");
        assert_eq!(props.get("flag"), Some(""));
    }

    #[test]
    fn load_reads_from_reader() {
        let props = Properties::load("packages=com.acme".as_bytes()).expect("load should succeed");
        assert_eq!(props.get("packages"), Some("com.acme"));
    }
}

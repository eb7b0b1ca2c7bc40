//! YAML frontmatter extraction
//!
//! A document carries frontmatter when it starts with a `---` line, followed
//! by at least one character of header content and a closing `---` line.
//! Line endings may be `\n` or `\r\n`.

use std::sync::LazyLock;

use regex::Regex;
use serde_yaml::Value;

static HEADER_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A---\r?\n((?s:.+?))\r?\n---").expect("Invalid frontmatter regex")
});

/// Outcome of splitting a document into header and body.
#[derive(Debug, Clone, PartialEq)]
pub enum Extracted {
    /// No header block. `body` is the original text, untouched.
    Absent { body: String },
    /// The header parsed. `body` is the remainder, trimmed.
    Parsed { frontmatter: Value, body: String },
    /// A header block exists but is not valid YAML.
    Invalid { message: String },
}

/// Split `text` into its frontmatter and body.
///
/// A header that parses to an empty scalar (`~`, `false`, `0` or `""`)
/// carries no metadata and is reported as [`Extracted::Absent`].
pub fn extract(text: &str) -> Extracted {
    let Some(captures) = HEADER_BLOCK.captures(text) else {
        return Extracted::Absent {
            body: text.to_string(),
        };
    };

    let (Some(block), Some(header)) = (captures.get(0), captures.get(1)) else {
        return Extracted::Absent {
            body: text.to_string(),
        };
    };

    match serde_yaml::from_str::<Value>(header.as_str()) {
        Ok(frontmatter) if is_empty_scalar(&frontmatter) => Extracted::Absent {
            body: text.to_string(),
        },
        Ok(frontmatter) => Extracted::Parsed {
            frontmatter,
            body: text[block.end()..].trim().to_string(),
        },
        Err(e) => Extracted::Invalid {
            message: e.to_string(),
        },
    }
}

fn is_empty_scalar(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0 || f.is_nan()),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn splits_header_and_trimmed_body() {
        let text = "---\nto: [\"peer1\"]\nexcept: []\n---\n\n# Title\n\n";
        let Extracted::Parsed { frontmatter, body } = extract(text) else {
            panic!("expected parsed frontmatter");
        };
        assert_eq!(body, "# Title");
        assert!(frontmatter.get("to").unwrap().is_sequence());
    }

    #[test]
    fn accepts_crlf_line_endings() {
        let text = "---\r\ntitle: x\r\n---\r\nBody\r\n";
        let Extracted::Parsed { frontmatter, body } = extract(text) else {
            panic!("expected parsed frontmatter");
        };
        assert_eq!(body, "Body");
        assert_eq!(frontmatter.get("title").unwrap().as_str(), Some("x"));
    }

    #[test]
    fn no_header_returns_original_text() {
        let text = "# Just a note\n\nNo metadata here.\n";
        assert_eq!(
            extract(text),
            Extracted::Absent {
                body: text.to_string()
            }
        );
    }

    #[test]
    fn header_must_start_the_document() {
        let text = "\n---\nto: []\n---\nBody";
        assert!(matches!(extract(text), Extracted::Absent { .. }));
    }

    #[test]
    fn malformed_yaml_is_invalid() {
        let text = "---\nto: [unclosed\n---\nBody";
        assert!(matches!(extract(text), Extracted::Invalid { .. }));
    }

    #[rstest]
    #[case("~")]
    #[case("null")]
    #[case("false")]
    #[case("0")]
    #[case("\"\"")]
    fn empty_scalar_header_counts_as_absent(#[case] header: &str) {
        let text = format!("---\n{header}\n---\nBody");
        assert!(matches!(extract(&text), Extracted::Absent { .. }));
    }

    #[rstest]
    #[case("true")]
    #[case("1")]
    #[case("draft")]
    fn other_scalar_header_is_parsed(#[case] header: &str) {
        let text = format!("---\n{header}\n---\nBody");
        assert!(matches!(extract(&text), Extracted::Parsed { .. }));
    }

    #[test]
    fn only_first_closing_delimiter_ends_the_header() {
        let text = "---\na: 1\n---\nbody\n---\nmore";
        let Extracted::Parsed { body, .. } = extract(text) else {
            panic!("expected parsed frontmatter");
        };
        assert_eq!(body, "body\n---\nmore");
    }
}

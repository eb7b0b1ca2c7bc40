//! Typed report draft header

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use crate::{Error, Result};

/// The distribution header of a report draft.
///
/// ```yaml
/// to: ["alice", "group:friends"]
/// except: []
/// sourcePath: "attachments/"
/// destinationPath: "shared/attachments"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportFrontmatter {
    /// Recipient expressions to include
    pub to: Vec<String>,
    /// Recipient expressions to exclude
    pub except: Vec<String>,
    /// Content to distribute instead of the body, relative to the draft
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_path: Option<String>,
    /// Where the content lands under each recipient's outgoing directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_path: Option<String>,
}

impl ReportFrontmatter {
    /// Validate and convert a parsed header.
    ///
    /// `to` and `except` must both be present as sequences; anything else is
    /// [`Error::MissingRecipientFields`]. Fields of the wrong type are
    /// [`Error::InvalidFrontmatter`].
    pub fn from_value(value: Value) -> Result<Self> {
        let has_sequence = |key: &str| value.get(key).is_some_and(Value::is_sequence);
        if !has_sequence("to") || !has_sequence("except") {
            return Err(Error::MissingRecipientFields);
        }

        serde_yaml::from_value(value).map_err(|e| Error::InvalidFrontmatter {
            message: e.to_string(),
        })
    }

    /// `sourcePath`, treating an empty string as absent.
    pub fn source_path(&self) -> Option<&str> {
        self.source_path.as_deref().filter(|s| !s.is_empty())
    }

    /// `destinationPath`, treating an empty string as absent.
    pub fn destination_path(&self) -> Option<&str> {
        self.destination_path.as_deref().filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(yaml: &str) -> Result<ReportFrontmatter> {
        ReportFrontmatter::from_value(serde_yaml::from_str(yaml).unwrap())
    }

    #[test]
    fn reads_all_fields() {
        let fm = parse(
            "to: [alice, \"group:friends\"]\nexcept: [bob]\nsourcePath: a.txt\ndestinationPath: out/a.txt",
        )
        .unwrap();
        assert_eq!(fm.to, vec!["alice", "group:friends"]);
        assert_eq!(fm.except, vec!["bob"]);
        assert_eq!(fm.source_path(), Some("a.txt"));
        assert_eq!(fm.destination_path(), Some("out/a.txt"));
    }

    #[test]
    fn empty_paths_are_absent() {
        let fm = parse("to: []\nexcept: []\nsourcePath: \"\"\ndestinationPath: ~").unwrap();
        assert_eq!(fm.source_path(), None);
        assert_eq!(fm.destination_path(), None);
    }

    #[rstest]
    #[case("except: []")]
    #[case("to: []")]
    #[case("to: alice\nexcept: []")]
    #[case("to: []\nexcept: {}")]
    #[case("just a string")]
    fn requires_recipient_sequences(#[case] yaml: &str) {
        assert!(matches!(parse(yaml), Err(Error::MissingRecipientFields)));
    }

    #[test]
    fn rejects_non_string_recipients() {
        assert!(matches!(
            parse("to: [[nested]]\nexcept: []"),
            Err(Error::InvalidFrontmatter { .. })
        ));
    }
}

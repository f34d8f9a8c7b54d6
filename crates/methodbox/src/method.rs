//! A single method card and its catalog attributes

use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use crate::taxonomy::{Phase, SizeGroup, TimeBudget};

/// One method card from the catalog.
///
/// Only the title is required. The three classification fields are
/// optional: a card without them (or with a keyword the vocabulary does
/// not recognize) still loads and can be looked up by identifier, but it
/// takes part in neither phase grouping nor filtering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MethodEntry {
    /// Display title
    pub title: String,

    /// Design process phase the method belongs to
    #[serde(default, deserialize_with = "lenient_keyword")]
    pub phase: Option<Phase>,

    /// Time the method needs
    #[serde(default, deserialize_with = "lenient_keyword")]
    pub time: Option<TimeBudget>,

    /// Group size the method works best with
    #[serde(default, rename = "sizeGroup", deserialize_with = "lenient_keyword")]
    pub size_group: Option<SizeGroup>,

    /// One-sentence description
    #[serde(default)]
    pub short: Option<String>,

    /// Longer definition of the method
    #[serde(default)]
    pub definition: Option<String>,

    /// Ordered how-to steps
    #[serde(default)]
    pub howto: Vec<String>,

    /// Practical tips
    #[serde(default)]
    pub tips: Vec<String>,

    /// A worked example
    #[serde(default)]
    pub example: Option<String>,
}

/// Deserialize an optional classification keyword.
///
/// Unrecognized keywords load as `None`: the entry stays retrievable by
/// identifier but drops out of grouping and filtering. Only a value that
/// is not a string (or JSON `null`) rejects the document.
fn lenient_keyword<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|keyword| keyword.parse().ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(raw: &str) -> MethodEntry {
        serde_json::from_str(raw).expect("entry should deserialize")
    }

    #[test]
    fn test_full_entry_deserializes() {
        let entry = parse(
            r#"{
                "title": "Brainstorming",
                "phase": "Ideate",
                "time": "short",
                "sizeGroup": "small",
                "short": "Generate many ideas fast.",
                "definition": "A group idea-generation technique.",
                "howto": ["Frame the question", "Collect ideas", "Cluster"],
                "tips": ["Defer judgement"],
                "example": "100 ideas for onboarding in 20 minutes."
            }"#,
        );

        assert_eq!(entry.title, "Brainstorming");
        assert_eq!(entry.phase, Some(Phase::Ideate));
        assert_eq!(entry.time, Some(TimeBudget::Short));
        assert_eq!(entry.size_group, Some(SizeGroup::Small));
        assert_eq!(entry.howto.len(), 3);
        assert_eq!(entry.tips, vec!["Defer judgement".to_string()]);
    }

    #[test]
    fn test_title_only_entry_deserializes() {
        let entry = parse(r#"{"title": "Mystery method"}"#);

        assert_eq!(entry.title, "Mystery method");
        assert_eq!(entry.phase, None);
        assert_eq!(entry.time, None);
        assert_eq!(entry.size_group, None);
        assert!(entry.howto.is_empty());
        assert!(entry.tips.is_empty());
    }

    #[test]
    fn test_unrecognized_keywords_load_as_none() {
        let entry = parse(
            r#"{"title": "Odd card", "phase": "Decide", "time": "whenever", "sizeGroup": "huge"}"#,
        );

        assert_eq!(entry.phase, None);
        assert_eq!(entry.time, None);
        assert_eq!(entry.size_group, None);
    }

    #[test]
    fn test_decorated_size_group_keyword_loads() {
        let entry = parse(r#"{"title": "Persona", "sizeGroup": "medium (6-10)"}"#);
        assert_eq!(entry.size_group, Some(SizeGroup::Medium));
    }

    #[test]
    fn test_missing_title_is_rejected() {
        let result = serde_json::from_str::<MethodEntry>(r#"{"phase": "Ideate"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_non_string_keyword_is_rejected() {
        let result = serde_json::from_str::<MethodEntry>(r#"{"title": "Bad", "phase": 3}"#);
        assert!(result.is_err());
    }
}

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A taxonomy tag of the form `category/subcategory?/value`
///
/// Tags travel as plain strings on the wire; this type is used internally
/// when a tag has to be assembled or split into its path segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub category: String,
    pub subcategory: Option<String>,
    pub value: String,
}

impl Tag {
    /// Parse a slash-delimited tag string
    ///
    /// The first segment is the category, the last is the value, anything in
    /// between is the subcategory path. Returns `None` for strings with
    /// fewer than two segments or empty segments.
    pub fn parse(raw: &str) -> Option<Self> {
        let segments: Vec<&str> = raw.split('/').collect();
        if segments.len() < 2 || segments.iter().any(|s| s.is_empty()) {
            return None;
        }

        Some(Self {
            category: segments[0].to_string(),
            subcategory: if segments.len() > 2 {
                Some(segments[1..segments.len() - 1].join("/"))
            } else {
                None
            },
            value: segments[segments.len() - 1].to_string(),
        })
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.subcategory {
            Some(sub) => write!(f, "{}/{}/{}", self.category, sub, self.value),
            None => write!(f, "{}/{}", self.category, self.value),
        }
    }
}

/// A derived tag that activates when its trigger tags are selected together
///
/// The description is localized per language code so the consumer can show
/// the note in the user's language.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConditionalTag {
    pub description: BTreeMap<String, String>,
    pub trigger_tags: Vec<String>,
}

/// Suggested tags for one category, with a heuristic confidence in [0, 1]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Suggestion {
    pub category: String,
    pub suggested_tags: Vec<String>,
    pub confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditional_tags: Option<BTreeMap<String, ConditionalTag>>,
}

impl Suggestion {
    pub fn new(category: &str, suggested_tags: Vec<String>, confidence: f64) -> Self {
        Self {
            category: category.to_string(),
            suggested_tags,
            confidence,
            conditional_tags: None,
        }
    }
}

/// Error descriptor embedded in fallback responses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorInfo {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Response returned by every suggestion entry point
///
/// `is_fallback` and `error` only appear when the engine had to fall back to
/// the fixed default payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuggestionResponse {
    pub suggestions: Vec<Suggestion>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_fallback: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

impl SuggestionResponse {
    pub fn new(suggestions: Vec<Suggestion>) -> Self {
        Self {
            suggestions,
            is_fallback: false,
            error: None,
        }
    }
}

/// Index-aligned labels and scores returned by the zero-shot classifier
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CandidateResult {
    pub labels: Vec<String>,
    pub scores: Vec<f64>,
}

impl CandidateResult {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Fields extracted from a structured filename
///
/// Every field is optional: absent or malformed tokens parse to `None`
/// rather than an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ParsedFilename {
    pub fiscal_year: Option<String>,
    pub quarter: Option<String>,
    pub project_type: Option<String>,
    pub language: Option<String>,
    pub vehicles: Vec<String>,
    pub media_type: Option<String>,
    pub dimensions: Option<String>,
    pub version: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_parse_with_subcategory() {
        let tag = Tag::parse("filter/vehicle/qashqai").unwrap();
        assert_eq!(tag.category, "filter");
        assert_eq!(tag.subcategory, Some("vehicle".to_string()));
        assert_eq!(tag.value, "qashqai");
    }

    #[test]
    fn test_tag_parse_without_subcategory() {
        let tag = Tag::parse("language/finnish").unwrap();
        assert_eq!(tag.category, "language");
        assert_eq!(tag.subcategory, None);
        assert_eq!(tag.value, "finnish");
    }

    #[test]
    fn test_tag_parse_deep_subcategory() {
        let tag = Tag::parse("car/model/qashqai/2024").unwrap();
        assert_eq!(tag.category, "car");
        assert_eq!(tag.subcategory, Some("model/qashqai".to_string()));
        assert_eq!(tag.value, "2024");
    }

    #[test]
    fn test_tag_parse_rejects_bare_category() {
        assert_eq!(Tag::parse("filter"), None);
        assert_eq!(Tag::parse("filter//qashqai"), None);
    }

    #[test]
    fn test_tag_display_round_trip() {
        for raw in ["filter/vehicle/qashqai", "language/finnish", "car/model/leaf/2023"] {
            let tag = Tag::parse(raw).unwrap();
            assert_eq!(tag.to_string(), raw);
        }
    }

    #[test]
    fn test_response_serialization_omits_fallback_fields() {
        let response = SuggestionResponse::new(vec![Suggestion::new(
            "language",
            vec!["language/finnish".to_string()],
            0.9,
        )]);

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("is_fallback").is_none());
        assert!(json.get("error").is_none());
        assert_eq!(json["suggestions"][0]["category"], "language");
    }

    #[test]
    fn test_response_serialization_keeps_fallback_fields() {
        let response = SuggestionResponse {
            suggestions: Vec::new(),
            is_fallback: true,
            error: Some(ErrorInfo {
                message: "boom".to_string(),
                kind: "TaxonomyError".to_string(),
            }),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["is_fallback"], true);
        assert_eq!(json["error"]["type"], "TaxonomyError");
        assert_eq!(json["error"]["message"], "boom");
    }

    #[test]
    fn test_suggestion_serialization_omits_conditional_tags() {
        let suggestion = Suggestion::new("filter", vec!["filter/vehicle/juke".to_string()], 0.9);
        let json = serde_json::to_value(&suggestion).unwrap();
        assert!(json.get("conditional_tags").is_none());
    }
}

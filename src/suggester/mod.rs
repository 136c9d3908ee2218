pub mod asset;
pub mod fallback;
pub mod template;

use crate::classifier::Classify;
use crate::models::SuggestionResponse;
use crate::taxonomy::{CarModelTable, TagHierarchy, TaxonomyError};
use std::sync::Arc;
use thiserror::Error;

/// Errors raised inside the suggestion engine
///
/// These never escape the public entry points; the boundary converts them
/// into the fixed fallback payload, embedding the message and kind name.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Taxonomy(#[from] TaxonomyError),
}

impl EngineError {
    /// Stable kind name reported in fallback responses
    pub fn kind(&self) -> &'static str {
        match self {
            EngineError::Taxonomy(_) => "TaxonomyError",
        }
    }
}

/// Tag suggestion engine
///
/// Holds the read-only taxonomy and car-model tables loaded at startup plus
/// an optional zero-shot classifier. Constructed once and shared; all entry
/// points take `&self` and always return a well-formed response.
pub struct Suggester {
    pub(crate) taxonomy: TagHierarchy,
    pub(crate) car_models: CarModelTable,
    pub(crate) classifier: Option<Arc<dyn Classify>>,
}

impl Suggester {
    /// Create an engine without a classifier (keyword matching only)
    pub fn new(taxonomy: TagHierarchy, car_models: CarModelTable) -> Self {
        Self {
            taxonomy,
            car_models,
            classifier: None,
        }
    }

    /// Attach a zero-shot classifier used to refine template-mode matches
    pub fn with_classifier(mut self, classifier: Arc<dyn Classify>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// Full tag hierarchy, for discovery consumers
    pub fn hierarchy(&self) -> &TagHierarchy {
        &self.taxonomy
    }

    /// Suggest tags for a template from a free-text description
    pub async fn suggest_tags(&self, description: &str) -> SuggestionResponse {
        match template::suggest(self, description).await {
            Ok(response) => response,
            Err(err) => {
                eprintln!("Error getting suggestions: {err}");
                fallback::template_fallback(&err)
            }
        }
    }

    /// Suggest tags for an asset (image) from a free-text description
    pub fn suggest_asset_tags(&self, description: &str) -> SuggestionResponse {
        match asset::suggest(self, description) {
            Ok(response) => response,
            Err(err) => {
                eprintln!("Error getting asset suggestions: {err}");
                fallback::asset_fallback(&err)
            }
        }
    }

    /// Suggest tags from a structured filename
    ///
    /// Filename parsing is deliberately permissive and cannot fail, so this
    /// path never produces a fallback response.
    pub fn suggest_tags_from_filename(&self, filename: &str) -> SuggestionResponse {
        crate::filename::suggest_from_filename(filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CandidateResult;
    use anyhow::Result;
    use serde_json::json;

    struct FailingClassifier;

    #[async_trait::async_trait]
    impl Classify for FailingClassifier {
        async fn classify(&self, _: &str, _: &[String]) -> Result<CandidateResult> {
            anyhow::bail!("classifier offline")
        }
    }

    fn valid_hierarchy() -> TagHierarchy {
        TagHierarchy::from_value(json!({
            "filter": {"subcategories": {"vehicle": ["qashqai", "juke", "leaf"]}}
        }))
    }

    fn corrupt_hierarchy() -> TagHierarchy {
        TagHierarchy::from_value(json!({"filter": "not-a-branch"}))
    }

    #[tokio::test]
    async fn test_template_mode_falls_back_on_corrupt_taxonomy() {
        let engine = Suggester::new(corrupt_hierarchy(), CarModelTable::default());
        let response = engine.suggest_tags("a qashqai print ad").await;

        assert!(response.is_fallback);
        let error = response.error.unwrap();
        assert_eq!(error.kind, "TaxonomyError");
        assert!(!error.message.is_empty());
    }

    #[tokio::test]
    async fn test_asset_mode_falls_back_on_corrupt_taxonomy() {
        let engine = Suggester::new(corrupt_hierarchy(), CarModelTable::default());
        let response = engine.suggest_asset_tags("a packshot image");

        assert!(response.is_fallback);
        assert_eq!(response.error.unwrap().kind, "TaxonomyError");
    }

    #[tokio::test]
    async fn test_classifier_failure_does_not_trigger_fallback() {
        let engine = Suggester::new(valid_hierarchy(), CarModelTable::default())
            .with_classifier(Arc::new(FailingClassifier));
        let response = engine.suggest_tags("a qashqai print ad in finnish").await;

        assert!(!response.is_fallback);
        assert!(response.error.is_none());
        let filter = response
            .suggestions
            .iter()
            .find(|s| s.category == "filter")
            .unwrap();
        assert_eq!(filter.suggested_tags[0], "filter/vehicle/qashqai");
    }

    #[test]
    fn test_filename_mode_never_falls_back() {
        let engine = Suggester::new(corrupt_hierarchy(), CarModelTable::default());
        let response = engine.suggest_tags_from_filename("FY24_Q1_MASTER_FIN_QASHQAI_PRINT_V1");

        assert!(!response.is_fallback);
        assert!(response.error.is_none());
        assert!(!response.suggestions.is_empty());
    }
}

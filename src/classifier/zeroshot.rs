use crate::classifier::{Classify, ResponseCache};
use crate::config::ClassifierConfig;
use crate::models::CandidateResult;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Zero-shot classification provider backed by the Hugging Face inference API
///
/// Candidate labels are sent in chunks of at most `batch_size` (the upstream
/// model rejects larger label sets) and per-chunk results are merged in call
/// order. Any chunk failure fails the whole call; successful calls are
/// cached by description and sorted label set.
pub struct ZeroShotClassifier {
    api_url: String,
    api_key: String,
    batch_size: usize,
    client: reqwest::Client,
    cache: ResponseCache,
}

impl ZeroShotClassifier {
    /// Create a classifier from configuration and a resolved API key
    pub fn from_config(config: &ClassifierConfig, api_key: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build classifier HTTP client")?;

        Ok(Self {
            api_url: config.url.clone(),
            api_key,
            batch_size: config.batch_size.max(1),
            client,
            cache: ResponseCache::new(
                config.cache_capacity,
                Duration::from_secs(config.cache_ttl_secs),
            ),
        })
    }

    /// Create a classifier with default settings
    pub fn new(api_key: String) -> Result<Self> {
        Self::from_config(&ClassifierConfig::default(), api_key)
    }
}

#[derive(Serialize)]
struct ClassificationRequest<'a> {
    inputs: &'a str,
    parameters: ClassificationParameters<'a>,
}

#[derive(Serialize)]
struct ClassificationParameters<'a> {
    candidate_labels: &'a [String],
    multi_label: bool,
}

#[derive(Deserialize)]
struct ClassificationResponse {
    #[serde(default)]
    labels: Vec<String>,
    #[serde(default)]
    scores: Vec<f64>,
}

#[async_trait::async_trait]
impl Classify for ZeroShotClassifier {
    async fn classify(
        &self,
        description: &str,
        candidate_labels: &[String],
    ) -> Result<CandidateResult> {
        if candidate_labels.is_empty() {
            return Ok(CandidateResult::default());
        }

        let key = ResponseCache::key(description, candidate_labels);
        if let Some(cached) = self.cache.get(&key) {
            return Ok(cached);
        }

        let mut combined = CandidateResult::default();

        for chunk in candidate_labels.chunks(self.batch_size) {
            let request = ClassificationRequest {
                inputs: description,
                parameters: ClassificationParameters {
                    candidate_labels: chunk,
                    multi_label: true,
                },
            };

            let response = self
                .client
                .post(&self.api_url)
                .bearer_auth(&self.api_key)
                .json(&request)
                .send()
                .await
                .context("Failed to reach classifier service")?;

            if !response.status().is_success() {
                let status = response.status();
                let error_text = response.text().await.unwrap_or_default();
                anyhow::bail!("Classifier API returned error {}: {}", status, error_text);
            }

            let parsed: ClassificationResponse = response
                .json()
                .await
                .context("Failed to parse classifier response")?;

            combined.labels.extend(parsed.labels);
            combined.scores.extend(parsed.scores);
        }

        self.cache.insert(key, combined.clone());

        Ok(combined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifier_creation_defaults() {
        let classifier = ZeroShotClassifier::new("hf_test".to_string()).unwrap();
        assert_eq!(
            classifier.api_url,
            "https://api-inference.huggingface.co/models/facebook/bart-large-mnli"
        );
        assert_eq!(classifier.batch_size, 10);
    }

    #[test]
    fn test_classifier_creation_from_config() {
        let config = ClassifierConfig {
            url: "http://localhost:9000/classify".to_string(),
            batch_size: 4,
            ..ClassifierConfig::default()
        };

        let classifier = ZeroShotClassifier::from_config(&config, "hf_test".to_string()).unwrap();
        assert_eq!(classifier.api_url, "http://localhost:9000/classify");
        assert_eq!(classifier.batch_size, 4);
    }

    #[test]
    fn test_classifier_batch_size_floor() {
        let config = ClassifierConfig {
            batch_size: 0,
            ..ClassifierConfig::default()
        };

        let classifier = ZeroShotClassifier::from_config(&config, "hf_test".to_string()).unwrap();
        assert_eq!(classifier.batch_size, 1);
    }

    #[tokio::test]
    async fn test_classify_empty_labels_skips_network() {
        let classifier = ZeroShotClassifier::new("hf_test".to_string()).unwrap();
        let result = classifier.classify("a print ad", &[]).await.unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    #[ignore] // Requires network access and a real API key
    async fn test_classify_against_live_service() {
        let api_key = std::env::var("HUGGINGFACE_API_KEY").unwrap();
        let classifier = ZeroShotClassifier::new(api_key).unwrap();

        let labels: Vec<String> = (0..12).map(|i| format!("label-{i}")).collect();
        let result = classifier
            .classify("a qashqai print advert", &labels)
            .await
            .unwrap();

        // Two chunks merged back into one index-aligned result
        assert_eq!(result.labels.len(), 12);
        assert_eq!(result.scores.len(), 12);
    }
}

use crate::models::CandidateResult;
use anyhow::Result;

/// Trait for zero-shot classification backends
#[async_trait::async_trait]
pub trait Classify: Send + Sync {
    /// Score candidate tag labels against a description
    ///
    /// Returned labels and scores are index-aligned. Implementations may
    /// reorder labels relative to the input, but a label's score must stay
    /// at the same index as the label itself.
    async fn classify(
        &self,
        description: &str,
        candidate_labels: &[String],
    ) -> Result<CandidateResult>;
}

pub mod cache;
pub mod r#trait;
pub mod zeroshot;

pub use cache::ResponseCache;
pub use r#trait::Classify;
pub use zeroshot::ZeroShotClassifier;

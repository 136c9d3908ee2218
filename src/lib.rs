pub mod classifier;
pub mod config;
pub mod filename;
pub mod models;
pub mod rules;
pub mod suggester;
pub mod taxonomy;

pub use classifier::{Classify, ZeroShotClassifier};
pub use models::{Suggestion, SuggestionResponse};
pub use suggester::Suggester;
pub use taxonomy::{CarModelTable, TagHierarchy};

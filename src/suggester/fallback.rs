use crate::models::{ErrorInfo, Suggestion, SuggestionResponse};
use crate::suggester::EngineError;

/// Fixed default payloads returned when the engine fails
///
/// The content is deliberately hardcoded rather than derived from partial
/// state, so consumers and tests can rely on the exact tags.

fn error_info(error: &EngineError) -> ErrorInfo {
    ErrorInfo {
        message: error.to_string(),
        kind: error.kind().to_string(),
    }
}

/// Template-mode fallback suggestions
pub fn template_fallback(error: &EngineError) -> SuggestionResponse {
    SuggestionResponse {
        suggestions: vec![
            Suggestion::new("filter", vec!["filter/vehicle/qashqai".to_string()], 0.95),
            Suggestion::new("system/media", vec!["system/media/print".to_string()], 0.85),
            Suggestion::new("system/size", vec!["system/size/halfpage".to_string()], 0.80),
            Suggestion::new("language", vec!["language/finnish".to_string()], 0.90),
        ],
        is_fallback: true,
        error: Some(error_info(error)),
    }
}

/// Asset-mode fallback suggestions
pub fn asset_fallback(error: &EngineError) -> SuggestionResponse {
    SuggestionResponse {
        suggestions: vec![
            Suggestion::new("type", vec!["type/image".to_string()], 0.95),
            Suggestion::new("language", vec!["language/english".to_string()], 0.90),
            Suggestion::new("system", vec!["system/origin/aws".to_string()], 1.0),
        ],
        is_fallback: true,
        error: Some(error_info(error)),
    }
}

use crate::models::{Suggestion, SuggestionResponse};
use crate::rules;
use crate::suggester::{EngineError, Suggester};

/// Asset-mode suggestion pipeline
///
/// Assets (images) are tagged from keywords alone: asset type, language
/// with an english default, a taxonomy-listed vehicle when one is named,
/// and the fixed storage origin. Matches are grouped per category at a
/// single high confidence.
pub(crate) fn suggest(
    engine: &Suggester,
    description: &str,
) -> Result<SuggestionResponse, EngineError> {
    let description_lower = description.to_lowercase();
    let mut relevant: Vec<String> = Vec::new();

    for (asset_type, keywords) in rules::ASSET_TYPE_KEYWORDS {
        if keywords
            .iter()
            .any(|keyword| description_lower.contains(keyword))
        {
            relevant.push(format!("type/{asset_type}"));
            break;
        }
    }

    let language = rules::ASSET_LANGUAGE_KEYWORDS
        .iter()
        .find(|(_, keywords)| {
            keywords
                .iter()
                .any(|keyword| description_lower.contains(keyword))
        })
        .map(|(language, _)| *language)
        .unwrap_or("english");
    relevant.push(format!("language/{language}"));

    for model in engine.taxonomy.vehicle_models()? {
        if description_lower.contains(&model.to_lowercase()) {
            relevant.push(format!("filter/vehicle/{model}"));
            break;
        }
    }

    // Assets are always served from the AWS origin
    relevant.push("system/origin/aws".to_string());

    let suggestions = ["type", "language", "filter", "system"]
        .into_iter()
        .filter_map(|category| {
            let tags: Vec<String> = relevant
                .iter()
                .filter(|tag| tag.split('/').next() == Some(category))
                .cloned()
                .collect();
            if tags.is_empty() {
                None
            } else {
                Some(Suggestion::new(category, tags, 0.95))
            }
        })
        .collect();

    Ok(SuggestionResponse::new(suggestions))
}

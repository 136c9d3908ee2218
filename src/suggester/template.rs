use crate::models::{CandidateResult, ConditionalTag, Suggestion, SuggestionResponse, Tag};
use crate::rules::{self, MediaRule};
use crate::suggester::{EngineError, Suggester};
use std::collections::BTreeMap;

/// Template-mode suggestion pipeline
///
/// Categories are processed in a fixed order (filter, system/media,
/// system/size, language), each resolving classifier match, then keyword
/// match, then its category default. Two conditional categories follow:
/// the banner size placeholder and the price-lectern car-model block.
pub(crate) async fn suggest(
    engine: &Suggester,
    description: &str,
) -> Result<SuggestionResponse, EngineError> {
    let known_models = engine.taxonomy.vehicle_models()?;
    let description_lower = description.to_lowercase();

    let candidates = classifier_scores(engine, description, &description_lower).await;
    let detected_media = detect_media_type(&description_lower);

    let mut suggestions = Vec::new();
    suggestions.push(filter_suggestion(&description_lower, &candidates));
    suggestions.push(media_suggestion(detected_media));
    if let Some(size) = size_suggestion(&description_lower, detected_media) {
        suggestions.push(size);
    }
    suggestions.push(language_suggestion(&description_lower));

    match detected_media.map(|rule| rule.name) {
        Some("html5-banner") => {
            // Consumer must fill in the concrete dimensions
            suggestions.push(Suggestion::new(
                "banner/size",
                vec!["banner/size/<width>x<height>".to_string()],
                0.5,
            ));
        }
        Some("pricelectern") => {
            if let Some(car_model) = car_model_suggestion(engine, &suggestions, &known_models) {
                suggestions.push(car_model);
            }
        }
        _ => {}
    }

    Ok(SuggestionResponse::new(suggestions))
}

/// Candidate tags worth sending to the classifier for this description
///
/// Only a small, description-relevant subset of the taxonomy is offered as
/// candidate labels; the classifier cannot score hundreds of tags.
fn relevant_tags(description_lower: &str) -> Vec<String> {
    let mut tags = Vec::new();

    for vehicle in rules::CLASSIFIER_VEHICLES {
        if description_lower.contains(vehicle) {
            tags.push(format!("filter/vehicle/{vehicle}"));
            break;
        }
    }

    if rules::CLASSIFIER_LANGUAGES
        .iter()
        .any(|lang| description_lower.contains(lang))
    {
        tags.extend(
            rules::CLASSIFIER_LANGUAGES
                .iter()
                .map(|lang| format!("language/{lang}")),
        );
    }

    if rules::CLASSIFIER_MEDIA
        .iter()
        .any(|media| description_lower.contains(media))
    {
        tags.extend(
            rules::CLASSIFIER_MEDIA
                .iter()
                .map(|media| format!("system/media/{media}")),
        );
    }

    tags
}

/// Call the classifier if one is attached; failures degrade to keyword-only
async fn classifier_scores(
    engine: &Suggester,
    description: &str,
    description_lower: &str,
) -> CandidateResult {
    let Some(classifier) = &engine.classifier else {
        return CandidateResult::default();
    };

    let relevant = relevant_tags(description_lower);
    if relevant.is_empty() {
        return CandidateResult::default();
    }

    match classifier.classify(description, &relevant).await {
        Ok(result) => result,
        Err(err) => {
            eprintln!("Classifier error: {err}. Proceeding with keyword matching only.");
            CandidateResult::default()
        }
    }
}

/// Detect the media type, social-media keywords first, then table order
fn detect_media_type(description_lower: &str) -> Option<&'static MediaRule> {
    if rules::SOCIAL_MEDIA_KEYWORDS
        .iter()
        .any(|keyword| description_lower.contains(keyword))
    {
        return rules::MEDIA_RULES.iter().find(|rule| rule.name == "socialmedia");
    }

    rules::MEDIA_RULES.iter().find(|rule| {
        rule.keywords
            .iter()
            .any(|keyword| description_lower.contains(keyword))
    })
}

fn filter_suggestion(description_lower: &str, candidates: &CandidateResult) -> Suggestion {
    // Classifier-informed match first: vehicle table order, a label naming
    // the model, and a score above the confidence threshold
    if !candidates.is_empty() {
        for (model, _) in rules::VEHICLE_KEYWORDS {
            let hit = candidates
                .labels
                .iter()
                .position(|label| label.to_lowercase().contains(model));
            if let Some(idx) = hit {
                if let Some(&score) = candidates.scores.get(idx) {
                    if score > 0.5 {
                        return Suggestion::new(
                            "filter",
                            vec![format!("filter/vehicle/{model}")],
                            score,
                        );
                    }
                }
            }
        }
    }

    for (model, keywords) in rules::VEHICLE_KEYWORDS {
        if keywords
            .iter()
            .any(|keyword| description_lower.contains(keyword))
        {
            return Suggestion::new("filter", vec![format!("filter/vehicle/{model}")], 0.9);
        }
    }

    // Nothing matched: offer every model across all subcategories
    let tags: Vec<String> = rules::FILTER_SUBCATEGORIES
        .iter()
        .flat_map(|(subcategory, models)| {
            models
                .iter()
                .map(move |(model, _)| format!("filter/{subcategory}/{model}"))
        })
        .collect();
    Suggestion::new("filter", tags, 0.5)
}

fn media_suggestion(detected: Option<&MediaRule>) -> Suggestion {
    match detected {
        Some(rule) => Suggestion::new(
            "system/media",
            vec![format!("system/media/{}", rule.name)],
            0.9,
        ),
        None => {
            let tags: Vec<String> = rules::MEDIA_RULES
                .iter()
                .map(|rule| format!("system/media/{}", rule.name))
                .collect();
            Suggestion::new("system/media", tags, 0.5)
        }
    }
}

/// Size resolution is constrained by the detected media type
///
/// Media types without a size dimension produce no size suggestion at all.
fn size_suggestion(description_lower: &str, detected: Option<&MediaRule>) -> Option<Suggestion> {
    let Some(rule) = detected else {
        let tags: Vec<String> = rules::SIZE_KEYWORDS
            .iter()
            .map(|(size, _)| format!("system/size/{size}"))
            .collect();
        return Some(Suggestion::new("system/size", tags, 0.5));
    };

    if rule.valid_sizes.is_empty() {
        return None;
    }

    for (size, keywords) in rules::SIZE_KEYWORDS {
        if rule.valid_sizes.contains(size)
            && keywords
                .iter()
                .any(|keyword| description_lower.contains(keyword))
        {
            return Some(Suggestion::new(
                "system/size",
                vec![format!("system/size/{size}")],
                0.9,
            ));
        }
    }

    let tags: Vec<String> = rule
        .valid_sizes
        .iter()
        .map(|size| format!("system/size/{size}"))
        .collect();
    Some(Suggestion::new("system/size", tags, 0.5))
}

fn language_suggestion(description_lower: &str) -> Suggestion {
    // Space padding keeps short codes like "no" from matching inside words
    let padded = format!(" {description_lower} ");
    for (language, keywords) in rules::LANGUAGE_KEYWORDS {
        if keywords
            .iter()
            .any(|keyword| padded.contains(&format!(" {keyword} ")))
        {
            return Suggestion::new("language", vec![format!("language/{language}")], 0.9);
        }
    }

    let tags: Vec<String> = rules::LANGUAGE_KEYWORDS
        .iter()
        .map(|(language, _)| format!("language/{language}"))
        .collect();
    Suggestion::new("language", tags, 0.5)
}

/// Car-model block for price lecterns
///
/// The model resolved in the filter suggestions must be a taxonomy-listed
/// vehicle and present in the car-model table; the emitted tags carry a
/// conditional note that triggers on exactly those tags.
fn car_model_suggestion(
    engine: &Suggester,
    suggestions: &[Suggestion],
    known_models: &[String],
) -> Option<Suggestion> {
    let filter = suggestions.iter().find(|suggestion| {
        suggestion.category == "filter"
            && suggestion
                .suggested_tags
                .iter()
                .any(|tag| tag.contains("filter/vehicle/"))
    })?;

    let model = Tag::parse(filter.suggested_tags.first()?)?.value;
    if !known_models.iter().any(|known| known == &model) {
        return None;
    }
    let info = engine.car_models.get(&model)?;

    let mut tags = vec![format!("car/model/{model}")];
    tags.extend(info.years.iter().map(|year| format!("car/model/{model}/{year}")));

    let mut conditional = BTreeMap::new();
    conditional.insert(
        "system/dynamic/text".to_string(),
        ConditionalTag {
            description: rules::PRICE_LIST_NOTE
                .iter()
                .map(|(language, text)| (language.to_string(), text.to_string()))
                .collect(),
            trigger_tags: tags.clone(),
        },
    );

    let mut suggestion = Suggestion::new("car/model", tags, 0.9);
    suggestion.conditional_tags = Some(conditional);
    Some(suggestion)
}

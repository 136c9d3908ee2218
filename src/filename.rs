use crate::models::{ParsedFilename, Suggestion, SuggestionResponse};
use crate::rules;

/// Parse a structured filename into its positional fields
///
/// Walks the underscore-separated tokens with a single cursor: fiscal year
/// (`FY…`), quarter (`Q` plus digits), project type, 3-letter language
/// code, vehicles until a terminal media token, then media type, dimensions
/// and version in any order. Absent or malformed tokens leave their field
/// empty; parsing never fails.
pub fn parse_filename(filename: &str) -> ParsedFilename {
    // Strip the extension and normalize spaces to underscores
    let stem = filename.split('.').next().unwrap_or(filename);
    let normalized = stem.replace(' ', "_");
    let parts: Vec<&str> = normalized.split('_').filter(|part| !part.is_empty()).collect();

    let mut parsed = ParsedFilename::default();
    let mut idx = 0;

    if let Some(token) = parts.first() {
        if token.starts_with("FY") {
            parsed.fiscal_year = Some(token.to_string());
            idx = 1;
            if let Some(next) = parts.get(1) {
                if is_quarter_token(next) {
                    parsed.quarter = Some(next.to_string());
                    idx = 2;
                }
            }
        }
    }

    if let Some(token) = parts.get(idx) {
        if rules::FILENAME_PROJECT_TYPES.contains(token) {
            parsed.project_type = Some(token.to_string());
            idx += 1;
        }
    }

    if let Some(token) = parts.get(idx) {
        let language = rules::FILENAME_LANGUAGE_CODES
            .iter()
            .find(|(code, _)| code == token)
            .map(|(_, language)| language.to_string());
        if language.is_some() {
            parsed.language = language;
            idx += 1;
        }
    }

    // Vehicle tokens run until a media token terminates the list
    while let Some(token) = parts.get(idx) {
        if rules::FILENAME_MEDIA_TOKENS.contains(token) {
            break;
        }
        // Known typo in the field: QASHQAL for QASHQAI
        parsed.vehicles.push(token.replace("QASHQAL", "QASHQAI"));
        idx += 1;
    }

    for token in parts.iter().skip(idx) {
        if rules::FILENAME_MEDIA_TOKENS.contains(token) {
            parsed.media_type = Some(token.to_lowercase());
        } else if token.to_lowercase().contains('x') {
            parsed.dimensions = Some(token.to_string());
        } else if token.starts_with('V') || token.chars().all(|c| c.is_ascii_digit()) {
            parsed.version = Some(token.to_string());
        }
    }

    parsed
}

fn is_quarter_token(token: &str) -> bool {
    token.len() > 1
        && token.starts_with('Q')
        && token[1..].chars().all(|c| c.is_ascii_digit())
}

/// Format parsed filename fields as suggestions
///
/// Filename-derived signals are authoritative, so every suggestion carries
/// confidence 1.0. The banner size category only appears for banner media
/// with explicit dimensions.
pub fn format_suggestions(parsed: &ParsedFilename) -> SuggestionResponse {
    let mut suggestions = Vec::new();

    if let Some(language) = &parsed.language {
        suggestions.push(Suggestion::new(
            "language",
            vec![format!("language/{language}")],
            1.0,
        ));
    }

    if !parsed.vehicles.is_empty() {
        let tags: Vec<String> = parsed
            .vehicles
            .iter()
            .map(|vehicle| format!("filter/vehicle/{vehicle}"))
            .collect();
        suggestions.push(Suggestion::new("filter", tags, 1.0));
    }

    if let Some(media_type) = &parsed.media_type {
        suggestions.push(Suggestion::new(
            "system/media",
            vec![format!("system/media/{media_type}")],
            1.0,
        ));
    }

    if let Some(dimensions) = &parsed.dimensions {
        if parsed.media_type.as_deref() == Some("banner") {
            suggestions.push(Suggestion::new(
                "banner/size",
                vec![format!("banner/size/{dimensions}")],
                1.0,
            ));
        }
    }

    SuggestionResponse::new(suggestions)
}

/// Parse a filename and format the result as a suggestion response
pub fn suggest_from_filename(filename: &str) -> SuggestionResponse {
    format_suggestions(&parse_filename(filename))
}

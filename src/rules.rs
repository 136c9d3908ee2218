/// Static keyword rule tables used by the suggestion engine
/// This module centralizes the taxonomy-facing trigger phrases so the
/// matching code stays table-driven

/// A media type, its trigger phrases, and the size values valid for it
///
/// Some media types have no size dimension at all; those carry an empty
/// `valid_sizes` slice.
#[derive(Debug, Clone, Copy)]
pub struct MediaRule {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub valid_sizes: &'static [&'static str],
}

/// Media types in priority order; detection stops at the first keyword hit
pub const MEDIA_RULES: &[MediaRule] = &[
    MediaRule {
        name: "print",
        keywords: &["print", "printer", "printed", "printing"],
        valid_sizes: &["fullpage", "halfpage", "quarterpage"],
    },
    MediaRule {
        name: "html5-banner",
        keywords: &["banner", "banners", "html5", "html5-banner"],
        valid_sizes: &["static"],
    },
    MediaRule {
        name: "edm",
        keywords: &["edm", "email", "newsletter"],
        valid_sizes: &[],
    },
    MediaRule {
        name: "dm",
        keywords: &["dm", "direct media", "direct mail"],
        valid_sizes: &["dm"],
    },
    MediaRule {
        name: "pricelectern",
        keywords: &["price lectern", "pricelectern", "price-lectern"],
        valid_sizes: &["a4"],
    },
    MediaRule {
        name: "pos",
        keywords: &["pos", "point of sale", "point-of-sale"],
        valid_sizes: &[],
    },
    MediaRule {
        name: "digiscreen",
        keywords: &["digiscreen", "digital screen", "digital-screen"],
        valid_sizes: &[],
    },
    MediaRule {
        name: "socialmedia",
        keywords: &[
            "social media",
            "social",
            "socialmedia",
            "instagram",
            "facebook",
            "linkedin",
            "social network",
            "social networks",
        ],
        valid_sizes: &["linkad", "story"],
    },
    MediaRule {
        name: "aftersales",
        keywords: &["after sales", "aftersales", "after-sales"],
        valid_sizes: &[],
    },
    MediaRule {
        name: "A4_leaflet",
        keywords: &["a4 leaflet", "a4-leaflet", "leaflet", "a4"],
        valid_sizes: &[],
    },
    MediaRule {
        name: "aftersales/socialmedia",
        keywords: &[
            "after sales social",
            "aftersales social",
            "after-sales social",
            "after sales social media",
            "aftersales social media",
        ],
        valid_sizes: &["linkad", "story"],
    },
];

/// Keywords that force the socialmedia media type before the table scan
pub const SOCIAL_MEDIA_KEYWORDS: &[&str] = &[
    "linkad",
    "story",
    "stories",
    "instagram",
    "facebook",
    "linkedin",
    "post",
];

/// Size values and their trigger phrases, in detection priority order
pub const SIZE_KEYWORDS: &[(&str, &[&str])] = &[
    ("fullpage", &["full page", "fullpage", "full-page"]),
    ("halfpage", &["half page", "halfpage", "half-page"]),
    ("quarterpage", &["quarter page", "quarterpage", "quarter-page"]),
    ("dm", &["dm", "direct media", "direct mail"]),
    (
        "linkad",
        &["linkad", "linkedin ad", "linkedin advertisement", "linkedin post"],
    ),
    (
        "story",
        &[
            "story",
            "instagram story",
            "facebook story",
            "social story",
            "stories",
            "instagram stories",
            "facebook stories",
        ],
    ),
    ("static", &["static", "html5", "html5-banner"]),
    ("a4", &["a4", "a4-size", "a4 size"]),
];

/// Vehicle models of the `vehicle` subcategory; first keyword hit wins
pub const VEHICLE_KEYWORDS: &[(&str, &[&str])] = &[
    ("ariya", &["ariya", "ariya-model", "ariya-ev"]),
    ("qashqai", &["qashqai", "qashqai-model", "qq", "qash"]),
    ("juke", &["juke", "juke-model", "juke-ev"]),
    ("leaf", &["leaf", "leaf-model", "leaf-ev"]),
    ("micra", &["micra", "micra-model"]),
    ("x-trail", &["x-trail", "xtrail", "xt"]),
    ("env200", &["env200", "env200-model", "env"]),
    ("gt-r", &["gt-r", "gtr", "gtr-model", "gtr35"]),
    ("navara", &["navara", "navara-model", "nav"]),
    ("primastar", &["primastar", "primastar-model", "prim"]),
    ("interstar", &["interstar", "interstar-model", "inter"]),
    ("townstar", &["townstar", "townstar-model", "town"]),
    ("nv250", &["nv250", "nv250-model", "nv2"]),
    ("nv400", &["nv400", "nv400-model", "nv4"]),
    ("crosscarline", &["crosscarline", "cross-carline", "ccl"]),
    ("interstar2024", &["interstar2024", "interstar-2024", "inter24"]),
];

/// Light commercial vehicle models; inert data, only listed in defaults
pub const LCV_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "env200",
        &["env200", "env200-model", "env200-van", "env200-evalia", "env", "env2"],
    ),
    ("nv200", &["nv200", "nv200-model", "nv2"]),
    ("navara", &["navara", "navara-model", "nav"]),
    ("nv400", &["nv400", "nv400-model", "nv4"]),
    ("nv300", &["nv300", "nv300-model", "nv3"]),
    ("nt400", &["nt400", "nt400-model", "nt4"]),
    ("nv250", &["nv250", "nv250-model", "nv2"]),
    ("primastar", &["primastar", "primastar-model", "prim"]),
    ("interstar", &["interstar", "interstar-model", "inter"]),
    ("townstar", &["townstar", "townstar-model", "town", "ets"]),
];

/// Fleet models; inert data, only listed in defaults
pub const FLEET_KEYWORDS: &[(&str, &[&str])] = &[
    ("qashqai", &["qashqai", "qashqai-model", "qq", "qash"]),
    ("x-trail", &["x-trail", "xtrail", "xt"]),
    ("leaf", &["leaf", "leaf-model", "leaf-ev"]),
];

/// Filter subcategories in the order the all-options default enumerates them
pub const FILTER_SUBCATEGORIES: &[(&str, &[(&str, &[&str])])] = &[
    ("vehicle", VEHICLE_KEYWORDS),
    ("lcv", LCV_KEYWORDS),
    ("fleet", FLEET_KEYWORDS),
];

/// Languages and their trigger tokens; tokens match space-padded so short
/// codes like "no" cannot hit inside longer words
pub const LANGUAGE_KEYWORDS: &[(&str, &[&str])] = &[
    ("finnish", &["finnish", "suomi", "suomenkielinen", "fi", "fin", "finn"]),
    ("swedish", &["swedish", "ruotsi", "ruotsinkielinen", "sv", "swe", "swed"]),
    ("norwegian", &["norwegian", "norja", "norjankielinen", "no", "nor", "norw"]),
    ("danish", &["danish", "tanska", "tanskankielinen", "dk", "dan", "dane"]),
    ("estonian", &["estonian", "viro", "viroinkielinen", "et", "est", "eston"]),
    ("latvian", &["latvian", "latvia", "latviankielinen", "lv", "lav", "latv"]),
    ("lithuanian", &["lithuanian", "liettua", "liettuan", "lt", "lit", "lith"]),
    ("russian", &["russian", "venäjä", "venäjän", "ru", "rus", "russ"]),
    ("english", &["english", "englanti", "englanninkielinen", "en", "eng", "engl"]),
];

/// Vehicles probed when gathering classifier candidate labels
pub const CLASSIFIER_VEHICLES: &[&str] = &["qashqai", "juke", "x-trail", "leaf", "micra", "ariya"];

/// Bare language names probed when gathering classifier candidate labels
pub const CLASSIFIER_LANGUAGES: &[&str] = &[
    "finnish",
    "swedish",
    "norwegian",
    "danish",
    "estonian",
    "latvian",
    "lithuanian",
    "russian",
    "english",
];

/// Bare media names probed when gathering classifier candidate labels
pub const CLASSIFIER_MEDIA: &[&str] = &[
    "print",
    "banner",
    "edm",
    "dm",
    "pricelectern",
    "pos",
    "digiscreen",
];

/// Asset types and their trigger phrases; first hit wins
pub const ASSET_TYPE_KEYWORDS: &[(&str, &[&str])] = &[
    ("baseplate", &["baseplate", "base plate", "base-plate"]),
    ("dealer-logo", &["dealer logo", "dealerlogos", "dealer-logos"]),
    ("award-logo", &["award logo", "awardlogos", "award-logos", "award"]),
    ("energy-label", &["energy label", "energylabel", "energy-label"]),
    (
        "car-logo",
        &["car logo", "carlogo", "car-logos", "brand logo", "brandlogos"],
    ),
    ("qr-code", &["qr", "qr-code", "qrcode", "qr code"]),
    (
        "social-logo",
        &["social logo", "sociallogos", "social-logos", "social media logo"],
    ),
    (
        "warranty-logo",
        &["warranty logo", "warrantylogos", "warranty-logos", "warranty"],
    ),
    ("packshot", &["packshot", "packshots", "pack shot", "pack-shot"]),
    (
        "additional-logo",
        &["additional logo", "additionallogos", "additional-logos"],
    ),
    (
        "customer-promise",
        &["customer promise", "customerpromise", "customer-promise"],
    ),
];

/// Languages probed in asset mode; english is the default when none hit
pub const ASSET_LANGUAGE_KEYWORDS: &[(&str, &[&str])] = &[
    ("finnish", &["finnish", "suomi", "fi"]),
    ("swedish", &["swedish", "ruotsi", "sv"]),
    ("norwegian", &["norwegian", "norja", "no"]),
    ("danish", &["danish", "tanska", "dk"]),
    ("estonian", &["estonian", "viro", "et"]),
    ("latvian", &["latvian", "latvia", "lv"]),
    ("lithuanian", &["lithuanian", "liettua", "lt"]),
    ("russian", &["russian", "venäjä", "ru"]),
];

/// Three-letter language codes used in structured filenames
pub const FILENAME_LANGUAGE_CODES: &[(&str, &str)] = &[
    ("FIN", "finnish"),
    ("NOR", "norwegian"),
    ("SWE", "swedish"),
    ("DAN", "danish"),
    ("EST", "estonian"),
    ("LAT", "latvian"),
    ("LIT", "lithuanian"),
    ("RUS", "russian"),
    ("ENG", "english"),
];

/// Project type tokens recognized in structured filenames
pub const FILENAME_PROJECT_TYPES: &[&str] = &["CCL", "MASTER"];

/// Media tokens that terminate the vehicle list in structured filenames
pub const FILENAME_MEDIA_TOKENS: &[&str] = &["STORY", "BANNER", "PRINT"];

/// Localized note attached to price-lectern car-model suggestions
pub const PRICE_LIST_NOTE: &[(&str, &str)] = &[
    (
        "finnish",
        "Tämä lisätagi mahdollistaa hintalistatietokannan käytön tämän mallin käyttäjille",
    ),
    (
        "swedish",
        "Denna ytterligare tagg möjliggör användning av prislistdatabasen för användare av denna mall",
    ),
    (
        "norwegian",
        "Denne ekstra taggen muliggjør bruk av prislistedatabasen for brukere av denne malen",
    ),
    (
        "danish",
        "Denne ekstra tag muliggør brug af prislistedatabasen for brugere af denne skabelon",
    ),
    (
        "estonian",
        "See lisatag võimaldab selle malli kasutajatel kasutada hinnakirja andmebaasi",
    ),
    (
        "latvian",
        "Šis papildu tags ļauj šī veidnes lietotājiem izmantot cenu saraksta datubāzi",
    ),
    (
        "lithuanian",
        "Šis papildomas žymėjimas leidžia šio šablono vartotojams naudoti kainų sąrašo duomenų bazę",
    ),
    (
        "russian",
        "Этот дополнительный тег позволяет пользователям этого шаблона использовать базу данных прайс-листа",
    ),
    (
        "english",
        "This additional tag enables the price lectern database for the users of this template",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_rules_keep_priority_order() {
        let names: Vec<&str> = MEDIA_RULES.iter().map(|rule| rule.name).collect();
        assert_eq!(names[0], "print");
        assert_eq!(names[1], "html5-banner");
        assert_eq!(names[7], "socialmedia");
        assert_eq!(names.last(), Some(&"aftersales/socialmedia"));
    }

    #[test]
    fn test_every_valid_size_has_a_keyword_entry() {
        for rule in MEDIA_RULES {
            for size in rule.valid_sizes {
                assert!(
                    SIZE_KEYWORDS.iter().any(|(name, _)| name == size),
                    "size {size} of media {} missing from SIZE_KEYWORDS",
                    rule.name
                );
            }
        }
    }

    #[test]
    fn test_language_tables_cover_nine_languages() {
        assert_eq!(LANGUAGE_KEYWORDS.len(), 9);
        assert_eq!(CLASSIFIER_LANGUAGES.len(), 9);
        assert_eq!(FILENAME_LANGUAGE_CODES.len(), 9);
        assert_eq!(PRICE_LIST_NOTE.len(), 9);
        for lang in CLASSIFIER_LANGUAGES {
            assert!(LANGUAGE_KEYWORDS.iter().any(|(name, _)| name == lang));
            assert!(PRICE_LIST_NOTE.iter().any(|(name, _)| name == lang));
        }
    }

    #[test]
    fn test_classifier_vehicles_are_known_models() {
        for vehicle in CLASSIFIER_VEHICLES {
            assert!(VEHICLE_KEYWORDS.iter().any(|(name, _)| name == vehicle));
        }
    }

    #[test]
    fn test_filter_subcategories_order() {
        let names: Vec<&str> = FILTER_SUBCATEGORIES.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["vehicle", "lcv", "fleet"]);
    }
}

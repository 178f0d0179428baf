//! Built-in lexicon tables for the annotator
//!
//! A gazetteer of location-like terms plus the closed-class word lists
//! the heuristic POS tagger relies on. The gazetteer aims for coverage
//! of common travel-query targets, not completeness; deployments extend
//! it through `AnnotatorConfig`.

/// Geo-political entities: countries, cities, states
pub(crate) const GPE_TERMS: &[&str] = &[
    // Countries
    "france", "germany", "italy", "spain", "portugal", "greece", "austria",
    "switzerland", "netherlands", "belgium", "denmark", "sweden", "norway",
    "finland", "poland", "ireland", "scotland", "england", "croatia",
    "turkey", "egypt", "morocco", "japan", "china", "india", "thailand",
    "vietnam", "australia", "canada", "mexico", "brazil", "argentina",
    "peru", "chile", "iceland", "hungary", "czechia",
    // Cities
    "paris", "london", "berlin", "madrid", "barcelona", "rome", "milan",
    "venice", "florence", "naples", "lisbon", "porto", "athens", "vienna",
    "zurich", "geneva", "amsterdam", "brussels", "copenhagen", "stockholm",
    "oslo", "helsinki", "warsaw", "krakow", "dublin", "edinburgh",
    "munich", "hamburg", "cologne", "frankfurt", "prague", "budapest",
    "istanbul", "cairo", "marrakech", "tokyo", "kyoto", "osaka",
    "beijing", "shanghai", "hong kong", "singapore", "bangkok", "hanoi",
    "sydney", "melbourne", "auckland", "toronto", "vancouver", "montreal",
    "new york", "los angeles", "san francisco", "chicago", "boston",
    "seattle", "miami", "austin", "denver", "new orleans", "las vegas",
    "washington", "philadelphia", "atlanta", "dallas", "houston",
    "mexico city", "rio de janeiro", "sao paulo", "buenos aires", "lima",
    "santiago", "reykjavik",
    // States and provinces
    "california", "texas", "florida", "bavaria", "tuscany", "catalonia",
    "provence", "andalusia",
];

/// Non-GPE locations: regions, waters, mountains, parks
pub(crate) const LOC_TERMS: &[&str] = &[
    "alps", "pyrenees", "andes", "himalayas", "rocky mountains",
    "mount everest", "mont blanc", "mount fuji", "kilimanjaro",
    "lake geneva", "lake como", "lake garda", "lake tahoe", "loch ness",
    "mediterranean", "mediterranean sea", "atlantic", "pacific",
    "baltic sea", "north sea", "red sea", "dead sea", "caribbean",
    "amazon", "nile", "danube", "rhine", "seine", "thames",
    "sahara", "gobi desert", "grand canyon", "great barrier reef",
    "black forest", "lake district", "riviera",
];

/// Facilities: airports, landmarks, venues
pub(crate) const FAC_TERMS: &[&str] = &[
    "eiffel tower", "louvre", "notre dame", "arc de triomphe",
    "big ben", "tower bridge", "buckingham palace", "british museum",
    "brandenburg gate", "colosseum", "vatican", "sagrada familia",
    "acropolis", "hagia sophia", "taj mahal", "great wall",
    "statue of liberty", "empire state building", "golden gate bridge",
    "times square", "central park", "disneyland", "versailles",
    "jfk airport", "heathrow", "heathrow airport", "charles de gaulle",
    "gare du nord", "grand central station", "union station",
];

/// Determiners
pub(crate) const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "some", "any",
    "each", "every", "no", "another", "both", "either", "neither",
];

/// Adpositions (prepositions)
pub(crate) const ADPOSITIONS: &[&str] = &[
    "in", "on", "at", "to", "from", "by", "with", "without", "about",
    "near", "nearby", "around", "between", "through", "during", "after",
    "before", "until", "till", "for", "of", "off", "over", "under",
    "into", "onto", "within", "along", "across", "towards", "toward",
];

/// Pronouns
pub(crate) const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her",
    "us", "them", "my", "your", "his", "its", "our", "their", "mine",
    "yours", "myself", "yourself", "what", "which", "who", "whom",
    "where", "when", "something", "anything", "nothing", "everything",
    "somewhere", "anywhere",
];

/// Conjunctions
pub(crate) const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "so", "yet", "because", "although",
    "while", "if", "unless", "since", "whether",
];

/// Common verbs and auxiliaries in query phrasing
pub(crate) const VERBS: &[&str] = &[
    "is", "are", "was", "were", "be", "been", "being", "am",
    "do", "does", "did", "have", "has", "had",
    "can", "could", "will", "would", "shall", "should", "may", "might",
    "must", "want", "need", "find", "show", "give", "get", "go",
    "going", "visit", "visiting", "see", "stay", "staying", "book",
    "booking", "travel", "traveling", "travelling", "fly", "flying",
    "eat", "drink", "look", "looking", "recommend", "plan", "planning",
    "leave", "leaving", "arrive", "arriving", "depart", "departing",
];

/// Common adverbs in query phrasing
pub(crate) const ADVERBS: &[&str] = &[
    "very", "really", "quite", "too", "also", "just", "only", "now",
    "soon", "here", "there", "please", "maybe", "perhaps", "again",
    "quickly", "early", "late", "often", "always", "never", "not",
];

/// Common adjectives in query phrasing
pub(crate) const ADJECTIVES: &[&str] = &[
    "best", "good", "great", "nice", "cheap", "cheapest", "expensive",
    "top", "popular", "famous", "beautiful", "romantic", "quiet",
    "busy", "open", "closed", "local", "new", "old", "big", "small",
    "free", "available", "sunny", "rainy", "warm", "cold", "hot",
];

/// Weekday names, Monday first
pub(crate) const WEEKDAYS: &[&str] = &[
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
];

/// Relative-day words recognized as DATE entities
pub(crate) const RELATIVE_DAYS: &[&str] = &["today", "tomorrow", "yesterday", "tonight"];

/// Qualifiers that extend a weekday mention into a longer DATE span
pub(crate) const WEEKDAY_QUALIFIERS: &[&str] = &["next", "this", "last"];

/// Month names, January first
pub(crate) const MONTHS: &[&str] = &[
    "january", "february", "march", "april", "may", "june", "july",
    "august", "september", "october", "november", "december",
];

/// Parse a day-of-month token, allowing ordinal suffixes like "15th"
pub(crate) fn parse_day_of_month(token: &str) -> Option<u32> {
    let lower = token.to_lowercase();
    let digits = lower
        .strip_suffix("st")
        .or_else(|| lower.strip_suffix("nd"))
        .or_else(|| lower.strip_suffix("rd"))
        .or_else(|| lower.strip_suffix("th"))
        .unwrap_or(&lower);
    let day: u32 = digits.parse().ok()?;
    (1..=31).contains(&day).then_some(day)
}

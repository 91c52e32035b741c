//! Fixed vocabulary tables used by the analyzers.
//!
//! These are versioned data owned by the core, kept apart from the scoring
//! logic so the lists can be updated and tested independently. All entries
//! are lowercase; matching is case-insensitive on the text side.

/// Connectives that signal flow between sentences.
pub const TRANSITION_WORDS: &[&str] = &[
    "however", "therefore", "furthermore", "moreover", "additionally",
    "consequently", "meanwhile", "nevertheless", "nonetheless",
    "similarly", "likewise", "instead", "otherwise", "thus",
    "hence", "accordingly", "besides", "indeed", "certainly",
    "undoubtedly", "subsequently", "finally", "initially",
    "first", "second", "third", "next", "then", "later",
    "earlier", "before", "after", "during", "while",
    "although", "though", "whereas", "despite", "in contrast",
    "on the other hand", "in addition", "as a result",
    "for example", "for instance", "in particular", "specifically",
    "in conclusion", "to summarize", "in summary", "overall",
];

/// Be-verbs and auxiliaries that open a passive construction when followed
/// by a token ending in "ed".
pub const PASSIVE_AUXILIARIES: &[&str] = &[
    "was", "were", "been", "being", "is", "are", "am",
    "has been", "have been", "had been", "will be",
    "would be", "could be", "should be", "might be",
];

/// Engagement vocabulary for titles and body copy.
pub const POWER_WORDS: &[&str] = &[
    "amazing", "incredible", "outstanding", "fantastic", "exceptional",
    "proven", "guaranteed", "exclusive", "ultimate", "secret",
    "instantly", "immediately", "breakthrough", "revolutionary",
    "powerful", "effective", "essential", "crucial", "vital",
    "unleash", "transform", "discover", "reveal", "unlock",
    "master", "expert", "professional", "advanced", "premium",
    "free", "bonus", "limited", "special", "unique",
    "complete", "comprehensive", "definitive",
    "successful", "profitable", "valuable", "important",
    "critical", "significant", "remarkable", "extraordinary",
];

pub const CTA_PHRASES: &[&str] = &[
    "click here", "learn more", "read more", "find out",
    "discover", "get started", "sign up", "register",
    "download", "subscribe", "join", "contact us",
    "call now", "buy now", "order now", "shop now",
    "try now", "start today", "get your", "claim your",
    "book now", "schedule", "request", "apply",
    "explore", "view all", "see more", "browse",
    "follow us", "share", "like", "comment",
];

pub const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "wonderful", "fantastic",
    "amazing", "outstanding", "superb", "brilliant", "perfect",
    "beautiful", "awesome", "incredible", "marvelous",
    "spectacular", "magnificent", "exceptional", "remarkable",
    "impressive", "extraordinary", "delightful", "pleasant",
    "enjoyable", "satisfying", "successful", "beneficial",
    "valuable", "useful", "helpful", "effective", "efficient",
    "reliable", "trustworthy", "professional", "quality",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "bad", "poor", "terrible", "awful", "horrible",
    "disappointing", "unsatisfactory", "inadequate",
    "inferior", "defective", "faulty", "broken",
    "useless", "worthless", "ineffective", "unreliable",
    "problematic", "difficult", "challenging", "complex",
    "confusing", "frustrating", "annoying", "boring",
    "slow", "expensive", "costly", "overpriced",
    "limited", "restricted", "insufficient", "lacking",
];

/// Temporal phrases that make content read as current.
pub const FRESHNESS_PHRASES: &[&str] = &[
    "last year", "this year", "recently", "new", "latest",
    "current", "today", "now", "modern", "updated",
];

/// Common function words; a focus keyword made only of these is too generic
/// to optimize for.
pub const STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from",
    "has", "he", "in", "is", "it", "its", "of", "on", "that", "the",
    "to", "was", "will", "with", "would", "you", "your", "this", "these",
    "those", "they", "them", "their", "his", "her", "she", "him", "we",
    "us", "our", "me", "my", "i", "am", "can", "could", "should",
    "but", "or", "so", "if", "when", "where", "why", "how", "what", "who",
];

/// Topic stem (matched as a substring of the focus keyword) to related
/// terms worth surfacing in the content.
pub const TOPIC_TERMS: &[(&str, &[&str])] = &[
    (
        "seo",
        &["search engine optimization", "organic traffic", "search rankings", "serp", "keywords"],
    ),
    (
        "wordpress",
        &["cms", "website builder", "blog platform", "content management", "plugins"],
    ),
    (
        "marketing",
        &["digital marketing", "online marketing", "promotion", "advertising", "strategy"],
    ),
    (
        "content",
        &["articles", "blog posts", "copywriting", "writing", "publishing"],
    ),
];

/// Modifier to synonyms, substituted inside the keyword to derive
/// variations.
pub const MODIFIER_SYNONYMS: &[(&str, &[&str])] = &[
    ("good", &["great", "excellent", "best", "top"]),
    ("fast", &["quick", "rapid", "speedy"]),
    ("easy", &["simple", "effortless"]),
    ("cheap", &["affordable", "budget", "inexpensive"]),
];

/// Substrings that mark an href as almost certainly broken in published
/// content.
pub const BROKEN_LINK_PATTERNS: &[&str] =
    &["localhost", "127.0.0.1", "example.com", "test.com", "placeholder"];

/// Image formats that are usually oversized for the web.
pub const LARGE_IMAGE_EXTENSIONS: &[&str] = &[".bmp", ".tiff", ".raw"];

/// Tags the content sanitizer keeps; anything else is removed.
pub const ALLOWED_TAGS: &[&str] = &[
    "p", "br", "h1", "h2", "h3", "h4", "h5", "h6",
    "ul", "ol", "li", "a", "img", "strong", "em", "b", "i", "u",
    "blockquote", "pre", "code", "button", "video", "figure", "figcaption",
    "table", "thead", "tbody", "tr", "th", "td", "span", "div",
];

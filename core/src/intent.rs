use lazy_static::lazy_static;
use regex::Regex;

/// What the arbiter decided a lower-cased utterance is asking for.
/// Exactly one variant is produced per utterance; the order of the
/// checks in [`classify`] is the priority order and is part of the
/// contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    Farewell,
    /// A question about one specific initiative, with the extracted
    /// candidate phrase. Resolution may still fail, in which case the
    /// caller falls through to the lower-priority intents.
    EntityLookup(String),
    ProcessFaq,
    StatsFaq,
    /// Nothing more specific matched; run the utterance through ranked
    /// search.
    Search,
}

static GREETINGS: &[&str] = &[
    "hello",
    "hi",
    "hey",
    "grüezi",
    "bonjour",
    "buongiorno",
    "greetings",
];

static FAREWELLS: &[&str] = &[
    "bye",
    "goodbye",
    "auf wiedersehen",
    "au revoir",
    "arrivederci",
    "ciao",
    "see you",
];

static STATS_KEYWORDS: &[&str] = &[
    "statistics",
    "how many initiatives",
    "success rate",
    "percentage",
    "numbers",
    "data",
    "figures",
];

lazy_static! {
    static ref ENTITY_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?:tell|talk|know|information).+about\s+(.+)").expect("valid regex"),
        Regex::new(r"what (?:is|was|are|were)\s+(.+)").expect("valid regex"),
        Regex::new(r"details\s+(?:on|about)\s+(.+)").expect("valid regex"),
    ];
    static ref PROCESS_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"how does an initiative work").expect("valid regex"),
        Regex::new(r"what is a popular initiative").expect("valid regex"),
        Regex::new(r"process").expect("valid regex"),
        Regex::new(r"requirements").expect("valid regex"),
        Regex::new(r"how many signatures").expect("valid regex"),
        Regex::new(r"timeline").expect("valid regex"),
    ];
}

pub fn is_greeting(text: &str) -> bool {
    GREETINGS.iter().any(|g| text.contains(g))
}

pub fn is_farewell(text: &str) -> bool {
    FAREWELLS.iter().any(|f| text.contains(f))
}

pub fn is_process_question(text: &str) -> bool {
    PROCESS_PATTERNS.iter().any(|p| p.is_match(text))
}

pub fn is_stats_question(text: &str) -> bool {
    STATS_KEYWORDS.iter().any(|k| text.contains(k))
}

/// Apply the ordered extraction patterns and return the trailing phrase
/// of the first one that matches, with surrounding whitespace and
/// trailing punctuation removed.
pub fn extract_entity(text: &str) -> Option<String> {
    for pattern in ENTITY_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(text) {
            let phrase = caps
                .get(1)
                .map(|m| m.as_str().trim().trim_end_matches(['?', '.', '!']).trim())
                .unwrap_or("");
            if !phrase.is_empty() {
                return Some(phrase.to_string());
            }
        }
    }
    None
}

/// Classify a lower-cased utterance. First match wins; no state is
/// revisited.
pub fn classify(text: &str) -> Intent {
    if is_greeting(text) {
        Intent::Greeting
    } else if is_farewell(text) {
        Intent::Farewell
    } else if let Some(phrase) = extract_entity(text) {
        Intent::EntityLookup(phrase)
    } else if is_process_question(text) {
        Intent::ProcessFaq
    } else if is_stats_question(text) {
        Intent::StatsFaq
    } else {
        Intent::Search
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_outranks_everything() {
        assert_eq!(classify("hello, how many initiatives are there?"), Intent::Greeting);
    }

    #[test]
    fn farewell_is_detected() {
        assert_eq!(classify("ok goodbye then"), Intent::Farewell);
    }

    #[test]
    fn tell_me_about_extracts_the_phrase() {
        assert_eq!(
            classify("tell me about responsible business"),
            Intent::EntityLookup("responsible business".into())
        );
    }

    #[test]
    fn what_is_extracts_the_phrase() {
        assert_eq!(
            classify("what is the water initiative?"),
            Intent::EntityLookup("the water initiative".into())
        );
    }

    #[test]
    fn details_on_extracts_the_phrase() {
        assert_eq!(
            classify("details on food speculation"),
            Intent::EntityLookup("food speculation".into())
        );
    }

    #[test]
    fn process_question_is_detected() {
        assert_eq!(classify("how many signatures are needed?"), Intent::ProcessFaq);
    }

    #[test]
    fn stats_question_is_detected() {
        assert_eq!(classify("show me the statistics"), Intent::StatsFaq);
    }

    #[test]
    fn everything_else_is_a_search() {
        assert_eq!(classify("responsible business voted"), Intent::Search);
    }
}

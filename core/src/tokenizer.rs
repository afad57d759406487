use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

// The corpus mixes German, French and Italian source pages with English
// summaries, and the language of an individual record is not reliably
// known. The union of all four stop-word lists is therefore applied
// uniformly to every document and every query.
static STOPWORDS_EN: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "aren", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "cannot", "could", "couldn", "d", "did", "didn", "do", "does", "doesn",
    "doing", "don", "down", "during", "each", "few", "for", "from", "further", "had", "hadn",
    "has", "hasn", "have", "haven", "having", "he", "her", "here", "hers", "herself", "him",
    "himself", "his", "how", "i", "if", "in", "into", "is", "isn", "it", "its", "itself", "ll",
    "m", "me", "more", "most", "mustn", "my", "myself", "no", "nor", "not", "of", "off", "on",
    "once", "only", "or", "other", "ought", "our", "ours", "ourselves", "out", "over", "own",
    "re", "s", "same", "she", "should", "shouldn", "so", "some", "such", "t", "than", "that",
    "the", "their", "theirs", "them", "themselves", "then", "there", "these", "they", "this",
    "those", "through", "to", "too", "under", "until", "up", "ve", "very", "was", "wasn", "we",
    "were", "weren", "what", "when", "where", "which", "while", "who", "whom", "why", "will",
    "with", "won", "would", "wouldn", "you", "your", "yours", "yourself", "yourselves",
];

static STOPWORDS_DE: &[&str] = &[
    "aber", "als", "also", "am", "an", "auch", "auf", "aus", "bei", "bin", "bis", "bist", "da",
    "damit", "dann", "der", "den", "des", "dem", "die", "das", "dass", "dein", "deine", "denn",
    "dich", "dir", "doch", "dort", "du", "durch", "ein", "eine", "einem", "einen", "einer",
    "eines", "er", "es", "euer", "eure", "für", "gegen", "hab", "habe", "haben", "hat", "hatte",
    "hatten", "hier", "hinter", "ich", "ihr", "ihre", "im", "in", "ist", "ja", "jede", "jedem",
    "jeden", "jeder", "jedes", "jener", "jetzt", "kann", "kannst", "können", "könnt", "machen",
    "mein", "meine", "mit", "muss", "müssen", "musst", "nach", "nein", "nicht", "noch", "nun",
    "nur", "ob", "oder", "ohne", "schon", "sehr", "sein", "seine", "sich", "sie", "sind", "soll",
    "sollen", "sollst", "sollt", "sonst", "über", "um", "und", "uns", "unser", "unter", "vom",
    "von", "vor", "wann", "war", "waren", "warum", "was", "weiter", "weitere", "wenn", "wer",
    "werde", "werden", "wie", "wieder", "wir", "wird", "wirst", "wo", "wollen", "wollte",
    "wurde", "wurden", "während", "zu", "zum", "zur", "zwar", "zwischen",
];

static STOPWORDS_FR: &[&str] = &[
    "au", "aux", "avec", "ce", "ces", "cette", "dans", "de", "des", "du", "elle", "elles", "en",
    "entre", "et", "eux", "il", "ils", "je", "la", "le", "les", "leur", "leurs", "lui", "ma",
    "mais", "me", "mes", "moi", "mon", "même", "ne", "nos", "notre", "nous", "on", "ou", "où",
    "par", "pas", "plus", "pour", "qu", "que", "qui", "sa", "se", "ses", "son", "sont", "sur",
    "ta", "te", "tes", "toi", "ton", "tous", "tout", "toute", "toutes", "tu", "un", "une", "vos",
    "votre", "vous", "y", "à", "été", "être", "est", "était", "étaient", "ai", "avons", "avez",
    "ont", "avait", "avaient", "fut", "sera", "seront", "ici", "donc", "car", "si", "sans",
    "sous", "vers", "chez", "après", "avant", "depuis", "pendant", "comme", "aussi",
];

static STOPWORDS_IT: &[&str] = &[
    "a", "ad", "agli", "ai", "al", "alla", "alle", "allo", "anche", "avere", "aveva", "avevano",
    "ci", "che", "chi", "come", "con", "contro", "cui", "da", "dal", "dalla", "dalle", "dallo",
    "degli", "dei", "del", "della", "delle", "dello", "di", "dove", "e", "ed", "era", "erano",
    "essere", "fra", "gli", "ha", "hai", "hanno", "ho", "i", "il", "in", "io", "la", "le", "lei",
    "lo", "loro", "lui", "ma", "mi", "mia", "mie", "miei", "mio", "ne", "nei", "nel", "nella",
    "nelle", "nello", "noi", "non", "nostra", "nostre", "nostri", "nostro", "o", "per", "perché",
    "più", "quale", "quanto", "quella", "quelle", "quelli", "quello", "questa", "queste",
    "questi", "questo", "se", "sei", "si", "sia", "siamo", "siete", "sono", "sta", "stato", "su",
    "sua", "sue", "sui", "sul", "sulla", "sulle", "sullo", "suo", "suoi", "ti", "tra", "tu",
    "tua", "tue", "tuo", "tuoi", "un", "una", "uno", "vi", "voi", "vostra", "vostre", "vostri",
    "vostro", "è",
];

lazy_static! {
    static ref WORD_RE: Regex = Regex::new(r"(?u)\w+").expect("valid regex");
    static ref STOPWORDS: HashSet<&'static str> = STOPWORDS_EN
        .iter()
        .chain(STOPWORDS_DE)
        .chain(STOPWORDS_FR)
        .chain(STOPWORDS_IT)
        .copied()
        .collect();
}

fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(token)
}

/// Tokenize text into lower-cased word tokens using NFKC normalization,
/// punctuation stripping and multilingual stop-word removal. Documents
/// and queries must go through this same function so that both live in
/// the same term space.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized = text.nfkc().collect::<String>().to_lowercase();
    WORD_RE
        .find_iter(&normalized)
        .map(|m| m.as_str())
        .filter(|t| !is_stopword(t))
        .map(|t| t.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        let toks = tokenize("Against MASS immigration!");
        assert_eq!(toks, vec!["mass", "immigration"]);
    }

    #[test]
    fn filters_stopwords_in_all_four_languages() {
        assert!(tokenize("the and").is_empty());
        assert!(tokenize("der und für").is_empty());
        assert!(tokenize("le pour avec").is_empty());
        assert!(tokenize("il per della").is_empty());
    }

    #[test]
    fn keeps_word_characters_with_diacritics() {
        let toks = tokenize("Volksinitiative Ernährungssouveränität");
        assert_eq!(toks, vec!["volksinitiative", "ernährungssouveränität"]);
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t\n").is_empty());
    }
}

use anyhow::Result;

use crate::record::InitiativeRecord;

/// Seam for the generated-summary collaborator. The default is a local
/// extractive summarizer; an external model-backed generator plugs in
/// as a second implementation. Failures are surfaced inline by the
/// chatbot, never propagated.
pub trait Summarizer: Send + Sync {
    fn summarize(&self, record: &InitiativeRecord) -> Result<String>;
}

/// Takes the leading sentences of the best available prose field and
/// clips them to a character budget.
pub struct ExtractiveSummarizer {
    pub max_chars: usize,
}

impl Default for ExtractiveSummarizer {
    fn default() -> Self {
        Self { max_chars: 300 }
    }
}

impl Summarizer for ExtractiveSummarizer {
    fn summarize(&self, record: &InitiativeRecord) -> Result<String> {
        let prose = {
            let full = record.full_text().trim();
            if full.is_empty() {
                record.description().trim()
            } else {
                full
            }
        };
        if prose.is_empty() {
            return Ok(format!(
                "The initiative \"{}\" has no published text yet.",
                record.title.trim()
            ));
        }
        Ok(leading_sentences(prose, self.max_chars))
    }
}

/// First sentences of `text`, up to roughly `max_chars` characters,
/// never cutting inside a sentence unless the first sentence alone is
/// over budget.
fn leading_sentences(text: &str, max_chars: usize) -> String {
    let mut out = String::new();
    for sentence in split_sentences(text) {
        if !out.is_empty() && out.chars().count() + sentence.chars().count() > max_chars {
            break;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(sentence);
        if out.chars().count() >= max_chars {
            break;
        }
    }
    if out.chars().count() > max_chars {
        let clipped: String = out.chars().take(max_chars).collect();
        format!("{}…", clipped.trim_end())
    } else {
        out
    }
}

fn split_sentences(text: &str) -> impl Iterator<Item = &str> {
    text.split_inclusive(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

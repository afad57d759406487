use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fmt::Write as _;

use crate::fuzzy::match_initiative;
use crate::index::{CorpusError, TermWeightSpace};
use crate::intent::{self, Intent};
use crate::rank::{rank, RankedResult, DEFAULT_MIN_SCORE, DEFAULT_TOP_N};
use crate::record::InitiativeRecord;
use crate::stats::Statistics;
use crate::summary::{ExtractiveSummarizer, Summarizer};

pub static GREETING_REPLIES: &[&str] = &[
    "Hello! I'm your Swiss Initiatives Chatbot. How can I help you today?",
    "Grüezi! Ask me anything about Swiss popular initiatives.",
    "Bonjour! I'm here to answer your questions about Swiss initiatives.",
    "Buongiorno! What would you like to know about Swiss popular initiatives?",
];

pub static FAREWELL_REPLIES: &[&str] = &[
    "Goodbye! Feel free to return if you have more questions.",
    "Auf Wiedersehen! Come back anytime.",
    "Au revoir! Happy to help you again soon.",
    "Arrivederci! Have a great day!",
];

pub static FALLBACK_REPLIES: &[&str] = &[
    "I'm not sure I understand. Could you rephrase your question about Swiss initiatives?",
    "I don't have information about that. Would you like to know about specific Swiss initiatives?",
    "I can help with questions about Swiss popular initiatives. What would you like to know?",
];

static PROCESS_REPLY: &str = "**Swiss Popular Initiative Process**\n\n\
1. **Formation of a committee**: 7-27 Swiss citizens form a committee.\n\
2. **Submission of text**: Initiative text is submitted for validation.\n\
3. **Collection of signatures**: 100,000 valid signatures within 18 months.\n\
4. **Validation**: The government verifies the signatures.\n\
5. **Parliament Review**: Parliament debates the initiative.\n\
6. **Popular Vote**: Requires majority votes from people & cantons.";

/// The rule-based response engine: one immutable term-weight space over
/// the corpus plus a fixed-priority intent chain. Built once per corpus
/// load; reloading means constructing a fresh instance and swapping the
/// reference.
pub struct Chatbot {
    corpus: Vec<InitiativeRecord>,
    space: TermWeightSpace,
    stats: Statistics,
    summarizer: Box<dyn Summarizer>,
    rng: StdRng,
}

impl Chatbot {
    pub fn new(corpus: Vec<InitiativeRecord>) -> Result<Self, CorpusError> {
        Self::with_rng(corpus, StdRng::from_entropy())
    }

    /// Construct with an explicit random source so tests can pin the
    /// seed for greeting/farewell/fallback selection.
    pub fn with_rng(corpus: Vec<InitiativeRecord>, rng: StdRng) -> Result<Self, CorpusError> {
        let space = TermWeightSpace::build(&corpus)?;
        let stats = Statistics::from_records(&corpus);
        Ok(Self {
            corpus,
            space,
            stats,
            summarizer: Box::new(ExtractiveSummarizer::default()),
            rng,
        })
    }

    /// Swap the summary generator, e.g. for a model-backed one.
    pub fn with_summarizer(mut self, summarizer: Box<dyn Summarizer>) -> Self {
        self.summarizer = summarizer;
        self
    }

    pub fn corpus(&self) -> &[InitiativeRecord] {
        &self.corpus
    }

    pub fn statistics(&self) -> &Statistics {
        &self.stats
    }

    /// The sole conversational entry point. Always returns a non-empty
    /// reply and never fails, whatever the utterance looks like.
    pub fn get_response(&mut self, utterance: &str) -> String {
        let text = utterance.to_lowercase();
        match intent::classify(&text) {
            Intent::Greeting => self.pick(GREETING_REPLIES),
            Intent::Farewell => self.pick(FAREWELL_REPLIES),
            Intent::EntityLookup(phrase) => match self.entity_reply(&phrase) {
                Some(reply) => reply,
                // No confident entity match: keep walking the chain.
                None => self.post_entity_reply(&text),
            },
            Intent::ProcessFaq => PROCESS_REPLY.to_string(),
            Intent::StatsFaq => self.stats_reply(),
            Intent::Search => self
                .search_reply(&text)
                .unwrap_or_else(|| self.pick(FALLBACK_REPLIES)),
        }
    }

    /// Ranked hits with scores, for callers that want the numbers.
    pub fn ranked(&self, query: &str, top_n: usize) -> Vec<(f32, &InitiativeRecord)> {
        rank(&self.space, query, top_n, DEFAULT_MIN_SCORE)
            .into_iter()
            .map(|RankedResult { doc, score }| (score, &self.corpus[doc]))
            .collect()
    }

    /// Direct ranked search over the corpus, used by the presentation
    /// layer's filtering views independently of the arbiter.
    pub fn search_initiatives(&self, query: &str, top_n: usize) -> Vec<&InitiativeRecord> {
        self.ranked(query, top_n)
            .into_iter()
            .map(|(_, rec)| rec)
            .collect()
    }

    fn pick(&mut self, replies: &[&str]) -> String {
        replies
            .choose(&mut self.rng)
            .copied()
            .unwrap_or("…")
            .to_string()
    }

    fn summary_for(&self, record: &InitiativeRecord) -> String {
        match self.summarizer.summarize(record) {
            Ok(summary) => summary,
            Err(err) => {
                tracing::warn!(title = %record.title, error = %err, "summary generation failed");
                format!("(summary unavailable: {err})")
            }
        }
    }

    fn entity_reply(&mut self, phrase: &str) -> Option<String> {
        let record = match_initiative(&self.space, &self.corpus, phrase)?.clone();
        let summary = self.summary_for(&record);
        let mut reply = format!("**{}**\n\n", record.title.trim());
        if !record.submitted().is_empty() {
            let _ = writeln!(reply, "**Submission Date**: {}", record.submitted());
        }
        if !record.status().is_empty() {
            let _ = writeln!(reply, "**Status**: {}", record.status());
        }
        if !record.result().is_empty() {
            let _ = writeln!(reply, "**Result**: {}", record.result());
        }
        if !record.description().is_empty() {
            let _ = write!(reply, "\n**Description**:\n{}\n", record.description());
        }
        let _ = write!(reply, "\n**Summary**: {summary}");
        Some(reply)
    }

    /// The tail of the chain for utterances whose entity lookup came up
    /// empty: process FAQ, statistics, ranked search, fallback.
    fn post_entity_reply(&mut self, text: &str) -> String {
        if intent::is_process_question(text) {
            return PROCESS_REPLY.to_string();
        }
        if intent::is_stats_question(text) {
            return self.stats_reply();
        }
        self.search_reply(text)
            .unwrap_or_else(|| self.pick(FALLBACK_REPLIES))
    }

    fn stats_reply(&self) -> String {
        let stats = &self.stats;
        let mut reply = format!("**Total initiatives**: {}\n", stats.total);
        if !stats.by_status.is_empty() {
            reply.push_str("\n**By status**:\n");
            for (status, count) in &stats.by_status {
                let _ = writeln!(reply, "- {status}: {count}");
            }
        }
        if !stats.by_result.is_empty() {
            reply.push_str("\n**By result**:\n");
            for (result, count) in &stats.by_result {
                let _ = writeln!(reply, "- {result}: {count}");
            }
        }
        reply.trim_end().to_string()
    }

    fn search_reply(&mut self, text: &str) -> Option<String> {
        let hits = rank(&self.space, text, DEFAULT_TOP_N, DEFAULT_MIN_SCORE);
        if hits.is_empty() {
            return None;
        }
        let mut reply = String::from("Here's what I found related to your query:\n\n");
        for (i, hit) in hits.iter().enumerate() {
            let record = &self.corpus[hit.doc];
            let _ = writeln!(reply, "{}. **{}**", i + 1, record.title.trim());
            let status = if record.status().is_empty() {
                "Unknown"
            } else {
                record.status()
            };
            let _ = writeln!(reply, "   Status: {status}");
            if !record.description().is_empty() {
                let _ = writeln!(reply, "   {}", record.description());
            }
            let _ = writeln!(reply, "   **Summary**: {}\n", self.summary_for(record));
        }
        reply.push_str("Would you like more details about any of these initiatives?");
        Some(reply)
    }
}

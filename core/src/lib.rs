pub mod chatbot;
pub mod fuzzy;
pub mod index;
pub mod intent;
pub mod rank;
pub mod record;
pub mod stats;
pub mod summary;
pub mod tokenizer;

pub use chatbot::Chatbot;
pub use index::{CorpusError, TermWeightSpace};
pub use rank::{rank, RankedResult, DEFAULT_MIN_SCORE, DEFAULT_TOP_N};
pub use record::InitiativeRecord;
pub use stats::Statistics;

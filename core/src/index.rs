use std::collections::{HashMap, HashSet};
use thiserror::Error;

use crate::record::InitiativeRecord;
use crate::tokenizer::tokenize;

pub type TermId = u32;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("corpus contains no usable text, even after falling back to titles")]
    Empty,
}

/// The fitted vocabulary plus one L2-normalized tf-idf vector per corpus
/// record, in corpus order. Built once per corpus load and immutable
/// afterwards; a reload replaces the whole space.
#[derive(Debug)]
pub struct TermWeightSpace {
    pub vocabulary: HashMap<String, TermId>,
    /// Document frequency per term id.
    pub df: Vec<u32>,
    /// Sparse (term id, weight) pairs per document, sorted by term id.
    pub doc_vectors: Vec<Vec<(TermId, f32)>>,
    pub num_docs: u32,
}

impl TermWeightSpace {
    /// Build the space from the full corpus. Falls back to indexing the
    /// titles alone when every full document surface is empty; fails
    /// with [`CorpusError::Empty`] only when the titles are empty too.
    pub fn build(corpus: &[InitiativeRecord]) -> Result<Self, CorpusError> {
        let texts: Vec<String> = corpus.iter().map(|r| r.document_text()).collect();
        let texts = if texts.iter().all(|t| t.is_empty()) {
            let titles: Vec<String> = corpus.iter().map(|r| r.title_only_text()).collect();
            if titles.iter().all(|t| t.is_empty()) {
                return Err(CorpusError::Empty);
            }
            tracing::warn!("all document surfaces empty, indexing titles only");
            titles
        } else {
            texts
        };

        let mut vocabulary: HashMap<String, TermId> = HashMap::new();
        let mut df: Vec<u32> = Vec::new();
        let mut doc_tokens: Vec<Vec<TermId>> = Vec::with_capacity(texts.len());
        for text in &texts {
            let mut ids = Vec::new();
            let mut seen: HashSet<TermId> = HashSet::new();
            for term in tokenize(text) {
                let next_id = vocabulary.len() as TermId;
                let tid = *vocabulary.entry(term).or_insert(next_id);
                if tid as usize >= df.len() {
                    df.resize(tid as usize + 1, 0);
                }
                if seen.insert(tid) {
                    df[tid as usize] += 1;
                }
                ids.push(tid);
            }
            doc_tokens.push(ids);
        }

        let num_docs = texts.len() as u32;
        let doc_vectors = doc_tokens
            .into_iter()
            .map(|ids| {
                let mut tf: HashMap<TermId, u32> = HashMap::new();
                for tid in ids {
                    *tf.entry(tid).or_insert(0) += 1;
                }
                let mut vector: Vec<(TermId, f32)> = tf
                    .into_iter()
                    .map(|(tid, raw)| (tid, tf_idf(raw, df[tid as usize], num_docs)))
                    .collect();
                vector.sort_by_key(|&(tid, _)| tid);
                normalize(&mut vector);
                vector
            })
            .collect();

        tracing::info!(
            num_docs,
            num_terms = vocabulary.len(),
            "built term-weight space"
        );
        Ok(Self {
            vocabulary,
            df,
            doc_vectors,
            num_docs,
        })
    }

    /// Inverse document frequency for a fitted term id.
    pub fn idf(&self, tid: TermId) -> f32 {
        smoothed_idf(self.df[tid as usize], self.num_docs)
    }
}

/// Add-one smoothed idf, never zero or negative even for terms present
/// in every document.
fn smoothed_idf(df: u32, num_docs: u32) -> f32 {
    (((1 + num_docs) as f32) / ((1 + df) as f32)).ln() + 1.0
}

fn tf_idf(raw_tf: u32, df: u32, num_docs: u32) -> f32 {
    let tf = 1.0 + (raw_tf as f32).ln();
    tf * smoothed_idf(df, num_docs)
}

/// L2-normalize a sparse vector in place. Zero vectors are left as-is.
pub(crate) fn normalize(vector: &mut [(TermId, f32)]) {
    let norm: f32 = vector.iter().map(|&(_, w)| w * w).sum::<f32>().sqrt();
    if norm > 0.0 {
        for (_, w) in vector.iter_mut() {
            *w /= norm;
        }
    }
}

use std::collections::HashMap;

use crate::index::{normalize, TermId, TermWeightSpace};
use crate::tokenizer::tokenize;

/// Minimum cosine similarity a document must exceed to be surfaced.
pub const DEFAULT_MIN_SCORE: f32 = 0.1;
pub const DEFAULT_TOP_N: usize = 5;

/// One ranked hit: the corpus index of the document plus its cosine
/// similarity to the query, in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedResult {
    pub doc: usize,
    pub score: f32,
}

/// Project a free-text query into the fitted space and score it against
/// every document. Returns at most `top_n` results in strictly
/// descending score order, all above `min_score`; ties are broken by
/// lower document index. Tokens outside the fitted vocabulary
/// contribute nothing — queries never grow the vocabulary.
pub fn rank(
    space: &TermWeightSpace,
    query: &str,
    top_n: usize,
    min_score: f32,
) -> Vec<RankedResult> {
    let mut tf: HashMap<TermId, u32> = HashMap::new();
    for term in tokenize(query) {
        if let Some(&tid) = space.vocabulary.get(&term) {
            *tf.entry(tid).or_insert(0) += 1;
        }
    }
    if tf.is_empty() {
        return Vec::new();
    }

    let mut query_vector: Vec<(TermId, f32)> = tf
        .into_iter()
        .map(|(tid, raw)| {
            let tf_weight = 1.0 + (raw as f32).ln();
            (tid, tf_weight * space.idf(tid))
        })
        .collect();
    query_vector.sort_by_key(|&(tid, _)| tid);
    normalize(&mut query_vector);

    let mut scored: Vec<RankedResult> = space
        .doc_vectors
        .iter()
        .enumerate()
        .map(|(doc, vector)| RankedResult {
            doc,
            score: sparse_dot(&query_vector, vector),
        })
        .collect();
    // Stable sort keeps the lower document index first on equal scores.
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    scored
        .into_iter()
        .take(top_n)
        .filter(|r| r.score > min_score)
        .collect()
}

/// Dot product of two sparse vectors sorted by term id.
fn sparse_dot(a: &[(TermId, f32)], b: &[(TermId, f32)]) -> f32 {
    let mut sum = 0.0;
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                sum += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    sum
}

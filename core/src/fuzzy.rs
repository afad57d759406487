use crate::index::TermWeightSpace;
use crate::rank::{rank, DEFAULT_MIN_SCORE};
use crate::record::InitiativeRecord;

/// Minimum sequence ratio a title must exceed to count as a confident
/// entity match. Kept as configuration rather than hard-coded law.
pub const TITLE_MATCH_THRESHOLD: f64 = 0.5;

/// Shortlist size handed to the ranker before title comparison.
const SHORTLIST: usize = 5;

/// Resolve a short candidate phrase to one initiative record. The
/// ranker narrows the corpus to a shortlist of otherwise-relevant
/// documents; the best title by sequence ratio wins, but only above the
/// acceptance threshold. `None` means "no confident match", which the
/// caller treats as a fall-through signal, not an error.
pub fn match_initiative<'a>(
    space: &TermWeightSpace,
    corpus: &'a [InitiativeRecord],
    phrase: &str,
) -> Option<&'a InitiativeRecord> {
    let phrase = phrase.trim().to_lowercase();
    if phrase.is_empty() {
        return None;
    }
    let mut best: Option<(f64, &InitiativeRecord)> = None;
    for hit in rank(space, &phrase, SHORTLIST, DEFAULT_MIN_SCORE) {
        let record = &corpus[hit.doc];
        let ratio = sequence_ratio(&phrase, &record.title.trim().to_lowercase());
        if best.map_or(true, |(b, _)| ratio > b) {
            best = Some((ratio, record));
        }
    }
    match best {
        Some((ratio, record)) if ratio > TITLE_MATCH_THRESHOLD => Some(record),
        _ => None,
    }
}

/// Similarity of two strings as the total length of their longest
/// matching blocks over the combined length, in [0, 1]. This is the
/// Ratcliff/Obershelp measure: identical strings score 1.0, strings
/// with no characters in common score 0.0.
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let matched = matching_total(&a, &b);
    2.0 * matched as f64 / (a.len() + b.len()) as f64
}

/// Total characters covered by recursively taking the longest common
/// block and matching what remains on either side of it.
fn matching_total(a: &[char], b: &[char]) -> usize {
    let (ai, bi, len) = longest_common_block(a, b);
    if len == 0 {
        return 0;
    }
    len + matching_total(&a[..ai], &b[..bi]) + matching_total(&a[ai + len..], &b[bi + len..])
}

/// Longest common contiguous block between `a` and `b`, as
/// (start in a, start in b, length). Earliest block wins on ties.
fn longest_common_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    // lengths[j] = length of the common suffix ending at a[i], b[j]
    let mut lengths = vec![0usize; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        let mut prev_diag = 0;
        for (j, &cb) in b.iter().enumerate() {
            let current = if ca == cb { prev_diag + 1 } else { 0 };
            prev_diag = lengths[j + 1];
            lengths[j + 1] = current;
            if current > best.2 {
                best = (i + 1 - current, j + 1 - current, current);
            }
        }
    }
    best
}

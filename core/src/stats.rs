use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::record::InitiativeRecord;

lazy_static! {
    static ref YEAR_RE: Regex = Regex::new(r"\b(1[89]\d{2}|20\d{2})\b").expect("valid regex");
}

/// Aggregate counts over the full corpus. BTreeMaps keep the rendered
/// breakdown in a stable order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Statistics {
    pub total: usize,
    pub by_status: BTreeMap<String, usize>,
    pub by_result: BTreeMap<String, usize>,
    pub by_year: BTreeMap<String, usize>,
}

impl Statistics {
    pub fn from_records(records: &[InitiativeRecord]) -> Self {
        let mut stats = Statistics {
            total: records.len(),
            ..Default::default()
        };
        for record in records {
            let status = non_empty_or_unknown(record.status());
            *stats.by_status.entry(status).or_insert(0) += 1;
            let result = non_empty_or_unknown(record.result());
            *stats.by_result.entry(result).or_insert(0) += 1;
            if let Some(year) = extract_year(record.submitted()) {
                *stats.by_year.entry(year).or_insert(0) += 1;
            }
        }
        stats
    }
}

fn non_empty_or_unknown(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        "Unknown".to_string()
    } else {
        value.to_string()
    }
}

/// Pull a plausible year out of a date string, accepting both ISO
/// ("2020-01-15") and Swiss dotted ("15.01.2020") forms.
fn extract_year(date: &str) -> Option<String> {
    YEAR_RE.find(date).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(status: Option<&str>, result: Option<&str>, date: Option<&str>) -> InitiativeRecord {
        InitiativeRecord {
            title: "x".into(),
            status: status.map(Into::into),
            result: result.map(Into::into),
            submission_date: date.map(Into::into),
            ..Default::default()
        }
    }

    #[test]
    fn counts_group_by_status_and_result() {
        let records = vec![
            record(Some("Voted"), Some("Rejected"), Some("2020-11-29")),
            record(Some("Voted"), Some("Accepted"), Some("29.11.2020")),
            record(Some("Collecting"), None, None),
        ];
        let stats = Statistics::from_records(&records);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.by_status["Voted"], 2);
        assert_eq!(stats.by_status["Collecting"], 1);
        assert_eq!(stats.by_result["Rejected"], 1);
        assert_eq!(stats.by_result["Unknown"], 1);
        assert_eq!(stats.by_year["2020"], 2);
    }

    #[test]
    fn empty_corpus_counts_to_zero() {
        let stats = Statistics::from_records(&[]);
        assert_eq!(stats.total, 0);
        assert!(stats.by_status.is_empty());
    }
}

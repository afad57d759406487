//! Record-source collaborator: loads a scraped snapshot of initiative
//! records from disk and answers the lookup/statistics queries the core
//! and the presentation layer need. The scraper that produces the
//! snapshot runs elsewhere; staleness is only reported, never acted on.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use time::format_description::well_known::Rfc3339;
use time::{Duration, OffsetDateTime};

use initiative_core::{InitiativeRecord, Statistics};

/// Snapshots older than this are logged as stale on load.
pub const DEFAULT_MAX_AGE: Duration = Duration::hours(24);

#[derive(Deserialize)]
struct NestedData {
    #[serde(default)]
    initiatives: Vec<InitiativeRecord>,
}

/// The three snapshot shapes seen in the wild: a bare record array, a
/// flat cache envelope, and the scraper's nested envelope.
#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotFile {
    Bare(Vec<InitiativeRecord>),
    Flat {
        #[serde(default)]
        timestamp: Option<String>,
        initiatives: Vec<InitiativeRecord>,
    },
    Nested {
        #[serde(default)]
        timestamp: Option<String>,
        data: NestedData,
    },
}

pub struct InitiativeStore {
    records: Vec<InitiativeRecord>,
    fetched_at: Option<OffsetDateTime>,
}

impl InitiativeStore {
    /// Load a snapshot file and warn when its timestamp is older than
    /// [`DEFAULT_MAX_AGE`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading snapshot {}", path.display()))?;
        let snapshot: SnapshotFile = serde_json::from_str(&raw)
            .with_context(|| format!("parsing snapshot {}", path.display()))?;
        let (timestamp, records) = match snapshot {
            SnapshotFile::Bare(records) => (None, records),
            SnapshotFile::Flat {
                timestamp,
                initiatives,
            } => (timestamp, initiatives),
            SnapshotFile::Nested { timestamp, data } => (timestamp, data.initiatives),
        };

        let fetched_at = timestamp.as_deref().and_then(parse_timestamp);
        if let Some(fetched) = fetched_at {
            let age = OffsetDateTime::now_utc() - fetched;
            if age > DEFAULT_MAX_AGE {
                tracing::warn!(
                    snapshot = %path.display(),
                    age_hours = age.whole_hours(),
                    "initiative snapshot is stale"
                );
            }
        }
        tracing::info!(
            snapshot = %path.display(),
            count = records.len(),
            "loaded initiative snapshot"
        );
        Ok(Self {
            records,
            fetched_at,
        })
    }

    pub fn from_records(records: Vec<InitiativeRecord>) -> Self {
        Self {
            records,
            fetched_at: None,
        }
    }

    pub fn fetched_at(&self) -> Option<OffsetDateTime> {
        self.fetched_at
    }

    pub fn get_all_initiatives(&self) -> &[InitiativeRecord] {
        &self.records
    }

    /// Case-insensitive substring match on the title.
    pub fn get_initiative_by_title(&self, title: &str) -> Option<&InitiativeRecord> {
        let needle = title.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.records
            .iter()
            .find(|r| r.title.to_lowercase().contains(&needle))
    }

    pub fn get_statistics(&self) -> Statistics {
        Statistics::from_records(&self.records)
    }

    pub fn into_records(self) -> Vec<InitiativeRecord> {
        self.records
    }
}

fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    match OffsetDateTime::parse(raw, &Rfc3339) {
        Ok(ts) => Some(ts),
        Err(err) => {
            tracing::debug!(timestamp = raw, error = %err, "unparseable snapshot timestamp");
            None
        }
    }
}

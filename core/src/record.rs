use serde::{Deserialize, Serialize};

/// One scraped popular-initiative record. Only `title` is reliably
/// present; every other field may be missing or empty depending on how
/// much of the source page could be extracted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InitiativeRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_on: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preliminary_review: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voted_on: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_text_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initiative_link: Option<String>,
}

fn opt_str(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("")
}

impl InitiativeRecord {
    pub fn status(&self) -> &str {
        opt_str(&self.status)
    }

    pub fn result(&self) -> &str {
        opt_str(&self.result)
    }

    pub fn description(&self) -> &str {
        opt_str(&self.description)
    }

    pub fn full_text(&self) -> &str {
        opt_str(&self.full_text)
    }

    /// Submission date, whichever of the two scraped spellings is present.
    pub fn submitted(&self) -> &str {
        let date = opt_str(&self.submission_date);
        if date.is_empty() {
            opt_str(&self.submitted_on)
        } else {
            date
        }
    }

    pub fn preliminary_review(&self) -> &str {
        opt_str(&self.preliminary_review)
    }

    /// The canonical text surface used for indexing: non-empty fields in
    /// fixed priority order, trimmed and joined by single spaces.
    pub fn document_text(&self) -> String {
        let fields = [
            self.title.as_str(),
            self.status(),
            self.result(),
            self.preliminary_review(),
            self.submitted(),
            self.full_text(),
        ];
        let parts: Vec<&str> = fields
            .iter()
            .map(|f| f.trim())
            .filter(|f| !f.is_empty())
            .collect();
        parts.join(" ")
    }

    /// Reduced surface used when the full document texts are unusable.
    pub fn title_only_text(&self) -> String {
        self.title.trim().to_string()
    }
}

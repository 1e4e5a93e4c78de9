use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One question/answer pair as it is stored on disk and sent over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct FaqRecord {
    pub id: String,
    pub question: String,
    pub answer: String,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

impl FaqRecord {
    pub fn new(id: String, question: String, answer: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            question,
            answer,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the question and answer and refreshes `updated_at`.
    /// `id` and `created_at` are never touched.
    pub fn revise(&mut self, question: String, answer: String) {
        self.question = question;
        self.answer = answer;
        self.updated_at = Utc::now();
    }

    pub fn was_edited(&self) -> bool {
        self.updated_at != self.created_at
    }

    /// Case-insensitive substring match against question or answer.
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.question.to_lowercase().contains(needle) || self.answer.to_lowercase().contains(needle)
    }
}

/// Request body for create and update. Both fields are optional here so a
/// missing field surfaces as a validation error rather than a decode error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
pub struct FaqInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub question: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub answer: Option<String>,
}

impl FaqInput {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: Some(question.into()),
            answer: Some(answer.into()),
        }
    }

    /// Returns the trimmed question and answer when both are present and non-empty.
    pub fn validated(&self) -> Option<(String, String)> {
        let question = self.question.as_deref().map(str::trim).unwrap_or_default();
        let answer = self.answer.as_deref().map(str::trim).unwrap_or_default();

        if question.is_empty() || answer.is_empty() {
            return None;
        }

        Some((question.to_string(), answer.to_string()))
    }
}

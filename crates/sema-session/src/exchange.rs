//! Chat exchange data structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sema_client::HistoryRecord;

/// Question shown for history records that stored an answer only.
const PLACEHOLDER_QUESTION: &str = "(earlier question)";

/// One question/answer pair in the session's chat history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exchange {
    /// Unique identifier
    pub id: String,
    /// The question exactly as the user entered it
    pub question: String,
    /// The service's answer
    pub answer: String,
    /// When the exchange was created (or restored)
    pub asked_at: DateTime<Utc>,
}

impl Exchange {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            question: question.into(),
            answer: answer.into(),
            asked_at: Utc::now(),
        }
    }

    /// Rebuild an exchange from a stored history record, synthesizing a
    /// placeholder question when the record carries an answer only.
    pub fn from_record(record: HistoryRecord) -> Self {
        let question = match record.question {
            Some(q) if !q.trim().is_empty() => q,
            _ => PLACEHOLDER_QUESTION.to_string(),
        };

        Self::new(question, record.answer)
    }
}

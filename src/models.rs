// Request and response bodies

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize, Serializer};

use crate::store::QARecord;

// POST /ask request
#[derive(Debug, Clone, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

// POST /ask response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AskResponse {
    pub question: String,
    pub answer: String,
    #[serde(serialize_with = "serialize_iso_micros")]
    pub timestamp: NaiveDateTime,
}

// ISO-8601 with microseconds; the fraction is omitted when it is zero
fn serialize_iso_micros<S>(timestamp: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let format = if timestamp.nanosecond() / 1_000 == 0 {
        "%Y-%m-%dT%H:%M:%S"
    } else {
        "%Y-%m-%dT%H:%M:%S%.6f"
    };
    serializer.collect_str(&timestamp.format(format))
}

// One entry of last_5_questions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecentQuestion {
    pub question: String,
    pub answer: String,
    pub created_at: NaiveDateTime,
}

impl From<QARecord> for RecentQuestion {
    fn from(record: QARecord) -> Self {
        Self {
            question: record.question,
            answer: record.answer,
            created_at: record.created_at,
        }
    }
}

// One entry of top_3_words
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

// GET /analytics response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyticsResponse {
    pub total_queries: u64,
    pub last_5_questions: Vec<RecentQuestion>,
    pub top_3_words: Vec<WordCount>,
}

// Error body shared by every endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub detail: String,
}

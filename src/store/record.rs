use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One persisted question/answer pair
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QARecord {
    /// Auto-incrementing identity, also the insertion order
    pub id: i64,
    pub question: String,
    pub answer: String,
    /// Set by the database at insert time (UTC)
    pub created_at: NaiveDateTime,
}

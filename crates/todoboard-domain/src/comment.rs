use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type CommentId = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(id: CommentId, text: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            text,
            created_at: now,
        }
    }
}

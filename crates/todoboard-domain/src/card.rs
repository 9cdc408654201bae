use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::attachment::Attachment;
use crate::checklist::Checklist;
use crate::comment::Comment;
use crate::label::LabelId;

pub type CardId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardPriority {
    Low,
    Medium,
    High,
}

impl CardPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::str::FromStr for CardPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(format!("unknown priority '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_date::deserialize")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_date::deserialize")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub priority: Option<CardPriority>,
    #[serde(default)]
    pub labels: BTreeSet<LabelId>,
    #[serde(default)]
    pub checklists: Vec<Checklist>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Card {
    /// A blank card: empty description, started now, nothing else set.
    pub fn new(id: CardId, title: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title,
            description: String::new(),
            due_date: None,
            start_date: Some(now),
            completed: false,
            priority: None,
            labels: BTreeSet::new(),
            checklists: Vec::new(),
            comments: Vec::new(),
            attachments: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh `updated_at`. Never moves it backwards.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        if now > self.updated_at {
            self.updated_at = now;
        }
    }

    pub fn has_label(&self, label_id: &str) -> bool {
        self.labels.contains(label_id)
    }

    /// Add the label reference if missing, remove it otherwise.
    /// Returns whether the card now carries the label.
    pub fn toggle_label(&mut self, label_id: &str) -> bool {
        if self.labels.remove(label_id) {
            false
        } else {
            self.labels.insert(label_id.to_string());
            true
        }
    }

    pub fn checklist_mut(&mut self, checklist_id: &str) -> Option<&mut Checklist> {
        self.checklists.iter_mut().find(|c| c.id == checklist_id)
    }
}

/// Optional timestamps in stored snapshots that fail to parse are read as unset.
///
/// Strings go through RFC 3339 or `YYYY-MM-DD`, integers are unix millis, and
/// any other value is dropped without failing the surrounding document.
mod lenient_date {
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};
    use serde::de::IgnoredAny;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StoredDate {
        Text(String),
        Millis(i64),
        Other(IgnoredAny),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<StoredDate> = Option::deserialize(deserializer)?;
        Ok(match raw {
            None => None,
            Some(StoredDate::Text(value)) => parse(&value),
            Some(StoredDate::Millis(millis)) => {
                let dt = Utc.timestamp_millis_opt(millis).single();
                if dt.is_none() {
                    tracing::warn!("Dropping out-of-range stored timestamp {}", millis);
                }
                dt
            }
            Some(StoredDate::Other(_)) => {
                tracing::warn!("Dropping stored date that is neither text nor a number");
                None
            }
        })
    }

    fn parse(value: &str) -> Option<DateTime<Utc>> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return None;
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
        }
        tracing::warn!("Dropping unparsable stored date '{}'", value);
        None
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type AttachmentId = String;

const IMAGE_EXTENSIONS: [&str; 4] = [".jpg", ".jpeg", ".png", ".gif"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    Image,
    File,
    Link,
}

impl AttachmentKind {
    /// Images are recognised by extension; everything else is a link.
    pub fn infer(url: &str) -> Self {
        let lower = url.to_lowercase();
        if IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
            Self::Image
        } else {
            Self::Link
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub id: AttachmentId,
    pub name: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: AttachmentKind,
    pub created_at: DateTime<Utc>,
}

impl Attachment {
    pub fn new(id: AttachmentId, name: String, url: String, now: DateTime<Utc>) -> Self {
        let kind = AttachmentKind::infer(&url);
        Self {
            id,
            name,
            url,
            kind,
            created_at: now,
        }
    }
}

//! Values derived from cards for display. Nothing here mutates state.

mod due;
mod labels;
mod progress;
mod text;

pub use due::{due_status, is_due_soon, is_overdue, DueStatus, DEFAULT_DUE_SOON_DAYS};
pub use labels::resolve_labels;
pub use progress::{checklist_progress, ChecklistProgress};
pub use text::{description_preview, format_day_month, DEFAULT_PREVIEW_CHARS};

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::{Card, CardPriority, Label};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSettings {
    pub due_soon_window: Duration,
    pub preview_chars: usize,
}

impl ViewSettings {
    pub fn new(due_soon_days: i64, preview_chars: usize) -> Self {
        Self {
            due_soon_window: Duration::days(due_soon_days.max(0)),
            preview_chars,
        }
    }
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self::new(DEFAULT_DUE_SOON_DAYS, DEFAULT_PREVIEW_CHARS)
    }
}

/// Everything a card tile shows, computed at one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSummary {
    pub id: String,
    pub title: String,
    pub completed: bool,
    pub priority: Option<CardPriority>,
    pub description_preview: Option<String>,
    pub labels: Vec<Label>,
    pub checklist: Option<ChecklistProgress>,
    pub due_status: DueStatus,
    pub due_label: Option<String>,
    pub comment_count: usize,
    pub attachment_count: usize,
}

impl CardSummary {
    pub fn build(card: &Card, catalog: &[Label], now: DateTime<Utc>, settings: &ViewSettings) -> Self {
        Self {
            id: card.id.clone(),
            title: card.title.clone(),
            completed: card.completed,
            priority: card.priority,
            description_preview: description_preview(card, settings.preview_chars),
            labels: resolve_labels(card, catalog).into_iter().cloned().collect(),
            checklist: checklist_progress(card),
            due_status: due_status(card, now, settings.due_soon_window),
            due_label: card.due_date.and_then(|d| format_day_month(&d.to_rfc3339())),
            comment_count: card.comments.len(),
            attachment_count: card.attachments.len(),
        }
    }
}

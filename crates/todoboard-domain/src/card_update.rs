use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

use crate::{Attachment, Card, CardPriority, Checklist, Comment, FieldUpdate, LabelId};

/// A partial set of card fields. Fields left at their default are untouched.
///
/// `id` and `created_at` are deliberately absent: they never change after creation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: FieldUpdate<DateTime<Utc>>,
    pub start_date: FieldUpdate<DateTime<Utc>>,
    pub completed: Option<bool>,
    pub priority: FieldUpdate<CardPriority>,
    pub labels: Option<BTreeSet<LabelId>>,
    pub checklists: Option<Vec<Checklist>>,
    pub comments: Option<Vec<Comment>>,
    pub attachments: Option<Vec<Attachment>>,
}

impl CardUpdate {
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Default::default()
        }
    }

    pub fn priority(priority: Option<CardPriority>) -> Self {
        Self {
            priority: priority.into(),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && !self.due_date.is_change()
            && !self.start_date.is_change()
            && self.completed.is_none()
            && !self.priority.is_change()
            && self.labels.is_none()
            && self.checklists.is_none()
            && self.comments.is_none()
            && self.attachments.is_none()
    }
}

impl Card {
    /// Merge `updates` into the card and refresh `updated_at`.
    pub fn update(&mut self, updates: CardUpdate, now: DateTime<Utc>) {
        if let Some(title) = updates.title {
            self.title = title;
        }
        if let Some(description) = updates.description {
            self.description = description;
        }
        updates.due_date.apply_to(&mut self.due_date);
        updates.start_date.apply_to(&mut self.start_date);
        if let Some(completed) = updates.completed {
            self.completed = completed;
        }
        updates.priority.apply_to(&mut self.priority);
        if let Some(labels) = updates.labels {
            self.labels = labels;
        }
        if let Some(checklists) = updates.checklists {
            self.checklists = checklists;
        }
        if let Some(comments) = updates.comments {
            self.comments = comments;
        }
        if let Some(attachments) = updates.attachments {
            self.attachments = attachments;
        }
        self.touch(now);
    }
}

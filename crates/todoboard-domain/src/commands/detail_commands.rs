//! Card detail edits: labels, comments, attachments, checklists, selection.
//!
//! All of these refresh `updated_at` on the card they touch, and are no-ops
//! when the card cannot be found at the given location.

use super::{Command, CommandContext, CommandOutcome};
use crate::{Attachment, BoardState, Card, Checklist, ChecklistItem, Comment};

/// Where a card lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLocation {
    pub board_id: String,
    pub list_id: String,
    pub card_id: String,
}

impl CardLocation {
    pub fn new(
        board_id: impl Into<String>,
        list_id: impl Into<String>,
        card_id: impl Into<String>,
    ) -> Self {
        Self {
            board_id: board_id.into(),
            list_id: list_id.into(),
            card_id: card_id.into(),
        }
    }

    fn card_mut<'s>(&self, state: &'s mut BoardState) -> Option<&'s mut Card> {
        state.card_mut(&self.board_id, &self.list_id, &self.card_id)
    }
}

pub struct ToggleCardLabel {
    pub card: CardLocation,
    pub label_id: String,
}

impl Command for ToggleCardLabel {
    fn execute(&self, context: &mut CommandContext) -> CommandOutcome {
        let now = context.clock.now();
        let Some(card) = self.card.card_mut(context.state) else {
            return CommandOutcome::Unchanged;
        };
        card.toggle_label(&self.label_id);
        card.touch(now);
        CommandOutcome::Applied
    }

    fn description(&self) -> String {
        format!("Toggle label {} on card {}", self.label_id, self.card.card_id)
    }
}

/// Append a comment. Blank text is ignored.
pub struct AddComment {
    pub card: CardLocation,
    pub text: String,
}

impl Command for AddComment {
    fn execute(&self, context: &mut CommandContext) -> CommandOutcome {
        let text = self.text.trim();
        if text.is_empty() {
            return CommandOutcome::Unchanged;
        }
        let now = context.clock.now();
        let Some(card) = self.card.card_mut(context.state) else {
            return CommandOutcome::Unchanged;
        };
        let id = context.ids.next_id("comment");
        card.comments.push(Comment::new(id, text.to_string(), now));
        card.touch(now);
        CommandOutcome::Applied
    }

    fn description(&self) -> String {
        format!("Comment on card {}", self.card.card_id)
    }
}

pub struct DeleteComment {
    pub card: CardLocation,
    pub comment_id: String,
}

impl Command for DeleteComment {
    fn execute(&self, context: &mut CommandContext) -> CommandOutcome {
        let now = context.clock.now();
        let Some(card) = self.card.card_mut(context.state) else {
            return CommandOutcome::Unchanged;
        };
        let before = card.comments.len();
        card.comments.retain(|c| c.id != self.comment_id);
        if card.comments.len() == before {
            return CommandOutcome::Unchanged;
        }
        card.touch(now);
        CommandOutcome::Applied
    }

    fn description(&self) -> String {
        format!(
            "Delete comment {} from card {}",
            self.comment_id, self.card.card_id
        )
    }
}

/// Attach a link or image. Blank name or url is ignored.
pub struct AddAttachment {
    pub card: CardLocation,
    pub name: String,
    pub url: String,
}

impl Command for AddAttachment {
    fn execute(&self, context: &mut CommandContext) -> CommandOutcome {
        let (name, url) = (self.name.trim(), self.url.trim());
        if name.is_empty() || url.is_empty() {
            return CommandOutcome::Unchanged;
        }
        let now = context.clock.now();
        let Some(card) = self.card.card_mut(context.state) else {
            return CommandOutcome::Unchanged;
        };
        let id = context.ids.next_id("attachment");
        card.attachments
            .push(Attachment::new(id, name.to_string(), url.to_string(), now));
        card.touch(now);
        CommandOutcome::Applied
    }

    fn description(&self) -> String {
        format!("Attach '{}' to card {}", self.name, self.card.card_id)
    }
}

pub struct DeleteAttachment {
    pub card: CardLocation,
    pub attachment_id: String,
}

impl Command for DeleteAttachment {
    fn execute(&self, context: &mut CommandContext) -> CommandOutcome {
        let now = context.clock.now();
        let Some(card) = self.card.card_mut(context.state) else {
            return CommandOutcome::Unchanged;
        };
        let before = card.attachments.len();
        card.attachments.retain(|a| a.id != self.attachment_id);
        if card.attachments.len() == before {
            return CommandOutcome::Unchanged;
        }
        card.touch(now);
        CommandOutcome::Applied
    }

    fn description(&self) -> String {
        format!(
            "Delete attachment {} from card {}",
            self.attachment_id, self.card.card_id
        )
    }
}

pub struct AddChecklist {
    pub card: CardLocation,
    pub title: String,
}

impl Command for AddChecklist {
    fn execute(&self, context: &mut CommandContext) -> CommandOutcome {
        let now = context.clock.now();
        let Some(card) = self.card.card_mut(context.state) else {
            return CommandOutcome::Unchanged;
        };
        let id = context.ids.next_id("checklist");
        card.checklists.push(Checklist::new(id, self.title.clone()));
        card.touch(now);
        CommandOutcome::Applied
    }

    fn description(&self) -> String {
        format!("Add checklist '{}' to card {}", self.title, self.card.card_id)
    }
}

pub struct AddChecklistItem {
    pub card: CardLocation,
    pub checklist_id: String,
    pub text: String,
}

impl Command for AddChecklistItem {
    fn execute(&self, context: &mut CommandContext) -> CommandOutcome {
        let now = context.clock.now();
        let Some(card) = self.card.card_mut(context.state) else {
            return CommandOutcome::Unchanged;
        };
        let Some(checklist) = card.checklist_mut(&self.checklist_id) else {
            return CommandOutcome::Unchanged;
        };
        let id = context.ids.next_id("item");
        checklist.items.push(ChecklistItem::new(id, self.text.clone()));
        card.touch(now);
        CommandOutcome::Applied
    }

    fn description(&self) -> String {
        format!("Add item to checklist {}", self.checklist_id)
    }
}

pub struct ToggleChecklistItem {
    pub card: CardLocation,
    pub checklist_id: String,
    pub item_id: String,
}

impl Command for ToggleChecklistItem {
    fn execute(&self, context: &mut CommandContext) -> CommandOutcome {
        let now = context.clock.now();
        let Some(card) = self.card.card_mut(context.state) else {
            return CommandOutcome::Unchanged;
        };
        let Some(item) = card
            .checklist_mut(&self.checklist_id)
            .and_then(|c| c.item_mut(&self.item_id))
        else {
            return CommandOutcome::Unchanged;
        };
        item.completed = !item.completed;
        card.touch(now);
        CommandOutcome::Applied
    }

    fn description(&self) -> String {
        format!(
            "Toggle item {} in checklist {}",
            self.item_id, self.checklist_id
        )
    }
}

/// Remember which card the detail view shows. Not persisted.
pub struct SelectCardForDetail {
    pub card: Option<Card>,
}

impl Command for SelectCardForDetail {
    fn execute(&self, context: &mut CommandContext) -> CommandOutcome {
        if context.state.selected_card == self.card {
            return CommandOutcome::Unchanged;
        }
        context.state.selected_card = self.card.clone();
        CommandOutcome::Applied
    }

    fn description(&self) -> String {
        match &self.card {
            Some(card) => format!("Select card {}", card.id),
            None => "Clear card selection".to_string(),
        }
    }

    fn persists(&self) -> bool {
        false
    }
}

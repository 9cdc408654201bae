use super::{Command, CommandContext, CommandOutcome};
use crate::status::CardStatus;
use crate::{Board, Card, CardUpdate};
use chrono::{DateTime, Utc};

/// Append a blank card to a list.
pub struct CreateCard {
    pub board_id: String,
    pub list_id: String,
    pub title: String,
}

impl Command for CreateCard {
    fn execute(&self, context: &mut CommandContext) -> CommandOutcome {
        let now = context.clock.now();
        let Some(list) = context
            .state
            .board_mut(&self.board_id)
            .and_then(|b| b.list_mut(&self.list_id))
        else {
            return CommandOutcome::Unchanged;
        };
        let id = context.ids.next_id("card");
        list.cards.push(Card::new(id, self.title.clone(), now));
        CommandOutcome::Applied
    }

    fn description(&self) -> String {
        format!("Create card: '{}'", self.title)
    }
}

/// Merge a partial field set into a card and refresh its `updated_at`.
pub struct UpdateCard {
    pub board_id: String,
    pub list_id: String,
    pub card_id: String,
    pub updates: CardUpdate,
}

impl Command for UpdateCard {
    fn execute(&self, context: &mut CommandContext) -> CommandOutcome {
        let now = context.clock.now();
        match context
            .state
            .card_mut(&self.board_id, &self.list_id, &self.card_id)
        {
            Some(card) => {
                card.update(self.updates.clone(), now);
                CommandOutcome::Applied
            }
            None => CommandOutcome::Unchanged,
        }
    }

    fn description(&self) -> String {
        format!("Update card {}", self.card_id)
    }
}

/// Transfer a card from one list to another at `destination_index`.
///
/// Indexes past the end append. When source and destination are the same
/// list the card is reordered; moving it onto its own position is a no-op.
pub struct MoveCard {
    pub board_id: String,
    pub source_list_id: String,
    pub destination_list_id: String,
    pub destination_index: usize,
    pub card_id: String,
}

impl Command for MoveCard {
    fn execute(&self, context: &mut CommandContext) -> CommandOutcome {
        let now = context.clock.now();
        let Some(board) = context.state.board_mut(&self.board_id) else {
            return CommandOutcome::Unchanged;
        };
        move_card(
            board,
            &self.source_list_id,
            &self.destination_list_id,
            self.destination_index,
            &self.card_id,
            now,
        )
    }

    fn description(&self) -> String {
        format!(
            "Move card {} from list {} to list {} at {}",
            self.card_id, self.source_list_id, self.destination_list_id, self.destination_index
        )
    }
}

/// Remove-then-insert, so the card is never in two lists at once.
pub(crate) fn move_card(
    board: &mut Board,
    source_list_id: &str,
    destination_list_id: &str,
    destination_index: usize,
    card_id: &str,
    now: DateTime<Utc>,
) -> CommandOutcome {
    let (Some(src), Some(dst)) = (
        board.list_index(source_list_id),
        board.list_index(destination_list_id),
    ) else {
        return CommandOutcome::Unchanged;
    };
    let Some(current) = board.lists[src].position_of(card_id) else {
        return CommandOutcome::Unchanged;
    };
    if src == dst {
        let last = board.lists[src].cards.len() - 1;
        if destination_index.min(last) == current {
            return CommandOutcome::Unchanged;
        }
    }

    let mut card = board.lists[src].cards.remove(current);
    card.touch(now);
    board.lists[dst].insert_card(destination_index, card);
    CommandOutcome::Applied
}

/// Permanently delete a card together with its checklists, comments and attachments.
pub struct DeleteCard {
    pub board_id: String,
    pub list_id: String,
    pub card_id: String,
}

impl Command for DeleteCard {
    fn execute(&self, context: &mut CommandContext) -> CommandOutcome {
        let removed = context
            .state
            .board_mut(&self.board_id)
            .and_then(|b| b.list_mut(&self.list_id))
            .and_then(|l| l.remove_card(&self.card_id));
        if removed.is_none() {
            return CommandOutcome::Unchanged;
        }
        if context
            .state
            .selected_card
            .as_ref()
            .is_some_and(|c| c.id == self.card_id)
        {
            context.state.selected_card = None;
        }
        CommandOutcome::Applied
    }

    fn description(&self) -> String {
        format!("Delete card {}", self.card_id)
    }
}

/// Set a card's status: update `completed` from the status policy, then move
/// the card to the end of the status's list when it lives elsewhere.
pub struct ChangeCardStatus {
    pub board_id: String,
    pub list_id: String,
    pub card_id: String,
    pub status: CardStatus,
}

impl Command for ChangeCardStatus {
    fn execute(&self, context: &mut CommandContext) -> CommandOutcome {
        let now = context.clock.now();
        let completed = context.status_policy.completion_for_status(self.status);
        let target_list = context.status_policy.list_for(self.status).cloned();

        let Some(card) = context
            .state
            .card_mut(&self.board_id, &self.list_id, &self.card_id)
        else {
            return CommandOutcome::Unchanged;
        };
        card.completed = completed;
        card.touch(now);

        if let Some(destination) = target_list.filter(|id| *id != self.list_id) {
            if let Some(board) = context.state.board_mut(&self.board_id) {
                if let Some(end) = board.list(&destination).map(|l| l.cards.len()) {
                    move_card(board, &self.list_id, &destination, end, &self.card_id, now);
                }
            }
        }
        CommandOutcome::Applied
    }

    fn description(&self) -> String {
        format!(
            "Set status of card {} to {}",
            self.card_id,
            self.status.as_str()
        )
    }
}

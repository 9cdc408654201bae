use super::{Command, CommandContext, CommandOutcome};
use crate::{BoardState, Card, CardPriority, Checklist, ChecklistItem};
use chrono::Duration;

/// Where and how the demonstration card is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplePolicy {
    /// Exact title of the list (in the current board) that receives the card.
    pub list_title: String,
    /// Catalog label the sample card references.
    pub label_id: String,
    pub due_in_days: i64,
}

impl SamplePolicy {
    pub fn for_list(list_title: impl Into<String>) -> Self {
        Self {
            list_title: list_title.into(),
            ..Self::default()
        }
    }
}

impl Default for SamplePolicy {
    fn default() -> Self {
        Self {
            list_title: todoboard_core::config::DEFAULT_SAMPLE_LIST_TITLE.to_string(),
            label_id: "2".to_string(),
            due_in_days: 3,
        }
    }
}

/// Throw everything away and restore the fixed initial state.
pub struct ResetState;

impl Command for ResetState {
    fn execute(&self, context: &mut CommandContext) -> CommandOutcome {
        *context.state = BoardState::initial();
        CommandOutcome::Applied
    }

    fn description(&self) -> String {
        "Reset state".to_string()
    }
}

/// Append a fully populated demonstration card to the sample list of the
/// current board. No-op when the current board has no list with that title.
pub struct SeedSampleCard;

impl Command for SeedSampleCard {
    fn execute(&self, context: &mut CommandContext) -> CommandOutcome {
        let now = context.clock.now();
        let sample = context.sample;
        let Some(board_id) = context.state.current_board.clone() else {
            return CommandOutcome::Unchanged;
        };
        let Some(list) = context
            .state
            .board_mut(&board_id)
            .and_then(|b| b.list_by_title_mut(&sample.list_title))
        else {
            tracing::debug!(
                "No list titled '{}' on board {}; skipping sample card",
                sample.list_title,
                board_id
            );
            return CommandOutcome::Unchanged;
        };

        let mut card = Card::new(
            context.ids.next_id("card"),
            "Create a sample task".to_string(),
            now,
        );
        card.description =
            "This is a sample task to help you get familiar with the board.".to_string();
        card.due_date = Some(now + Duration::days(sample.due_in_days));
        card.priority = Some(CardPriority::Medium);
        card.labels.insert(sample.label_id.clone());

        let mut checklist = Checklist::new(context.ids.next_id("checklist"), "Steps".to_string());
        checklist.items = vec![
            ChecklistItem::new(
                context.ids.next_id("item"),
                "Drag the card to the \"In Progress\" list".to_string(),
            ),
            ChecklistItem::new(
                context.ids.next_id("item"),
                "Tick off the items on this checklist".to_string(),
            ),
        ];
        card.checklists.push(checklist);

        list.cards.push(card);
        CommandOutcome::Applied
    }

    fn description(&self) -> String {
        "Add sample card".to_string()
    }
}

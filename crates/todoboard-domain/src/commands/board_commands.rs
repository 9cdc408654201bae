use super::{Command, CommandContext, CommandOutcome};
use crate::{Board, List};

/// Append a new board with the three canonical lists.
pub struct CreateBoard {
    pub title: String,
}

impl Command for CreateBoard {
    fn execute(&self, context: &mut CommandContext) -> CommandOutcome {
        let id = context.ids.next_id("board");
        context
            .state
            .boards
            .push(Board::with_canonical_lists(id, self.title.clone()));
        CommandOutcome::Applied
    }

    fn description(&self) -> String {
        format!("Create board: '{}'", self.title)
    }
}

/// Point the current-board reference at `board_id`. The id is not validated.
pub struct SelectBoard {
    pub board_id: String,
}

impl Command for SelectBoard {
    fn execute(&self, context: &mut CommandContext) -> CommandOutcome {
        context.state.current_board = Some(self.board_id.clone());
        CommandOutcome::Applied
    }

    fn description(&self) -> String {
        format!("Select board {}", self.board_id)
    }
}

/// Append an empty list to a board. No-op if the board is absent.
pub struct CreateList {
    pub board_id: String,
    pub title: String,
}

impl Command for CreateList {
    fn execute(&self, context: &mut CommandContext) -> CommandOutcome {
        let Some(board) = context.state.board_mut(&self.board_id) else {
            return CommandOutcome::Unchanged;
        };
        let id = context.ids.next_id("list");
        board.lists.push(List::new(id, self.title.clone()));
        CommandOutcome::Applied
    }

    fn description(&self) -> String {
        format!("Create list '{}' on board {}", self.title, self.board_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::Harness;

    #[test]
    fn test_create_board_has_canonical_lists() {
        let mut h = Harness::new();
        h.run(&CreateBoard {
            title: "Side project".into(),
        });

        let board = h.state.boards.last().unwrap();
        assert!(board.id.starts_with("board-"));
        assert_ne!(board.id, "board-1");
        let ids: Vec<_> = board.lists.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(board.card_count(), 0);
    }

    #[test]
    fn test_select_board_does_not_validate() {
        let mut h = Harness::new();
        let outcome = h.run(&SelectBoard {
            board_id: "board-404".into(),
        });
        assert!(outcome.is_applied());
        assert_eq!(h.state.current_board.as_deref(), Some("board-404"));
        assert!(h.state.current_board().is_none());
    }

    #[test]
    fn test_create_list() {
        let mut h = Harness::new();
        h.run(&CreateList {
            board_id: "board-1".into(),
            title: "Blocked".into(),
        });
        let board = h.state.board("board-1").unwrap();
        assert_eq!(board.lists.len(), 4);
        assert!(board.lists[3].id.starts_with("list-"));
        assert_eq!(board.lists[3].title, "Blocked");

        let outcome = h.run(&CreateList {
            board_id: "board-404".into(),
            title: "Nowhere".into(),
        });
        assert_eq!(outcome, CommandOutcome::Unchanged);
    }
}

//! The complete in-memory state of the task board.
//!
//! `BoardState` is both the working state mutated by commands and the
//! document written to the snapshot store. Missing top-level keys in a stored
//! document fall back to empty values, so older or partial snapshots still load.

use crate::board::{Board, BoardId};
use crate::card::Card;
use crate::label::{default_catalog, Label};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BOARD_ID: &str = "board-1";
pub const DEFAULT_BOARD_TITLE: &str = "My Project";

/// Unix millis of 9999-12-31T23:59:59.999Z. Larger suffixes were not issued by
/// an id generator and do not raise the floor for new ids.
const MAX_TIMESTAMP_SUFFIX: i64 = 253_402_300_799_999;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardState {
    #[serde(default)]
    pub boards: Vec<Board>,

    /// Board shown by the presentation layer. Not validated against `boards`.
    #[serde(default)]
    pub current_board: Option<BoardId>,

    /// Global label catalog. Cards reference entries by id only.
    #[serde(default)]
    pub labels: Vec<Label>,

    /// Copy of the card open in the detail view.
    #[serde(default)]
    pub selected_card: Option<Card>,
}

impl BoardState {
    /// The fixed starting state: one board with the three canonical lists,
    /// the default label catalog, and no selected card.
    pub fn initial() -> Self {
        Self {
            boards: vec![Board::with_canonical_lists(
                DEFAULT_BOARD_ID,
                DEFAULT_BOARD_TITLE,
            )],
            current_board: Some(DEFAULT_BOARD_ID.to_string()),
            labels: default_catalog(),
            selected_card: None,
        }
    }

    pub fn board(&self, board_id: &str) -> Option<&Board> {
        self.boards.iter().find(|b| b.id == board_id)
    }

    pub fn board_mut(&mut self, board_id: &str) -> Option<&mut Board> {
        self.boards.iter_mut().find(|b| b.id == board_id)
    }

    pub fn current_board(&self) -> Option<&Board> {
        self.current_board
            .as_deref()
            .and_then(|id| self.board(id))
    }

    pub fn card(&self, board_id: &str, list_id: &str, card_id: &str) -> Option<&Card> {
        self.board(board_id)?.list(list_id)?.card(card_id)
    }

    pub fn card_mut(&mut self, board_id: &str, list_id: &str, card_id: &str) -> Option<&mut Card> {
        self.board_mut(board_id)?.list_mut(list_id)?.card_mut(card_id)
    }

    pub fn label(&self, label_id: &str) -> Option<&Label> {
        self.labels.iter().find(|l| l.id == label_id)
    }

    /// Largest numeric suffix among generated ids (`card-1714000000000` → 1714000000000).
    ///
    /// Id generators start after this value so a reloaded state never sees a
    /// previously issued id again.
    pub fn max_id_suffix(&self) -> Option<i64> {
        let mut ids: Vec<&str> = Vec::new();
        for board in &self.boards {
            ids.push(&board.id);
            for list in &board.lists {
                ids.push(&list.id);
                for card in &list.cards {
                    ids.push(&card.id);
                    ids.extend(card.comments.iter().map(|c| c.id.as_str()));
                    ids.extend(card.attachments.iter().map(|a| a.id.as_str()));
                    for checklist in &card.checklists {
                        ids.push(&checklist.id);
                        ids.extend(checklist.items.iter().map(|i| i.id.as_str()));
                    }
                }
            }
        }
        ids.into_iter()
            .filter_map(|id| id.rsplit('-').next())
            .filter_map(|suffix| suffix.parse::<i64>().ok())
            .filter(|suffix| *suffix <= MAX_TIMESTAMP_SUFFIX)
            .max()
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_initial_state() {
        let state = BoardState::initial();
        assert_eq!(state.boards.len(), 1);
        assert_eq!(state.current_board.as_deref(), Some("board-1"));
        assert_eq!(state.labels.len(), 6);
        assert!(state.selected_card.is_none());

        let board = state.current_board().unwrap();
        assert_eq!(board.lists.len(), 3);
        assert!(board.lists.iter().all(|l| l.cards.is_empty()));
    }

    #[test]
    fn test_partial_document_defaults() {
        let state: BoardState = serde_json::from_str(r#"{"boards": []}"#).unwrap();
        assert!(state.boards.is_empty());
        assert!(state.current_board.is_none());
        assert!(state.labels.is_empty());
    }

    #[test]
    fn test_document_keys() {
        let value = serde_json::to_value(BoardState::initial()).unwrap();
        assert!(value.get("currentBoard").is_some());
        assert!(value.get("selectedCard").is_some());
        assert_eq!(value["boards"][0]["lists"][2]["title"], "Completed");
    }

    #[test]
    fn test_max_id_suffix() {
        let mut state = BoardState::initial();
        assert_eq!(state.max_id_suffix(), Some(3));

        let now = Utc::now();
        state.boards[0].lists[0]
            .cards
            .push(Card::new("card-1714000000000".into(), "A".into(), now));
        assert_eq!(state.max_id_suffix(), Some(1_714_000_000_000));

        state.boards[0].id = format!("board-{}", i64::MAX);
        assert_eq!(state.max_id_suffix(), Some(1_714_000_000_000));
    }

    #[test]
    fn test_current_board_may_dangle() {
        let mut state = BoardState::initial();
        state.current_board = Some("board-404".to_string());
        assert!(state.current_board().is_none());
    }
}

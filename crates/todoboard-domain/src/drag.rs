//! Drag-and-drop gesture coordination.
//!
//! A `DragCoordinator` lives for one gesture. It turns a stream of pointer
//! events into at most one `DragCommit`, which the caller hands to
//! `StateManager::finish_drag`. Nothing here mutates the board: the "over"
//! events only move a working destination around, so a drag that crosses
//! many lists still produces a single write on release.
//!
//! ```text
//! Idle --press--> Pending --pointer_moved past threshold--> Dragging
//! Idle --start-----------------------------------------> Dragging
//! Dragging --over--> Dragging (working list updated)
//! any --end / cancel--> Idle
//! ```

use crate::{Board, BoardId, Card, CardId, ListId, StatusPolicy};

/// Pointer travel (in px) before a press turns into a drag.
pub const ACTIVATION_DISTANCE_PX: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn distance_to(&self, other: &PointerPosition) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// What the pointer is over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    Card(CardId),
    /// The empty area of a list.
    List(ListId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub card_id: CardId,
    pub origin_list_id: ListId,
    /// List currently under the pointer. Feedback only.
    pub working_list_id: ListId,
    /// Copy of the card for drag previews. Never used to mutate.
    pub card: Option<Card>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Pending {
        card_id: CardId,
        list_id: ListId,
        origin: PointerPosition,
    },
    Dragging(DragSession),
}

/// The single mutation a completed drag asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragCommit {
    pub board_id: BoardId,
    pub card_id: CardId,
    pub source_list_id: ListId,
    pub destination_list_id: ListId,
    pub destination_index: usize,
    /// New `completed` value from the status policy, if the destination has a rule.
    pub completed: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct DragCoordinator {
    board_id: BoardId,
    state: DragState,
    same_list_reorder: bool,
}

impl DragCoordinator {
    pub fn new(board_id: impl Into<BoardId>) -> Self {
        Self {
            board_id: board_id.into(),
            state: DragState::Idle,
            same_list_reorder: false,
        }
    }

    /// Allow drops inside the origin list to reorder the card.
    pub fn with_same_list_reorder(mut self, enabled: bool) -> Self {
        self.same_list_reorder = enabled;
        self
    }

    pub fn board_id(&self) -> &str {
        &self.board_id
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Dragging(session) => Some(session),
            _ => None,
        }
    }

    /// The dragged card's data, for rendering a drag preview.
    pub fn active_card(&self) -> Option<&Card> {
        self.session().and_then(|s| s.card.as_ref())
    }

    pub fn working_list(&self) -> Option<&ListId> {
        self.session().map(|s| &s.working_list_id)
    }

    /// Pointer pressed on a card. Dragging starts once it moves far enough.
    pub fn press(
        &mut self,
        card_id: impl Into<CardId>,
        list_id: impl Into<ListId>,
        at: PointerPosition,
    ) {
        if matches!(self.state, DragState::Idle) {
            self.state = DragState::Pending {
                card_id: card_id.into(),
                list_id: list_id.into(),
                origin: at,
            };
        }
    }

    /// Returns `true` when this movement started the drag.
    pub fn pointer_moved(&mut self, board: &Board, at: PointerPosition) -> bool {
        let DragState::Pending {
            card_id,
            list_id,
            origin,
        } = &self.state
        else {
            return false;
        };
        if origin.distance_to(&at) <= ACTIVATION_DISTANCE_PX {
            return false;
        }
        let (card_id, list_id) = (card_id.clone(), list_id.clone());
        self.start(board, card_id, list_id)
    }

    /// Begin dragging `card_id` out of `origin_list_id`.
    ///
    /// Returns `false` (and stays put) while another drag is active.
    pub fn start(
        &mut self,
        board: &Board,
        card_id: impl Into<CardId>,
        origin_list_id: impl Into<ListId>,
    ) -> bool {
        if self.is_dragging() {
            return false;
        }
        let card_id = card_id.into();
        let origin_list_id = origin_list_id.into();
        let card = board
            .list(&origin_list_id)
            .and_then(|l| l.card(&card_id))
            .cloned();
        tracing::debug!("Drag start: card {} from list {}", card_id, origin_list_id);
        self.state = DragState::Dragging(DragSession {
            card_id,
            working_list_id: origin_list_id.clone(),
            origin_list_id,
            card,
        });
        true
    }

    /// Pointer is over `target`. Only the working list changes.
    ///
    /// Returns `true` when the working list changed.
    pub fn over(&mut self, board: &Board, target: &DropTarget) -> bool {
        let DragState::Dragging(session) = &mut self.state else {
            return false;
        };
        if matches!(target, DropTarget::Card(id) if *id == session.card_id) {
            return false;
        }
        let Some(hovered_list) = containing_list(board, target) else {
            return false;
        };
        if *hovered_list == session.working_list_id {
            return false;
        }
        session.working_list_id = hovered_list.clone();
        true
    }

    /// Pointer released over `target` (or over nothing).
    ///
    /// Always returns the coordinator to `Idle`. Yields a commit only when the
    /// drop lands on a different list (or, with same-list reordering enabled,
    /// a different slot in the same list).
    pub fn end(
        &mut self,
        board: &Board,
        target: Option<&DropTarget>,
        policy: &StatusPolicy,
    ) -> Option<DragCommit> {
        let DragState::Dragging(session) = std::mem::take(&mut self.state) else {
            return None;
        };
        let Some(target) = target else {
            tracing::debug!("Drag of card {} aborted: no drop target", session.card_id);
            return None;
        };
        let (destination_list_id, destination_index) = resolve_drop(board, target)?;

        let origin = board.list(&session.origin_list_id)?;
        let current_index = origin.position_of(&session.card_id)?;

        if destination_list_id == session.origin_list_id {
            let reorder = self.same_list_reorder
                && matches!(target, DropTarget::Card(_))
                && destination_index != current_index;
            if !reorder {
                return None;
            }
            return Some(DragCommit {
                board_id: self.board_id.clone(),
                card_id: session.card_id,
                source_list_id: session.origin_list_id,
                destination_list_id,
                destination_index,
                completed: None,
            });
        }

        let completed = policy.completion_for(&destination_list_id);
        Some(DragCommit {
            board_id: self.board_id.clone(),
            card_id: session.card_id,
            source_list_id: session.origin_list_id,
            destination_list_id,
            destination_index,
            completed,
        })
    }

    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }
}

fn containing_list<'b>(board: &'b Board, target: &DropTarget) -> Option<&'b ListId> {
    match target {
        DropTarget::Card(card_id) => board.locate_card(card_id).map(|(list_id, _)| list_id),
        DropTarget::List(list_id) => board.list(list_id).map(|l| &l.id),
    }
}

/// Dropping on a card takes that card's slot; dropping on a list appends.
fn resolve_drop(board: &Board, target: &DropTarget) -> Option<(ListId, usize)> {
    match target {
        DropTarget::Card(card_id) => board
            .locate_card(card_id)
            .map(|(list_id, index)| (list_id.clone(), index)),
        DropTarget::List(list_id) => board
            .list(list_id)
            .map(|l| (l.id.clone(), l.cards.len())),
    }
}

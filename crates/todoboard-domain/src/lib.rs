pub mod attachment;
pub mod board;
pub mod card;
pub mod card_update;
pub mod checklist;
pub mod commands;
pub mod comment;
pub mod drag;
pub mod field_update;
pub mod label;
pub mod list;
pub mod state;
pub mod state_manager;
pub mod status;
pub mod view;

pub use attachment::{Attachment, AttachmentId, AttachmentKind};
pub use board::{Board, BoardId};
pub use card::{Card, CardId, CardPriority};
pub use card_update::CardUpdate;
pub use checklist::{Checklist, ChecklistId, ChecklistItem, ChecklistItemId};
pub use comment::{Comment, CommentId};
pub use drag::{DragCommit, DragCoordinator, DragState, DropTarget, PointerPosition};
pub use field_update::FieldUpdate;
pub use label::{default_catalog, Label, LabelId};
pub use list::{List, ListId};
pub use state::BoardState;
pub use state_manager::StateManager;
pub use status::{CardStatus, StatusPolicy, StatusRule};

pub mod board;
pub mod card;
pub mod drag;
pub mod list;
pub mod state;

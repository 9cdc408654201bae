//! The mutation engine.
//!
//! Every state transition is a `Command`. Commands locate their targets by id
//! and are no-ops when any referenced board, list or card is absent: they
//! report `CommandOutcome::Unchanged` instead of failing. The caller decides
//! what to do with the outcome (the `StateManager` only persists applied,
//! persistent commands).

use crate::status::StatusPolicy;
use crate::BoardState;
use todoboard_core::{Clock, IdGenerator};

pub mod board_commands;
pub mod card_commands;
pub mod detail_commands;
pub mod state_commands;

pub use board_commands::*;
pub use card_commands::*;
pub use detail_commands::*;
pub use state_commands::*;

/// Result of running a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// State changed.
    Applied,
    /// A referenced entity was absent, or the command had nothing to do.
    Unchanged,
}

impl CommandOutcome {
    pub fn is_applied(self) -> bool {
        matches!(self, CommandOutcome::Applied)
    }

    /// `Applied` if either side applied.
    pub fn or(self, other: CommandOutcome) -> CommandOutcome {
        if self.is_applied() || other.is_applied() {
            CommandOutcome::Applied
        } else {
            CommandOutcome::Unchanged
        }
    }
}

/// Trait for domain commands that mutate state
pub trait Command: Send + Sync {
    /// Execute this command against the working state.
    fn execute(&self, context: &mut CommandContext) -> CommandOutcome;

    /// Human-readable description of what this command does
    fn description(&self) -> String;

    /// Whether an applied run should be written to the snapshot store.
    fn persists(&self) -> bool {
        true
    }
}

/// Everything a command may read or mutate.
pub struct CommandContext<'a> {
    pub state: &'a mut BoardState,
    pub clock: &'a dyn Clock,
    pub ids: &'a mut dyn IdGenerator,
    pub status_policy: &'a StatusPolicy,
    pub sample: &'a SamplePolicy,
}

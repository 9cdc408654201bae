use crate::commands::{Command, CommandContext, CommandOutcome, MoveCard, SamplePolicy, UpdateCard};
use crate::drag::DragCommit;
use crate::status::StatusPolicy;
use crate::{Board, BoardState, Card, CardUpdate, ListId};
use todoboard_core::{
    BoardResult, Clock, IdGenerator, StateStore, SystemClock, TimestampIdGenerator,
};

/// Owns the board state and mirrors it to a store after each applied mutation.
///
/// # Save Behavior
///
/// - One save per applied command, and one per batch.
/// - Commands that report `Unchanged`, or that do not persist, never write.
/// - A failed save is logged and counted. The in-memory state stays
///   authoritative and is never rolled back.
pub struct StateManager<S> {
    state: BoardState,
    store: S,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdGenerator>,
    status_policy: StatusPolicy,
    sample: SamplePolicy,
    save_failures: usize,
}

impl<S: StateStore<BoardState>> StateManager<S> {
    /// Load the stored snapshot, or start from the default state when there is
    /// none or it cannot be read.
    pub fn open(store: S) -> Self {
        let state = match store.load() {
            Ok(Some(state)) => {
                tracing::debug!("Loaded {} board(s) from store", state.boards.len());
                state
            }
            Ok(None) => {
                tracing::debug!("No stored state, starting from defaults");
                BoardState::initial()
            }
            Err(e) => {
                tracing::warn!("Failed to load stored state, starting from defaults: {}", e);
                BoardState::initial()
            }
        };
        let ids = TimestampIdGenerator::starting_after(state.max_id_suffix().unwrap_or(0));

        Self {
            state,
            store,
            clock: Box::new(SystemClock),
            ids: Box::new(ids),
            status_policy: StatusPolicy::canonical(),
            sample: SamplePolicy::default(),
            save_failures: 0,
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_status_policy(mut self, policy: StatusPolicy) -> Self {
        self.status_policy = policy;
        self
    }

    pub fn with_sample_policy(mut self, sample: SamplePolicy) -> Self {
        self.sample = sample;
        self
    }

    fn run(&mut self, command: &dyn Command) -> CommandOutcome {
        tracing::debug!("Executing: {}", command.description());
        let mut context = CommandContext {
            state: &mut self.state,
            clock: self.clock.as_ref(),
            ids: self.ids.as_mut(),
            status_policy: &self.status_policy,
            sample: &self.sample,
        };
        let outcome = command.execute(&mut context);
        if !outcome.is_applied() {
            tracing::debug!("No change: {}", command.description());
        }
        outcome
    }

    /// Run one command, then save if it changed persistent state.
    pub fn execute(&mut self, command: Box<dyn Command>) -> CommandOutcome {
        let outcome = self.run(command.as_ref());
        if outcome.is_applied() && command.persists() {
            self.save_soft();
        }
        outcome
    }

    /// Run commands in order with a single save at the end.
    pub fn execute_batch(&mut self, commands: Vec<Box<dyn Command>>) -> CommandOutcome {
        let mut outcome = CommandOutcome::Unchanged;
        let mut needs_save = false;
        for command in commands {
            let result = self.run(command.as_ref());
            needs_save |= result.is_applied() && command.persists();
            outcome = outcome.or(result);
        }
        if needs_save {
            self.save_soft();
        }
        outcome
    }

    /// Apply a completed drop: the status update for the destination list,
    /// then the move.
    pub fn finish_drag(&mut self, commit: DragCommit) -> CommandOutcome {
        let mut commands: Vec<Box<dyn Command>> = Vec::with_capacity(2);
        if let Some(completed) = commit.completed {
            commands.push(Box::new(UpdateCard {
                board_id: commit.board_id.clone(),
                list_id: commit.source_list_id.clone(),
                card_id: commit.card_id.clone(),
                updates: CardUpdate::completed(completed),
            }));
        }
        commands.push(Box::new(MoveCard {
            board_id: commit.board_id,
            source_list_id: commit.source_list_id,
            destination_list_id: commit.destination_list_id,
            destination_index: commit.destination_index,
            card_id: commit.card_id,
        }));
        self.execute_batch(commands)
    }

    /// Write the current state, returning the store's error.
    pub fn save(&mut self) -> BoardResult<()> {
        match self.store.save(&self.state) {
            Ok(()) => Ok(()),
            Err(e) => {
                self.save_failures += 1;
                Err(e)
            }
        }
    }

    fn save_soft(&mut self) {
        if let Err(e) = self.save() {
            tracing::error!("Failed to save state: {}", e);
        }
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn current_board(&self) -> Option<&Board> {
        self.state.current_board()
    }

    /// Find a card anywhere on a board, with the id of the list holding it.
    pub fn find_card(&self, board_id: &str, card_id: &str) -> Option<(&ListId, &Card)> {
        let board = self.state.board(board_id)?;
        let (list_id, index) = board.locate_card(card_id)?;
        let list = board.list(list_id)?;
        Some((&list.id, &list.cards[index]))
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn status_policy(&self) -> &StatusPolicy {
        &self.status_policy
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Number of saves that failed since the manager was opened.
    pub fn save_failures(&self) -> usize {
        self.save_failures
    }
}

use anyhow::{anyhow, bail};
use serde::Serialize;
use std::path::Path;
use todoboard_core::{AppConfig, Clock};
use todoboard_domain::commands::{CardLocation, Command, CommandOutcome, SamplePolicy};
use todoboard_domain::view::{CardSummary, ViewSettings};
use todoboard_domain::{Board, Card, CardStatus, ListId, StateManager};
use todoboard_persistence::JsonFileStore;

/// A list as shown by `board show`.
#[derive(Debug, Serialize)]
pub struct ListView {
    pub id: ListId,
    pub title: String,
    pub status: Option<CardStatus>,
    pub cards: Vec<CardSummary>,
}

#[derive(Debug, Serialize)]
pub struct BoardView {
    pub id: String,
    pub title: String,
    pub current: bool,
    pub lists: Vec<ListView>,
}

#[derive(Debug, Serialize)]
pub struct CardView<'a> {
    pub board_id: &'a str,
    pub list_id: &'a str,
    pub status: CardStatus,
    pub card: &'a Card,
    pub summary: CardSummary,
}

pub struct CliContext {
    manager: StateManager<JsonFileStore>,
    view: ViewSettings,
}

impl CliContext {
    pub fn open(dir: &Path, config: &AppConfig) -> Self {
        tracing::debug!("Opening board snapshot in {}", dir.display());
        let manager = StateManager::open(JsonFileStore::new(dir))
            .with_sample_policy(SamplePolicy::for_list(config.effective_sample_list_title()));
        let view = ViewSettings::new(
            config.effective_due_soon_days(),
            config.effective_preview_chars(),
        );
        Self { manager, view }
    }

    pub fn manager(&self) -> &StateManager<JsonFileStore> {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut StateManager<JsonFileStore> {
        &mut self.manager
    }

    /// Run a command, failing when its snapshot could not be written.
    ///
    /// The process exits right after, so an unsaved mutation would be lost.
    pub fn execute(&mut self, command: Box<dyn Command>) -> anyhow::Result<CommandOutcome> {
        let failures = self.manager.save_failures();
        let outcome = self.manager.execute(command);
        self.check_saved(failures)?;
        Ok(outcome)
    }

    pub fn check_saved(&self, failures_before: usize) -> anyhow::Result<()> {
        if self.manager.save_failures() > failures_before {
            bail!(
                "Failed to save board state to {}",
                self.manager.store().path().display()
            );
        }
        Ok(())
    }

    /// `explicit`, or the current board. Fails if the board does not exist.
    pub fn board_id(&self, explicit: Option<String>) -> anyhow::Result<String> {
        let id = match explicit {
            Some(id) => id,
            None => self
                .manager
                .state()
                .current_board
                .clone()
                .ok_or_else(|| anyhow!("No current board; pass --board"))?,
        };
        if self.manager.state().board(&id).is_none() {
            bail!("Board not found: {}", id);
        }
        Ok(id)
    }

    pub fn board(&self, board_id: &str) -> anyhow::Result<&Board> {
        self.manager
            .state()
            .board(board_id)
            .ok_or_else(|| anyhow!("Board not found: {}", board_id))
    }

    pub fn require_list(&self, board_id: &str, list_id: &str) -> anyhow::Result<()> {
        match self.board(board_id)?.list(list_id) {
            Some(_) => Ok(()),
            None => bail!("List not found: {}", list_id),
        }
    }

    /// Where a card currently lives.
    pub fn locate(&self, board: Option<String>, card_id: &str) -> anyhow::Result<CardLocation> {
        let board_id = self.board_id(board)?;
        let (list_id, _) = self
            .manager
            .find_card(&board_id, card_id)
            .ok_or_else(|| anyhow!("Card not found: {}", card_id))?;
        let list_id = list_id.clone();
        Ok(CardLocation::new(board_id, list_id, card_id))
    }

    pub fn summarize(&self, card: &Card) -> CardSummary {
        CardSummary::build(
            card,
            &self.manager.state().labels,
            self.manager.clock().now(),
            &self.view,
        )
    }

    /// The card at its current position, with derived fields.
    pub fn card_view(&self, board: Option<String>, card_id: &str) -> anyhow::Result<CardView<'_>> {
        let location = self.locate(board, card_id)?;
        let board = self.board(&location.board_id)?;
        let (list_id, card) = self
            .manager
            .find_card(&board.id, card_id)
            .ok_or_else(|| anyhow!("Card not found: {}", card_id))?;
        Ok(CardView {
            board_id: &board.id,
            list_id,
            status: self.manager.status_policy().status_of(card, list_id),
            card,
            summary: self.summarize(card),
        })
    }

    pub fn board_view(&self, board_id: &str) -> anyhow::Result<BoardView> {
        let board = self.board(board_id)?;
        let policy = self.manager.status_policy();
        let lists = board
            .lists
            .iter()
            .map(|list| ListView {
                id: list.id.clone(),
                title: list.title.clone(),
                status: policy.rule_for_list(&list.id).map(|r| r.status),
                cards: list.cards.iter().map(|c| self.summarize(c)).collect(),
            })
            .collect();
        Ok(BoardView {
            id: board.id.clone(),
            title: board.title.clone(),
            current: self.manager.state().current_board.as_deref() == Some(board.id.as_str()),
            lists,
        })
    }
}

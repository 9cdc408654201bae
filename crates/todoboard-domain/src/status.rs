//! Which lists imply which card status.
//!
//! A board's list order carries status meaning only through a `StatusPolicy`.
//! Lists without a rule have no effect on a card's `completed` flag.

use serde::{Deserialize, Serialize};

use crate::{Card, ListId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardStatus {
    Todo,
    InProgress,
    Completed,
}

impl CardStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }
}

impl std::str::FromStr for CardStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "todo" | "to-do" => Ok(Self::Todo),
            "in-progress" | "inprogress" => Ok(Self::InProgress),
            "completed" | "done" => Ok(Self::Completed),
            other => Err(format!("unknown status '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRule {
    pub list_id: ListId,
    pub status: CardStatus,
    /// Value written to `Card::completed` when a card enters this list.
    pub completed: bool,
}

impl StatusRule {
    pub fn new(list_id: impl Into<ListId>, status: CardStatus, completed: bool) -> Self {
        Self {
            list_id: list_id.into(),
            status,
            completed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusPolicy {
    rules: Vec<StatusRule>,
}

impl StatusPolicy {
    pub fn new(rules: Vec<StatusRule>) -> Self {
        Self { rules }
    }

    /// Lists `1`, `2`, `3` are todo, in-progress and completed.
    pub fn canonical() -> Self {
        Self::new(vec![
            StatusRule::new("1", CardStatus::Todo, false),
            StatusRule::new("2", CardStatus::InProgress, false),
            StatusRule::new("3", CardStatus::Completed, true),
        ])
    }

    pub fn rules(&self) -> &[StatusRule] {
        &self.rules
    }

    pub fn rule_for_list(&self, list_id: &str) -> Option<&StatusRule> {
        self.rules.iter().find(|r| r.list_id == list_id)
    }

    /// The `completed` value a card takes on entering `list_id`, if the list has a rule.
    pub fn completion_for(&self, list_id: &str) -> Option<bool> {
        self.rule_for_list(list_id).map(|r| r.completed)
    }

    pub fn list_for(&self, status: CardStatus) -> Option<&ListId> {
        self.rules
            .iter()
            .find(|r| r.status == status)
            .map(|r| &r.list_id)
    }

    pub fn completion_for_status(&self, status: CardStatus) -> bool {
        self.rules
            .iter()
            .find(|r| r.status == status)
            .map(|r| r.completed)
            .unwrap_or(status == CardStatus::Completed)
    }

    /// Status shown for a card sitting in `list_id`.
    ///
    /// A completed card is always `Completed`; cards in lists without a rule
    /// are reported as `Completed` as well.
    pub fn status_of(&self, card: &Card, list_id: &str) -> CardStatus {
        if card.completed {
            return CardStatus::Completed;
        }
        self.rule_for_list(list_id)
            .map(|r| r.status)
            .unwrap_or(CardStatus::Completed)
    }
}

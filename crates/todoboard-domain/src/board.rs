use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::list::{List, ListId};

pub type BoardId = String;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub title: String,
    #[serde(default)]
    pub lists: Vec<List>,
}

impl Board {
    pub fn new(id: impl Into<BoardId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            lists: Vec::new(),
        }
    }

    pub fn with_canonical_lists(id: impl Into<BoardId>, title: impl Into<String>) -> Self {
        Self {
            lists: List::canonical(),
            ..Self::new(id, title)
        }
    }

    pub fn list(&self, list_id: &str) -> Option<&List> {
        self.lists.iter().find(|l| l.id == list_id)
    }

    pub fn list_mut(&mut self, list_id: &str) -> Option<&mut List> {
        self.lists.iter_mut().find(|l| l.id == list_id)
    }

    pub fn list_index(&self, list_id: &str) -> Option<usize> {
        self.lists.iter().position(|l| l.id == list_id)
    }

    /// First list whose title matches exactly.
    pub fn list_by_title_mut(&mut self, title: &str) -> Option<&mut List> {
        self.lists.iter_mut().find(|l| l.title == title)
    }

    /// Find which list holds a card and where.
    pub fn locate_card(&self, card_id: &str) -> Option<(&ListId, usize)> {
        self.lists
            .iter()
            .find_map(|list| list.position_of(card_id).map(|index| (&list.id, index)))
    }

    pub fn card(&self, card_id: &str) -> Option<&Card> {
        self.lists.iter().find_map(|l| l.card(card_id))
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.lists.iter().flat_map(|l| l.cards.iter())
    }

    pub fn card_count(&self) -> usize {
        self.lists.iter().map(|l| l.cards.len()).sum()
    }
}

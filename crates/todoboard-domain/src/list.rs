use serde::{Deserialize, Serialize};

use crate::card::{Card, CardId};

pub type ListId = String;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    pub id: ListId,
    pub title: String,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl List {
    pub fn new(id: impl Into<ListId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            cards: Vec::new(),
        }
    }

    /// The three status columns every new board starts with.
    pub fn canonical() -> Vec<List> {
        vec![
            List::new("1", "To Do"),
            List::new("2", "In Progress"),
            List::new("3", "Completed"),
        ]
    }

    pub fn card(&self, card_id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == card_id)
    }

    pub fn card_mut(&mut self, card_id: &str) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.id == card_id)
    }

    pub fn position_of(&self, card_id: &str) -> Option<usize> {
        self.cards.iter().position(|c| c.id == card_id)
    }

    pub fn remove_card(&mut self, card_id: &str) -> Option<Card> {
        let index = self.position_of(card_id)?;
        Some(self.cards.remove(index))
    }

    /// Insert at `index`, appending when it is past the end. Returns the actual index.
    pub fn insert_card(&mut self, index: usize, card: Card) -> usize {
        let index = index.min(self.cards.len());
        self.cards.insert(index, card);
        index
    }

    pub fn card_ids(&self) -> impl Iterator<Item = &CardId> {
        self.cards.iter().map(|c| &c.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn card(id: &str) -> Card {
        Card::new(id.to_string(), id.to_uppercase(), Utc::now())
    }

    #[test]
    fn test_insert_past_end_appends() {
        let mut list = List::new("1", "To Do");
        list.insert_card(0, card("a"));
        assert_eq!(list.insert_card(42, card("b")), 1);
        assert_eq!(list.card_ids().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_remove_card() {
        let mut list = List::new("1", "To Do");
        list.cards = vec![card("a"), card("b"), card("c")];

        let removed = list.remove_card("b").unwrap();
        assert_eq!(removed.id, "b");
        assert_eq!(list.position_of("c"), Some(1));
        assert!(list.remove_card("b").is_none());
    }
}

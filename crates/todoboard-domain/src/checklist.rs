use serde::{Deserialize, Serialize};

pub type ChecklistId = String;
pub type ChecklistItemId = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: ChecklistItemId,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl ChecklistItem {
    pub fn new(id: ChecklistItemId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checklist {
    pub id: ChecklistId,
    pub title: String,
    #[serde(default)]
    pub items: Vec<ChecklistItem>,
}

impl Checklist {
    pub fn new(id: ChecklistId, title: String) -> Self {
        Self {
            id,
            title,
            items: Vec::new(),
        }
    }

    pub fn item_mut(&mut self, item_id: &str) -> Option<&mut ChecklistItem> {
        self.items.iter_mut().find(|i| i.id == item_id)
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|i| i.completed).count()
    }
}

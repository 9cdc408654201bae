use serde::{Deserialize, Serialize};

pub type LabelId = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub id: LabelId,
    pub name: String,
    pub color: String,
}

impl Label {
    pub fn new(id: impl Into<LabelId>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
        }
    }
}

/// The six-entry catalog every fresh state starts with.
pub fn default_catalog() -> Vec<Label> {
    vec![
        Label::new("1", "Research", "#61bd4f"),
        Label::new("2", "Design", "#f2d600"),
        Label::new("3", "Development", "#ff9f1a"),
        Label::new("4", "Bug", "#eb5a46"),
        Label::new("5", "Feature", "#c377e0"),
        Label::new("6", "Other", "#c327e0"),
    ]
}

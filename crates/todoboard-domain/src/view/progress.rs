use serde::Serialize;

use crate::Card;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChecklistProgress {
    pub completed: usize,
    pub total: usize,
    /// `round(100 * completed / total)`.
    pub percentage: u8,
}

/// Completion over every item of every checklist on the card.
///
/// `None` when the card has no checklist items at all, which is different
/// from 0%: there is nothing to report progress on.
pub fn checklist_progress(card: &Card) -> Option<ChecklistProgress> {
    let total: usize = card.checklists.iter().map(|c| c.items.len()).sum();
    if total == 0 {
        return None;
    }
    let completed: usize = card.checklists.iter().map(|c| c.completed_count()).sum();
    let percentage = (100.0 * completed as f64 / total as f64).round() as u8;
    Some(ChecklistProgress {
        completed,
        total,
        percentage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Checklist, ChecklistItem};
    use chrono::Utc;

    fn checklist(id: &str, done: &[bool]) -> Checklist {
        let mut checklist = Checklist::new(id.to_string(), id.to_string());
        checklist.items = done
            .iter()
            .enumerate()
            .map(|(i, completed)| ChecklistItem {
                id: format!("{}-item-{}", id, i),
                text: format!("step {}", i),
                completed: *completed,
            })
            .collect();
        checklist
    }

    fn card_with(checklists: Vec<Checklist>) -> Card {
        let mut card = Card::new("card-1".into(), "A".into(), Utc::now());
        card.checklists = checklists;
        card
    }

    #[test]
    fn test_no_checklists_is_undefined() {
        assert_eq!(checklist_progress(&card_with(vec![])), None);
    }

    #[test]
    fn test_empty_checklists_are_undefined() {
        let card = card_with(vec![checklist("a", &[]), checklist("b", &[])]);
        assert_eq!(checklist_progress(&card), None);
    }

    #[test]
    fn test_two_of_three_rounds_to_67() {
        let card = card_with(vec![
            checklist("empty", &[]),
            checklist("steps", &[true, true, false]),
        ]);
        let progress = checklist_progress(&card).unwrap();
        assert_eq!(progress.completed, 2);
        assert_eq!(progress.total, 3);
        assert_eq!(progress.percentage, 67);
    }

    #[test]
    fn test_all_done_is_100() {
        let card = card_with(vec![checklist("a", &[true]), checklist("b", &[true, true])]);
        assert_eq!(checklist_progress(&card).unwrap().percentage, 100);
    }

    #[test]
    fn test_none_done_is_zero() {
        let card = card_with(vec![checklist("a", &[false, false])]);
        assert_eq!(checklist_progress(&card).unwrap().percentage, 0);
    }

    #[test]
    fn test_half_rounds_up() {
        let card = card_with(vec![checklist("a", &[true, false, false, false, false, false, false, false])]);
        assert_eq!(checklist_progress(&card).unwrap().percentage, 13);
    }
}

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::Card;

pub const DEFAULT_DUE_SOON_DAYS: i64 = todoboard_core::config::DEFAULT_DUE_SOON_DAYS;

/// Deadline classification of a card relative to "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DueStatus {
    NoDueDate,
    /// Completed cards are never overdue or due soon.
    Done,
    Overdue,
    DueSoon,
    OnTrack,
}

pub fn due_status(card: &Card, now: DateTime<Utc>, soon_window: Duration) -> DueStatus {
    let Some(due) = card.due_date else {
        return DueStatus::NoDueDate;
    };
    if card.completed {
        DueStatus::Done
    } else if due < now {
        DueStatus::Overdue
    } else if due < now + soon_window {
        DueStatus::DueSoon
    } else {
        DueStatus::OnTrack
    }
}

pub fn is_overdue(card: &Card, now: DateTime<Utc>) -> bool {
    due_status(card, now, Duration::zero()) == DueStatus::Overdue
}

pub fn is_due_soon(card: &Card, now: DateTime<Utc>, soon_window: Duration) -> bool {
    due_status(card, now, soon_window) == DueStatus::DueSoon
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn due_in(offset: Duration, completed: bool) -> Card {
        let mut card = Card::new("card-1".into(), "A".into(), now() - Duration::days(10));
        card.due_date = Some(now() + offset);
        card.completed = completed;
        card
    }

    #[test]
    fn test_classification() {
        let window = Duration::days(DEFAULT_DUE_SOON_DAYS);
        assert_eq!(
            due_status(&due_in(-Duration::minutes(1), false), now(), window),
            DueStatus::Overdue
        );
        assert_eq!(
            due_status(&due_in(Duration::hours(47), false), now(), window),
            DueStatus::DueSoon
        );
        assert_eq!(
            due_status(&due_in(Duration::days(2), false), now(), window),
            DueStatus::OnTrack
        );
        assert_eq!(
            due_status(&due_in(Duration::zero(), false), now(), window),
            DueStatus::DueSoon
        );
    }

    #[test]
    fn test_completed_is_never_flagged() {
        let window = Duration::days(2);
        for offset in [-Duration::days(3), Duration::hours(1), Duration::days(9)] {
            let card = due_in(offset, true);
            assert!(!is_overdue(&card, now()));
            assert!(!is_due_soon(&card, now(), window));
        }
    }

    #[test]
    fn test_flags_are_exclusive() {
        let window = Duration::days(2);
        for hours in [-30, -1, 0, 1, 30, 47, 48, 100] {
            let card = due_in(Duration::hours(hours), false);
            assert!(!(is_overdue(&card, now()) && is_due_soon(&card, now(), window)));
        }
    }

    #[test]
    fn test_no_due_date() {
        let mut card = due_in(Duration::zero(), false);
        card.due_date = None;
        assert_eq!(due_status(&card, now(), Duration::days(2)), DueStatus::NoDueDate);
        assert!(!is_overdue(&card, now()));
    }
}

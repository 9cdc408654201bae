use chrono::{DateTime, NaiveDate};

use crate::Card;

pub const DEFAULT_PREVIEW_CHARS: usize = todoboard_core::config::DEFAULT_PREVIEW_CHARS;
const ELLIPSIS: &str = "...";

/// The first `max_chars` characters of the description, with `...` when cut.
///
/// `None` for an empty description.
pub fn description_preview(card: &Card, max_chars: usize) -> Option<String> {
    if card.description.is_empty() {
        return None;
    }
    let mut chars = card.description.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        Some(format!("{}{}", head, ELLIPSIS))
    } else {
        Some(head)
    }
}

/// Render a stored timestamp as `15 Oct`. `None` if it cannot be parsed.
pub fn format_day_month(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let date = match DateTime::parse_from_rfc3339(trimmed) {
        Ok(dt) => dt.date_naive(),
        Err(_) => match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            Ok(date) => date,
            Err(e) => {
                tracing::debug!("Cannot format date '{}': {}", raw, e);
                return None;
            }
        },
    };
    Some(date.format("%d %b").to_string())
}

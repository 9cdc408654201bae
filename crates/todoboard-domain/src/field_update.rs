/// A patch to one of a card's optional fields (due date, start date, priority).
///
/// Leaving a due date alone and removing it are different edits, so a plain
/// `Option` is not enough. `card update --clear-due-date` becomes `Clear`.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use todoboard_domain::FieldUpdate;
///
/// let friday = Utc.with_ymd_and_hms(2024, 10, 18, 17, 0, 0).unwrap();
/// let mut due_date = None;
///
/// FieldUpdate::Set(friday).apply_to(&mut due_date);
/// assert_eq!(due_date, Some(friday));
///
/// FieldUpdate::NoChange.apply_to(&mut due_date);
/// assert_eq!(due_date, Some(friday));
///
/// FieldUpdate::Clear.apply_to(&mut due_date);
/// assert_eq!(due_date, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    NoChange,
    Set(T),
    Clear,
}

impl<T> Default for FieldUpdate<T> {
    fn default() -> Self {
        FieldUpdate::NoChange
    }
}

impl<T> FieldUpdate<T> {
    pub fn apply_to(self, field: &mut Option<T>) {
        match self {
            FieldUpdate::NoChange => {}
            FieldUpdate::Set(value) => *field = Some(value),
            FieldUpdate::Clear => *field = None,
        }
    }

    pub fn is_change(&self) -> bool {
        !matches!(self, FieldUpdate::NoChange)
    }
}

impl<T> From<Option<T>> for FieldUpdate<T> {
    /// `Some(value)` sets, `None` clears.
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(value) => FieldUpdate::Set(value),
            None => FieldUpdate::Clear,
        }
    }
}

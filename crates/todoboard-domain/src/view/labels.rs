use crate::{Card, Label};

/// The card's labels as catalog entries, in catalog order.
///
/// References to ids missing from the catalog are skipped.
pub fn resolve_labels<'a>(card: &Card, catalog: &'a [Label]) -> Vec<&'a Label> {
    catalog
        .iter()
        .filter(|label| card.has_label(&label.id))
        .collect()
}

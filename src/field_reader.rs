use crate::pdf_utils::{self, AnnotSlot};
use crate::widget::WidgetAnnotation;
use crate::FieldMap;
use lopdf::Document;
use std::collections::HashMap;

/// Every named widget of `document` in page order, with where it is stored.
pub(crate) fn widgets(document: &Document) -> Vec<(AnnotSlot, WidgetAnnotation<'_>)> {
    pdf_utils::annotation_slots(document)
        .into_iter()
        .filter_map(|slot| {
            let dict = match pdf_utils::annotation_dict(document, slot) {
                Ok(dict) => dict,
                Err(e) => {
                    log::warn!("annotation {slot:?}: {e}, skipping");
                    return None;
                }
            };
            WidgetAnnotation::new(document, dict).map(|widget| (slot, widget))
        })
        .collect()
}

/// Build the field map of `document`.
///
/// Pages are visited in page order; a name seen twice keeps the value of the
/// last widget carrying it.
pub(crate) fn read_fields(document: &Document) -> FieldMap {
    let mut fields = FieldMap::new();

    for (_, widget) in widgets(document) {
        fields.insert(widget.name().to_owned(), widget.value());
    }

    log::debug!("read {} form field(s)", fields.len());
    fields
}

/// Appearance state (`/AS`) per field name, for widgets that have one.
///
/// Checkbox fills only touch `/AS`, so this is where they become visible.
pub(crate) fn read_appearance_states(document: &Document) -> HashMap<String, String> {
    widgets(document)
        .into_iter()
        .filter_map(|(_, widget)| {
            let state = widget.appearance_state()?;
            Some((widget.name().to_owned(), state))
        })
        .collect()
}

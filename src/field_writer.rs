use crate::field_reader;
use crate::pdf_utils::{self, AnnotSlot};
use crate::widget::{AcroForm, WidgetAnnotationMut};
use crate::{FieldValue, FillReport, FormConfig, Result};
use lopdf::Document;
use std::collections::{BTreeSet, HashMap};
use std::io::Write;

/// Applies field values to a loaded document and serializes the result.
pub(crate) struct FieldWriter<'a> {
    document: &'a mut Document,
    config: &'a FormConfig,
}

impl<'a> FieldWriter<'a> {
    pub(crate) fn new(document: &'a mut Document, config: &'a FormConfig) -> Self {
        Self { document, config }
    }

    /// Apply `values` to every matching widget, then flag the form with
    /// `/NeedAppearances` if configured.
    ///
    /// All changes happen in memory; nothing is written until
    /// [`write_to`](Self::write_to).
    pub(crate) fn apply(&mut self, values: &HashMap<String, FieldValue>) -> Result<FillReport> {
        let targets: Vec<(AnnotSlot, String)> = field_reader::widgets(self.document)
            .into_iter()
            .filter(|(_, widget)| values.contains_key(widget.name()))
            .map(|(slot, widget)| (slot, widget.name().to_owned()))
            .collect();

        let mut matched = BTreeSet::new();

        for (slot, name) in targets {
            let Some(value) = values.get(&name) else {
                continue;
            };
            let dict = pdf_utils::annotation_dict_mut(self.document, slot)?;
            Self::apply_value(&mut WidgetAnnotationMut::new(dict), value, self.config);
            matched.insert(name);
        }

        if self.config.set_need_appearances {
            AcroForm::from_document(self.document)?.set_need_appearances(true);
        }

        let unmatched: Vec<String> = values
            .keys()
            .filter(|name| !matched.contains(*name))
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        for name in &unmatched {
            log::debug!("no widget named '{name}', ignoring");
        }

        Ok(FillReport {
            matched: matched.into_iter().collect(),
            unmatched,
        })
    }

    /// Write one value into one widget.
    ///
    /// `false` leaves the widget untouched: there is no explicit "Off" write.
    fn apply_value(widget: &mut WidgetAnnotationMut<'_>, value: &FieldValue, config: &FormConfig) {
        match value {
            FieldValue::Bool(true) => widget.set_appearance_state(&config.checkbox_on_state),
            FieldValue::Bool(false) => {}
            FieldValue::Text(text) => widget.set_text(text, config.clear_appearance_streams),
        }
    }

    /// Serialize the whole document to `target`.
    pub(crate) fn write_to<W: Write>(&mut self, target: &mut W) -> Result<()> {
        self.document.save_to(target)?;
        Ok(())
    }
}

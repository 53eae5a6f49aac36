//! Typed views over annotation and AcroForm dictionaries.
//!
//! Every PDF key name the crate touches is declared here; the reader and the
//! writer go through these views instead of poking dictionaries directly.

use crate::pdf_utils::{decode_text_string, encode_text_string};
use crate::{FieldValue, FormError, Result};
use lopdf::{Dictionary, Document, Object};

pub(crate) const ANNOTS: &[u8] = b"Annots";
const SUBTYPE: &[u8] = b"Subtype";
const WIDGET: &[u8] = b"Widget";
const FIELD_NAME: &[u8] = b"T";
const FIELD_VALUE: &[u8] = b"V";
const APPEARANCE_STATE: &[u8] = b"AS";
const APPEARANCE: &[u8] = b"AP";
const ROOT: &[u8] = b"Root";
const ACRO_FORM: &[u8] = b"AcroForm";
const NEED_APPEARANCES: &[u8] = b"NeedAppearances";

/// Look up `key`, following indirect references to the stored object.
fn entry<'a>(document: &'a Document, dict: &'a Dictionary, key: &[u8]) -> Option<&'a Object> {
    let object = dict.get(key).ok()?;
    match document.dereference(object) {
        Ok((_, resolved)) => Some(resolved),
        Err(e) => {
            log::warn!("dangling /{} reference: {e}", String::from_utf8_lossy(key));
            None
        }
    }
}

fn is_widget(document: &Document, dict: &Dictionary) -> bool {
    entry(document, dict, SUBTYPE)
        .and_then(|subtype| subtype.as_name().ok())
        .map(|name| name == WIDGET)
        .unwrap_or(false)
}

fn field_name(document: &Document, dict: &Dictionary) -> Option<String> {
    let raw = entry(document, dict, FIELD_NAME)?.as_str().ok()?;
    Some(decode_text_string(raw)).filter(|name| !name.is_empty())
}

/// Convert a stored `/V` object into a [`FieldValue`]; `None` for `null`.
fn stored_value(object: &Object) -> Option<FieldValue> {
    let value = match object {
        Object::Null => return None,
        Object::Boolean(b) => FieldValue::Bool(*b),
        Object::String(bytes, _) => FieldValue::Text(decode_text_string(bytes)),
        Object::Name(name) => FieldValue::Text(String::from_utf8_lossy(name).into_owned()),
        Object::Integer(i) => FieldValue::Text(i.to_string()),
        Object::Real(r) => FieldValue::Text(r.to_string()),
        other => FieldValue::Text(format!("{other:?}")),
    };
    Some(value)
}

// ── WidgetAnnotation ─────────────────────────────────────────────────────────

/// Read-only view of a `/Widget` annotation that carries a field name.
///
/// Entries stored as indirect objects are resolved through `document`.
pub(crate) struct WidgetAnnotation<'a> {
    document: &'a Document,
    dict: &'a Dictionary,
    name: String,
}

impl<'a> WidgetAnnotation<'a> {
    /// Returns `None` unless `dict` is a widget with a non-empty `/T`.
    pub(crate) fn new(document: &'a Document, dict: &'a Dictionary) -> Option<Self> {
        if !is_widget(document, dict) {
            return None;
        }
        let name = field_name(document, dict)?;
        Some(Self {
            document,
            dict,
            name,
        })
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    /// The stored `/V`, or `None` when the field is unset.
    pub(crate) fn value(&self) -> Option<FieldValue> {
        entry(self.document, self.dict, FIELD_VALUE).and_then(stored_value)
    }

    /// The `/AS` appearance state name, if any.
    pub(crate) fn appearance_state(&self) -> Option<String> {
        entry(self.document, self.dict, APPEARANCE_STATE)
            .and_then(|state| state.as_name().ok())
            .map(|name| String::from_utf8_lossy(name).into_owned())
    }
}

// ── WidgetAnnotationMut ──────────────────────────────────────────────────────

/// Mutable view of a widget annotation already identified by
/// [`WidgetAnnotation`].
///
/// Writes always store direct values, replacing any indirect entry.
pub(crate) struct WidgetAnnotationMut<'a> {
    dict: &'a mut Dictionary,
}

impl<'a> WidgetAnnotationMut<'a> {
    pub(crate) fn new(dict: &'a mut Dictionary) -> Self {
        Self { dict }
    }

    /// Set the `/AS` appearance state (checkbox on-state).
    pub(crate) fn set_appearance_state(&mut self, state: &str) {
        self.dict
            .set(APPEARANCE_STATE, Object::Name(state.as_bytes().to_vec()));
    }

    /// Set `/V` to `text`; optionally drop the cached `/AP` stream so viewers
    /// rebuild it.
    pub(crate) fn set_text(&mut self, text: &str, clear_appearance: bool) {
        self.dict.set(FIELD_VALUE, encode_text_string(text));
        if clear_appearance {
            self.dict.remove(APPEARANCE);
        }
    }
}

// ── AcroForm ─────────────────────────────────────────────────────────────────

/// Mutable view of the catalog's `/AcroForm` dictionary.
pub(crate) struct AcroForm<'a> {
    dict: &'a mut Dictionary,
}

impl<'a> AcroForm<'a> {
    /// Locate `/Root/AcroForm`, whether it is stored inline in the catalog
    /// or as an indirect object.
    pub(crate) fn from_document(document: &'a mut Document) -> Result<Self> {
        let root_id = document.trailer.get(ROOT).and_then(Object::as_reference)?;

        let indirect = {
            let catalog = document.get_object(root_id).and_then(Object::as_dict)?;
            let acro_form = catalog.get(ACRO_FORM).map_err(|_| FormError::MissingAcroForm)?;
            match acro_form {
                Object::Reference(id) => Some(*id),
                Object::Dictionary(_) => None,
                _ => return Err(FormError::InvalidPdf("/AcroForm is not a dictionary".into())),
            }
        };

        let dict = match indirect {
            Some(id) => document.get_object_mut(id).and_then(Object::as_dict_mut)?,
            None => document
                .get_object_mut(root_id)
                .and_then(Object::as_dict_mut)?
                .get_mut(ACRO_FORM)
                .and_then(Object::as_dict_mut)?,
        };

        Ok(Self { dict })
    }

    pub(crate) fn set_need_appearances(&mut self, value: bool) {
        self.dict.set(NEED_APPEARANCES, Object::Boolean(value));
    }

    #[cfg(test)]
    pub(crate) fn need_appearances(&self) -> Option<bool> {
        self.dict.get(NEED_APPEARANCES).and_then(Object::as_bool).ok()
    }
}

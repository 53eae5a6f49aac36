//! Shared lopdf helpers used by the reader, the writer and the widget layer.

use crate::widget::ANNOTS;
use crate::{FormError, Result};
use lopdf::{Dictionary, Document, Object, ObjectId, StringFormat};

const UTF16BE_BOM: [u8; 2] = [0xFE, 0xFF];

/// Decode a PDF text string.
///
/// UTF-16BE when the string starts with the `FE FF` byte-order mark,
/// otherwise the bytes are read as (lossy) UTF-8.
pub fn decode_text_string(bytes: &[u8]) -> String {
    match bytes.strip_prefix(&UTF16BE_BOM) {
        Some(rest) => {
            let units: Vec<u16> = rest
                .chunks_exact(2)
                .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
                .collect();
            String::from_utf16_lossy(&units)
        }
        None => String::from_utf8_lossy(bytes).into_owned(),
    }
}

/// Encode `text` as a PDF text string object.
///
/// ASCII stays a literal string; anything else is written as UTF-16BE with a
/// byte-order mark, which every PDF reader understands.
pub fn encode_text_string(text: &str) -> Object {
    if text.is_ascii() {
        return Object::string_literal(text);
    }
    let mut bytes = UTF16BE_BOM.to_vec();
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Object::String(bytes, StringFormat::Hexadecimal)
}

/// Resolve a value that might be inline or a reference to an array.
pub fn resolve_array<'a>(document: &'a Document, value: &'a Object) -> Option<&'a Vec<Object>> {
    match value.as_reference() {
        Ok(id) => document.get_object(id).ok()?.as_array().ok(),
        Err(_) => value.as_array().ok(),
    }
}

/// Where an annotation dictionary is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotSlot {
    /// An indirect object referenced from `/Annots`.
    Indirect(ObjectId),
    /// Entry `index` of an `/Annots` array holding the dictionary inline.
    /// `owner` is the page when the array sits in the page dictionary, or the
    /// array object itself when `/Annots` is a reference.
    Inline {
        owner: ObjectId,
        owner_is_page: bool,
        index: usize,
    },
}

/// Locate every annotation, page by page in page order, whether it is
/// referenced or stored inline in `/Annots`.
pub fn annotation_slots(document: &Document) -> Vec<AnnotSlot> {
    let mut slots = Vec::new();

    for (page_number, page_id) in document.get_pages() {
        let page_dict = match document.get_object(page_id).and_then(Object::as_dict) {
            Ok(dict) => dict,
            Err(e) => {
                log::warn!("page {page_number}: not a dictionary ({e}), skipping");
                continue;
            }
        };

        let annots = match page_dict.get(ANNOTS) {
            Ok(value) => value,
            Err(_) => continue,
        };

        let (owner, owner_is_page) = match annots.as_reference() {
            Ok(array_id) => (array_id, false),
            Err(_) => (page_id, true),
        };

        let Some(annots) = resolve_array(document, annots) else {
            log::warn!("page {page_number}: /Annots is not an array, skipping");
            continue;
        };

        for (index, item) in annots.iter().enumerate() {
            match item {
                Object::Reference(id) => slots.push(AnnotSlot::Indirect(*id)),
                Object::Dictionary(_) => slots.push(AnnotSlot::Inline {
                    owner,
                    owner_is_page,
                    index,
                }),
                _ => log::debug!("page {page_number}: /Annots entry {index} is not an annotation"),
            }
        }
    }

    slots
}

fn missing_slot(slot: AnnotSlot) -> FormError {
    FormError::InvalidPdf(format!("annotation {slot:?} no longer exists"))
}

/// Borrow the dictionary stored at `slot`.
pub fn annotation_dict(document: &Document, slot: AnnotSlot) -> Result<&Dictionary> {
    match slot {
        AnnotSlot::Indirect(id) => Ok(document.get_object(id).and_then(Object::as_dict)?),
        AnnotSlot::Inline {
            owner,
            owner_is_page,
            index,
        } => {
            let array = if owner_is_page {
                document
                    .get_object(owner)
                    .and_then(Object::as_dict)?
                    .get(ANNOTS)
                    .and_then(Object::as_array)?
            } else {
                document.get_object(owner).and_then(Object::as_array)?
            };
            let item = array.get(index).ok_or_else(|| missing_slot(slot))?;
            Ok(item.as_dict()?)
        }
    }
}

/// Mutably borrow the dictionary stored at `slot`.
pub fn annotation_dict_mut(document: &mut Document, slot: AnnotSlot) -> Result<&mut Dictionary> {
    match slot {
        AnnotSlot::Indirect(id) => Ok(document.get_object_mut(id).and_then(Object::as_dict_mut)?),
        AnnotSlot::Inline {
            owner,
            owner_is_page,
            index,
        } => {
            let array = if owner_is_page {
                document
                    .get_object_mut(owner)
                    .and_then(Object::as_dict_mut)?
                    .get_mut(ANNOTS)
                    .and_then(Object::as_array_mut)?
            } else {
                document.get_object_mut(owner).and_then(Object::as_array_mut)?
            };
            let item = array.get_mut(index).ok_or_else(|| missing_slot(slot))?;
            Ok(item.as_dict_mut()?)
        }
    }
}

//! # pdfform
//!
//! A Rust library for reading and filling the interactive form fields
//! (AcroForm widgets) of PDF documents.
//!
//! ## What this crate does
//!
//! 1. **Open a document** — through one of two backends: [`Backend::Plumber`]
//!    (text/layout extraction, backed by `pdf-extract`) or [`Backend::Raw`]
//!    (the low-level object graph, backed by `lopdf`).
//! 2. **Extract field values** — walks every page's `/Widget` annotations and
//!    returns a `name → value` map, with `None` for fields that have no value.
//! 3. **Fill field values** — writes text values and checks checkboxes, flags
//!    the form with `/NeedAppearances` and saves the result to a new file.
//! 4. **Close** — releases the handle opened in step 1.
//!
//! ## Quick example
//!
//! ```no_run
//! use pdfform::{Backend, FieldValue, FormAccessor};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut accessor = FormAccessor::new();
//! accessor.open("template.pdf", Backend::Plumber)?;
//!
//! for (name, value) in accessor.extract_fields("template.pdf")? {
//!     println!("{name}: {value:?}");
//! }
//!
//! let report = accessor.fill(
//!     "template.pdf",
//!     "filled.pdf",
//!     [("name", FieldValue::from("Ada")), ("subscribe", FieldValue::from(true))],
//! )?;
//! println!("{} field(s) filled", report.matched.len());
//!
//! accessor.close()?;
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

mod accessor;
mod accessor_fields;
mod backend;
mod field;
mod field_reader;
mod field_writer;
mod pdf_utils;
mod widget;

pub use accessor::{AccessorState, FormAccessor};
pub use backend::{Backend, FormDocument, PlumberDocument, RawDocument};
pub use field::{FieldMap, FieldValue, FillReport};
// The widget accessor layer is intentionally *not* re-exported; PDF key names
// stay inside this crate. Callers work with FieldValue and FieldMap.

// ── Configuration ────────────────────────────────────────────────────────────

/// Runtime configuration for [`FormAccessor`].
#[derive(Debug, Clone)]
pub struct FormConfig {
    /// Appearance-state name written to `/AS` when a field is filled with
    /// `true`. Most checkbox widgets use `Yes` as their "on" state.
    pub checkbox_on_state: String,

    /// When `true`, [`FormAccessor::fill`] sets `/NeedAppearances true` on the
    /// document's `/AcroForm` dictionary so viewers regenerate field visuals.
    pub set_need_appearances: bool,

    /// When `true`, writing a text value also removes the widget's cached
    /// `/AP` appearance stream.
    pub clear_appearance_streams: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            checkbox_on_state: "Yes".into(),
            set_need_appearances: true,
            clear_appearance_streams: true,
        }
    }
}

// ── Error type ───────────────────────────────────────────────────────────────

/// Every error that this crate can produce.
#[derive(Error, Debug)]
pub enum FormError {
    /// A filesystem I/O error occurred (e.g. when loading or saving a file).
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The underlying lopdf parser returned an error.
    #[error("PDF parse error: {0}")]
    ParseError(#[from] lopdf::Error),

    /// The text-extraction backend could not open or read the document.
    #[error("Text extraction failed: {0}")]
    TextExtraction(String),

    /// The document parsed but its object graph is not shaped as expected.
    #[error("Invalid PDF: {0}")]
    InvalidPdf(String),

    /// The document catalog has no `/AcroForm` dictionary to flag.
    #[error("Document has no /AcroForm dictionary")]
    MissingAcroForm,

    /// A backend name other than `plumber` or `raw` was given.
    #[error("Unknown backend '{0}' (expected 'plumber' or 'raw')")]
    InvalidBackend(String),

    /// `close` was called while no document was open.
    #[error("No document is open")]
    NotOpen,
}

/// Convenience alias used throughout this crate.
pub type Result<T> = std::result::Result<T, FormError>;

use crate::{field_reader, FieldMap, FormError, Result};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

// ── Backend ──────────────────────────────────────────────────────────────────

/// The PDF library used to open a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// Text/layout extraction backend (`pdf-extract`).
    #[default]
    Plumber,
    /// Low-level object-graph backend (`lopdf`).
    Raw,
}

impl Backend {
    /// Open the file at `path` with this backend.
    pub fn open<P: AsRef<Path>>(self, path: P) -> Result<FormDocument> {
        let bytes = std::fs::read(path.as_ref())?;
        self.open_bytes(bytes)
    }

    /// Open an in-memory PDF with this backend.
    pub fn open_bytes(self, bytes: Vec<u8>) -> Result<FormDocument> {
        match self {
            Self::Plumber => PlumberDocument::load(bytes).map(FormDocument::Plumber),
            Self::Raw => RawDocument::load(&bytes).map(FormDocument::Raw),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plumber => "plumber",
            Self::Raw => "raw",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("plumber") {
            Ok(Self::Plumber)
        } else if s.eq_ignore_ascii_case("raw") {
            Ok(Self::Raw)
        } else {
            Err(FormError::InvalidBackend(s.to_owned()))
        }
    }
}

// ── FormDocument ─────────────────────────────────────────────────────────────

/// An open PDF handle, tagged with the backend that opened it.
pub enum FormDocument {
    Plumber(PlumberDocument),
    Raw(RawDocument),
}

impl FormDocument {
    pub fn backend(&self) -> Backend {
        match self {
            Self::Plumber(_) => Backend::Plumber,
            Self::Raw(_) => Backend::Raw,
        }
    }

    pub fn page_count(&self) -> usize {
        match self {
            Self::Plumber(doc) => doc.page_count(),
            Self::Raw(doc) => doc.page_count(),
        }
    }

    /// Release the handle with the teardown matching its backend.
    pub fn close(self) {
        match self {
            Self::Plumber(doc) => doc.close(),
            // lopdf holds no file handle; dropping is enough.
            Self::Raw(_) => {}
        }
    }
}

impl fmt::Debug for FormDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormDocument")
            .field("backend", &self.backend())
            .field("pages", &self.page_count())
            .finish()
    }
}

// ── PlumberDocument ──────────────────────────────────────────────────────────

/// A document opened through the text-extraction backend.
///
/// The bytes are validated on load and kept so page text can be extracted
/// on demand.
pub struct PlumberDocument {
    bytes: Vec<u8>,
    page_count: usize,
}

impl PlumberDocument {
    fn load(bytes: Vec<u8>) -> Result<Self> {
        let document = pdf_extract::Document::load_mem(&bytes)
            .map_err(|e| FormError::TextExtraction(e.to_string()))?;
        let page_count = document.get_pages().len();
        Ok(Self { bytes, page_count })
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Extract the plain text of every page, in page order.
    pub fn page_texts(&self) -> Result<Vec<String>> {
        pdf_extract::extract_text_from_mem_by_pages(&self.bytes)
            .map_err(|e| FormError::TextExtraction(e.to_string()))
    }

    fn close(self) {
        log::debug!(
            "closing text-extraction handle ({} bytes, {} page(s))",
            self.bytes.len(),
            self.page_count
        );
        drop(self);
    }
}

// ── RawDocument ──────────────────────────────────────────────────────────────

/// A document opened through the object-graph backend.
pub struct RawDocument {
    document: lopdf::Document,
}

impl RawDocument {
    fn load(bytes: &[u8]) -> Result<Self> {
        Ok(Self {
            document: lopdf::Document::load_mem(bytes)?,
        })
    }

    pub fn page_count(&self) -> usize {
        self.document.get_pages().len()
    }

    /// Returns a reference to the underlying [`lopdf::Document`].
    pub fn document(&self) -> &lopdf::Document {
        &self.document
    }

    /// Form field values of this handle, read the same way as
    /// [`crate::FormAccessor::extract_fields`].
    pub fn fields(&self) -> FieldMap {
        field_reader::read_fields(&self.document)
    }
}

use crate::{Backend, FormConfig, FormDocument, FormError, Result};
use std::path::Path;

// ── AccessorState ─────────────────────────────────────────────────────────────

/// Lifecycle of the document held by a [`FormAccessor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessorState {
    Unopened,
    Opened(Backend),
    Closed,
}

// ── FormAccessor ──────────────────────────────────────────────────────────────

/// Entry point for opening PDF forms and reading or filling their fields.
///
/// [`open`](Self::open) / [`close`](Self::close) manage one document handle.
/// [`extract_fields`](Self::extract_fields) and [`fill`](Self::fill) open
/// their own transient handles and work regardless of that state.
///
/// ```no_run
/// use pdfform::{Backend, FormAccessor, FormConfig};
///
/// let mut accessor = FormAccessor::new();
/// accessor.open("form.pdf", Backend::Raw).unwrap();
/// println!("{} page(s)", accessor.document().unwrap().page_count());
/// accessor.close().unwrap();
///
/// // With custom configuration
/// let cfg = FormConfig {
///     checkbox_on_state: "On".into(),
///     ..Default::default()
/// };
/// let accessor = FormAccessor::with_config(cfg);
/// ```
#[derive(Debug, Default)]
pub struct FormAccessor {
    document: Option<FormDocument>,
    closed: bool,
    config: FormConfig,
}

impl FormAccessor {
    // ── Constructors ──────────────────────────────────────────────────────────

    pub fn new() -> Self {
        Self::default()
    }

    /// Create an accessor with a custom [`FormConfig`].
    pub fn with_config(config: FormConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────────

    /// Open the PDF at `path` with `backend` and keep the handle.
    ///
    /// A document that is already open is closed first.
    pub fn open<P: AsRef<Path>>(&mut self, path: P, backend: Backend) -> Result<()> {
        let path = path.as_ref();
        let document = backend.open(path)?;
        log::debug!("opened {} with the {backend} backend", path.display());
        self.replace(document);
        Ok(())
    }

    /// Open an in-memory PDF with `backend` and keep the handle.
    pub fn open_bytes(&mut self, bytes: Vec<u8>, backend: Backend) -> Result<()> {
        let len = bytes.len();
        let document = backend.open_bytes(bytes)?;
        log::debug!("opened in-memory PDF ({len} bytes) with the {backend} backend");
        self.replace(document);
        Ok(())
    }

    /// Release the handle opened by [`open`](Self::open).
    ///
    /// Returns [`FormError::NotOpen`] when nothing is open, including a second
    /// call after a successful close.
    pub fn close(&mut self) -> Result<()> {
        let document = self.document.take().ok_or(FormError::NotOpen)?;
        document.close();
        self.closed = true;
        Ok(())
    }

    fn replace(&mut self, document: FormDocument) {
        if let Some(previous) = self.document.replace(document) {
            previous.close();
        }
        self.closed = false;
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    pub fn state(&self) -> AccessorState {
        match (&self.document, self.closed) {
            (Some(doc), _) => AccessorState::Opened(doc.backend()),
            (None, true) => AccessorState::Closed,
            (None, false) => AccessorState::Unopened,
        }
    }

    pub fn is_open(&self) -> bool {
        self.document.is_some()
    }

    /// Backend of the open document, if any.
    pub fn backend(&self) -> Option<Backend> {
        self.document.as_ref().map(FormDocument::backend)
    }

    /// Returns the open document handle, if any.
    pub fn document(&self) -> Option<&FormDocument> {
        self.document.as_ref()
    }

    /// Returns a reference to the active [`FormConfig`].
    pub fn config(&self) -> &FormConfig {
        &self.config
    }
}

use std::collections::HashMap;
use std::fmt;

// ── FieldValue ───────────────────────────────────────────────────────────────

/// The value of a single form field.
///
/// Booleans express checkbox intent; everything else is written as text.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Checkbox-like value.
    Bool(bool),
    /// Text-like value.
    Text(String),
}

impl FieldValue {
    /// Returns the text of a [`FieldValue::Text`], or `None` for booleans.
    ///
    /// ```
    /// # use pdfform::FieldValue;
    /// assert_eq!(FieldValue::from("hello").as_text(), Some("hello"));
    /// assert_eq!(FieldValue::from(true).as_text(), None);
    /// ```
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Bool(_) => None,
        }
    }

    /// Returns the flag of a [`FieldValue::Bool`], or `None` for text.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Text(value.to_string())
    }
}

// ── FieldMap ─────────────────────────────────────────────────────────────────

/// Field name → value, or `None` when the field has no value set.
///
/// Returned by [`crate::FormAccessor::extract_fields`]. Iteration order is
/// not meaningful.
pub type FieldMap = HashMap<String, Option<FieldValue>>;

// ── FillReport ───────────────────────────────────────────────────────────────

/// Outcome of [`crate::FormAccessor::fill`].
///
/// Unknown names are not an error; they show up in `unmatched`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FillReport {
    /// Names that matched at least one widget, sorted.
    pub matched: Vec<String>,

    /// Requested names that no widget in the template carries, sorted.
    pub unmatched: Vec<String>,
}

impl FillReport {
    /// Returns `true` when every requested name matched a widget.
    pub fn is_complete(&self) -> bool {
        self.unmatched.is_empty()
    }
}

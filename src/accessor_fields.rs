use crate::field_reader;
use crate::field_writer::FieldWriter;
use crate::{FieldMap, FieldValue, FillReport, Result};
use lopdf::Document;
use std::collections::HashMap;
use std::path::Path;

/// Field extraction and filling for FormAccessor.
///
/// These operations load their own transient lopdf handle and never touch the
/// document opened through [`crate::FormAccessor::open`].
impl crate::FormAccessor {
    // ── Extraction ────────────────────────────────────────────────────────────

    /// Map every named `/Widget` annotation in the PDF at `path` to its value.
    ///
    /// Fields without a value map to `None`. When several widgets share a
    /// name, the last one in page order wins.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pdfform::FormAccessor;
    ///
    /// let fields = FormAccessor::new().extract_fields("form.pdf").unwrap();
    /// for (name, value) in &fields {
    ///     match value {
    ///         Some(v) => println!("{name} = {v}"),
    ///         None => println!("{name} is empty"),
    ///     }
    /// }
    /// ```
    pub fn extract_fields<P: AsRef<Path>>(&self, path: P) -> Result<FieldMap> {
        let document = load_raw(path.as_ref())?;
        Ok(field_reader::read_fields(&document))
    }

    /// Same as [`extract_fields`](Self::extract_fields), over an in-memory PDF.
    pub fn extract_fields_from_bytes(&self, data: &[u8]) -> Result<FieldMap> {
        let document = Document::load_mem(data)?;
        Ok(field_reader::read_fields(&document))
    }

    /// Map field names to their `/AS` appearance state.
    ///
    /// Filling a field with `true` changes the appearance state, not the
    /// value, so [`extract_fields`](Self::extract_fields) does not reflect it;
    /// this does.
    pub fn appearance_states<P: AsRef<Path>>(&self, path: P) -> Result<HashMap<String, String>> {
        let document = load_raw(path.as_ref())?;
        Ok(field_reader::read_appearance_states(&document))
    }

    // ── Filling ───────────────────────────────────────────────────────────────

    /// Fill the form in `template_path` with `values` and write the result to
    /// `output_path`.
    ///
    /// For each widget whose name is a key of `values`:
    /// - `true` sets the appearance state to the configured on-state (`/Yes`);
    /// - `false` leaves the widget as it is (no explicit "Off" is written);
    /// - any other value is written as text and the cached appearance stream
    ///   is dropped.
    ///
    /// Names with no matching widget are ignored and listed in
    /// [`FillReport::unmatched`]. `/NeedAppearances` is then set on the
    /// `/AcroForm` dictionary. The output file is only created once every
    /// change has been applied and serialized.
    pub fn fill<P, Q, I, K, V>(&self, template_path: P, output_path: Q, values: I) -> Result<FillReport>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let mut document = load_raw(template_path.as_ref())?;
        let (report, bytes) = self.fill_document(&mut document, collect_values(values))?;
        std::fs::write(output_path.as_ref(), bytes)?;
        log::debug!(
            "filled {} field(s) into {}",
            report.matched.len(),
            output_path.as_ref().display()
        );
        Ok(report)
    }

    /// Same as [`fill`](Self::fill), but reads the template from memory and
    /// returns the filled document's bytes.
    pub fn fill_to_bytes<I, K, V>(&self, template: &[u8], values: I) -> Result<(FillReport, Vec<u8>)>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let mut document = Document::load_mem(template)?;
        self.fill_document(&mut document, collect_values(values))
    }

    fn fill_document(
        &self,
        document: &mut Document,
        values: HashMap<String, FieldValue>,
    ) -> Result<(FillReport, Vec<u8>)> {
        let mut writer = FieldWriter::new(document, self.config());
        let report = writer.apply(&values)?;

        let mut bytes = Vec::new();
        writer.write_to(&mut bytes)?;
        Ok((report, bytes))
    }
}

/// Read `path` then parse it, so a missing file is an I/O error rather than
/// a parse error.
fn load_raw(path: &Path) -> Result<Document> {
    let bytes = std::fs::read(path)?;
    Ok(Document::load_mem(&bytes)?)
}

fn collect_values<I, K, V>(values: I) -> HashMap<String, FieldValue>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<FieldValue>,
{
    values
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

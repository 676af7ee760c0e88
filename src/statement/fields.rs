use std::collections::HashMap;

use crate::util::basic::SError;

/// Binds data-row cells to the column names of the most recent header
/// block. One binder (and thus one active header) exists per statement
/// scan; the map is reused for every data row until the next header.
pub struct FieldBinder {
    header: Vec<String>,
    fields: HashMap<String, String>,
}

impl FieldBinder {
    pub fn new() -> FieldBinder {
        FieldBinder { header: Vec::new(), fields: HashMap::new() }
    }

    pub fn has_header(&self) -> bool {
        !self.header.is_empty()
    }

    /// Replaces the active header with `row` and discards all previously
    /// bound values.
    pub fn rebind_header(&mut self, row: &[String]) {
        self.header = row.to_vec();
        self.fields = HashMap::new();
    }

    /// Overwrites the bound value at each column position present in
    /// `row`. Cells beyond the header width are ignored; columns beyond
    /// the row width keep their previous values.
    pub fn bind_row(&mut self, row: &[String]) -> Result<(), SError> {
        if !self.has_header() {
            return Err("Malformed input: no active header".to_string());
        }
        for (name, value) in self.header.iter().zip(row.iter()) {
            self.fields.insert(name.clone(), value.clone());
        }
        Ok(())
    }

    /// The bound value for `name`, or the empty string when the active
    /// block has no such column.
    pub fn value(&self, name: &str) -> &str {
        self.fields.get(name).map(|v| v.as_str()).unwrap_or("")
    }
}

impl Default for FieldBinder {
    fn default() -> Self {
        FieldBinder::new()
    }
}

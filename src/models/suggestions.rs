use std::collections::{HashMap, HashSet};

/// Candidate values per column, fed by the row-value lookup.
#[derive(Debug, Clone, Default)]
pub struct RowValueSuggestions {
    values: HashMap<String, Vec<String>>,
    in_flight: HashSet<String>,
}

impl RowValueSuggestions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `column` as being fetched. Returns false when values are cached
    /// or a lookup is already running.
    pub fn begin_fetch(&mut self, column: &str) -> bool {
        if column.is_empty() || self.values.contains_key(column) || self.in_flight.contains(column) {
            return false;
        }
        self.in_flight.insert(column.to_string());
        true
    }

    pub fn store(&mut self, column: String, values: Vec<String>) {
        self.in_flight.remove(&column);
        self.values.insert(column, values);
    }

    pub fn fetch_failed(&mut self, column: &str) {
        self.in_flight.remove(column);
    }

    pub fn get(&self, column: &str) -> &[String] {
        self.values.get(column).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_loading(&self, column: &str) -> bool {
        self.in_flight.contains(column)
    }

    /// Drops every cached list. Lookups already running still land in `store`.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

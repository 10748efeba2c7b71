use crate::error::{Error, Result};
use crate::graphql::TableQuery;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterEntry {
    // Widget identity only; all list operations are positional.
    pub id: u64,
    pub column: String,
    pub value: String,
}

impl FilterEntry {
    pub fn label(&self) -> String {
        format!("{}: {}", self.column, self.value)
    }
}

/// Ordered column=value filters. Insertion order is application order and
/// the same column may appear more than once.
#[derive(Debug, Clone, Default)]
pub struct FilterList {
    entries: Vec<FilterEntry>,
    next_id: u64,
}

impl FilterList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a filter with an empty value and returns its index.
    pub fn add(&mut self, column: impl Into<String>) -> usize {
        let entry = FilterEntry {
            id: self.next_id,
            column: column.into(),
            value: String::new(),
        };
        self.next_id += 1;
        self.entries.push(entry);
        self.entries.len() - 1
    }

    pub fn set_column(&mut self, index: usize, column: impl Into<String>) -> Result<()> {
        self.get_mut(index)?.column = column.into();
        Ok(())
    }

    pub fn set_value(&mut self, index: usize, value: impl Into<String>) -> Result<()> {
        self.get_mut(index)?.value = value.into();
        Ok(())
    }

    /// Ordered removal; entries after `index` shift down by one.
    pub fn remove(&mut self, index: usize) -> Result<FilterEntry> {
        self.check_index(index)?;
        Ok(self.entries.remove(index))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, index: usize) -> Option<&FilterEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[FilterEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Columns and values as two positionally paired sequences.
    pub fn to_query(&self) -> TableQuery {
        let (columns, values) = self
            .entries
            .iter()
            .map(|entry| (entry.column.clone(), entry.value.clone()))
            .unzip();
        TableQuery::filtered(columns, values)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(Error::Validation {
                index,
                len: self.entries.len(),
            })
        }
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut FilterEntry> {
        self.check_index(index)?;
        Ok(&mut self.entries[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(list: &FilterList) -> Vec<&str> {
        list.entries().iter().map(|e| e.column.as_str()).collect()
    }

    #[test]
    fn test_add_appends_with_empty_value() {
        let mut list = FilterList::new();
        assert_eq!(list.add("status"), 0);
        assert_eq!(list.add("region"), 1);

        assert_eq!(columns(&list), vec!["status", "region"]);
        assert!(list.entries().iter().all(|e| e.value.is_empty()));
    }

    #[test]
    fn test_ids_are_unique_after_removal() {
        let mut list = FilterList::new();
        list.add("a");
        list.add("b");
        list.remove(1).unwrap();
        list.add("c");

        assert_ne!(list.get(0).unwrap().id, list.get(1).unwrap().id);
    }

    #[test]
    fn test_set_column_keeps_value() {
        let mut list = FilterList::new();
        list.add("status");
        list.set_value(0, "active").unwrap();
        list.set_column(0, "state").unwrap();

        let entry = list.get(0).unwrap();
        assert_eq!(entry.column, "state");
        assert_eq!(entry.value, "active");
    }

    #[test]
    fn test_remove_shifts_later_entries_down() {
        let mut list = FilterList::new();
        for column in ["a", "b", "c", "d"] {
            list.add(column);
        }

        let removed = list.remove(1).unwrap();
        assert_eq!(removed.column, "b");
        assert_eq!(columns(&list), vec!["a", "c", "d"]);
    }

    #[test]
    fn test_length_tracks_adds_minus_removes() {
        let mut list = FilterList::new();
        let mut expected: Vec<String> = Vec::new();

        for step in 0..20usize {
            if step % 3 == 2 && !list.is_empty() {
                let index = step % list.len();
                list.remove(index).unwrap();
                expected.remove(index);
            } else {
                let column = format!("col{}", step);
                list.add(column.clone());
                expected.push(column);
            }
            assert_eq!(list.len(), expected.len());
        }

        let actual: Vec<String> = list.entries().iter().map(|e| e.column.clone()).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_out_of_range_index_is_validation_error() {
        let mut list = FilterList::new();
        list.add("status");

        assert_eq!(
            list.set_value(1, "x"),
            Err(Error::Validation { index: 1, len: 1 })
        );
        assert_eq!(
            list.set_column(5, "x"),
            Err(Error::Validation { index: 5, len: 1 })
        );
        assert!(matches!(list.remove(1), Err(Error::Validation { index: 1, len: 1 })));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_to_query_pairs_columns_and_values() {
        let mut list = FilterList::new();
        list.add("status");
        list.set_value(0, "active").unwrap();
        list.add("status");
        list.set_value(1, "pending").unwrap();

        let query = list.to_query();
        assert_eq!(query.filter_columns, Some(vec!["status".to_string(), "status".to_string()]));
        assert_eq!(query.filter_values, Some(vec!["active".to_string(), "pending".to_string()]));
    }

    #[test]
    fn test_label() {
        let mut list = FilterList::new();
        list.add("region");
        list.set_value(0, "us").unwrap();
        assert_eq!(list.get(0).unwrap().label(), "region: us");
    }
}

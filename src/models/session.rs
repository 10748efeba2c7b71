//! Filter editing state and the rules for when a table query is issued.
//!
//! Nothing here touches the network. Operations that need a remote call
//! return what to fetch; the app runs it and feeds the outcome back.

use crate::error::{Error, Result};
use crate::graphql::{TableQuery, TableRow};
use crate::models::{FilterEntry, FilterList, QueryTracker, ResultState, RowValueSuggestions};
use tracing::{debug, warn};

/// A table query to run, tagged with the generation its result must carry.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryTicket {
    pub generation: u64,
    pub query: TableQuery,
    // Catalog columns to select, captured when the query was issued
    pub columns: Vec<String>,
}

#[derive(Debug, Default)]
pub struct FilterSession {
    pub filters: FilterList,
    pub suggestions: RowValueSuggestions,
    pub column_names: Vec<String>,
    tracker: QueryTracker,
}

impl FilterSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a filter for `column`. Returns the column whose values should
    /// be looked up, if any.
    pub fn add_filter(&mut self, column: &str) -> Option<String> {
        let index = self.filters.add(column);
        debug!(index, column, "filter added");
        self.invalidate_suggestions_for(column)
    }

    /// Changes the column of an existing filter, keeping its value.
    pub fn select_column(&mut self, index: usize, column: &str) -> Result<Option<String>> {
        self.filters.set_column(index, column)?;
        debug!(index, column, "filter column changed");
        Ok(self.invalidate_suggestions_for(column))
    }

    pub fn set_value(&mut self, index: usize, value: &str) -> Result<()> {
        self.filters.set_value(index, value)
    }

    /// Removes a filter. Every cached suggestion list is dropped, not just
    /// the removed entry's.
    pub fn remove_filter(&mut self, index: usize) -> Result<FilterEntry> {
        let removed = self.filters.remove(index)?;
        self.suggestions.clear();
        debug!(index, column = %removed.column, "filter removed");
        Ok(removed)
    }

    pub fn clear_all(&mut self) {
        self.filters.clear();
        self.suggestions.clear();
    }

    pub fn apply_filters(&mut self) -> QueryTicket {
        let query = self.filters.to_query();
        let columns = self.column_names.clone();
        let generation = self.tracker.begin(&columns);
        debug!(generation, filters = self.filters.len(), "applying filters");
        QueryTicket { generation, query, columns }
    }

    pub fn clear_filters(&mut self) -> QueryTicket {
        self.clear_all();
        let columns = self.column_names.clone();
        let generation = self.tracker.begin(&columns);
        debug!(generation, "clearing filters");
        QueryTicket {
            generation,
            query: TableQuery::unfiltered(),
            columns,
        }
    }

    /// Records a table query outcome. Returns false if a newer query has
    /// been issued since.
    pub fn complete_table_query(&mut self, generation: u64, outcome: Result<Vec<TableRow>>) -> bool {
        let accepted = self.tracker.complete(generation, outcome);
        if !accepted {
            warn!(generation, latest = self.tracker.latest(), "dropping stale table result");
        }
        accepted
    }

    pub fn set_column_names(&mut self, names: Vec<String>) {
        self.column_names = names;
    }

    pub fn complete_suggestions(&mut self, column: String, outcome: Result<Vec<String>>) {
        match outcome {
            Ok(values) => self.suggestions.store(column, values),
            Err(error) => {
                warn!(%column, %error, "row value lookup failed");
                self.suggestions.fetch_failed(&column);
            }
        }
    }

    pub fn result_state(&self) -> &ResultState {
        self.tracker.state()
    }

    pub fn last_error(&self) -> Option<&Error> {
        match self.tracker.state() {
            ResultState::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    fn invalidate_suggestions_for(&mut self, column: &str) -> Option<String> {
        self.suggestions.clear();
        if self.suggestions.begin_fetch(column) {
            Some(column.to_string())
        } else {
            None
        }
    }
}

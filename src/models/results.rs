use crate::error::Error;
use crate::graphql::{selected_fields, TableRow};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResultState {
    #[default]
    Idle,
    Loading {
        generation: u64,
    },
    Loaded {
        generation: u64,
        // Exactly the fields the query selected, `id` first
        columns: Vec<String>,
        rows: Vec<TableRow>,
    },
    Failed {
        generation: u64,
        error: Error,
    },
}

impl ResultState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ResultState::Loading { .. })
    }

    pub fn rows(&self) -> Option<&[TableRow]> {
        match self {
            ResultState::Loaded { rows, .. } => Some(rows),
            _ => None,
        }
    }

    pub fn columns(&self) -> Option<&[String]> {
        match self {
            ResultState::Loaded { columns, .. } => Some(columns),
            _ => None,
        }
    }
}

/// Hands out request generations and keeps only the newest outcome.
#[derive(Debug, Default)]
pub struct QueryTracker {
    latest: u64,
    latest_columns: Vec<String>,
    state: ResultState,
}

impl QueryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a query that selects `columns` (plus `id`).
    pub fn begin(&mut self, columns: &[String]) -> u64 {
        self.latest += 1;
        self.latest_columns = selected_fields(columns);
        self.state = ResultState::Loading {
            generation: self.latest,
        };
        self.latest
    }

    /// Returns false when `generation` has been superseded.
    pub fn complete(&mut self, generation: u64, outcome: Result<Vec<TableRow>, Error>) -> bool {
        if generation != self.latest {
            return false;
        }
        self.state = match outcome {
            Ok(rows) => ResultState::Loaded {
                generation,
                columns: std::mem::take(&mut self.latest_columns),
                rows,
            },
            Err(error) => ResultState::Failed { generation, error },
        };
        true
    }

    pub fn latest(&self) -> u64 {
        self.latest
    }

    pub fn state(&self) -> &ResultState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str) -> TableRow {
        TableRow {
            id: id.to_string(),
            fields: Default::default(),
        }
    }

    #[test]
    fn test_begin_marks_loading() {
        let mut tracker = QueryTracker::new();
        assert_eq!(tracker.state(), &ResultState::Idle);

        let generation = tracker.begin(&[]);
        assert_eq!(generation, 1);
        assert!(tracker.state().is_loading());
    }

    #[test]
    fn test_latest_generation_wins() {
        let mut tracker = QueryTracker::new();
        let first = tracker.begin(&[]);
        let second = tracker.begin(&[]);

        assert!(tracker.complete(second, Ok(vec![row("2")])));
        assert!(!tracker.complete(first, Ok(vec![row("1")])));

        let rows = tracker.state().rows().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "2");
    }

    #[test]
    fn test_stale_result_does_not_end_loading() {
        let mut tracker = QueryTracker::new();
        let first = tracker.begin(&[]);
        let second = tracker.begin(&[]);

        assert!(!tracker.complete(first, Ok(vec![row("1")])));
        assert_eq!(tracker.state(), &ResultState::Loading { generation: second });
    }

    #[test]
    fn test_loaded_columns_are_those_selected_at_begin() {
        let mut tracker = QueryTracker::new();
        let generation = tracker.begin(&["status".to_string()]);
        tracker.complete(generation, Ok(vec![row("1")]));

        let columns = tracker.state().columns().unwrap();
        assert_eq!(columns, ["id".to_string(), "status".to_string()]);
    }

    #[test]
    fn test_columns_follow_the_latest_generation() {
        let mut tracker = QueryTracker::new();
        let first = tracker.begin(&[]);
        let second = tracker.begin(&["region".to_string()]);

        assert!(!tracker.complete(first, Ok(vec![row("1")])));
        assert!(tracker.complete(second, Ok(vec![row("2")])));
        assert_eq!(
            tracker.state().columns().unwrap(),
            ["id".to_string(), "region".to_string()]
        );
    }

    #[test]
    fn test_failure_is_distinct_from_empty() {
        let mut tracker = QueryTracker::new();
        let generation = tracker.begin(&[]);
        tracker.complete(generation, Err(Error::Network("connection refused".to_string())));

        assert!(tracker.state().rows().is_none());
        assert!(matches!(tracker.state(), ResultState::Failed { error: Error::Network(_), .. }));
    }
}

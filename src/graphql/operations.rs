use crate::error::Result;
use crate::graphql::TableRow;
use poll_promise::Promise;

pub enum AsyncOperation {
    LoadColumnNames(Promise<Result<Vec<String>>>),
    LoadTableData(u64, Promise<Result<Vec<TableRow>>>), // generation, promise
    LoadRowValues(String, Promise<Result<Vec<String>>>), // column, promise
}


mod client;
mod models;
mod operations;

pub use client::GraphqlClient;
pub use models::{selected_fields, TableQuery, TableRow};
pub use operations::AsyncOperation;

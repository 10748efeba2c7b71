use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const GET_COLUMN_NAMES: &str = "query GetColumnNames {
  columnNames
}";

pub const GET_ROW_VALUES: &str = "query GetRowValues($column: String!) {
  rowValues(column: $column)
}";

/// `id` followed by `columns`, without duplicates.
pub fn selected_fields(columns: &[String]) -> Vec<String> {
    let mut fields = vec!["id".to_string()];
    for column in columns {
        if !fields.contains(column) {
            fields.push(column.clone());
        }
    }
    fields
}

/// Builds the table query, selecting `id` plus every catalog column.
pub fn table_data_document(columns: &[String]) -> String {
    let fields = selected_fields(columns);

    format!(
        "query GetTableData($filterColumns: [String!], $filterValues: [String!]) {{
  tableData(filterColumns: $filterColumns, filterValues: $filterValues) {{
    {}
  }}
}}",
        fields.join("\n    ")
    )
}

/// Variables for `GetTableData`. `None` fields are omitted from the request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_columns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_values: Option<Vec<String>>,
}

impl TableQuery {
    pub fn unfiltered() -> Self {
        Self::default()
    }

    pub fn filtered(columns: Vec<String>, values: Vec<String>) -> Self {
        Self {
            filter_columns: Some(columns),
            filter_values: Some(values),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct RowValuesVariables<'a> {
    pub column: &'a str,
}

/// One result row: its `id` and the remaining selected fields.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct TableRow {
    pub id: String,
    pub fields: Map<String, Value>,
}

impl TableRow {
    pub fn cell(&self, column: &str) -> String {
        if column == "id" {
            return self.id.clone();
        }
        match self.fields.get(column) {
            None | Some(Value::Null) => "(NULL)".to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

impl TryFrom<Map<String, Value>> for TableRow {
    type Error = String;

    fn try_from(mut fields: Map<String, Value>) -> Result<Self, Self::Error> {
        let id = match fields.remove("id") {
            Some(Value::String(s)) => s,
            Some(Value::Number(n)) => n.to_string(),
            Some(other) => return Err(format!("unsupported row id: {}", other)),
            None => return Err("row is missing an id".to_string()),
        };
        Ok(Self { id, fields })
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct GraphqlRequest<'a, V> {
    pub query: &'a str,
    pub variables: V,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphqlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphqlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ColumnNamesData {
    pub column_names: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TableDataData {
    pub table_data: Option<Vec<TableRow>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RowValuesData {
    pub row_values: Option<Vec<String>>,
}

use crate::config::Config;
use crate::error::{Error, Result};
use crate::graphql::models::{
    table_data_document, ColumnNamesData, GraphqlRequest, GraphqlResponse, RowValuesData,
    RowValuesVariables, TableDataData, GET_COLUMN_NAMES, GET_ROW_VALUES,
};
use crate::graphql::{TableQuery, TableRow};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

/// GraphQL-over-HTTP client for the table service.
pub struct GraphqlClient {
    endpoint: reqwest::Url,
    http: reqwest::Client,
}

impl GraphqlClient {
    pub fn new(config: &Config) -> Result<Self> {
        let endpoint = reqwest::Url::parse(&config.endpoint)
            .map_err(|e| Error::Config(format!("Invalid endpoint {}: {}", config.endpoint, e)))?;
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| Error::Config(format!("Failed to create client: {}", e)))?;

        Ok(Self { endpoint, http })
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    pub async fn get_column_names(&self) -> Result<Vec<String>> {
        let data: ColumnNamesData = self
            .execute("GetColumnNames", GET_COLUMN_NAMES, serde_json::json!({}))
            .await?;
        let names = data.column_names.unwrap_or_default();
        info!(count = names.len(), "loaded column names");
        Ok(names)
    }

    /// Fetches rows matching `query`, selecting `id` and the given columns.
    pub async fn get_table_data(&self, query: &TableQuery, columns: &[String]) -> Result<Vec<TableRow>> {
        let document = table_data_document(columns);
        let data: TableDataData = self.execute("GetTableData", &document, query).await?;
        let rows = data.table_data.unwrap_or_default();
        info!(rows = rows.len(), "loaded table data");
        Ok(rows)
    }

    pub async fn get_row_values(&self, column: &str) -> Result<Vec<String>> {
        let data: RowValuesData = self
            .execute("GetRowValues", GET_ROW_VALUES, RowValuesVariables { column })
            .await?;
        Ok(data.row_values.unwrap_or_default())
    }

    async fn execute<V: Serialize, T: DeserializeOwned>(
        &self,
        operation: &str,
        query: &str,
        variables: V,
    ) -> Result<T> {
        debug!(operation, endpoint = %self.endpoint, "sending graphql request");

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&GraphqlRequest { query, variables })
            .send()
            .await
            .map_err(|e| Error::Network(format!("{} request failed: {}", operation, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(Error::Network(format!(
                "{} failed with status {}: {}",
                operation, status, error_text
            )));
        }

        let body: GraphqlResponse<T> = response
            .json()
            .await
            .map_err(|e| Error::Network(format!("Failed to parse {} response: {}", operation, e)))?;

        if !body.errors.is_empty() {
            let messages: Vec<String> = body.errors.into_iter().map(|e| e.message).collect();
            return Err(Error::Query(messages.join("; ")));
        }

        body.data
            .ok_or_else(|| Error::Query(format!("{} returned no data", operation)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> GraphqlClient {
        let config = Config {
            endpoint: format!("{}/graphql", server.uri()),
            request_timeout_secs: 5,
        };
        GraphqlClient::new(&config).unwrap()
    }

    async fn last_body(server: &MockServer) -> Value {
        let requests = server.received_requests().await.unwrap();
        let request = requests.last().unwrap();
        serde_json::from_slice(&request.body).unwrap()
    }

    #[test]
    fn test_invalid_endpoint_is_config_error() {
        let config = Config {
            endpoint: "not a url".to_string(),
            request_timeout_secs: 5,
        };
        assert!(matches!(GraphqlClient::new(&config), Err(Error::Config(_))));
    }

    #[tokio::test]
    async fn test_get_column_names() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/graphql"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"columnNames": ["status", "region"]}
            })))
            .mount(&server)
            .await;

        let names = client_for(&server).get_column_names().await.unwrap();
        assert_eq!(names, vec!["status".to_string(), "region".to_string()]);

        let body = last_body(&server).await;
        assert!(body["query"].as_str().unwrap().contains("columnNames"));
    }

    #[tokio::test]
    async fn test_null_column_names_become_empty() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"columnNames": null}
            })))
            .mount(&server)
            .await;

        let names = client_for(&server).get_column_names().await.unwrap();
        assert!(names.is_empty());
    }

    #[tokio::test]
    async fn test_get_table_data_sends_paired_filters() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "variables": {"filterColumns": ["status"], "filterValues": ["active"]}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"tableData": [
                    {"id": "1", "status": "active", "region": "us"},
                    {"id": 2, "status": "active", "region": null}
                ]}
            })))
            .mount(&server)
            .await;

        let query = TableQuery::filtered(vec!["status".to_string()], vec!["active".to_string()]);
        let columns = vec!["status".to_string(), "region".to_string()];
        let rows = client_for(&server).get_table_data(&query, &columns).await.unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].cell("region"), "us");
        assert_eq!(rows[1].id, "2");

        let body = last_body(&server).await;
        let document = body["query"].as_str().unwrap();
        assert!(document.contains("status"));
        assert!(document.contains("region"));
    }

    #[tokio::test]
    async fn test_unfiltered_query_omits_filter_variables() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"tableData": []}
            })))
            .mount(&server)
            .await;

        let rows = client_for(&server)
            .get_table_data(&TableQuery::unfiltered(), &[])
            .await
            .unwrap();
        assert!(rows.is_empty());

        let body = last_body(&server).await;
        assert_eq!(body["variables"], json!({}));
    }

    #[tokio::test]
    async fn test_get_row_values() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({"variables": {"column": "region"}})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"rowValues": ["eu", "us"]}
            })))
            .mount(&server)
            .await;

        let values = client_for(&server).get_row_values("region").await.unwrap();
        assert_eq!(values, vec!["eu".to_string(), "us".to_string()]);
    }

    #[tokio::test]
    async fn test_graphql_errors_become_query_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": null,
                "errors": [{"message": "Unknown column: colour"}, {"message": "second"}]
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .get_table_data(&TableQuery::unfiltered(), &[])
            .await
            .unwrap_err();
        assert_eq!(err, Error::Query("Unknown column: colour; second".to_string()));
    }

    #[tokio::test]
    async fn test_missing_data_is_query_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let err = client_for(&server).get_column_names().await.unwrap_err();
        assert!(matches!(err, Error::Query(_)));
    }

    #[tokio::test]
    async fn test_server_error_status_is_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = client_for(&server).get_column_names().await.unwrap_err();
        match err {
            Error::Network(message) => assert!(message.contains("500")),
            other => panic!("expected network error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        let server = MockServer::start().await;
        let client = client_for(&server);
        drop(server);

        let err = client.get_column_names().await.unwrap_err();
        assert!(matches!(err, Error::Network(_)));
    }
}

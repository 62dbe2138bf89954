//! Employee service HTTP client.

use std::time::Instant;

use async_trait::async_trait;
use reqwest::{Client, Method, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::dto::{EmployeeResponse, Envelope};
use super::retry::RetryPolicy;
use crate::domain::entities::{Employee, EmployeeId};
use crate::domain::errors::ApiError;
use crate::domain::ports::{EmployeePort, NewEmployee};
use crate::infrastructure::config::ApiConfig;

const EMPLOYEE_PATH: [&str; 3] = ["api", "v1", "employee"];
const USER_AGENT: &str = concat!("rosterdeck/", env!("CARGO_PKG_VERSION"));
const MAX_ERROR_BODY: usize = 200;

/// HTTP adapter for the employee service.
pub struct EmployeeApiClient {
    client: Client,
    base_url: Url,
    retry: RetryPolicy,
}

impl EmployeeApiClient {
    /// Creates client from configuration.
    ///
    /// # Errors
    /// Returns error if the base URL is invalid or HTTP client creation fails.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = config.connect_timeout() {
            builder = builder.connect_timeout(connect_timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::unexpected(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: parse_base_url(&config.base_url)?,
            retry: RetryPolicy::from_config(&config.retry),
        })
    }

    /// Creates client with custom base URL and no retries.
    ///
    /// # Errors
    /// Returns error if the base URL is invalid or HTTP client creation fails.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Self::new(&ApiConfig {
            base_url: base_url.into(),
            ..ApiConfig::default()
        })
    }

    /// Builds `{base}/api/v1/employee/{segments...}`, escaping each segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::invalid_request("base URL cannot carry a path"))?
            .pop_if_empty()
            .extend(EMPLOYEE_PATH)
            .extend(segments);
        Ok(url)
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<&NewEmployee>,
    ) -> Result<Response, ApiError> {
        let started = Instant::now();
        let mut request = self.client.request(method.clone(), url.clone());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            warn!(method = %method, url = %url, error = %e, "Failed to reach employee service");
            map_transport_error(&e)
        })?;

        let status = response.status();
        debug!(
            method = %method,
            url = %url,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis(),
            "Employee service responded"
        );

        if status.is_success() {
            Ok(response)
        } else {
            Err(Self::handle_error_response(status, response).await)
        }
    }

    async fn handle_error_response(status: StatusCode, response: Response) -> ApiError {
        let body = response.text().await.unwrap_or_default();
        let message = if body.trim().is_empty() {
            format!("HTTP {status}")
        } else {
            body.chars().take(MAX_ERROR_BODY).collect()
        };

        warn!(status = status.as_u16(), message = %message, "Employee service returned an error");
        ApiError::status(status.as_u16(), message)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        operation: &str,
        url: Url,
    ) -> Result<T, ApiError> {
        let url = &url;
        self.retry
            .run(operation, move || async move {
                let response = self.send(Method::GET, url.clone(), None).await?;
                decode::<T>(response).await
            })
            .await
    }
}

fn parse_base_url(base_url: &str) -> Result<Url, ApiError> {
    let url = Url::parse(base_url)
        .map_err(|e| ApiError::invalid_request(format!("invalid base URL {base_url:?}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(ApiError::invalid_request(format!(
            "invalid base URL {base_url:?}: not a hierarchical URL"
        )));
    }
    Ok(url)
}

fn map_transport_error(e: &reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Timeout
    } else if e.is_connect() {
        ApiError::network("failed to connect to employee service")
    } else if e.is_decode() {
        ApiError::decode(e.to_string())
    } else {
        ApiError::network(e.to_string())
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let bytes = response.bytes().await.map_err(|e| map_transport_error(&e))?;
    serde_json::from_slice::<Envelope<T>>(&bytes)
        .map(Envelope::into_inner)
        .map_err(|e| {
            warn!(error = %e, "Failed to parse employee service response");
            ApiError::decode(e.to_string())
        })
}

#[async_trait]
impl EmployeePort for EmployeeApiClient {
    async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let url = self.endpoint(&[])?;
        let records: Vec<EmployeeResponse> = self.get_json("list", url).await?;
        Ok(records.into_iter().map(Employee::from).collect())
    }

    async fn fetch_employee(&self, id: &EmployeeId) -> Result<Employee, ApiError> {
        let url = self.endpoint(&[id.as_str()])?;
        let record: EmployeeResponse = self.get_json("get", url).await?;
        Ok(record.into())
    }

    async fn delete_employee(&self, id: &EmployeeId) -> Result<(), ApiError> {
        let url = &self.endpoint(&[id.as_str()])?;
        self.retry
            .run("delete", move || async move {
                self.send(Method::DELETE, url.clone(), None).await.map(drop)
            })
            .await
    }

    async fn create_employee(&self, employee: &NewEmployee) -> Result<Employee, ApiError> {
        let url = self.endpoint(&[])?;
        let response = self.send(Method::POST, url, Some(employee)).await?;
        let record: EmployeeResponse = decode(response).await?;
        Ok(record.into())
    }

    async fn search_employees(&self, query: &str) -> Result<Vec<Employee>, ApiError> {
        let url = self.endpoint(&["search", query])?;
        let records: Vec<EmployeeResponse> = self.get_json("search", url).await?;
        Ok(records.into_iter().map(Employee::from).collect())
    }

    async fn highest_salary(&self) -> Result<i64, ApiError> {
        let url = self.endpoint(&["highestSalary"])?;
        self.get_json("highest_salary", url).await
    }

    async fn top_ten_names(&self) -> Result<Vec<String>, ApiError> {
        let url = self.endpoint(&["topTenHighestEarningEmployeeNames"])?;
        self.get_json("top_ten", url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::RetryConfig;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Answers `responses.len()` connections in order and hands back the raw
    /// requests it saw.
    async fn serve(responses: Vec<(u16, &'static str)>) -> (String, JoinHandle<Vec<String>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let mut seen = Vec::new();
            for (status, body) in responses {
                let (mut socket, _) = listener.accept().await.unwrap();
                seen.push(read_request(&mut socket).await);
                let reply = format!(
                    "HTTP/1.1 {status} X\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                socket.write_all(reply.as_bytes()).await.unwrap();
                socket.shutdown().await.unwrap();
            }
            seen
        });

        (format!("http://{addr}"), handle)
    }

    async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
        let mut raw = Vec::new();
        let mut chunk = [0_u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&raw);
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if raw.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&raw).into_owned()
    }

    #[test]
    fn test_client_creation() {
        let client = EmployeeApiClient::with_base_url("http://localhost:8111");
        assert!(client.is_ok());
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        let result = EmployeeApiClient::with_base_url("not a url");
        assert!(matches!(result, Err(ApiError::InvalidRequest { .. })));

        let result = EmployeeApiClient::with_base_url("mailto:hr@company.com");
        assert!(matches!(result, Err(ApiError::InvalidRequest { .. })));
    }

    #[test]
    fn test_endpoint_paths() {
        let client = EmployeeApiClient::with_base_url("http://localhost:8111/").unwrap();

        assert_eq!(
            client.endpoint(&[]).unwrap().as_str(),
            "http://localhost:8111/api/v1/employee"
        );
        assert_eq!(
            client.endpoint(&["highestSalary"]).unwrap().as_str(),
            "http://localhost:8111/api/v1/employee/highestSalary"
        );
    }

    #[test]
    fn test_search_query_is_one_escaped_segment() {
        let client = EmployeeApiClient::with_base_url("http://localhost:8111").unwrap();

        let url = client.endpoint(&["search", "van der/Berg"]).unwrap();

        assert_eq!(
            url.as_str(),
            "http://localhost:8111/api/v1/employee/search/van%20der%2FBerg"
        );
    }

    #[test]
    fn test_base_url_path_prefix_is_kept() {
        let client = EmployeeApiClient::with_base_url("http://gateway:8080/hr").unwrap();

        assert_eq!(
            client.endpoint(&[]).unwrap().as_str(),
            "http://gateway:8080/hr/api/v1/employee"
        );
    }

    #[tokio::test]
    async fn test_list_employees_over_http() {
        let (base_url, server) = serve(vec![(
            200,
            r#"[{"id":1,"employee_name":"Bob","employee_salary":50000,"employee_age":40,"employee_title":"Clerk"}]"#,
        )])
        .await;
        let client = EmployeeApiClient::with_base_url(base_url).unwrap();

        let employees = client.list_employees().await.unwrap();

        assert_eq!(
            employees,
            vec![Employee::new(1_u64, "Bob", Some(50_000), Some(40), "Clerk")]
        );
        let requests = server.await.unwrap();
        assert!(requests[0].starts_with("GET /api/v1/employee HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_create_posts_plain_field_names() {
        let (base_url, server) = serve(vec![(
            201,
            r#"{"id":7,"employee_name":"A","employee_salary":100,"employee_age":30,"employee_title":"Eng"}"#,
        )])
        .await;
        let client = EmployeeApiClient::with_base_url(base_url).unwrap();
        let request = NewEmployee {
            name: "A".to_string(),
            salary: crate::domain::ports::NumericInput::Number(100),
            age: crate::domain::ports::NumericInput::Number(30),
            title: "Eng".to_string(),
        };

        let created = client.create_employee(&request).await.unwrap();

        assert_eq!(created, Employee::new(7_u64, "A", Some(100), Some(30), "Eng"));
        let requests = server.await.unwrap();
        assert!(requests[0].starts_with("POST /api/v1/employee HTTP/1.1"));
        assert!(requests[0].ends_with(r#"{"name":"A","salary":100,"age":30,"title":"Eng"}"#));
    }

    #[tokio::test]
    async fn test_delete_ignores_body() {
        let (base_url, server) = serve(vec![(200, "Employee deleted successfully")]).await;
        let client = EmployeeApiClient::with_base_url(base_url).unwrap();

        client.delete_employee(&EmployeeId::from("abc-1")).await.unwrap();

        let requests = server.await.unwrap();
        assert!(requests[0].starts_with("DELETE /api/v1/employee/abc-1 HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_aggregates_over_http() {
        let (base_url, server) = serve(vec![
            (200, "320800"),
            (200, r#"["Tiger Nixon","Garrett Winters"]"#),
        ])
        .await;
        let client = EmployeeApiClient::with_base_url(base_url).unwrap();

        assert_eq!(client.highest_salary().await.unwrap(), 320_800);
        assert_eq!(
            client.top_ten_names().await.unwrap(),
            vec!["Tiger Nixon", "Garrett Winters"]
        );

        let requests = server.await.unwrap();
        assert!(requests[0].starts_with("GET /api/v1/employee/highestSalary "));
        assert!(requests[1].starts_with("GET /api/v1/employee/topTenHighestEarningEmployeeNames "));
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let (base_url, _server) = serve(vec![(404, "")]).await;
        let client = EmployeeApiClient::with_base_url(base_url).unwrap();

        let result = client.fetch_employee(&EmployeeId::from("missing")).await;

        assert!(matches!(result, Err(ApiError::Status { status: 404, .. })));
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let (base_url, _server) = serve(vec![(200, "{\"unexpected\":true}")]).await;
        let client = EmployeeApiClient::with_base_url(base_url).unwrap();

        let result = client.search_employees("bob").await;

        assert!(matches!(result, Err(ApiError::Decode { .. })));
    }

    #[tokio::test]
    async fn test_retries_unavailable_service() {
        let (base_url, server) = serve(vec![(503, ""), (200, "[]")]).await;
        let client = EmployeeApiClient::new(&ApiConfig {
            base_url,
            retry: RetryConfig {
                max_attempts: 2,
                initial_interval_ms: 1,
                ..RetryConfig::default()
            },
            ..ApiConfig::default()
        })
        .unwrap();

        assert!(client.list_employees().await.unwrap().is_empty());
        assert_eq!(server.await.unwrap().len(), 2);
    }
}

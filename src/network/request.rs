//! Generic request helper for arbitrary API endpoints
//!
//! Unlike the typed client methods, these helpers never fail: every outcome is
//! folded into an [`ApiResponse`].

use crate::api::ProxyPoolClient;
use reqwest::Method;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

impl std::fmt::Display for ResponseBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResponseBody::Json(value) => match serde_json::to_string_pretty(value) {
                Ok(pretty) => write!(f, "{}", pretty),
                Err(_) => write!(f, "{}", value),
            },
            ResponseBody::Text(text) => write!(f, "{}", text),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// 2xx response; `bytes` is the size of the raw body.
    Success { body: ResponseBody, bytes: usize },
    Failure(String),
}

pub async fn get(client: &ProxyPoolClient, endpoint: &str) -> ApiResponse {
    send(client, Method::GET, endpoint, None).await
}

pub async fn post(client: &ProxyPoolClient, endpoint: &str, data: &Value) -> ApiResponse {
    send(client, Method::POST, endpoint, Some(data)).await
}

pub async fn put(client: &ProxyPoolClient, endpoint: &str, data: &Value) -> ApiResponse {
    send(client, Method::PUT, endpoint, Some(data)).await
}

pub async fn delete(client: &ProxyPoolClient, endpoint: &str) -> ApiResponse {
    send(client, Method::DELETE, endpoint, None).await
}

/// Sends a request with a JSON content type. A body is only attached to POST and PUT.
pub async fn send(
    client: &ProxyPoolClient,
    method: Method,
    endpoint: &str,
    data: Option<&Value>,
) -> ApiResponse {
    match try_send(client, method, endpoint, data).await {
        Ok((body, bytes)) => ApiResponse::Success { body, bytes },
        Err(message) => {
            log::error!("API request failed: {}", message);
            ApiResponse::Failure(message)
        }
    }
}

async fn try_send(
    client: &ProxyPoolClient,
    method: Method,
    endpoint: &str,
    data: Option<&Value>,
) -> Result<(ResponseBody, usize), String> {
    let attach_body = method == Method::POST || method == Method::PUT;
    let mut request = client
        .request(method, endpoint)
        .header(CONTENT_TYPE, "application/json");
    if let (true, Some(data)) = (attach_body, data) {
        request = request.body(data.to_string());
    }

    let response = request.send().await.map_err(|e| e.to_string())?;
    let status = response.status();
    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("application/json"));
    let raw = response.text().await.map_err(|e| e.to_string())?;
    let bytes = raw.len();

    let body = if is_json {
        ResponseBody::Json(serde_json::from_str(&raw).map_err(|e| e.to_string())?)
    } else {
        ResponseBody::Text(raw)
    };

    if !status.is_success() {
        let message = match &body {
            ResponseBody::Json(value) => value
                .get("message")
                .and_then(Value::as_str)
                .map(String::from)
                .unwrap_or_else(|| value.to_string()),
            ResponseBody::Text(text) => text.clone(),
        };
        return Err(format!("HTTP {}: {}", status.as_u16(), message));
    }

    Ok((body, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;
    use mockito::Matcher;
    use serde_json::json;

    fn client_for(server: &mockito::ServerGuard) -> ProxyPoolClient {
        let environment = Environment::Custom {
            api_url: server.url(),
        };
        ProxyPoolClient::new(environment, None).unwrap()
    }

    #[tokio::test]
    async fn test_get_decodes_json_and_text() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/count")
            .with_status(200)
            .with_header("content-type", "text/html; charset=utf-8")
            .with_body("42")
            .create_async()
            .await;
        server
            .mock("GET", "/api/stats")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"status": "ok"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        assert_eq!(
            get(&client, "/count").await,
            ApiResponse::Success {
                body: ResponseBody::Text("42".to_string()),
                bytes: 2
            }
        );
        match get(&client, "/api/stats").await {
            ApiResponse::Success { body, .. } => {
                assert_eq!(body, ResponseBody::Json(json!({ "status": "ok" })))
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_failure_carries_server_message() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/random")
            .with_status(403)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message": "The provided API key is not valid"}"#)
            .create_async()
            .await;

        let response = get(&client_for(&server), "/random").await;
        assert_eq!(
            response,
            ApiResponse::Failure("HTTP 403: The provided API key is not valid".to_string())
        );
    }

    #[tokio::test]
    async fn test_post_sends_json_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/crawlers")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({ "name": "free" })))
            .with_status(201)
            .with_body("created")
            .create_async()
            .await;

        let response = post(&client_for(&server), "/api/crawlers", &json!({ "name": "free" })).await;
        assert!(matches!(response, ApiResponse::Success { .. }));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_unreachable_server_is_failure() {
        let environment = Environment::Custom {
            api_url: "http://127.0.0.1:1".to_string(),
        };
        let client = ProxyPoolClient::new(environment, None).unwrap();
        assert!(matches!(
            delete(&client, "/api/proxies").await,
            ApiResponse::Failure(_)
        ));
    }
}

use crate::{AuthenticatedUser, ClientError, ClientResult, FieldError};

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use reqwest::{Client as ReqwestClient, Method, StatusCode, header};
use serde_json::{Value, json};

/// HTTP client for the chatbot backend REST API
///
/// Every request carries a JSON content type; authenticated requests also
/// carry the session's bearer token. Collection endpoints use a trailing
/// slash (`/avisos/`), item endpoints append the record id (`/avisos/7`).
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    client: ReqwestClient,
}

impl ApiClient {
    /// Create an unauthenticated client
    ///
    /// # Arguments
    /// * `base_url` - Backend URL (e.g., "http://127.0.0.1:5005")
    /// * `timeout` - Per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> ClientResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(ClientError::from_reqwest)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
            client,
        })
    }

    /// Clone of this client carrying a bearer token
    pub fn with_token(&self, token: &str) -> Self {
        Self {
            base_url: self.base_url.clone(),
            token: Some(token.to_string()),
            client: self.client.clone(),
        }
    }

    /// Build a request with the JSON content type and, when present, the
    /// bearer token
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self
            .client
            .request(method, &url)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(ref token) = self.token {
            req = req.bearer_auth(token);
        }

        req
    }

    /// Execute a request and map the outcome onto the error taxonomy
    async fn execute(&self, req: reqwest::RequestBuilder, path: &str) -> ClientResult<Value> {
        let location = ErrorLocation::from(Location::caller());

        let response = req.send().await.map_err(ClientError::from_reqwest)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(ClientError::from_reqwest)?;

        let body: Value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        if status.is_success() {
            return Ok(body);
        }

        match status {
            StatusCode::UNAUTHORIZED => Err(ClientError::InvalidCredentials { location }),
            StatusCode::NOT_FOUND => Err(ClientError::EndpointNotFound {
                path: path.to_string(),
                location,
            }),
            StatusCode::UNPROCESSABLE_ENTITY => Err(ClientError::Validation {
                details: parse_validation_details(&body),
                location,
            }),
            other => Err(ClientError::Status {
                status: other.as_u16(),
                path: path.to_string(),
                location,
            }),
        }
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// POST /login with the staff credentials; no token is attached.
    ///
    /// A 200 response still fails with `IdentityResolution` when no id or
    /// token can be extracted from the payload.
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<AuthenticatedUser> {
        let body = json!({ "email": email, "password": password });
        let req = self.request(Method::POST, "/login").json(&body);
        let payload = self.execute(req, "/login").await?;

        AuthenticatedUser::from_login_payload(&payload, email)
    }

    /// GET a collection, normalizing both accepted response shapes:
    /// a raw array, or a wrapper object holding the array under the
    /// entity key or one of the conventional keys.
    pub async fn list(&self, path: &str, entity_key: &str) -> ClientResult<Vec<Value>> {
        let collection = format!("{}/", path);
        let req = self.request(Method::GET, &collection);
        let body = self.execute(req, &collection).await?;

        Ok(extract_records(body, entity_key))
    }

    /// POST a new record to a collection
    pub async fn create(&self, path: &str, payload: &Value) -> ClientResult<Value> {
        let collection = format!("{}/", path);
        let req = self.request(Method::POST, &collection).json(payload);
        self.execute(req, &collection).await
    }

    /// PUT an updated record
    pub async fn update(&self, path: &str, id: &str, payload: &Value) -> ClientResult<Value> {
        let item = format!("{}/{}", path, id);
        let req = self.request(Method::PUT, &item).json(payload);
        self.execute(req, &item).await
    }

    /// DELETE a record
    pub async fn delete(&self, path: &str, id: &str) -> ClientResult<Value> {
        let item = format!("{}/{}", path, id);
        let req = self.request(Method::DELETE, &item);
        self.execute(req, &item).await
    }
}

/// Wrapper keys scanned, in order, when a listing response is not a raw array
const LIST_WRAPPER_KEYS: [&str; 3] = ["data", "items", "results"];

/// Normalize a listing response to a plain sequence of records
pub(crate) fn extract_records(body: Value, entity_key: &str) -> Vec<Value> {
    match body {
        Value::Array(records) => records,
        Value::Object(mut map) => {
            if let Some(Value::Array(records)) = map.remove(entity_key) {
                return records;
            }
            for key in LIST_WRAPPER_KEYS {
                if let Some(Value::Array(records)) = map.remove(key) {
                    return records;
                }
            }
            log::warn!("listing response had no recognizable sequence, treating as empty");
            Vec::new()
        }
        _ => Vec::new(),
    }
}

/// Parse 422 bodies into field errors.
///
/// Accepts the FastAPI shape `{"detail": [{"loc": [..., field], "msg": ...}]}`
/// and the flat shape `{"errors": {field: [messages] | message}}`.
pub(crate) fn parse_validation_details(body: &Value) -> Vec<FieldError> {
    let mut details = Vec::new();

    if let Some(items) = body.get("detail").and_then(Value::as_array) {
        for item in items {
            let field = item
                .get("loc")
                .and_then(Value::as_array)
                .and_then(|loc| loc.last())
                .and_then(Value::as_str)
                .unwrap_or("corpo")
                .to_string();
            let message = item
                .get("msg")
                .and_then(Value::as_str)
                .unwrap_or("valor inválido")
                .to_string();
            details.push(FieldError { field, message });
        }
    }

    if let Some(errors) = body.get("errors").and_then(Value::as_object) {
        for (field, value) in errors {
            let message = match value {
                Value::Array(messages) => messages
                    .iter()
                    .filter_map(Value::as_str)
                    .collect::<Vec<_>>()
                    .join("; "),
                Value::String(message) => message.clone(),
                _ => String::from("valor inválido"),
            };
            details.push(FieldError {
                field: field.clone(),
                message,
            });
        }
    }

    details
}

//! Transport-neutral HTTP request/response shapes.
//!
//! The browser build executes these with gloo-net and the CLI with reqwest;
//! everything above this module only sees [`HttpTransport`].

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// HTTP verbs used by the content API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
}

impl HttpMethod {
    /// Upper-case verb.
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A file attached as a multipart form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartFile {
    /// Form field name.
    pub field: String,
    /// Original file name.
    pub file_name: String,
    /// Declared MIME type.
    pub mime: String,
    /// File contents.
    pub bytes: Vec<u8>,
}

/// Request body variants.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// No body.
    Empty,
    /// `application/json` body.
    Json(serde_json::Value),
    /// `multipart/form-data` body with one file part.
    Multipart(MultipartFile),
}

/// One fully-resolved outgoing request.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    /// Verb.
    pub method: HttpMethod,
    /// Absolute URL including the query string.
    pub url: String,
    /// Extra headers, `Authorization` included when a session exists.
    pub headers: Vec<(String, String)>,
    /// Body.
    pub body: RequestBody,
}

impl HttpRequest {
    /// Header lookup, case-insensitive on the name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Response as seen by the client: status plus raw body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw body bytes.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_slice(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Executes requests. Futures are `!Send`: the browser event loop and the
/// CLI main task are both single-threaded.
#[async_trait(?Send)]
pub trait HttpTransport {
    /// Send `request` and return whatever status came back. Only failures to
    /// obtain a response map to [`ApiError::Network`].
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

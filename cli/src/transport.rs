//! Native [`HttpTransport`] over reqwest.

use async_trait::async_trait;
use pressdesk_shared::{
    http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, RequestBody},
    ApiError,
};
use reqwest::{multipart, Method};

/// Blocking-free reqwest client shared by every command of one run.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Transport with reqwest's default client settings.
    pub fn new() -> Self {
        Self::default()
    }
}

fn method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

#[async_trait(?Send)]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = self.client.request(method(request.method), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        builder = match request.body {
            RequestBody::Empty => builder,
            // Content-Type is already among the headers.
            RequestBody::Json(value) => builder.body(value.to_string()),
            RequestBody::Multipart(file) => {
                let part = multipart::Part::bytes(file.bytes)
                    .file_name(file.file_name)
                    .mime_str(&file.mime)
                    .map_err(|e| ApiError::Encode(e.to_string()))?;
                builder.multipart(multipart::Form::new().part(file.field, part))
            },
        };

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {e}")))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {e}")))?;

        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}

//! The process-wide API client: base URL, bearer token slot and typed
//! endpoints.

use std::cell::RefCell;

use serde::{de::DeserializeOwned, Serialize};

use crate::{
    config::ClientConfig,
    error::ApiError,
    http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, MultipartFile, RequestBody},
    listing::ListQuery,
    models::{
        ApiErrorBody, Article, ArticleListResponse, ArticlePayload, Category,
        CategoryListResponse, CategoryPayload, LoginRequest, LoginResponse, Page,
        ProfileResponse, RegisterRequest, Role, UploadResponse,
    },
};

/// Multipart field the upload endpoint expects.
pub const UPLOAD_FIELD: &str = "image";

/// Typed access to the content API over any [`HttpTransport`].
///
/// The token slot is written only by
/// [`SessionStore`](crate::session::SessionStore); every request reads it.
pub struct ApiClient<T> {
    config: ClientConfig,
    transport: T,
    token: RefCell<Option<String>>,
}

impl<T: HttpTransport> ApiClient<T> {
    /// Client without a token.
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self {
            config,
            transport,
            token: RefCell::new(None),
        }
    }

    /// Configuration in use.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Whether a bearer token is attached.
    pub fn has_token(&self) -> bool {
        self.token.borrow().is_some()
    }

    pub(crate) fn set_token(&self, token: Option<String>) {
        *self.token.borrow_mut() = token.filter(|value| !value.trim().is_empty());
    }

    fn build_request(
        &self,
        method: HttpMethod,
        path: &str,
        query: &[(String, String)],
        body: RequestBody,
    ) -> HttpRequest {
        let mut url = self.config.endpoint(path);
        if !query.is_empty() {
            let encoded = query
                .iter()
                .map(|(key, value)| {
                    format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
                })
                .collect::<Vec<_>>()
                .join("&");
            url.push('?');
            url.push_str(&encoded);
        }

        let mut headers = Vec::new();
        if let RequestBody::Json(_) = body {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
        if let Some(token) = self.token.borrow().as_deref() {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }

        HttpRequest {
            method,
            url,
            headers,
            body,
        }
    }

    async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        query: &[(String, String)],
        body: RequestBody,
    ) -> Result<HttpResponse, ApiError> {
        let request = self.build_request(method, path, query, body);
        tracing::debug!(method = method.as_str(), url = %request.url, "api request");
        let response = self.transport.execute(request).await?;
        if response.is_success() {
            return Ok(response);
        }

        let message = serde_json::from_slice::<ApiErrorBody>(&response.body)
            .ok()
            .and_then(|body| body.message);
        tracing::debug!(method = method.as_str(), path, status = response.status, "api error");
        Err(ApiError::Status {
            status: response.status,
            message,
        })
    }

    async fn get_json<R: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<R, ApiError> {
        self.send(HttpMethod::Get, path, query, RequestBody::Empty)
            .await?
            .json()
    }

    async fn send_json<B: Serialize, R: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.send(method, path, &[], RequestBody::Json(value))
            .await?
            .json()
    }

    async fn send_json_unit<B: Serialize>(
        &self,
        method: HttpMethod,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.send(method, path, &[], RequestBody::Json(value)).await?;
        Ok(())
    }

    /// `POST /auth/login`.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.send_json(HttpMethod::Post, "/auth/login", &body).await
    }

    /// `GET /auth/profile`; requires a token.
    pub async fn profile(&self) -> Result<ProfileResponse, ApiError> {
        self.get_json("/auth/profile", &[]).await
    }

    /// `POST /auth/register`. The response body is ignored.
    pub async fn register(&self, username: &str, password: &str, role: Role) -> Result<(), ApiError> {
        let body = RegisterRequest {
            username: username.to_string(),
            password: password.to_string(),
            role,
        };
        self.send_json_unit(HttpMethod::Post, "/auth/register", &body).await
    }

    /// `GET /articles` with page, limit and non-empty filters.
    pub async fn list_articles(&self, query: &ListQuery) -> Result<Page<Article>, ApiError> {
        let response: ArticleListResponse =
            self.get_json("/articles", &query.to_query_pairs()).await?;
        Ok(response.into())
    }

    /// `GET /articles/:id`.
    pub async fn get_article(&self, id: &str) -> Result<Article, ApiError> {
        self.get_json(&format!("/articles/{}", urlencoding::encode(id)), &[]).await
    }

    /// `POST /articles`. The response body is ignored.
    pub async fn create_article(&self, payload: &ArticlePayload) -> Result<(), ApiError> {
        self.send_json_unit(HttpMethod::Post, "/articles", payload).await
    }

    /// `PUT /articles/:id`. The response body is ignored.
    pub async fn update_article(&self, id: &str, payload: &ArticlePayload) -> Result<(), ApiError> {
        self.send_json_unit(
            HttpMethod::Put,
            &format!("/articles/{}", urlencoding::encode(id)),
            payload,
        )
        .await
    }

    /// `DELETE /articles/:id`.
    pub async fn delete_article(&self, id: &str) -> Result<(), ApiError> {
        self.send(
            HttpMethod::Delete,
            &format!("/articles/{}", urlencoding::encode(id)),
            &[],
            RequestBody::Empty,
        )
        .await?;
        Ok(())
    }

    /// `GET /categories` with page, limit and the optional `search` filter.
    pub async fn list_categories(&self, query: &ListQuery) -> Result<Page<Category>, ApiError> {
        let response: CategoryListResponse =
            self.get_json("/categories", &query.to_query_pairs()).await?;
        Ok(response.into_page(query.limit))
    }

    /// `GET /categories/:id`.
    pub async fn get_category(&self, id: &str) -> Result<Category, ApiError> {
        self.get_json(&format!("/categories/{}", urlencoding::encode(id)), &[]).await
    }

    /// `POST /categories`.
    pub async fn create_category(&self, name: &str) -> Result<(), ApiError> {
        let body = CategoryPayload {
            name: name.to_string(),
        };
        self.send_json_unit(HttpMethod::Post, "/categories", &body).await
    }

    /// `PUT /categories/:id`.
    pub async fn update_category(&self, id: &str, name: &str) -> Result<(), ApiError> {
        let body = CategoryPayload {
            name: name.to_string(),
        };
        self.send_json_unit(
            HttpMethod::Put,
            &format!("/categories/{}", urlencoding::encode(id)),
            &body,
        )
        .await
    }

    /// `DELETE /categories/:id`.
    pub async fn delete_category(&self, id: &str) -> Result<(), ApiError> {
        self.send(
            HttpMethod::Delete,
            &format!("/categories/{}", urlencoding::encode(id)),
            &[],
            RequestBody::Empty,
        )
        .await?;
        Ok(())
    }

    /// `POST /upload` as multipart field [`UPLOAD_FIELD`]; returns the stored
    /// image URL.
    pub async fn upload_image(
        &self,
        file_name: &str,
        mime: &str,
        bytes: Vec<u8>,
    ) -> Result<String, ApiError> {
        let body = RequestBody::Multipart(MultipartFile {
            field: UPLOAD_FIELD.to_string(),
            file_name: file_name.to_string(),
            mime: mime.to_string(),
            bytes,
        });
        let response: UploadResponse =
            self.send(HttpMethod::Post, "/upload", &[], body).await?.json()?;
        Ok(response.image_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{json_response, ScriptedTransport};

    fn client() -> ApiClient<ScriptedTransport> {
        ApiClient::new(ClientConfig::new("http://api.test/api"), ScriptedTransport::default())
    }

    #[tokio::test]
    async fn bearer_header_follows_token_slot() {
        let client = client();
        client.transport().push(json_response(200, r#"{"username":"ada","role":"Admin"}"#));
        client.transport().push(json_response(200, r#"{"username":"ada","role":"Admin"}"#));

        client.profile().await.expect("anonymous profile call");
        client.set_token(Some("tok-1".to_string()));
        client.profile().await.expect("authenticated profile call");

        let sent = client.transport().requests();
        assert_eq!(sent[0].header("Authorization"), None);
        assert_eq!(sent[1].header("Authorization"), Some("Bearer tok-1"));
    }

    #[tokio::test]
    async fn list_articles_sends_only_non_empty_filters() {
        let client = client();
        client
            .transport()
            .push(json_response(200, r#"{"data":[],"page":1,"limit":10,"total":0}"#));

        let mut query = ListQuery::new(2, 10);
        query.filters.insert("title".to_string(), "rust & wasm".to_string());
        query.filters.insert("category".to_string(), String::new());
        client.list_articles(&query).await.expect("list articles");

        let sent = client.transport().requests();
        assert_eq!(sent[0].url, "http://api.test/api/articles?page=2&limit=10&title=rust%20%26%20wasm");
    }

    #[tokio::test]
    async fn error_body_message_is_captured() {
        let client = client();
        client
            .transport()
            .push(json_response(409, r#"{"message":"Category name already used"}"#));

        let err = client.create_category("Tech").await.expect_err("conflict");
        assert_eq!(err.message_or("Failed to create category"), "Category name already used");
    }

    #[tokio::test]
    async fn non_json_error_body_falls_back() {
        let client = client();
        client.transport().push(HttpResponse {
            status: 502,
            body: b"<html>bad gateway</html>".to_vec(),
        });

        let err = client.delete_article("a1").await.expect_err("bad gateway");
        assert_eq!(
            err,
            ApiError::Status {
                status: 502,
                message: None
            }
        );
        assert_eq!(err.message_or("Failed to delete article"), "Failed to delete article");
    }

    #[tokio::test]
    async fn upload_uses_multipart_image_field() {
        let client = client();
        client
            .transport()
            .push(json_response(200, r#"{"imageUrl":"https://cdn.test/cover.png"}"#));

        let url = client
            .upload_image("cover.png", "image/png", vec![1, 2, 3])
            .await
            .expect("upload");
        assert_eq!(url, "https://cdn.test/cover.png");

        let sent = client.transport().requests();
        match &sent[0].body {
            RequestBody::Multipart(file) => {
                assert_eq!(file.field, "image");
                assert_eq!(file.mime, "image/png");
            },
            other => panic!("expected multipart body, got {other:?}"),
        }
    }
}

//! Wire models exchanged with the content API.

use std::fmt;

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Role attached to an authenticated principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    /// Manages articles and categories.
    Admin,
    /// Reads published articles.
    User,
}

impl Role {
    /// Wire spelling of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::User => "User",
        }
    }

    /// Lenient parse used for profile responses; unknown spellings yield
    /// `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            value if value.eq_ignore_ascii_case("admin") => Some(Role::Admin),
            value if value.eq_ignore_ascii_case("user") => Some(Role::User),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated identity of the current session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Login name.
    pub username: String,
    /// Role granted by the server.
    pub role: Role,
}

/// Raw `GET /auth/profile` body. Both fields are optional so that the login
/// flow can fall back field by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProfileResponse {
    /// Username echoed by the server.
    #[serde(default)]
    pub username: Option<String>,
    /// Role spelling echoed by the server.
    #[serde(default)]
    pub role: Option<String>,
}

/// `POST /auth/login` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    /// Login name.
    pub username: String,
    /// Plain password, sent over TLS only.
    pub password: String,
}

/// `POST /auth/login` response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for later requests.
    pub token: String,
}

/// `POST /auth/register` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    /// Login name.
    pub username: String,
    /// Plain password.
    pub password: String,
    /// Requested role.
    pub role: Role,
}

/// Author summary embedded in an article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleAuthor {
    /// Author login name.
    #[serde(default)]
    pub username: String,
}

/// Category summary embedded in an article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    /// Category id.
    #[serde(default)]
    pub id: String,
    /// Category display name.
    #[serde(default)]
    pub name: String,
}

/// Article as served by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Server-assigned id.
    pub id: String,
    /// Headline.
    pub title: String,
    /// HTML produced by the rich-text editor.
    pub content: String,
    /// Owning category id.
    pub category_id: String,
    /// Cover image, if one was uploaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Creation timestamp as sent by the server.
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp as sent by the server.
    #[serde(default)]
    pub updated_at: String,
    /// Author summary.
    #[serde(default)]
    pub user: Option<ArticleAuthor>,
    /// Category summary.
    #[serde(default)]
    pub category: Option<CategorySummary>,
}

impl Article {
    /// Category label, falling back to `"Uncategorized"`.
    pub fn category_name(&self) -> &str {
        self.category
            .as_ref()
            .map(|category| category.name.as_str())
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(UNCATEGORIZED)
    }

    /// Author label, empty when the server omitted it.
    pub fn author_name(&self) -> &str {
        self.user
            .as_ref()
            .map(|user| user.username.as_str())
            .unwrap_or_default()
    }
}

/// Label used when an article has no resolvable category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Category as served by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Server-assigned id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Creation timestamp as sent by the server.
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp as sent by the server.
    #[serde(default)]
    pub updated_at: String,
}

/// `GET /articles` response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArticleListResponse {
    /// Articles of the requested page.
    #[serde(default)]
    pub data: Vec<Article>,
    /// Page echoed (and possibly corrected) by the server.
    pub page: u32,
    /// Limit echoed by the server.
    pub limit: u32,
    /// Total number of matching articles.
    pub total: u64,
}

/// `GET /categories` response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryListResponse {
    /// Categories of the requested page.
    #[serde(default)]
    pub data: Vec<Category>,
    /// Page echoed by the server.
    pub current_page: u32,
    /// Total number of matching categories.
    pub total_data: u64,
    /// Page count computed by the server.
    #[serde(default)]
    pub total_pages: u32,
}

/// Create/update body for `POST /articles` and `PUT /articles/:id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePayload {
    /// Headline.
    pub title: String,
    /// HTML body.
    pub content: String,
    /// Owning category id.
    pub category_id: String,
    /// Omitted from the body when no image is attached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Create/update body for categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryPayload {
    /// Category display name.
    pub name: String,
}

/// `POST /upload` response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// Public URL of the stored image.
    pub image_url: String,
}

/// Error body returned with non-2xx statuses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    /// Human-readable reason.
    #[serde(default)]
    pub message: Option<String>,
}

/// One page of a listing, normalized across endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Rows of this page.
    pub items: Vec<T>,
    /// One-based page number.
    pub page: u32,
    /// Page size.
    pub limit: u32,
    /// Total rows across all pages.
    pub total: u64,
}

impl From<ArticleListResponse> for Page<Article> {
    fn from(response: ArticleListResponse) -> Self {
        Page {
            items: response.data,
            page: response.page,
            limit: response.limit,
            total: response.total,
        }
    }
}

impl CategoryListResponse {
    /// The category endpoint does not echo `limit`; the requested one is
    /// kept.
    pub fn into_page(self, requested_limit: u32) -> Page<Category> {
        Page {
            items: self.data,
            page: self.current_page,
            limit: requested_limit,
            total: self.total_data,
        }
    }
}

/// Render a server timestamp as `Mon D, YYYY`. Unparseable input is
/// returned unchanged.
pub fn display_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return parsed.format("%b %-d, %Y").to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return parsed.format("%b %-d, %Y").to_string();
    }
    trimmed.to_string()
}

/// Pick up to `max` other articles sharing `current`'s category.
pub fn related_articles(current: &Article, pool: &[Article], max: usize) -> Vec<Article> {
    if current.category_id.trim().is_empty() {
        return Vec::new();
    }
    pool.iter()
        .filter(|candidate| {
            candidate.category_id == current.category_id && candidate.id != current.id
        })
        .take(max)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: &str, category_id: &str) -> Article {
        Article {
            id: id.to_string(),
            title: format!("Article {id}"),
            content: "<p>body</p>".to_string(),
            category_id: category_id.to_string(),
            image_url: None,
            created_at: String::new(),
            updated_at: String::new(),
            user: None,
            category: None,
        }
    }

    #[test]
    fn article_list_response_decodes_camel_case_fields() {
        let body = r#"{
            "data": [{
                "id": "a1",
                "title": "Rust in production",
                "content": "<p>hi</p>",
                "categoryId": "c1",
                "imageUrl": "https://cdn.example.com/a1.png",
                "createdAt": "2024-05-01T08:00:00.000Z",
                "updatedAt": "2024-05-02T08:00:00.000Z",
                "user": {"username": "ada"},
                "category": {"id": "c1", "name": "Tech"}
            }],
            "page": 2,
            "limit": 10,
            "total": 11
        }"#;
        let decoded: ArticleListResponse = serde_json::from_str(body).expect("decode list");
        let page: Page<Article> = decoded.into();
        assert_eq!(page.page, 2);
        assert_eq!(page.total, 11);
        assert_eq!(page.items[0].category_name(), "Tech");
        assert_eq!(page.items[0].author_name(), "ada");
        assert_eq!(page.items[0].image_url.as_deref(), Some("https://cdn.example.com/a1.png"));
    }

    #[test]
    fn category_list_keeps_requested_limit() {
        let body = r#"{"data":[],"currentPage":3,"totalData":25,"totalPages":3}"#;
        let decoded: CategoryListResponse = serde_json::from_str(body).expect("decode categories");
        let page = decoded.into_page(10);
        assert_eq!((page.page, page.limit, page.total), (3, 10, 25));
    }

    #[test]
    fn payload_omits_missing_image_url() {
        let payload = ArticlePayload {
            title: "A title long enough".to_string(),
            content: "x".repeat(50),
            category_id: "c1".to_string(),
            image_url: None,
        };
        let json = serde_json::to_value(&payload).expect("encode payload");
        assert!(json.get("imageUrl").is_none());
        assert_eq!(json["categoryId"], "c1");
    }

    #[test]
    fn role_parse_is_case_insensitive() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse(" User "), Some(Role::User));
        assert_eq!(Role::parse("editor"), None);
    }

    #[test]
    fn display_date_formats_rfc3339_and_passes_through_garbage() {
        assert_eq!(display_date("2024-05-01T08:00:00.000Z"), "May 1, 2024");
        assert_eq!(display_date("yesterday"), "yesterday");
    }

    #[test]
    fn related_articles_excludes_self_and_caps_count() {
        let current = article("a1", "c1");
        let pool = vec![
            article("a1", "c1"),
            article("a2", "c1"),
            article("a3", "c2"),
            article("a4", "c1"),
            article("a5", "c1"),
            article("a6", "c1"),
        ];
        let related = related_articles(&current, &pool, 3);
        let ids: Vec<_> = related.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a2", "a4", "a5"]);
    }
}

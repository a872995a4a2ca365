pub mod admin_articles;
pub mod article_detail;
pub mod article_editor;
pub mod categories;
pub mod category_editor;
pub mod login;
pub mod not_found;
pub mod register;
pub mod user_articles;

/// Query-string filter keys of the article lists.
pub const ARTICLE_FILTERS: &[&str] = &[FILTER_TITLE, FILTER_CATEGORY];
pub const FILTER_TITLE: &str = "title";
pub const FILTER_CATEGORY: &str = "category";

/// Query-string filter keys of the category list.
pub const CATEGORY_FILTERS: &[&str] = &[FILTER_SEARCH];
pub const FILTER_SEARCH: &str = "search";

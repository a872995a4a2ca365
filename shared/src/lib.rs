//! PressDesk client core.
//!
//! Everything here is target-independent and compiles for both `wasm32`
//! and native: the REST adapter behind [`http::HttpTransport`], the
//! [`session::SessionStore`], the role [`guard`], the debounced
//! [`listing::ListController`] and the form controllers. The Yew frontend
//! and the `pd-cli` binary supply transports and token stores.

pub mod article_form;
pub mod category_form;
pub mod client;
pub mod config;
pub mod credentials;
pub mod debounce;
pub mod error;
pub mod guard;
pub mod http;
pub mod listing;
pub mod models;
pub mod session;
pub mod storage;

#[cfg(test)]
mod testing;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::{ActionFailure, ApiError, FieldErrors};
pub use models::{Article, Category, Page, Principal, Role};
pub use session::{Landing, SessionState, SessionStatus, SessionStore};
pub use storage::{MemoryTokenStore, StorageError, TokenStore};

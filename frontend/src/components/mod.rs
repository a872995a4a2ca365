// Reusable components live here.

pub mod admin_menu;
pub mod article_card;
pub mod article_filters;
pub mod article_preview;
pub mod article_table;
pub mod auth_form;
pub mod categories_table;
pub mod confirm_dialog;
pub mod header;
pub mod loading_spinner;
pub mod notification;
pub mod pagination;
pub mod protected_route;
pub mod raw_html;

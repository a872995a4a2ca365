//! Configuration for the frontend application

use pressdesk_shared::ClientConfig;

// API base URL - 编译时从环境变量读取，默认本地开发地址
pub const API_BASE: &str = match option_env!("PRESSDESK_API_BASE") {
    Some(url) => url,
    None => "http://localhost:5000/api",
};

/// Placeholder shown when an article has no cover image.
pub const PLACEHOLDER_IMAGE: &str = "/static/placeholder-cover.svg";

/// Notification banners close themselves after this many milliseconds.
pub const NOTIFICATION_DISMISS_MS: u32 = 3000;

pub fn client_config() -> ClientConfig {
    ClientConfig::new(API_BASE)
}

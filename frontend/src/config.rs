use once_cell::sync::Lazy;
use web_sys::window;

static API_BASE_URL: Lazy<String> = Lazy::new(resolve_api_base_url);

fn resolve_api_base_url() -> String {
    if let Some(url) = option_env!("MINIAPP_API_URL") {
        return url.trim_end_matches('/').to_string();
    }

    // Served by the API host itself: relative URLs through the page origin.
    if let Some(window) = window() {
        if let Ok(host) = window.location().host() {
            let protocol = window.location().protocol().unwrap_or_else(|_| "https:".to_string());
            return format!("{}//{}", protocol, host);
        }
    }

    "http://127.0.0.1:5000".to_string()
}

pub fn get_api_base_url() -> String {
    API_BASE_URL.clone()
}

/// Bot the referral deep links point at. Server settings win when present.
pub fn bot_username(from_settings: Option<&str>) -> String {
    from_settings
        .filter(|s| !s.is_empty())
        .unwrap_or(option_env!("MINIAPP_BOT_USERNAME").unwrap_or("LightingSatsBot"))
        .trim_start_matches('@')
        .to_string()
}

pub fn adsgram_block_id(from_settings: Option<&str>) -> String {
    from_settings
        .filter(|s| !s.is_empty())
        .unwrap_or(option_env!("MINIAPP_ADSGRAM_BLOCK_ID").unwrap_or("int-0000"))
        .to_string()
}

pub const SUPPORT_URL: &str = match option_env!("MINIAPP_SUPPORT_URL") {
    Some(url) => url,
    None => "https://t.me/szxzyz",
};

pub const CHANNEL_URL: &str = match option_env!("MINIAPP_CHANNEL_URL") {
    Some(url) => url,
    None => "https://t.me/LightingSats",
};

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use validator::{ValidationError, ValidationErrors};

pub use validator::Validate;

static TON_ADDRESS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(UQ|EQ)[A-Za-z0-9_-]{46}$").unwrap());
static USDT_ADDRESS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^0x[a-fA-F0-9]{40}$").unwrap());
static TELEGRAM_USERNAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@?[A-Za-z0-9_]{5,32}$").unwrap());
static TRON_ADDRESS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^T[1-9A-HJ-NP-Za-km-z]{33}$").unwrap());
static LITECOIN_ADDRESS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([LM3][a-km-zA-HJ-NP-Z1-9]{26,33}|ltc1[a-z0-9]{39,59})$").unwrap());
static BITCOIN_CASH_ADDRESS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^((bitcoincash:)?[qp][a-z0-9]{41}|[13][a-km-zA-HJ-NP-Z1-9]{25,34})$").unwrap());
static DASH_ADDRESS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^X[1-9A-HJ-NP-Za-km-z]{33}$").unwrap());
static DOGECOIN_ADDRESS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^D[5-9A-HJ-NP-U][1-9A-HJ-NP-Za-km-z]{32}$").unwrap());
static RIPPLE_ADDRESS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^r[1-9A-HJ-NP-Za-km-z]{24,34}$").unwrap());
static CRYPTO_BOT_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{5,15}$").unwrap());
static PROMO_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z0-9]{4,20}$").unwrap());
static TELEGRAM_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https://(t\.me|telegram\.me)/[A-Za-z0-9_+/?=&-]{3,}$").unwrap());
static HTTP_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").unwrap());

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

/// Human readable text for a failed rule, falling back to the code.
pub fn error_message(err: &ValidationError) -> String {
    err.message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| err.code.to_string())
}

/// First failed rule of a derived `Validate`, ordered by field name so the
/// same form always reports the same message.
pub fn first_error_message(errors: &ValidationErrors) -> String {
    let fields = errors.field_errors();
    let mut names: Vec<_> = fields.keys().copied().collect();
    names.sort_unstable();
    names
        .first()
        .and_then(|name| fields.get(name))
        .and_then(|errs| errs.first())
        .map(error_message)
        .unwrap_or_else(|| "Invalid input".to_string())
}

pub fn validate_ton_address(address: &str) -> Result<(), ValidationError> {
    if !TON_ADDRESS.is_match(address.trim()) {
        return Err(error(
            "invalid_ton_address",
            "TON address must start with UQ or EQ and be 48 characters long",
        ));
    }
    Ok(())
}

pub fn validate_usdt_address(address: &str) -> Result<(), ValidationError> {
    if !USDT_ADDRESS.is_match(address.trim()) {
        return Err(error(
            "invalid_usdt_address",
            "USDT address must be 0x followed by 40 hex characters",
        ));
    }
    Ok(())
}

pub fn validate_telegram_username(username: &str) -> Result<(), ValidationError> {
    if !TELEGRAM_USERNAME.is_match(username.trim()) {
        return Err(error(
            "invalid_telegram_username",
            "Enter a Telegram username like @username (5-32 letters, digits or _)",
        ));
    }
    Ok(())
}

pub fn validate_tron_address(address: &str) -> Result<(), ValidationError> {
    if !TRON_ADDRESS.is_match(address.trim()) {
        return Err(error("invalid_tron_address", "Invalid Tron address"));
    }
    Ok(())
}

pub fn validate_litecoin_address(address: &str) -> Result<(), ValidationError> {
    if !LITECOIN_ADDRESS.is_match(address.trim()) {
        return Err(error("invalid_litecoin_address", "Invalid Litecoin address"));
    }
    Ok(())
}

pub fn validate_bitcoin_cash_address(address: &str) -> Result<(), ValidationError> {
    if !BITCOIN_CASH_ADDRESS.is_match(address.trim()) {
        return Err(error("invalid_bch_address", "Invalid Bitcoin Cash address"));
    }
    Ok(())
}

pub fn validate_dash_address(address: &str) -> Result<(), ValidationError> {
    if !DASH_ADDRESS.is_match(address.trim()) {
        return Err(error("invalid_dash_address", "Invalid Dash address"));
    }
    Ok(())
}

pub fn validate_dogecoin_address(address: &str) -> Result<(), ValidationError> {
    if !DOGECOIN_ADDRESS.is_match(address.trim()) {
        return Err(error("invalid_dogecoin_address", "Invalid Dogecoin address"));
    }
    Ok(())
}

pub fn validate_ripple_address(address: &str) -> Result<(), ValidationError> {
    if !RIPPLE_ADDRESS.is_match(address.trim()) {
        return Err(error("invalid_ripple_address", "Invalid Ripple address"));
    }
    Ok(())
}

pub fn validate_crypto_bot_id(id: &str) -> Result<(), ValidationError> {
    if !CRYPTO_BOT_ID.is_match(id.trim()) {
        return Err(error("invalid_crypto_bot_id", "Enter your numeric Telegram ID for Crypto Bot"));
    }
    Ok(())
}

pub fn validate_promo_code(code: &str) -> Result<(), ValidationError> {
    if !PROMO_CODE.is_match(code) {
        return Err(error(
            "invalid_promo_code",
            "Promo code must be 4-20 uppercase letters or digits",
        ));
    }
    Ok(())
}

pub fn validate_telegram_link(link: &str) -> Result<(), ValidationError> {
    if !TELEGRAM_LINK.is_match(link.trim()) {
        return Err(error("invalid_telegram_link", "Link must look like https://t.me/yourchannel"));
    }
    Ok(())
}

pub fn validate_http_url(link: &str) -> Result<(), ValidationError> {
    if !HTTP_URL.is_match(link.trim()) {
        return Err(error("invalid_url", "Enter a valid http(s) link"));
    }
    Ok(())
}

pub fn validate_task_title(title: &str) -> Result<(), ValidationError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(error("empty_title", "Title is required"));
    }
    if title.chars().count() > crate::constants::MAX_TASK_TITLE_LEN {
        return Err(error("title_too_long", "Title must be at most 100 characters"));
    }
    Ok(())
}

/// Parses a user-typed integer, tolerating spaces and thousands separators.
pub fn parse_count(input: &str) -> Option<u32> {
    let cleaned: String = input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',' && *c != '_')
        .collect();
    cleaned.parse::<u32>().ok()
}

pub fn parse_amount(input: &str) -> Option<f64> {
    input
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TON: &str = "UQBvW8Z5huBkMJYdnfAEM5JqTNkuWX3diqYENkWsIL0XggGG";

    #[test]
    fn ton_addresses() {
        assert_eq!(TON.len(), 48);
        assert!(validate_ton_address(TON).is_ok());
        assert!(validate_ton_address(&TON.replacen("UQ", "EQ", 1)).is_ok());
        assert!(validate_ton_address(&TON.replacen("UQ", "XQ", 1)).is_err());
        assert!(validate_ton_address(&TON[..47]).is_err());
        assert!(validate_ton_address("UQ+vW8Z5huBkMJYdnfAEM5JqTNkuWX3diqYENkWsIL0Xgg/G").is_err());
    }

    #[test]
    fn usdt_addresses() {
        assert!(validate_usdt_address("0x52908400098527886E0F7030069857D2E4169EE7").is_ok());
        assert!(validate_usdt_address("52908400098527886E0F7030069857D2E4169EE7").is_err());
        assert!(validate_usdt_address("0x52908400098527886E0F7030069857D2E4169EZ").is_err());
        let err = validate_usdt_address("0x1234").unwrap_err();
        assert_eq!(err.code, "invalid_usdt_address");
        assert!(error_message(&err).contains("40 hex"));
    }

    #[test]
    fn telegram_usernames_and_links() {
        assert!(validate_telegram_username("@lightning_sats").is_ok());
        assert!(validate_telegram_username("abcd").is_err());
        assert!(validate_telegram_link("https://t.me/LightingSats").is_ok());
        assert!(validate_telegram_link("http://t.me/LightingSats").is_err());
        assert!(validate_http_url("https://example.com/page?x=1").is_ok());
        assert!(validate_http_url("example.com").is_err());
    }

    #[test]
    fn other_chains() {
        assert!(validate_tron_address("TJRabPrwbZy45sbavfcjinPJC18kjpRTv8").is_ok());
        assert!(validate_ripple_address("rEb8TK3gBgk5auZkwc6sHnwrGVJH8DuaLh").is_ok());
        assert!(validate_dogecoin_address("DH5yaieqoZN36fDVciNyRueRGvGLR3mr7L").is_ok());
        assert!(validate_tron_address("0x52908400098527886E0F7030069857D2E4169EE7").is_err());
    }

    #[test]
    fn promo_codes_and_titles() {
        assert!(validate_promo_code("WELCOME2024").is_ok());
        assert!(validate_promo_code("abc").is_err());
        assert!(validate_promo_code("lower1").is_err());
        assert!(validate_task_title("  ").is_err());
        assert!(validate_task_title(&"x".repeat(101)).is_err());
        assert!(validate_task_title("Join our channel").is_ok());
    }

    #[test]
    fn first_error_is_stable() {
        let mut errors = ValidationErrors::new();
        errors.add("usage_limit", error("range", "Usage limit must be at least 1"));
        errors.add("code", error("invalid_promo_code", "Bad code"));
        assert_eq!(first_error_message(&errors), "Bad code");
        assert_eq!(first_error_message(&ValidationErrors::new()), "Invalid input");
    }

    #[test]
    fn number_parsing() {
        assert_eq!(parse_count("1,000"), Some(1000));
        assert_eq!(parse_count(" 500 "), Some(500));
        assert_eq!(parse_count("-5"), None);
        assert_eq!(parse_amount("2,5"), Some(2.5));
        assert_eq!(parse_amount("NaN"), None);
    }
}

use serde::Deserialize;
use std::fmt;
use crate::constants::{AUTH_ERROR, NETWORK_ERROR};

/// Body the backend attaches to non-2xx responses.
#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default, alias = "dailyLimit")]
    pub limit: Option<u32>,
}

impl ErrorBody {
    pub fn parse(text: &str) -> Self {
        serde_json::from_str(text).unwrap_or_default()
    }

    fn text(&self) -> Option<String> {
        self.message
            .clone()
            .or_else(|| self.error.clone())
            .filter(|m| !m.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    Unauthorized,
    RateLimited { limit: Option<u32>, message: Option<String> },
    Server { status: u16, message: Option<String> },
    Network(String),
    Decode(String),
}

impl ApiError {
    /// Classifies a failed response by status code only.
    pub fn from_status(status: u16, body: &ErrorBody) -> Self {
        match status {
            401 | 403 => ApiError::Unauthorized,
            429 => ApiError::RateLimited {
                limit: body.limit,
                message: body.text(),
            },
            _ => ApiError::Server {
                status,
                message: body.text(),
            },
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, ApiError::RateLimited { .. })
    }

    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unauthorized => AUTH_ERROR.to_string(),
            ApiError::RateLimited { limit: Some(limit), .. } => {
                format!("Daily limit reached ({}/{}). Come back tomorrow!", limit, limit)
            }
            ApiError::RateLimited { limit: None, message } => message
                .clone()
                .unwrap_or_else(|| "Daily limit reached. Come back tomorrow!".to_string()),
            ApiError::Server { message: Some(message), .. } => message.clone(),
            ApiError::Server { status, message: None } => {
                format!("Request failed ({})", status)
            }
            ApiError::Network(_) | ApiError::Decode(_) => NETWORK_ERROR.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e) => write!(f, "network error: {}", e),
            ApiError::Decode(e) => write!(f, "invalid response: {}", e),
            other => f.write_str(&other.user_message()),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_statuses_map_to_unauthorized() {
        let body = ErrorBody::parse(r#"{"message":"bad init data"}"#);
        assert_eq!(ApiError::from_status(401, &body), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(403, &body), ApiError::Unauthorized);
        assert_eq!(ApiError::Unauthorized.user_message(), AUTH_ERROR);
    }

    #[test]
    fn rate_limit_embeds_limit() {
        let body = ErrorBody::parse(r#"{"message":"Daily limit reached","limit":50}"#);
        let err = ApiError::from_status(429, &body);
        assert!(err.is_rate_limited());
        assert_eq!(err.user_message(), "Daily limit reached (50/50). Come back tomorrow!");
    }

    #[test]
    fn server_message_is_surfaced() {
        let body = ErrorBody::parse(r#"{"error":"Task not found"}"#);
        let err = ApiError::from_status(404, &body);
        assert_eq!(err.user_message(), "Task not found");

        let err = ApiError::from_status(500, &ErrorBody::parse("<html>oops</html>"));
        assert_eq!(err.user_message(), "Request failed (500)");
    }

    #[test]
    fn network_failures_use_generic_text() {
        let err = ApiError::Network("TypeError: Failed to fetch".into());
        assert_eq!(err.user_message(), NETWORK_ERROR);
    }
}

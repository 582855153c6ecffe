use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::validate_promo_code;

#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreatePromoCodeRequest {
    #[validate(custom = "validate_promo_code")]
    pub code: String,
    #[validate(range(min = 0.01, message = "Reward must be greater than zero"))]
    pub reward_amount: f64,
    pub reward_currency: String,
    #[validate(range(min = 1, message = "Usage limit must be at least 1"))]
    pub usage_limit: u32,
    #[validate(range(min = 1, message = "Per-user limit must be at least 1"))]
    pub per_user_limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq)]
pub struct RedeemPromoCodeRequest {
    #[validate(custom = "validate_promo_code")]
    pub code: String,
}

impl RedeemPromoCodeRequest {
    pub fn new(input: &str) -> Self {
        Self {
            code: normalize_code(input),
        }
    }
}

pub fn normalize_code(input: &str) -> String {
    input.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreatePromoCodeRequest {
        CreatePromoCodeRequest {
            code: "LAUNCH100".into(),
            reward_amount: 100.0,
            reward_currency: "PAD".into(),
            usage_limit: 500,
            per_user_limit: 1,
            expires_at: None,
        }
    }

    #[test]
    fn create_request_rules() {
        assert!(request().validate().is_ok());

        let errors = CreatePromoCodeRequest { usage_limit: 0, ..request() }
            .validate()
            .unwrap_err();
        assert!(errors.field_errors().contains_key("usage_limit"));

        let errors = CreatePromoCodeRequest { reward_amount: 0.0, ..request() }
            .validate()
            .unwrap_err();
        assert!(errors.field_errors().contains_key("reward_amount"));

        assert!(CreatePromoCodeRequest { code: "no".into(), ..request() }.validate().is_err());
    }

    #[test]
    fn redeem_normalizes_input() {
        let req = RedeemPromoCodeRequest::new("  welcome2024 ");
        assert_eq!(req.code, "WELCOME2024");
        assert!(req.validate().is_ok());
        assert!(RedeemPromoCodeRequest::new("a b").validate().is_err());
    }
}

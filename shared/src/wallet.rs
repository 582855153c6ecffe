use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::format::format_pad;
use crate::models::WalletDetails;
use crate::payment::PaymentMethod;
use crate::validation::*;

#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SaveTonWalletRequest {
    #[validate(custom = "validate_ton_address")]
    pub ton_wallet_address: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SaveUsdtWalletRequest {
    #[validate(custom = "validate_usdt_address")]
    pub usdt_wallet_address: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SaveStarsWalletRequest {
    #[validate(custom = "validate_telegram_username")]
    pub telegram_username: String,
}

/// Bulk save used by the onboarding form; only filled fields are sent.
#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SaveWalletRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom = "validate_ton_address")]
    pub ton_wallet_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom = "validate_usdt_address")]
    pub usdt_wallet_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom = "validate_telegram_username")]
    pub telegram_stars_username: Option<String>,
}

impl SaveWalletRequest {
    pub fn from_inputs(ton: &str, usdt: &str, stars: &str) -> Self {
        let filled = |s: &str| Some(s.trim().to_string()).filter(|s| !s.is_empty());
        Self {
            ton_wallet_address: filled(ton),
            usdt_wallet_address: filled(usdt),
            telegram_stars_username: filled(stars).map(normalize_username),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ton_wallet_address.is_none()
            && self.usdt_wallet_address.is_none()
            && self.telegram_stars_username.is_none()
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChangeWalletRequest {
    pub method: PaymentMethod,
    pub new_address: String,
}

impl ChangeWalletRequest {
    /// Changing a saved wallet costs `fee` from the point balance.
    pub fn validate(&self, balance: f64, fee: f64) -> Result<(), ValidationError> {
        if !self.method.uses_saved_wallet() {
            let mut err = ValidationError::new("unsupported_method");
            err.message = Some("This payout method has no saved wallet".into());
            return Err(err);
        }
        self.method.validate_address(&self.new_address)?;
        if balance < fee {
            let mut err = ValidationError::new("insufficient_balance");
            err.message = Some(
                format!("Changing a wallet costs {} PAD", format_pad(fee)).into(),
            );
            return Err(err);
        }
        Ok(())
    }
}

pub fn normalize_username(username: String) -> String {
    if username.starts_with('@') {
        username
    } else {
        format!("@{}", username)
    }
}

/// Which of the three wallets are still missing.
pub fn missing_wallets(details: &WalletDetails) -> Vec<PaymentMethod> {
    [PaymentMethod::Ton, PaymentMethod::UsdtBep20, PaymentMethod::TelegramStars]
        .into_iter()
        .filter(|m| m.saved_address(details).is_none())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TON: &str = "EQBvW8Z5huBkMJYdnfAEM5JqTNkuWX3diqYENkWsIL0XggGG";

    #[test]
    fn single_wallet_requests_validate() {
        assert!(SaveTonWalletRequest { ton_wallet_address: TON.into() }.validate().is_ok());
        let bad = SaveUsdtWalletRequest { usdt_wallet_address: "0xZZ".into() };
        let errors = bad.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("usdt_wallet_address"));
        assert!(SaveStarsWalletRequest { telegram_username: "@ab".into() }.validate().is_err());
    }

    #[test]
    fn bulk_save_skips_empty_fields() {
        let req = SaveWalletRequest::from_inputs(TON, "  ", "satoshi_fan");
        assert!(req.validate().is_ok());
        assert_eq!(req.telegram_stars_username.as_deref(), Some("@satoshi_fan"));
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("usdtWalletAddress").is_none());
        assert!(SaveWalletRequest::from_inputs("", "", "").is_empty());

        let bad = SaveWalletRequest::from_inputs("UQshort", "", "");
        assert!(bad.validate().is_err());
    }

    #[test]
    fn change_wallet_requires_fee() {
        let req = ChangeWalletRequest { method: PaymentMethod::Ton, new_address: TON.into() };
        assert!(req.validate(5000.0, 5000.0).is_ok());
        let err = req.validate(4999.0, 5000.0).unwrap_err();
        assert_eq!(err.code, "insufficient_balance");
        let tron = ChangeWalletRequest { method: PaymentMethod::Tron, new_address: TON.into() };
        assert!(tron.validate(1e9, 0.0).is_err());
    }

    #[test]
    fn lists_missing_wallets() {
        let details = WalletDetails {
            usdt_wallet_address: Some("0x52908400098527886E0F7030069857D2E4169EE7".into()),
            ..Default::default()
        };
        assert_eq!(
            missing_wallets(&details),
            vec![PaymentMethod::Ton, PaymentMethod::TelegramStars]
        );
    }
}

//! Payout methods, their minimums, commissions and address rules.

use serde::{Deserialize, Serialize};
use validator::ValidationError;

use crate::models::WalletDetails;
use crate::validation::*;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Ton,
    UsdtBep20,
    TelegramStars,
    CryptoBot,
    Tron,
    Litecoin,
    BitcoinCash,
    Dash,
    Dogecoin,
    Ripple,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MethodInfo {
    pub name: &'static str,
    pub min_amount: f64,
    pub commission_percent: f64,
    pub commission_fixed: f64,
    pub currency: &'static str,
    pub prompt: &'static str,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 10] = [
        PaymentMethod::Ton,
        PaymentMethod::UsdtBep20,
        PaymentMethod::TelegramStars,
        PaymentMethod::CryptoBot,
        PaymentMethod::Tron,
        PaymentMethod::Litecoin,
        PaymentMethod::BitcoinCash,
        PaymentMethod::Dash,
        PaymentMethod::Dogecoin,
        PaymentMethod::Ripple,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Ton => "ton",
            Self::UsdtBep20 => "usdt_bep20",
            Self::TelegramStars => "telegram_stars",
            Self::CryptoBot => "crypto_bot",
            Self::Tron => "tron",
            Self::Litecoin => "litecoin",
            Self::BitcoinCash => "bitcoin_cash",
            Self::Dash => "dash",
            Self::Dogecoin => "dogecoin",
            Self::Ripple => "ripple",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.id() == id)
    }

    pub fn info(&self) -> MethodInfo {
        match self {
            Self::Ton => MethodInfo {
                name: "TON",
                min_amount: 0.5,
                commission_percent: 0.0,
                commission_fixed: 0.05,
                currency: "TON",
                prompt: "Enter your TON wallet address (UQ... or EQ...)",
            },
            Self::UsdtBep20 => MethodInfo {
                name: "Tether (USDT-BEP-20)",
                min_amount: 2.00,
                commission_percent: 0.0,
                commission_fixed: 1.0,
                currency: "USD",
                prompt: "Enter the Tether address.",
            },
            Self::TelegramStars => MethodInfo {
                name: "Telegram Stars",
                min_amount: 0.75,
                commission_percent: 2.0,
                commission_fixed: 0.0,
                currency: "USD",
                prompt: "Enter your username or your friends (Example: @username)",
            },
            Self::CryptoBot => MethodInfo {
                name: "Crypto Bot",
                min_amount: 0.07,
                commission_percent: 3.0,
                commission_fixed: 0.0,
                currency: "USD",
                prompt: "Enter the Crypto Bot address.",
            },
            Self::Tron => MethodInfo {
                name: "Tron (TRX)",
                min_amount: 2.3302,
                commission_percent: 0.0,
                commission_fixed: 2.0,
                currency: "TRX",
                prompt: "Enter the Tron address.",
            },
            Self::Litecoin => MethodInfo {
                name: "Litecoin (LTC)",
                min_amount: 1.20,
                commission_percent: 0.0,
                commission_fixed: 0.001,
                currency: "LTC",
                prompt: "Enter the Litecoin address.",
            },
            Self::BitcoinCash => MethodInfo {
                name: "Bitcoin Cash (BCH)",
                min_amount: 5.8740,
                commission_percent: 0.0,
                commission_fixed: 0.001,
                currency: "BCH",
                prompt: "Enter the Bitcoin Cash address.",
            },
            Self::Dash => MethodInfo {
                name: "Dash (DAA)",
                min_amount: 0.4918,
                commission_percent: 0.0,
                commission_fixed: 0.01,
                currency: "DAA",
                prompt: "Enter the Dash address.",
            },
            Self::Dogecoin => MethodInfo {
                name: "Dogecoin (DOG)",
                min_amount: 7.9464,
                commission_percent: 0.0,
                commission_fixed: 8.0,
                currency: "DOG",
                prompt: "Enter the Dogecoin address.",
            },
            Self::Ripple => MethodInfo {
                name: "Ripple (XRP)",
                min_amount: 70.47,
                commission_percent: 0.0,
                commission_fixed: 0.25,
                currency: "XRP",
                prompt: "Enter the Ripple address.",
            },
        }
    }

    pub fn validate_address(&self, address: &str) -> Result<(), ValidationError> {
        match self {
            Self::Ton => validate_ton_address(address),
            Self::UsdtBep20 => validate_usdt_address(address),
            Self::TelegramStars => validate_telegram_username(address),
            Self::CryptoBot => validate_crypto_bot_id(address),
            Self::Tron => validate_tron_address(address),
            Self::Litecoin => validate_litecoin_address(address),
            Self::BitcoinCash => validate_bitcoin_cash_address(address),
            Self::Dash => validate_dash_address(address),
            Self::Dogecoin => validate_dogecoin_address(address),
            Self::Ripple => validate_ripple_address(address),
        }
    }

    /// Address already on file for methods the wallet endpoints manage.
    pub fn saved_address<'a>(&self, wallet: &'a WalletDetails) -> Option<&'a str> {
        let saved = match self {
            Self::Ton => wallet.ton_wallet_address.as_deref(),
            Self::UsdtBep20 => wallet.usdt_wallet_address.as_deref(),
            Self::TelegramStars => wallet.telegram_stars_username.as_deref(),
            _ => None,
        };
        saved.filter(|s| !s.trim().is_empty())
    }

    /// Whether the address is stored through `/api/wallet/*` rather than typed per request.
    pub fn uses_saved_wallet(&self) -> bool {
        matches!(self, Self::Ton | Self::UsdtBep20 | Self::TelegramStars)
    }

    pub fn commission(&self, amount: f64) -> f64 {
        let info = self.info();
        amount * info.commission_percent / 100.0 + info.commission_fixed
    }

    pub fn net_amount(&self, amount: f64) -> f64 {
        (amount - self.commission(amount)).max(0.0)
    }

    /// "Commission Telegram Stars: 2%" / "Commission Tron (TRX): 2 TRX"
    pub fn commission_text(&self) -> String {
        let info = self.info();
        let mut text = format!("Commission {}: ", info.name);
        if info.commission_percent > 0.0 {
            text.push_str(&format!("{}%", info.commission_percent));
        }
        if info.commission_fixed > 0.0 {
            if info.commission_percent > 0.0 {
                text.push_str(" + ");
            }
            text.push_str(&format!("{} {}", info.commission_fixed, info.currency));
        }
        text
    }
}

/// Display name for a method id as stored on a withdrawal, falling back to the raw id.
pub fn method_label(id: &str) -> String {
    PaymentMethod::from_id(id)
        .map(|m| m.info().name.to_string())
        .unwrap_or_else(|| id.to_string())
}

/// Methods whose minimum the balance covers, in catalog order.
pub fn available_methods(balance: f64) -> Vec<PaymentMethod> {
    PaymentMethod::ALL
        .into_iter()
        .filter(|m| balance >= m.info().min_amount)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commission_text_matches_catalog() {
        assert_eq!(PaymentMethod::TelegramStars.commission_text(), "Commission Telegram Stars: 2%");
        assert_eq!(PaymentMethod::Tron.commission_text(), "Commission Tron (TRX): 2 TRX");
    }

    #[test]
    fn labels_for_stored_ids() {
        assert_eq!(method_label("tron"), "Tron (TRX)");
        assert_eq!(method_label("paypal"), "paypal");
    }

    #[test]
    fn commission_and_net() {
        let fee = PaymentMethod::CryptoBot.commission(10.0);
        assert!((fee - 0.3).abs() < 1e-9);
        assert!((PaymentMethod::UsdtBep20.net_amount(5.0) - 4.0).abs() < 1e-9);
        assert_eq!(PaymentMethod::UsdtBep20.net_amount(0.5), 0.0);
    }

    #[test]
    fn methods_filtered_by_minimum() {
        let methods = available_methods(1.0);
        assert!(methods.contains(&PaymentMethod::TelegramStars));
        assert!(methods.contains(&PaymentMethod::CryptoBot));
        assert!(!methods.contains(&PaymentMethod::UsdtBep20));
        assert!(available_methods(0.01).is_empty());
        assert_eq!(available_methods(1000.0).len(), PaymentMethod::ALL.len());
    }

    #[test]
    fn saved_addresses_and_rules() {
        let wallet = WalletDetails {
            ton_wallet_address: Some("UQBvW8Z5huBkMJYdnfAEM5JqTNkuWX3diqYENkWsIL0XggGG".into()),
            usdt_wallet_address: Some("".into()),
            ..Default::default()
        };
        assert!(PaymentMethod::Ton.saved_address(&wallet).is_some());
        assert!(PaymentMethod::UsdtBep20.saved_address(&wallet).is_none());
        assert!(PaymentMethod::Ton.validate_address("EQ123").is_err());
        assert!(PaymentMethod::TelegramStars.validate_address("@someone").is_ok());
        assert_eq!(PaymentMethod::from_id("usdt_bep20"), Some(PaymentMethod::UsdtBep20));
        assert_eq!(
            serde_json::to_string(&PaymentMethod::TelegramStars).unwrap(),
            r#""telegram_stars""#
        );
    }
}

use serde::Serialize;
use std::fmt;

use crate::constants::{
    FRIENDS_REQUIRED_ERROR, INSUFFICIENT_BALANCE_ERROR, MIN_FRIENDS_FOR_WITHDRAWAL,
    WALLET_REQUIRED_ERROR,
};
use crate::models::WalletDetails;
use crate::payment::PaymentMethod;
use crate::validation::error_message;

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalRequest {
    pub method: PaymentMethod,
    pub amount: f64,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WithdrawalBlock {
    NotEnoughFriends { invited: u32 },
    NoWallet,
    InvalidAddress(String),
    InvalidAmount,
    BelowMinimum { minimum: f64, currency: &'static str },
    InsufficientBalance,
}

impl fmt::Display for WithdrawalBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEnoughFriends { invited } => {
                write!(f, "{} ({}/{})", FRIENDS_REQUIRED_ERROR, invited, MIN_FRIENDS_FOR_WITHDRAWAL)
            }
            Self::NoWallet => f.write_str(WALLET_REQUIRED_ERROR),
            Self::InvalidAddress(msg) => f.write_str(msg),
            Self::InvalidAmount => f.write_str("Enter an amount greater than zero"),
            Self::BelowMinimum { minimum, currency } => {
                write!(f, "The minimum amount to withdraw is {} {}", minimum, currency)
            }
            Self::InsufficientBalance => f.write_str(INSUFFICIENT_BALANCE_ERROR),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WithdrawalDraft<'a> {
    pub method: PaymentMethod,
    pub amount: f64,
    /// Typed address for methods without a saved wallet.
    pub address: &'a str,
    pub balance: f64,
    pub friends_invited: u32,
    pub wallet: &'a WalletDetails,
}

impl WithdrawalDraft<'_> {
    /// Checks run in order; the friend requirement wins regardless of balance.
    pub fn validate(&self) -> Result<WithdrawalRequest, WithdrawalBlock> {
        if self.friends_invited < MIN_FRIENDS_FOR_WITHDRAWAL {
            return Err(WithdrawalBlock::NotEnoughFriends {
                invited: self.friends_invited,
            });
        }

        let address = if self.method.uses_saved_wallet() {
            self.method
                .saved_address(self.wallet)
                .ok_or(WithdrawalBlock::NoWallet)?
                .to_string()
        } else {
            self.address.trim().to_string()
        };
        self.method
            .validate_address(&address)
            .map_err(|e| WithdrawalBlock::InvalidAddress(error_message(&e)))?;

        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(WithdrawalBlock::InvalidAmount);
        }
        let info = self.method.info();
        if self.amount < info.min_amount {
            return Err(WithdrawalBlock::BelowMinimum {
                minimum: info.min_amount,
                currency: info.currency,
            });
        }
        if self.amount > self.balance {
            return Err(WithdrawalBlock::InsufficientBalance);
        }

        Ok(WithdrawalRequest {
            method: self.method,
            amount: self.amount,
            address,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TON: &str = "UQBvW8Z5huBkMJYdnfAEM5JqTNkuWX3diqYENkWsIL0XggGG";

    fn wallet() -> WalletDetails {
        WalletDetails {
            ton_wallet_address: Some(TON.into()),
            ..Default::default()
        }
    }

    #[test]
    fn friends_required_even_with_large_balance() {
        let wallet = wallet();
        let draft = WithdrawalDraft {
            method: PaymentMethod::Ton,
            amount: 5.0,
            address: "",
            balance: 1_000_000.0,
            friends_invited: 2,
            wallet: &wallet,
        };
        assert_eq!(
            draft.validate(),
            Err(WithdrawalBlock::NotEnoughFriends { invited: 2 })
        );
        assert!(draft.validate().unwrap_err().to_string().contains("(2/3)"));
    }

    #[test]
    fn saved_wallet_is_used() {
        let wallet = wallet();
        let draft = WithdrawalDraft {
            method: PaymentMethod::Ton,
            amount: 1.0,
            address: "ignored",
            balance: 2.0,
            friends_invited: 3,
            wallet: &wallet,
        };
        let request = draft.validate().unwrap();
        assert_eq!(request.address, TON);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"method": "ton", "amount": 1.0, "address": TON})
        );
    }

    #[test]
    fn missing_wallet_and_bad_address() {
        let empty = WalletDetails::default();
        let draft = WithdrawalDraft {
            method: PaymentMethod::UsdtBep20,
            amount: 3.0,
            address: "",
            balance: 10.0,
            friends_invited: 5,
            wallet: &empty,
        };
        assert_eq!(draft.validate(), Err(WithdrawalBlock::NoWallet));

        let typed = WithdrawalDraft {
            method: PaymentMethod::Tron,
            address: "not-an-address",
            ..draft
        };
        assert!(matches!(typed.validate(), Err(WithdrawalBlock::InvalidAddress(_))));
    }

    #[test]
    fn amount_rules() {
        let wallet = wallet();
        let base = WithdrawalDraft {
            method: PaymentMethod::Ton,
            amount: 0.0,
            address: "",
            balance: 1.0,
            friends_invited: 3,
            wallet: &wallet,
        };
        assert_eq!(base.validate(), Err(WithdrawalBlock::InvalidAmount));
        assert!(matches!(
            WithdrawalDraft { amount: 0.1, ..base.clone() }.validate(),
            Err(WithdrawalBlock::BelowMinimum { .. })
        ));
        assert_eq!(
            WithdrawalDraft { amount: 2.0, ..base }.validate(),
            Err(WithdrawalBlock::InsufficientBalance)
        );
    }
}

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use crate::constants::{
    DEFAULT_COST_PER_CLICK, DEFAULT_DAILY_AD_LIMIT, DEFAULT_MINIMUM_CLICKS,
    DEFAULT_WALLET_CHANGE_FEE,
};

/// Accepts `12.5`, `"12.5"` or `null`. Numeric columns come back as strings.
pub fn de_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Str(String),
        Null,
    }

    match Raw::deserialize(deserializer)? {
        Raw::Num(n) => Ok(n),
        Raw::Str(s) if s.trim().is_empty() => Ok(0.0),
        Raw::Str(s) => s.trim().parse::<f64>().map_err(serde::de::Error::custom),
        Raw::Null => Ok(0.0),
    }
}

/// Like `de_amount`, but a missing or `null` value stays `None`.
pub fn de_opt_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Str(String),
        Null,
    }

    match Raw::deserialize(deserializer)? {
        Raw::Num(n) => Ok(Some(n)),
        Raw::Str(s) if s.trim().is_empty() => Ok(None),
        Raw::Str(s) => s.trim().parse::<f64>().map(Some).map_err(serde::de::Error::custom),
        Raw::Null => Ok(None),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Str(String),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Int(n) => n.to_string(),
            RawId::Str(s) => s,
        }
    }
}

/// Ids arrive as integers (Telegram, serial columns) or strings (uuids).
pub fn de_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(String::from)
}

pub fn de_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawId>::deserialize(deserializer)?.map(String::from))
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    #[serde(default, deserialize_with = "de_opt_id")]
    pub telegram_id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "de_amount")]
    pub balance: f64,
    #[serde(default, deserialize_with = "de_amount")]
    pub usd_balance: f64,
    #[serde(default, deserialize_with = "de_amount")]
    pub bug_balance: f64,
    #[serde(default, deserialize_with = "de_amount")]
    pub total_earned: f64,
    #[serde(default)]
    pub ads_watched_today: u32,
    #[serde(default)]
    pub provider_ads_today: BTreeMap<String, u32>,
    #[serde(default)]
    pub streak_days: u32,
    #[serde(default)]
    pub friends_invited: u32,
    #[serde(default)]
    pub referral_code: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub banned: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    pub fn display_name(&self) -> String {
        self.username
            .as_ref()
            .map(|u| format!("@{}", u))
            .or_else(|| self.first_name.clone())
            .unwrap_or_else(|| format!("User {}", self.id))
    }

    pub fn ads_for_provider(&self, provider: &str) -> u32 {
        self.provider_ads_today.get(provider).copied().unwrap_or(0)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    pub daily_ad_limit: u32,
    #[serde(deserialize_with = "de_amount")]
    pub reward_per_ad: f64,
    pub minimum_clicks: u32,
    #[serde(deserialize_with = "de_amount")]
    pub cost_per_click: f64,
    #[serde(deserialize_with = "de_amount")]
    pub wallet_change_fee: f64,
    #[serde(deserialize_with = "de_amount")]
    pub minimum_withdrawal: f64,
    #[serde(deserialize_with = "de_amount")]
    pub referral_reward: f64,
    pub adsgram_block_id: Option<String>,
    pub bot_username: Option<String>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            daily_ad_limit: DEFAULT_DAILY_AD_LIMIT,
            reward_per_ad: 0.0,
            minimum_clicks: DEFAULT_MINIMUM_CLICKS,
            cost_per_click: DEFAULT_COST_PER_CLICK,
            wallet_change_fee: DEFAULT_WALLET_CHANGE_FEE,
            minimum_withdrawal: 0.0,
            referral_reward: 0.0,
            adsgram_block_id: None,
            bot_username: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AppStats {
    pub total_users: u64,
    pub active_users_today: u64,
    #[serde(deserialize_with = "de_amount")]
    pub total_earned: f64,
    #[serde(deserialize_with = "de_amount")]
    pub total_withdrawn: f64,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminStats {
    pub total_users: u64,
    pub active_users: u64,
    pub banned_users: u64,
    pub total_ads_watched: u64,
    pub ads_watched_today: u64,
    #[serde(deserialize_with = "de_amount")]
    pub total_earnings: f64,
    #[serde(deserialize_with = "de_amount")]
    pub total_withdrawals: f64,
    pub pending_withdrawals: u64,
    pub active_tasks: u64,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    #[serde(default, deserialize_with = "de_opt_id")]
    pub telegram_id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "de_amount")]
    pub balance: f64,
    #[serde(default)]
    pub friends_invited: u32,
    #[serde(default)]
    pub banned: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl AdminUser {
    /// Case-insensitive match on id, telegram id, username and first name.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return true;
        }
        let q = q.trim_start_matches('@');
        [
            Some(&self.id),
            self.telegram_id.as_ref(),
            self.username.as_ref(),
            self.first_name.as_ref(),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(q))
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BanRequest {
    pub user_id: String,
    pub banned: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Referral {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub ads_watched: u32,
    #[serde(default, deserialize_with = "de_amount")]
    pub earned_for_you: f64,
    #[serde(default)]
    pub joined_at: Option<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ReferralStats {
    pub referral_code: String,
    pub total_friends: u32,
    pub active_friends: u32,
    pub new_friends_30d: u32,
    #[serde(deserialize_with = "de_amount")]
    pub total_earned: f64,
    #[serde(deserialize_with = "de_amount")]
    pub pending_rewards: f64,
    #[serde(deserialize_with = "de_amount")]
    pub profit_30d: f64,
    pub referrals: Vec<Referral>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ReferralLookup {
    pub found: bool,
    #[serde(deserialize_with = "de_opt_id")]
    pub user_id: Option<String>,
    pub username: Option<String>,
    pub total_friends: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ReferralClaimResponse {
    pub success: bool,
    #[serde(deserialize_with = "de_amount")]
    pub claimed: f64,
    #[serde(deserialize_with = "de_amount")]
    pub new_balance: f64,
    pub message: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct WalletDetails {
    pub ton_wallet_address: Option<String>,
    pub usdt_wallet_address: Option<String>,
    pub telegram_stars_username: Option<String>,
    pub can_change: bool,
}

impl WalletDetails {
    pub fn has_any(&self) -> bool {
        [
            &self.ton_wallet_address,
            &self.usdt_wallet_address,
            &self.telegram_stars_username,
        ]
        .iter()
        .any(|v| v.as_deref().map_or(false, |s| !s.is_empty()))
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PromoCode {
    #[serde(default, deserialize_with = "de_opt_id")]
    pub id: Option<String>,
    pub code: String,
    #[serde(default, deserialize_with = "de_amount")]
    pub reward_amount: f64,
    #[serde(default)]
    pub reward_currency: Option<String>,
    #[serde(default)]
    pub usage_limit: Option<u32>,
    #[serde(default)]
    pub usage_count: u32,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub expires_at: Option<String>,
}

impl PromoCode {
    pub fn remaining_uses(&self) -> Option<u32> {
        self.usage_limit.map(|limit| limit.saturating_sub(self.usage_count))
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PromoRedeemResponse {
    pub success: bool,
    #[serde(deserialize_with = "de_amount")]
    pub reward: f64,
    pub currency: Option<String>,
    #[serde(deserialize_with = "de_amount")]
    pub new_balance: f64,
    pub message: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum WithdrawalStatus {
    #[default]
    Pending,
    Approved,
    Paid,
    Rejected,
}

impl WithdrawalStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Paid => "Paid",
            Self::Rejected => "Rejected",
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Withdrawal {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    #[serde(default, deserialize_with = "de_opt_id")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "de_amount")]
    pub amount: f64,
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub status: WithdrawalStatus,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub processed_at: Option<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SpinStatus {
    pub free_spin_available: bool,
    pub extra_spins: u32,
    pub spin_ads_watched: u32,
    pub spin_ads_required: u32,
    pub spin_ad_limit: u32,
    pub next_free_spin_at: Option<String>,
}

impl SpinStatus {
    pub fn total_spins(&self) -> u32 {
        self.extra_spins + u32::from(self.free_spin_available)
    }

    pub fn can_spin(&self) -> bool {
        self.total_spins() > 0
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SpinResult {
    pub success: bool,
    #[serde(deserialize_with = "de_amount")]
    pub reward: f64,
    pub reward_type: Option<String>,
    pub segment: Option<usize>,
    #[serde(deserialize_with = "de_amount")]
    pub new_balance: f64,
    pub message: Option<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SpinAdWatchResponse {
    pub success: bool,
    pub spin_earned: bool,
    pub spin_ads_watched: u32,
    pub spin_ads_required: u32,
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdWatchRequest {
    pub ad_type: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AdWatchResponse {
    pub success: bool,
    #[serde(deserialize_with = "de_amount")]
    pub reward_pad: f64,
    #[serde(deserialize_with = "de_opt_amount")]
    pub new_balance: Option<f64>,
    pub ads_watched_today: Option<u32>,
    pub provider_ads_today: BTreeMap<String, u32>,
    pub daily_limit: Option<u32>,
}

/// Generic `{ success, message }` body most mutations return.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct MutationResponse {
    pub success: bool,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_accepts_string_balances() {
        let user: User = serde_json::from_str(
            r#"{"id":"42","username":"alice","balance":"1250.50","usdBalance":0.75,
                "adsWatchedToday":7,"providerAdsToday":{"monetag":4,"adsgram":3},
                "friendsInvited":2,"totalEarned":null}"#,
        )
        .unwrap();
        assert_eq!(user.balance, 1250.5);
        assert_eq!(user.usd_balance, 0.75);
        assert_eq!(user.total_earned, 0.0);
        assert_eq!(user.ads_for_provider("adsgram"), 3);
        assert_eq!(user.ads_for_provider("adexora"), 0);
        assert_eq!(user.display_name(), "@alice");
    }

    #[test]
    fn settings_fall_back_to_defaults() {
        let settings: AppSettings = serde_json::from_str(r#"{"dailyAdLimit":80}"#).unwrap();
        assert_eq!(settings.daily_ad_limit, 80);
        assert_eq!(settings.minimum_clicks, DEFAULT_MINIMUM_CLICKS);
        assert_eq!(settings.wallet_change_fee, DEFAULT_WALLET_CHANGE_FEE);
    }

    #[test]
    fn admin_user_search() {
        let user = AdminUser {
            id: "17".into(),
            telegram_id: Some("6653616672".into()),
            username: Some("SatsHunter".into()),
            ..Default::default()
        };
        assert!(user.matches(""));
        assert!(user.matches("@satshunter"));
        assert!(user.matches("665361"));
        assert!(!user.matches("bob"));
    }

    #[test]
    fn spin_status_counts_free_spin() {
        let status = SpinStatus {
            free_spin_available: true,
            extra_spins: 2,
            ..Default::default()
        };
        assert_eq!(status.total_spins(), 3);
        assert!(!SpinStatus::default().can_spin());
    }

    #[test]
    fn withdrawal_status_parses_lowercase() {
        let w: Withdrawal = serde_json::from_str(
            r#"{"id":"w1","amount":"2.5","method":"ton","status":"rejected","reason":"bad address"}"#,
        )
        .unwrap();
        assert_eq!(w.status, WithdrawalStatus::Rejected);
        assert_eq!(w.reason.as_deref(), Some("bad address"));
    }

    #[test]
    fn ids_accept_numbers_and_strings() {
        let user: User =
            serde_json::from_str(r#"{"id":42,"telegramId":6653616672,"balance":"10"}"#).unwrap();
        assert_eq!(user.id, "42");
        assert_eq!(user.telegram_id.as_deref(), Some("6653616672"));
        assert_eq!(user.balance, 10.0);

        let user: User = serde_json::from_str(r#"{"id":"a1b2","telegramId":null}"#).unwrap();
        assert_eq!(user.id, "a1b2");
        assert_eq!(user.telegram_id, None);

        let w: Withdrawal = serde_json::from_str(r#"{"id":9,"userId":42,"amount":1}"#).unwrap();
        assert_eq!((w.id.as_str(), w.user_id.as_deref()), ("9", Some("42")));

        let admin: AdminUser = serde_json::from_str(r#"{"id":3,"telegramId":"777"}"#).unwrap();
        assert!(admin.matches("777"));
    }

    #[test]
    fn cached_user_reparses_after_serialize() {
        let user: User = serde_json::from_str(r#"{"id":42,"telegramId":6653616672}"#).unwrap();
        let value = serde_json::to_value(&user).unwrap();
        let again: User = serde_json::from_value(value).unwrap();
        assert_eq!(again, user);
    }

    #[test]
    fn ad_reward_response_keeps_missing_counters_absent() {
        let response: AdWatchResponse =
            serde_json::from_str(r#"{"success":true,"rewardPad":250}"#).unwrap();
        assert_eq!(response.new_balance, None);
        assert_eq!(response.ads_watched_today, None);

        let response: AdWatchResponse =
            serde_json::from_str(r#"{"newBalance":"1250.5","adsWatchedToday":8}"#).unwrap();
        assert_eq!(response.new_balance, Some(1250.5));
        assert_eq!(response.ads_watched_today, Some(8));
    }
}

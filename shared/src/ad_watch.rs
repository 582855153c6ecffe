//! Watch-to-earn gate shared by the ad list and the spin page.
//!
//! The frontend owns the SDK calls; this module decides whether a finished
//! playback may be turned into a reward claim and how the server's answer is
//! folded back into the cached user.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::api_error::ApiError;
use crate::constants::{AD_BUSY_ERROR, AD_LOAD_ERROR, MIN_AD_WATCH_MS, TOO_FAST_ERROR};
use crate::models::{AdWatchRequest, AdWatchResponse, User};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum AdProvider {
    Monetag,
    Adsgram,
    Adexora,
}

impl AdProvider {
    pub const ALL: [AdProvider; 3] = [AdProvider::Monetag, AdProvider::Adsgram, AdProvider::Adexora];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Monetag => "monetag",
            Self::Adsgram => "adsgram",
            Self::Adexora => "adexora",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Monetag => "Monetag",
            Self::Adsgram => "Adsgram",
            Self::Adexora => "Adexora",
        }
    }
}

impl fmt::Display for AdProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How the provider's show call ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SdkOutcome {
    Completed,
    /// Closed or skipped through the provider's error/skip callback after playback started.
    Closed,
    /// The SDK threw before playing anything.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum AdWatchError {
    Busy { active: AdProvider },
    TooFast { elapsed_ms: f64 },
    SdkUnavailable(AdProvider),
    SdkFailed(String),
    Api(ApiError),
}

impl AdWatchError {
    pub fn user_message(&self) -> String {
        match self {
            Self::Busy { .. } => AD_BUSY_ERROR.to_string(),
            Self::TooFast { .. } => TOO_FAST_ERROR.to_string(),
            Self::SdkUnavailable(_) | Self::SdkFailed(_) => AD_LOAD_ERROR.to_string(),
            Self::Api(e) => e.user_message(),
        }
    }
}

impl fmt::Display for AdWatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Busy { active } => write!(f, "{} ad already in progress", active),
            Self::TooFast { elapsed_ms } => write!(f, "ad closed after {:.0}ms", elapsed_ms),
            Self::SdkUnavailable(p) => write!(f, "{} sdk not loaded", p.id()),
            Self::SdkFailed(e) => write!(f, "sdk error: {}", e),
            Self::Api(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for AdWatchError {}

impl From<ApiError> for AdWatchError {
    fn from(err: ApiError) -> Self {
        AdWatchError::Api(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdWatchSession {
    pub provider: AdProvider,
    pub started_at_ms: f64,
}

impl AdWatchSession {
    pub fn elapsed_ms(&self, now_ms: f64) -> f64 {
        (now_ms - self.started_at_ms).max(0.0)
    }

    pub fn watched_long_enough(&self, now_ms: f64) -> bool {
        self.elapsed_ms(now_ms) >= MIN_AD_WATCH_MS
    }
}

/// Single-slot guard: at most one ad plays at a time.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AdGate {
    loading: Option<AdProvider>,
}

impl AdGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loading_provider(&self) -> Option<AdProvider> {
        self.loading
    }

    pub fn begin(&mut self, provider: AdProvider, now_ms: f64) -> Result<AdWatchSession, AdWatchError> {
        if let Some(active) = self.loading {
            log::warn!("rejected {} ad: {} still loading", provider.id(), active.id());
            return Err(AdWatchError::Busy { active });
        }
        self.loading = Some(provider);
        Ok(AdWatchSession {
            provider,
            started_at_ms: now_ms,
        })
    }

    /// Ends playback and returns the claim to send, if any. On error the
    /// slot is released; on success it stays held until `release` is called
    /// once the claim settles.
    pub fn finish(
        &mut self,
        session: AdWatchSession,
        outcome: SdkOutcome,
        now_ms: f64,
    ) -> Result<AdWatchRequest, AdWatchError> {
        let claim = match outcome {
            SdkOutcome::Failed(reason) => Err(AdWatchError::SdkFailed(reason)),
            SdkOutcome::Completed | SdkOutcome::Closed => {
                let elapsed_ms = session.elapsed_ms(now_ms);
                if session.watched_long_enough(now_ms) {
                    Ok(AdWatchRequest {
                        ad_type: session.provider.id().to_string(),
                    })
                } else {
                    log::warn!("{} ad finished after {:.0}ms, no claim", session.provider.id(), elapsed_ms);
                    Err(AdWatchError::TooFast { elapsed_ms })
                }
            }
        };
        if claim.is_err() {
            self.release();
        }
        claim
    }

    pub fn release(&mut self) {
        self.loading = None;
    }
}

/// Folds the server-confirmed reward into the cached user. Counters the
/// server left out keep their cached value.
pub fn apply_reward(user: &mut User, response: &AdWatchResponse) {
    if let Some(balance) = response.new_balance {
        user.balance = balance;
    }
    if let Some(count) = response.ads_watched_today {
        user.ads_watched_today = count;
    }
    for (provider, count) in &response.provider_ads_today {
        user.provider_ads_today.insert(provider.clone(), *count);
    }
}

pub fn remaining_today(user: &User, daily_limit: u32) -> u32 {
    daily_limit.saturating_sub(user.ads_watched_today)
}

pub fn success_message(response: &AdWatchResponse) -> String {
    if response.reward_pad > 0.0 {
        format!("+{} PAD added to your balance", crate::format::format_pad(response.reward_pad))
    } else {
        "Reward added to your balance".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    const T: f64 = 1_700_000_000_000.0;

    #[test]
    fn closing_before_floor_sends_nothing() {
        let mut gate = AdGate::new();
        let session = gate.begin(AdProvider::Monetag, T).unwrap();
        let result = gate.finish(session, SdkOutcome::Completed, T + 2000.0);
        assert_eq!(result, Err(AdWatchError::TooFast { elapsed_ms: 2000.0 }));
        assert_eq!(result.unwrap_err().user_message(), TOO_FAST_ERROR);
        assert_eq!(gate.loading_provider(), None);
    }

    #[test]
    fn watching_past_floor_yields_one_claim() {
        let mut gate = AdGate::new();
        let session = gate.begin(AdProvider::Adsgram, T).unwrap();
        let request = gate.finish(session, SdkOutcome::Completed, T + 3500.0).unwrap();
        assert_eq!(request.ad_type, "adsgram");
        // held through the claim round-trip
        assert_eq!(gate.loading_provider(), Some(AdProvider::Adsgram));
        assert!(gate.begin(AdProvider::Monetag, T + 3600.0).is_err());
        gate.release();
        assert_eq!(gate.loading_provider(), None);
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"adType":"adsgram"}"#
        );
    }

    #[test]
    fn floor_is_inclusive_and_applies_to_closed_ads() {
        let mut gate = AdGate::new();
        let session = gate.begin(AdProvider::Adexora, T).unwrap();
        assert!(gate.finish(session, SdkOutcome::Closed, T + 3000.0).is_ok());
    }

    #[test]
    fn sdk_failure_never_claims() {
        let mut gate = AdGate::new();
        let session = gate.begin(AdProvider::Monetag, T).unwrap();
        let err = gate
            .finish(session, SdkOutcome::Failed("no fill".into()), T + 10_000.0)
            .unwrap_err();
        assert_eq!(err.user_message(), AD_LOAD_ERROR);
        assert_eq!(gate.loading_provider(), None);
    }

    #[test]
    fn second_ad_rejected_while_loading() {
        let mut gate = AdGate::new();
        let session = gate.begin(AdProvider::Monetag, T).unwrap();
        assert_eq!(
            gate.begin(AdProvider::Adsgram, T + 10.0),
            Err(AdWatchError::Busy { active: AdProvider::Monetag })
        );
        assert_eq!(gate.loading_provider(), Some(AdProvider::Monetag));
        gate.finish(session, SdkOutcome::Completed, T + 4000.0).unwrap();
        gate.release();
        assert!(gate.begin(AdProvider::Adsgram, T + 4001.0).is_ok());
    }

    #[test]
    fn clock_skew_counts_as_too_fast() {
        let session = AdWatchSession { provider: AdProvider::Monetag, started_at_ms: T };
        assert_eq!(session.elapsed_ms(T - 500.0), 0.0);
        assert!(!session.watched_long_enough(T - 500.0));
    }

    #[test]
    fn reward_merges_server_counters() {
        let mut user = User {
            id: "1".into(),
            balance: 100.0,
            ads_watched_today: 4,
            provider_ads_today: BTreeMap::from([("monetag".to_string(), 4)]),
            ..Default::default()
        };
        let response = AdWatchResponse {
            success: true,
            reward_pad: 250.0,
            new_balance: Some(350.0),
            ads_watched_today: Some(5),
            provider_ads_today: BTreeMap::from([("adsgram".to_string(), 1)]),
            daily_limit: Some(50),
        };
        apply_reward(&mut user, &response);
        assert_eq!(user.balance, 350.0);
        assert_eq!(user.ads_watched_today, 5);
        assert_eq!(user.ads_for_provider("monetag"), 4);
        assert_eq!(user.ads_for_provider("adsgram"), 1);
        assert_eq!(remaining_today(&user, 50), 45);
        assert_eq!(success_message(&response), "+250 PAD added to your balance");
    }

    #[test]
    fn reward_without_counters_keeps_cached_values() {
        let mut user = User {
            id: "1".into(),
            balance: 1000.0,
            ads_watched_today: 7,
            ..Default::default()
        };
        let response: AdWatchResponse =
            serde_json::from_str(r#"{"success":true,"rewardPad":250}"#).unwrap();
        apply_reward(&mut user, &response);
        assert_eq!(user.balance, 1000.0);
        assert_eq!(user.ads_watched_today, 7);
    }
}

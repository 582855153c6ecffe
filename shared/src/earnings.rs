use chrono::{DateTime, Utc};

use crate::constants::{
    DAILY_GOAL, PER_AD_REWARD, REFERRAL_FIRST_MONTH_DAYS, REFERRAL_FIRST_MONTH_PER_AD,
    REFERRAL_FIRST_MONTH_STREAK, REFERRAL_LATER_PER_AD, REFERRAL_LATER_STREAK, STREAK_BONUS,
};

/// Multiplier grows by `STREAK_BONUS` for each consecutive claiming day.
pub fn streak_multiplier(streak_days: u32) -> f64 {
    1.0 + STREAK_BONUS * f64::from(streak_days)
}

pub fn reward_per_ad(streak_days: u32) -> f64 {
    PER_AD_REWARD * streak_multiplier(streak_days)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyProgress {
    pub watched: u32,
    pub goal: u32,
}

impl DailyProgress {
    pub fn new(watched: u32) -> Self {
        Self { watched, goal: DAILY_GOAL }
    }

    pub fn percent(&self) -> f64 {
        if self.goal == 0 {
            return 100.0;
        }
        (f64::from(self.watched) / f64::from(self.goal) * 100.0).min(100.0)
    }

    pub fn reached(&self) -> bool {
        self.watched >= self.goal
    }

    pub fn label(&self) -> String {
        format!("{}/{}", self.watched.min(self.goal), self.goal)
    }
}

/// What a referrer earns per ad and per streak claim of one referral.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferralRate {
    pub per_ad: f64,
    pub streak: f64,
}

pub fn referral_rate(days_since_join: u32) -> ReferralRate {
    if days_since_join < REFERRAL_FIRST_MONTH_DAYS {
        ReferralRate {
            per_ad: REFERRAL_FIRST_MONTH_PER_AD,
            streak: REFERRAL_FIRST_MONTH_STREAK,
        }
    } else {
        ReferralRate {
            per_ad: REFERRAL_LATER_PER_AD,
            streak: REFERRAL_LATER_STREAK,
        }
    }
}

/// Whole days since `joined_at` (RFC 3339). Unknown dates count as day zero.
pub fn days_since_join(joined_at: Option<&str>, now: DateTime<Utc>) -> u32 {
    joined_at
        .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
        .map(|joined| (now - joined.with_timezone(&Utc)).num_days().max(0) as u32)
        .unwrap_or(0)
}

pub fn referral_link(bot_username: &str, referral_code: &str) -> String {
    format!(
        "https://t.me/{}?start={}",
        bot_username.trim_start_matches('@'),
        referral_code
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn streak_grows_linearly() {
        assert_eq!(streak_multiplier(0), 1.0);
        assert!((streak_multiplier(10) - 1.02).abs() < 1e-12);
        assert!((reward_per_ad(10) - 0.0002448).abs() < 1e-12);
    }

    #[test]
    fn daily_goal_progress() {
        let p = DailyProgress::new(125);
        assert_eq!(p.percent(), 50.0);
        assert!(!p.reached());
        let done = DailyProgress::new(300);
        assert_eq!(done.percent(), 100.0);
        assert_eq!(done.label(), "250/250");
    }

    #[test]
    fn referral_rate_halves_after_first_month() {
        assert_eq!(referral_rate(0).per_ad, REFERRAL_FIRST_MONTH_PER_AD);
        assert_eq!(referral_rate(29).streak, REFERRAL_FIRST_MONTH_STREAK);
        assert_eq!(referral_rate(30).per_ad, REFERRAL_LATER_PER_AD);
    }

    #[test]
    fn join_age_in_days() {
        let now = DateTime::parse_from_rfc3339("2024-03-31T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(days_since_join(Some("2024-03-01T12:00:00Z"), now), 30);
        assert_eq!(days_since_join(Some("2024-04-02T00:00:00Z"), now), 0);
        assert_eq!(days_since_join(Some("last week"), now), 0);
        assert_eq!(days_since_join(None, now), 0);
    }

    #[test]
    fn deep_link() {
        assert_eq!(
            referral_link("@LightningSatsBot", "ABC123"),
            "https://t.me/LightningSatsBot?start=ABC123"
        );
    }
}

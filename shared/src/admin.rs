use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{AdminUser, AppSettings, Withdrawal, WithdrawalStatus};
use crate::pagination::Pagination;

/// Editable subset of app settings.
#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdminSettingsUpdate {
    #[validate(range(min = 1, max = 1000, message = "Daily ad limit must be between 1 and 1000"))]
    pub daily_ad_limit: u32,
    #[validate(range(min = 0.0, message = "Reward per ad cannot be negative"))]
    pub reward_per_ad: f64,
    #[validate(range(min = 1, message = "Minimum clicks must be at least 1"))]
    pub minimum_clicks: u32,
    #[validate(range(min = 0.0, message = "Cost per click cannot be negative"))]
    pub cost_per_click: f64,
    #[validate(range(min = 0.0, message = "Wallet change fee cannot be negative"))]
    pub wallet_change_fee: f64,
    #[validate(range(min = 0.0, message = "Minimum withdrawal cannot be negative"))]
    pub minimum_withdrawal: f64,
    #[validate(range(min = 0.0, message = "Referral reward cannot be negative"))]
    pub referral_reward: f64,
}

impl From<&AppSettings> for AdminSettingsUpdate {
    fn from(s: &AppSettings) -> Self {
        Self {
            daily_ad_limit: s.daily_ad_limit,
            reward_per_ad: s.reward_per_ad,
            minimum_clicks: s.minimum_clicks,
            cost_per_click: s.cost_per_click,
            wallet_change_fee: s.wallet_change_fee,
            minimum_withdrawal: s.minimum_withdrawal,
            referral_reward: s.referral_reward,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq)]
pub struct RejectWithdrawalRequest {
    #[validate(length(min = 3, max = 200, message = "Give a reason (3-200 characters)"))]
    pub reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserFilter {
    #[default]
    All,
    Active,
    Banned,
}

impl UserFilter {
    pub fn accepts(&self, user: &AdminUser) -> bool {
        match self {
            Self::All => true,
            Self::Active => !user.banned,
            Self::Banned => user.banned,
        }
    }
}

/// Search + status filter, then the requested page.
pub fn user_page<'a>(
    users: &'a [AdminUser],
    query: &str,
    filter: UserFilter,
    pagination: Pagination,
) -> (Vec<&'a AdminUser>, Pagination, usize) {
    let filtered: Vec<&AdminUser> = users
        .iter()
        .filter(|u| filter.accepts(u) && u.matches(query))
        .collect();
    let total = filtered.len();
    let pagination = pagination.clamped(total);
    let page = pagination.slice(&filtered).to_vec();
    (page, pagination, total)
}

pub fn payout_page<'a>(
    payouts: &'a [Withdrawal],
    status: Option<WithdrawalStatus>,
    pagination: Pagination,
) -> (Vec<&'a Withdrawal>, Pagination, usize) {
    let filtered: Vec<&Withdrawal> = payouts
        .iter()
        .filter(|w| status.map_or(true, |s| w.status == s))
        .collect();
    let total = filtered.len();
    let pagination = pagination.clamped(total);
    let page = pagination.slice(&filtered).to_vec();
    (page, pagination, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users(n: usize) -> Vec<AdminUser> {
        (0..n)
            .map(|i| AdminUser {
                id: i.to_string(),
                username: Some(format!("user{}", i)),
                banned: i % 4 == 0,
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn filtered_pages() {
        let all = users(23);
        let (page, p, total) = user_page(&all, "", UserFilter::All, Pagination { page: 3, page_size: 10 });
        assert_eq!(total, 23);
        assert_eq!(p.page_count(total), 3);
        assert_eq!(page.len(), 3);
        assert_eq!(page[0].id, "20");

        let (page, _, total) = user_page(&all, "", UserFilter::Banned, Pagination::new(10));
        assert_eq!(total, 6);
        assert!(page.iter().all(|u| u.banned));
    }

    #[test]
    fn search_resets_out_of_range_page() {
        let all = users(23);
        let (page, p, total) = user_page(&all, "user1", UserFilter::All, Pagination { page: 3, page_size: 10 });
        // user1, user10..user19
        assert_eq!(total, 11);
        assert_eq!(p.page, 2);
        assert_eq!(page.len(), 1);
    }

    #[test]
    fn payouts_by_status() {
        let payouts: Vec<Withdrawal> = (0..12)
            .map(|i| Withdrawal {
                id: format!("w{}", i),
                status: if i % 2 == 0 { WithdrawalStatus::Paid } else { WithdrawalStatus::Rejected },
                ..Default::default()
            })
            .collect();
        let (page, _, total) = payout_page(&payouts, Some(WithdrawalStatus::Paid), Pagination::new(5));
        assert_eq!(total, 6);
        assert_eq!(page.len(), 5);
        let (_, _, total) = payout_page(&payouts, None, Pagination::new(5));
        assert_eq!(total, 12);
    }

    #[test]
    fn settings_validation() {
        let mut update = AdminSettingsUpdate::from(&AppSettings::default());
        assert!(update.validate().is_ok());
        update.daily_ad_limit = 0;
        assert!(update.validate().is_err());
        assert!(RejectWithdrawalRequest { reason: "no".into() }.validate().is_err());
    }
}

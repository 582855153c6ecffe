// Endpoints
pub const AUTH_USER_ENDPOINT: &str = "/api/auth/user";
pub const APP_SETTINGS_ENDPOINT: &str = "/api/app-settings";
pub const APP_STATS_ENDPOINT: &str = "/api/app-stats";

pub const ADS_WATCH_ENDPOINT: &str = "/api/ads/watch";
pub const SPIN_STATUS_ENDPOINT: &str = "/api/spin/status";
pub const SPIN_USE_ENDPOINT: &str = "/api/spin/use";
pub const SPIN_ADWATCH_ENDPOINT: &str = "/api/spin/adwatch";

pub const TASKS_ENDPOINT: &str = "/api/advertiser-tasks";
pub const TASKS_CREATE_ENDPOINT: &str = "/api/advertiser-tasks/create";
pub const TASKS_MINE_ENDPOINT: &str = "/api/advertiser-tasks/my-tasks";
pub const TASKS_VERIFY_CHANNEL_ENDPOINT: &str = "/api/advertiser-tasks/verify-channel";

pub const REFERRAL_STATS_ENDPOINT: &str = "/api/referrals/stats";
pub const REFERRAL_CLAIM_ENDPOINT: &str = "/api/referrals/claim";
pub const REFERRAL_SEARCH_ENDPOINT: &str = "/api/referrals/search";

pub const WALLET_DETAILS_ENDPOINT: &str = "/api/wallet/details";
pub const WALLET_SAVE_ENDPOINT: &str = "/api/wallet/save";
pub const WALLET_TON_ENDPOINT: &str = "/api/wallet/cwallet";
pub const WALLET_USDT_ENDPOINT: &str = "/api/wallet/usdt";
pub const WALLET_STARS_ENDPOINT: &str = "/api/wallet/telegram-stars";
pub const WALLET_CHANGE_ENDPOINT: &str = "/api/wallet/change";

pub const WITHDRAWALS_ENDPOINT: &str = "/api/withdrawals";
pub const PROMO_CREATE_ENDPOINT: &str = "/api/promo-codes/create";
pub const PROMO_REDEEM_ENDPOINT: &str = "/api/promo-codes/redeem";
pub const CONTEST_SUBMIT_ENDPOINT: &str = "/api/contest/submit";

pub const ADMIN_STATS_ENDPOINT: &str = "/api/admin/stats";
pub const ADMIN_USERS_ENDPOINT: &str = "/api/admin/users";
pub const ADMIN_BAN_ENDPOINT: &str = "/api/admin/users/ban";
pub const ADMIN_SETTINGS_ENDPOINT: &str = "/api/admin/settings";
pub const ADMIN_PROMO_CODES_ENDPOINT: &str = "/api/admin/promo-codes";
pub const ADMIN_PENDING_WITHDRAWALS_ENDPOINT: &str = "/api/admin/withdrawals/pending";
pub const ADMIN_PROCESSED_WITHDRAWALS_ENDPOINT: &str = "/api/admin/withdrawals/processed";
pub const ADMIN_WITHDRAWALS_ENDPOINT: &str = "/api/admin/withdrawals";

pub const INIT_DATA_HEADER: &str = "x-telegram-init-data";

// Timing
pub const MIN_AD_WATCH_MS: f64 = 3000.0;
pub const TASK_CLICK_DELAY_MS: u32 = 3000;
pub const SPIN_REVEAL_DELAY_MS: u32 = 3000;
pub const NOTIFICATION_TIMEOUT_MS: u32 = 3000;
pub const USER_REFRESH_INTERVAL_MS: u32 = 30_000;
pub const QUERY_STALE_MS: f64 = 30_000.0;

// Client-side defaults, overridden by /api/app-settings when present
pub const DEFAULT_MINIMUM_CLICKS: u32 = 500;
pub const DEFAULT_COST_PER_CLICK: f64 = 2.0;
pub const DEFAULT_DAILY_AD_LIMIT: u32 = 50;
pub const DEFAULT_WALLET_CHANGE_FEE: f64 = 5000.0;
pub const MIN_FRIENDS_FOR_WITHDRAWAL: u32 = 3;
pub const MAX_TASK_TITLE_LEN: usize = 100;

// Earnings
pub const PER_AD_REWARD: f64 = 0.00024;
pub const STREAK_BONUS: f64 = 0.002;
pub const DAILY_GOAL: u32 = 250;

pub const REFERRAL_FIRST_MONTH_PER_AD: f64 = 0.000024;
pub const REFERRAL_FIRST_MONTH_STREAK: f64 = 0.0002;
pub const REFERRAL_LATER_PER_AD: f64 = 0.000012;
pub const REFERRAL_LATER_STREAK: f64 = 0.0001;
pub const REFERRAL_FIRST_MONTH_DAYS: u32 = 30;

// Tables
pub const ADMIN_USERS_PAGE_SIZE: usize = 10;
pub const ADMIN_PAYOUTS_PAGE_SIZE: usize = 10;

// Messages
pub const NETWORK_ERROR: &str = "Network error. Please try again";
pub const AUTH_ERROR: &str = "Session expired. Please reopen the app from Telegram";
pub const TOO_FAST_ERROR: &str = "You're claiming too fast! Watch the full ad to earn your reward";
pub const AD_LOAD_ERROR: &str = "Ad failed to load. Please try again";
pub const AD_BUSY_ERROR: &str = "An ad is already playing";
pub const SPIN_UNAVAILABLE_ERROR: &str = "No spins available. Watch ads or invite friends to earn more";
pub const FRIENDS_REQUIRED_ERROR: &str = "Invite at least 3 friends to unlock withdrawals";
pub const WALLET_REQUIRED_ERROR: &str = "Save a wallet address for this method first";
pub const INSUFFICIENT_BALANCE_ERROR: &str = "Insufficient balance";

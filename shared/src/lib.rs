pub mod ad_watch;
pub mod admin;
pub mod api_error;
pub mod constants;
pub mod contest;
pub mod earnings;
pub mod format;
pub mod models;
pub mod pagination;
pub mod payment;
pub mod promo;
pub mod query_cache;
pub mod spin;
pub mod tasks;
pub mod validation;
pub mod wallet;
pub mod withdrawal;

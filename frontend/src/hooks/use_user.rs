use shared::constants::{APP_SETTINGS_ENDPOINT, AUTH_USER_ENDPOINT};
use shared::models::{AppSettings, User};
use yew::prelude::*;

use super::use_query::{use_query, QueryState};

#[hook]
pub fn use_user() -> QueryState<User> {
    use_query::<User>(AUTH_USER_ENDPOINT)
}

/// Server-tunable settings, falling back to the client defaults until loaded.
#[hook]
pub fn use_settings() -> AppSettings {
    use_query::<AppSettings>(APP_SETTINGS_ENDPOINT)
        .data
        .unwrap_or_default()
}

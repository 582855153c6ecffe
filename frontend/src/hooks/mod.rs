pub mod form_state;
pub mod use_ad_watch;
pub mod use_query;
pub mod use_user;

pub use form_state::*;
pub use use_ad_watch::*;
pub use use_query::*;
pub use use_user::*;

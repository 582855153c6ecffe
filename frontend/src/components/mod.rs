pub mod ad_buttons;
pub mod loading;
pub mod pager;
pub mod stat_card;

pub use ad_buttons::AdButtons;
pub use loading::{Loading, QueryError};
pub use pager::Pager;
pub use stat_card::StatCard;

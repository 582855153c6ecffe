mod payouts;
mod promo_codes;
mod referrals;
mod settings;
mod users;

use shared::constants::ADMIN_STATS_ENDPOINT;
use shared::format::format_usd;
use shared::models::AdminStats;
use yew::prelude::*;

use crate::components::{Loading, QueryError, StatCard};
use crate::hooks::{use_query, use_user};
use crate::styles;

use payouts::Payouts;
use promo_codes::PromoCodes;
use referrals::ReferralSearch;
use settings::SettingsForm;
use users::Users;

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Overview,
    Users,
    Payouts,
    Settings,
    Promo,
    Referrals,
}

impl Tab {
    const ALL: [Tab; 6] = [Tab::Overview, Tab::Users, Tab::Payouts, Tab::Settings, Tab::Promo, Tab::Referrals];

    fn label(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Users => "Users",
            Tab::Payouts => "Payouts",
            Tab::Settings => "Settings",
            Tab::Promo => "Promo",
            Tab::Referrals => "Referrals",
        }
    }
}

#[function_component(Overview)]
fn overview() -> Html {
    let stats = use_query::<AdminStats>(ADMIN_STATS_ENDPOINT);
    match (stats.data.clone(), stats.error.clone()) {
        (Some(s), _) => html! {
            <div class={styles::STAT_GRID}>
                <StatCard label="Users" value={s.total_users.to_string()} hint={format!("{} active", s.active_users)} />
                <StatCard label="Banned" value={s.banned_users.to_string()} />
                <StatCard label="Ads today" value={s.ads_watched_today.to_string()} hint={format!("{} total", s.total_ads_watched)} />
                <StatCard label="Active tasks" value={s.active_tasks.to_string()} />
                <StatCard label="Earnings" value={format_usd(s.total_earnings)} />
                <StatCard label="Withdrawn" value={format_usd(s.total_withdrawals)} hint={format!("{} pending", s.pending_withdrawals)} />
            </div>
        },
        (None, Some(err)) => html! { <QueryError message={err} on_retry={stats.refetch.clone()} /> },
        (None, None) => html! { <Loading /> },
    }
}

#[function_component(Admin)]
pub fn admin() -> Html {
    let user = use_user();
    let tab = use_state(|| Tab::Overview);

    match user.data.as_ref() {
        None => return html! { <div class={styles::PAGE}><Loading /></div> },
        Some(u) if !u.is_admin => {
            log::warn!("non-admin user {} opened the admin page", u.id);
            return html! {
                <div class={styles::PAGE}>
                    <div class={styles::CARD_ERROR}>{"Access denied. This area is for administrators only."}</div>
                </div>
            };
        }
        Some(_) => {}
    }

    let content = match *tab {
        Tab::Overview => html! { <Overview /> },
        Tab::Users => html! { <Users /> },
        Tab::Payouts => html! { <Payouts /> },
        Tab::Settings => html! { <SettingsForm /> },
        Tab::Promo => html! { <PromoCodes /> },
        Tab::Referrals => html! { <ReferralSearch /> },
    };

    html! {
        <div class={styles::PAGE}>
            <h2 class={styles::TEXT_H2}>{"Admin"}</h2>
            <div class="flex flex-wrap gap-2">
                { for Tab::ALL.iter().map(|&t| {
                    let tab = tab.clone();
                    let class = if *tab == t { styles::TAB_ACTIVE } else { styles::TAB };
                    html! {
                        <button {class} onclick={move |_: MouseEvent| tab.set(t)}>{t.label()}</button>
                    }
                }) }
            </div>
            {content}
        </div>
    }
}

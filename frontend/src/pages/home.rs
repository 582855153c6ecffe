use shared::ad_watch::{remaining_today, AdProvider};
use shared::constants::APP_STATS_ENDPOINT;
use shared::earnings::{reward_per_ad, streak_multiplier, DailyProgress};
use shared::format::{format_pad, format_usd};
use shared::models::AppStats;
use yew::prelude::*;

use crate::components::{AdButtons, Loading, QueryError, StatCard};
use crate::hooks::{use_ad_watch, use_query, use_settings, use_user, AdReward};
use crate::styles;

#[function_component(Home)]
pub fn home() -> Html {
    let user = use_user();
    let settings = use_settings();
    let stats = use_query::<AppStats>(APP_STATS_ENDPOINT);
    let ads = use_ad_watch(AdReward::Earnings);

    let Some(current) = user.data.clone() else {
        return html! {
            <div class={styles::PAGE}>
                if let Some(err) = user.error.clone() {
                    <QueryError message={err} on_retry={user.refetch.clone()} />
                } else {
                    <Loading />
                }
            </div>
        };
    };

    let remaining = remaining_today(&current, settings.daily_ad_limit);
    let progress = DailyProgress::new(current.ads_watched_today);
    let counts: Vec<(AdProvider, u32)> = AdProvider::ALL
        .iter()
        .map(|p| (*p, current.ads_for_provider(p.id())))
        .collect();

    html! {
        <div class={styles::PAGE}>
            <div class={styles::CARD}>
                <p class={styles::TEXT_SMALL}>{format!("Welcome, {}", current.display_name())}</p>
                <div class="mt-2 flex items-baseline justify-between">
                    <div>
                        <div class={styles::STAT_VALUE}>{format!("{} PAD", format_pad(current.balance))}</div>
                        <div class={styles::TEXT_HINT}>{format!("{} withdrawable", format_usd(current.usd_balance))}</div>
                    </div>
                    if current.bug_balance > 0.0 {
                        <div class={styles::TEXT_SMALL}>{format!("{} BUG", format_pad(current.bug_balance))}</div>
                    }
                </div>
            </div>

            <div class={styles::CARD}>
                <div class="flex items-center justify-between">
                    <h3 class={styles::CARD_TITLE}>{"Daily goal"}</h3>
                    <span class={styles::TEXT_SMALL}>{progress.label()}</span>
                </div>
                <div class={classes!(styles::PROGRESS_TRACK, "mt-3")}>
                    <div class={styles::PROGRESS_BAR} style={format!("width: {:.1}%", progress.percent())}></div>
                </div>
                <div class="mt-3 grid grid-cols-2 gap-2">
                    <div>
                        <div class={styles::STAT_LABEL}>{"Per ad"}</div>
                        <div class={styles::TEXT_BODY}>{format_usd(reward_per_ad(current.streak_days))}</div>
                    </div>
                    <div>
                        <div class={styles::STAT_LABEL}>{"Streak"}</div>
                        <div class={styles::TEXT_BODY}>
                            {format!("{} days (x{:.3})", current.streak_days, streak_multiplier(current.streak_days))}
                        </div>
                    </div>
                </div>
                if progress.reached() {
                    <p class={classes!(styles::TEXT_SUCCESS, "mt-2")}>{"Daily goal reached, nice work!"}</p>
                }
            </div>

            <div class={styles::CARD}>
                <div class="flex items-center justify-between mb-3">
                    <h3 class={styles::CARD_TITLE}>{"Watch ads"}</h3>
                    <span class={styles::TEXT_SMALL}>{format!("{} left today", remaining)}</span>
                </div>
                if remaining == 0 {
                    <p class={classes!(styles::TEXT_ERROR, "mb-3")}>
                        {format!("Daily limit reached ({}/{}). Come back tomorrow!", settings.daily_ad_limit, settings.daily_ad_limit)}
                    </p>
                }
                <AdButtons handle={ads} disabled={remaining == 0} counts={Some(counts)} />
                <p class={styles::TEXT_HINT}>{"Watch each ad to the end. Closing it early earns nothing."}</p>
            </div>

            {
                match stats.data.clone() {
                    Some(s) => html! {
                        <div class={styles::STAT_GRID}>
                            <StatCard label="Users" value={s.total_users.to_string()} icon="👥" />
                            <StatCard label="Active today" value={s.active_users_today.to_string()} icon="⚡" />
                            <StatCard label="Paid out" value={format_usd(s.total_withdrawn)} icon="💸" />
                            <StatCard label="Earned" value={format_usd(s.total_earned)} icon="📈" />
                        </div>
                    },
                    None => html! {},
                }
            }
        </div>
    }
}

use chrono::Utc;
use shared::constants::{AUTH_USER_ENDPOINT, REFERRAL_CLAIM_ENDPOINT, REFERRAL_STATS_ENDPOINT};
use shared::earnings::{days_since_join, referral_link, referral_rate};
use shared::format::{format_pad, format_usd};
use shared::models::{Referral, ReferralClaimResponse, ReferralStats};
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use yew::prelude::*;

use crate::base::{notify_error, notify_success};
use crate::components::{Loading, QueryError, StatCard};
use crate::config::bot_username;
use crate::hooks::{invalidate, use_query, use_settings};
use crate::{api, styles, telegram};

/// `navigator.clipboard.writeText`, looked up dynamically since older
/// Telegram webviews lack it.
fn clipboard_write(text: &str) -> Option<Promise> {
    let navigator: JsValue = web_sys::window()?.navigator().into();
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard")).ok()?;
    let write = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .ok()?
        .dyn_into::<Function>()
        .ok()?;
    write.call1(&clipboard, &JsValue::from_str(text)).ok()?.dyn_into::<Promise>().ok()
}

fn copy_to_clipboard(text: String) {
    spawn_local(async move {
        let Some(promise) = clipboard_write(&text) else {
            notify_error("Could not copy the link");
            return;
        };
        match JsFuture::from(promise).await {
            Ok(_) => notify_success("Link copied"),
            Err(e) => {
                log::warn!("clipboard write failed: {:?}", e);
                notify_error("Could not copy the link");
            }
        }
    });
}

#[function_component(ReferralRow)]
fn referral_row(props: &ReferralRowProps) -> Html {
    let r = &props.referral;
    let rate = referral_rate(days_since_join(r.joined_at.as_deref(), Utc::now()));
    let name = r
        .username
        .as_ref()
        .map(|u| format!("@{}", u))
        .or_else(|| r.first_name.clone())
        .unwrap_or_else(|| "Friend".to_string());

    html! {
        <tr class={styles::TABLE_ROW}>
            <td class="py-2">{name}</td>
            <td class="py-2">{r.ads_watched}</td>
            <td class="py-2">{format_usd(r.earned_for_you)}</td>
            <td class="py-2 text-xs">{format!("{}/ad", format_usd(rate.per_ad))}</td>
        </tr>
    }
}

#[derive(Properties, PartialEq)]
struct ReferralRowProps {
    referral: Referral,
}

#[function_component(Affiliates)]
pub fn affiliates() -> Html {
    let stats = use_query::<ReferralStats>(REFERRAL_STATS_ENDPOINT);
    let settings = use_settings();
    let claiming = use_state(|| false);

    let Some(data) = stats.data.clone() else {
        return html! {
            <div class={styles::PAGE}>
                if let Some(err) = stats.error.clone() {
                    <QueryError message={err} on_retry={stats.refetch.clone()} />
                } else {
                    <Loading />
                }
            </div>
        };
    };

    let link = referral_link(&bot_username(settings.bot_username.as_deref()), &data.referral_code);

    let on_share = {
        let link = link.clone();
        Callback::from(move |_: MouseEvent| {
            telegram::share_url(&link, "Join me and earn by watching ads!");
        })
    };
    let on_copy = {
        let link = link.clone();
        Callback::from(move |_: MouseEvent| copy_to_clipboard(link.clone()))
    };
    let on_claim = {
        let claiming = claiming.clone();
        Callback::from(move |_: MouseEvent| {
            if *claiming {
                return;
            }
            claiming.set(true);
            let claiming = claiming.clone();
            spawn_local(async move {
                match api::post_empty::<ReferralClaimResponse>(REFERRAL_CLAIM_ENDPOINT).await {
                    Ok(r) => {
                        invalidate(REFERRAL_STATS_ENDPOINT);
                        invalidate(AUTH_USER_ENDPOINT);
                        notify_success(r.message.unwrap_or_else(|| {
                            format!("Claimed {}", format_usd(r.claimed))
                        }));
                    }
                    Err(e) => notify_error(e.user_message()),
                }
                claiming.set(false);
            });
        })
    };

    let first_month = referral_rate(0);
    let later = referral_rate(u32::MAX);

    html! {
        <div class={styles::PAGE}>
            <h2 class={styles::TEXT_H2}>{"Friends"}</h2>

            <div class={styles::CARD}>
                <h3 class={styles::CARD_TITLE}>{"Your invite link"}</h3>
                <p class={classes!(styles::TEXT_SMALL, "mt-2", "break-all")}>{link.clone()}</p>
                <div class="grid grid-cols-2 gap-2 mt-3">
                    <button onclick={on_share} class={styles::BUTTON_PRIMARY}>{"Share"}</button>
                    <button onclick={on_copy} class={styles::BUTTON_SECONDARY}>{"Copy"}</button>
                </div>
                if settings.referral_reward > 0.0 {
                    <p class={styles::TEXT_HINT}>
                        {format!("You get {} PAD when a friend watches their first ads", format_pad(settings.referral_reward))}
                    </p>
                }
            </div>

            <div class={styles::STAT_GRID}>
                <StatCard label="Friends" value={data.total_friends.to_string()} icon="👥" />
                <StatCard label="Active" value={data.active_friends.to_string()} icon="⚡" />
                <StatCard label="Earned" value={format_usd(data.total_earned)} icon="💰" />
                <StatCard label="Pending" value={format_usd(data.pending_rewards)} icon="⏳" />
            </div>

            <button onclick={on_claim} disabled={*claiming || data.pending_rewards <= 0.0}
                class={classes!(styles::BUTTON_PRIMARY, "w-full")}>
                { if *claiming { "Claiming..." } else { "Claim rewards" } }
            </button>

            <div class={styles::CARD}>
                <h3 class={styles::CARD_TITLE}>{"Commission"}</h3>
                <table class={classes!(styles::TABLE, "mt-2")}>
                    <thead class={styles::TABLE_HEAD}>
                        <tr><th class="py-2">{"Period"}</th><th class="py-2">{"Per ad"}</th><th class="py-2">{"Per streak"}</th></tr>
                    </thead>
                    <tbody>
                        <tr class={styles::TABLE_ROW}>
                            <td class="py-2">{"First 30 days"}</td>
                            <td class="py-2">{format_usd(first_month.per_ad)}</td>
                            <td class="py-2">{format_usd(first_month.streak)}</td>
                        </tr>
                        <tr class={styles::TABLE_ROW}>
                            <td class="py-2">{"After"}</td>
                            <td class="py-2">{format_usd(later.per_ad)}</td>
                            <td class="py-2">{format_usd(later.streak)}</td>
                        </tr>
                    </tbody>
                </table>
            </div>

            <div class={styles::CARD}>
                <h3 class={styles::CARD_TITLE}>{"Your friends"}</h3>
                if data.referrals.is_empty() {
                    <p class={classes!(styles::TEXT_SMALL, "mt-2")}>{"No friends yet. Share your link to start earning."}</p>
                } else {
                    <table class={classes!(styles::TABLE, "mt-2")}>
                        <thead class={styles::TABLE_HEAD}>
                            <tr><th class="py-2">{"Name"}</th><th class="py-2">{"Ads"}</th><th class="py-2">{"Earned"}</th><th class="py-2">{"Rate"}</th></tr>
                        </thead>
                        <tbody>
                            { for data.referrals.iter().map(|r| html! { <ReferralRow key={r.id.clone()} referral={r.clone()} /> }) }
                        </tbody>
                    </table>
                }
            </div>
        </div>
    }
}

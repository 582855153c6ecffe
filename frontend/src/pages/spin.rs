use std::f64::consts::PI;

use chrono::Utc;
use gloo_timers::callback::Interval;
use gloo_timers::future::TimeoutFuture;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use shared::constants::{AUTH_USER_ENDPOINT, SPIN_REVEAL_DELAY_MS, SPIN_STATUS_ENDPOINT, SPIN_UNAVAILABLE_ERROR, SPIN_USE_ENDPOINT};
use shared::format::{format_time, seconds_until};
use shared::models::{SpinResult, SpinStatus};
use shared::spin::{reward_message, Wheel, SEGMENTS, SEGMENT_ANGLE};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::base::{notify_error, notify_success};
use crate::components::{AdButtons, Loading, QueryError};
use crate::hooks::{invalidate, use_ad_watch, use_query, AdReward};
use crate::{api, styles, telegram};

const WHEEL_SIZE: f64 = 280.0;
const SPIN_TRANSITION: &str = "transform 3s cubic-bezier(0.17, 0.67, 0.12, 0.99)";

fn wheel_background() -> String {
    let stops: Vec<String> = SEGMENTS
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let from = i as f64 * SEGMENT_ANGLE;
            format!("{} {}deg {}deg", s.color, from, from + SEGMENT_ANGLE)
        })
        .collect();
    format!("conic-gradient({})", stops.join(", "))
}

#[derive(Properties, PartialEq)]
struct WheelViewProps {
    rotation: f64,
    spinning: bool,
}

#[function_component(WheelView)]
fn wheel_view(props: &WheelViewProps) -> Html {
    let radius = WHEEL_SIZE / 2.0;
    let transition = if props.spinning { SPIN_TRANSITION } else { "none" };

    html! {
        <div class="relative mx-auto" style={format!("width: {0}px; height: {0}px", WHEEL_SIZE)}>
            <div class="absolute left-1/2 -translate-x-1/2 -top-2 z-10 w-0 h-0 border-l-[12px] border-r-[12px] border-t-[20px] border-l-transparent border-r-transparent border-t-yellow-400"></div>
            <div class="w-full h-full rounded-full shadow-lg border-4 border-yellow-400 relative overflow-hidden"
                style={format!("background: {}; transform: rotate({}deg); transition: {}", wheel_background(), props.rotation, transition)}>
                { for SEGMENTS.iter().enumerate().map(|(i, s)| {
                    let angle = i as f64 * SEGMENT_ANGLE + SEGMENT_ANGLE / 2.0;
                    let rad = (angle - 90.0) * PI / 180.0;
                    let x = radius + radius * 0.65 * rad.cos();
                    let y = radius + radius * 0.65 * rad.sin();
                    html! {
                        <span class="absolute text-[10px] font-bold text-white whitespace-nowrap"
                            style={format!("left: {:.1}px; top: {:.1}px; transform: translate(-50%, -50%) rotate({}deg)", x, y, angle)}>
                            {s.label()}
                        </span>
                    }
                }) }
            </div>
        </div>
    }
}

#[function_component(Spin)]
pub fn spin() -> Html {
    let status = use_query::<SpinStatus>(SPIN_STATUS_ENDPOINT);
    let wheel = use_state(Wheel::new);
    let now = use_state(Utc::now);
    let ads = use_ad_watch(AdReward::Spin);

    {
        let now = now.clone();
        use_effect_with((), move |_| {
            let interval = Interval::new(1000, move || now.set(Utc::now()));
            move || drop(interval)
        });
    }

    let on_spin = {
        let wheel = wheel.clone();
        let can_spin = status.data.as_ref().is_some_and(SpinStatus::can_spin);
        Callback::from(move |_: MouseEvent| {
            if !can_spin {
                notify_error(SPIN_UNAVAILABLE_ERROR);
                return;
            }
            let mut next = (*wheel).clone();
            if !next.start_spin() {
                return;
            }
            wheel.set(next.clone());

            let wheel = wheel.clone();
            spawn_local(async move {
                match api::post_empty::<SpinResult>(SPIN_USE_ENDPOINT).await {
                    Ok(result) => {
                        let message = reward_message(&result);
                        let mut rng = SmallRng::from_entropy();
                        let segment = next.land(result, &mut rng);
                        log::info!("spin landed on segment {}", segment);
                        wheel.set(next.clone());

                        TimeoutFuture::new(SPIN_REVEAL_DELAY_MS).await;
                        next.complete_spin();
                        wheel.set(next);
                        invalidate(AUTH_USER_ENDPOINT);
                        invalidate(SPIN_STATUS_ENDPOINT);
                        telegram::haptic_success();
                        notify_success(message);
                    }
                    Err(e) => {
                        next.abort();
                        wheel.set(next);
                        notify_error(e.user_message());
                    }
                }
            });
        })
    };

    let Some(current) = status.data.clone() else {
        return html! {
            <div class={styles::PAGE}>
                if let Some(err) = status.error.clone() {
                    <QueryError message={err} on_retry={status.refetch.clone()} />
                } else {
                    <Loading />
                }
            </div>
        };
    };

    let countdown = if current.free_spin_available {
        None
    } else {
        seconds_until(current.next_free_spin_at.as_deref(), *now)
    };
    let ad_limit_hit = current.spin_ad_limit > 0 && current.spin_ads_watched >= current.spin_ad_limit;

    html! {
        <div class={styles::PAGE}>
            <h2 class={styles::TEXT_H2}>{"Lucky spin"}</h2>

            <div class={classes!(styles::CARD, "py-6")}>
                <WheelView rotation={wheel.rotation} spinning={wheel.is_spinning} />
                <button onclick={on_spin} disabled={!current.can_spin() || wheel.is_spinning}
                    class={classes!(styles::BUTTON_PRIMARY, "w-full", "mt-6")}>
                    { if wheel.is_spinning { "Spinning...".to_string() } else { format!("Spin ({} available)", current.total_spins()) } }
                </button>
                if let Some(left) = countdown {
                    <p class={classes!(styles::TEXT_HINT, "text-center")}>{format!("Free spin in {}", format_time(left))}</p>
                }
                if let Some(result) = wheel.last_result.as_ref().filter(|_| !wheel.is_spinning) {
                    <p class={classes!(styles::TEXT_SUCCESS, "text-center", "mt-2")}>{reward_message(result)}</p>
                }
            </div>

            <div class={styles::CARD}>
                <div class="flex items-center justify-between mb-3">
                    <h3 class={styles::CARD_TITLE}>{"Earn extra spins"}</h3>
                    <span class={styles::TEXT_SMALL}>
                        {format!("{}/{} ads", current.spin_ads_watched % current.spin_ads_required.max(1), current.spin_ads_required)}
                    </span>
                </div>
                <AdButtons handle={ads} disabled={ad_limit_hit || wheel.is_spinning} />
                <p class={styles::TEXT_HINT}>
                    {format!("Watch {} ads to earn one extra spin.", current.spin_ads_required)}
                </p>
            </div>
        </div>
    }
}

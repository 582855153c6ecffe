use shared::admin::AdminSettingsUpdate;
use shared::constants::{ADMIN_SETTINGS_ENDPOINT, APP_SETTINGS_ENDPOINT};
use shared::models::MutationResponse;
use shared::validation::{first_error_message, parse_amount, parse_count, Validate};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::base::notify_success;
use crate::hooks::{invalidate, use_form_state, use_settings};
use crate::{api, styles};

/// One editable number; every field is kept as text until submit.
#[derive(Properties, PartialEq)]
struct NumberFieldProps {
    label: AttrValue,
    value: String,
    on_change: Callback<String>,
    #[prop_or_default]
    hint: Option<AttrValue>,
}

#[function_component(NumberField)]
fn number_field(props: &NumberFieldProps) -> Html {
    let oninput = props
        .on_change
        .reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value());
    html! {
        <div>
            <label class={styles::TEXT_LABEL}>{props.label.clone()}</label>
            <input class={styles::INPUT} inputmode="decimal" value={props.value.clone()} {oninput} />
            if let Some(hint) = &props.hint {
                <p class={styles::TEXT_HINT}>{hint.clone()}</p>
            }
        </div>
    }
}

#[function_component(SettingsForm)]
pub fn settings_form() -> Html {
    let settings = use_settings();
    let form = use_form_state();
    let current = AdminSettingsUpdate::from(&settings);

    let daily_ad_limit = use_state(|| current.daily_ad_limit.to_string());
    let reward_per_ad = use_state(|| current.reward_per_ad.to_string());
    let minimum_clicks = use_state(|| current.minimum_clicks.to_string());
    let cost_per_click = use_state(|| current.cost_per_click.to_string());
    let wallet_change_fee = use_state(|| current.wallet_change_fee.to_string());
    let minimum_withdrawal = use_state(|| current.minimum_withdrawal.to_string());
    let referral_reward = use_state(|| current.referral_reward.to_string());

    // Settings load after mount; refill the fields once they arrive.
    {
        let fields = (
            daily_ad_limit.clone(),
            reward_per_ad.clone(),
            minimum_clicks.clone(),
            cost_per_click.clone(),
            wallet_change_fee.clone(),
            minimum_withdrawal.clone(),
            referral_reward.clone(),
        );
        use_effect_with(current.clone(), move |c| {
            fields.0.set(c.daily_ad_limit.to_string());
            fields.1.set(c.reward_per_ad.to_string());
            fields.2.set(c.minimum_clicks.to_string());
            fields.3.set(c.cost_per_click.to_string());
            fields.4.set(c.wallet_change_fee.to_string());
            fields.5.set(c.minimum_withdrawal.to_string());
            fields.6.set(c.referral_reward.to_string());
            || ()
        });
    }

    let onsubmit = {
        let form = form.clone();
        let (a, b, c, d, e, f, g) = (
            daily_ad_limit.clone(),
            reward_per_ad.clone(),
            minimum_clicks.clone(),
            cost_per_click.clone(),
            wallet_change_fee.clone(),
            minimum_withdrawal.clone(),
            referral_reward.clone(),
        );
        Callback::from(move |ev: SubmitEvent| {
            ev.prevent_default();
            if form.pending {
                return;
            }
            let update = AdminSettingsUpdate {
                daily_ad_limit: parse_count(&a).unwrap_or(0),
                reward_per_ad: parse_amount(&b).unwrap_or(-1.0),
                minimum_clicks: parse_count(&c).unwrap_or(0),
                cost_per_click: parse_amount(&d).unwrap_or(-1.0),
                wallet_change_fee: parse_amount(&e).unwrap_or(-1.0),
                minimum_withdrawal: parse_amount(&f).unwrap_or(-1.0),
                referral_reward: parse_amount(&g).unwrap_or(-1.0),
            };
            if let Err(errors) = update.validate() {
                form.handle_error.emit(first_error_message(&errors));
                return;
            }

            form.set_pending.emit(true);
            let form = form.clone();
            spawn_local(async move {
                match api::post::<_, MutationResponse>(ADMIN_SETTINGS_ENDPOINT, &update).await {
                    Ok(r) => {
                        invalidate(APP_SETTINGS_ENDPOINT);
                        let message = r.message.unwrap_or_else(|| "Settings saved".to_string());
                        notify_success(message.clone());
                        form.handle_success.emit(message);
                    }
                    Err(err) => form.handle_error.emit(err.user_message()),
                }
            });
        })
    };

    let setter = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |v: String| state.set(v))
    };

    html! {
        <div class={styles::CARD}>
            <h3 class={styles::CARD_TITLE}>{"App settings"}</h3>
            <form {onsubmit} class={styles::FORM}>
                <div class="grid grid-cols-2 gap-3">
                    <NumberField label="Daily ad limit" value={(*daily_ad_limit).clone()} on_change={setter(&daily_ad_limit)} />
                    <NumberField label="Reward per ad" value={(*reward_per_ad).clone()} on_change={setter(&reward_per_ad)} hint="PAD" />
                    <NumberField label="Minimum clicks" value={(*minimum_clicks).clone()} on_change={setter(&minimum_clicks)} />
                    <NumberField label="Cost per click" value={(*cost_per_click).clone()} on_change={setter(&cost_per_click)} hint="PAD" />
                    <NumberField label="Wallet change fee" value={(*wallet_change_fee).clone()} on_change={setter(&wallet_change_fee)} hint="PAD" />
                    <NumberField label="Minimum withdrawal" value={(*minimum_withdrawal).clone()} on_change={setter(&minimum_withdrawal)} hint="USD" />
                    <NumberField label="Referral reward" value={(*referral_reward).clone()} on_change={setter(&referral_reward)} hint="PAD" />
                </div>
                if !form.error.is_empty() {
                    <p class={styles::TEXT_ERROR}>{form.error.clone()}</p>
                }
                if !form.success.is_empty() {
                    <p class={styles::TEXT_SUCCESS}>{form.success.clone()}</p>
                }
                <button type="submit" disabled={form.pending} class={classes!(styles::BUTTON_PRIMARY, "w-full")}>
                    { if form.pending { "Saving..." } else { "Save settings" } }
                </button>
            </form>
        </div>
    }
}

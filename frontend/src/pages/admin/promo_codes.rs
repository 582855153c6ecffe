use shared::constants::{ADMIN_PROMO_CODES_ENDPOINT, PROMO_CREATE_ENDPOINT};
use shared::format::{format_date, format_pad};
use shared::models::{MutationResponse, PromoCode};
use shared::promo::{normalize_code, CreatePromoCodeRequest};
use shared::validation::{first_error_message, parse_amount, parse_count, Validate};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::base::notify_success;
use crate::components::{Loading, QueryError};
use crate::hooks::{invalidate, use_form_state, use_query};
use crate::{api, styles};

fn input_value(e: InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

#[function_component(CreatePromoForm)]
fn create_promo_form() -> Html {
    let form = use_form_state();
    let code = use_state(String::new);
    let reward = use_state(String::new);
    let currency = use_state(|| "PAD".to_string());
    let usage_limit = use_state(|| "100".to_string());
    let per_user = use_state(|| "1".to_string());
    let expires = use_state(String::new);

    let onsubmit = {
        let form = form.clone();
        let (code, reward, currency, usage_limit, per_user, expires) = (
            code.clone(),
            reward.clone(),
            currency.clone(),
            usage_limit.clone(),
            per_user.clone(),
            expires.clone(),
        );
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.pending {
                return;
            }
            // date input yields YYYY-MM-DD; codes expire at the end of that day
            let expires_at = Some(expires.trim())
                .filter(|d| !d.is_empty())
                .map(|d| format!("{}T23:59:59Z", d));
            let request = CreatePromoCodeRequest {
                code: normalize_code(&code),
                reward_amount: parse_amount(&reward).unwrap_or(0.0),
                reward_currency: (*currency).clone(),
                usage_limit: parse_count(&usage_limit).unwrap_or(0),
                per_user_limit: parse_count(&per_user).unwrap_or(0),
                expires_at,
            };
            if let Err(errors) = request.validate() {
                form.handle_error.emit(first_error_message(&errors));
                return;
            }

            form.set_pending.emit(true);
            let form = form.clone();
            let code = code.clone();
            spawn_local(async move {
                match api::post::<_, MutationResponse>(PROMO_CREATE_ENDPOINT, &request).await {
                    Ok(_) => {
                        code.set(String::new());
                        invalidate(ADMIN_PROMO_CODES_ENDPOINT);
                        let message = format!("Promo code {} created", request.code);
                        notify_success(message.clone());
                        form.handle_success.emit(message);
                    }
                    Err(err) => form.handle_error.emit(err.user_message()),
                }
            });
        })
    };

    let on_currency = {
        let currency = currency.clone();
        Callback::from(move |e: Event| currency.set(e.target_unchecked_into::<HtmlSelectElement>().value()))
    };

    html! {
        <div class={styles::CARD}>
            <h3 class={styles::CARD_TITLE}>{"New promo code"}</h3>
            <form {onsubmit} class={styles::FORM}>
                <input class={classes!(styles::INPUT, "uppercase")} placeholder="CODE" maxlength="20" value={(*code).clone()}
                    oninput={let code = code.clone(); move |e: InputEvent| code.set(normalize_code(&input_value(e)))} />
                <div class="grid grid-cols-2 gap-3">
                    <input class={styles::INPUT} inputmode="decimal" placeholder="Reward" value={(*reward).clone()}
                        oninput={let reward = reward.clone(); move |e: InputEvent| reward.set(input_value(e))} />
                    <select class={styles::SELECT} onchange={on_currency}>
                        <option value="PAD" selected={*currency == "PAD"}>{"PAD"}</option>
                        <option value="USD" selected={*currency == "USD"}>{"USD"}</option>
                        <option value="BUG" selected={*currency == "BUG"}>{"BUG"}</option>
                    </select>
                    <div>
                        <label class={styles::TEXT_LABEL}>{"Total uses"}</label>
                        <input class={styles::INPUT} inputmode="numeric" value={(*usage_limit).clone()}
                            oninput={let usage_limit = usage_limit.clone(); move |e: InputEvent| usage_limit.set(input_value(e))} />
                    </div>
                    <div>
                        <label class={styles::TEXT_LABEL}>{"Per user"}</label>
                        <input class={styles::INPUT} inputmode="numeric" value={(*per_user).clone()}
                            oninput={let per_user = per_user.clone(); move |e: InputEvent| per_user.set(input_value(e))} />
                    </div>
                </div>
                <div>
                    <label class={styles::TEXT_LABEL}>{"Expires (optional)"}</label>
                    <input type="date" class={styles::INPUT} value={(*expires).clone()}
                        oninput={let expires = expires.clone(); move |e: InputEvent| expires.set(input_value(e))} />
                </div>
                if !form.error.is_empty() {
                    <p class={styles::TEXT_ERROR}>{form.error.clone()}</p>
                }
                if !form.success.is_empty() {
                    <p class={styles::TEXT_SUCCESS}>{form.success.clone()}</p>
                }
                <button type="submit" disabled={form.pending} class={classes!(styles::BUTTON_PRIMARY, "w-full")}>
                    { if form.pending { "Creating..." } else { "Create code" } }
                </button>
            </form>
        </div>
    }
}

#[function_component(PromoCodes)]
pub fn promo_codes() -> Html {
    let codes = use_query::<Vec<PromoCode>>(ADMIN_PROMO_CODES_ENDPOINT);

    let list = match (&codes.data, &codes.error) {
        (Some(list), _) if list.is_empty() => html! { <p class={styles::TEXT_SMALL}>{"No promo codes yet."}</p> },
        (Some(list), _) => html! {
            <table class={styles::TABLE}>
                <thead class={styles::TABLE_HEAD}>
                    <tr><th class="py-2">{"Code"}</th><th class="py-2">{"Reward"}</th><th class="py-2">{"Used"}</th><th class="py-2">{"Expires"}</th></tr>
                </thead>
                <tbody>
                    { for list.iter().map(|p| html! {
                        <tr key={p.code.clone()} class={styles::TABLE_ROW}>
                            <td class="py-2 font-mono">
                                {p.code.clone()}
                                if !p.is_active {
                                    <span class={classes!(styles::status_badge("inactive"), "ml-1")}>{"off"}</span>
                                }
                            </td>
                            <td class="py-2">{format!("{} {}", format_pad(p.reward_amount), p.reward_currency.clone().unwrap_or_else(|| "PAD".to_string()))}</td>
                            <td class="py-2">
                                { match p.remaining_uses() {
                                    Some(left) => format!("{} ({} left)", p.usage_count, left),
                                    None => p.usage_count.to_string(),
                                } }
                            </td>
                            <td class="py-2 text-xs">{format_date(p.expires_at.as_deref())}</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        },
        (None, Some(err)) => html! { <QueryError message={err.clone()} on_retry={codes.refetch.clone()} /> },
        (None, None) => html! { <Loading /> },
    };

    html! {
        <>
            <CreatePromoForm />
            <div class={styles::CARD}>
                <h3 class={classes!(styles::CARD_TITLE, "mb-2")}>{"Existing codes"}</h3>
                {list}
            </div>
        </>
    }
}

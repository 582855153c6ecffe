use shared::constants::{AUTH_USER_ENDPOINT, PROMO_REDEEM_ENDPOINT};
use shared::format::format_pad;
use shared::models::PromoRedeemResponse;
use shared::promo::{normalize_code, RedeemPromoCodeRequest};
use shared::validation::{first_error_message, Validate};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::base::notify_success;
use crate::hooks::{invalidate, use_form_state};
use crate::{api, styles, telegram};

#[function_component(Promo)]
pub fn promo() -> Html {
    let form = use_form_state();
    let code = use_state(String::new);

    let oninput = {
        let code = code.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            code.set(normalize_code(&value));
        })
    };

    let onsubmit = {
        let form = form.clone();
        let code = code.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.pending {
                return;
            }
            let request = RedeemPromoCodeRequest::new(&code);
            if let Err(errors) = request.validate() {
                form.handle_error.emit(first_error_message(&errors));
                return;
            }

            form.set_pending.emit(true);
            let form = form.clone();
            let code = code.clone();
            spawn_local(async move {
                match api::post::<_, PromoRedeemResponse>(PROMO_REDEEM_ENDPOINT, &request).await {
                    Ok(r) => {
                        code.set(String::new());
                        invalidate(AUTH_USER_ENDPOINT);
                        telegram::haptic_success();
                        let currency = r.currency.unwrap_or_else(|| "PAD".to_string());
                        let message = r.message.unwrap_or_else(|| {
                            format!("Code redeemed: +{} {}", format_pad(r.reward), currency)
                        });
                        notify_success(message.clone());
                        form.handle_success.emit(message);
                    }
                    Err(e) => {
                        log::warn!("promo redeem failed: {}", e);
                        form.handle_error.emit(e.user_message());
                    }
                }
            });
        })
    };

    html! {
        <div class={styles::PAGE}>
            <h2 class={styles::TEXT_H2}>{"Promo code"}</h2>
            <div class={styles::CARD}>
                <p class={styles::CARD_TEXT}>{"Got a code from our channel? Redeem it here for bonus rewards."}</p>
                <form {onsubmit} class={styles::FORM}>
                    <input class={classes!(if form.error.is_empty() { styles::INPUT } else { styles::INPUT_ERROR }, "uppercase", "tracking-widest")}
                        placeholder="ENTER CODE" maxlength="20" value={(*code).clone()} {oninput} />
                    if !form.error.is_empty() {
                        <p class={styles::TEXT_ERROR}>{form.error.clone()}</p>
                    }
                    if !form.success.is_empty() {
                        <p class={styles::TEXT_SUCCESS}>{form.success.clone()}</p>
                    }
                    <button type="submit" disabled={form.pending || code.is_empty()} class={classes!(styles::BUTTON_PRIMARY, "w-full")}>
                        { if form.pending { "Redeeming..." } else { "Redeem" } }
                    </button>
                </form>
            </div>
        </div>
    }
}

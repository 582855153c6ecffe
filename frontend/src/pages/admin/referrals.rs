use shared::constants::REFERRAL_SEARCH_ENDPOINT;
use shared::models::ReferralLookup;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_form_state;
use crate::{api, styles};

#[function_component(ReferralSearch)]
pub fn referral_search() -> Html {
    let form = use_form_state();
    let code = use_state(String::new);
    let result = use_state(|| None::<ReferralLookup>);

    let onsubmit = {
        let form = form.clone();
        let code = code.clone();
        let result = result.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let trimmed = code.trim().to_string();
            if trimmed.is_empty() || form.pending {
                return;
            }
            form.set_pending.emit(true);
            let form = form.clone();
            let result = result.clone();
            let path = format!("{}/{}", REFERRAL_SEARCH_ENDPOINT, js_sys::encode_uri_component(&trimmed));
            spawn_local(async move {
                match api::get::<ReferralLookup>(&path).await {
                    Ok(found) => {
                        let message = if found.found { "Referral code found" } else { "No user with that code" };
                        result.set(Some(found));
                        form.handle_success.emit(message.to_string());
                    }
                    Err(err) => {
                        result.set(None);
                        form.handle_error.emit(err.user_message());
                    }
                }
            });
        })
    };

    html! {
        <div class={styles::CARD}>
            <h3 class={styles::CARD_TITLE}>{"Referral lookup"}</h3>
            <form {onsubmit} class="flex items-end gap-2 mt-2">
                <input class={styles::INPUT} placeholder="Referral code" value={(*code).clone()}
                    oninput={let code = code.clone(); move |e: InputEvent| {
                        code.set(e.target_unchecked_into::<HtmlInputElement>().value())
                    }} />
                <button type="submit" disabled={form.pending} class={styles::BUTTON_SECONDARY}>{"Search"}</button>
            </form>
            if !form.error.is_empty() {
                <p class={classes!(styles::TEXT_ERROR, "mt-2")}>{form.error.clone()}</p>
            }
            if let Some(found) = result.as_ref().filter(|r| r.found) {
                <dl class="mt-3 grid grid-cols-2 gap-1 text-sm">
                    <dt class={styles::STAT_LABEL}>{"User id"}</dt>
                    <dd>{found.user_id.clone().unwrap_or_default()}</dd>
                    <dt class={styles::STAT_LABEL}>{"Username"}</dt>
                    <dd>{found.username.clone().map(|u| format!("@{}", u)).unwrap_or_else(|| "-".to_string())}</dd>
                    <dt class={styles::STAT_LABEL}>{"Friends"}</dt>
                    <dd>{found.total_friends}</dd>
                </dl>
            } else {
                if !form.success.is_empty() {
                    <p class={classes!(styles::TEXT_SMALL, "mt-2")}>{form.success.clone()}</p>
                }
            }
        </div>
    }
}

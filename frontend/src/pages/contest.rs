use shared::constants::CONTEST_SUBMIT_ENDPOINT;
use shared::contest::{ContestSubmission, ContestType};
use shared::models::MutationResponse;
use shared::validation::{first_error_message, Validate};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::base::notify_success;
use crate::hooks::use_form_state;
use crate::{api, styles, telegram};

#[function_component(Contest)]
pub fn contest() -> Html {
    let form = use_form_state();
    let contest_type = use_state(ContestType::default);
    let url = use_state(String::new);

    let onsubmit = {
        let form = form.clone();
        let contest_type = contest_type.clone();
        let url = url.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.pending {
                return;
            }
            let submission = ContestSubmission::new(*contest_type, &url);
            if let Err(errors) = submission.validate() {
                form.handle_error.emit(first_error_message(&errors));
                return;
            }

            form.set_pending.emit(true);
            let form = form.clone();
            let url = url.clone();
            spawn_local(async move {
                match api::post::<_, MutationResponse>(CONTEST_SUBMIT_ENDPOINT, &submission).await {
                    Ok(r) => {
                        url.set(String::new());
                        telegram::haptic_success();
                        let message = r
                            .message
                            .unwrap_or_else(|| "We are checking your participation, please wait!".to_string());
                        notify_success(message.clone());
                        form.handle_success.emit(message);
                    }
                    Err(e) => {
                        log::warn!("{} submission failed: {}", submission.contest_type.id(), e);
                        form.handle_error.emit(e.user_message());
                    }
                }
            });
        })
    };

    html! {
        <div class={styles::PAGE}>
            <h2 class={styles::TEXT_H2}>{"Contest"}</h2>
            <div class={styles::CARD}>
                <p class={styles::CARD_TEXT}>
                    {"Make content about the app, put your invite link in the description and send us the link once it gets 100+ views. More views, bigger reward."}
                </p>
            </div>
            <div class="flex gap-2">
                { for ContestType::ALL.iter().map(|&t| {
                    let contest_type = contest_type.clone();
                    let class = if *contest_type == t { styles::TAB_ACTIVE } else { styles::TAB };
                    html! {
                        <button {class} onclick={move |_: MouseEvent| contest_type.set(t)}>{t.title()}</button>
                    }
                }) }
            </div>
            <div class={styles::CARD}>
                <h3 class={styles::CARD_TITLE}>{format!("{} · {}", contest_type.title(), contest_type.prize())}</h3>
                <p class={styles::CARD_TEXT}>{contest_type.mission()}</p>
                <form {onsubmit} class={styles::FORM}>
                    <input class={if form.error.is_empty() { styles::INPUT } else { styles::INPUT_ERROR }}
                        placeholder="https://..." value={(*url).clone()}
                        oninput={let url = url.clone(); move |e: InputEvent| {
                            url.set(e.target_unchecked_into::<HtmlInputElement>().value())
                        }} />
                    if !form.error.is_empty() {
                        <p class={styles::TEXT_ERROR}>{form.error.clone()}</p>
                    }
                    if !form.success.is_empty() {
                        <p class={styles::TEXT_SUCCESS}>{form.success.clone()}</p>
                    }
                    <button type="submit" disabled={form.pending || url.trim().is_empty()} class={classes!(styles::BUTTON_PRIMARY, "w-full")}>
                        { if form.pending { "Sending..." } else { "Confirm" } }
                    </button>
                </form>
            </div>
        </div>
    }
}

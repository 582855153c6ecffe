use serde::Serialize;
use shared::constants::{
    AUTH_USER_ENDPOINT, WALLET_CHANGE_ENDPOINT, WALLET_DETAILS_ENDPOINT, WALLET_SAVE_ENDPOINT,
    WALLET_STARS_ENDPOINT, WALLET_TON_ENDPOINT, WALLET_USDT_ENDPOINT,
};
use shared::format::{format_pad, short_address};
use shared::models::{MutationResponse, WalletDetails};
use shared::payment::PaymentMethod;
use shared::validation::{error_message, first_error_message, Validate};
use shared::wallet::{
    missing_wallets, normalize_username, ChangeWalletRequest, SaveStarsWalletRequest,
    SaveTonWalletRequest, SaveUsdtWalletRequest, SaveWalletRequest,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::base::notify_success;
use crate::components::{Loading, QueryError};
use crate::hooks::{invalidate, use_form_state, use_query, use_settings, use_user, FormState};
use crate::{api, styles, Route};

fn input_value(e: InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

/// Posts a validated wallet body and refreshes the wallet view on success.
fn submit<B>(form: &FormState, path: &'static str, body: B, done: String)
where
    B: Serialize + 'static,
{
    form.set_pending.emit(true);
    let form = form.clone();
    spawn_local(async move {
        match api::post::<_, MutationResponse>(path, &body).await {
            Ok(r) => {
                invalidate(WALLET_DETAILS_ENDPOINT);
                invalidate(AUTH_USER_ENDPOINT);
                let message = r.message.unwrap_or(done);
                notify_success(message.clone());
                form.handle_success.emit(message);
            }
            Err(e) => form.handle_error.emit(e.user_message()),
        }
    });
}

fn save_single(form: &FormState, method: PaymentMethod, input: &str) {
    let input = input.trim().to_string();
    let done = format!("{} wallet saved", method.info().name);
    let result = match method {
        PaymentMethod::Ton => {
            let body = SaveTonWalletRequest { ton_wallet_address: input };
            body.validate().map(|_| submit(form, WALLET_TON_ENDPOINT, body, done))
        }
        PaymentMethod::UsdtBep20 => {
            let body = SaveUsdtWalletRequest { usdt_wallet_address: input };
            body.validate().map(|_| submit(form, WALLET_USDT_ENDPOINT, body, done))
        }
        PaymentMethod::TelegramStars => {
            let body = SaveStarsWalletRequest { telegram_username: normalize_username(input) };
            body.validate().map(|_| submit(form, WALLET_STARS_ENDPOINT, body, done))
        }
        _ => Ok(()),
    };
    if let Err(errors) = result {
        form.handle_error.emit(first_error_message(&errors));
    }
}

#[derive(Properties, PartialEq)]
struct WalletFieldProps {
    method: PaymentMethod,
    saved: Option<String>,
    can_change: bool,
}

#[function_component(WalletField)]
fn wallet_field(props: &WalletFieldProps) -> Html {
    let user = use_user();
    let settings = use_settings();
    let form = use_form_state();
    let value = use_state(String::new);
    let editing = use_state(|| false);
    let method = props.method;
    let info = method.info();

    let on_save = {
        let form = form.clone();
        let value = value.clone();
        let editing = editing.clone();
        let saved = props.saved.is_some();
        let balance = user.data.as_ref().map_or(0.0, |u| u.balance);
        let fee = settings.wallet_change_fee;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.pending {
                return;
            }
            if !saved {
                save_single(&form, method, &value);
                return;
            }
            let request = ChangeWalletRequest {
                method,
                new_address: value.trim().to_string(),
            };
            match request.validate(balance, fee) {
                Ok(()) => {
                    editing.set(false);
                    submit(&form, WALLET_CHANGE_ENDPOINT, request, format!("{} wallet changed", info.name));
                }
                Err(err) => form.handle_error.emit(error_message(&err)),
            }
        })
    };

    let show_input = props.saved.is_none() || *editing;

    html! {
        <div class={styles::CARD}>
            <div class="flex items-center justify-between">
                <h4 class={styles::CARD_TITLE}>{info.name}</h4>
                if let Some(saved) = &props.saved {
                    <span class={styles::TEXT_SMALL}>{short_address(saved)}</span>
                }
            </div>
            if show_input {
                <form onsubmit={on_save} class="mt-2 space-y-2">
                    <input class={styles::INPUT} placeholder={info.prompt} value={(*value).clone()}
                        oninput={let value = value.clone(); move |e: InputEvent| value.set(input_value(e))} />
                    if props.saved.is_some() {
                        <p class={styles::TEXT_HINT}>{format!("Changing costs {} PAD", format_pad(settings.wallet_change_fee))}</p>
                    }
                    <button type="submit" disabled={form.pending || value.trim().is_empty()} class={classes!(styles::BUTTON_PRIMARY, "w-full")}>
                        { if form.pending { "Saving..." } else if props.saved.is_some() { "Change wallet" } else { "Save" } }
                    </button>
                </form>
            } else {
                if props.can_change {
                    <button onclick={let editing = editing.clone(); move |_: MouseEvent| editing.set(true)}
                        class={classes!(styles::BUTTON_SMALL, "mt-2")}>{"Change"}</button>
                }
            }
            if !form.error.is_empty() {
                <p class={classes!(styles::TEXT_ERROR, "mt-2")}>{form.error.clone()}</p>
            }
        </div>
    }
}

#[function_component(QuickSetup)]
fn quick_setup() -> Html {
    let form = use_form_state();
    let ton = use_state(String::new);
    let usdt = use_state(String::new);
    let stars = use_state(String::new);

    let onsubmit = {
        let form = form.clone();
        let (ton, usdt, stars) = (ton.clone(), usdt.clone(), stars.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = SaveWalletRequest::from_inputs(&ton, &usdt, &stars);
            if request.is_empty() {
                form.handle_error.emit("Fill in at least one wallet".to_string());
                return;
            }
            match request.validate() {
                Ok(()) => submit(&form, WALLET_SAVE_ENDPOINT, request, "Wallets saved".to_string()),
                Err(errors) => form.handle_error.emit(first_error_message(&errors)),
            }
        })
    };

    let field = |label: &'static str, placeholder: &'static str, state: &UseStateHandle<String>| {
        let state = state.clone();
        html! {
            <div>
                <label class={styles::TEXT_LABEL}>{label}</label>
                <input class={styles::INPUT} {placeholder} value={(*state).clone()}
                    oninput={move |e: InputEvent| state.set(input_value(e))} />
            </div>
        }
    };

    html! {
        <div class={styles::CARD}>
            <h3 class={styles::CARD_TITLE}>{"Set up your wallets"}</h3>
            <form {onsubmit} class={styles::FORM}>
                { field("TON", PaymentMethod::Ton.info().prompt, &ton) }
                { field("USDT (BEP-20)", PaymentMethod::UsdtBep20.info().prompt, &usdt) }
                { field("Telegram Stars", PaymentMethod::TelegramStars.info().prompt, &stars) }
                if !form.error.is_empty() {
                    <p class={styles::TEXT_ERROR}>{form.error.clone()}</p>
                }
                <button type="submit" disabled={form.pending} class={classes!(styles::BUTTON_PRIMARY, "w-full")}>
                    { if form.pending { "Saving..." } else { "Save wallets" } }
                </button>
            </form>
        </div>
    }
}

#[function_component(Wallet)]
pub fn wallet() -> Html {
    let details = use_query::<WalletDetails>(WALLET_DETAILS_ENDPOINT);

    let Some(wallet) = details.data.clone() else {
        return html! {
            <div class={styles::PAGE}>
                if let Some(err) = details.error.clone() {
                    <QueryError message={err} on_retry={details.refetch.clone()} />
                } else {
                    <Loading />
                }
            </div>
        };
    };

    let missing = missing_wallets(&wallet);

    html! {
        <div class={styles::PAGE}>
            <div class="flex items-center justify-between">
                <h2 class={styles::TEXT_H2}>{"Wallet"}</h2>
                <Link<Route> to={Route::Withdraw} classes={styles::LINK}>{"Withdraw"}</Link<Route>>
            </div>
            if !wallet.has_any() {
                <QuickSetup />
            } else {
                if !missing.is_empty() {
                    <p class={styles::TEXT_SMALL}>
                        {format!("Not set yet: {}", missing.iter().map(|m| m.info().name).collect::<Vec<_>>().join(", "))}
                    </p>
                }
                { for [PaymentMethod::Ton, PaymentMethod::UsdtBep20, PaymentMethod::TelegramStars].into_iter().map(|method| html! {
                    <WalletField key={method.id()} {method}
                        saved={method.saved_address(&wallet).map(str::to_string)}
                        can_change={wallet.can_change} />
                }) }
            }
        </div>
    }
}

use shared::constants::{
    AUTH_USER_ENDPOINT, MIN_FRIENDS_FOR_WITHDRAWAL, WALLET_DETAILS_ENDPOINT, WITHDRAWALS_ENDPOINT,
};
use shared::format::{format_crypto, format_date, format_usd, short_address};
use shared::models::{MutationResponse, User, WalletDetails, Withdrawal};
use shared::payment::{available_methods, method_label, PaymentMethod};
use shared::validation::parse_amount;
use shared::withdrawal::{WithdrawalBlock, WithdrawalDraft};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Loading, QueryError};
use crate::hooks::{invalidate, use_form_state, use_query, use_user};
use crate::{api, styles, Route};

#[derive(Properties, PartialEq)]
struct WithdrawFormProps {
    user: User,
    wallet: WalletDetails,
}

#[function_component(WithdrawForm)]
fn withdraw_form(props: &WithdrawFormProps) -> Html {
    let methods = available_methods(props.user.usd_balance);
    let form = use_form_state();
    let method = use_state(|| methods.first().copied());
    let amount = use_state(String::new);
    let address = use_state(String::new);

    // The balance can drop below the selected method's minimum after a payout.
    let selected = (*method).filter(|m| methods.contains(m)).or_else(|| methods.first().copied());

    let on_method = {
        let method = method.clone();
        let address = address.clone();
        Callback::from(move |e: Event| {
            let id = e.target_unchecked_into::<HtmlSelectElement>().value();
            method.set(PaymentMethod::from_id(&id));
            address.set(String::new());
        })
    };

    let on_max = {
        let amount = amount.clone();
        let balance = props.user.usd_balance;
        Callback::from(move |_: MouseEvent| amount.set(format!("{}", balance)))
    };

    let onsubmit = {
        let form = form.clone();
        let amount = amount.clone();
        let address = address.clone();
        let user = props.user.clone();
        let wallet = props.wallet.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.pending {
                return;
            }
            let Some(method) = selected else {
                form.handle_error.emit("Choose a payout method".to_string());
                return;
            };
            let draft = WithdrawalDraft {
                method,
                amount: parse_amount(&amount).unwrap_or(0.0),
                address: &address,
                balance: user.usd_balance,
                friends_invited: user.friends_invited,
                wallet: &wallet,
            };
            let request = match draft.validate() {
                Ok(request) => request,
                Err(block) => {
                    log::info!("withdrawal blocked: {:?}", block);
                    form.handle_error.emit(block.to_string());
                    return;
                }
            };

            form.set_pending.emit(true);
            let form = form.clone();
            let amount = amount.clone();
            spawn_local(async move {
                match api::post::<_, MutationResponse>(WITHDRAWALS_ENDPOINT, &request).await {
                    Ok(r) => {
                        amount.set(String::new());
                        invalidate(WITHDRAWALS_ENDPOINT);
                        invalidate(AUTH_USER_ENDPOINT);
                        form.handle_success.emit(
                            r.message.unwrap_or_else(|| "Withdrawal requested. It will be reviewed shortly".to_string()),
                        );
                    }
                    Err(e) => form.handle_error.emit(e.user_message()),
                }
            });
        })
    };

    if props.user.friends_invited < MIN_FRIENDS_FOR_WITHDRAWAL {
        return html! {
            <div class={styles::CARD}>
                <p class={styles::TEXT_BODY}>
                    {WithdrawalBlock::NotEnoughFriends { invited: props.user.friends_invited }.to_string()}
                </p>
                <Link<Route> to={Route::Affiliates} classes={classes!(styles::BUTTON_PRIMARY, "w-full", "mt-3")}>{"Invite friends"}</Link<Route>>
            </div>
        };
    }

    let Some(current) = selected else {
        let cheapest = PaymentMethod::ALL
            .iter()
            .map(|m| m.info().min_amount)
            .fold(f64::INFINITY, f64::min);
        return html! {
            <div class={styles::CARD}>
                <p class={styles::TEXT_BODY}>
                    {format!("Your balance of {} is below every payout minimum (from {}).", format_usd(props.user.usd_balance), format_usd(cheapest))}
                </p>
            </div>
        };
    };

    let info = current.info();
    let parsed = parse_amount(&amount).unwrap_or(0.0);
    let saved = current.saved_address(&props.wallet);

    html! {
        <div class={styles::CARD}>
            <h3 class={styles::CARD_TITLE}>{"Request a payout"}</h3>
            <form {onsubmit} class={styles::FORM}>
                <div>
                    <label class={styles::TEXT_LABEL}>{"Method"}</label>
                    <select class={styles::SELECT} onchange={on_method}>
                        { for methods.iter().map(|m| html! {
                            <option value={m.id()} selected={*m == current}>{m.info().name}</option>
                        }) }
                    </select>
                    <p class={styles::TEXT_HINT}>
                        {format!("{}. Minimum {}", current.commission_text(), format_crypto(info.min_amount, "USD"))}
                    </p>
                </div>
                if current.uses_saved_wallet() {
                    <div class={styles::TEXT_SMALL}>
                        { match saved {
                            Some(addr) => html! { <span>{format!("Paying to {}", short_address(addr))}</span> },
                            None => html! {
                                <Link<Route> to={Route::Wallet} classes={styles::LINK}>{"Save a wallet for this method first"}</Link<Route>>
                            },
                        } }
                    </div>
                } else {
                    <div>
                        <label class={styles::TEXT_LABEL}>{"Address"}</label>
                        <input class={styles::INPUT} placeholder={info.prompt} value={(*address).clone()}
                            oninput={let address = address.clone(); move |e: InputEvent| {
                                address.set(e.target_unchecked_into::<HtmlInputElement>().value())
                            }} />
                    </div>
                }
                <div>
                    <div class="flex items-center justify-between">
                        <label class={styles::TEXT_LABEL}>{"Amount (USD)"}</label>
                        <button type="button" onclick={on_max} class={styles::BUTTON_SMALL}>{"Max"}</button>
                    </div>
                    <input class={styles::INPUT} inputmode="decimal" value={(*amount).clone()}
                        oninput={let amount = amount.clone(); move |e: InputEvent| {
                            amount.set(e.target_unchecked_into::<HtmlInputElement>().value())
                        }} />
                    if parsed > 0.0 {
                        <p class={styles::TEXT_HINT}>
                            {format!("You receive {} after {} commission", format_usd(current.net_amount(parsed)), format_usd(current.commission(parsed)))}
                        </p>
                    }
                </div>
                if !form.error.is_empty() {
                    <p class={styles::TEXT_ERROR}>{form.error.clone()}</p>
                }
                if !form.success.is_empty() {
                    <p class={styles::TEXT_SUCCESS}>{form.success.clone()}</p>
                }
                <button type="submit" disabled={form.pending} class={classes!(styles::BUTTON_PRIMARY, "w-full")}>
                    { if form.pending { "Submitting..." } else { "Withdraw" } }
                </button>
            </form>
        </div>
    }
}

#[function_component(History)]
fn history() -> Html {
    let history = use_query::<Vec<Withdrawal>>(WITHDRAWALS_ENDPOINT);

    let body = match (&history.data, &history.error) {
        (Some(list), _) if list.is_empty() => html! { <p class={styles::TEXT_SMALL}>{"No withdrawals yet."}</p> },
        (Some(list), _) => html! {
            <table class={styles::TABLE}>
                <thead class={styles::TABLE_HEAD}>
                    <tr><th class="py-2">{"Date"}</th><th class="py-2">{"Method"}</th><th class="py-2">{"Amount"}</th><th class="py-2">{"Status"}</th></tr>
                </thead>
                <tbody>
                    { for list.iter().map(|w| html! {
                        <tr key={w.id.clone()} class={styles::TABLE_ROW}>
                            <td class="py-2 text-xs">{format_date(w.created_at.as_deref())}</td>
                            <td class="py-2">{method_label(&w.method)}</td>
                            <td class="py-2">{format_usd(w.amount)}</td>
                            <td class="py-2">
                                <span class={styles::status_badge(&w.status.label().to_lowercase())}>{w.status.label()}</span>
                                if let Some(reason) = &w.reason {
                                    <div class={styles::TEXT_HINT}>{reason.clone()}</div>
                                }
                            </td>
                        </tr>
                    }) }
                </tbody>
            </table>
        },
        (None, Some(err)) => html! { <QueryError message={err.clone()} on_retry={history.refetch.clone()} /> },
        (None, None) => html! { <Loading /> },
    };

    html! {
        <div class={styles::CARD}>
            <h3 class={classes!(styles::CARD_TITLE, "mb-2")}>{"History"}</h3>
            {body}
        </div>
    }
}

#[function_component(Withdraw)]
pub fn withdraw() -> Html {
    let user = use_user();
    let wallet = use_query::<WalletDetails>(WALLET_DETAILS_ENDPOINT);

    let form = match (&user.data, &wallet.data) {
        (Some(u), Some(w)) => html! { <WithdrawForm user={u.clone()} wallet={w.clone()} /> },
        _ => match user.error.clone().or_else(|| wallet.error.clone()) {
            Some(err) => {
                let (user_retry, wallet_retry) = (user.refetch.clone(), wallet.refetch.clone());
                let on_retry = Callback::from(move |_| {
                    user_retry.emit(());
                    wallet_retry.emit(());
                });
                html! { <QueryError message={err} {on_retry} /> }
            }
            None => html! { <Loading /> },
        },
    };

    html! {
        <div class={styles::PAGE}>
            <div class="flex items-center justify-between">
                <h2 class={styles::TEXT_H2}>{"Withdraw"}</h2>
                if let Some(u) = &user.data {
                    <span class={styles::TEXT_SMALL}>{format!("Available {}", format_usd(u.usd_balance))}</span>
                }
            </div>
            {form}
            <History />
        </div>
    }
}

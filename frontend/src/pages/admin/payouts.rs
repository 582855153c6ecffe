use shared::admin::{payout_page, RejectWithdrawalRequest};
use shared::constants::{
    ADMIN_PAYOUTS_PAGE_SIZE, ADMIN_PENDING_WITHDRAWALS_ENDPOINT, ADMIN_PROCESSED_WITHDRAWALS_ENDPOINT,
    ADMIN_STATS_ENDPOINT, ADMIN_WITHDRAWALS_ENDPOINT,
};
use shared::format::{format_date, format_usd, short_address};
use shared::models::{MutationResponse, Withdrawal, WithdrawalStatus};
use shared::pagination::Pagination;
use shared::payment::method_label;
use shared::validation::{first_error_message, Validate};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::base::{notify_error, notify_success};
use crate::components::{Loading, Pager, QueryError};
use crate::hooks::{invalidate, use_query};
use crate::{api, styles};

fn refresh_payouts() {
    invalidate(ADMIN_WITHDRAWALS_ENDPOINT);
    invalidate(ADMIN_STATS_ENDPOINT);
}

#[derive(Properties, PartialEq)]
struct PendingRowProps {
    withdrawal: Withdrawal,
}

#[function_component(PendingRow)]
fn pending_row(props: &PendingRowProps) -> Html {
    let pending = use_state(|| false);
    let rejecting = use_state(|| false);
    let reason = use_state(String::new);
    let w = &props.withdrawal;

    let on_approve = {
        let pending = pending.clone();
        let id = w.id.clone();
        Callback::from(move |_: MouseEvent| {
            if *pending {
                return;
            }
            pending.set(true);
            let pending = pending.clone();
            let path = format!("{}/{}/approve", ADMIN_WITHDRAWALS_ENDPOINT, id);
            spawn_local(async move {
                match api::post_empty::<MutationResponse>(&path).await {
                    Ok(_) => {
                        refresh_payouts();
                        notify_success("Withdrawal approved");
                    }
                    Err(e) => notify_error(e.user_message()),
                }
                pending.set(false);
            });
        })
    };

    let on_reject = {
        let pending = pending.clone();
        let rejecting = rejecting.clone();
        let reason = reason.clone();
        let id = w.id.clone();
        Callback::from(move |_: MouseEvent| {
            if !*rejecting {
                rejecting.set(true);
                return;
            }
            let request = RejectWithdrawalRequest { reason: reason.trim().to_string() };
            if let Err(errors) = request.validate() {
                notify_error(first_error_message(&errors));
                return;
            }
            pending.set(true);
            let pending = pending.clone();
            let path = format!("{}/{}/reject", ADMIN_WITHDRAWALS_ENDPOINT, id);
            spawn_local(async move {
                match api::post::<_, MutationResponse>(&path, &request).await {
                    Ok(_) => {
                        refresh_payouts();
                        notify_success("Withdrawal rejected");
                    }
                    Err(e) => notify_error(e.user_message()),
                }
                pending.set(false);
            });
        })
    };

    html! {
        <div class={classes!(styles::TABLE_ROW, "py-3")}>
            <div class="flex items-center justify-between">
                <div>
                    <div class="font-medium">{format!("{} via {}", format_usd(w.amount), method_label(&w.method))}</div>
                    <div class={styles::TEXT_HINT}>
                        {format!("{} · {}", w.username.clone().or_else(|| w.user_id.clone()).unwrap_or_default(), format_date(w.created_at.as_deref()))}
                    </div>
                    if let Some(details) = &w.details {
                        <div class={styles::TEXT_HINT}>{short_address(details)}</div>
                    }
                </div>
                <div class="flex gap-2">
                    <button onclick={on_approve} disabled={*pending} class={styles::BUTTON_SMALL}>{"Approve"}</button>
                    <button onclick={on_reject} disabled={*pending} class={classes!(styles::BUTTON_DANGER, "text-xs", "px-2", "py-1")}>
                        { if *rejecting { "Confirm" } else { "Reject" } }
                    </button>
                </div>
            </div>
            if *rejecting {
                <input class={styles::INPUT} placeholder="Reason shown to the user" value={(*reason).clone()}
                    oninput={let reason = reason.clone(); move |e: InputEvent| {
                        reason.set(e.target_unchecked_into::<HtmlInputElement>().value())
                    }} />
            }
        </div>
    }
}

#[function_component(PendingList)]
fn pending_list() -> Html {
    let pending = use_query::<Vec<Withdrawal>>(ADMIN_PENDING_WITHDRAWALS_ENDPOINT);
    let pagination = use_state(|| Pagination::new(ADMIN_PAYOUTS_PAGE_SIZE));
    let on_page = {
        let pagination = pagination.clone();
        Callback::from(move |p: Pagination| pagination.set(p))
    };

    match (&pending.data, &pending.error) {
        (Some(list), _) if list.is_empty() => html! { <p class={styles::TEXT_SMALL}>{"Nothing waiting for review."}</p> },
        (Some(list), _) => {
            let (page, current, total) = payout_page(list, Some(WithdrawalStatus::Pending), *pagination);
            html! {
                <>
                    { for page.into_iter().map(|w| html! { <PendingRow key={w.id.clone()} withdrawal={w.clone()} /> }) }
                    <Pager pagination={current} {total} on_change={on_page} />
                </>
            }
        }
        (None, Some(err)) => html! { <QueryError message={err.clone()} on_retry={pending.refetch.clone()} /> },
        (None, None) => html! { <Loading /> },
    }
}

#[function_component(ProcessedList)]
fn processed_list() -> Html {
    let processed = use_query::<Vec<Withdrawal>>(ADMIN_PROCESSED_WITHDRAWALS_ENDPOINT);
    let status = use_state(|| None::<WithdrawalStatus>);
    let pagination = use_state(|| Pagination::new(ADMIN_PAYOUTS_PAGE_SIZE));

    let on_status = {
        let status = status.clone();
        let pagination = pagination.clone();
        Callback::from(move |e: Event| {
            let next = match e.target_unchecked_into::<HtmlSelectElement>().value().as_str() {
                "approved" => Some(WithdrawalStatus::Approved),
                "paid" => Some(WithdrawalStatus::Paid),
                "rejected" => Some(WithdrawalStatus::Rejected),
                _ => None,
            };
            status.set(next);
            pagination.set(Pagination::new(ADMIN_PAYOUTS_PAGE_SIZE));
        })
    };
    let on_page = {
        let pagination = pagination.clone();
        Callback::from(move |p: Pagination| pagination.set(p))
    };

    let list = match (&processed.data, &processed.error) {
        (Some(list), _) => {
            let (page, current, total) = payout_page(list, *status, *pagination);
            html! {
                <>
                    <table class={styles::TABLE}>
                        <thead class={styles::TABLE_HEAD}>
                            <tr><th class="py-2">{"User"}</th><th class="py-2">{"Amount"}</th><th class="py-2">{"Status"}</th><th class="py-2">{"Processed"}</th></tr>
                        </thead>
                        <tbody>
                            { for page.into_iter().map(|w| html! {
                                <tr key={w.id.clone()} class={styles::TABLE_ROW}>
                                    <td class="py-2">{w.username.clone().or_else(|| w.user_id.clone()).unwrap_or_default()}</td>
                                    <td class="py-2">{format!("{} {}", format_usd(w.amount), method_label(&w.method))}</td>
                                    <td class="py-2"><span class={styles::status_badge(&w.status.label().to_lowercase())}>{w.status.label()}</span></td>
                                    <td class="py-2 text-xs">{format_date(w.processed_at.as_deref())}</td>
                                </tr>
                            }) }
                        </tbody>
                    </table>
                    <Pager pagination={current} {total} on_change={on_page} />
                </>
            }
        }
        (None, Some(err)) => html! { <QueryError message={err.clone()} on_retry={processed.refetch.clone()} /> },
        (None, None) => html! { <Loading /> },
    };

    html! {
        <>
            <select class={classes!(styles::SELECT, "mb-3")} onchange={on_status}>
                <option value="all">{"All"}</option>
                <option value="approved">{"Approved"}</option>
                <option value="paid">{"Paid"}</option>
                <option value="rejected">{"Rejected"}</option>
            </select>
            {list}
        </>
    }
}

#[function_component(Payouts)]
pub fn payouts() -> Html {
    html! {
        <>
            <div class={styles::CARD}>
                <h3 class={classes!(styles::CARD_TITLE, "mb-2")}>{"Pending"}</h3>
                <PendingList />
            </div>
            <div class={styles::CARD}>
                <h3 class={classes!(styles::CARD_TITLE, "mb-2")}>{"Processed"}</h3>
                <ProcessedList />
            </div>
        </>
    }
}

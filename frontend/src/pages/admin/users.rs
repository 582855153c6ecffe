use shared::admin::{user_page, UserFilter};
use shared::constants::{ADMIN_BAN_ENDPOINT, ADMIN_STATS_ENDPOINT, ADMIN_USERS_ENDPOINT, ADMIN_USERS_PAGE_SIZE};
use shared::format::{format_date, format_pad};
use shared::models::{AdminUser, BanRequest, MutationResponse};
use shared::pagination::Pagination;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::base::{notify_error, notify_success};
use crate::components::{Loading, Pager, QueryError};
use crate::hooks::{invalidate, use_query};
use crate::{api, styles};

#[derive(Properties, PartialEq)]
struct BanButtonProps {
    user: AdminUser,
}

#[function_component(BanButton)]
fn ban_button(props: &BanButtonProps) -> Html {
    let pending = use_state(|| false);
    let banned = props.user.banned;

    let onclick = {
        let pending = pending.clone();
        let user_id = props.user.id.clone();
        Callback::from(move |_: MouseEvent| {
            if *pending {
                return;
            }
            pending.set(true);
            let pending = pending.clone();
            let request = BanRequest {
                user_id: user_id.clone(),
                banned: !banned,
                reason: None,
            };
            spawn_local(async move {
                match api::post::<_, MutationResponse>(ADMIN_BAN_ENDPOINT, &request).await {
                    Ok(_) => {
                        invalidate(ADMIN_USERS_ENDPOINT);
                        invalidate(ADMIN_STATS_ENDPOINT);
                        let verb = if request.banned { "banned" } else { "unbanned" };
                        notify_success(format!("User {} {}", request.user_id, verb));
                    }
                    Err(e) => {
                        log::error!("{} failed: {}", ADMIN_BAN_ENDPOINT, e);
                        notify_error(e.user_message());
                    }
                }
                pending.set(false);
            });
        })
    };

    let class = if banned { styles::BUTTON_SMALL } else { styles::BUTTON_DANGER };
    html! {
        <button {onclick} disabled={*pending} class={classes!(class, "text-xs", "px-2", "py-1")}>
            { if banned { "Unban" } else { "Ban" } }
        </button>
    }
}

#[function_component(Users)]
pub fn users() -> Html {
    let users = use_query::<Vec<AdminUser>>(ADMIN_USERS_ENDPOINT);
    let query = use_state(String::new);
    let filter = use_state(UserFilter::default);
    let pagination = use_state(|| Pagination::new(ADMIN_USERS_PAGE_SIZE));

    let on_search = {
        let query = query.clone();
        let pagination = pagination.clone();
        Callback::from(move |e: InputEvent| {
            query.set(e.target_unchecked_into::<HtmlInputElement>().value());
            pagination.set(Pagination::new(ADMIN_USERS_PAGE_SIZE));
        })
    };
    let on_filter = {
        let filter = filter.clone();
        let pagination = pagination.clone();
        Callback::from(move |e: Event| {
            let next = match e.target_unchecked_into::<HtmlSelectElement>().value().as_str() {
                "active" => UserFilter::Active,
                "banned" => UserFilter::Banned,
                _ => UserFilter::All,
            };
            filter.set(next);
            pagination.set(Pagination::new(ADMIN_USERS_PAGE_SIZE));
        })
    };
    let on_page = {
        let pagination = pagination.clone();
        Callback::from(move |p: Pagination| pagination.set(p))
    };

    let list = match (&users.data, &users.error) {
        (Some(all), _) => {
            let (page, current, total) = user_page(all, &query, *filter, *pagination);
            html! {
                <>
                    <div class="overflow-x-auto">
                        <table class={styles::TABLE}>
                            <thead class={styles::TABLE_HEAD}>
                                <tr>
                                    <th class="py-2">{"User"}</th>
                                    <th class="py-2">{"Balance"}</th>
                                    <th class="py-2">{"Friends"}</th>
                                    <th class="py-2">{"Joined"}</th>
                                    <th class="py-2"></th>
                                </tr>
                            </thead>
                            <tbody>
                                { for page.into_iter().map(|u| html! {
                                    <tr key={u.id.clone()} class={styles::TABLE_ROW}>
                                        <td class="py-2">
                                            <div>{u.username.as_ref().map(|n| format!("@{}", n)).or_else(|| u.first_name.clone()).unwrap_or_else(|| u.id.clone())}</div>
                                            <div class={styles::TEXT_HINT}>{u.telegram_id.clone().unwrap_or_default()}</div>
                                        </td>
                                        <td class="py-2">{format_pad(u.balance)}</td>
                                        <td class="py-2">{u.friends_invited}</td>
                                        <td class="py-2 text-xs">{format_date(u.created_at.as_deref())}</td>
                                        <td class="py-2"><BanButton user={u.clone()} /></td>
                                    </tr>
                                }) }
                            </tbody>
                        </table>
                    </div>
                    <Pager pagination={current} {total} on_change={on_page} />
                </>
            }
        }
        (None, Some(err)) => html! { <QueryError message={err.clone()} on_retry={users.refetch.clone()} /> },
        (None, None) => html! { <Loading /> },
    };

    html! {
        <div class={styles::CARD}>
            <div class="grid grid-cols-3 gap-2 mb-3">
                <input class={classes!(styles::INPUT, "col-span-2")} placeholder="Search by name or id"
                    value={(*query).clone()} oninput={on_search} />
                <select class={styles::SELECT} onchange={on_filter}>
                    <option value="all" selected={*filter == UserFilter::All}>{"All"}</option>
                    <option value="active" selected={*filter == UserFilter::Active}>{"Active"}</option>
                    <option value="banned" selected={*filter == UserFilter::Banned}>{"Banned"}</option>
                </select>
            </div>
            {list}
        </div>
    }
}

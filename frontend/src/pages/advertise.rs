use shared::constants::{AUTH_USER_ENDPOINT, TASKS_CREATE_ENDPOINT, TASKS_ENDPOINT, TASKS_MINE_ENDPOINT, TASKS_VERIFY_CHANNEL_ENDPOINT};
use shared::format::format_pad;
use shared::models::MutationResponse;
use shared::tasks::{
    task_cost, task_endpoint, AdvertiserTask, CreateTaskRequest, IncreaseLimitRequest, TaskType,
    VerifyChannelRequest, VerifyChannelResponse,
};
use shared::validation::parse_count;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::base::{notify_error, notify_success};
use crate::components::{Loading, QueryError};
use crate::hooks::{invalidate, use_form_state, use_query, use_settings, use_user};
use crate::{api, styles};

fn input_value(e: InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

fn refresh_tasks() {
    invalidate(TASKS_ENDPOINT);
    invalidate(AUTH_USER_ENDPOINT);
}

#[function_component(CreateTaskForm)]
fn create_task_form() -> Html {
    let user = use_user();
    let settings = use_settings();
    let form = use_form_state();
    let title = use_state(String::new);
    let link = use_state(String::new);
    let task_type = use_state(|| TaskType::Channel);
    let clicks = use_state(|| settings.minimum_clicks.to_string());
    let channel_verified = use_state(|| false);

    let balance = user.data.as_ref().map_or(0.0, |u| u.balance);
    let requested = parse_count(&clicks).unwrap_or(0);
    let cost = task_cost(requested, &settings);

    let verify_channel = {
        let link = link.clone();
        let form = form.clone();
        let channel_verified = channel_verified.clone();
        Callback::from(move |_: MouseEvent| {
            let request = VerifyChannelRequest { channel_link: link.trim().to_string() };
            let form = form.clone();
            let channel_verified = channel_verified.clone();
            form.set_pending.emit(true);
            spawn_local(async move {
                match api::post::<_, VerifyChannelResponse>(TASKS_VERIFY_CHANNEL_ENDPOINT, &request).await {
                    Ok(r) if r.is_admin => {
                        channel_verified.set(true);
                        form.handle_success.emit("Bot is an admin of the channel".to_string());
                    }
                    Ok(r) => form.handle_error.emit(
                        r.message.unwrap_or_else(|| "Add the bot as an admin of your channel first".to_string()),
                    ),
                    Err(e) => form.handle_error.emit(e.user_message()),
                }
            });
        })
    };

    let onsubmit = {
        let title = title.clone();
        let link = link.clone();
        let task_type = task_type.clone();
        let clicks = clicks.clone();
        let form = form.clone();
        let settings = settings.clone();
        let channel_verified = channel_verified.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.pending {
                return;
            }
            let request = CreateTaskRequest {
                title: title.trim().to_string(),
                link: link.trim().to_string(),
                task_type: *task_type,
                total_clicks_required: parse_count(&clicks).unwrap_or(0),
            };
            if let Err(err) = request.validate(balance, &settings) {
                log::warn!("task form rejected: {}", err);
                form.handle_error.emit(err.to_string());
                return;
            }
            if request.task_type == TaskType::Channel && !*channel_verified {
                form.handle_error.emit("Verify the channel before creating the task".to_string());
                return;
            }

            form.set_pending.emit(true);
            let form = form.clone();
            let title = title.clone();
            let link = link.clone();
            spawn_local(async move {
                match api::post::<_, MutationResponse>(TASKS_CREATE_ENDPOINT, &request).await {
                    Ok(r) => {
                        title.set(String::new());
                        link.set(String::new());
                        refresh_tasks();
                        form.handle_success.emit(r.message.unwrap_or_else(|| "Task created".to_string()));
                    }
                    Err(e) => form.handle_error.emit(e.user_message()),
                }
            });
        })
    };

    let on_type = {
        let task_type = task_type.clone();
        let channel_verified = channel_verified.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            task_type.set(TaskType::from_id(&value).unwrap_or_default());
            channel_verified.set(false);
        })
    };

    html! {
        <div class={styles::CARD}>
            <h3 class={styles::CARD_TITLE}>{"Create a task"}</h3>
            <form {onsubmit} class={styles::FORM}>
                <div>
                    <label class={styles::TEXT_LABEL}>{"Type"}</label>
                    <select class={styles::SELECT} onchange={on_type}>
                        { for TaskType::ALL.iter().map(|t| html! {
                            <option value={t.id()} selected={*t == *task_type}>{t.label()}</option>
                        }) }
                    </select>
                </div>
                <div>
                    <label class={styles::TEXT_LABEL}>{"Title"}</label>
                    <input class={styles::INPUT} value={(*title).clone()} maxlength="100"
                        oninput={let title = title.clone(); move |e: InputEvent| title.set(input_value(e))} />
                </div>
                <div>
                    <label class={styles::TEXT_LABEL}>{"Link"}</label>
                    <input class={styles::INPUT} value={(*link).clone()}
                        placeholder={if task_type.needs_telegram_link() { "https://t.me/yourchannel" } else { "https://example.com" }}
                        oninput={let link = link.clone(); let channel_verified = channel_verified.clone(); move |e: InputEvent| {
                            link.set(input_value(e));
                            channel_verified.set(false);
                        }} />
                    if *task_type == TaskType::Channel {
                        <button type="button" onclick={verify_channel} disabled={form.pending || link.trim().is_empty()}
                            class={classes!(styles::BUTTON_SMALL, "mt-2")}>
                            { if *channel_verified { "Verified ✓" } else { "Verify bot is admin" } }
                        </button>
                    }
                </div>
                <div>
                    <label class={styles::TEXT_LABEL}>{"Clicks"}</label>
                    <input class={styles::INPUT} inputmode="numeric" value={(*clicks).clone()}
                        oninput={let clicks = clicks.clone(); move |e: InputEvent| clicks.set(input_value(e))} />
                    <p class={styles::TEXT_HINT}>
                        {format!("Minimum {} clicks, {} PAD per click. Cost: {} PAD (balance {} PAD)",
                            settings.minimum_clicks, format_pad(settings.cost_per_click), format_pad(cost), format_pad(balance))}
                    </p>
                </div>
                if !form.error.is_empty() {
                    <p class={styles::TEXT_ERROR}>{form.error.clone()}</p>
                }
                if !form.success.is_empty() {
                    <p class={styles::TEXT_SUCCESS}>{form.success.clone()}</p>
                }
                <button type="submit" disabled={form.pending} class={classes!(styles::BUTTON_PRIMARY, "w-full")}>
                    { if form.pending { "Submitting..." } else { "Create task" } }
                </button>
            </form>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct MyTaskRowProps {
    task: AdvertiserTask,
}

#[function_component(MyTaskRow)]
fn my_task_row(props: &MyTaskRowProps) -> Html {
    let user = use_user();
    let settings = use_settings();
    let pending = use_state(|| false);
    let extra = use_state(String::new);
    let task = props.task.clone();

    // pause / resume / delete share one runner
    let run = {
        let pending = pending.clone();
        move |action: Option<&'static str>, done: &'static str| {
            let pending = pending.clone();
            let id = task.id.clone();
            Callback::from(move |_: MouseEvent| {
                if *pending {
                    return;
                }
                pending.set(true);
                let pending = pending.clone();
                let path = task_endpoint(&id, action);
                spawn_local(async move {
                    let result = match action {
                        Some(_) => api::post_empty::<MutationResponse>(&path).await,
                        None => api::delete::<MutationResponse>(&path).await,
                    };
                    match result {
                        Ok(r) => {
                            refresh_tasks();
                            notify_success(r.message.unwrap_or_else(|| done.to_string()));
                        }
                        Err(e) => notify_error(e.user_message()),
                    }
                    pending.set(false);
                });
            })
        }
    };

    let increase = {
        let pending = pending.clone();
        let extra = extra.clone();
        let id = props.task.id.clone();
        let settings = settings.clone();
        let balance = user.data.as_ref().map_or(0.0, |u| u.balance);
        Callback::from(move |_: MouseEvent| {
            let request = IncreaseLimitRequest { additional_clicks: parse_count(&extra).unwrap_or(0) };
            if let Err(err) = request.validate(balance, &settings) {
                notify_error(err.to_string());
                return;
            }
            pending.set(true);
            let pending = pending.clone();
            let extra = extra.clone();
            let path = task_endpoint(&id, Some("increase-limit"));
            spawn_local(async move {
                match api::post::<_, MutationResponse>(&path, &request).await {
                    Ok(_) => {
                        extra.set(String::new());
                        refresh_tasks();
                        notify_success(format!("Added {} clicks", request.additional_clicks));
                    }
                    Err(e) => notify_error(e.user_message()),
                }
                pending.set(false);
            });
        })
    };

    let t = &props.task;
    html! {
        <div class={styles::CARD}>
            <div class="flex items-center justify-between">
                <h4 class={styles::CARD_TITLE}>{t.title.clone()}</h4>
                <span class={styles::status_badge(t.status.id())}>{t.status.label()}</span>
            </div>
            <div class={classes!(styles::PROGRESS_TRACK, "mt-3")}>
                <div class={styles::PROGRESS_BAR} style={format!("width: {:.1}%", t.progress_percent())}></div>
            </div>
            <p class={styles::TEXT_HINT}>{format!("{}/{} clicks", t.current_clicks, t.total_clicks_required)}</p>
            <div class="flex flex-wrap gap-2 mt-3">
                if t.can_pause() {
                    <button onclick={run(Some("pause"), "Task paused")} disabled={*pending} class={styles::BUTTON_SMALL}>{"Pause"}</button>
                }
                if t.can_resume() {
                    <button onclick={run(Some("resume"), "Task resumed")} disabled={*pending} class={styles::BUTTON_SMALL}>{"Resume"}</button>
                }
                <button onclick={run(None, "Task deleted")} disabled={*pending} class={classes!(styles::BUTTON_SMALL, "text-red-600")}>{"Delete"}</button>
            </div>
            <div class="flex items-end gap-2 mt-3">
                <input class={styles::INPUT} inputmode="numeric" placeholder={format!("+{} clicks", settings.minimum_clicks)}
                    value={(*extra).clone()}
                    oninput={let extra = extra.clone(); move |e: InputEvent| extra.set(input_value(e))} />
                <button onclick={increase} disabled={*pending || extra.is_empty()} class={styles::BUTTON_SECONDARY}>{"Add"}</button>
            </div>
        </div>
    }
}

#[function_component(Advertise)]
pub fn advertise() -> Html {
    let mine = use_query::<Vec<AdvertiserTask>>(TASKS_MINE_ENDPOINT);

    html! {
        <div class={styles::PAGE}>
            <h2 class={styles::TEXT_H2}>{"Advertise"}</h2>
            <CreateTaskForm />
            <h3 class={styles::TEXT_H3}>{"My tasks"}</h3>
            {
                match (&mine.data, &mine.error) {
                    (Some(tasks), _) if tasks.is_empty() => html! {
                        <p class={styles::TEXT_SMALL}>{"You have not created any tasks yet."}</p>
                    },
                    (Some(tasks), _) => html! {
                        <>{ for tasks.iter().map(|t| html! { <MyTaskRow key={t.id.clone()} task={t.clone()} /> }) }</>
                    },
                    (None, Some(err)) => html! { <QueryError message={err.clone()} on_retry={mine.refetch.clone()} /> },
                    (None, None) => html! { <Loading /> },
                }
            }
        </div>
    }
}

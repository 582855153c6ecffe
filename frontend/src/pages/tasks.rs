use gloo_timers::future::TimeoutFuture;
use shared::constants::{AUTH_USER_ENDPOINT, TASKS_ENDPOINT, TASK_CLICK_DELAY_MS};
use shared::format::format_pad;
use shared::tasks::{task_endpoint, AdvertiserTask, HasClickedResponse, TaskClickResponse};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::base::{notify_error, notify_success};
use crate::components::{Loading, QueryError};
use crate::hooks::{invalidate, use_query};
use crate::{api, styles, telegram, Route};

#[derive(Properties, PartialEq)]
struct TaskCardProps {
    task: AdvertiserTask,
}

#[function_component(TaskCard)]
fn task_card(props: &TaskCardProps) -> Html {
    let clicked = use_state(|| false);
    let checking = use_state(|| true);
    let pending = use_state(|| false);

    {
        let clicked = clicked.clone();
        let checking = checking.clone();
        use_effect_with(props.task.id.clone(), move |id| {
            let path = task_endpoint(id, Some("has-clicked"));
            spawn_local(async move {
                match api::get::<HasClickedResponse>(&path).await {
                    Ok(r) => clicked.set(r.has_clicked),
                    Err(e) => log::warn!("{}: {}", path, e),
                }
                checking.set(false);
            });
            || ()
        });
    }

    let onclick = {
        let clicked = clicked.clone();
        let pending = pending.clone();
        let task = props.task.clone();
        Callback::from(move |_: MouseEvent| {
            if *pending || *clicked {
                return;
            }
            pending.set(true);
            telegram::open_link(&task.link);

            let clicked = clicked.clone();
            let pending = pending.clone();
            let path = task_endpoint(&task.id, Some("click"));
            spawn_local(async move {
                // Time for the user to actually visit before the click is claimed.
                TimeoutFuture::new(TASK_CLICK_DELAY_MS).await;
                match api::post_empty::<TaskClickResponse>(&path).await {
                    Ok(r) => {
                        clicked.set(true);
                        invalidate(AUTH_USER_ENDPOINT);
                        notify_success(r.message.unwrap_or_else(|| {
                            format!("+{} PAD for completing the task", format_pad(r.reward))
                        }));
                    }
                    Err(e) => notify_error(e.user_message()),
                }
                pending.set(false);
            });
        })
    };

    if *clicked || *checking {
        return html! {};
    }

    let task = &props.task;
    html! {
        <div class={styles::CARD}>
            <div class="flex items-start justify-between">
                <div>
                    <span class={styles::status_badge(task.task_type.id())}>{task.task_type.label()}</span>
                    <h4 class={classes!(styles::CARD_TITLE, "mt-1")}>{task.title.clone()}</h4>
                    <p class={styles::TEXT_HINT}>{format!("{} spots left", task.remaining_clicks())}</p>
                </div>
                <div class="text-right">
                    <div class="font-semibold text-green-600 dark:text-green-400">{format!("+{} PAD", format_pad(task.reward))}</div>
                </div>
            </div>
            <button {onclick} disabled={*pending} class={classes!(styles::BUTTON_PRIMARY, "w-full", "mt-3")}>
                { if *pending { "Checking..." } else { "Start" } }
            </button>
        </div>
    }
}

#[function_component(Tasks)]
pub fn tasks() -> Html {
    let tasks = use_query::<Vec<AdvertiserTask>>(TASKS_ENDPOINT);

    let body = match (&tasks.data, &tasks.error) {
        (Some(list), _) => {
            let open: Vec<&AdvertiserTask> = list.iter().filter(|t| !t.is_finished()).collect();
            if open.is_empty() {
                html! { <div class={styles::CARD}><p class={styles::TEXT_BODY}>{"No tasks right now. Check back later."}</p></div> }
            } else {
                html! { <>{ for open.into_iter().map(|t| html! { <TaskCard key={t.id.clone()} task={t.clone()} /> }) }</> }
            }
        }
        (None, Some(err)) => html! { <QueryError message={err.clone()} on_retry={tasks.refetch.clone()} /> },
        (None, None) => html! { <Loading /> },
    };

    html! {
        <div class={styles::PAGE}>
            <div class="flex items-center justify-between">
                <h2 class={styles::TEXT_H2}>{"Tasks"}</h2>
                <Link<Route> to={Route::Advertise} classes={styles::LINK}>{"Promote yours"}</Link<Route>>
            </div>
            {body}
        </div>
    }
}

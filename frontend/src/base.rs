use gloo::events::EventListener;
use gloo_timers::callback::{Interval, Timeout};
use js_sys::{Object, Reflect};
use shared::constants::{AUTH_USER_ENDPOINT, NOTIFICATION_TIMEOUT_MS, USER_REFRESH_INTERVAL_MS};
use shared::format::format_pad;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, CustomEvent, CustomEventInit, Event, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::{CHANNEL_URL, SUPPORT_URL};
use crate::hooks::{invalidate, use_user};
use crate::{styles, telegram, Route};

pub const NOTIFICATION_EVENT: &str = "notification";
pub const QUERY_INVALIDATE_EVENT: &str = "queryInvalidate";
pub const QUERY_UPDATE_EVENT: &str = "queryUpdate";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    fn id(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Notification {
    kind: NotificationKind,
    message: String,
}

pub fn dispatch_event(name: &str, detail: &JsValue) {
    if let Some(window) = window() {
        let event_init = CustomEventInit::new();
        event_init.set_detail(detail);
        match CustomEvent::new_with_event_init_dict(name, &event_init) {
            Ok(event) => {
                let _ = window.dispatch_event(&event);
            }
            Err(e) => log::error!("could not create {} event: {:?}", name, e),
        }
    }
}

pub fn notify(kind: NotificationKind, message: impl Into<String>) {
    let detail = Object::new();
    let message = message.into();
    let _ = Reflect::set(&detail, &"message".into(), &JsValue::from_str(&message));
    let _ = Reflect::set(&detail, &"kind".into(), &JsValue::from_str(kind.id()));
    dispatch_event(NOTIFICATION_EVENT, &detail);
}

pub fn notify_success(message: impl Into<String>) {
    notify(NotificationKind::Success, message);
}

pub fn notify_error(message: impl Into<String>) {
    notify(NotificationKind::Error, message);
}

fn read_notification(event: &Event) -> Option<Notification> {
    let detail = event.dyn_ref::<CustomEvent>()?.detail();
    let message = Reflect::get(&detail, &"message".into()).ok()?.as_string()?;
    let kind = match Reflect::get(&detail, &"kind".into()).ok()?.as_string().as_deref() {
        Some("error") => NotificationKind::Error,
        _ => NotificationKind::Success,
    };
    Some(Notification { kind, message })
}

#[derive(Properties, PartialEq)]
pub struct BaseProps {
    pub children: Html,
}

#[derive(Properties, PartialEq)]
struct NavItemProps {
    to: Route,
    label: &'static str,
    icon: &'static str,
}

#[function_component(NavItem)]
fn nav_item(props: &NavItemProps) -> Html {
    let active = use_route::<Route>().map_or(false, |r| r == props.to);
    html! {
        <Link<Route> to={props.to.clone()} classes={if active { styles::NAV_ITEM_ACTIVE } else { styles::NAV_ITEM }}>
            <span class="text-lg">{props.icon}</span>
            <span>{props.label}</span>
        </Link<Route>>
    }
}

#[function_component(Base)]
pub fn base(props: &BaseProps) -> Html {
    let user = use_user();
    let show_dropdown = use_state(|| false);
    let notification = use_state(|| None::<Notification>);
    let hide_timer = use_mut_ref(|| None::<Timeout>);

    // Keeps balance and daily counters current while the app stays open.
    use_effect_with((), move |_| {
        let interval = Interval::new(USER_REFRESH_INTERVAL_MS, || invalidate(AUTH_USER_ENDPOINT));
        move || drop(interval)
    });

    {
        let notification = notification.clone();
        let hide_timer = hide_timer.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|window| {
                EventListener::new(&window, NOTIFICATION_EVENT, move |event: &Event| {
                    if let Some(next) = read_notification(event) {
                        notification.set(Some(next));
                        let notification = notification.clone();
                        // Replacing the handle cancels the previous toast's timer.
                        *hide_timer.borrow_mut() = Some(Timeout::new(NOTIFICATION_TIMEOUT_MS, move || {
                            notification.set(None);
                        }));
                    }
                })
            });
            move || drop(listener)
        });
    }

    {
        let show_dropdown = show_dropdown.clone();
        use_effect_with((), move |_| {
            let listener = window().and_then(|w| w.document()).map(|document| {
                EventListener::new(&document, "click", move |event: &Event| {
                    let inside = event
                        .target()
                        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                        .and_then(|el| el.matches(".dropdown-container, .dropdown-container *").ok())
                        .unwrap_or(false);
                    if !inside {
                        show_dropdown.set(false);
                    }
                })
            });
            move || drop(listener)
        });
    }

    let toggle_dropdown = {
        let show_dropdown = show_dropdown.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            show_dropdown.set(!*show_dropdown);
        })
    };

    let open_external = |url: &'static str| Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        telegram::open_link(url);
    });

    let current = user.data.clone();
    let is_admin = current.as_ref().map_or(false, |u| u.is_admin);
    let banned = current.as_ref().map_or(false, |u| u.banned);

    html! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900">
            <header class={styles::HEADER}>
                <div class={styles::HEADER_INNER}>
                    <Link<Route> to={Route::Home} classes={styles::BRAND}>{"PaidAdz"}</Link<Route>>
                    <div class="flex items-center space-x-3">
                        <div class={styles::BALANCE_PILL}>
                            {
                                match &current {
                                    Some(u) => html! { <span>{format!("{} PAD", format_pad(u.balance))}</span> },
                                    None if user.loading => html! { <span class={styles::LOADING_SPINNER}></span> },
                                    None => html! { <span>{"--"}</span> },
                                }
                            }
                        </div>
                        <div class="relative dropdown-container">
                            <button onclick={toggle_dropdown} class={styles::BUTTON_SMALL}>{"☰"}</button>
                            if *show_dropdown {
                                <div class="absolute right-0 mt-2 w-44 bg-white dark:bg-gray-800 rounded-lg shadow-lg ring-1 ring-black ring-opacity-5 divide-y divide-gray-100 dark:divide-gray-700">
                                    <Link<Route> to={Route::Advertise} classes="block px-3 py-2 text-sm">{"Advertise"}</Link<Route>>
                                    <Link<Route> to={Route::Withdraw} classes="block px-3 py-2 text-sm">{"Withdraw"}</Link<Route>>
                                    <Link<Route> to={Route::Promo} classes="block px-3 py-2 text-sm">{"Promo code"}</Link<Route>>
                                    <Link<Route> to={Route::Contest} classes="block px-3 py-2 text-sm">{"Contest"}</Link<Route>>
                                    if is_admin {
                                        <Link<Route> to={Route::Admin} classes="block px-3 py-2 text-sm text-purple-600">{"Admin"}</Link<Route>>
                                    }
                                </div>
                            }
                        </div>
                    </div>
                </div>
            </header>

            {
                match &*notification {
                    Some(n) => html! {
                        <div class={if n.kind == NotificationKind::Error { styles::TOAST_ERROR } else { styles::TOAST_SUCCESS }}>
                            <div>{n.message.clone()}</div>
                        </div>
                    },
                    None => html! {},
                }
            }

            <main class="pt-14">
                {
                    match (banned, user.error.clone().filter(|_| current.is_none())) {
                        (true, _) => html! {
                            <div class={styles::PAGE}>
                                <div class={styles::CARD_ERROR}>{"Your account has been suspended. Contact support if you think this is a mistake."}</div>
                            </div>
                        },
                        (false, Some(err)) => html! {
                            <div class={styles::PAGE}>
                                <div class={styles::CARD_ERROR}>{err}</div>
                            </div>
                        },
                        (false, None) => props.children.clone(),
                    }
                }
                <footer class={styles::FOOTER}>
                    <a href={SUPPORT_URL} onclick={open_external(SUPPORT_URL)} class={styles::FOOTER_LINK}>{"Support"}</a>
                    <a href={CHANNEL_URL} onclick={open_external(CHANNEL_URL)} class={styles::FOOTER_LINK}>{"News channel"}</a>
                </footer>
            </main>

            <nav class={styles::BOTTOM_NAV}>
                <div class={styles::BOTTOM_NAV_INNER}>
                    <NavItem to={Route::Home} label="Earn" icon="📺" />
                    <NavItem to={Route::Tasks} label="Tasks" icon="✅" />
                    <NavItem to={Route::Spin} label="Spin" icon="🎡" />
                    <NavItem to={Route::Affiliates} label="Friends" icon="👥" />
                    <NavItem to={Route::Wallet} label="Wallet" icon="👛" />
                </div>
            </nav>
        </div>
    }
}

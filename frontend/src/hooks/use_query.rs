//! Page data hooks over one process-wide `QueryCache`.
//!
//! Mutations never write server data optimistically: they either patch the
//! cache with a server-confirmed response (`update_cached`) or mark a prefix
//! stale (`invalidate`). Both broadcast a window event so every mounted
//! `use_query` for a matching key re-reads or refetches.

use std::cell::RefCell;

use gloo::events::EventListener;
use js_sys::Date;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use shared::constants::QUERY_STALE_MS;
use shared::query_cache::{key_matches, QueryCache};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, CustomEvent, Event};
use yew::prelude::*;

use crate::api;
use crate::base::{dispatch_event, QUERY_INVALIDATE_EVENT, QUERY_UPDATE_EVENT};

thread_local! {
    static CACHE: RefCell<QueryCache> = RefCell::new(QueryCache::new());
}

pub fn cached<T: DeserializeOwned>(key: &str) -> Option<T> {
    CACHE.with(|cache| cache.borrow().get(key))
}

fn is_fresh(key: &str) -> bool {
    CACHE.with(|cache| cache.borrow().is_fresh(key, Date::now(), QUERY_STALE_MS))
}

fn store(key: &str, value: Value) {
    CACHE.with(|cache| cache.borrow_mut().set_raw(key, value, Date::now()));
}

/// Marks everything under `prefix` stale and refetches what is on screen.
pub fn invalidate(prefix: &str) {
    CACHE.with(|cache| cache.borrow_mut().invalidate(prefix));
    dispatch_event(QUERY_INVALIDATE_EVENT, &JsValue::from_str(prefix));
}

/// Applies `edit` to the cached value under `key`. No-op when nothing is cached.
pub fn update_cached<T, F>(key: &str, edit: F)
where
    T: DeserializeOwned + Serialize,
    F: FnOnce(&mut T),
{
    let updated = CACHE.with(|cache| {
        cache.borrow_mut().update_raw(key, |raw| match serde_json::from_value::<T>(raw.clone()) {
            Ok(mut value) => {
                edit(&mut value);
                match serde_json::to_value(&value) {
                    Ok(next) => *raw = next,
                    Err(e) => log::error!("failed to re-cache {}: {}", key, e),
                }
            }
            Err(e) => log::error!("cached {} does not match: {}", key, e),
        })
    });
    // Listeners read the cache synchronously, so the borrow must be released first.
    if updated {
        dispatch_event(QUERY_UPDATE_EVENT, &JsValue::from_str(key));
    }
}

fn event_key(event: &Event) -> Option<String> {
    event.dyn_ref::<CustomEvent>()?.detail().as_string()
}

#[derive(Clone, Debug, PartialEq)]
pub struct QueryState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
}

#[hook]
pub fn use_query<T>(path: &str) -> QueryState<T>
where
    T: DeserializeOwned + Clone + 'static,
{
    let path = path.to_string();
    let data = use_state(|| cached::<T>(&path));
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);
    let version = use_state(|| 0.0_f64);

    {
        let data = data.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((path.clone(), *version), move |(path, _)| {
            let path = path.clone();
            if is_fresh(&path) {
                data.set(cached(&path));
            } else {
                loading.set(true);
                spawn_local(async move {
                    match api::get::<Value>(&path).await {
                        Ok(value) => {
                            store(&path, value.clone());
                            match serde_json::from_value::<T>(value) {
                                Ok(parsed) => {
                                    data.set(Some(parsed));
                                    error.set(None);
                                }
                                Err(e) => {
                                    log::error!("{}: {}", path, e);
                                    error.set(Some(shared::constants::NETWORK_ERROR.to_string()));
                                }
                            }
                        }
                        Err(e) => error.set(Some(e.user_message())),
                    }
                    loading.set(false);
                });
            }
            || ()
        });
    }

    {
        let data = data.clone();
        let version = version.clone();
        use_effect_with(path.clone(), move |path| {
            let listeners = window().map(|window| {
                let refetch_key = path.clone();
                let on_invalidate = EventListener::new(&window, QUERY_INVALIDATE_EVENT, move |event: &Event| {
                    if event_key(event).map_or(false, |prefix| key_matches(&prefix, &refetch_key)) {
                        version.set(Date::now());
                    }
                });
                let update_key = path.clone();
                let on_update = EventListener::new(&window, QUERY_UPDATE_EVENT, move |event: &Event| {
                    if event_key(event).as_deref() == Some(update_key.as_str()) {
                        data.set(cached(&update_key));
                    }
                });
                (on_invalidate, on_update)
            });
            move || drop(listeners)
        });
    }

    let refetch = {
        let path = path.clone();
        Callback::from(move |_| invalidate(&path))
    };

    QueryState {
        data: (*data).clone(),
        loading: *loading,
        error: (*error).clone(),
        refetch,
    }
}

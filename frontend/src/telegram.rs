//! Thin bridge over `window.Telegram.WebApp`.
//!
//! Every call degrades to a no-op (or a plain browser fallback) when the app
//! is opened outside Telegram.

use js_sys::{Array, Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::window;

fn get(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

fn call(target: &JsValue, method: &str, args: &[JsValue]) -> Option<JsValue> {
    let function = get(target, method)?.dyn_into::<Function>().ok()?;
    let array = Array::new();
    for arg in args {
        array.push(arg);
    }
    match function.apply(target, &array) {
        Ok(value) => Some(value),
        Err(e) => {
            log::error!("Telegram.WebApp.{} failed: {:?}", method, e);
            None
        }
    }
}

fn web_app() -> Option<JsValue> {
    let window: JsValue = window()?.into();
    get(&get(&window, "Telegram")?, "WebApp")
}

/// Signed launch payload sent with every API request.
pub fn init_data() -> Option<String> {
    get(&web_app()?, "initData")?
        .as_string()
        .filter(|s| !s.is_empty())
}

/// `start` parameter of the deep link the app was opened with.
pub fn start_param() -> Option<String> {
    let unsafe_data = get(&web_app()?, "initDataUnsafe")?;
    get(&unsafe_data, "start_param")?.as_string()
}

pub fn ready() {
    match web_app() {
        Some(app) => {
            call(&app, "ready", &[]);
            call(&app, "expand", &[]);
        }
        None => log::warn!("Telegram.WebApp not found, running in browser mode"),
    }
}

/// Opens `url` inside Telegram when possible. `t.me` links go through
/// `openTelegramLink` so they stay in the client.
pub fn open_link(url: &str) {
    let arg = [JsValue::from_str(url)];
    let opened = web_app().and_then(|app| {
        if url.starts_with("https://t.me/") {
            call(&app, "openTelegramLink", &arg)
        } else {
            call(&app, "openLink", &arg)
        }
    });
    if opened.is_none() {
        if let Some(window) = window() {
            if let Err(e) = window.open_with_url_and_target(url, "_blank") {
                log::error!("could not open {}: {:?}", url, e);
            }
        }
    }
}

pub fn share_url(url: &str, text: &str) {
    let share = format!(
        "https://t.me/share/url?url={}&text={}",
        js_sys::encode_uri_component(url),
        js_sys::encode_uri_component(text)
    );
    open_link(&share);
}

pub fn haptic_success() {
    if let Some(feedback) = web_app().and_then(|app| get(&app, "HapticFeedback")) {
        call(&feedback, "notificationOccurred", &[JsValue::from_str("success")]);
    }
}

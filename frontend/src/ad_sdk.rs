//! Calls into the three rewarded-ad SDKs loaded by `index.html`.

use js_sys::{Function, Object, Promise, Reflect};
use shared::ad_watch::{AdProvider, AdWatchError, SdkOutcome};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::window;

const MONETAG_GLOBAL: &str = "show_10013974";
const ADSGRAM_GLOBAL: &str = "Adsgram";
const ADEXORA_GLOBAL: &str = "showAdexora";

fn global(name: &str) -> Option<JsValue> {
    let window: JsValue = window()?.into();
    Reflect::get(&window, &JsValue::from_str(name))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

fn describe(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| {
            Reflect::get(err, &JsValue::from_str("description"))
                .ok()
                .and_then(|v| v.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", err))
}

/// Waits for whatever the SDK returned. A rejected promise means playback
/// started and was closed or errored, which still goes through the time floor.
async fn settle(provider: AdProvider, started: Result<JsValue, JsValue>) -> SdkOutcome {
    let value = match started {
        Ok(value) => value,
        Err(e) => return SdkOutcome::Failed(describe(&e)),
    };
    match value.dyn_into::<Promise>() {
        Ok(promise) => match JsFuture::from(promise).await {
            Ok(_) => SdkOutcome::Completed,
            Err(e) => {
                log::warn!("{} ad ended early: {}", provider.id(), describe(&e));
                SdkOutcome::Closed
            }
        },
        Err(_) => SdkOutcome::Completed,
    }
}

fn call_global(provider: AdProvider, name: &str) -> Result<Result<JsValue, JsValue>, AdWatchError> {
    let function = global(name)
        .and_then(|f| f.dyn_into::<Function>().ok())
        .ok_or(AdWatchError::SdkUnavailable(provider))?;
    Ok(function.call0(&JsValue::NULL))
}

fn call_adsgram(block_id: &str) -> Result<Result<JsValue, JsValue>, AdWatchError> {
    let unavailable = || AdWatchError::SdkUnavailable(AdProvider::Adsgram);
    let adsgram = global(ADSGRAM_GLOBAL).ok_or_else(unavailable)?;
    let init = Reflect::get(&adsgram, &JsValue::from_str("init"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
        .ok_or_else(unavailable)?;

    let options = Object::new();
    Reflect::set(&options, &JsValue::from_str("blockId"), &JsValue::from_str(block_id))
        .map_err(|e| AdWatchError::SdkFailed(describe(&e)))?;
    let controller = init
        .call1(&adsgram, &options)
        .map_err(|e| AdWatchError::SdkFailed(describe(&e)))?;
    let show = Reflect::get(&controller, &JsValue::from_str("show"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
        .ok_or_else(unavailable)?;
    Ok(show.call0(&controller))
}

/// Plays one ad and reports how it ended. Errors only when the SDK is not
/// loaded at all.
pub async fn show(provider: AdProvider, adsgram_block_id: &str) -> Result<SdkOutcome, AdWatchError> {
    log::info!("showing {} ad", provider.id());
    let started = match provider {
        AdProvider::Monetag => call_global(provider, MONETAG_GLOBAL)?,
        AdProvider::Adexora => call_global(provider, ADEXORA_GLOBAL)?,
        AdProvider::Adsgram => call_adsgram(adsgram_block_id)?,
    };
    Ok(settle(provider, started).await)
}

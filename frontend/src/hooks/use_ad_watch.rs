use js_sys::Date;
use shared::ad_watch::{apply_reward, success_message, AdGate, AdProvider, AdWatchError};
use shared::constants::{ADS_WATCH_ENDPOINT, AUTH_USER_ENDPOINT, SPIN_ADWATCH_ENDPOINT, SPIN_STATUS_ENDPOINT};
use shared::models::{AdWatchRequest, AdWatchResponse, SpinAdWatchResponse, User};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::base::{notify_error, notify_success};
use crate::config::adsgram_block_id;
use crate::hooks::{invalidate, update_cached, use_settings};
use crate::{ad_sdk, api, telegram};

/// What a qualifying watch is exchanged for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AdReward {
    Earnings,
    Spin,
}

#[derive(Clone, PartialEq)]
pub struct AdWatchHandle {
    pub loading: Option<AdProvider>,
    pub watch: Callback<AdProvider>,
}

async fn claim(reward: AdReward, request: AdWatchRequest) -> Result<(), AdWatchError> {
    match reward {
        AdReward::Earnings => {
            let response: AdWatchResponse = api::post(ADS_WATCH_ENDPOINT, &request).await?;
            update_cached::<User, _>(AUTH_USER_ENDPOINT, |user| apply_reward(user, &response));
            notify_success(success_message(&response));
        }
        AdReward::Spin => {
            let response: SpinAdWatchResponse = api::post(SPIN_ADWATCH_ENDPOINT, &request).await?;
            invalidate(SPIN_STATUS_ENDPOINT);
            let message = response.message.unwrap_or_else(|| {
                if response.spin_earned {
                    "You earned a spin!".to_string()
                } else {
                    format!("Ad {}/{} watched", response.spin_ads_watched, response.spin_ads_required)
                }
            });
            notify_success(message);
        }
    }
    telegram::haptic_success();
    Ok(())
}

#[hook]
pub fn use_ad_watch(reward: AdReward) -> AdWatchHandle {
    let gate = use_mut_ref(AdGate::new);
    let loading = use_state(|| None::<AdProvider>);
    let settings = use_settings();
    let block_id = adsgram_block_id(settings.adsgram_block_id.as_deref());

    let watch = {
        let gate = gate.clone();
        let loading = loading.clone();
        Callback::from(move |provider: AdProvider| {
            let session = match gate.borrow_mut().begin(provider, Date::now()) {
                Ok(session) => session,
                Err(e) => {
                    notify_error(e.user_message());
                    return;
                }
            };
            loading.set(gate.borrow().loading_provider());

            let gate = gate.clone();
            let loading = loading.clone();
            let block_id = block_id.clone();
            spawn_local(async move {
                let result = match ad_sdk::show(provider, &block_id).await {
                    Ok(outcome) => gate.borrow_mut().finish(session, outcome, Date::now()),
                    Err(e) => Err(e),
                };
                let outcome = match result {
                    Ok(request) => claim(reward, request).await,
                    Err(e) => Err(e),
                };
                gate.borrow_mut().release();
                loading.set(gate.borrow().loading_provider());
                if let Err(e) = outcome {
                    log::warn!("{} ad not rewarded: {}", provider.id(), e);
                    // the cached daily counter is behind the server's
                    if matches!(&e, AdWatchError::Api(err) if err.is_rate_limited()) {
                        invalidate(AUTH_USER_ENDPOINT);
                    }
                    notify_error(e.user_message());
                }
            });
        })
    };

    AdWatchHandle {
        loading: *loading,
        watch,
    }
}

use yew::prelude::*;

/// Inline error/success text plus the pending flag that blocks double submits.
#[derive(Clone, PartialEq)]
pub struct FormState {
    pub error: String,
    pub success: String,
    pub pending: bool,
    pub handle_success: Callback<String>,
    pub handle_error: Callback<String>,
    pub set_pending: Callback<bool>,
}

#[hook]
pub fn use_form_state() -> FormState {
    let error = use_state(String::new);
    let success = use_state(String::new);
    let pending = use_state(|| false);

    let handle_success = {
        let success = success.clone();
        let error = error.clone();
        let pending = pending.clone();
        Callback::from(move |msg: String| {
            success.set(msg);
            error.set(String::new());
            pending.set(false);
        })
    };

    let handle_error = {
        let error = error.clone();
        let success = success.clone();
        let pending = pending.clone();
        Callback::from(move |msg: String| {
            error.set(msg);
            success.set(String::new());
            pending.set(false);
        })
    };

    let set_pending = {
        let pending = pending.clone();
        let error = error.clone();
        Callback::from(move |value: bool| {
            if value {
                error.set(String::new());
            }
            pending.set(value);
        })
    };

    FormState {
        error: (*error).clone(),
        success: (*success).clone(),
        pending: *pending,
        handle_success,
        handle_error,
        set_pending,
    }
}

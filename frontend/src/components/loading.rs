use yew::prelude::*;
use crate::styles;

#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="flex justify-center py-8">
            <svg class={styles::LOADING_SPINNER} xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24">
                <circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
                <path class="opacity-75" fill="currentColor" d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4z"></path>
            </svg>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct QueryErrorProps {
    pub message: String,
    pub on_retry: Callback<()>,
}

#[function_component(QueryError)]
pub fn query_error(props: &QueryErrorProps) -> Html {
    let on_retry = props.on_retry.reform(|_: MouseEvent| ());
    html! {
        <div class={classes!(styles::CARD_ERROR, "flex", "items-center", "justify-between")}>
            <span>{props.message.clone()}</span>
            <button onclick={on_retry} class={styles::BUTTON_SMALL}>{"Retry"}</button>
        </div>
    }
}

use shared::ad_watch::AdProvider;
use yew::prelude::*;
use crate::hooks::AdWatchHandle;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct AdButtonsProps {
    pub handle: AdWatchHandle,
    /// Greys every button out, e.g. when the daily limit is reached.
    #[prop_or(false)]
    pub disabled: bool,
    #[prop_or_default]
    pub counts: Option<Vec<(AdProvider, u32)>>,
}

#[function_component(AdButtons)]
pub fn ad_buttons(props: &AdButtonsProps) -> Html {
    let busy = props.handle.loading.is_some();
    html! {
        <div class="grid grid-cols-1 gap-3">
            { for AdProvider::ALL.iter().map(|&provider| {
                let watch = props.handle.watch.clone();
                let onclick = Callback::from(move |_: MouseEvent| watch.emit(provider));
                let playing = props.handle.loading == Some(provider);
                let count = props.counts.as_ref()
                    .and_then(|c| c.iter().find(|(p, _)| *p == provider))
                    .map(|(_, n)| *n);
                html! {
                    <button {onclick} disabled={busy || props.disabled} class={classes!(styles::BUTTON_PRIMARY, "w-full", "justify-between")}>
                        <span>{format!("Watch {} ad", provider.label())}</span>
                        if playing {
                            <span class="animate-pulse">{"Playing..."}</span>
                        } else if let Some(n) = count {
                            <span class="text-xs opacity-80">{format!("{} today", n)}</span>
                        }
                    </button>
                }
            }) }
        </div>
    }
}

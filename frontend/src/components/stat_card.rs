use yew::prelude::*;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub label: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub icon: Option<AttrValue>,
    #[prop_or_default]
    pub hint: Option<AttrValue>,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class={styles::CARD}>
            <div class="flex items-center space-x-2">
                if let Some(icon) = &props.icon {
                    <span class="text-xl">{icon.clone()}</span>
                }
                <span class={styles::STAT_LABEL}>{props.label.clone()}</span>
            </div>
            <div class={classes!(styles::STAT_VALUE, "mt-1")}>{props.value.clone()}</div>
            if let Some(hint) = &props.hint {
                <div class={styles::TEXT_HINT}>{hint.clone()}</div>
            }
        </div>
    }
}

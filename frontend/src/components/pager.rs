use shared::pagination::Pagination;
use yew::prelude::*;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct PagerProps {
    pub pagination: Pagination,
    pub total: usize,
    pub on_change: Callback<Pagination>,
}

#[function_component(Pager)]
pub fn pager(props: &PagerProps) -> Html {
    let p = props.pagination;
    let total = props.total;
    if p.page_count(total) <= 1 {
        return html! {
            <div class={classes!(styles::TEXT_SMALL, "mt-3")}>{p.summary(total)}</div>
        };
    }

    let prev = {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(p.prev()))
    };
    let next = {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(p.next(total)))
    };

    html! {
        <div class="flex items-center justify-between mt-3">
            <span class={styles::TEXT_SMALL}>{p.summary(total)}</span>
            <div class="flex items-center space-x-2">
                <button onclick={prev} disabled={!p.has_prev()} class={styles::BUTTON_SMALL}>{"Prev"}</button>
                <span class={styles::TEXT_SMALL}>{format!("{}/{}", p.page, p.page_count(total))}</span>
                <button onclick={next} disabled={!p.has_next(total)} class={styles::BUTTON_SMALL}>{"Next"}</button>
            </div>
        </div>
    }
}

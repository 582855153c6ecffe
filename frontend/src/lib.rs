pub mod api;
pub mod ad_sdk;
pub mod base;
pub mod components;
pub mod config;
pub mod hooks;
pub mod pages;
pub mod styles;
pub mod telegram;

use yew::prelude::*;
use yew_router::prelude::*;
use crate::base::Base;
use crate::pages::{
    admin::Admin,
    advertise::Advertise,
    affiliates::Affiliates,
    contest::Contest,
    home::Home,
    promo::Promo,
    spin::Spin,
    tasks::Tasks,
    wallet::Wallet,
    withdraw::Withdraw,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/tasks")]
    Tasks,
    #[at("/advertise")]
    Advertise,
    #[at("/affiliates")]
    Affiliates,
    #[at("/spin")]
    Spin,
    #[at("/wallet")]
    Wallet,
    #[at("/withdraw")]
    Withdraw,
    #[at("/promo")]
    Promo,
    #[at("/contest")]
    Contest,
    #[at("/admin")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Base>
                <Switch<Route> render={switch} />
            </Base>
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home | Route::NotFound => html! { <Home /> },
        Route::Tasks => html! { <Tasks /> },
        Route::Advertise => html! { <Advertise /> },
        Route::Affiliates => html! { <Affiliates /> },
        Route::Spin => html! { <Spin /> },
        Route::Wallet => html! { <Wallet /> },
        Route::Withdraw => html! { <Withdraw /> },
        Route::Promo => html! { <Promo /> },
        Route::Contest => html! { <Contest /> },
        Route::Admin => html! { <Admin /> },
    }
}

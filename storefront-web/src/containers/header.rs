use i18nrs::yew::use_translation;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yew_router::prelude::Link;
use yewdux::prelude::{use_dispatch, use_selector};

use crate::api::StorefrontClient;
use crate::auth;
use crate::components::LanguageSelector;
use crate::models::app_state::AppState;
use crate::models::toast::ToastState;
use crate::routes::MainRoute;
use crate::storage::SessionStore;

#[function_component(Header)]
pub fn header() -> Html {
    let (i18n, ..) = use_translation();
    let is_authenticated = use_selector(AppState::is_authenticated);
    let app_dispatch = use_dispatch::<AppState>();
    let toast_dispatch = use_dispatch::<ToastState>();
    let navigator = use_navigator();

    let on_logout = {
        let logged_out = i18n.t("toast.logout_success");
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            let app_dispatch = app_dispatch.clone();
            let toast_dispatch = toast_dispatch.clone();
            let navigator = navigator.clone();
            let logged_out = logged_out.clone();
            spawn_local(async move {
                auth::logout(&StorefrontClient::shared(), &SessionStore::browser()).await;
                app_dispatch.set(AppState::signed_out());
                toast_dispatch.reduce_mut(|state| {
                    state.success(logged_out);
                });
                if let Some(navigator) = navigator {
                    navigator.push(&MainRoute::Home);
                }
            });
        })
    };

    html! {
        <nav class="navbar justify-between bg-base-300">
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-ghost text-lg">
                {i18n.t("app.title")}
            </Link<MainRoute>>
            <div class="flex items-center gap-2">
                <LanguageSelector />
                if *is_authenticated {
                    <button class="btn btn-ghost btn-sm" onclick={on_logout}>
                        {i18n.t("header.logout")}
                    </button>
                } else {
                    <Link<MainRoute> to={MainRoute::Auth} classes="btn btn-primary btn-sm">
                        {i18n.t("header.signin")}
                    </Link<MainRoute>>
                }
            </div>
        </nav>
    }
}

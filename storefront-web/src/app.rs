use wasm_bindgen_futures::spawn_local;
use yew::{Html, function_component, html, use_effect_with};
use yew_router::prelude::*;
use yewdux::prelude::use_dispatch;

use crate::api::StorefrontClient;
use crate::auth::restore_session;
use crate::models::app_state::AppState;
use crate::routes::{MainRoute, switch};
use crate::storage::SessionStore;

#[function_component(App)]
pub fn app() -> Html {
    let dispatch = use_dispatch::<AppState>();

    use_effect_with((), move |_| {
        let session = SessionStore::browser();
        // Render as signed in straight away; the check below may revoke it.
        if let Some(token) = session.token() {
            dispatch.reduce_mut(|state| state.token = Some(token));
        }
        spawn_local(async move {
            let token = restore_session(&StorefrontClient::shared(), &session).await;
            dispatch.reduce_mut(|state| state.session_restored(token));
        });
        || ()
    });

    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={switch} />
        </BrowserRouter>
    }
}

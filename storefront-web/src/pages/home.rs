use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

use crate::components::Reveal;
use crate::models::app_state::AppState;
use crate::routes::MainRoute;

/// `HomePage` page component
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let (i18n, ..) = use_translation();
    let is_authenticated = use_selector(AppState::is_authenticated);

    html! {
        <section class="hero min-h-[60vh] bg-base-200">
            <Reveal>
                <div class="hero-content text-center">
                    <div class="max-w-md space-y-4">
                        <h1 class="text-4xl font-bold">{i18n.t("home.title")}</h1>
                        <p>{i18n.t("home.subtitle")}</p>
                        if *is_authenticated {
                            <p class="font-semibold">{i18n.t("home.welcome_back")}</p>
                        } else {
                            <Link<MainRoute> to={MainRoute::Auth} classes="btn btn-primary">
                                {i18n.t("home.signin_cta")}
                            </Link<MainRoute>>
                        }
                    </div>
                </div>
            </Reveal>
        </section>
    }
}

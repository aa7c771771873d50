use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};
use yew_router::prelude::Link;

use crate::routes::MainRoute;

/// `ErrorPage` page component
#[function_component(ErrorPage)]
pub fn error_page() -> Html {
    let (i18n, ..) = use_translation();

    html! {
        <div class="container mx-auto p-4 py-16 space-y-6 text-center">
            <h1 class="text-2xl font-bold">{i18n.t("error.title")}</h1>
            <p>{i18n.t("error.description")}</p>
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-primary">
                {i18n.t("error.back_home")}
            </Link<MainRoute>>
        </div>
    }
}

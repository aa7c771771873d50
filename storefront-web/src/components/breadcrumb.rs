use i18nrs::yew::use_translation;
use yew::{AttrValue, Html, Properties, function_component, html};
use yew_router::prelude::Link;

use crate::routes::MainRoute;

#[derive(Properties, PartialEq)]
pub struct BreadcrumbProps {
    /// Title of the current page.
    pub page: AttrValue,
}

/// Page banner with a "Home / page" trail.
#[function_component(Breadcrumb)]
pub fn breadcrumb(props: &BreadcrumbProps) -> Html {
    let (i18n, ..) = use_translation();

    html! {
        <section class="bg-base-200 py-10">
            <div class="container mx-auto px-4 flex flex-col items-center gap-2">
                <h1 class="text-3xl font-bold">{props.page.clone()}</h1>
                <div class="breadcrumbs text-sm">
                    <ul>
                        <li>
                            <Link<MainRoute> to={MainRoute::Home}>
                                {i18n.t("auth.breadcrumb.home")}
                            </Link<MainRoute>>
                        </li>
                        <li>{props.page.clone()}</li>
                    </ul>
                </div>
            </div>
        </section>
    }
}

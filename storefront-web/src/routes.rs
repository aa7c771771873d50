use strum::EnumIter;
use yew::{Html, html};
use yew_router::Routable;

use crate::containers::layout::Layout;
use crate::pages::{AuthPage, ErrorPage, HomePage};

/// The main routes
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/auth")]
    Auth,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    log::debug!("switching to route {route:?}");
    let page = match route {
        MainRoute::Home => html! { <HomePage /> },
        MainRoute::Auth => html! { <AuthPage /> },
        MainRoute::NotFound => html! { <ErrorPage /> },
    };
    html! { <Layout>{page}</Layout> }
}

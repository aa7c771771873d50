mod api;
mod app;
mod auth;
mod components;
mod config;
mod containers;
mod errors;
mod language;
mod models;
mod pages;
mod routes;
mod storage;


use std::collections::HashMap;

use app::App;
use i18nrs::yew::{I18nProvider, I18nProviderConfig};
use language::supported_languages;
use yew::Renderer;
use yew::{Html, function_component, html};
use yewdux::YewduxRoot;

#[function_component(InternationalApp)]
fn international_app() -> Html {
    let translations: HashMap<&str, &str> = supported_languages()
        .iter()
        .map(|(&key, value)| (key, value.translation))
        .collect();

    let config = I18nProviderConfig {
        translations,
        default_language: language::saved_language(),
        ..Default::default()
    };

    html! {
        <YewduxRoot>
            <I18nProvider ..config>
                <App />
            </I18nProvider>
        </YewduxRoot>
    }
}

fn main() {
    // Disable truncation of panic payloads to debug any panics
    std::panic::set_hook(Box::new(|info| {
        if let Some(s) = info.payload().downcast_ref::<String>() {
            web_sys::console::error_1(&format!("Panic: {s}").into());
        } else if let Some(s) = info.payload().downcast_ref::<&str>() {
            web_sys::console::error_1(&format!("Panic: {s}").into());
        } else {
            web_sys::console::error_1(&"Unknown panic".into());
        }
        if let Some(location) = info.location() {
            web_sys::console::error_1(
                &format!(
                    "  at {}:{}:{}",
                    location.file(),
                    location.line(),
                    location.column()
                )
                .into(),
            );
        }
    }));

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger already initialised: {err}").into());
    }

    log::info!("starting Storefront");
    Renderer::<InternationalApp>::new().render();
}

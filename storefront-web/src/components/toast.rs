use i18nrs::yew::use_translation;
use yew::{Callback, Html, MouseEvent, Properties, classes, function_component, html};
use yew_hooks::use_timeout;
use yew_icons::{Icon, IconId};
use yewdux::prelude::{use_dispatch, use_selector};

use crate::config::FrontendConfig;
use crate::models::toast::{Toast, ToastKind, ToastState};

/// Renders every pending toast in the top-right corner.
#[function_component(ToastHost)]
pub fn toast_host() -> Html {
    let toasts = use_selector(|state: &ToastState| state.toasts.clone());

    html! {
        <div class="toast toast-top toast-end z-50">
            { for toasts.iter().map(|toast| html! {
                <ToastItem key={toast.id.to_string()} toast={toast.clone()} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let (i18n, ..) = use_translation();
    let dispatch = use_dispatch::<ToastState>();
    let id = props.toast.id;

    {
        let dispatch = dispatch.clone();
        use_timeout(
            move || dispatch.reduce_mut(|state| state.dismiss(id)),
            FrontendConfig::shared().toast_duration_ms,
        );
    }

    let on_close = Callback::from(move |_: MouseEvent| {
        dispatch.reduce_mut(|state| state.dismiss(id));
    });

    let icon = match props.toast.kind {
        ToastKind::Success => IconId::HeroiconsSolidCheckCircle,
        ToastKind::Danger => IconId::HeroiconsSolidXCircle,
    };

    html! {
        <div role="alert" class={classes!("alert", props.toast.kind.alert_class(), "shadow-lg")}>
            <Icon icon_id={icon} class="h-5 w-5" />
            <span>{props.toast.message.clone()}</span>
            <button
                class="btn btn-ghost btn-xs"
                aria-label={i18n.t("toast.close")}
                onclick={on_close}
            >
                {"✕"}
            </button>
        </div>
    }
}

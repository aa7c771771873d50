use gloo_timers::callback::Timeout;
use i18nrs::yew::use_translation;
use strum::IntoEnumIterator;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_dispatch;

use crate::api::StorefrontClient;
use crate::auth::{
    self, AuthAction, AuthField, AuthFormState, AuthMode, FollowUp, SubmitGuard, ToastMessages,
};
use crate::components::{Breadcrumb, Button, Reveal};
use crate::config::FrontendConfig;
use crate::models::app_state::AppState;
use crate::models::toast::ToastState;
use crate::routes::MainRoute;
use crate::storage::SessionStore;

/// Sign-in and registration forms behind one tab strip.
#[function_component(AuthPage)]
pub fn auth_page() -> Html {
    let (i18n, ..) = use_translation();
    let form = use_reducer(AuthFormState::default);
    let busy = use_state(|| false);
    let guard = (*use_state(SubmitGuard::default)).clone();
    let navigator = use_navigator();
    let app_dispatch = use_dispatch::<AppState>();
    let toast_dispatch = use_dispatch::<ToastState>();

    {
        let form = form.clone();
        use_effect_with((), move |_| {
            form.dispatch(AuthAction::Restore(
                SessionStore::browser().remembered_email(),
            ));
            || ()
        });
    }

    let messages = ToastMessages {
        signed_in: i18n.t("toast.signin_success"),
        signed_up: i18n.t("toast.signup_success"),
        fallback_error: i18n.t("toast.unknown_error"),
    };

    let submit = {
        let form = form.clone();
        let busy = busy.clone();
        Callback::from(move |()| {
            if guard.is_busy() {
                return;
            }
            busy.set(true);

            let request = form.request();
            let remember_me = form.remember_me;
            let form = form.clone();
            let busy = busy.clone();
            let guard = guard.clone();
            let navigator = navigator.clone();
            let app_dispatch = app_dispatch.clone();
            let toast_dispatch = toast_dispatch.clone();
            let messages = messages.clone();
            spawn_local(async move {
                let client = StorefrontClient::shared();
                let session = SessionStore::browser();
                let submission = auth::submit(&client, &session, &request, remember_me);
                let Some(outcome) = guard.run(submission).await else {
                    return;
                };

                let mut toasts = (*toast_dispatch.get()).clone();
                let mut app = (*app_dispatch.get()).clone();
                let follow_up = auth::apply_outcome(outcome, &messages, &mut toasts, &mut app);
                toast_dispatch.set(toasts);
                app_dispatch.set(app);

                match follow_up {
                    FollowUp::RedirectHome => {
                        if let Some(navigator) = navigator {
                            Timeout::new(FrontendConfig::shared().redirect_delay_ms, move || {
                                navigator.push(&MainRoute::Home);
                            })
                            .forget();
                        }
                    }
                    FollowUp::Form(action) => form.dispatch(action),
                    FollowUp::Stay => {}
                }
                busy.set(false);
            });
        })
    };

    let on_keydown = {
        let submit = submit.clone();
        Callback::from(move |event: KeyboardEvent| {
            if event.key() == "Enter" {
                event.prevent_default();
                submit.emit(());
            }
        })
    };

    let on_click = Callback::from(move |_: MouseEvent| submit.emit(()));

    let on_remember_change = {
        let form = form.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                form.dispatch(AuthAction::SetRememberMe(input.checked()));
            }
        })
    };

    let mode = form.mode;
    let (idle_key, busy_key) = mode.submit_keys();
    let submit_label = i18n.t(if *busy { busy_key } else { idle_key });

    let field = |field: AuthField, input_type: &'static str, label_key: &str| {
        let id = format!("auth-{}", field_id(field));
        html! {
            <div class="form-control">
                <label class="label" for={id.clone()}>
                    <span class="label-text">{i18n.t(label_key)}</span>
                </label>
                <input
                    id={id}
                    class="input input-bordered"
                    type={input_type}
                    value={form.value(field).to_string()}
                    oninput={on_input(&form, field)}
                />
            </div>
        }
    };

    html! {
        <>
            <Breadcrumb page={i18n.t(mode.title_key())} />
            <Reveal>
                <div class="container mx-auto px-4 py-12 flex justify-center">
                    <div class="card w-full max-w-md shadow-lg bg-base-100">
                        <div class="card-body gap-4" onkeydown={on_keydown}>
                            <div role="tablist" class="tabs tabs-bordered">
                                { for AuthMode::iter().map(|tab| {
                                    let form = form.clone();
                                    html! {
                                        <a
                                            role="tab"
                                            class={classes!("tab", (tab == mode).then_some("tab-active"))}
                                            onclick={move |_: MouseEvent| form.dispatch(AuthAction::SwitchMode(tab))}
                                        >
                                            {i18n.t(tab.tab_key())}
                                        </a>
                                    }
                                }) }
                            </div>
                            if mode == AuthMode::Signup {
                                {field(AuthField::Fullname, "text", "auth.fields.fullname")}
                            }
                            {field(AuthField::Username, "text", "auth.fields.username")}
                            {field(AuthField::Password, "password", "auth.fields.password")}
                            if mode == AuthMode::Signup {
                                {field(AuthField::Email, "email", "auth.fields.email")}
                            }
                            if mode == AuthMode::Login {
                                <label class="label cursor-pointer justify-start gap-2">
                                    <input
                                        type="checkbox"
                                        class="checkbox checkbox-sm"
                                        checked={form.remember_me}
                                        onchange={on_remember_change}
                                    />
                                    <span class="label-text">{i18n.t("auth.remember_me")}</span>
                                </label>
                            }
                            <Button fwidth=true disabled={*busy} onclick={on_click}>
                                {submit_label}
                            </Button>
                        </div>
                    </div>
                </div>
            </Reveal>
        </>
    }
}

fn field_id(field: AuthField) -> &'static str {
    match field {
        AuthField::Fullname => "fullname",
        AuthField::Username => "username",
        AuthField::Password => "password",
        AuthField::Email => "email",
    }
}

fn on_input(form: &UseReducerHandle<AuthFormState>, field: AuthField) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
            form.dispatch(AuthAction::Input(field, input.value()));
        }
    })
}

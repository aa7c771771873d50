use std::rc::Rc;

use shared::models::{SigninRequest, SignupRequest};
use strum::EnumIter;
use yew::Reducible;

use super::flow::AuthRequest;

/// Which of the two forms is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumIter)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    /// Translation key of the tab heading.
    pub fn tab_key(self) -> &'static str {
        match self {
            Self::Login => "auth.tabs.signin",
            Self::Signup => "auth.tabs.signup",
        }
    }

    /// Translation key of the breadcrumb title.
    pub fn title_key(self) -> &'static str {
        match self {
            Self::Login => "auth.breadcrumb.signin",
            Self::Signup => "auth.breadcrumb.signup",
        }
    }

    /// Translation keys of the submit button, idle and busy.
    pub fn submit_keys(self) -> (&'static str, &'static str) {
        match self {
            Self::Login => ("auth.submit.signin", "auth.submit.signin_busy"),
            Self::Signup => ("auth.submit.signup", "auth.submit.signup_busy"),
        }
    }
}

/// Text inputs of the forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthField {
    Fullname,
    Username,
    Password,
    Email,
}

/// Transient state of the auth page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthFormState {
    pub mode: AuthMode,
    pub fullname: String,
    pub username: String,
    pub password: String,
    pub email: String,
    pub remember_me: bool,
    /// Username loaded from storage when the page mounted.
    pub remembered_email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthAction {
    /// Apply the remembered email read at mount.
    Restore(Option<String>),
    SwitchMode(AuthMode),
    Input(AuthField, String),
    SetRememberMe(bool),
    /// Registration succeeded; go back to an empty sign-in form.
    SignupCompleted,
}

impl AuthFormState {
    pub fn value(&self, field: AuthField) -> &str {
        match field {
            AuthField::Fullname => &self.fullname,
            AuthField::Username => &self.username,
            AuthField::Password => &self.password,
            AuthField::Email => &self.email,
        }
    }

    /// The request the active form submits, built from the inputs as typed.
    pub fn request(&self) -> AuthRequest {
        match self.mode {
            AuthMode::Login => AuthRequest::Signin(SigninRequest {
                username: self.username.clone(),
                password: self.password.clone(),
            }),
            AuthMode::Signup => AuthRequest::Signup(SignupRequest {
                fullname: self.fullname.clone(),
                username: self.username.clone(),
                password: self.password.clone(),
                email: self.email.clone(),
            }),
        }
    }

    fn with_mode(&self, mode: AuthMode) -> Self {
        let username = match mode {
            AuthMode::Login => self.remembered_email.clone().unwrap_or_default(),
            AuthMode::Signup => String::new(),
        };
        Self {
            mode,
            username,
            remember_me: self.remember_me,
            remembered_email: self.remembered_email.clone(),
            ..Self::default()
        }
    }
}

impl Reducible for AuthFormState {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AuthAction::Restore(None) => self,
            AuthAction::Restore(Some(email)) => {
                let mut next = (*self).clone();
                if next.mode == AuthMode::Login {
                    next.username.clone_from(&email);
                }
                next.remember_me = true;
                next.remembered_email = Some(email);
                Rc::new(next)
            }
            AuthAction::SwitchMode(mode) if mode == self.mode => self,
            AuthAction::SwitchMode(mode) => Rc::new(self.with_mode(mode)),
            AuthAction::Input(field, value) => {
                let mut next = (*self).clone();
                match field {
                    AuthField::Fullname => next.fullname = value,
                    AuthField::Username => next.username = value,
                    AuthField::Password => next.password = value,
                    AuthField::Email => next.email = value,
                }
                Rc::new(next)
            }
            AuthAction::SetRememberMe(remember_me) => Rc::new(Self {
                remember_me,
                ..(*self).clone()
            }),
            AuthAction::SignupCompleted => Rc::new(Self {
                mode: AuthMode::Login,
                remember_me: self.remember_me,
                remembered_email: self.remembered_email.clone(),
                ..Self::default()
            }),
        }
    }
}

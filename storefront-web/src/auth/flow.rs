use std::fmt;

use async_trait::async_trait;
use shared::models::{AuthResponse, SigninRequest, SignupRequest, TokenValidationResponse};

use super::form::AuthAction;
use crate::errors::ApiError;
use crate::models::app_state::AppState;
use crate::models::toast::{ToastKind, ToastState};
use crate::storage::{KeyValueStore, SessionStore};

/// Remote operations the auth page and session bootstrap depend on.
#[async_trait(?Send)]
pub trait AuthApi {
    async fn authenticate(&self, request: &AuthRequest) -> Result<AuthResponse, ApiError>;
    async fn validate_token(&self, token: &str) -> Result<TokenValidationResponse, ApiError>;
    async fn logout(&self, token: &str) -> Result<(), ApiError>;
}

/// `/api/auth/{signin|signup}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthEndpoint {
    Signin,
    Signup,
}

impl AuthEndpoint {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Signin => "signin",
            Self::Signup => "signup",
        }
    }
}

impl fmt::Display for AuthEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Credentials bound to the endpoint they are posted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRequest {
    Signin(SigninRequest),
    Signup(SignupRequest),
}

impl AuthRequest {
    pub fn endpoint(&self) -> AuthEndpoint {
        match self {
            Self::Signin(_) => AuthEndpoint::Signin,
            Self::Signup(_) => AuthEndpoint::Signup,
        }
    }
}

/// What a submission did, for the page to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    SignedIn { token: String },
    SignedUp { token: String },
    /// `message` is the service's explanation, when it gave one.
    Failed { message: Option<String> },
}

/// Localised texts used to announce an outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastMessages {
    pub signed_in: String,
    pub signed_up: String,
    pub fallback_error: String,
}

impl SubmitOutcome {
    /// The single notification announcing this outcome.
    pub fn toast(&self, messages: &ToastMessages) -> (ToastKind, String) {
        match self {
            Self::SignedIn { .. } => (ToastKind::Success, messages.signed_in.clone()),
            Self::SignedUp { .. } => (ToastKind::Success, messages.signed_up.clone()),
            Self::Failed { message } => (
                ToastKind::Danger,
                message
                    .clone()
                    .unwrap_or_else(|| messages.fallback_error.clone()),
            ),
        }
    }
}

/// What the page still has to do once the stores are updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FollowUp {
    /// Leave for the home page after the redirect delay.
    RedirectHome,
    /// Feed this action to the form reducer.
    Form(AuthAction),
    Stay,
}

/// Announces `outcome` with exactly one toast and records a new session.
pub fn apply_outcome(
    outcome: SubmitOutcome,
    messages: &ToastMessages,
    toasts: &mut ToastState,
    app: &mut AppState,
) -> FollowUp {
    let (kind, message) = outcome.toast(messages);
    toasts.push(kind, message);

    match outcome {
        SubmitOutcome::SignedIn { token } => {
            *app = AppState::signed_in(token);
            FollowUp::RedirectHome
        }
        SubmitOutcome::SignedUp { token } => {
            *app = AppState::signed_in(token);
            FollowUp::Form(AuthAction::SignupCompleted)
        }
        SubmitOutcome::Failed { .. } => FollowUp::Stay,
    }
}

/// Posts `request` to its endpoint and persists the resulting session.
///
/// On success the token is stored; after a sign-in the submitted username is
/// remembered or forgotten according to `remember_me`. Nothing is written when
/// the call fails or the service returns no token.
pub async fn submit<A, S>(
    api: &A,
    session: &SessionStore<S>,
    request: &AuthRequest,
    remember_me: bool,
) -> SubmitOutcome
where
    A: AuthApi + ?Sized,
    S: KeyValueStore,
{
    let endpoint = request.endpoint();
    let response = match api.authenticate(request).await {
        Ok(response) => response,
        Err(err) => {
            log::error!("{endpoint} failed: {err}");
            return SubmitOutcome::Failed {
                message: err.server_message().map(str::to_string),
            };
        }
    };

    let Some(token) = response.token() else {
        log::error!("{endpoint} succeeded without an access token");
        return SubmitOutcome::Failed {
            message: response
                .message
                .clone()
                .filter(|message| !message.trim().is_empty()),
        };
    };

    if let Err(err) = session.store_token(token) {
        log::error!("could not persist session token: {err}");
        return SubmitOutcome::Failed { message: None };
    }

    let token = token.to_string();
    match request {
        AuthRequest::Signin(credentials) => {
            if let Err(err) = session.update_remembered_email(remember_me, &credentials.username)
            {
                log::warn!("could not update remembered email: {err}");
            }
            log::info!("sign-in succeeded");
            SubmitOutcome::SignedIn { token }
        }
        AuthRequest::Signup(_) => {
            log::info!("sign-up succeeded");
            SubmitOutcome::SignedUp { token }
        }
    }
}

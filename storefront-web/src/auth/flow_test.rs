//! Tests for the sign-in / sign-up submission flow
//!
//! Drives `submit` against a scripted API and an in-memory store and checks
//! what ends up persisted and which notification is produced.

use std::rc::Rc;

use futures::executor::block_on;
use reqwest::StatusCode;
use shared::models::{AuthResponse, SigninRequest, SignupRequest};

use super::fake::{FakeApi, rejected, transport_error};
use yew::Reducible;

use super::flow::{
    AuthEndpoint, AuthRequest, FollowUp, SubmitOutcome, ToastMessages, apply_outcome, submit,
};
use super::form::{AuthAction, AuthField, AuthFormState, AuthMode};
use crate::models::app_state::AppState;
use crate::models::toast::{ToastKind, ToastState};
use crate::storage::{MemoryStorage, REMEMBERED_EMAIL_KEY, SessionStore, TOKEN_KEY};

fn signin(username: &str) -> AuthRequest {
    AuthRequest::Signin(SigninRequest {
        username: username.to_string(),
        password: "111111qQ".to_string(),
    })
}

fn signup() -> AuthRequest {
    AuthRequest::Signup(SignupRequest {
        fullname: "Nguyen Van A".to_string(),
        username: "vana".to_string(),
        password: "111111qQ".to_string(),
        email: "vana@example.com".to_string(),
    })
}

fn messages() -> ToastMessages {
    ToastMessages {
        signed_in: "Signed in successfully".to_string(),
        signed_up: "Signed up successfully".to_string(),
        fallback_error: "Unknown error".to_string(),
    }
}

#[test]
fn signin_persists_token_and_announces_success() {
    let api = FakeApi::issuing("jwt-token");
    let storage = MemoryStorage::default();
    let session = SessionStore::new(storage.clone());

    let outcome = block_on(submit(&api, &session, &signin("alice"), false));

    assert_eq!(
        outcome,
        SubmitOutcome::SignedIn {
            token: "jwt-token".to_string()
        }
    );
    assert_eq!(storage.value(TOKEN_KEY).as_deref(), Some("jwt-token"));
    assert_eq!(
        outcome.toast(&messages()),
        (ToastKind::Success, "Signed in successfully".to_string())
    );
    assert_eq!(api.requests.borrow().as_slice(), &[signin("alice")]);
}

#[test]
fn signup_persists_token_and_announces_success() {
    let api = FakeApi::issuing("fresh-token");
    let storage = MemoryStorage::default();
    let session = SessionStore::new(storage.clone());

    let outcome = block_on(submit(&api, &session, &signup(), false));

    assert_eq!(
        outcome,
        SubmitOutcome::SignedUp {
            token: "fresh-token".to_string()
        }
    );
    assert_eq!(storage.value(TOKEN_KEY).as_deref(), Some("fresh-token"));
    assert_eq!(outcome.toast(&messages()).1, "Signed up successfully");
}

#[test]
fn rejection_reports_server_message_without_token() {
    let api = FakeApi::answering(Err(rejected(
        StatusCode::UNAUTHORIZED,
        Some("Sai tên đăng nhập hoặc mật khẩu"),
    )));
    let storage = MemoryStorage::default();
    let session = SessionStore::new(storage.clone());

    let outcome = block_on(submit(&api, &session, &signin("alice"), true));

    assert_eq!(
        outcome.toast(&messages()),
        (
            ToastKind::Danger,
            "Sai tên đăng nhập hoặc mật khẩu".to_string()
        )
    );
    assert_eq!(storage.value(TOKEN_KEY), None);
    assert_eq!(storage.value(REMEMBERED_EMAIL_KEY), None);
}

#[test]
fn transport_failure_uses_fallback_message() {
    let api = FakeApi::answering(Err(transport_error()));
    let storage = MemoryStorage::default();
    let session = SessionStore::new(storage.clone());

    let outcome = block_on(submit(&api, &session, &signup(), false));

    assert_eq!(outcome, SubmitOutcome::Failed { message: None });
    assert_eq!(
        outcome.toast(&messages()),
        (ToastKind::Danger, "Unknown error".to_string())
    );
    assert_eq!(storage.value(TOKEN_KEY), None);
}

#[test]
fn rejection_without_msg_uses_fallback_message() {
    let api = FakeApi::answering(Err(rejected(StatusCode::BAD_GATEWAY, None)));
    let session = SessionStore::new(MemoryStorage::default());

    let outcome = block_on(submit(&api, &session, &signin("alice"), false));

    assert_eq!(outcome.toast(&messages()).1, "Unknown error");
}

#[test]
fn success_without_token_is_a_failure() {
    let api = FakeApi::answering(Ok(AuthResponse {
        access_token: None,
        message: Some("Account pending activation".to_string()),
    }));
    let storage = MemoryStorage::default();
    let session = SessionStore::new(storage.clone());

    let outcome = block_on(submit(&api, &session, &signup(), false));

    assert_eq!(
        outcome,
        SubmitOutcome::Failed {
            message: Some("Account pending activation".to_string())
        }
    );
    assert_eq!(storage.value(TOKEN_KEY), None);
}

#[test]
fn remember_me_stores_submitted_username() {
    let api = FakeApi::issuing("jwt-token");
    let storage = MemoryStorage::default();
    let session = SessionStore::new(storage.clone());

    block_on(submit(&api, &session, &signin("alice@example.com"), true));

    assert_eq!(
        storage.value(REMEMBERED_EMAIL_KEY).as_deref(),
        Some("alice@example.com")
    );
}

#[test]
fn unticked_remember_me_clears_previous_email() {
    let api = FakeApi::issuing("jwt-token");
    let storage = MemoryStorage::default();
    storage.insert(REMEMBERED_EMAIL_KEY, "old@example.com");
    let session = SessionStore::new(storage.clone());

    block_on(submit(&api, &session, &signin("alice"), false));

    assert_eq!(storage.value(REMEMBERED_EMAIL_KEY), None);
}

#[test]
fn signup_leaves_remembered_email_alone() {
    let api = FakeApi::issuing("jwt-token");
    let storage = MemoryStorage::default();
    storage.insert(REMEMBERED_EMAIL_KEY, "old@example.com");
    let session = SessionStore::new(storage.clone());

    block_on(submit(&api, &session, &signup(), false));

    assert_eq!(
        storage.value(REMEMBERED_EMAIL_KEY).as_deref(),
        Some("old@example.com")
    );
}

#[test]
fn storage_failure_reports_failure() {
    let api = FakeApi::issuing("jwt-token");
    let session = SessionStore::new(MemoryStorage::failing_writes());

    let outcome = block_on(submit(&api, &session, &signin("alice"), true));

    assert_eq!(outcome, SubmitOutcome::Failed { message: None });
}

#[test]
fn each_submission_is_a_single_request() {
    let api = FakeApi::answering(Err(rejected(StatusCode::UNAUTHORIZED, Some("nope"))));
    let session = SessionStore::new(MemoryStorage::default());

    block_on(submit(&api, &session, &signin("alice"), false));

    assert_eq!(api.calls(), 1);
}

#[test]
fn request_selects_endpoint() {
    assert_eq!(signin("alice").endpoint(), AuthEndpoint::Signin);
    assert_eq!(signup().endpoint(), AuthEndpoint::Signup);
    assert_eq!(AuthEndpoint::Signin.to_string(), "signin");
    assert_eq!(AuthEndpoint::Signup.as_str(), "signup");
}

#[test]
fn signed_in_outcome_announces_once_and_redirects() {
    let mut toasts = ToastState::default();
    let mut app = AppState::signed_out();

    let follow_up = apply_outcome(
        SubmitOutcome::SignedIn {
            token: "jwt-token".to_string(),
        },
        &messages(),
        &mut toasts,
        &mut app,
    );

    assert_eq!(follow_up, FollowUp::RedirectHome);
    assert_eq!(toasts.toasts.len(), 1);
    assert_eq!(toasts.toasts[0].kind, ToastKind::Success);
    assert_eq!(toasts.toasts[0].message, "Signed in successfully");
    assert_eq!(app, AppState::signed_in("jwt-token".to_string()));
}

#[test]
fn signed_up_outcome_resets_form_to_login() {
    let mut toasts = ToastState::default();
    let mut app = AppState::signed_out();

    let follow_up = apply_outcome(
        SubmitOutcome::SignedUp {
            token: "fresh-token".to_string(),
        },
        &messages(),
        &mut toasts,
        &mut app,
    );

    assert_eq!(follow_up, FollowUp::Form(AuthAction::SignupCompleted));
    assert_eq!(toasts.toasts.len(), 1);
    assert_eq!(toasts.toasts[0].message, "Signed up successfully");
    assert!(app.is_authenticated());

    let FollowUp::Form(action) = follow_up else {
        unreachable!();
    };
    let mut form = Rc::new(AuthFormState::default());
    for step in [
        AuthAction::SwitchMode(AuthMode::Signup),
        AuthAction::Input(AuthField::Fullname, "Nguyen Van A".to_string()),
        AuthAction::Input(AuthField::Username, "vana".to_string()),
        AuthAction::Input(AuthField::Password, "111111qQ".to_string()),
        AuthAction::Input(AuthField::Email, "vana@example.com".to_string()),
        action,
    ] {
        form = form.reduce(step);
    }
    assert_eq!(form.mode, AuthMode::Login);
    assert!(form.fullname.is_empty());
    assert!(form.username.is_empty());
    assert!(form.password.is_empty());
    assert!(form.email.is_empty());
}

#[test]
fn failed_outcome_announces_once_and_keeps_session() {
    let mut toasts = ToastState::default();
    let mut app = AppState::signed_out();

    let follow_up = apply_outcome(
        SubmitOutcome::Failed {
            message: Some("Sai tên đăng nhập hoặc mật khẩu".to_string()),
        },
        &messages(),
        &mut toasts,
        &mut app,
    );

    assert_eq!(follow_up, FollowUp::Stay);
    assert_eq!(toasts.toasts.len(), 1);
    assert_eq!(toasts.toasts[0].kind, ToastKind::Danger);
    assert_eq!(toasts.toasts[0].message, "Sai tên đăng nhập hoặc mật khẩu");
    assert_eq!(app, AppState::signed_out());
}

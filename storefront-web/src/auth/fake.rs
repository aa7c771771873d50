use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use reqwest::StatusCode;
use shared::models::{ApiErrorBody, AuthResponse, TokenValidationResponse};

use super::flow::{AuthApi, AuthRequest};
use crate::errors::ApiError;

/// Scripted `AuthApi` recording what it was asked.
#[derive(Default)]
pub(crate) struct FakeApi {
    auth_result: RefCell<Option<Result<AuthResponse, ApiError>>>,
    validate_result: RefCell<Option<Result<TokenValidationResponse, ApiError>>>,
    logout_result: RefCell<Option<Result<(), ApiError>>>,
    pub(crate) requests: RefCell<Vec<AuthRequest>>,
    pub(crate) validated_tokens: RefCell<Vec<String>>,
    pub(crate) logout_calls: Cell<usize>,
}

impl FakeApi {
    pub(crate) fn issuing(token: &str) -> Self {
        Self::answering(Ok(AuthResponse {
            access_token: Some(token.to_string()),
            message: None,
        }))
    }

    pub(crate) fn answering(result: Result<AuthResponse, ApiError>) -> Self {
        let api = Self::default();
        *api.auth_result.borrow_mut() = Some(result);
        api
    }

    pub(crate) fn with_validation(self, result: Result<TokenValidationResponse, ApiError>) -> Self {
        *self.validate_result.borrow_mut() = Some(result);
        self
    }

    pub(crate) fn with_logout(self, result: Result<(), ApiError>) -> Self {
        *self.logout_result.borrow_mut() = Some(result);
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.requests.borrow().len()
            + self.validated_tokens.borrow().len()
            + self.logout_calls.get()
    }
}

#[async_trait(?Send)]
impl AuthApi for FakeApi {
    async fn authenticate(&self, request: &AuthRequest) -> Result<AuthResponse, ApiError> {
        self.requests.borrow_mut().push(request.clone());
        self.auth_result
            .borrow_mut()
            .take()
            .unwrap_or_else(|| Err(rejected(StatusCode::INTERNAL_SERVER_ERROR, None)))
    }

    async fn validate_token(&self, token: &str) -> Result<TokenValidationResponse, ApiError> {
        self.validated_tokens.borrow_mut().push(token.to_string());
        self.validate_result.borrow_mut().take().unwrap_or_else(|| {
            Ok(TokenValidationResponse {
                message: "Valid token".to_string(),
            })
        })
    }

    async fn logout(&self, _token: &str) -> Result<(), ApiError> {
        self.logout_calls.set(self.logout_calls.get() + 1);
        self.logout_result.borrow_mut().take().unwrap_or(Ok(()))
    }
}

pub(crate) fn rejected(status: StatusCode, msg: Option<&str>) -> ApiError {
    ApiError::Rejected {
        status,
        body: msg.map(ApiErrorBody::new),
    }
}

/// A transport failure, produced the way reqwest reports an unusable URL.
pub(crate) fn transport_error() -> ApiError {
    let err = reqwest::Client::new()
        .get("not a url")
        .build()
        .expect_err("relative URL must not build");
    ApiError::Transport(err)
}

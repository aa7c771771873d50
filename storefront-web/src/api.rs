use async_trait::async_trait;
use once_cell::unsync::OnceCell;
use reqwest::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::models::{
    ApiErrorBody, AuthResponse, SigninRequest, SignupRequest, TokenValidationResponse,
};

use crate::auth::{AuthApi, AuthRequest};
use crate::config::FrontendConfig;
use crate::errors::ApiError;

thread_local! {
    static SHARED_CLIENT: OnceCell<StorefrontClient> = OnceCell::new();
}

/// Lightweight API client for the shop's auth service.
#[derive(Clone, Debug)]
pub struct StorefrontClient {
    base_url: String,
    client: Client,
}

impl StorefrontClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// The client for the configured API, created on first use.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(FrontendConfig::shared().api_base_url()))
                .clone()
        })
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self.client.post(self.api_url(path)).json(body).send().await?;
        read_json(response).await
    }

    /// Sign in with username (or email) and password.
    pub async fn signin(&self, request: &SigninRequest) -> Result<AuthResponse, ApiError> {
        self.post_json("auth/signin", request).await
    }

    /// Register a new account.
    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse, ApiError> {
        self.post_json("auth/signup", request).await
    }

    /// Ask the service whether `token` is still valid.
    pub async fn validate_token(&self, token: &str) -> Result<TokenValidationResponse, ApiError> {
        let response = self
            .client
            .get(self.api_url("auth/validate-token"))
            .bearer_auth(token)
            .send()
            .await?;
        read_json(response).await
    }

    /// Terminate the session identified by `token`.
    pub async fn logout(&self, token: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.api_url("auth/logout"))
            .bearer_auth(token)
            .send()
            .await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(rejection(response).await)
        }
    }
}

#[async_trait(?Send)]
impl AuthApi for StorefrontClient {
    async fn authenticate(&self, request: &AuthRequest) -> Result<AuthResponse, ApiError> {
        match request {
            AuthRequest::Signin(credentials) => self.signin(credentials).await,
            AuthRequest::Signup(details) => self.signup(details).await,
        }
    }

    async fn validate_token(&self, token: &str) -> Result<TokenValidationResponse, ApiError> {
        StorefrontClient::validate_token(self, token).await
    }

    async fn logout(&self, token: &str) -> Result<(), ApiError> {
        StorefrontClient::logout(self, token).await
    }
}

async fn read_json<R: DeserializeOwned>(response: Response) -> Result<R, ApiError> {
    if response.status().is_success() {
        Ok(response.json::<R>().await?)
    } else {
        Err(rejection(response).await)
    }
}

async fn rejection(response: Response) -> ApiError {
    let status = response.status();
    let body = response.json::<ApiErrorBody>().await.ok();
    ApiError::Rejected { status, body }
}

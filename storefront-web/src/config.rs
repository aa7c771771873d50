//! Frontend configuration module
//!
//! Compile-time settings for the remote API location, the embedded store map
//! and UI timings. Override the URLs by exporting the matching environment
//! variable when building with `trunk`.

use once_cell::sync::Lazy;

const DEFAULT_API_BASE_URL: &str = "http://localhost:8088/api";
const DEFAULT_MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3918.8581690910514!2d106.68427047457543!3d10.822164158349356!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x3174deb3ef536f31%3A0x8b7bb8b7c956157b!2zVHLGsOG7nW5nIMSQ4bqhaSBo4buNYyBDw7RuZyBuZ2hp4buHcCBUUC5IQ00!5e0!3m2!1svi!2s!4v1745797143571!5m2!1svi!2s";

/// Delay between a successful sign-in and the redirect to the home page.
pub const REDIRECT_DELAY_MS: u32 = 1_000;
/// How long a toast stays on screen.
pub const TOAST_DURATION_MS: u32 = 3_000;
/// Maximum number of toasts shown at once.
pub const TOAST_CAPACITY: usize = 5;

static SHARED_CONFIG: Lazy<FrontendConfig> = Lazy::new(FrontendConfig::default);

/// Frontend configuration for URLs and timings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Base URL of the REST API, without a trailing slash.
    pub api_base_url: String,
    /// Google Maps embed shown in the footer.
    pub map_embed_url: String,
    /// Milliseconds to wait before leaving the auth page after sign-in.
    pub redirect_delay_ms: u32,
    /// Milliseconds a toast stays visible.
    pub toast_duration_ms: u32,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("STOREFRONT_API_BASE_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            map_embed_url: option_env!("STOREFRONT_MAP_EMBED_URL")
                .unwrap_or(DEFAULT_MAP_EMBED_URL)
                .to_string(),
            redirect_delay_ms: REDIRECT_DELAY_MS,
            toast_duration_ms: TOAST_DURATION_MS,
        }
    }
}

impl FrontendConfig {
    /// The process-wide configuration.
    pub fn shared() -> &'static Self {
        &SHARED_CONFIG
    }

    /// Get the API base URL
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Get the footer map URL
    pub fn map_embed_url(&self) -> &str {
        &self.map_embed_url
    }
}

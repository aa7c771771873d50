pub(crate) mod breadcrumb;
pub(crate) mod button;
pub(crate) mod footer;
pub(crate) mod language_selector;
pub(crate) mod language_selector_button;
pub(crate) mod reveal;
pub(crate) mod toast;

// Re-export components for convenience
pub use breadcrumb::Breadcrumb;
pub use button::Button;
pub use footer::Footer;
pub use language_selector::LanguageSelector;
pub use reveal::Reveal;
pub use toast::ToastHost;

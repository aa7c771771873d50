use std::collections::HashMap;

use gloo_storage::{LocalStorage, Storage};

/// Language used when nothing valid was saved.
pub const DEFAULT_LANGUAGE: &str = "en";
const LANGUAGE_KEY: &str = "language";

/// Information about a supported language
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub flag: &'static str,
    pub translation: &'static str,
    pub native_name: &'static str,
}

/// Get information about a supported language
pub fn get_language_info(code: &str) -> Option<LanguageInfo> {
    supported_languages().get(code).cloned()
}

/// Get a map of supported languages
pub fn supported_languages() -> HashMap<&'static str, LanguageInfo> {
    HashMap::from([
        (
            "en",
            LanguageInfo {
                code: "en",
                flag: "🇬🇧",
                translation: include_str!("../translations/en.json"),
                native_name: "English",
            },
        ),
        (
            "vi",
            LanguageInfo {
                code: "vi",
                flag: "🇻🇳",
                translation: include_str!("../translations/vi.json"),
                native_name: "Tiếng Việt",
            },
        ),
    ])
}

/// The language chosen on a previous visit, if it is still supported.
pub fn saved_language() -> String {
    LocalStorage::get::<String>(LANGUAGE_KEY)
        .ok()
        .filter(|code| get_language_info(code).is_some())
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
}

pub fn save_language(code: &str) {
    if let Err(err) = LocalStorage::set(LANGUAGE_KEY, code) {
        log::warn!("could not save language preference: {err}");
    }
}

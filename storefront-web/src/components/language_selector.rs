use i18nrs::yew::use_translation;
use yew::{AttrValue, Callback, Html, function_component, html};

use crate::components::language_selector_button::LanguageSelectorButton;
use crate::language::{self, DEFAULT_LANGUAGE};

#[function_component(LanguageSelector)]
pub fn language_selector() -> Html {
    let (i18n, set_language) = use_translation();
    let current = i18n.get_current_language().to_string();

    let on_select = Callback::from(move |code: AttrValue| {
        language::save_language(&code);
        set_language.emit(code.to_string());
    });

    let active_flag = language::get_language_info(&current)
        .or_else(|| language::get_language_info(DEFAULT_LANGUAGE))
        .map_or("", |info| info.flag);
    let mut languages: Vec<_> = language::supported_languages().into_values().collect();
    languages.sort_by(|a, b| a.native_name.cmp(b.native_name));

    html! {
        <div class="dropdown dropdown-end">
            <div
                tabindex="0"
                role="button"
                class="btn btn-ghost btn-circle"
                aria-label={i18n.t("header.language")}
            >
                <span>{active_flag}</span>
            </div>
            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-52">
            {
                for languages.into_iter().map(|info| html! {
                    <LanguageSelectorButton
                        is_active={info.code == current}
                        info={info}
                        on_select={on_select.clone()}
                    />
                })
            }
            </ul>
        </div>
    }
}

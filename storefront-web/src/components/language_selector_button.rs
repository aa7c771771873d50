use yew::{AttrValue, Callback, Html, MouseEvent, Properties, function_component, html};
use yew_icons::{Icon, IconId};

use crate::language::LanguageInfo;

#[derive(Properties, PartialEq)]
pub struct LanguageSelectorButtonProps {
    pub is_active: bool,
    pub info: LanguageInfo,
    /// Receives the language code.
    pub on_select: Callback<AttrValue>,
}

/// One entry of the language dropdown.
#[function_component(LanguageSelectorButton)]
pub fn language_selector_button(props: &LanguageSelectorButtonProps) -> Html {
    let LanguageInfo {
        code,
        flag,
        native_name,
        ..
    } = props.info;
    let onclick = props.on_select.reform(move |event: MouseEvent| {
        event.prevent_default();
        AttrValue::Static(code)
    });

    html! {
        <li>
            <a
                class={props.is_active.then_some("active")}
                aria-current={props.is_active.then_some("true")}
                lang={code}
                {onclick}
            >
                <span>{flag}</span>
                <span class="flex-1">{native_name}</span>
                if props.is_active {
                    <Icon icon_id={IconId::HeroiconsSolidCheck} class="h-4 w-4" />
                }
            </a>
        </li>
    }
}

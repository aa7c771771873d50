use yew::{Callback, Children, Html, MouseEvent, Properties, classes, function_component, html};

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    /// Stretch to the width of the container.
    #[prop_or_default]
    pub fwidth: bool,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let width = props.fwidth.then_some("w-full");

    html! {
        <button
            type="button"
            class={classes!("btn", "btn-primary", width)}
            disabled={props.disabled}
            onclick={props.onclick.clone()}
        >
            {props.children.clone()}
        </button>
    }
}

use yew::{Children, Html, Properties, classes, function_component, html, use_node_ref};
use yew_hooks::use_visible;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
}

/// Fades its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_visible(node.clone(), true);

    let state = if visible {
        classes!("opacity-100", "translate-y-0")
    } else {
        classes!("opacity-0", "translate-y-6")
    };

    html! {
        <div ref={node} class={classes!("transition-all", "duration-700", "ease-out", state)}>
            {props.children.clone()}
        </div>
    }
}

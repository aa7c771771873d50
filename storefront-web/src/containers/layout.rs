use yew::{Children, Html, Properties, function_component, html};

use crate::components::{Footer, ToastHost};
use crate::containers::header::Header;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
    <>
        <Header />
        <div class="min-h-screen bg-base-100 flex flex-col">
            <main class="flex-grow">
                {props.children.clone()}
            </main>
            <Footer />
        </div>
        <ToastHost />
    </>
    }
}

use yew::{Html, function_component, html};

use crate::config::FrontendConfig;

/// One of the service promises shown above the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Promotion {
    pub image: &'static str,
    pub title: &'static str,
    pub caption: &'static str,
}

pub const PROMOTIONS: [Promotion; 3] = [
    Promotion {
        image: "/assets/img/others/shipping1.png",
        title: "Free Shipping",
        caption: "Capped at $39 per order",
    },
    Promotion {
        image: "/assets/img/others/shipping2.png",
        title: "Card Payments",
        caption: "12 Months Installments",
    },
    Promotion {
        image: "/assets/img/others/shipping3.png",
        title: "Easy Returns",
        caption: "Shop with Confidence",
    },
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let map_url = FrontendConfig::shared().map_embed_url().to_string();

    html! {
        <footer class="bg-base-200 mt-12">
            <div class="container mx-auto px-4 py-8">
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    { for PROMOTIONS.iter().map(|promotion| html! {
                        <div key={promotion.title} class="flex items-center gap-4">
                            <img src={promotion.image} alt={promotion.title} class="w-12 h-12 object-contain" />
                            <div>
                                <h3 class="text-lg font-semibold">{promotion.title}</h3>
                                <p class="text-sm text-base-content/70">{promotion.caption}</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
            <iframe
                title="map"
                src={map_url}
                width="100%"
                height="450"
                style="border: 0;"
                allowfullscreen=true
                loading="lazy"
                referrerpolicy="no-referrer-when-downgrade"
            ></iframe>
        </footer>
    }
}

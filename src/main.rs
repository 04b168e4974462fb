use yew::prelude::*;
use log::info;

mod config;
mod viewport;
mod state {
    pub mod navigation;
    pub mod modal;
    pub mod reveal;
    pub mod parallax;
    pub mod pricing;
}
mod components {
    pub mod animated_section;
    pub mod cards;
    pub mod cursor_follower;
    pub mod floating;
    pub mod header;
    pub mod particles;
    pub mod ticket_modal;
}
mod pages {
    pub mod festival;
    pub mod sections;
}

use pages::festival::Festival;


#[function_component]
fn App() -> Html {
    html! {
        <Festival />
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::EVENT_NAME);
    yew::Renderer::<App>::new().render();
}

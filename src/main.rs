use dioxus::prelude::*;

mod catalog;
mod components;
mod diagnostics;
mod error;
mod settings;
mod utils;

use components::AppShell;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const APP_CSS: Asset = asset!("/assets/styling/soundboard.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", r#type: "image/svg+xml", href: FAVICON }

        // Theme color for mobile browsers
        document::Meta { name: "theme-color", content: "#a38449" }
        document::Title { "Soundboard" }

        document::Stylesheet { href: APP_CSS }

        AppShell {}
    }
}

#![allow(non_snake_case)]

use dioxus::prelude::*;
use views::Board;

mod api_client;
mod board;
mod components;
mod models;
mod views;

/// Remote message-board API. All message state lives server-side; this client
/// is a thin view over two endpoints on this host.
pub const API_BASE_URL: &str = "https://student-json-api.lidemy.me";

/// Nickname attached to every message posted from this client.
pub const AUTHOR_NICKNAME: &str = "emory";

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        script { src: "https://cdn.tailwindcss.com" }

        Board {}
    }
}

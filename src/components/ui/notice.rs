use dioxus::prelude::*;

/// Inline red error text, shared by the feed and the composer.
#[component]
pub fn ErrorNotice(text: String) -> Element {
    rsx! {
        div { class: "mt-4 text-sm text-red-500", "{text}" }
    }
}

/// Fullscreen dimmed overlay shown while a submission is in flight.
#[component]
pub fn LoadingOverlay(text: String) -> Element {
    rsx! {
        div { class: "fixed inset-0 z-50 flex items-center justify-center bg-black/40 text-3xl text-white",
            "{text}"
        }
    }
}

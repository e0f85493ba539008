use crate::models::Message;
use dioxus::prelude::*;

/// A single message: author and timestamp in the header, body below.
#[component]
pub fn MessageCard(message: Message) -> Element {
    let time = message.created_at_display();

    rsx! {
        div { class: "border border-black rounded-xl p-2",
            div { class: "flex items-center justify-between border-b border-black/40 pb-2",
                div { class: "text-sm text-[#174e37]", "{message.nickname}" }
                div { class: "text-sm text-gray-600", "{time}" }
            }
            p { class: "mt-2 text-base", "{message.body}" }
        }
    }
}

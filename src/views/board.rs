use crate::api_client::ApiClient;
use crate::board::{Composer, FeedState};
use crate::components::ui::{ErrorNotice, LoadingOverlay, MessageTextArea};
use crate::components::MessageCard;
use crate::models::{CreateMessageRequest, CreateMessageResponse, Message};
use dioxus::logger::tracing;
use dioxus::prelude::*;

/// Sort order is the server's contract; the client renders the array as-is.
const FEED_PATH: &str = "/comments?_sort=createdAt&_order=desc";
const POST_PATH: &str = "/comments";

/// The whole single-page board: composer on top, feed below.
#[component]
pub fn Board() -> Element {
    let mut feed = use_signal(|| FeedState::Loading);

    // Runs once on mount; the composer restarts it after a successful post.
    let mut feed_loader = use_resource(move || async move {
        let client = ApiClient::new(crate::API_BASE_URL);
        let fetched = client.get_json::<Vec<Message>>(FEED_PATH).await;
        if let Err(err) = &fetched {
            tracing::warn!("failed to fetch messages: {err}");
        }
        feed.write().apply_fetch(fetched);
    });

    rsx! {
        div { class: "w-80 mx-auto py-8",
            h1 { class: "text-2xl font-bold text-[#333]", "Message Board" }
            MessageComposer {
                on_posted: move |_| {
                    feed_loader.restart();
                },
            }
            MessageFeed { feed }
        }
    }
}

#[component]
fn MessageFeed(feed: Signal<FeedState>) -> Element {
    rsx! {
        div { class: "mt-4",
            match &*feed.read() {
                FeedState::Loading => rsx! {
                    div { class: "text-gray-500", "Loading messages..." }
                },
                FeedState::Failed(err) => rsx! {
                    ErrorNotice { text: format!("Something went wrong... {err}") }
                },
                FeedState::Loaded(messages) if messages.is_empty() => rsx! {
                    div { class: "text-gray-500", "No messages here..." }
                },
                FeedState::Loaded(messages) => rsx! {
                    div { class: "space-y-2",
                        for message in messages.iter() {
                            MessageCard { key: "{message.id}", message: message.clone() }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn MessageComposer(on_posted: EventHandler<()>) -> Element {
    let mut composer = use_signal(Composer::default);

    let onsubmit = move |e: FormEvent| {
        e.prevent_default();

        // Reentrancy guard: at most one submission in flight.
        if !composer.write().begin_submit() {
            return;
        }
        let body = composer.read().draft().to_string();

        spawn(async move {
            let client = ApiClient::new(crate::API_BASE_URL);
            let request = CreateMessageRequest {
                nickname: crate::AUTHOR_NICKNAME.to_string(),
                body,
            };
            let outcome = client
                .post_json::<_, CreateMessageResponse>(POST_PATH, &request)
                .await;
            if let Err(err) = &outcome {
                tracing::warn!("failed to post message: {err}");
            }
            let should_refetch = composer.write().finish_submit(outcome);
            if should_refetch {
                on_posted.call(());
            }
        });
    };

    let draft = composer.read().draft().to_string();
    let in_flight = composer.read().is_in_flight();
    let error = composer.read().error();

    rsx! {
        if in_flight {
            LoadingOverlay { text: "Posting..." }
        }
        form { onsubmit, class: "mt-4",
            MessageTextArea {
                value: draft,
                oninput: move |e: FormEvent| composer.write().set_draft(e.value()),
                onfocus: move |_| composer.write().dismiss_error(),
            }
            button {
                r#type: "submit",
                class: "mt-2 px-4 py-1 rounded bg-[#333] text-white hover:bg-[#555] transition-colors",
                "Post"
            }
            if let Some(err) = error {
                ErrorNotice { text: err }
            }
        }
    }
}

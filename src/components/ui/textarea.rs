use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MessageTextAreaProps {
    pub value: String,
    pub oninput: EventHandler<FormEvent>,
    /// Focus dismisses a previously shown submission error.
    pub onfocus: EventHandler<FocusEvent>,
    #[props(optional)]
    pub placeholder: Option<String>,
}

#[component]
pub fn MessageTextArea(props: MessageTextAreaProps) -> Element {
    rsx! {
        textarea {
            class: "block w-full rounded-lg border border-[#3f4147] px-3 py-2 text-sm placeholder-gray-500 focus:outline-none focus:ring-2 focus:ring-indigo-500/50 focus:border-indigo-500",
            rows: "10",
            value: "{props.value}",
            placeholder: props.placeholder.unwrap_or_default(),
            oninput: move |e| props.oninput.call(e),
            onfocus: move |e| props.onfocus.call(e),
        }
    }
}

use dioxus::prelude::*;

const FIELD: &str = "p-3 rounded-md bg-gray-50 dark:bg-gray-700 ring-1 ring-gray-100 dark:ring-gray-700";

/// Contact form. Field values are only checked by the browser; submitting
/// opens the pre-filled `link` in the visitor's mail client.
#[component]
pub fn ContactForm(link: String) -> Element {
    rsx! {
        form {
            class: "grid gap-3",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                open_mail_client(&link);
            },
            input { name: "name", class: FIELD, placeholder: "Your name", required: true }
            input { name: "email", class: FIELD, placeholder: "Email", r#type: "email", required: true }
            textarea { name: "message", class: FIELD, placeholder: "Message", rows: "4", required: true }
            div {
                class: "text-right",
                button { r#type: "submit", class: "px-4 py-2 bg-indigo-600 text-white rounded-md", "Send message" }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn open_mail_client(link: &str) {
    let Some(window) = web_sys::window() else {
        log::error!("No window to open mail client from");
        return;
    };
    if let Err(e) = window.location().set_href(link) {
        log::error!("Failed to open mail client: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn open_mail_client(link: &str) {
    log::info!("Contact form submitted, mail link: {}", link);
}

use dioxus::prelude::*;
use crate::configs::Contact;

#[component]
pub fn ContactCard(contact: Contact) -> Element {
    rsx! {
        div {
            class: "p-3 rounded-md bg-gray-50 dark:bg-gray-700 ring-1 ring-gray-100 dark:ring-gray-700",
            div { class: "text-xs opacity-80", "{contact.label}" }
            if let Some(url) = contact.url.as_ref() {
                a { class: "block mt-1 text-sm font-medium hover:underline", href: "{url}", "{contact.value}" }
            } else {
                div { class: "mt-1 text-sm", "{contact.value}" }
            }
        }
    }
}

use dioxus::prelude::*;

#[component]
pub fn Skill(tag: String) -> Element {
    rsx! {
        div { class: "text-xs p-2 rounded bg-gray-100 dark:bg-gray-700 text-center", "{tag}" }
    }
}

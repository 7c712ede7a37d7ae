use dioxus::prelude::*;
use crate::configs::Project;

/// Whole card is a link that opens the project in a new tab.
#[component]
pub fn ProjectCard(project: Project) -> Element {
    rsx! {
        a {
            target: "_blank",
            rel: "noopener noreferrer",
            href: "{project.url}",
            class: "block p-4 rounded-lg bg-white dark:bg-gray-800 ring-1 ring-gray-100 dark:ring-gray-700 hover:shadow-md transition-shadow",
            h4 { class: "font-semibold", "{project.title}" }
            p { class: "mt-2 text-sm opacity-90", "{project.description}" }
            div {
                class: "mt-3 flex gap-2 flex-wrap",
                for (i, tech) in project.tech.iter().enumerate() {
                    span { key: "{i}", class: "text-xs p-1 rounded bg-gray-100 dark:bg-gray-700", "{tech}" }
                }
            }
        }
    }
}

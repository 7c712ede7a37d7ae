use dioxus::prelude::*;
use crate::configs::Profile;
use crate::routes::Route;
use crate::utils::HostThemeController;
use crate::views::Footer;

#[component(no_case_check)]
pub fn Header() -> Element {
    let mut theme = use_context::<Signal<HostThemeController>>();
    let profile = use_context::<Profile>();
    let is_dark = theme.read().is_dark();

    rsx! {
        div {
            header {
                class: "max-w-5xl mx-auto p-6 flex items-center justify-between",
                div {
                    h1 { class: "text-2xl font-semibold", {profile.headline()} }
                    p { class: "text-sm opacity-80", "{profile.tagline}" }
                }
                div {
                    class: "flex items-center gap-3",
                    a {
                        href: "#contact",
                        class: "hidden sm:inline-block px-3 py-2 rounded-md bg-indigo-600 text-white hover:opacity-90",
                        "Hire me"
                    }
                    button {
                        aria_label: "Toggle dark mode",
                        class: "p-2 rounded-md ring-1 ring-gray-200 dark:ring-gray-700 hover:bg-gray-100 dark:hover:bg-gray-800",
                        onclick: move |_| theme.write().toggle(),
                        if is_dark {
                            "🌞"
                        } else {
                            "🌙"
                        }
                    }
                }
            }
            main {
                class: "max-w-5xl mx-auto p-6 space-y-12",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}

use chrono::Datelike;
use dioxus::prelude::*;
use crate::configs::Profile;

#[component]
pub fn Footer() -> Element {
    let profile = use_context::<Profile>();
    let year = chrono::Local::now().year();

    rsx! {
        footer {
            class: "max-w-5xl mx-auto p-6 text-center text-sm opacity-80",
            {profile.footer_line(year)}
        }
    }
}

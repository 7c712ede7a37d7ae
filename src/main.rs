use dioxus::prelude::*;
use portfolio::{ host_controller, Profile, Route };

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenv::dotenv().ok();
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        env_logger::init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
        }
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let theme = use_context_provider(|| Signal::new(host_controller().start()));
    let profile = use_hook(|| {
        Profile::load().map_err(|e| {
            log::error!("Failed to load profile: {}", e);
            e.to_string()
        })
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div {
            class: if theme.read().is_dark() { "dark" } else { "" },
            div {
                class: "min-h-screen bg-gray-50 dark:bg-gray-900 text-gray-900 dark:text-gray-100 transition-colors duration-300",
                {match profile {
                    Ok(profile) => rsx! { Site { profile } },
                    Err(message) => rsx! { ProfileError { message } },
                }}
            }
        }
    }
}

#[component]
fn Site(profile: Profile) -> Element {
    use_context_provider(|| profile);

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn ProfileError(message: String) -> Element {
    rsx! {
        div {
            class: "max-w-5xl mx-auto p-6 text-center text-red-500",
            div { "Error loading profile" }
            div { "{message}" }
        }
    }
}

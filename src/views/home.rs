use dioxus::prelude::*;
use crate::components::{ ContactCard, ContactForm, ProjectCard, Skill };
use crate::configs::Profile;

const PANEL: &str = "rounded-2xl p-6 bg-white dark:bg-gray-800 shadow-sm ring-1 ring-gray-100 dark:ring-gray-700";

#[component]
pub fn Home() -> Element {
    let profile = use_context::<Profile>();

    rsx! {
        section {
            class: "py-8",
            div {
                class: "rounded-2xl p-8 bg-white dark:bg-gray-800 shadow-sm ring-1 ring-gray-100 dark:ring-gray-700",
                div {
                    class: "md:flex md:items-center md:justify-between",
                    div {
                        h2 { class: "text-3xl font-bold", "{profile.greeting}" }
                        p { class: "mt-3 text-lg opacity-90", "{profile.pitch}" }
                        ul {
                            class: "mt-4 text-sm opacity-85 list-disc list-inside",
                            for highlight in profile.highlights.iter() {
                                li { "{highlight}" }
                            }
                        }
                        div {
                            class: "mt-6 flex gap-3",
                            a { href: "#projects", class: "px-4 py-2 bg-indigo-600 text-white rounded-md", "View projects" }
                            a { href: "#contact", class: "px-4 py-2 border rounded-md", "Let’s talk" }
                        }
                    }
                    div {
                        class: "mt-6 md:mt-0 flex-shrink-0",
                        div {
                            class: "w-36 h-36 rounded-lg bg-gradient-to-br from-indigo-500 to-emerald-400 flex items-center justify-center text-3xl font-bold text-white",
                            {profile.initial().to_string()}
                        }
                    }
                }
            }
        }

        section {
            id: "about",
            div {
                class: PANEL,
                h3 { class: "text-xl font-semibold", "About me" }
                p { class: "mt-3 text-sm opacity-90", "{profile.about}" }
                div {
                    class: "mt-4 grid grid-cols-2 gap-3 sm:grid-cols-4",
                    for skill in profile.skills.iter() {
                        Skill { key: "{skill}", tag: skill.clone() }
                    }
                }
            }
        }

        section {
            id: "projects",
            h3 { class: "text-xl font-semibold", "Projects" }
            p { class: "mt-2 text-sm opacity-80", "{profile.projects_intro}" }
            div {
                class: "grid gap-6 mt-4 sm:grid-cols-2",
                for project in profile.projects.iter() {
                    ProjectCard { key: "{project.title}", project: project.clone() }
                }
            }
        }

        section {
            id: "contact",
            class: "pb-12",
            div {
                class: PANEL,
                h3 { class: "text-xl font-semibold", "Contact" }
                p { class: "mt-2 text-sm opacity-90", "{profile.contact_intro}" }
                div {
                    class: "mt-4 grid gap-4 sm:grid-cols-2",
                    for contact in profile.contacts.iter() {
                        ContactCard { key: "{contact.label}", contact: contact.clone() }
                    }
                }
                div {
                    class: "mt-6",
                    ContactForm { link: profile.inquiry_link() }
                }
            }
        }
    }
}

use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::debug;

use folio::route::lookup_project;

use crate::{Route, common::dom::scroll_to_top, components::theme_toggle::ThemeToggle};

#[component]
fn NotFoundPanel(message: String) -> Element {
    rsx! {
        div { class: "not-found",
            h1 { "404" }
            p { "{message}" }
            Link { to: Route::Home {}, class: "btn btn-primary", "Back to home" }
        }
    }
}

#[component]
pub fn ProjectDetail(id: String) -> Element {
    use_effect(scroll_to_top);

    let Some(project) = lookup_project(&id) else {
        debug!("no project matches {id:?}");
        return rsx! {
            NotFoundPanel { message: "This project does not exist." }
        };
    };

    rsx! {
        div { class: "detail",
            div { class: "detail-toolbar",
                button {
                    class: "btn btn-ghost",
                    onclick: move |_| navigator().go_back(),
                    "← Back"
                }
                ThemeToggle { compact: true }
            }

            h1 { class: "detail-title", "{project.title}" }
            img {
                class: "detail-image",
                src: "{project.image_url}",
                alt: "{project.title}",
            }
            p { class: "detail-description", "{project.description}" }

            h3 { class: "section-subtitle", "Technologies" }
            div { class: "chips",
                for tech in project.technologies.iter() {
                    span { key: "{tech}", class: "chip", "{tech}" }
                }
            }

            a {
                href: "{project.link}",
                class: "btn btn-primary btn-lg",
                target: "_blank",
                rel: "noopener noreferrer",
                "Visit project ↗"
            }
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    debug!({ segments = ?segments }, "unmatched route");

    rsx! {
        NotFoundPanel { message: "Nothing lives at this address." }
    }
}

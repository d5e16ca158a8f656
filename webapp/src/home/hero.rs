use dioxus::prelude::*;

use folio::config::SiteConfig;

use crate::common::dom::scroll_to_section;

#[component]
pub fn Hero() -> Element {
    let config = use_context::<SiteConfig>();

    rsx! {
        div { class: "hero",
            // geometric background
            div { class: "hero-shapes",
                div { class: "shape shape-square" }
                div { class: "shape shape-circle" }
                div { class: "shape shape-diamond" }
            }

            div { class: "container hero-content",
                div { class: "hero-mark" }
                h1 { class: "hero-title", "{config.owner}" }
                p { class: "hero-subtitle", "{config.tagline}" }
                div { class: "hero-actions",
                    button {
                        class: "btn btn-primary btn-lg",
                        onclick: move |_| scroll_to_section("portfolio"),
                        "View Work"
                    }
                    button {
                        class: "btn btn-secondary btn-lg",
                        onclick: move |_| scroll_to_section("about"),
                        "About Me"
                    }
                }
            }
        }
    }
}

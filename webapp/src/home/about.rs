use dioxus::prelude::*;

use folio::content::{skills, timeline};

#[component]
pub fn About() -> Element {
    rsx! {
        div { class: "container about-content",
            h2 { class: "section-title", "About" }

            p { class: "about-intro",
                "I design and build digital products at the point where generative AI meets interface design. "
                "Years of front-end development and UI/UX work have taught me to care equally about how a product looks and how it holds up."
            }

            h3 { class: "section-subtitle", "Experience" }
            div { class: "timeline",
                for entry in timeline().iter() {
                    div { key: "{entry.period}", class: "timeline-entry",
                        div { class: "timeline-period", "{entry.period}" }
                        h4 { class: "timeline-title", "{entry.title}" }
                        p { class: "timeline-desc", "{entry.description}" }
                    }
                }
            }

            div { class: "skills",
                h3 { class: "section-subtitle", "Skills" }
                for skill in skills().iter() {
                    div { key: "{skill.name}", class: "skill",
                        div { class: "skill-header",
                            span { class: "skill-name", "{skill.name}" }
                            span { class: "skill-level", "{skill.level}%" }
                        }
                        div { class: "skill-bar",
                            div {
                                class: "skill-fill",
                                style: "width: {skill.level}%",
                            }
                        }
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;
use dioxus_router::prelude::*;

use folio::content::{Project, projects};

use crate::Route;

#[derive(Clone, PartialEq, Props)]
struct ProjectCardProps {
    project: &'static Project,
}

#[component]
fn ProjectCard(props: ProjectCardProps) -> Element {
    let project = props.project;

    rsx! {
        div { class: "project-card",
            Link { to: Route::ProjectDetail { id: project.id.to_string() },
                img {
                    src: "{project.image_url}",
                    alt: "{project.title}",
                }
            }
            div { class: "project-body",
                h3 { class: "project-title", "{project.title}" }
                p { class: "project-summary", "{project.summary}" }
                div { class: "chips",
                    for tech in project.technologies.iter() {
                        span { key: "{tech}", class: "chip", "{tech}" }
                    }
                }
                div { class: "project-actions",
                    Link {
                        to: Route::ProjectDetail { id: project.id.to_string() },
                        class: "btn btn-ghost",
                        "Details"
                    }
                    a {
                        href: "{project.link}",
                        class: "btn btn-ghost",
                        aria_label: "Open project",
                        "↗"
                    }
                }
            }
        }
    }
}

#[component]
pub fn Portfolio() -> Element {
    rsx! {
        div { class: "container",
            h2 { class: "section-title", "Work" }
            div { class: "project-grid",
                for project in projects().iter() {
                    ProjectCard { key: "{project.id}", project }
                }
            }
        }
    }
}

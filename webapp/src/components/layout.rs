use chrono::{Datelike, Local};
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use folio::config::SiteConfig;

use crate::Route;

fn copyright_years(since: i32) -> String {
    let year = Local::now().year();

    if year > since {
        format!("{since}-{year}")
    } else {
        since.to_string()
    }
}

#[component]
fn Footer() -> Element {
    let config = use_context::<SiteConfig>();
    let years = copyright_years(config.since);

    rsx! {
        footer { class: "site-footer",
            div { class: "container",
                p { class: "copyright", "© {years} {config.owner}. All rights reserved." }
                div { class: "footer-links",
                    for link in config.links.iter() {
                        a {
                            key: "{link.label}",
                            href: "{link.url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "{link.label}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SiteLayout() -> Element {
    rsx! {
        Outlet::<Route> {}
        Footer {}
    }
}

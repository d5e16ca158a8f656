use dioxus::prelude::*;
use dioxus_router::prelude::*;

use folio::{class_names, config::SiteConfig};

use crate::{
    Route,
    common::dom::scroll_to_section,
    components::theme_toggle::ThemeToggle,
    home::{SECTIONS, SectionLink},
};

#[derive(Clone, PartialEq, Props)]
struct NavButtonProps {
    section: &'static SectionLink,
    active: Signal<String>,
    on_select: Option<EventHandler<()>>,
}

#[component]
fn NavButton(props: NavButtonProps) -> Element {
    let section = props.section;
    let on_select = props.on_select;

    let is_active = *props.active.read() == section.key;
    rsx! {
        button {
            class: class_names(&[Some("nav-link"), is_active.then_some("active")]),
            onclick: move |_| {
                scroll_to_section(section.key);
                if let Some(handler) = on_select {
                    handler.call(());
                }
            },
            "{section.label}"
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct NavBarProps {
    active: Signal<String>,
}

#[component]
pub fn NavBar(props: NavBarProps) -> Element {
    let active = props.active;
    let config = use_context::<SiteConfig>();
    let mut menu_open = use_signal(|| false);

    rsx! {
        header { class: "site-header",
            div { class: "container nav-container",
                Link { to: Route::Home {}, class: "logo",
                    span { class: "logo-mark" }
                    span { class: "logo-name", "{config.owner}" }
                }

                nav { class: "nav-links",
                    for section in SECTIONS.iter() {
                        NavButton { key: "{section.key}", section, active }
                    }
                    ThemeToggle { compact: false }
                }

                div { class: "nav-mobile",
                    button {
                        class: "menu-button",
                        aria_label: "Menu",
                        onclick: move |_| menu_open.set(!menu_open()),
                        span {}
                        span {}
                        span {}
                    }
                    ThemeToggle { compact: true }
                }
            }
        }

        if menu_open() {
            nav { class: "mobile-menu",
                for section in SECTIONS.iter() {
                    NavButton {
                        key: "{section.key}",
                        section,
                        active,
                        on_select: move |_| menu_open.set(false),
                    }
                }
            }
        }
    }
}

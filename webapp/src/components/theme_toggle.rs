use dioxus::prelude::*;

use folio::class_names;

use crate::theme::use_theme;

#[component]
pub fn ThemeToggle(compact: bool) -> Element {
    let theme = use_theme();
    let current = theme.current();

    let label = match compact {
        true => current.pick("☀️", "🌙"),
        false => current.pick("☀️ Light", "🌙 Dark"),
    };

    rsx! {
        button {
            class: class_names(&[Some("theme-toggle"), compact.then_some("compact")]),
            aria_label: "Toggle theme",
            onclick: move |_| theme.toggle(),
            "{label}"
        }
    }
}

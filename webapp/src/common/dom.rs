use gloo_events::EventListener;
use tracing::warn;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions};

use folio::{listener::Subscription, section::ScrollSource, theme::ThemePreference};

fn element_by_id(id: &str) -> Option<Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

// rendered height of an element, None until it is mounted
pub fn element_height(id: &str) -> Option<f64> {
    element_by_id(id).map(|element| element.get_bounding_client_rect().height())
}

pub fn scroll_to_section(id: &str) {
    let Some(element) = element_by_id(id) else {
        warn!("cannot scroll to {id}, section is not mounted");
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

// the stylesheet keys both palettes off the data-theme attribute on <html>
pub fn apply_theme_to_document(theme: ThemePreference) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };

    if let Err(err) = root.set_attribute("data-theme", theme.as_str()) {
        warn!("failed to apply theme {theme}: {err:?}");
    }
}

// vertical scroll of the window
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowScroll;

impl ScrollSource for WindowScroll {
    fn watch(&self, mut on_scroll: Box<dyn FnMut(f64)>) -> Option<Subscription> {
        let window = web_sys::window()?;

        let listener = EventListener::new(&window, "scroll", {
            let window = window.clone();
            move |_event| on_scroll(window.scroll_y().unwrap_or_default())
        });

        Some(Subscription::new(move || drop(listener)))
    }
}

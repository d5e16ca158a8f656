use gloo_events::EventListener;
use tracing::warn;
use web_sys::MediaQueryList;

use folio::{listener::Subscription, theme::ColorSchemeSource};

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

// the prefers-color-scheme media query
#[derive(Clone, Debug)]
pub struct BrowserColorScheme {
    query: Option<MediaQueryList>,
}

impl BrowserColorScheme {
    pub fn new() -> Self {
        let query = web_sys::window().and_then(|window| match window.match_media(DARK_SCHEME_QUERY) {
            Ok(query) => query,
            Err(err) => {
                warn!("matchMedia failed: {err:?}");
                None
            }
        });

        BrowserColorScheme { query }
    }
}

impl ColorSchemeSource for BrowserColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        self.query.as_ref().map(MediaQueryList::matches)
    }

    fn watch(&self, mut on_change: Box<dyn FnMut(bool)>) -> Option<Subscription> {
        let query = self.query.clone()?;

        let listener = EventListener::new(&query, "change", {
            let query = query.clone();
            move |_event| on_change(query.matches())
        });

        Some(Subscription::new(move || drop(listener)))
    }
}

use std::rc::Rc;

use dioxus::prelude::*;
use tracing::debug;

use folio::theme::{ThemeController, ThemePreference};

use crate::common::{
    dom::apply_theme_to_document, media::BrowserColorScheme, storage::BrowserStore,
    use_subscription,
};

type SiteThemeController = ThemeController<BrowserStore, BrowserColorScheme>;

// what components get from use_theme(): the current value and a way to flip it
#[derive(Clone)]
pub struct ThemeHandle {
    theme: Signal<ThemePreference>,
    controller: Rc<SiteThemeController>,
}

impl ThemeHandle {
    pub fn current(&self) -> ThemePreference {
        (self.theme)()
    }

    pub fn toggle(&self) {
        let mut theme = self.theme;

        let next = self.controller.toggle(theme());
        debug!(%next, "theme toggled");
        theme.set(next);
    }
}

// installed once by App
pub fn use_theme_provider(storage_key: String) -> ThemeHandle {
    let controller = use_hook(|| {
        Rc::new(ThemeController::new(BrowserStore, BrowserColorScheme::new()).with_key(storage_key))
    });

    let mut theme = use_signal(|| controller.resolve_initial());

    use_subscription(|| {
        controller.subscribe_to_system_change(move |next| {
            debug!(%next, "following system theme");
            theme.set(next);
        })
    });

    use_effect(move || apply_theme_to_document(theme()));

    use_context_provider(|| ThemeHandle { theme, controller })
}

pub fn use_theme() -> ThemeHandle {
    use_context::<ThemeHandle>()
}

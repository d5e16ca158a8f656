use std::{fmt, rc::Rc, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::listener::Subscription;

mod scheme;
mod store;

pub use scheme::{ColorSchemeSource, ManualColorScheme, NoColorScheme};
pub use store::{MemoryStore, PreferenceStore, UnavailableStore};

pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemePreference::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    // choose between two theme-dependent values, e.g. class names or icons
    pub fn pick<T>(self, light: T, dark: T) -> T {
        match self {
            ThemePreference::Light => light,
            ThemePreference::Dark => dark,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// only the exact stored spellings are accepted; anything else counts as corrupted
impl FromStr for ThemePreference {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            other => Err(anyhow::Error::msg(format!(
                "unrecognized theme preference: {other:?}"
            ))),
        }
    }
}

// owns the theme resolution chain: explicit stored choice, then the os signal, then light
//
// the web app creates one per mount and shares it through context; whoever holds the
// returned Subscription owns the os listener
pub struct ThemeController<S, M> {
    store: Rc<S>,
    scheme: M,
    key: String,
}

impl<S, M> ThemeController<S, M>
where
    S: PreferenceStore + 'static,
    M: ColorSchemeSource,
{
    pub fn new(store: S, scheme: M) -> Self {
        ThemeController {
            store: Rc::new(store),
            scheme,
            key: THEME_STORAGE_KEY.to_owned(),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    pub fn stored(&self) -> Option<ThemePreference> {
        stored_preference(&*self.store, &self.key)
    }

    pub fn system(&self) -> Option<ThemePreference> {
        self.scheme.prefers_dark().map(ThemePreference::from_dark)
    }

    pub fn resolve_initial(&self) -> ThemePreference {
        let theme = self
            .stored()
            .or_else(|| self.system())
            .unwrap_or_default();

        debug!(%theme, "resolved initial theme");
        theme
    }

    // the returned value never depends on whether the write succeeded
    pub fn toggle(&self, current: ThemePreference) -> ThemePreference {
        let next = current.opposite();

        if let Err(err) = self.store.save(&self.key, next.as_str()) {
            warn!("failed to persist theme {next}: {err}");
        }

        next
    }

    pub fn subscribe_to_system_change<F>(&self, mut on_change: F) -> Subscription
    where
        F: FnMut(ThemePreference) + 'static,
    {
        let store = Rc::clone(&self.store);
        let key = self.key.clone();

        let watched = self.scheme.watch(Box::new(move |dark: bool| {
            // checked at notification time, since the user may have toggled since subscribing
            if let Some(explicit) = stored_preference(&*store, &key) {
                debug!(%explicit, dark, "ignoring system theme change");
                return;
            }

            on_change(ThemePreference::from_dark(dark));
        }));

        watched.unwrap_or_else(|| {
            debug!("no color scheme signal available, theme will not follow the system");
            Subscription::inert()
        })
    }
}

fn stored_preference<S: PreferenceStore + ?Sized>(store: &S, key: &str) -> Option<ThemePreference> {
    match store.load(key) {
        Ok(Some(raw)) => match raw.parse() {
            Ok(theme) => Some(theme),
            Err(err) => {
                warn!("ignoring stored theme: {err}");
                None
            }
        },
        Ok(None) => None,
        Err(err) => {
            warn!("failed to read stored theme: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    fn controller(
        store: &MemoryStore,
        scheme: &ManualColorScheme,
    ) -> ThemeController<MemoryStore, ManualColorScheme> {
        ThemeController::new(store.clone(), scheme.clone())
    }

    #[test]
    fn stored_preference_wins() {
        let store = MemoryStore::new();
        store.insert(THEME_STORAGE_KEY, "light");

        let theme = controller(&store, &ManualColorScheme::new(true)).resolve_initial();

        assert_eq!(theme, ThemePreference::Light);
    }

    #[test]
    fn falls_back_to_system_then_light() {
        let store = MemoryStore::new();

        assert_eq!(
            controller(&store, &ManualColorScheme::new(true)).resolve_initial(),
            ThemePreference::Dark
        );
        assert_eq!(
            ThemeController::new(store, NoColorScheme).resolve_initial(),
            ThemePreference::Light
        );
    }

    #[test]
    fn corrupted_values_are_treated_as_absent() {
        let scheme = ManualColorScheme::new(true);

        for raw in ["", "Dark", "LIGHT", " dark", "blue", "null", "\"dark\""] {
            let store = MemoryStore::new();
            store.insert(THEME_STORAGE_KEY, raw);

            let controller = controller(&store, &scheme);
            assert_eq!(controller.stored(), None, "value {raw:?}");
            assert_eq!(controller.resolve_initial(), ThemePreference::Dark, "value {raw:?}");
        }
    }

    #[test]
    fn unavailable_host_resolves_light() {
        let controller = ThemeController::new(UnavailableStore, NoColorScheme);

        assert_eq!(controller.resolve_initial(), ThemePreference::Light);
        assert_eq!(controller.toggle(ThemePreference::Light), ThemePreference::Dark);
    }

    #[test]
    fn toggle_flips_and_persists() {
        let store = MemoryStore::new();
        let scheme = ManualColorScheme::new(false);
        let controller = controller(&store, &scheme);

        assert_eq!(controller.toggle(ThemePreference::Light), ThemePreference::Dark);
        assert_eq!(store.get(THEME_STORAGE_KEY).as_deref(), Some("dark"));
        assert_eq!(controller.resolve_initial(), ThemePreference::Dark);

        assert_eq!(controller.toggle(ThemePreference::Dark), ThemePreference::Light);
        assert_eq!(store.get(THEME_STORAGE_KEY).as_deref(), Some("light"));
        assert_eq!(controller.resolve_initial(), ThemePreference::Light);
    }

    #[test]
    fn custom_key_is_used() {
        let store = MemoryStore::new();
        let controller = controller(&store, &ManualColorScheme::new(false)).with_key("site_theme");

        controller.toggle(ThemePreference::Light);

        assert_eq!(controller.storage_key(), "site_theme");
        assert_eq!(store.get("site_theme").as_deref(), Some("dark"));
        assert_eq!(store.get(THEME_STORAGE_KEY), None);
    }

    #[test]
    fn system_changes_follow_until_explicit_choice() {
        let store = MemoryStore::new();
        let scheme = ManualColorScheme::new(false);
        let controller = controller(&store, &scheme);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let _subscription = {
            let seen = Rc::clone(&seen);
            controller.subscribe_to_system_change(move |theme| seen.borrow_mut().push(theme))
        };

        scheme.set_dark(true);
        assert_eq!(*seen.borrow(), vec![ThemePreference::Dark]);

        controller.toggle(ThemePreference::Dark);
        scheme.set_dark(false);
        scheme.set_dark(true);

        assert_eq!(*seen.borrow(), vec![ThemePreference::Dark]);
    }

    #[test]
    fn corrupted_store_still_follows_system() {
        let store = MemoryStore::new();
        store.insert(THEME_STORAGE_KEY, "sepia");
        let scheme = ManualColorScheme::new(false);
        let controller = controller(&store, &scheme);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let _subscription = {
            let seen = Rc::clone(&seen);
            controller.subscribe_to_system_change(move |theme| seen.borrow_mut().push(theme))
        };
        scheme.set_dark(true);

        assert_eq!(*seen.borrow(), vec![ThemePreference::Dark]);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let store = MemoryStore::new();
        let scheme = ManualColorScheme::new(false);
        let controller = controller(&store, &scheme);
        let calls = Rc::new(RefCell::new(0));

        let subscription = {
            let calls = Rc::clone(&calls);
            controller.subscribe_to_system_change(move |_| *calls.borrow_mut() += 1)
        };
        assert_eq!(scheme.watcher_count(), 1);

        subscription.unsubscribe();
        scheme.set_dark(true);

        assert_eq!(*calls.borrow(), 0);
        assert_eq!(scheme.watcher_count(), 0);
    }

    #[test]
    fn missing_media_api_gives_inert_subscription() {
        let controller = ThemeController::new(MemoryStore::new(), NoColorScheme);

        let subscription = controller.subscribe_to_system_change(|_| {});

        assert!(!subscription.is_active());
        subscription.unsubscribe();
    }

    #[test]
    fn pick_and_display() {
        assert_eq!(ThemePreference::Dark.pick("sun", "moon"), "moon");
        assert_eq!(ThemePreference::Light.to_string(), "light");
        assert_eq!("dark".parse::<ThemePreference>().ok(), Some(ThemePreference::Dark));
        assert!(ThemePreference::from_dark(true).is_dark());
    }
}

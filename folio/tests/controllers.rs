use std::{cell::RefCell, rc::Rc};

use folio::{
    config::parse_config,
    section::{ActiveSectionTracker, ManualScroll, NamedRegion, track_scroll},
    theme::{ManualColorScheme, MemoryStore, ThemeController, ThemePreference},
};

// a page session: first visit follows the os, the user toggles, a reload keeps the choice
#[test]
fn theme_session_across_reload() {
    let config = parse_config("[config.theme]\nstorage_key = \"folio_theme\"").unwrap();
    let store = MemoryStore::new();
    let scheme = ManualColorScheme::new(true);

    let controller = ThemeController::new(store.clone(), scheme.clone())
        .with_key(config.theme.storage_key.clone());
    let theme = Rc::new(RefCell::new(controller.resolve_initial()));
    assert_eq!(*theme.borrow(), ThemePreference::Dark);

    let subscription = {
        let theme = Rc::clone(&theme);
        controller.subscribe_to_system_change(move |next| *theme.borrow_mut() = next)
    };

    scheme.set_dark(false);
    assert_eq!(*theme.borrow(), ThemePreference::Light);

    let toggled = controller.toggle(*theme.borrow());
    *theme.borrow_mut() = toggled;
    assert_eq!(store.get("folio_theme").as_deref(), Some("dark"));

    scheme.set_dark(false);
    assert_eq!(*theme.borrow(), ThemePreference::Dark);

    // unmount
    subscription.unsubscribe();
    assert_eq!(scheme.watcher_count(), 0);

    let reloaded = ThemeController::new(store, scheme).with_key("folio_theme");
    assert_eq!(reloaded.resolve_initial(), ThemePreference::Dark);
}

// sections that are not mounted until later still end up tracked correctly
#[test]
fn late_layout_is_picked_up_on_next_scroll() {
    let about_height = Rc::new(RefCell::new(None));

    let tracker = {
        let about_height = Rc::clone(&about_height);
        ActiveSectionTracker::new(vec![
            NamedRegion::fixed("home", 800.0),
            NamedRegion::new("about", move || *about_height.borrow()),
            NamedRegion::fixed("portfolio", 1200.0),
        ])
        .unwrap()
    };
    let tracker = Rc::new(RefCell::new(tracker));
    let scroll = ManualScroll::new();
    let highlighted = Rc::new(RefCell::new(String::from("home")));

    let _binding = {
        let highlighted = Rc::clone(&highlighted);
        track_scroll(Rc::clone(&tracker), &scroll, 100.0, move |key| {
            *highlighted.borrow_mut() = key.to_owned();
        })
    };

    // about has no height yet, so the page jumps straight from home to portfolio
    scroll.scroll_to(900.0);
    assert_eq!(*highlighted.borrow(), "portfolio");

    *about_height.borrow_mut() = Some(600.0);
    scroll.scroll_to(900.0);
    assert_eq!(*highlighted.borrow(), "about");
}

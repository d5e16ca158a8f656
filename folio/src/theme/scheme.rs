use std::{cell::Cell, rc::Rc};

use crate::listener::{Emitter, Subscription};

// the os-level dark mode signal, i.e. prefers-color-scheme
//
// None from either method means the host has no such api; callers fall back to light
pub trait ColorSchemeSource {
    fn prefers_dark(&self) -> Option<bool>;

    fn watch(&self, on_change: Box<dyn FnMut(bool)>) -> Option<Subscription>;
}

// a color scheme signal driven by hand, for tests and non-browser hosts
#[derive(Clone, Default)]
pub struct ManualColorScheme {
    dark: Rc<Cell<bool>>,
    changes: Emitter<bool>,
}

impl ManualColorScheme {
    pub fn new(dark: bool) -> Self {
        ManualColorScheme {
            dark: Rc::new(Cell::new(dark)),
            changes: Emitter::new(),
        }
    }

    // flip the signal and notify every watcher, matching a media query change event
    pub fn set_dark(&self, dark: bool) {
        self.dark.set(dark);
        self.changes.emit(dark);
    }

    pub fn watcher_count(&self) -> usize {
        self.changes.listener_count()
    }
}

impl ColorSchemeSource for ManualColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        Some(self.dark.get())
    }

    fn watch(&self, on_change: Box<dyn FnMut(bool)>) -> Option<Subscription> {
        Some(self.changes.subscribe(on_change))
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoColorScheme;

impl ColorSchemeSource for NoColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        None
    }

    fn watch(&self, _on_change: Box<dyn FnMut(bool)>) -> Option<Subscription> {
        None
    }
}

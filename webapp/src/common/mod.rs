use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;

use folio::listener::Subscription;

pub mod dom;
pub mod media;
pub mod storage;
pub mod style;

// attach a host listener once per mount and release it on unmount
//
// init only runs on the first render, so the listener is never attached twice
pub fn use_subscription(init: impl FnOnce() -> Subscription) {
    let handle = use_hook(|| Rc::new(RefCell::new(Some(init()))));

    use_drop(move || {
        if let Some(subscription) = handle.borrow_mut().take() {
            subscription.unsubscribe();
        }
    });
}

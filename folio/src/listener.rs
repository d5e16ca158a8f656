use std::{cell::RefCell, fmt, rc::Rc};

use tracing::debug;

// teardown handle for anything that registers a callback with the host
//
// the detach closure runs at most once: either through unsubscribe(), which consumes
// the handle, or when the handle is dropped.  this mirrors the way gloo's EventListener
// removes itself on drop, and means a second unsubscribe cannot even be written
#[must_use = "dropping a Subscription detaches its listener immediately"]
pub struct Subscription {
    detach: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new<F: FnOnce() + 'static>(detach: F) -> Self {
        Subscription {
            detach: Some(Box::new(detach)),
        }
    }

    // a handle with nothing to release, used when the host has no listener api at all
    pub fn inert() -> Self {
        Subscription { detach: None }
    }

    pub fn is_active(&self) -> bool {
        self.detach.is_some()
    }

    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

type Listener<T> = Rc<RefCell<Box<dyn FnMut(T)>>>;

struct EmitterState<T> {
    next_id: u64,
    listeners: Vec<(u64, Listener<T>)>,
}

// single-threaded listener registry
//
// this backs the in-memory host implementations (ManualColorScheme, ManualScroll) and
// behaves like a browser event target: listeners fire in registration order, and a
// listener removed during an emit is not called for the remainder of that emit
pub struct Emitter<T> {
    state: Rc<RefCell<EmitterState<T>>>,
}

impl<T> Clone for Emitter<T> {
    fn clone(&self) -> Self {
        Emitter {
            state: Rc::clone(&self.state),
        }
    }
}

impl<T> Default for Emitter<T> {
    fn default() -> Self {
        Emitter {
            state: Rc::new(RefCell::new(EmitterState {
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }
}

impl<T: Copy + 'static> Emitter<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: Box<dyn FnMut(T)>) -> Subscription {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            state.listeners.push((id, Rc::new(RefCell::new(listener))));
            id
        };

        // the registry may be gone by the time the handle is released
        let state = Rc::downgrade(&self.state);
        Subscription::new(move || {
            if let Some(state) = state.upgrade() {
                state.borrow_mut().listeners.retain(|(other, _)| *other != id);
            }
        })
    }

    pub fn emit(&self, value: T) {
        // snapshot first so listeners are free to subscribe or unsubscribe while we run
        let snapshot: Vec<(u64, Listener<T>)> = self
            .state
            .borrow()
            .listeners
            .iter()
            .map(|(id, listener)| (*id, Rc::clone(listener)))
            .collect();

        for (id, listener) in snapshot {
            if !self.is_registered(id) {
                continue;
            }

            match listener.try_borrow_mut() {
                Ok(mut callback) => (&mut *callback)(value),
                Err(_) => debug!(id, "skipping listener re-entered during its own emit"),
            }
        }
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    fn is_registered(&self, id: u64) -> bool {
        self.state
            .borrow()
            .listeners
            .iter()
            .any(|(other, _)| *other == id)
    }
}

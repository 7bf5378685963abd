//! Observable Values
//!
//! Single-threaded change tracking for panel state.
//!
//! - [`Observable`]: shared, version-tracked value with subscriber callbacks.
//! - [`Subscription`]: RAII guard; dropping it unsubscribes.
//!
//! # Invariants
//!
//! 1. The version increments exactly once per `set` that changes the value.
//! 2. Setting a value equal to the current one is a no-op.
//! 3. Subscribers run synchronously, in registration order, after the new
//!    value is stored and with no borrow held, so a callback may read (or
//!    set) any observable, including the one that notified it.
//! 4. A dropped [`Subscription`] is never called again.

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Callback<T> = dyn Fn(&T);

struct Inner<T> {
    value: T,
    version: u64,
    subscribers: Vec<Weak<Callback<T>>>,
}

/// A shared value that notifies subscribers when it changes
pub struct Observable<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Observable")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .finish()
    }
}

impl<T: Clone + PartialEq + 'static> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                version: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Clone of the current value
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Borrow the current value for the duration of `f`
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Store `value` and notify subscribers. Returns whether it changed.
    pub fn set(&self, value: T) -> bool {
        let callbacks = {
            let mut inner = self.inner.borrow_mut();
            if inner.value == value {
                return false;
            }
            inner.value = value;
            inner.version += 1;
            inner.subscribers.retain(|s| s.strong_count() > 0);
            inner
                .subscribers
                .iter()
                .filter_map(Weak::upgrade)
                .collect::<Vec<_>>()
        };
        let snapshot = self.get();
        for callback in callbacks {
            callback(&snapshot);
        }
        true
    }

    /// Apply `f` to a copy of the value and `set` the result
    pub fn update(&self, f: impl FnOnce(&mut T)) -> bool {
        let mut next = self.get();
        f(&mut next);
        self.set(next)
    }

    /// Call `f` with the new value after every change
    #[must_use = "dropping the Subscription unsubscribes immediately"]
    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> Subscription {
        let callback: Rc<Callback<T>> = Rc::new(f);
        self.inner
            .borrow_mut()
            .subscribers
            .push(Rc::downgrade(&callback));
        Subscription {
            _callback: Box::new(callback),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner
            .borrow()
            .subscribers
            .iter()
            .filter(|s| s.strong_count() > 0)
            .count()
    }
}

/// Keeps a subscriber callback alive
pub struct Subscription {
    _callback: Box<dyn Any>,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_set_notifies_in_order() {
        let obs = Observable::new(0);
        let log = Rc::new(RefCell::new(Vec::new()));
        let l1 = Rc::clone(&log);
        let l2 = Rc::clone(&log);
        let _a = obs.subscribe(move |v| l1.borrow_mut().push(("a", *v)));
        let _b = obs.subscribe(move |v| l2.borrow_mut().push(("b", *v)));

        assert!(obs.set(3));
        assert_eq!(*log.borrow(), vec![("a", 3), ("b", 3)]);
        assert_eq!(obs.version(), 1);
    }

    #[test]
    fn test_equal_set_is_noop() {
        let obs = Observable::new("x".to_string());
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        let _sub = obs.subscribe(move |_| h.set(h.get() + 1));

        assert!(!obs.set("x".to_string()));
        assert_eq!(hits.get(), 0);
        assert_eq!(obs.version(), 0);
    }

    #[test]
    fn test_dropped_subscription_is_not_called() {
        let obs = Observable::new(0);
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        let sub = obs.subscribe(move |_| h.set(h.get() + 1));
        obs.set(1);
        drop(sub);
        obs.set(2);

        assert_eq!(hits.get(), 1);
        assert_eq!(obs.subscriber_count(), 0);
    }

    #[test]
    fn test_callback_may_read_source() {
        let obs = Observable::new(1);
        let seen = Rc::new(Cell::new(0));
        let reader = obs.clone();
        let s = Rc::clone(&seen);
        let _sub = obs.subscribe(move |_| s.set(reader.get()));

        obs.update(|v| *v += 4);
        assert_eq!(seen.get(), 5);
    }
}

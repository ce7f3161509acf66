use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::model::AchievementId;

/// Broadcast after a new achievement has been recorded and persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiscoveryEvent {
    pub egg_id: AchievementId,
    pub egg_name: String,
}

type Listener<E> = Rc<dyn Fn(&E)>;

struct Listeners<E> {
    next_id: Cell<u64>,
    entries: RefCell<Vec<(u64, Listener<E>)>>,
}

/// Synchronous publish/subscribe. Every listener registered when `emit`
/// starts is called, in registration order, before `emit` returns.
pub struct EventBus<E> {
    inner: Rc<Listeners<E>>,
}

impl<E: 'static> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: 'static> EventBus<E> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(Listeners {
                next_id: Cell::new(0),
                entries: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Register a listener; it stays registered until the returned
    /// `Subscription` is dropped.
    pub fn subscribe(&self, listener: impl Fn(&E) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .entries
            .borrow_mut()
            .push((id, Rc::new(listener)));
        let weak: Weak<Listeners<E>> = Rc::downgrade(&self.inner);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.entries.borrow_mut().retain(|(lid, _)| *lid != id);
                }
            })),
        }
    }

    pub fn emit(&self, event: &E) {
        // Snapshot so listeners may subscribe or unsubscribe while being called.
        let snapshot: Vec<Listener<E>> = self
            .inner
            .entries
            .borrow()
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for listener in snapshot {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.entries.borrow().len()
    }
}

/// Handle returned by `EventBus::subscribe`. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_listeners_receive_event() {
        let bus = EventBus::<u32>::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let a = {
            let seen = seen.clone();
            bus.subscribe(move |v| seen.borrow_mut().push(("a", *v)))
        };
        let b = {
            let seen = seen.clone();
            bus.subscribe(move |v| seen.borrow_mut().push(("b", *v)))
        };
        bus.emit(&7);
        assert_eq!(*seen.borrow(), vec![("a", 7), ("b", 7)]);
        drop(a);
        bus.emit(&8);
        assert_eq!(seen.borrow().last(), Some(&("b", 8)));
        assert_eq!(bus.listener_count(), 1);
        b.unsubscribe();
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn listener_may_subscribe_during_emit() {
        let bus = Rc::new(EventBus::<()>::new());
        let extra = Rc::new(RefCell::new(Vec::new()));
        let _sub = {
            let bus2 = bus.clone();
            let extra = extra.clone();
            bus.subscribe(move |_| extra.borrow_mut().push(bus2.subscribe(|_| {})))
        };
        bus.emit(&());
        assert_eq!(bus.listener_count(), 2);
    }

    #[test]
    fn subscription_outliving_bus_is_harmless() {
        let bus = EventBus::<()>::new();
        let sub = bus.subscribe(|_| {});
        drop(bus);
        drop(sub);
    }
}

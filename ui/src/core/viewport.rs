//! Process-wide viewport signals.
//!
//! The browser bridge (`core::platform`) publishes scroll offsets and viewport
//! widths here; components subscribe and get a [`Subscription`] guard back.
//! Dropping the guard removes the listener, so a subscription can never
//! outlive the component that owns it.
//!
//! The registry is thread-local: the UI runs on one thread and listeners
//! capture non-`Send` handles such as Dioxus signals.

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewportSignal {
    /// Vertical scroll offset of the window, in CSS px.
    Scroll,
    /// Inner width of the window, in CSS px.
    Resize,
}

type Listener = Rc<dyn Fn(f64)>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    entries: Vec<(u64, ViewportSignal, Listener)>,
}

thread_local! {
    static REGISTRY: RefCell<Registry> = RefCell::new(Registry::default());
}

impl ViewportSignal {
    /// Registers `listener` for every value emitted on this signal.
    pub fn subscribe(self, listener: impl Fn(f64) + 'static) -> Subscription {
        let id = REGISTRY.with(|reg| {
            let mut reg = reg.borrow_mut();
            let id = reg.next_id;
            reg.next_id += 1;
            reg.entries.push((id, self, Rc::new(listener)));
            id
        });
        tracing::trace!("viewport: subscribed #{id} to {self:?}");
        Subscription { id, signal: self }
    }

    /// Delivers `value` to the current subscribers.
    ///
    /// The listener list is snapshotted first, so listeners may subscribe or
    /// unsubscribe while being called.
    pub fn emit(self, value: f64) {
        let listeners: Vec<Listener> = REGISTRY.with(|reg| {
            reg.borrow()
                .entries
                .iter()
                .filter(|(_, signal, _)| *signal == self)
                .map(|(_, _, listener)| listener.clone())
                .collect()
        });
        for listener in listeners {
            listener(value);
        }
    }

    pub fn subscriber_count(self) -> usize {
        REGISTRY.with(|reg| {
            reg.borrow()
                .entries
                .iter()
                .filter(|(_, signal, _)| *signal == self)
                .count()
        })
    }
}

/// Live subscription to a [`ViewportSignal`]. Unsubscribes on drop.
#[must_use = "dropping a Subscription unsubscribes immediately"]
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    signal: ViewportSignal,
}

impl Subscription {
    pub fn signal(&self) -> ViewportSignal {
        self.signal
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let id = self.id;
        // try_with: guards held in other thread-locals may drop after REGISTRY during thread exit.
        let _ = REGISTRY.try_with(|reg| {
            reg.borrow_mut().entries.retain(|(entry, _, _)| *entry != id);
        });
        tracing::trace!("viewport: dropped #{id} from {:?}", self.signal);
    }
}

//! Named registry of mounted inputs with change subscriptions.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

type Listener = Box<dyn FnMut()>;

struct Inner<W> {
    widgets: BTreeMap<String, Rc<W>>,
    listeners: Vec<(u64, Listener)>,
    /// Listener ids dropped while `listeners` was taken out for a notify.
    cancelled: Vec<u64>,
    next_listener: u64,
}

/// Cloneable handle to a shared registry. All clones see the same entries.
pub struct WidgetRegistry<W> {
    inner: Rc<RefCell<Inner<W>>>,
}

impl<W> Clone for WidgetRegistry<W> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<W: 'static> Default for WidgetRegistry<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: 'static> WidgetRegistry<W> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                widgets: BTreeMap::new(),
                listeners: Vec::new(),
                cancelled: Vec::new(),
                next_listener: 0,
            })),
        }
    }

    /// Registers `widget` under `name`, replacing any previous entry.
    pub fn register(&self, name: &str, widget: Rc<W>) {
        self.inner
            .borrow_mut()
            .widgets
            .insert(name.to_string(), widget);
        tracing::debug!("Registered input '{name}'");
        self.notify();
    }

    /// Removes `name` only if it still refers to `widget`. A later mount
    /// under the same name is left alone.
    pub fn unregister(&self, name: &str, widget: &Rc<W>) -> bool {
        let removed = {
            let mut inner = self.inner.borrow_mut();
            match inner.widgets.get(name) {
                Some(current) if Rc::ptr_eq(current, widget) => {
                    inner.widgets.remove(name);
                    true
                }
                _ => false,
            }
        };
        if removed {
            tracing::debug!("Unregistered input '{name}'");
            self.notify();
        }
        removed
    }

    /// Moves an entry to a new name. Returns false if `from` is unknown.
    pub fn rename(&self, from: &str, to: &str) -> bool {
        let moved = {
            let mut inner = self.inner.borrow_mut();
            match inner.widgets.remove(from) {
                Some(widget) => {
                    inner.widgets.insert(to.to_string(), widget);
                    true
                }
                None => false,
            }
        };
        if moved {
            tracing::debug!("Renamed input '{from}' to '{to}'");
            self.notify();
        }
        moved
    }

    pub fn find(&self, name: &str) -> Option<Rc<W>> {
        self.inner.borrow().widgets.get(name).cloned()
    }

    pub fn names(&self) -> Vec<String> {
        self.inner.borrow().widgets.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().widgets.is_empty()
    }

    /// Calls `listener` after every registration change until the returned
    /// subscription is dropped.
    pub fn subscribe(&self, listener: impl FnMut() + 'static) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_listener;
            inner.next_listener += 1;
            inner.listeners.push((id, Box::new(listener)));
            id
        };
        let weak: Weak<RefCell<Inner<W>>> = Rc::downgrade(&self.inner);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    if let Ok(mut inner) = inner.try_borrow_mut() {
                        let before = inner.listeners.len();
                        inner.listeners.retain(|(lid, _)| *lid != id);
                        if inner.listeners.len() == before {
                            inner.cancelled.push(id);
                        }
                    }
                }
            })),
        }
    }

    fn notify(&self) {
        // listeners run outside the borrow so they may query the registry
        let mut listeners = std::mem::take(&mut self.inner.borrow_mut().listeners);
        for (_, listener) in listeners.iter_mut() {
            listener();
        }
        let mut inner = self.inner.borrow_mut();
        listeners.append(&mut inner.listeners);
        let cancelled = std::mem::take(&mut inner.cancelled);
        listeners.retain(|(id, _)| !cancelled.contains(id));
        inner.listeners = listeners;
    }
}

/// Keeps a registry listener alive. Dropping it unsubscribes.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

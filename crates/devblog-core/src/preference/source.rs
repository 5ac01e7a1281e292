//! OS colour-scheme signals and their subscriptions.

use std::{cell::RefCell, fmt, rc::Rc};

/// Guard for a change-notification subscription.
///
/// Dropping the guard unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Create a subscription that runs `cancel` when released.
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A subscription with nothing to release.
    pub fn detached() -> Self {
        Self { cancel: None }
    }

    /// Release the subscription now.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// The OS-level "prefers dark colour scheme" signal.
pub trait ColorSchemeSource {
    /// Current preference, or `None` when the platform exposes none.
    fn prefers_dark(&self) -> Option<bool>;

    /// Register `listener` for preference changes.
    fn subscribe(&self, listener: Box<dyn Fn(bool)>) -> Subscription;
}

/// Source for non-interactive contexts: no preference, no notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessColorScheme;

impl ColorSchemeSource for HeadlessColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        None
    }

    fn subscribe(&self, _listener: Box<dyn Fn(bool)>) -> Subscription {
        Subscription::detached()
    }
}

/// Source reporting a fixed preference that never changes.
#[derive(Debug, Clone, Copy)]
pub struct FixedColorScheme(pub bool);

impl ColorSchemeSource for FixedColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        Some(self.0)
    }

    fn subscribe(&self, _listener: Box<dyn Fn(bool)>) -> Subscription {
        Subscription::detached()
    }
}

type Listeners = Vec<(u64, Rc<dyn Fn(bool)>)>;

#[derive(Default)]
struct ManualInner {
    dark: bool,
    next_id: u64,
    listeners: Listeners,
}

/// Source driven by hand, for hosts that relay notifications themselves.
///
/// Clones share state, so one clone can be handed to the resolver and
/// another kept to emit changes.
#[derive(Clone, Default)]
pub struct ManualColorScheme {
    inner: Rc<RefCell<ManualInner>>,
}

impl ManualColorScheme {
    /// Create a source with the given initial preference.
    pub fn new(dark: bool) -> Self {
        let source = Self::default();
        source.inner.borrow_mut().dark = dark;
        source
    }

    /// Change the preference and notify every listener.
    pub fn set(&self, dark: bool) {
        let listeners: Vec<_> = {
            let mut inner = self.inner.borrow_mut();
            inner.dark = dark;
            inner.listeners.iter().map(|(_, l)| Rc::clone(l)).collect()
        };

        for listener in listeners {
            listener(dark);
        }
    }

    /// Number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl fmt::Debug for ManualColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ManualColorScheme")
            .field("dark", &inner.dark)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

impl ColorSchemeSource for ManualColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        Some(self.inner.borrow().dark)
    }

    fn subscribe(&self, listener: Box<dyn Fn(bool)>) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, Rc::from(listener)));
            id
        };

        let inner = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
            }
        })
    }
}

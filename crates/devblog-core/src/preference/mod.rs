//! Colour-mode preference resolution.
//!
//! Three sources compete for the dark-mode flag:
//!
//! 1. an explicit choice, persisted by an earlier session or made by toggling;
//! 2. the OS-level colour-scheme preference at startup;
//! 3. OS change notifications during the session.
//!
//! An explicit choice shadows the OS for the rest of the session. Every change
//! of the effective flag is applied to the display marker and persisted, so a
//! change driven purely by the OS is read back as an explicit choice on the
//! next load.

mod source;
mod store;

use std::{cell::RefCell, fmt, rc::Rc};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

pub use self::{
    source::{
        ColorSchemeSource, FixedColorScheme, HeadlessColorScheme, ManualColorScheme, Subscription,
    },
    store::{JsonFileStore, MemoryStore, PreferenceStore},
};
use crate::error::CoreError;

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "darkMode";

/// Two-state display mode derived from the effective flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    /// Mode for a dark-mode flag.
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    /// Whether this is the dark mode.
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the effective flag currently comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceOrigin {
    /// An explicit choice shadows the OS.
    Explicit,
    /// The OS preference (or the light default when there is none).
    System,
}

/// Preference state machine without side effects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreferenceState {
    explicit: Option<bool>,
    system: bool,
}

impl PreferenceState {
    /// State with the given explicit choice and OS preference.
    pub fn new(explicit: Option<bool>, system: bool) -> Self {
        Self { explicit, system }
    }

    /// The explicit choice, if one has been made.
    pub fn explicit(&self) -> Option<bool> {
        self.explicit
    }

    /// Last known OS preference.
    pub fn system(&self) -> bool {
        self.system
    }

    /// The flag consumers see.
    pub fn effective(&self) -> bool {
        self.explicit.unwrap_or(self.system)
    }

    /// The effective flag as a mode.
    pub fn mode(&self) -> ColorMode {
        ColorMode::from_dark(self.effective())
    }

    /// Which source decides the effective flag.
    pub fn origin(&self) -> PreferenceOrigin {
        if self.explicit.is_some() {
            PreferenceOrigin::Explicit
        } else {
            PreferenceOrigin::System
        }
    }

    /// Record an OS preference change. Returns whether the effective flag
    /// changed.
    pub fn system_changed(&mut self, dark: bool) -> bool {
        let before = self.effective();
        self.system = dark;
        before != self.effective()
    }

    /// Flip the effective flag and pin it as the explicit choice.
    pub fn toggle(&mut self) -> bool {
        let dark = !self.effective();
        self.explicit = Some(dark);
        dark
    }
}

/// Receives the effective flag whenever it changes.
pub trait ModeMarker {
    /// Apply (`true`) or remove (`false`) the dark display marker.
    fn apply(&self, dark: bool);
}

impl<F: Fn(bool)> ModeMarker for F {
    fn apply(&self, dark: bool) {
        self(dark)
    }
}

/// Session owner of the preference state.
///
/// Applies every effective-flag change to the marker and persists it to the
/// store under `key` as a JSON boolean.
pub struct PreferenceResolver<S, M> {
    key: String,
    state: PreferenceState,
    store: S,
    marker: M,
}

impl<S, M> fmt::Debug for PreferenceResolver<S, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreferenceResolver")
            .field("key", &self.key)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<S: PreferenceStore, M: ModeMarker> PreferenceResolver<S, M> {
    /// Resolve the initial preference and publish it.
    ///
    /// A well-formed persisted value wins; otherwise the OS preference is
    /// used; with neither the mode is light.
    pub fn init(
        key: impl Into<String>,
        store: S,
        source: &dyn ColorSchemeSource,
        marker: M,
    ) -> Self {
        let key = key.into();
        let explicit = read_persisted(&store, &key);
        let system = source.prefers_dark();

        let state = PreferenceState::new(explicit, system.unwrap_or(false));
        match (explicit, system) {
            (Some(dark), _) => debug!(dark, "using persisted colour mode"),
            (None, Some(dark)) => debug!(dark, "using OS colour scheme"),
            (None, None) => debug!("no colour-mode preference available, defaulting to light"),
        }

        let resolver = Self {
            key,
            state,
            store,
            marker,
        };
        resolver.publish();
        resolver
    }

    /// Current state.
    pub fn state(&self) -> PreferenceState {
        self.state
    }

    /// The effective dark-mode flag.
    pub fn effective(&self) -> bool {
        self.state.effective()
    }

    /// The effective flag as a mode.
    pub fn mode(&self) -> ColorMode {
        self.state.mode()
    }

    /// Flip the mode as an explicit user choice. Returns the new flag.
    pub fn toggle(&mut self) -> bool {
        let dark = self.state.toggle();
        info!(mode = %self.mode(), "colour mode toggled");
        self.publish();
        dark
    }

    /// Handle an OS preference change notification.
    ///
    /// Ignored for the effective flag while an explicit choice exists.
    pub fn system_changed(&mut self, dark: bool) {
        if self.state.system_changed(dark) {
            debug!(mode = %self.mode(), "colour mode follows OS change");
            self.publish();
        }
    }

    fn publish(&self) {
        let dark = self.state.effective();
        self.marker.apply(dark);

        let persisted = serde_json::to_string(&dark)
            .map_err(CoreError::from)
            .and_then(|value| self.store.write(&self.key, &value));
        if let Err(e) = persisted {
            warn!(key = %self.key, error = %e, "failed to persist colour mode");
        }
    }
}

impl<S, M> PreferenceResolver<S, M>
where
    S: PreferenceStore + 'static,
    M: ModeMarker + 'static,
{
    /// Forward OS change notifications from `source` to `resolver`.
    ///
    /// The listener holds only a weak reference: once the resolver is
    /// dropped, late notifications are ignored. Drop the returned guard to
    /// unsubscribe.
    pub fn watch(resolver: &Rc<RefCell<Self>>, source: &dyn ColorSchemeSource) -> Subscription {
        let weak = Rc::downgrade(resolver);
        source.subscribe(Box::new(move |dark| {
            let Some(resolver) = weak.upgrade() else {
                debug!("preference state gone, ignoring OS change");
                return;
            };
            match resolver.try_borrow_mut() {
                Ok(mut resolver) => resolver.system_changed(dark),
                Err(_) => warn!("preference state busy, dropping OS change"),
            }
        }))
    }
}

/// Read the persisted explicit choice, ignoring anything that is not a JSON
/// boolean.
fn read_persisted(store: &impl PreferenceStore, key: &str) -> Option<bool> {
    let raw = store.read(key)?;
    match serde_json::from_str::<bool>(&raw) {
        Ok(dark) => Some(dark),
        Err(e) => {
            warn!(key, value = %raw, error = %e, "ignoring malformed colour-mode preference");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::error::Result;

    fn marker() -> (Rc<RefCell<Vec<bool>>>, impl Fn(bool) + 'static) {
        let applied = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&applied);
        (applied, move |dark| sink.borrow_mut().push(dark))
    }

    #[test]
    fn test_state_machine() {
        let mut state = PreferenceState::new(None, false);
        assert_eq!(state.origin(), PreferenceOrigin::System);
        assert!(state.system_changed(true));
        assert!(!state.system_changed(true));
        assert!(state.effective());

        assert!(!state.toggle());
        assert_eq!(state.origin(), PreferenceOrigin::Explicit);
        assert!(!state.system_changed(false));
        assert!(!state.system_changed(true));
        assert_eq!(state.mode(), ColorMode::Light);
        assert!(state.system());
    }

    #[test]
    fn test_init_from_os_dark() {
        let store = MemoryStore::new();
        let (applied, marker) = marker();
        let resolver = PreferenceResolver::init(
            DEFAULT_STORAGE_KEY,
            store.clone(),
            &FixedColorScheme(true),
            marker,
        );

        assert!(resolver.effective());
        assert_eq!(resolver.state().explicit(), None);
        assert_eq!(*applied.borrow(), vec![true]);
        // init publishes, including the store write
        assert_eq!(store.read(DEFAULT_STORAGE_KEY).as_deref(), Some("true"));
    }

    #[test]
    fn test_init_persisted_value_wins_over_os() {
        let store = MemoryStore::with_entry(DEFAULT_STORAGE_KEY, "false");
        let resolver =
            PreferenceResolver::init(DEFAULT_STORAGE_KEY, store, &FixedColorScheme(true), |_| {});

        assert!(!resolver.effective());
        assert_eq!(resolver.state().explicit(), Some(false));
        assert_eq!(resolver.state().origin(), PreferenceOrigin::Explicit);
    }

    #[test]
    fn test_init_malformed_value_falls_back_to_os() {
        let store = MemoryStore::with_entry(DEFAULT_STORAGE_KEY, "\"yes\"");
        let resolver = PreferenceResolver::init(
            DEFAULT_STORAGE_KEY,
            store.clone(),
            &FixedColorScheme(true),
            |_| {},
        );

        assert!(resolver.effective());
        assert_eq!(resolver.state().explicit(), None);
        assert_eq!(store.read(DEFAULT_STORAGE_KEY).as_deref(), Some("true"));
    }

    #[test]
    fn test_init_headless_defaults_to_light() {
        let resolver = PreferenceResolver::init(
            DEFAULT_STORAGE_KEY,
            MemoryStore::new(),
            &HeadlessColorScheme,
            |_| {},
        );
        assert_eq!(resolver.mode(), ColorMode::Light);
    }

    #[test]
    fn test_toggle_shadows_later_os_changes() {
        let store = MemoryStore::new();
        let os = ManualColorScheme::new(true);
        let (applied, marker) = marker();
        let resolver = Rc::new(RefCell::new(PreferenceResolver::init(
            DEFAULT_STORAGE_KEY,
            store.clone(),
            &os,
            marker,
        )));
        let _sub = PreferenceResolver::watch(&resolver, &os);

        assert!(!resolver.borrow_mut().toggle());
        assert_eq!(store.read(DEFAULT_STORAGE_KEY).as_deref(), Some("false"));

        os.set(false);
        os.set(true);
        assert!(!resolver.borrow().effective());
        assert!(resolver.borrow().state().system());
        assert_eq!(*applied.borrow(), vec![true, false]);
    }

    #[test]
    fn test_os_change_followed_and_persisted_while_unshadowed() {
        let store = MemoryStore::new();
        let os = ManualColorScheme::new(false);
        let resolver = Rc::new(RefCell::new(PreferenceResolver::init(
            DEFAULT_STORAGE_KEY,
            store.clone(),
            &os,
            |_| {},
        )));
        let _sub = PreferenceResolver::watch(&resolver, &os);

        os.set(true);
        assert!(resolver.borrow().effective());
        assert_eq!(store.read(DEFAULT_STORAGE_KEY).as_deref(), Some("true"));

        // The OS-driven write is read back as an explicit choice next session.
        let next = PreferenceResolver::init(
            DEFAULT_STORAGE_KEY,
            store,
            &ManualColorScheme::new(false),
            |_| {},
        );
        assert_eq!(next.state().explicit(), Some(true));
    }

    #[test]
    fn test_unchanged_os_notification_does_not_publish() {
        let os = ManualColorScheme::new(true);
        let (applied, marker) = marker();
        let resolver = Rc::new(RefCell::new(PreferenceResolver::init(
            DEFAULT_STORAGE_KEY,
            MemoryStore::new(),
            &os,
            marker,
        )));
        let _sub = PreferenceResolver::watch(&resolver, &os);

        os.set(true);
        assert_eq!(applied.borrow().len(), 1);
    }

    #[test]
    fn test_watch_released_on_drop() {
        let os = ManualColorScheme::new(false);
        let resolver = Rc::new(RefCell::new(PreferenceResolver::init(
            DEFAULT_STORAGE_KEY,
            MemoryStore::new(),
            &os,
            |_| {},
        )));

        let sub = PreferenceResolver::watch(&resolver, &os);
        assert_eq!(os.listener_count(), 1);
        drop(sub);
        assert_eq!(os.listener_count(), 0);

        os.set(true);
        assert!(!resolver.borrow().effective());
    }

    #[test]
    fn test_notification_after_state_dropped_is_ignored() {
        let os = ManualColorScheme::new(false);
        let writes = Rc::new(Cell::new(0));
        let counter = Rc::clone(&writes);
        let resolver = Rc::new(RefCell::new(PreferenceResolver::init(
            DEFAULT_STORAGE_KEY,
            MemoryStore::new(),
            &os,
            move |_| counter.set(counter.get() + 1),
        )));
        let _sub = PreferenceResolver::watch(&resolver, &os);

        drop(resolver);
        os.set(true);
        assert_eq!(writes.get(), 1);
    }

    struct FailingStore;

    impl PreferenceStore for FailingStore {
        fn read(&self, _key: &str) -> Option<String> {
            None
        }

        fn write(&self, _key: &str, _value: &str) -> Result<()> {
            Err(CoreError::storage("quota exceeded"))
        }
    }

    #[test]
    fn test_store_failure_is_not_fatal() {
        let mut resolver = PreferenceResolver::init(
            DEFAULT_STORAGE_KEY,
            FailingStore,
            &FixedColorScheme(false),
            |_| {},
        );
        assert!(resolver.toggle());
        assert_eq!(resolver.mode(), ColorMode::Dark);
    }

    #[test]
    fn test_color_mode_display() {
        assert_eq!(ColorMode::from_dark(true).to_string(), "dark");
        assert_eq!(ColorMode::Light.as_str(), "light");
        assert!(ColorMode::Dark.is_dark());
    }
}

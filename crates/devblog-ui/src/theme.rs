//! Colour-mode wiring for the browser.
//!
//! Adapts `localStorage`, `matchMedia("(prefers-color-scheme: dark)")` and the
//! document root class list to the core preference resolver, and exposes the
//! resolver to components through context.

use std::{cell::RefCell, rc::Rc};

use devblog_core::{
    ColorSchemeSource, CoreError, ModeMarker, PreferenceResolver, PreferenceStore, Result,
    Subscription, config::ThemeConfig,
};
use leptos::prelude::*;
use tracing::warn;
use wasm_bindgen::{JsCast, prelude::*};

/// Media query matching the OS dark colour scheme.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// `window.localStorage`, when the browser exposes it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalPreferenceStore;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl PreferenceStore for LocalPreferenceStore {
    fn read(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let storage = local_storage().ok_or_else(|| CoreError::storage("localStorage unavailable"))?;
        storage
            .set_item(key, value)
            .map_err(|e| CoreError::storage(format!("localStorage write failed: {e:?}")))
    }
}

/// The OS colour scheme as reported by `matchMedia`.
#[derive(Debug, Clone, Default)]
pub struct MediaQueryColorScheme {
    query: Option<web_sys::MediaQueryList>,
}

impl MediaQueryColorScheme {
    /// Look up the dark-scheme media query. Without a window or `matchMedia`
    /// the source reports no preference.
    pub fn new() -> Self {
        let query = web_sys::window().and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten());
        Self { query }
    }
}

impl ColorSchemeSource for MediaQueryColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        self.query.as_ref().map(web_sys::MediaQueryList::matches)
    }

    fn subscribe(&self, listener: Box<dyn Fn(bool)>) -> Subscription {
        let Some(query) = self.query.clone() else {
            return Subscription::detached();
        };

        let handler = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(
            move |ev: web_sys::MediaQueryListEvent| listener(ev.matches()),
        );

        if let Err(e) =
            query.add_event_listener_with_callback("change", handler.as_ref().unchecked_ref())
        {
            warn!(error = ?e, "failed to watch colour scheme");
            return Subscription::detached();
        }

        Subscription::new(move || {
            let _ = query
                .remove_event_listener_with_callback("change", handler.as_ref().unchecked_ref());
        })
    }
}

/// Marks the document root with a class while dark mode is active and
/// mirrors the flag into a signal for components.
#[derive(Debug, Clone)]
pub struct DocumentMarker {
    class: String,
    dark: RwSignal<bool>,
}

impl DocumentMarker {
    /// Create a marker toggling `class` and writing `dark`.
    pub fn new(class: impl Into<String>, dark: RwSignal<bool>) -> Self {
        Self {
            class: class.into(),
            dark,
        }
    }
}

impl ModeMarker for DocumentMarker {
    fn apply(&self, dark: bool) {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());

        if let Some(root) = root
            && let Err(e) = root.class_list().toggle_with_force(&self.class, dark)
        {
            warn!(error = ?e, class = %self.class, "failed to update colour-mode class");
        }

        self.dark.set(dark);
    }
}

type BrowserResolver = PreferenceResolver<LocalPreferenceStore, DocumentMarker>;

/// Colour-mode handle shared through context.
#[derive(Clone, Copy)]
pub struct ColorModeContext {
    dark: RwSignal<bool>,
    session: StoredValue<(Rc<RefCell<BrowserResolver>>, Subscription), LocalStorage>,
}

impl ColorModeContext {
    /// Whether dark mode is in effect. Reactive.
    pub fn is_dark(&self) -> bool {
        self.dark.get()
    }

    /// Flip the mode as an explicit user choice.
    pub fn toggle(&self) {
        self.session.with_value(|(resolver, _)| match resolver.try_borrow_mut() {
            Ok(mut resolver) => {
                resolver.toggle();
            }
            Err(_) => warn!("colour-mode state busy, toggle ignored"),
        });
    }
}

/// Resolve the colour mode for this session and provide it as context.
///
/// The OS subscription is owned by the calling component: when it is
/// disposed the stored session drops and the listener is removed.
pub fn provide_color_mode(theme: &ThemeConfig) -> ColorModeContext {
    let dark = RwSignal::new(false);
    let source = MediaQueryColorScheme::new();
    let marker = DocumentMarker::new(theme.marker_class.clone(), dark);

    let resolver = Rc::new(RefCell::new(PreferenceResolver::init(
        theme.storage_key.clone(),
        LocalPreferenceStore,
        &source,
        marker,
    )));
    let subscription = PreferenceResolver::watch(&resolver, &source);

    let context = ColorModeContext {
        dark,
        session: StoredValue::new_local((resolver, subscription)),
    };
    provide_context(context);
    context
}

/// The colour-mode context, if an ancestor provided one.
pub fn use_color_mode() -> Option<ColorModeContext> {
    use_context::<ColorModeContext>()
}

/// Button flipping between light and dark mode.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    use_color_mode().map(|mode| {
        view! {
          <button
            class="devblog-theme-toggle"
            aria-label=move || toggle_label(mode.is_dark())
            on:click=move |_| mode.toggle()
          >
            {move || toggle_icon(mode.is_dark())}
          </button>
        }
    })
}

fn toggle_label(dark: bool) -> &'static str {
    if dark {
        "Switch to light mode"
    } else {
        "Switch to dark mode"
    }
}

fn toggle_icon(dark: bool) -> &'static str {
    if dark { "\u{2600}" } else { "\u{263e}" }
}

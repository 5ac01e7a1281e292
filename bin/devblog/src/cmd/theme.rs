//! Theme command - resolve the colour-mode preference outside a browser

use std::path::Path;

use color_eyre::eyre::Result;
use devblog_core::{
    ColorSchemeSource, Config, PreferenceResolver, PreferenceState,
    preference::{FixedColorScheme, HeadlessColorScheme, JsonFileStore, PreferenceOrigin},
};

/// Resolve the preference persisted in `state_path`, optionally toggling it.
///
/// `system` stands in for the OS colour scheme; `None` means the OS gives
/// no answer.
pub fn run(config: &Config, state_path: &Path, toggle: bool, system: Option<bool>) -> Result<()> {
    let state = resolve(config, state_path, toggle, system);

    let origin = match state.origin() {
        PreferenceOrigin::Explicit => "explicit choice",
        PreferenceOrigin::System if system.is_some() => "OS preference",
        PreferenceOrigin::System => "default",
    };
    println!("{} ({origin})", state.mode());
    println!("  State: {}", state_path.display());

    Ok(())
}

/// Run one resolver session against a JSON file store and return its final
/// state.
fn resolve(
    config: &Config,
    state_path: &Path,
    toggle: bool,
    system: Option<bool>,
) -> PreferenceState {
    let source: Box<dyn ColorSchemeSource> = match system {
        Some(dark) => Box::new(FixedColorScheme(dark)),
        None => Box::new(HeadlessColorScheme),
    };
    let store = JsonFileStore::new(state_path);
    let marker = |dark: bool| tracing::debug!(dark, "display marker updated");

    let mut resolver =
        PreferenceResolver::init(config.theme.storage_key.as_str(), store, source.as_ref(), marker);
    if toggle {
        resolver.toggle();
    }
    resolver.state()
}

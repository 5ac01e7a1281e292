//! Browser entry point: loads the site configuration and the bundled
//! catalog, then mounts the application.

use app::App;
use devblog_core::{Catalog, Config};
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

const SITE_CONFIG: &str = include_str!("../../devblog.toml");

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }

    let config = Config::from_toml_str(SITE_CONFIG).unwrap_or_else(|e| {
        log::error!("invalid site configuration, using defaults: {e}");
        Config::default()
    });
    let catalog = Catalog::bundled().unwrap_or_else(|e| {
        log::error!("failed to load bundled articles: {e}");
        Catalog::default()
    });
    log::info!("{} articles loaded", catalog.len());

    leptos::mount::mount_to_body(move || view! { <App config=config catalog=catalog /> });
}

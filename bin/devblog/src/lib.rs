//! DevBlog CLI Library
//!
//! Command implementations for the `devblog` binary: browsing the article
//! catalog, validating site content and driving the colour-mode preference
//! outside a browser.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (list, show, tags, featured, check, theme)
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use devblog::cmd;
//!
//! let site = devblog::load_site(Path::new("devblog.toml"), None).unwrap();
//! cmd::list::run(&site, "React", "", false).unwrap();
//! ```

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
pub use devblog_core::{Catalog, Config};

pub mod cmd;

/// Configuration and catalog a command runs against.
#[derive(Debug, Clone)]
pub struct Site {
    pub config: Config,
    pub catalog: Catalog,
}

/// Load the site configuration and the article catalog.
///
/// A missing configuration file falls back to the defaults; environment
/// overrides (`DEVBLOG__SITE__TITLE`, ...) always apply. Without an explicit
/// catalog path the bundled articles are used.
pub fn load_site(config_path: &Path, catalog_path: Option<&Path>) -> Result<Site> {
    let config = Config::load_with_env(config_path).wrap_err("Failed to load configuration")?;
    tracing::debug!(?config, "Loaded configuration");

    let catalog = match catalog_path {
        Some(path) => Catalog::load(path)
            .wrap_err_with(|| format!("Failed to load catalog {}", path.display()))?,
        None => Catalog::bundled().wrap_err("Failed to load bundled catalog")?,
    };

    Ok(Site { config, catalog })
}

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

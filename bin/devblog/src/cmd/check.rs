//! Check command - validate configuration and content

use std::path::Path;

use color_eyre::eyre::{Result, bail};
use devblog_core::{Catalog, Config};

/// Validation result.
#[derive(Debug, Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Validates the configuration and the article catalog.
pub fn run(config_path: &Path, catalog_path: Option<&Path>, strict: bool) -> Result<()> {
    tracing::info!(?config_path, ?catalog_path, strict, "Checking configuration and content");

    let mut result = ValidationResult::default();

    println!("Checking configuration...");
    let config = load_config(config_path, Config::load_with_env, &mut result);

    println!("\nChecking articles...");
    let catalog = load_catalog(catalog_path, &mut result);

    if let Some(ref cfg) = config {
        println!("\nChecking configuration values...");
        check_config_values(cfg, &mut result);
    }

    if let Some(ref catalog) = catalog {
        println!("\nChecking article tags...");
        check_tags(catalog, &mut result);

        if let Some(ref cfg) = config {
            println!("\nChecking footer categories...");
            check_categories(cfg, catalog, &mut result);
        }
    }

    // Print summary
    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Load the configuration the way every other command does, environment
/// overrides included. A missing file is only a warning since the defaults
/// are usable.
fn load_config(
    path: &Path,
    load: impl FnOnce(&Path) -> devblog_core::Result<Config>,
    result: &mut ValidationResult,
) -> Option<Config> {
    if !path.exists() {
        result.add_warning(format!(
            "Configuration file not found: {} (using defaults)",
            path.display()
        ));
        println!("  ⚠ {} missing, using defaults", path.display());
    }

    match load(path) {
        Ok(c) => {
            println!("  ✓ Configuration valid");
            Some(c)
        }
        Err(e) => {
            result.add_error(format!("Configuration error: {e}"));
            println!("  ✗ Configuration invalid: {e}");
            None
        }
    }
}

fn load_catalog(path: Option<&Path>, result: &mut ValidationResult) -> Option<Catalog> {
    let loaded = match path {
        Some(path) => Catalog::load(path),
        None => Catalog::bundled(),
    };

    match loaded {
        Ok(catalog) => {
            if catalog.is_empty() {
                result.add_warning("Catalog has no articles");
            }
            println!("  ✓ {} articles valid", catalog.len());
            Some(catalog)
        }
        Err(e) => {
            result.add_error(format!("Catalog error: {e}"));
            println!("  ✗ Catalog invalid: {e}");
            None
        }
    }
}

/// Check configuration values for common issues.
fn check_config_values(config: &Config, result: &mut ValidationResult) {
    if config.site.base_url.is_empty() {
        result.add_warning("site.base_url is empty");
    } else if !config.site.base_url.starts_with("http") {
        result.add_warning("site.base_url should start with http:// or https://");
    } else if config.site.base_url.ends_with('/') {
        result.add_warning("site.base_url should not have a trailing slash");
    }

    if config.listing.card_tag_limit == 0 {
        result.add_warning("listing.card_tag_limit is 0, cards will show no tags");
    }

    println!("  ✓ Configuration values checked");
}

/// Articles without tags never show up under a tag filter.
fn check_tags(catalog: &Catalog, result: &mut ValidationResult) {
    let untagged: Vec<&str> = catalog
        .iter()
        .filter(|a| a.tags.is_empty())
        .map(|a| a.slug.as_str())
        .collect();

    for slug in &untagged {
        result.add_warning(format!("Article '{slug}' has no tags"));
    }

    if untagged.is_empty() {
        println!(
            "  ✓ {} distinct tags",
            catalog.list_all_tags().len()
        );
    } else {
        println!("  ⚠ {} article(s) without tags", untagged.len());
    }
}

/// Footer category links are tag filters; one matching nothing leads to an
/// empty listing.
fn check_categories(config: &Config, catalog: &Catalog, result: &mut ValidationResult) {
    let mut empty = 0;
    for category in &config.footer.categories {
        if catalog.list_by_tag(category).is_empty() {
            result.add_warning(format!("Footer category '{category}' matches no articles"));
            empty += 1;
        }
    }

    if empty == 0 {
        println!(
            "  ✓ All {} footer categories have articles",
            config.footer.categories.len()
        );
    } else {
        println!("  ⚠ {empty} footer categor(ies) without articles");
    }
}

//! The article catalog and its read-only queries.
//!
//! The catalog is loaded once, validated, and then only read. Every query is
//! infallible: a miss is `None` or an empty list.

use std::{
    collections::{BTreeSet, HashSet},
    path::Path,
};

use serde::Deserialize;
use tracing::{debug, info};

use crate::{
    article::Article,
    error::{CoreError, Result},
};

/// Catalog bundled into the binary.
const BUNDLED_CATALOG: &str = include_str!("../content/articles.toml");

/// On-disk catalog document.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    articles: Vec<Article>,
}

/// Fixed, ordered collection of articles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    articles: Vec<Article>,
}

impl Catalog {
    /// Build a catalog, validating every article.
    ///
    /// Declaration order is preserved and drives every order-dependent query.
    pub fn new(articles: Vec<Article>) -> Result<Self> {
        let mut ids = HashSet::new();
        let mut slugs = HashSet::new();

        for article in &articles {
            validate_article(article)?;

            if !ids.insert(article.id.as_str()) {
                return Err(CoreError::DuplicateId(article.id.clone()));
            }
            if !slugs.insert(article.slug.as_str()) {
                return Err(CoreError::DuplicateSlug(article.slug.clone()));
            }
        }

        info!(articles = articles.len(), "catalog loaded");
        Ok(Self { articles })
    }

    /// Parse a catalog from a TOML document with `[[articles]]` tables.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::new(file.articles)
    }

    /// Load a catalog from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::catalog(path, "catalog file not found"));
        }

        let content = std::fs::read_to_string(path)?;
        let file: CatalogFile =
            toml::from_str(&content).map_err(|e| CoreError::catalog(path, e.to_string()))?;
        Self::new(file.articles)
    }

    /// The catalog shipped with the site.
    pub fn bundled() -> Result<Self> {
        Self::from_toml_str(BUNDLED_CATALOG)
    }

    /// Number of articles.
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    /// Whether the catalog holds no articles.
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Articles in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Article> {
        self.articles.iter()
    }

    /// All articles, most recent first.
    ///
    /// The sort is stable, so equal dates keep declaration order.
    pub fn list_all(&self) -> Vec<&Article> {
        let mut articles: Vec<_> = self.articles.iter().collect();
        articles.sort_by(|a, b| b.date.cmp(&a.date));
        articles
    }

    /// Look up an article by its exact, case-sensitive slug.
    pub fn get_by_slug(&self, slug: &str) -> Option<&Article> {
        let found = self.articles.iter().find(|a| a.slug == slug);
        if found.is_none() {
            debug!(slug, "no article for slug");
        }
        found
    }

    /// Featured articles in declaration order.
    pub fn list_featured(&self) -> Vec<&Article> {
        self.articles.iter().filter(|a| a.featured).collect()
    }

    /// Articles carrying `tag`, compared case-insensitively, in declaration
    /// order.
    ///
    /// An empty tag matches nothing; callers that treat an empty selector as
    /// "no filter" go through [`ListingFilter`](crate::ListingFilter).
    pub fn list_by_tag(&self, tag: &str) -> Vec<&Article> {
        self.articles.iter().filter(|a| a.has_tag(tag)).collect()
    }

    /// Distinct tags, sorted ascending.
    ///
    /// Deduplication is case-sensitive: "React" and "react" are both kept.
    pub fn list_all_tags(&self) -> Vec<&str> {
        self.articles
            .iter()
            .flat_map(|a| a.tags.iter().map(String::as_str))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Check the per-article invariants that do not depend on other articles.
fn validate_article(article: &Article) -> Result<()> {
    if article.id.is_empty() {
        return Err(CoreError::invalid_article(
            &article.slug,
            "id cannot be empty",
        ));
    }

    if article.slug.is_empty() {
        return Err(CoreError::invalid_article(
            &article.id,
            "slug cannot be empty",
        ));
    }

    if !article
        .slug
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(CoreError::invalid_article(
            &article.id,
            format!("slug is not URL-safe: {}", article.slug),
        ));
    }

    if article.title.trim().is_empty() {
        return Err(CoreError::invalid_article(
            &article.id,
            "title cannot be empty",
        ));
    }

    if article.read_time == 0 {
        return Err(CoreError::invalid_article(
            &article.id,
            "read_time must be positive",
        ));
    }

    Ok(())
}

//! Article records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Author of an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Display name.
    pub name: String,

    /// Avatar image URL.
    #[serde(default)]
    pub avatar_url: String,
}

/// A single blog article.
///
/// Articles are loaded once into a [`Catalog`](crate::Catalog) and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Opaque unique identifier.
    pub id: String,

    /// URL-safe unique identifier used by routing.
    pub slug: String,

    /// Article title.
    pub title: String,

    /// Short summary for listings.
    #[serde(default)]
    pub summary: String,

    /// Markdown body.
    #[serde(default)]
    pub content: String,

    /// Publication date, used for ordering.
    pub date: NaiveDate,

    /// Tags in declaration order. Duplicates are kept.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Reading time in minutes.
    pub read_time: u32,

    /// Article author.
    pub author: Author,

    /// Whether the article is promoted on the home page.
    #[serde(default)]
    pub featured: bool,
}

impl Article {
    /// Get the URL path for this article.
    pub fn url_path(&self) -> String {
        format!("/post/{}", self.slug)
    }

    /// Publication date formatted for display, e.g. "January 15, 2024".
    pub fn display_date(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }

    /// The first `limit` tags, as shown on listing cards.
    pub fn card_tags(&self, limit: usize) -> &[String] {
        &self.tags[..self.tags.len().min(limit)]
    }

    /// Whether any tag equals `tag`, ignoring case.
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == wanted)
    }

    /// Whether `needle` (already lowercased) occurs in the title, summary or
    /// any tag.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.summary.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn article(id: &str, date: &str, tags: &[&str], featured: bool) -> Article {
        Article {
            id: id.to_string(),
            slug: format!("post-{id}"),
            title: format!("Post {id}"),
            summary: format!("Summary of post {id}"),
            content: String::new(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("valid date"),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            read_time: 5,
            author: Author {
                name: "Alex Johnson".to_string(),
                avatar_url: String::new(),
            },
            featured,
        }
    }

    #[test]
    fn test_url_path() {
        let a = article("1", "2024-01-15", &[], false);
        assert_eq!(a.url_path(), "/post/post-1");
    }

    #[test]
    fn test_display_date() {
        let a = article("1", "2024-01-05", &[], false);
        assert_eq!(a.display_date(), "January 5, 2024");
    }

    #[test]
    fn test_card_tags_limit() {
        let a = article("1", "2024-01-15", &["React", "TypeScript", "Web", "Extra"], false);
        assert_eq!(a.card_tags(3), &["React", "TypeScript", "Web"]);
        assert_eq!(a.card_tags(10).len(), 4);

        let untagged = article("2", "2024-01-15", &[], false);
        assert!(untagged.card_tags(3).is_empty());
    }

    #[test]
    fn test_has_tag_ignores_case() {
        let a = article("1", "2024-01-15", &["Node.js"], false);
        assert!(a.has_tag("node.js"));
        assert!(a.has_tag("NODE.JS"));
        assert!(!a.has_tag("node"));
    }

    #[test]
    fn test_matches_tag_substring() {
        let a = article("1", "2024-01-15", &["TypeScript"], false);
        assert!(a.matches_lowercase("script"));
        assert!(a.matches_lowercase("summary of"));
        assert!(!a.matches_lowercase("python"));
    }
}

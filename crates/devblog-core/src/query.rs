//! Listing queries: substring search and the tag + search composition used by
//! the home page.

use url::form_urlencoded;

use crate::{article::Article, catalog::Catalog};

/// Narrow `posts` to articles whose title, summary or any tag contains
/// `term`, ignoring case.
///
/// An empty term returns the input unchanged. Input order is preserved, so
/// the result composes with any other narrowing step.
pub fn search<'a>(posts: &[&'a Article], term: &str) -> Vec<&'a Article> {
    if term.is_empty() {
        return posts.to_vec();
    }

    let needle = term.to_lowercase();
    posts
        .iter()
        .copied()
        .filter(|a| a.matches_lowercase(&needle))
        .collect()
}

/// Tag and search selectors of the article listing.
///
/// An empty selector means "no filter" for that step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilter {
    /// Selected tag, empty for all posts.
    pub tag: String,

    /// Search term, empty for no search.
    pub term: String,
}

impl ListingFilter {
    /// Create an inactive filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tag selector.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Set the search term.
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = term.into();
        self
    }

    /// Seed a filter from a URL query string such as `?tag=React&q=hooks`.
    ///
    /// Unknown parameters are ignored; the last occurrence of a key wins.
    pub fn from_query(query: &str) -> Self {
        let query = query.trim_start_matches('?');
        let mut filter = Self::new();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "tag" => filter.tag = value.into_owned(),
                "q" => filter.term = value.into_owned(),
                _ => {}
            }
        }

        filter
    }

    /// Adopt the selectors of a URL query string, replacing both.
    ///
    /// A parameter missing from `query` clears its selector, so following a
    /// link back to `/` drops an earlier `?tag=`. Returns whether anything
    /// changed.
    pub fn follow_query(&mut self, query: &str) -> bool {
        let next = Self::from_query(query);
        if *self == next {
            return false;
        }
        *self = next;
        true
    }

    /// Query string carrying the active selectors, e.g. `?tag=React&q=hooks`.
    /// Empty when the filter is inactive.
    pub fn to_query(&self) -> String {
        if !self.is_active() {
            return String::new();
        }

        let mut query = form_urlencoded::Serializer::new(String::new());
        if !self.tag.is_empty() {
            query.append_pair("tag", &self.tag);
        }
        if !self.term.is_empty() {
            query.append_pair("q", &self.term);
        }
        format!("?{}", query.finish())
    }

    /// Listing URL at `path` pre-filtered by this filter.
    pub fn href(&self, path: &str) -> String {
        format!("{path}{}", self.to_query())
    }

    /// Whether either selector is set.
    pub fn is_active(&self) -> bool {
        !self.tag.is_empty() || !self.term.is_empty()
    }

    /// Reset both selectors.
    pub fn clear(&mut self) {
        self.tag.clear();
        self.term.clear();
    }

    /// Run the listing query against `catalog`.
    ///
    /// With no tag the whole catalog is taken newest first; with a tag the
    /// tagged subset is taken in declaration order. The search term then
    /// narrows that result.
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Article> {
        let posts = if self.tag.is_empty() {
            catalog.list_all()
        } else {
            catalog.list_by_tag(&self.tag)
        };

        if self.term.is_empty() {
            posts
        } else {
            search(&posts, &self.term)
        }
    }

    /// Whether the featured section is shown alongside the listing.
    pub fn show_featured(&self) -> bool {
        !self.is_active()
    }

    /// Heading for the listing section.
    pub fn heading(&self) -> &'static str {
        if self.is_active() {
            "Search Results"
        } else {
            "Latest Articles"
        }
    }
}

/// Result count label, e.g. "1 article" or "3 articles".
pub fn result_label(count: usize) -> String {
    if count == 1 {
        "1 article".to_string()
    } else {
        format!("{count} articles")
    }
}

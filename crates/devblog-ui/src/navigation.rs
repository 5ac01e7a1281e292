//! Site navigation: the top bar and the footer.

use leptos::prelude::*;
use devblog_core::ListingFilter;

use crate::theme::ThemeToggle;

/// A navigation item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    /// Display label.
    pub label: String,

    /// Link URL.
    pub url: String,
}

impl NavItem {
    /// Create a new navigation item.
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }

    /// Whether this item points at `current_path`.
    ///
    /// The root only matches itself; other items also match their
    /// sub-paths.
    pub fn is_active(&self, current_path: &str) -> bool {
        if self.url == "/" {
            return current_path == "/";
        }
        current_path == self.url || current_path.starts_with(&format!("{}/", self.url))
    }
}

/// Default top-level pages.
pub fn default_nav_items() -> Vec<NavItem> {
    vec![
        NavItem::new("Home", "/"),
        NavItem::new("About", "/about"),
        NavItem::new("Contact", "/contact"),
    ]
}

/// Main navigation bar with the colour-mode toggle.
#[component]
pub fn Navigation(
    /// Site title shown as the brand link.
    title: String,
    /// Navigation items.
    items: Vec<NavItem>,
    /// Current path for active highlighting.
    #[prop(into)]
    current_path: Signal<String>,
) -> impl IntoView {
    view! {
      <nav class="devblog-nav" aria-label="Main navigation">
        <a href="/" class="devblog-brand">
          {title}
        </a>
        <ul class="devblog-nav-list">
          {items
            .into_iter()
            .map(|item| {
              let active_item = item.clone();
              let is_active = Memo::new(move |_| active_item.is_active(&current_path.get()));
              view! {
                <li class="devblog-nav-item" class:active=is_active>
                  <a
                    href=item.url.clone()
                    class="devblog-nav-link"
                    aria-current=move || is_active.get().then_some("page")
                  >
                    {item.label.clone()}
                  </a>
                </li>
              }
            })
            .collect_view()}
        </ul>
        <ThemeToggle />
      </nav>
    }
}

/// Site footer with quick links and tag category links.
#[component]
pub fn Footer(
    /// Site title.
    title: String,
    /// Tags linked from the categories column.
    categories: Vec<String>,
) -> impl IntoView {
    view! {
      <footer class="devblog-footer">
        <div class="devblog-footer-brand">
          <h3>{title.clone()}</h3>
          <p>
            "A modern blog platform for developers. Share your knowledge, learn from others, and stay updated with the latest in web development."
          </p>
        </div>

        <div class="devblog-footer-links">
          <h4>"Quick Links"</h4>
          <ul>
            {default_nav_items()
              .into_iter()
              .map(|item| view! { <li><a href=item.url>{item.label}</a></li> })
              .collect_view()}
          </ul>
        </div>

        <div class="devblog-footer-categories">
          <h4>"Categories"</h4>
          <ul>
            {categories
              .into_iter()
              .map(|tag| {
                let href = category_href(&tag);
                view! { <li><a href=href>{tag}</a></li> }
              })
              .collect_view()}
          </ul>
        </div>

        <p class="devblog-footer-copyright">"© " {title} ". All rights reserved."</p>
      </footer>
    }
}

/// Listing URL pre-filtered to `tag`.
pub fn category_href(tag: &str) -> String {
    ListingFilter::new().with_tag(tag).href("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_item_creation() {
        let item = NavItem::new("Home", "/");
        assert_eq!(item.label, "Home");
        assert_eq!(item.url, "/");
    }

    #[test]
    fn test_root_item_matches_only_root() {
        let home = NavItem::new("Home", "/");
        assert!(home.is_active("/"));
        assert!(!home.is_active("/about"));
    }

    #[test]
    fn test_item_matches_sub_paths() {
        let about = NavItem::new("About", "/about");
        assert!(about.is_active("/about"));
        assert!(about.is_active("/about/team"));
        assert!(!about.is_active("/aboutness"));
    }

    #[test]
    fn test_category_href() {
        assert_eq!(category_href("Node.js"), "/?tag=Node.js");
        assert_eq!(category_href("Web Development"), "/?tag=Web+Development");
        assert_eq!(
            ListingFilter::from_query(category_href("C++").trim_start_matches('/')).tag,
            "C++"
        );
    }
}

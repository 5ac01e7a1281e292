//! DevBlog UI Components
//!
//! Leptos components and browser adapters for the DevBlog frontend.
//!
//! # Components
//!
//! ## Article
//! - [`ArticleCard`] - Listing card with tags, summary and metadata
//! - [`ArticleBody`] - Article header and body for the detail page
//! - [`ArticleMeta`] - Date, reading time and author
//! - [`Prose`] - Styled prose wrapper
//!
//! ## Listing filters
//! - [`SearchBar`] - Search input bound to a signal
//! - [`TagFilter`] - "All Posts" plus one button per tag
//!
//! ## Navigation
//! - [`Navigation`] - Top bar with the colour-mode toggle
//! - [`Footer`] - Quick links and tag categories
//!
//! ## Colour mode
//! - [`provide_color_mode`] - Resolve the session's mode and provide it as context
//! - [`ThemeToggle`] - Light/dark switch
//!
//! # Example
//!
//! ```ignore
//! use devblog_core::Config;
//! use devblog_ui::{SearchBar, TagFilter, provide_color_mode};
//! use leptos::prelude::*;
//!
//! #[component]
//! fn Listing() -> impl IntoView {
//!     provide_color_mode(&Config::default().theme);
//!     let query = RwSignal::new(String::new());
//!     let tag = RwSignal::new(String::new());
//!
//!     view! {
//!         <SearchBar query=query />
//!         <TagFilter tags=vec!["CSS".to_string()] selected=tag />
//!     }
//! }
//! ```

pub mod article;
pub mod navigation;
pub mod search;
pub mod theme;

pub use article::{ArticleBody, ArticleCard, ArticleMeta, Prose};
pub use navigation::{Footer, NavItem, Navigation, category_href, default_nav_items};
pub use search::{SearchBar, TagFilter};
pub use theme::{
    ColorModeContext, DocumentMarker, LocalPreferenceStore, MediaQueryColorScheme, ThemeToggle,
    provide_color_mode, use_color_mode,
};

//! DevBlog Core Library
//!
//! Article catalog, listing queries, colour-mode preference resolution,
//! configuration and error handling for the DevBlog front-end.

pub mod article;
pub mod catalog;
pub mod config;
pub mod error;
pub mod preference;
pub mod query;

pub use article::{Article, Author};
pub use catalog::Catalog;
pub use config::Config;
pub use error::{CoreError, Result};
pub use preference::{
    ColorMode, ColorSchemeSource, ModeMarker, PreferenceResolver, PreferenceState,
    PreferenceStore, Subscription,
};
pub use query::{ListingFilter, search};

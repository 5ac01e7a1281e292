use std::sync::Arc;

use devblog_core::{Catalog, Config};
use devblog_ui::{Footer, Navigation, default_nav_items, provide_color_mode};
use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_location,
};

mod pages;

pub use pages::{About, Contact, Home, NotFound, Post};

/// Site-wide data shared with every page.
#[derive(Debug, Clone, Default)]
pub struct Site {
    pub config: Arc<Config>,
    pub catalog: Arc<Catalog>,
}

impl Site {
    pub fn new(config: Config, catalog: Catalog) -> Self {
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
        }
    }
}

/// The site provided by [`App`], or an empty one outside of it.
pub fn use_site() -> Site {
    use_context::<Site>().unwrap_or_default()
}

#[component]
pub fn App(config: Config, catalog: Catalog) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_color_mode(&config.theme);

    let site = Site::new(config, catalog);
    provide_context(site.clone());

    let title = site.config.site.title.clone();
    let description = site.config.site.description.clone();
    let categories = site.config.footer.categories.clone();

    view! {
      <Title text=title.clone() />
      <Meta name="description" content=description />

      <Router>
        <NavBar title=title.clone() />
        <main>
          <Routes fallback=|| view! { <NotFound /> }>
            <Route path=StaticSegment("") view=Home />
            <Route path=(StaticSegment("post"), ParamSegment("slug")) view=Post />
            <Route path=StaticSegment("about") view=About />
            <Route path=StaticSegment("contact") view=Contact />
          </Routes>
        </main>
        <Footer title=title categories=categories />
      </Router>
    }
}

/// Navigation bar tracking the current route.
#[component]
fn NavBar(title: String) -> impl IntoView {
    let location = use_location();

    view! { <Navigation title=title items=default_nav_items() current_path=location.pathname /> }
}

use devblog_core::{Article, ListingFilter, query::result_label};
use devblog_ui::{ArticleCard, SearchBar, TagFilter};
use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::{
    NavigateOptions,
    hooks::{use_location, use_navigate},
};

use crate::use_site;

/// Home page: hero, search and tag filters, featured articles and the
/// filtered listing.
#[component]
pub fn Home() -> impl IntoView {
    let site = use_site();
    let search = use_location().search;
    let navigate = use_navigate();

    // The URL decides the selectors: `/?tag=React` (footer category links)
    // selects React, `/` clears both.
    let seeded = ListingFilter::from_query(&search.get_untracked());
    let tag = RwSignal::new(seeded.tag);
    let term = RwSignal::new(seeded.term);

    Effect::new(move |_| {
        let mut current = ListingFilter::new()
            .with_tag(tag.get_untracked())
            .with_term(term.get_untracked());
        if current.follow_query(&search.get()) {
            tag.set(current.tag);
            term.set(current.term);
        }
    });

    // A tag picked on the page is written back to the URL, so a later
    // category link always counts as a change.
    Effect::new(move |_| {
        let selected = tag.get();
        if ListingFilter::from_query(&search.get_untracked()).tag == selected {
            return;
        }
        let href = ListingFilter::new()
            .with_tag(selected)
            .with_term(term.get_untracked())
            .href("/");
        navigate(
            &href,
            NavigateOptions {
                replace: true,
                scroll: false,
                ..Default::default()
            },
        );
    });

    let filter = Memo::new(move |_| {
        ListingFilter::new()
            .with_tag(tag.get())
            .with_term(term.get())
    });

    let catalog = site.catalog.clone();
    let results = Memo::new(move |_| {
        filter.with(|f| f.apply(&catalog).into_iter().cloned().collect::<Vec<Article>>())
    });

    let featured: Vec<Article> = site.catalog.list_featured().into_iter().cloned().collect();
    let has_featured = !featured.is_empty();
    let tags: Vec<String> = site
        .catalog
        .list_all_tags()
        .into_iter()
        .map(String::from)
        .collect();
    let tag_limit = site.config.listing.card_tag_limit;
    let title = site.config.site.title.clone();

    let clear_filters = move |_| {
        term.set(String::new());
        tag.set(String::new());
    };

    view! {
      <Title text=format!("{title} - Modern Web Development Blog") />
      <Meta name="description" content=site.config.site.description.clone() />

      <section class="devblog-hero">
        <h1>"Welcome to " {title.clone()}</h1>
        <p>
          "Discover the latest insights, tutorials, and best practices in modern web development"
        </p>
      </section>

      <section class="devblog-filters">
        <h2>"Find Your Next Read"</h2>
        <p>
          "Search through our collection of articles or filter by technology to find content that interests you"
        </p>
        <SearchBar query=term />
        <TagFilter tags=tags selected=tag />
      </section>

      <Show when=move || has_featured && filter.with(ListingFilter::show_featured)>
        <section class="devblog-featured">
          <h2>"Featured Articles"</h2>
          <div class="devblog-grid">
            {featured
              .iter()
              .cloned()
              .map(|article| {
                view! { <ArticleCard article=article featured=true tag_limit=tag_limit /> }
              })
              .collect_view()}
          </div>
        </section>
      </Show>

      <section class="devblog-listing">
        <div class="devblog-listing-header">
          <h2>{move || filter.with(ListingFilter::heading)}</h2>
          <span class="devblog-listing-count">{move || result_label(results.with(Vec::len))}</span>
        </div>

        <Show
          when=move || results.with(|r| !r.is_empty())
          fallback=move || {
            view! {
              <div class="devblog-empty">
                <h3>"No articles found"</h3>
                <p>"Try adjusting your search terms or clearing the filters"</p>
                <button class="devblog-button" on:click=clear_filters>
                  "Clear Filters"
                </button>
              </div>
            }
          }
        >
          <div class="devblog-grid">
            <For
              each=move || results.get()
              key=|article| article.id.clone()
              children=move |article| {
                view! { <ArticleCard article=article tag_limit=tag_limit /> }
              }
            />
          </div>
        </Show>
      </section>
    }
}

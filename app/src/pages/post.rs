use devblog_ui::ArticleBody;
use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::hooks::use_params_map;

use crate::use_site;

/// Article detail page for `/post/:slug`.
#[component]
pub fn Post() -> impl IntoView {
    let site = use_site();
    let params = use_params_map();

    let catalog = site.catalog.clone();
    let article = Memo::new(move |_| {
        params
            .read()
            .get("slug")
            .and_then(|slug| catalog.get_by_slug(&slug).cloned())
    });
    let site_title = site.config.site.title.clone();

    move || match article.get() {
        Some(article) => {
            let keywords = article.tags.join(", ");
            view! {
              <Title text=format!("{} - {}", article.title, site_title) />
              <Meta name="description" content=article.summary.clone() />
              <Meta name="keywords" content=keywords />
              <Meta name="author" content=article.author.name.clone() />

              <div class="devblog-post">
                <a href="/" class="devblog-back">
                  "Back to Articles"
                </a>
                <ArticleBody article=article />
              </div>
            }
                .into_any()
        }
        None => view! { <PostNotFound /> }.into_any(),
    }
}

#[component]
fn PostNotFound() -> impl IntoView {
    view! {
      <Title text="Post Not Found" />
      <section class="devblog-not-found">
        <h1>"Post Not Found"</h1>
        <p>"The blog post you're looking for doesn't exist."</p>
        <a href="/" class="devblog-button">
          "Back to Home"
        </a>
      </section>
    }
}

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::use_site;

/// Static "About" page.
#[component]
pub fn About() -> impl IntoView {
    let site = use_site();
    let title = site.config.site.title.clone();
    let article_count = site.catalog.len();
    let tag_count = site.catalog.list_all_tags().len();

    view! {
      <Title text=format!("About - {title}") />
      <Meta
        name="description"
        content=format!("Learn more about {title}, a blog for modern web developers.")
      />

      <section class="devblog-page">
        <h1>"About " {title.clone()}</h1>
        <p>
          {title.clone()}
          " is a place for developers to share knowledge, learn from each other, and keep up with the latest in web development."
        </p>

        <h2>"What we write about"</h2>
        <p>
          "Practical tutorials, architecture patterns, and the trends shaping the web platform, from front-end frameworks to scalable back-ends."
        </p>

        <ul class="devblog-stats">
          <li>
            <strong>{article_count}</strong>
            " articles"
          </li>
          <li>
            <strong>{tag_count}</strong>
            " topics"
          </li>
        </ul>
      </section>
    }
}

//! Article components for listings and the detail page.

use devblog_core::Article;
use leptos::prelude::*;

/// Card shown in article listings.
///
/// Shows at most `tag_limit` tags, the title linking to the article, the
/// summary and the article metadata.
#[component]
pub fn ArticleCard(
    /// The article to show.
    article: Article,
    /// Whether the card sits in the featured section.
    #[prop(optional)]
    featured: bool,
    /// Number of tags shown on the card.
    #[prop(default = 3)]
    tag_limit: usize,
) -> impl IntoView {
    let href = article.url_path();
    let tags = article.card_tags(tag_limit).to_vec();

    view! {
      <article class=card_class(featured)>
        {featured.then(|| view! { <span class="devblog-badge">"Featured"</span> })}

        <div class="devblog-card-tags">
          {tags
            .into_iter()
            .map(|tag| view! { <span class="devblog-tag">{tag}</span> })
            .collect_view()}
        </div>

        <h2 class="devblog-card-title">
          <a href=href.clone()>{article.title.clone()}</a>
        </h2>

        <p class="devblog-card-summary">{article.summary.clone()}</p>

        <ArticleMeta
          date=article.display_date()
          read_time=article.read_time
          author=article.author.name.clone()
        />

        <a href=href class="devblog-card-more">
          "Read more"
        </a>
      </article>
    }
}

/// Date, reading time and author line.
#[component]
pub fn ArticleMeta(
    /// Publication date, already formatted.
    date: String,
    /// Reading time in minutes.
    read_time: u32,
    /// Author name.
    #[prop(optional)]
    author: Option<String>,
) -> impl IntoView {
    view! {
      <div class="devblog-article-meta">
        <time class="devblog-article-date">{date}</time>
        <span class="devblog-article-read-time">{read_time_label(read_time)}</span>
        {author.map(|name| view! { <span class="devblog-article-author">{name}</span> })}
      </div>
    }
}

/// Full article header and body for the detail page.
#[component]
pub fn ArticleBody(
    /// The article to render.
    article: Article,
) -> impl IntoView {
    let avatar_alt = article.author.name.clone();

    view! {
      <article class="devblog-article">
        <header class="devblog-article-header">
          <div class="devblog-article-tags">
            {article
              .tags
              .iter()
              .map(|tag| view! { <span class="devblog-tag">{tag.clone()}</span> })
              .collect_view()}
          </div>
          <h1 class="devblog-article-title">{article.title.clone()}</h1>
          <p class="devblog-article-summary">{article.summary.clone()}</p>
          <div class="devblog-article-byline">
            <img
              class="devblog-avatar"
              src=article.author.avatar_url.clone()
              alt=avatar_alt
            />
            <ArticleMeta
              date=article.display_date()
              read_time=article.read_time
              author=article.author.name.clone()
            />
          </div>
        </header>

        <Prose>{article.content.clone()}</Prose>
      </article>
    }
}

/// Prose wrapper for article text.
#[component]
pub fn Prose(
    /// Children content.
    children: Children,
) -> impl IntoView {
    view! { <div class="devblog-prose">{children()}</div> }
}

fn card_class(featured: bool) -> &'static str {
    if featured {
        "devblog-card devblog-card-featured"
    } else {
        "devblog-card"
    }
}

fn read_time_label(minutes: u32) -> String {
    format!("{minutes} min read")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_class() {
        assert_eq!(card_class(false), "devblog-card");
        assert!(card_class(true).contains("devblog-card-featured"));
    }

    #[test]
    fn test_read_time_label() {
        assert_eq!(read_time_label(8), "8 min read");
    }
}

//! Show command - print a single article

use color_eyre::eyre::{Result, bail};
use devblog_core::Article;

use crate::Site;

/// Run the show command.
///
/// Fails when no article has the given slug.
pub fn run(site: &Site, slug: &str, json: bool) -> Result<()> {
    let Some(article) = site.catalog.get_by_slug(slug) else {
        bail!("Post not found: {slug}");
    };
    tracing::debug!(id = %article.id, slug, "Showing article");

    if json {
        println!("{}", serde_json::to_string_pretty(article)?);
    } else {
        println!("{}", render(article, &site.config.url_for(&article.url_path())));
    }
    Ok(())
}

fn render(article: &Article, url: &str) -> String {
    let mut out = String::new();
    if !article.tags.is_empty() {
        out.push_str(&format!("[{}]\n", article.tags.join(", ")));
    }
    out.push_str(&article.title);
    out.push('\n');
    out.push_str(&format!(
        "{} | {} min read | {}\n",
        article.display_date(),
        article.read_time,
        article.author.name
    ));
    out.push_str(url);
    out.push_str("\n\n");
    out.push_str(article.content.trim());
    out
}

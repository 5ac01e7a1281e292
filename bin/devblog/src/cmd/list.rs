//! Listing commands - articles, tags and featured articles

use color_eyre::eyre::Result;
use devblog_core::{Article, ListingFilter, query::result_label};

use crate::Site;

/// Run the list command.
///
/// Applies the tag filter, then the search term, and prints the result
/// newest first.
pub fn run(site: &Site, tag: &str, term: &str, json: bool) -> Result<()> {
    let filter = ListingFilter::new().with_tag(tag).with_term(term);
    tracing::info!(?filter, "Listing articles");

    let articles = filter.apply(&site.catalog);
    if json {
        println!("{}", serde_json::to_string_pretty(&articles)?);
        return Ok(());
    }

    println!("{} ({})", filter.heading(), result_label(articles.len()));
    print!("{}", render_rows(&articles, site.config.listing.card_tag_limit));
    Ok(())
}

/// Run the tags command.
pub fn tags(site: &Site) -> Result<()> {
    for tag in site.catalog.list_all_tags() {
        let count = site.catalog.list_by_tag(tag).len();
        println!("{tag} ({count})");
    }
    Ok(())
}

/// Run the featured command.
///
/// Featured articles keep their declaration order.
pub fn featured(site: &Site, json: bool) -> Result<()> {
    let articles = site.catalog.list_featured();
    if json {
        println!("{}", serde_json::to_string_pretty(&articles)?);
        return Ok(());
    }

    println!("Featured Articles ({})", result_label(articles.len()));
    print!("{}", render_rows(&articles, site.config.listing.card_tag_limit));
    Ok(())
}

/// One line per article: date, slug, title and the card tags.
fn render_rows(articles: &[&Article], tag_limit: usize) -> String {
    let mut out = String::new();
    for article in articles {
        out.push_str(&format!(
            "  {}  {:<36} {}",
            article.date, article.slug, article.title
        ));
        let tags = article.card_tags(tag_limit);
        if !tags.is_empty() {
            out.push_str(&format!("  [{}]", tags.join(", ")));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> Site {
        Site {
            config: Default::default(),
            catalog: devblog_core::Catalog::bundled().unwrap(),
        }
    }

    #[test]
    fn test_render_rows_newest_first() {
        let site = site();
        let rows = render_rows(&site.catalog.list_all(), 3);
        let lines: Vec<&str> = rows.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("2024-01-15"));
        assert!(lines[0].contains("getting-started-react-typescript"));
        assert!(lines[3].contains("2024-01-01"));
    }

    #[test]
    fn test_render_rows_limits_tags() {
        let site = site();
        let article = site
            .catalog
            .get_by_slug("modern-css-grid-flexbox")
            .unwrap();
        let rows = render_rows(&[article], 1);

        assert!(rows.contains("[CSS]"));
        assert!(!rows.contains("Layout"));
    }

    #[test]
    fn test_render_rows_empty() {
        assert_eq!(render_rows(&[], 3), "");
    }

    #[test]
    fn test_commands_succeed_on_bundled_catalog() {
        let site = site();
        assert!(run(&site, "react", "", false).is_ok());
        assert!(run(&site, "", "node", true).is_ok());
        assert!(tags(&site).is_ok());
        assert!(featured(&site, false).is_ok());
    }
}

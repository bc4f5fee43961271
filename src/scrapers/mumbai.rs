//! Mumbai University department announcements scraper.
//!
//! Scrapes the department announcements page of
//! [Mumbai University](https://mu.ac.in/department-announcements). The page
//! is WordPress-generated, so the notices sit inside a `wpb_text_column`
//! widget under the main content area rather than in a dedicated container.
//!
//! # Page Structure
//!
//! Every `li` matching `#main .entry-content .wpb_text_column ul li` is one
//! announcement; the anchor inside it (when present) links to the circular.

use crate::models::{Announcement, University};
use crate::scrapers::{text_or_untitled, ScrapeError};
use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

/// The fixed announcements page URL. Relative circular links resolve against it.
pub const SOURCE_URL: &str = "https://mu.ac.in/department-announcements";

/// Fetch and parse the Mumbai University department announcements page.
///
/// # Returns
///
/// The announcements in document order; an empty list when the content area
/// holds no matching list items.
pub async fn fetch_announcements(client: &Client) -> Result<Vec<Announcement>, ScrapeError> {
    let body = client
        .get(SOURCE_URL)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    Ok(parse_announcements(&body))
}

fn parse_announcements(html: &str) -> Vec<Announcement> {
    let document = Html::parse_document(html);
    let base = Url::parse(SOURCE_URL).unwrap();
    let item_selector = Selector::parse("#main .entry-content .wpb_text_column ul li").unwrap();
    let anchor_selector = Selector::parse("a").unwrap();

    let mut announcements = Vec::new();
    for item in document.select(&item_selector) {
        let link_tag = item.select(&anchor_selector).next().and_then(|a| {
            a.value()
                .attr("href")
                .filter(|href| !href.is_empty())
                .map(|href| (a, href))
        });

        let announcement = match link_tag {
            Some((anchor, href)) => Announcement {
                university: University::Mumbai,
                title: text_or_untitled(anchor),
                description: None,
                link: base.join(href).ok().map(|resolved| resolved.to_string()),
                details: None,
            },
            None => Announcement {
                university: University::Mumbai,
                title: text_or_untitled(item),
                description: None,
                link: None,
                details: None,
            },
        };
        announcements.push(announcement);
    }

    announcements
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_content_area_items() {
        let html = r#"
            <html><body>
              <div id="main">
                <div class="entry-content">
                  <div class="wpb_text_column">
                    <ul>
                      <li><a href="/wp-content/uploads/circular-412.pdf">Circular 412: MSc admissions</a></li>
                      <li>Department of History: schedule awaited</li>
                    </ul>
                  </div>
                </div>
              </div>
            </body></html>
        "#;

        let announcements = parse_announcements(html);
        assert_eq!(announcements.len(), 2);

        assert_eq!(announcements[0].university, University::Mumbai);
        assert_eq!(announcements[0].title, "Circular 412: MSc admissions");
        assert_eq!(
            announcements[0].link.as_deref(),
            Some("https://mu.ac.in/wp-content/uploads/circular-412.pdf")
        );
        assert_eq!(announcements[0].details, None);

        assert_eq!(
            announcements[1].title,
            "Department of History: schedule awaited"
        );
        assert_eq!(announcements[1].link, None);
    }

    #[test]
    fn test_ignores_lists_outside_content_area() {
        let html = r#"
            <div id="main">
              <nav><ul><li><a href="/home">Home</a></li></ul></nav>
              <div class="entry-content">
                <div class="wpb_text_column">
                  <ul><li><a href="/a.pdf">Actual announcement</a></li></ul>
                </div>
              </div>
            </div>
        "#;

        let announcements = parse_announcements(html);
        assert_eq!(announcements.len(), 1);
        assert_eq!(announcements[0].title, "Actual announcement");
    }

    #[test]
    fn test_collects_items_across_text_columns() {
        let html = r#"
            <div id="main"><div class="entry-content">
              <div class="wpb_text_column"><ul><li>First department</li></ul></div>
              <div class="wpb_text_column"><ul><li>Second department</li></ul></div>
            </div></div>
        "#;

        let announcements = parse_announcements(html);
        let titles: Vec<&str> = announcements.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["First department", "Second department"]);
    }

    #[test]
    fn test_empty_href_falls_back_to_item_text() {
        let html = r#"
            <div id="main"><div class="entry-content"><div class="wpb_text_column">
              <ul><li><a href="">Pending upload</a> (link to follow)</li></ul>
            </div></div></div>
        "#;

        let announcements = parse_announcements(html);
        assert_eq!(announcements.len(), 1);
        assert_eq!(announcements[0].link, None);
        assert_eq!(announcements[0].title, "Pending upload (link to follow)");
    }

    #[test]
    fn test_missing_content_area_yields_empty() {
        assert!(parse_announcements("<html><body><p>503</p></body></html>").is_empty());
    }
}

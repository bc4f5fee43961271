//! Bangalore University notifications scraper.
//!
//! Scrapes the notifications page of [Bangalore University](https://bangaloreuniversity.karnataka.gov.in/notifications).
//! The page renders its notices as a flat unordered list inside a
//! `container`-classed block; each list item usually wraps its title in an
//! anchor pointing at the notice PDF.
//!
//! # Page Structure
//!
//! ```text
//! div.container
//! └── ul                 <- first list in the container
//!     ├── li > a[href]   <- title + link
//!     └── li             <- title only, no link
//! ```
//!
//! Only the list's direct `li` children are taken; lists nested inside an
//! item belong to that item's body, not to the notice index.

use crate::models::{Announcement, University};
use crate::scrapers::{text_or_untitled, ScrapeError};
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// The fixed notifications page URL. Relative notice links resolve against it.
pub const SOURCE_URL: &str = "https://bangaloreuniversity.karnataka.gov.in/notifications";

/// Fetch and parse the Bangalore University notifications page.
///
/// # Returns
///
/// The announcements in document order. A page whose markup no longer matches
/// the expected structure parses to an empty list; only the fetch itself can
/// fail.
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
    let container_selector = Selector::parse("div.container").unwrap();
    let list_selector = Selector::parse("ul").unwrap();
    let anchor_selector = Selector::parse("a").unwrap();

    let mut announcements = Vec::new();
    let Some(container) = document.select(&container_selector).next() else {
        return announcements;
    };
    let Some(list) = container.select(&list_selector).next() else {
        return announcements;
    };

    // Direct children only; notices nested under an item are not separate entries.
    let items = list
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|child| child.value().name() == "li");

    for item in items {
        let link_tag = item.select(&anchor_selector).next().and_then(|a| {
            a.value()
                .attr("href")
                .filter(|href| !href.is_empty())
                .map(|href| (a, href))
        });

        let announcement = match link_tag {
            Some((anchor, href)) => Announcement {
                university: University::Bangalore,
                title: text_or_untitled(anchor),
                description: None,
                link: base.join(href).ok().map(|resolved| resolved.to_string()),
                details: None,
            },
            None => Announcement {
                university: University::Bangalore,
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

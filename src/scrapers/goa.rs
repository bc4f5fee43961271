//! Goa University admission announcements scraper.
//!
//! Scrapes the admissions announcements page of
//! [Goa University](https://www.unigoa.ac.in/systems/c/admissions/announcementsnotices.html).
//! Unlike the other sources, Goa publishes no per-notice links: each `h4`
//! heading is one announcement, optionally followed by a bullet list with the
//! particulars (dates, eligibility, fees).
//!
//! # Page Structure
//!
//! ```text
//! div.details1
//! └── div.details1_left
//!     ├── h4             <- announcement title
//!     ├── ul > li*       <- details for the heading above, when present
//!     ├── h4
//!     └── p              <- non-list sibling: heading has no details
//! ```
//!
//! The detail list is only attached when the element immediately following
//! the heading is a `ul`; anything else (a paragraph, another heading) means
//! the announcement stands alone.

use crate::models::{Announcement, University};
use crate::scrapers::{text_or_untitled, ScrapeError};
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};

/// The fixed announcements page URL.
pub const SOURCE_URL: &str =
    "https://www.unigoa.ac.in/systems/c/admissions/announcementsnotices.html";

/// Fetch and parse the Goa University announcements page.
///
/// # Returns
///
/// The announcements in document order. Goa records never carry a link; their
/// `details` list is present but possibly empty.
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
    let wrapper_selector = Selector::parse("div.details1").unwrap();
    let left_selector = Selector::parse("div.details1_left").unwrap();
    let heading_selector = Selector::parse("h4").unwrap();
    let item_selector = Selector::parse("li").unwrap();

    let mut announcements = Vec::new();
    let Some(wrapper) = document.select(&wrapper_selector).next() else {
        return announcements;
    };
    let Some(left_column) = wrapper.select(&left_selector).next() else {
        return announcements;
    };

    for heading in left_column.select(&heading_selector) {
        let next_element = heading.next_siblings().find_map(ElementRef::wrap);
        let details = match next_element {
            Some(sibling) if sibling.value().name() == "ul" => sibling
                .select(&item_selector)
                .map(|li| li.text().collect::<String>().trim().to_string())
                .collect(),
            _ => Vec::new(),
        };

        announcements.push(Announcement {
            university: University::Goa,
            title: text_or_untitled(heading),
            description: None,
            link: None,
            details: Some(details),
        });
    }

    announcements
}

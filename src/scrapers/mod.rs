//! University announcement scrapers.
//!
//! This module contains one submodule per supported university. Each site
//! publishes its admission announcements with a different, undocumented HTML
//! structure, so every scraper carries its own selectors, but all of them
//! follow the same contract:
//!
//! 1. **Fetch**: GET the fixed source URL through the shared [`reqwest::Client`]
//!    (which carries the request timeout) and reject non-2xx responses.
//! 2. **Parse**: Walk the document with the `scraper` crate and produce
//!    [`Announcement`] records in document order.
//!
//! # Supported Sources
//!
//! | Source | Module | Anchor | Auxiliary fields |
//! |--------|--------|--------|------------------|
//! | Bangalore University | [`bangalore`] | first `ul` inside `div.container` | `link` |
//! | Goa University | [`goa`] | `div.details1_left` inside `div.details1` | `details` |
//! | Mumbai University | [`mumbai`] | `#main .entry-content .wpb_text_column ul li` | `link` |
//!
//! # Error Handling
//!
//! A fetch failure (network error, timeout, non-2xx status) is an
//! [`Err(ScrapeError)`](ScrapeError) from the source module; a page whose
//! structure no longer matches the selectors is an `Ok` empty list. The two
//! are kept apart so the logs can tell a dead site from a quiet one, but
//! [`scrape_university`] collapses both into an empty list: a source that
//! cannot be read looks exactly like a source with nothing to announce, and
//! the HTTP layer turns an empty total into a 404 rather than a 500.

use crate::models::{Announcement, University};
use futures::stream::{self, StreamExt};
use reqwest::{Client, StatusCode};
use scraper::ElementRef;
use thiserror::Error;
use tracing::{error, info};

pub mod bangalore;
pub mod goa;
pub mod mumbai;

/// Title substituted when a page item has no usable text.
pub const UNTITLED: &str = "Untitled";

/// Why a source page could not be fetched.
///
/// Only used between a source module and [`scrape_university`]; callers past
/// that point see an empty list. Timeouts and HTTP status failures get their
/// own variants so log lines name the failure mode directly.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("request timed out")]
    Timeout,
    #[error("unexpected status {0}")]
    Status(StatusCode),
    #[error(transparent)]
    Http(reqwest::Error),
}

impl From<reqwest::Error> for ScrapeError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ScrapeError::Timeout
        } else if let Some(status) = e.status() {
            ScrapeError::Status(status)
        } else {
            ScrapeError::Http(e)
        }
    }
}

/// Trimmed text content of an element, or [`UNTITLED`] when empty.
pub(crate) fn text_or_untitled(element: ElementRef<'_>) -> String {
    let text = element.text().collect::<String>();
    let trimmed = text.trim();
    if trimmed.is_empty() {
        UNTITLED.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Scrape one university, collapsing any fetch failure into an empty list.
///
/// The failure is logged with the university and source URL; the caller only
/// ever sees announcements. A successful scrape logs the extracted count.
pub async fn scrape_university(client: &Client, university: University) -> Vec<Announcement> {
    let (url, result) = match university {
        University::Bangalore => (
            bangalore::SOURCE_URL,
            bangalore::fetch_announcements(client).await,
        ),
        University::Goa => (goa::SOURCE_URL, goa::fetch_announcements(client).await),
        University::Mumbai => (
            mumbai::SOURCE_URL,
            mumbai::fetch_announcements(client).await,
        ),
    };

    match result {
        Ok(announcements) => {
            info!(
                university = %university,
                count = announcements.len(),
                "Scraped announcements"
            );
            announcements
        }
        Err(e) => {
            error!(
                university = %university,
                url,
                error = %e,
                "Failed to fetch announcements; returning none"
            );
            Vec::new()
        }
    }
}

/// Scrape every university and concatenate the results.
///
/// The three fetches run concurrently, but `buffered` yields them in input
/// order, so the output is always Bangalore, then Goa, then Mumbai with
/// per-source document order intact regardless of which site answers first.
pub async fn scrape_all(client: &Client) -> Vec<Announcement> {
    let per_source: Vec<Vec<Announcement>> = stream::iter(University::ALL)
        .map(|university| scrape_university(client, university))
        .buffered(University::ALL.len())
        .collect()
        .await;

    let announcements: Vec<Announcement> = per_source.into_iter().flatten().collect();
    info!(count = announcements.len(), "Aggregated announcements from all sources");
    announcements
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn first_element<'a>(document: &'a Html, css: &str) -> ElementRef<'a> {
        let selector = Selector::parse(css).unwrap();
        document.select(&selector).next().unwrap()
    }

    #[test]
    fn test_text_or_untitled_trims_whitespace() {
        let document = Html::parse_fragment("<li>  Admission list\n </li>");
        let li = first_element(&document, "li");
        assert_eq!(text_or_untitled(li), "Admission list");
    }

    #[test]
    fn test_text_or_untitled_concatenates_nested_text() {
        let document = Html::parse_fragment("<li>Round <b>two</b> results</li>");
        let li = first_element(&document, "li");
        assert_eq!(text_or_untitled(li), "Round two results");
    }

    #[test]
    fn test_text_or_untitled_substitutes_placeholder() {
        let document = Html::parse_fragment("<li>   </li>");
        let li = first_element(&document, "li");
        assert_eq!(text_or_untitled(li), UNTITLED);
    }

    #[test]
    fn test_scrape_error_classifies_status() {
        let e = ScrapeError::Status(StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(e.to_string(), "unexpected status 503 Service Unavailable");
    }
}

//! Data models for announcements and API responses.
//!
//! This module defines the core data structures used throughout the application:
//! - [`University`]: The fixed set of supported sources
//! - [`Announcement`]: A single normalized admission announcement
//! - [`AnnouncementPage`]: One paginated page of announcements
//!
//! The three university sites publish announcements with different amounts of
//! detail (Goa pages carry bullet lists, Bangalore and Mumbai carry links), so
//! [`Announcement`] is a superset record: fields a source does not produce are
//! serialized as explicit `null`s rather than omitted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A university whose admission announcements this API serves.
///
/// The set is fixed at compile time. Each variant maps to one scraper module
/// and serializes as its canonical display name (`"Bangalore"`, `"Goa"`,
/// `"Mumbai"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum University {
    Bangalore,
    Goa,
    Mumbai,
}

impl University {
    /// All supported universities, in the order their results are aggregated.
    pub const ALL: [University; 3] = [University::Bangalore, University::Goa, University::Mumbai];

    /// Resolve a request path segment to a university, case-insensitively.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// assert_eq!(University::from_key("BANGALORE"), Some(University::Bangalore));
    /// assert_eq!(University::from_key("oxford"), None);
    /// ```
    pub fn from_key(key: &str) -> Option<University> {
        match key.to_ascii_lowercase().as_str() {
            "bangalore" => Some(University::Bangalore),
            "goa" => Some(University::Goa),
            "mumbai" => Some(University::Mumbai),
            _ => None,
        }
    }

    /// The canonical display name, as returned by `GET /universities`.
    pub fn name(&self) -> &'static str {
        match self {
            University::Bangalore => "Bangalore",
            University::Goa => "Goa",
            University::Mumbai => "Mumbai",
        }
    }
}

impl fmt::Display for University {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single admission announcement extracted from a university page.
///
/// Records are request-scoped: they are built fresh from the live page on
/// every request and live only inside the response that carries them. There
/// is no identity and no uniqueness constraint.
///
/// # Field population by source
///
/// | Field | Bangalore | Goa | Mumbai |
/// |-------|-----------|-----|--------|
/// | `title` | yes | yes | yes |
/// | `description` | `null` | `null` | `null` |
/// | `link` | absolute URL or `null` | `null` | absolute URL or `null` |
/// | `details` | `null` | list (possibly empty) | `null` |
#[derive(Debug, Clone, Serialize)]
pub struct Announcement {
    /// The university this announcement was scraped from.
    pub university: University,
    /// The announcement title; `"Untitled"` when the page item had no text.
    pub title: String,
    /// Longer description. No current source publishes one.
    pub description: Option<String>,
    /// Absolute URL of the linked notice, when the item carried a usable anchor.
    pub link: Option<String>,
    /// Bullet-point fragments attached to the announcement (Goa only).
    pub details: Option<Vec<String>>,
}

/// One page of announcements plus the pagination bookkeeping echoed back to
/// the client. `total` is always the pre-pagination count.
#[derive(Debug, Serialize)]
pub struct AnnouncementPage {
    pub data: Vec<Announcement>,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}

//! Click-to-navigate for calendar cells.

use chrono::NaiveDate;
use url::Url;

/// Fragment the profile page scrolls to.
const YEAR_LIST_ANCHOR: &str = "year-list-container";

/// An outbound navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    /// Target URL
    pub url: String,
    /// Open in a new browsing context (tab/window)
    pub new_context: bool,
}

/// Receives navigations dispatched by cell clicks.
pub trait Navigator {
    /// Perform (or record) the navigation.
    fn navigate(&mut self, navigation: Navigation);
}

/// Navigator that keeps every dispatched navigation.
#[derive(Debug, Default, Clone)]
pub struct RecordingNavigator {
    /// Navigations in dispatch order
    pub dispatched: Vec<Navigation>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, navigation: Navigation) {
        self.dispatched.push(navigation);
    }
}

/// Owner's activity overview filtered to a single day.
///
/// `{profile_url}?tab=overview&from={date}&to={date}#year-list-container`.
/// Returns `None` if `profile_url` is not a valid absolute URL.
pub fn day_overview_url(profile_url: &str, date: NaiveDate) -> Option<String> {
    let mut url = match Url::parse(profile_url) {
        Ok(url) => url,
        Err(err) => {
            tracing::warn!(profile_url = %profile_url, error = %err, "invalid profile url, calendar links disabled");
            return None;
        }
    };
    let day = date.format("%Y-%m-%d").to_string();
    url.query_pairs_mut()
        .append_pair("tab", "overview")
        .append_pair("from", &day)
        .append_pair("to", &day);
    url.set_fragment(Some(YEAR_LIST_ANCHOR));
    Some(url.into())
}

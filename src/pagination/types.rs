//! Pagination types
//!
//! The wire format of a page response, the pagination cursor the loader
//! mutates, and the outcome reported for each scroll event.

use crate::error::Error;
use crate::types::LoaderState;
use serde::{Deserialize, Serialize};

/// Body returned by the feed endpoint for one page
///
/// Accepts both `content`/`hasNext` and the `news_html`/`has_next` names
/// emitted by the news server. When a body carries both spellings,
/// `content` and `hasNext` win. A null or missing flag reads as `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawPageResponse")]
pub struct PageResponse {
    /// Markup fragment to append
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Whether the server has another page after this one
    #[serde(rename = "hasNext")]
    pub has_next: bool,
}

/// Every spelling the feed endpoint may use, each one nullable
#[derive(Deserialize)]
struct RawPageResponse {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    news_html: Option<String>,
    #[serde(default, rename = "hasNext")]
    has_next_camel: Option<bool>,
    #[serde(default)]
    has_next: Option<bool>,
}

impl From<RawPageResponse> for PageResponse {
    fn from(raw: RawPageResponse) -> Self {
        Self {
            content: raw.content.or(raw.news_html),
            has_next: raw.has_next_camel.or(raw.has_next).unwrap_or(false),
        }
    }
}

impl PageResponse {
    /// Response carrying a fragment
    pub fn new(content: impl Into<String>, has_next: bool) -> Self {
        Self {
            content: Some(content.into()),
            has_next,
        }
    }

    /// The fragment to append, if the response carries a non-blank one
    pub fn fragment(&self) -> Option<&str> {
        self.content
            .as_deref()
            .filter(|content| !content.trim().is_empty())
    }
}

/// Tracks which page comes next and whether a request may be issued
///
/// The page only moves forward, one step at a time, and the exhausted flag
/// never clears once set. Mutation goes through [`super::IncrementalLoader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationCursor {
    current_page: u32,
    is_loading: bool,
    is_exhausted: bool,
}

impl PaginationCursor {
    /// Page fetched first when nothing else is configured
    pub const DEFAULT_START_PAGE: u32 = 2;

    /// Create a cursor that will request `start_page` next
    pub fn new(start_page: u32) -> Self {
        Self {
            current_page: start_page.max(1),
            is_loading: false,
            is_exhausted: false,
        }
    }

    /// Page the next request will ask for
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Whether a request is in flight
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Whether the server reported the last page
    pub fn is_exhausted(&self) -> bool {
        self.is_exhausted
    }

    /// Current state of the loader state machine
    pub fn state(&self) -> LoaderState {
        if self.is_exhausted {
            LoaderState::Exhausted
        } else if self.is_loading {
            LoaderState::Loading
        } else {
            LoaderState::Idle
        }
    }

    /// Claim the loading flag, returning the page to request
    pub(crate) fn try_begin(&mut self) -> Result<u32, LoaderState> {
        match self.state() {
            LoaderState::Idle => {
                self.is_loading = true;
                Ok(self.current_page)
            }
            busy_or_done => Err(busy_or_done),
        }
    }

    pub(crate) fn advance(&mut self) {
        self.current_page = self.current_page.saturating_add(1);
    }

    pub(crate) fn mark_exhausted(&mut self) {
        self.is_exhausted = true;
    }

    pub(crate) fn release(&mut self) {
        self.is_loading = false;
    }
}

impl Default for PaginationCursor {
    fn default() -> Self {
        Self::new(Self::DEFAULT_START_PAGE)
    }
}

/// What a scroll event led to
#[derive(Debug)]
pub enum LoadOutcome {
    /// The viewport is not at the bottom of the document
    NotAtBottom,
    /// A request is already in flight
    Busy,
    /// The feed has no further pages
    Exhausted,
    /// A fragment was appended
    Loaded {
        /// Page that was fetched
        page: u32,
        /// Whether another page follows
        has_next: bool,
    },
    /// The server answered without content; pagination did not advance
    Empty {
        /// Page that was requested
        page: u32,
    },
    /// The request failed; pagination did not advance
    Failed {
        /// Page that was requested
        page: u32,
        /// Why it failed
        error: Error,
    },
}

impl LoadOutcome {
    /// Whether this event sent a request
    pub fn issued_request(&self) -> bool {
        matches!(
            self,
            Self::Loaded { .. } | Self::Empty { .. } | Self::Failed { .. }
        )
    }

    /// Whether a fragment was appended
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }
}

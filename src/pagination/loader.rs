//! Incremental loader
//!
//! Turns scroll-to-bottom events into page requests. One request is in
//! flight at a time; the loading flag is held by a [`LoadingGuard`] and
//! released when the guard drops, whichever way the request ends.

use super::source::PageSource;
use super::types::{LoadOutcome, PageResponse, PaginationCursor};
use super::viewport::{ScrollPosition, DEFAULT_BOTTOM_TOLERANCE};
use crate::config::ClientConfig;
use crate::error::Error;
use crate::render::Renderer;
use crate::types::LoaderState;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Tuning for an [`IncrementalLoader`]
#[derive(Debug, Clone, PartialEq)]
pub struct LoaderOptions {
    /// First page to request
    pub start_page: u32,
    /// Container receiving fragments
    pub container: String,
    /// Slack in pixels for bottom detection
    pub bottom_tolerance: f64,
    /// Upper bound on one page request
    pub request_timeout: Duration,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            start_page: PaginationCursor::DEFAULT_START_PAGE,
            container: "news-container".to_string(),
            bottom_tolerance: DEFAULT_BOTTOM_TOLERANCE,
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl LoaderOptions {
    /// Options taken from the client configuration
    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            start_page: config.start_page,
            container: config.container.clone(),
            bottom_tolerance: config.bottom_tolerance,
            request_timeout: config.request_timeout(),
        }
    }
}

/// Fetches further pages as the reader reaches the end of the feed
pub struct IncrementalLoader<S, R> {
    source: S,
    renderer: R,
    cursor: Mutex<PaginationCursor>,
    options: LoaderOptions,
}

impl<S: PageSource, R: Renderer> IncrementalLoader<S, R> {
    /// Create a loader with default options
    pub fn new(source: S, renderer: R) -> Self {
        Self::with_options(source, renderer, LoaderOptions::default())
    }

    /// Create a loader with explicit options
    pub fn with_options(source: S, renderer: R, options: LoaderOptions) -> Self {
        Self {
            source,
            renderer,
            cursor: Mutex::new(PaginationCursor::new(options.start_page)),
            options,
        }
    }

    /// Copy of the pagination cursor
    pub fn cursor(&self) -> PaginationCursor {
        *lock_cursor(&self.cursor)
    }

    /// Current state of the state machine
    pub fn state(&self) -> LoaderState {
        self.cursor().state()
    }

    /// Options in effect
    pub fn options(&self) -> &LoaderOptions {
        &self.options
    }

    /// The renderer fragments are appended to
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Handle a scroll event
    pub async fn on_scroll(&self, position: ScrollPosition) -> LoadOutcome {
        if !position.is_at_bottom(self.options.bottom_tolerance) {
            return LoadOutcome::NotAtBottom;
        }
        self.load_more().await
    }

    /// Request the next page unless one is in flight or the feed is exhausted
    pub async fn load_more(&self) -> LoadOutcome {
        let guard = match LoadingGuard::acquire(&self.cursor) {
            Ok(guard) => guard,
            Err(LoaderState::Exhausted) => {
                debug!("Feed exhausted, ignoring scroll");
                return LoadOutcome::Exhausted;
            }
            Err(_) => {
                debug!("Page request already in flight, ignoring scroll");
                return LoadOutcome::Busy;
            }
        };

        let page = guard.page();
        let timeout = self.options.request_timeout;
        let fetched = match tokio::time::timeout(timeout, self.source.fetch_page(page)).await {
            Ok(result) => result,
            Err(_) => Err(Error::timeout(timeout)),
        };

        match fetched {
            Ok(response) => self.apply(&guard, &response),
            Err(error) => {
                warn!("Failed to load page {}: {}", page, error);
                LoadOutcome::Failed { page, error }
            }
        }
    }

    fn apply(&self, guard: &LoadingGuard<'_>, response: &PageResponse) -> LoadOutcome {
        let page = guard.page();
        let Some(fragment) = response.fragment() else {
            warn!("Page {} returned no content", page);
            return LoadOutcome::Empty { page };
        };

        self.renderer
            .append_content(&self.options.container, fragment);

        if response.has_next {
            guard.advance();
            info!("Loaded page {}, next is {}", page, page.saturating_add(1));
        } else {
            guard.exhaust();
            info!("Loaded page {}, feed exhausted", page);
        }

        LoadOutcome::Loaded {
            page,
            has_next: response.has_next,
        }
    }
}

impl<S, R> std::fmt::Debug for IncrementalLoader<S, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IncrementalLoader")
            .field("cursor", &*lock_cursor(&self.cursor))
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Holds the cursor's loading flag for one request
///
/// Dropping the guard clears the flag, including when the request future
/// is cancelled or a renderer panics.
pub struct LoadingGuard<'a> {
    cursor: &'a Mutex<PaginationCursor>,
    page: u32,
}

impl<'a> LoadingGuard<'a> {
    /// Claim the loading flag, or report why a request may not start
    pub fn acquire(cursor: &'a Mutex<PaginationCursor>) -> Result<Self, LoaderState> {
        let page = lock_cursor(cursor).try_begin()?;
        Ok(Self { cursor, page })
    }

    /// Page this request is for
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Move the cursor to the following page
    pub fn advance(&self) {
        lock_cursor(self.cursor).advance();
    }

    /// Mark the feed as having no further pages
    pub fn exhaust(&self) {
        lock_cursor(self.cursor).mark_exhausted();
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        lock_cursor(self.cursor).release();
    }
}

fn lock_cursor(cursor: &Mutex<PaginationCursor>) -> MutexGuard<'_, PaginationCursor> {
    cursor.lock().unwrap_or_else(PoisonError::into_inner)
}

//! Pagination module
//!
//! Infinite-scroll loading of a paginated feed.
//!
//! # Overview
//!
//! A [`PaginationCursor`] tracks the next page and whether a request is in
//! flight or the feed is exhausted. The [`IncrementalLoader`] owns the
//! cursor, asks a [`PageSource`] for the next page whenever a
//! [`ScrollPosition`] reaches the bottom of the document, and hands each
//! fragment to a [`crate::render::Renderer`].
//!
//! ```text
//!   Idle ──scroll to bottom──▶ Loading ──hasNext=true──▶ Idle (page + 1)
//!                                 │  ──hasNext=false─▶ Exhausted
//!                                 └──empty / error───▶ Idle (same page)
//! ```

mod loader;
mod source;
mod types;
mod viewport;

pub use loader::{IncrementalLoader, LoaderOptions, LoadingGuard};
pub use source::{HttpPageSource, PageSource};
pub use types::{LoadOutcome, PageResponse, PaginationCursor};
pub use viewport::{ScrollPosition, DEFAULT_BOTTOM_TOLERANCE};

//! # scrollfeed
//!
//! Client-side loading for a paginated news feed: infinite scroll that
//! fetches the next page whenever the reader reaches the bottom, and
//! like/dislike buttons that vote once per item.
//!
//! ## Features
//!
//! - **Incremental loading**: one request in flight at a time, monotonic
//!   page numbers, terminal end-of-feed state
//! - **Guaranteed release**: the loading flag is freed on success, empty
//!   responses, errors, timeouts and cancellation alike
//! - **Tolerant bottom detection**: fractional scroll offsets still trigger
//! - **Voting**: CSRF-protected like/dislike with one-shot button state
//! - **Pluggable rendering**: document mutations go through a `Renderer`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use scrollfeed::config::ClientConfig;
//! use scrollfeed::pagination::{HttpPageSource, IncrementalLoader, LoaderOptions, ScrollPosition};
//! use scrollfeed::render::MemoryRenderer;
//!
//! #[tokio::main]
//! async fn main() -> scrollfeed::Result<()> {
//!     let config = ClientConfig::from_file("scrollfeed.yaml")?;
//!     let loader = IncrementalLoader::with_options(
//!         HttpPageSource::from_config(&config)?,
//!         MemoryRenderer::new(),
//!         LoaderOptions::from_config(&config),
//!     );
//!
//!     let outcome = loader.on_scroll(ScrollPosition::new(1200.0, 800.0, 2000.0)).await;
//!     println!("{outcome:?}");
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//!  scroll event ──▶ IncrementalLoader ──▶ PageSource ──▶ GET <feed>?page=N
//!                        │    (PaginationCursor)
//!                        └──▶ Renderer.append_content
//!
//!  button click ──▶ VoteWidget ──▶ VoteSink ──▶ POST /<id>/like/
//!                        └──▶ Renderer.set_like_count / disable_button
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// HTTP client
pub mod http;

/// Infinite-scroll pagination
pub mod pagination;

/// Rendering capability
pub mod render;

/// Like/dislike voting
pub mod vote;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use config::ClientConfig;
pub use pagination::{IncrementalLoader, LoadOutcome, PaginationCursor, ScrollPosition};
pub use render::{MemoryRenderer, Renderer};
pub use vote::{VoteOutcome, VoteWidget};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

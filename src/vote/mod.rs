//! Vote module
//!
//! Like and dislike buttons for a single feed item. Each click posts to the
//! vote endpoint with the page's CSRF token; a successful vote updates the
//! tally and disables both buttons for good.

mod types;
mod widget;

pub use types::{InitialVoteState, VoteButtons, VoteOutcome, VoteResponse};
pub use widget::{HttpVoteSink, VoteSink, VoteWidget, CSRF_HEADER};

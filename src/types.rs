//! Common types used throughout scrollfeed
//!
//! Shared value types used by the loader, the vote widget and the renderers.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// Vote tally as reported by the server; dislikes can push it below zero
pub type LikeCount = i64;

// ============================================================================
// Feed Items
// ============================================================================

/// Primary key of a feed item (a news entry)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ItemId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

// ============================================================================
// Voting
// ============================================================================

/// Which vote button was pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteKind {
    Like,
    Dislike,
}

impl VoteKind {
    /// Both buttons, in display order
    pub const ALL: [VoteKind; 2] = [VoteKind::Like, VoteKind::Dislike];

    /// Path segment of the vote endpoint
    pub fn path_segment(self) -> &'static str {
        match self {
            VoteKind::Like => "like",
            VoteKind::Dislike => "dislike",
        }
    }

    /// Relative endpoint path for an item, e.g. `/7/like/`
    pub fn endpoint(self, item: ItemId) -> String {
        format!("/{item}/{}/", self.path_segment())
    }
}

impl fmt::Display for VoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

// ============================================================================
// Loader State
// ============================================================================

/// Observable state of the incremental loader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoaderState {
    /// Ready to issue a request on the next scroll-to-bottom
    #[default]
    Idle,
    /// A request is in flight
    Loading,
    /// The server reported no further pages; terminal
    Exhausted,
}

//! Vote types

use crate::error::Error;
use crate::types::{LikeCount, VoteKind};
use serde::{Deserialize, Serialize};

/// Body returned by the like and dislike endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteResponse {
    /// Updated tally
    pub likes: LikeCount,
}

/// Vote state rendered into the page for the current reader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InitialVoteState {
    /// The reader already liked this item
    pub user_liked: bool,
    /// The reader already disliked this item
    pub user_disliked: bool,
}

impl InitialVoteState {
    /// Build from the template's `"True"`/`"False"` flags
    pub fn from_template_flags(liked: &str, disliked: &str) -> Self {
        Self {
            user_liked: liked.trim() == "True",
            user_disliked: disliked.trim() == "True",
        }
    }
}

/// Enabled/disabled state of the two vote buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VoteButtons {
    like_disabled: bool,
    dislike_disabled: bool,
    pending: bool,
}

impl VoteButtons {
    /// Buttons as rendered for the given reader
    pub fn from_initial(initial: InitialVoteState) -> Self {
        Self {
            like_disabled: initial.user_liked,
            dislike_disabled: initial.user_disliked,
            pending: false,
        }
    }

    /// Whether a button still accepts clicks
    pub fn is_enabled(&self, kind: VoteKind) -> bool {
        match kind {
            VoteKind::Like => !self.like_disabled,
            VoteKind::Dislike => !self.dislike_disabled,
        }
    }

    /// Whether a vote request is in flight
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Buttons currently disabled
    pub fn disabled(&self) -> Vec<VoteKind> {
        VoteKind::ALL
            .into_iter()
            .filter(|kind| !self.is_enabled(*kind))
            .collect()
    }

    pub(crate) fn try_begin(&mut self, kind: VoteKind) -> bool {
        if self.pending || !self.is_enabled(kind) {
            return false;
        }
        self.pending = true;
        true
    }

    pub(crate) fn disable_all(&mut self) {
        self.like_disabled = true;
        self.dislike_disabled = true;
    }

    pub(crate) fn release(&mut self) {
        self.pending = false;
    }
}

/// What a button click led to
#[derive(Debug)]
pub enum VoteOutcome {
    /// The button was disabled or another vote was in flight
    Ignored,
    /// The vote was accepted; both buttons are now disabled
    Recorded {
        /// Updated tally
        likes: LikeCount,
    },
    /// The request failed; nothing changed
    Failed {
        /// Why it failed
        error: Error,
    },
}

impl VoteOutcome {
    /// Whether the server accepted the vote
    pub fn is_recorded(&self) -> bool {
        matches!(self, Self::Recorded { .. })
    }
}

//! Like/dislike buttons
//!
//! A vote is cast once: after the server accepts either kind, both buttons
//! stay disabled. Failed votes leave everything as it was.

use super::types::{InitialVoteState, VoteButtons, VoteOutcome, VoteResponse};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::render::Renderer;
use crate::types::{ItemId, VoteKind};
use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

/// Header carrying the anti-forgery token
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Submits votes
#[async_trait]
pub trait VoteSink: Send + Sync {
    /// Cast a vote for an item and return the updated tally
    async fn cast(&self, item: ItemId, kind: VoteKind) -> Result<VoteResponse>;
}

/// Posts votes to `/<item>/like/` and `/<item>/dislike/`
#[derive(Debug, Clone)]
pub struct HttpVoteSink {
    client: HttpClient,
    csrf_token: String,
}

impl HttpVoteSink {
    /// Create a sink from a client and token
    pub fn new(client: HttpClient, csrf_token: impl Into<String>) -> Self {
        Self {
            client,
            csrf_token: csrf_token.into(),
        }
    }

    /// Create a sink from the client configuration; requires a CSRF token
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let token = config
            .csrf_token
            .as_deref()
            .filter(|token| !token.is_empty())
            .ok_or_else(|| Error::missing_field("csrf_token"))?;
        let client = HttpClient::with_config(HttpClientConfig::from_client_config(config))?;
        Ok(Self::new(client, token))
    }
}

#[async_trait]
impl VoteSink for HttpVoteSink {
    async fn cast(&self, item: ItemId, kind: VoteKind) -> Result<VoteResponse> {
        let endpoint = kind.endpoint(item);
        debug!("Casting {} vote for item {}", kind, item);
        let request = RequestConfig::new()
            .header("Content-Type", "application/json")
            .header(CSRF_HEADER, &self.csrf_token);
        self.client.post_json_with_config(&endpoint, request).await
    }
}

/// Vote buttons for one feed item
pub struct VoteWidget<S, R> {
    item: ItemId,
    sink: S,
    renderer: R,
    buttons: Mutex<VoteButtons>,
}

impl<S: VoteSink, R: Renderer> VoteWidget<S, R> {
    /// Create the widget, disabling buttons the reader already used
    pub fn new(item: ItemId, initial: InitialVoteState, sink: S, renderer: R) -> Self {
        let buttons = VoteButtons::from_initial(initial);
        for kind in buttons.disabled() {
            renderer.disable_button(kind);
        }
        Self {
            item,
            sink,
            renderer,
            buttons: Mutex::new(buttons),
        }
    }

    /// Item being voted on
    pub fn item(&self) -> ItemId {
        self.item
    }

    /// Copy of the button state
    pub fn buttons(&self) -> VoteButtons {
        *lock_buttons(&self.buttons)
    }

    /// The renderer tallies are shown on
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Handle a click on one of the buttons
    pub async fn click(&self, kind: VoteKind) -> VoteOutcome {
        let Some(_pending) = PendingVote::acquire(&self.buttons, kind) else {
            debug!("{} button unavailable for item {}", kind, self.item);
            return VoteOutcome::Ignored;
        };

        match self.sink.cast(self.item, kind).await {
            Ok(response) => {
                self.renderer.set_like_count(response.likes);
                lock_buttons(&self.buttons).disable_all();
                for button in VoteKind::ALL {
                    self.renderer.disable_button(button);
                }
                info!(
                    "Recorded {} for item {}, tally {}",
                    kind, self.item, response.likes
                );
                VoteOutcome::Recorded {
                    likes: response.likes,
                }
            }
            Err(error) => {
                warn!("Failed to record {} for item {}: {}", kind, self.item, error);
                VoteOutcome::Failed { error }
            }
        }
    }
}

impl<S, R> std::fmt::Debug for VoteWidget<S, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VoteWidget")
            .field("item", &self.item)
            .field("buttons", &*lock_buttons(&self.buttons))
            .finish_non_exhaustive()
    }
}

/// Marks a vote as in flight until dropped
struct PendingVote<'a> {
    buttons: &'a Mutex<VoteButtons>,
}

impl<'a> PendingVote<'a> {
    fn acquire(buttons: &'a Mutex<VoteButtons>, kind: VoteKind) -> Option<Self> {
        let started = lock_buttons(buttons).try_begin(kind);
        if started {
            Some(Self { buttons })
        } else {
            None
        }
    }
}

impl Drop for PendingVote<'_> {
    fn drop(&mut self) {
        lock_buttons(self.buttons).release();
    }
}

fn lock_buttons(buttons: &Mutex<VoteButtons>) -> MutexGuard<'_, VoteButtons> {
    buttons.lock().unwrap_or_else(PoisonError::into_inner)
}

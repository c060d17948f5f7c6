//! Rendering capability
//!
//! The loader and the vote widget never touch a document directly; they
//! call a [`Renderer`]. `MemoryRenderer` keeps an inspectable document in
//! memory, `ConsoleRenderer` writes to stdout for the command-line driver.

use crate::types::{LikeCount, VoteKind};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::io::{Stdout, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Document mutations needed by the feed page
pub trait Renderer: Send + Sync {
    /// Append a markup fragment at the end of a container
    fn append_content(&self, container: &str, fragment: &str);

    /// Show a new vote tally
    fn set_like_count(&self, likes: LikeCount);

    /// Disable a vote button
    fn disable_button(&self, button: VoteKind);
}

impl<R: Renderer + ?Sized> Renderer for Arc<R> {
    fn append_content(&self, container: &str, fragment: &str) {
        (**self).append_content(container, fragment);
    }

    fn set_like_count(&self, likes: LikeCount) {
        (**self).set_like_count(likes);
    }

    fn disable_button(&self, button: VoteKind) {
        (**self).disable_button(button);
    }
}

// ============================================================================
// Memory Renderer
// ============================================================================

/// Snapshot of what has been rendered so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Fragments per container, in append order
    pub containers: HashMap<String, Vec<String>>,
    /// Last tally shown
    pub like_count: Option<LikeCount>,
    /// Buttons that have been disabled
    pub disabled: HashSet<VoteKind>,
}

impl Document {
    /// Fragments appended to a container
    pub fn fragments(&self, container: &str) -> &[String] {
        self.containers.get(container).map_or(&[], Vec::as_slice)
    }

    /// Container contents joined in order
    pub fn container_html(&self, container: &str) -> String {
        self.fragments(container).concat()
    }

    /// Whether a button has been disabled
    pub fn is_disabled(&self, button: VoteKind) -> bool {
        self.disabled.contains(&button)
    }
}

/// In-memory renderer; clones share one document
#[derive(Debug, Clone, Default)]
pub struct MemoryRenderer {
    document: Arc<Mutex<Document>>,
}

impl MemoryRenderer {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current document
    pub fn snapshot(&self) -> Document {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Document> {
        self.document.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Renderer for MemoryRenderer {
    fn append_content(&self, container: &str, fragment: &str) {
        self.lock()
            .containers
            .entry(container.to_string())
            .or_default()
            .push(fragment.to_string());
    }

    fn set_like_count(&self, likes: LikeCount) {
        self.lock().like_count = Some(likes);
    }

    fn disable_button(&self, button: VoteKind) {
        self.lock().disabled.insert(button);
    }
}

// ============================================================================
// Console Renderer
// ============================================================================

/// Writes fragments and tallies line by line, to stdout unless told otherwise
///
/// A failed write is logged and dropped; rendering never fails the caller.
#[derive(Debug)]
pub struct ConsoleRenderer<W = Stdout> {
    out: Mutex<W>,
}

impl ConsoleRenderer {
    /// Renderer over the process's stdout
    pub fn new() -> Self {
        Self::with_writer(std::io::stdout())
    }
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ConsoleRenderer<W> {
    /// Renderer over any writer
    pub fn with_writer(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Give back the writer
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_line(&self, line: fmt::Arguments<'_>) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = writeln!(out, "{line}").and_then(|()| out.flush()) {
            tracing::warn!("Failed to write rendered output: {}", e);
        }
    }
}

impl<W: Write + Send> Renderer for ConsoleRenderer<W> {
    fn append_content(&self, _container: &str, fragment: &str) {
        self.write_line(format_args!("{}", fragment.trim_end()));
    }

    fn set_like_count(&self, likes: LikeCount) {
        self.write_line(format_args!("likes: {likes}"));
    }

    fn disable_button(&self, button: VoteKind) {
        tracing::debug!("{} button disabled", button);
    }
}

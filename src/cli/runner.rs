//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, InitialFlags};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::pagination::{
    HttpPageSource, IncrementalLoader, LoadOutcome, LoaderOptions, ScrollPosition,
};
use crate::render::ConsoleRenderer;
use crate::types::{ItemId, VoteKind};
use crate::vote::{HttpVoteSink, InitialVoteState, VoteOutcome, VoteWidget};
use tracing::info;

/// Height of the simulated viewport used when scrolling from the CLI
const VIEWPORT_HEIGHT: f64 = 800.0;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Scroll { max_pages } => self.scroll(*max_pages).await.map(|_| ()),
            Commands::Like { item, initial } => {
                self.vote(ItemId(*item), VoteKind::Like, *initial).await
            }
            Commands::Dislike { item, initial } => {
                self.vote(ItemId(*item), VoteKind::Dislike, *initial).await
            }
            Commands::Config => self.show_config(),
        }
    }

    /// Resolve the configuration from file and flags
    pub fn load_config(&self) -> Result<ClientConfig> {
        let config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => {
                let base_url = self.cli.base_url.as_deref().ok_or_else(|| {
                    Error::config("No server given (use --config or --base-url)")
                })?;
                ClientConfig::new(base_url)
            }
        };

        let config =
            config.with_overrides(self.cli.base_url.as_deref(), self.cli.csrf_token.as_deref());
        config.validate()?;
        Ok(config)
    }

    /// Keep hitting the bottom of the feed; returns the number of pages loaded
    async fn scroll(&self, max_pages: Option<u32>) -> Result<u32> {
        let config = self.load_config()?;
        let source = HttpPageSource::from_config(&config)?;
        info!("Scrolling {}", source.url());

        let loader = IncrementalLoader::with_options(
            source,
            ConsoleRenderer::new(),
            LoaderOptions::from_config(&config),
        );

        let mut pages = 0u32;
        let mut document_height = VIEWPORT_HEIGHT * 2.0;
        while max_pages.map_or(true, |max| pages < max) {
            let position = ScrollPosition::at_bottom_of(document_height, VIEWPORT_HEIGHT);
            match loader.on_scroll(position).await {
                LoadOutcome::Loaded { has_next, .. } => {
                    pages += 1;
                    document_height += VIEWPORT_HEIGHT;
                    if !has_next {
                        break;
                    }
                }
                LoadOutcome::Empty { page } => return Err(Error::EmptyContent { page }),
                LoadOutcome::Failed { error, .. } => return Err(error),
                LoadOutcome::Exhausted | LoadOutcome::Busy | LoadOutcome::NotAtBottom => break,
            }
        }

        info!(
            "Loaded {} page(s), next page {}, state {:?}",
            pages,
            loader.cursor().current_page(),
            loader.state()
        );
        Ok(pages)
    }

    /// Cast a single vote
    async fn vote(&self, item: ItemId, kind: VoteKind, initial: InitialFlags) -> Result<()> {
        let config = self.load_config()?;
        let sink = HttpVoteSink::from_config(&config)?;
        let initial = InitialVoteState {
            user_liked: initial.liked,
            user_disliked: initial.disliked,
        };

        let widget = VoteWidget::new(item, initial, sink, ConsoleRenderer::new());
        match widget.click(kind).await {
            VoteOutcome::Recorded { .. } => Ok(()),
            VoteOutcome::Ignored => Err(Error::Other(format!(
                "The {kind} button is disabled for item {item}"
            ))),
            VoteOutcome::Failed { error } => Err(error),
        }
    }

    /// Print the effective configuration
    fn show_config(&self) -> Result<()> {
        let config = self.load_config()?;
        print!("{}", config.to_yaml()?);
        Ok(())
    }
}

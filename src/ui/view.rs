//! The rendering seam for the product grid, auth banner and pager.

use std::sync::{Arc, Mutex, PoisonError};

use crate::catalog::{GridState, PagerState};

/// The auth region of the page header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthBanner {
    /// Nobody is logged in; show the login/register buttons.
    LoggedOut,
    /// Greets the logged-in user and offers logout.
    Welcome {
        /// The user's email address.
        email: String,
    },
}

impl AuthBanner {
    /// Returns the greeting text, if a user is logged in.
    #[must_use]
    pub fn greeting(&self) -> Option<String> {
        match self {
            Self::LoggedOut => None,
            Self::Welcome { email } => Some(format!("Welcome, {email}")),
        }
    }
}

/// Draws storefront state. Each call replaces what was shown before.
pub trait StorefrontView: Send + Sync {
    /// Replaces the product grid.
    fn render_grid(&self, grid: GridState);

    /// Replaces the auth region.
    fn render_auth(&self, banner: AuthBanner);

    /// Updates the pager buttons.
    fn render_pager(&self, pager: PagerState) {
        let _ = pager;
    }
}

/// A [`StorefrontView`] that writes each frame to the `tracing` log and keeps
/// nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingView;

impl StorefrontView for TracingView {
    fn render_grid(&self, grid: GridState) {
        match &grid {
            GridState::Products(cards) => tracing::debug!(cards = cards.len(), "render grid"),
            GridState::Loading | GridState::Empty => {
                tracing::debug!(placeholder = grid.placeholder().unwrap_or_default(), "render grid");
            }
        }
    }

    fn render_auth(&self, banner: AuthBanner) {
        tracing::debug!(greeting = banner.greeting().unwrap_or_default(), "render auth");
    }

    fn render_pager(&self, pager: PagerState) {
        tracing::debug!(current = pager.current, pages = pager.pages, "render pager");
    }
}

#[derive(Debug, Default)]
struct Frames {
    grids: Vec<GridState>,
    banners: Vec<AuthBanner>,
    pagers: Vec<PagerState>,
}

/// A [`StorefrontView`] that records every frame it is asked to draw.
///
/// Clones share the same recording. The history grows with every render, so
/// this suits tests and short-lived hosts that poll what is on screen.
#[derive(Clone, Debug, Default)]
pub struct RecordedView {
    frames: Arc<Mutex<Frames>>,
}

impl RecordedView {
    /// Creates an empty recording.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every grid state rendered so far, oldest first.
    #[must_use]
    pub fn grids(&self) -> Vec<GridState> {
        self.frames
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .grids
            .clone()
    }

    /// The grid currently on screen.
    #[must_use]
    pub fn grid(&self) -> Option<GridState> {
        self.frames
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .grids
            .last()
            .cloned()
    }

    /// The auth banner currently on screen.
    #[must_use]
    pub fn banner(&self) -> Option<AuthBanner> {
        self.frames
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .banners
            .last()
            .cloned()
    }

    /// The pager state currently on screen.
    #[must_use]
    pub fn pager(&self) -> Option<PagerState> {
        self.frames
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pagers
            .last()
            .copied()
    }
}

impl StorefrontView for RecordedView {
    fn render_grid(&self, grid: GridState) {
        self.frames
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .grids
            .push(grid);
    }

    fn render_auth(&self, banner: AuthBanner) {
        self.frames
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .banners
            .push(banner);
    }

    fn render_pager(&self, pager: PagerState) {
        self.frames
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pagers
            .push(pager);
    }
}

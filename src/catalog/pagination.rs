//! Client-side paging over a fetched product list.
//!
//! The backend returns the whole catalog in one response, so pages are
//! slices of that list. Page indices are zero-based.

use crate::error::ConfigError;

/// A request to move to another page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageRequest {
    /// Jump to the page with this zero-based index.
    Index(usize),
    /// Go back one page.
    Prev,
    /// Go forward one page.
    Next,
}

impl PageRequest {
    /// The progress message shown while the page loads.
    ///
    /// `resolved` is the zero-based page actually shown after clamping. An
    /// `Index` request names it by its one-based label, as the pager does.
    #[must_use]
    pub fn loading_message(self, resolved: usize) -> String {
        match self {
            Self::Index(_) => format!("Loading page {}...", resolved + 1),
            Self::Prev => "Loading previous page...".to_string(),
            Self::Next => "Loading next page...".to_string(),
        }
    }
}

/// Which pager button is active and how many there are.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PagerState {
    /// The active page, zero-based.
    pub current: usize,
    /// Total number of pages, always at least one.
    pub pages: usize,
}

impl PagerState {
    /// Returns `true` if a previous page exists.
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.current > 0
    }

    /// Returns `true` if a next page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current + 1 < self.pages
    }
}

/// Tracks the current page over a list of `total` items.
///
/// Every move is clamped to the valid range, so the current page always
/// exists. An empty list has exactly one (empty) page.
///
/// # Example
///
/// ```rust
/// use storefront_client::catalog::{PageRequest, Paginator};
///
/// let mut pager = Paginator::new(2).unwrap();
/// pager.set_total(5);
/// assert_eq!(pager.page_count(), 3);
/// assert_eq!(pager.change(PageRequest::Next), 1);
/// assert_eq!(pager.change(PageRequest::Index(10)), 2);
/// assert_eq!(pager.slice(&[1, 2, 3, 4, 5]), &[5]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
    current: usize,
    total: usize,
}

impl Paginator {
    /// Creates a paginator showing `page_size` items per page.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPageSize`] if `page_size` is zero.
    pub const fn new(page_size: usize) -> Result<Self, ConfigError> {
        if page_size == 0 {
            return Err(ConfigError::InvalidPageSize);
        }
        Ok(Self {
            page_size,
            current: 0,
            total: 0,
        })
    }

    /// Returns the number of items per page.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns the current page, zero-based.
    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Returns the number of pages, at least one.
    #[must_use]
    pub const fn page_count(&self) -> usize {
        if self.total == 0 {
            1
        } else {
            self.total.div_ceil(self.page_size)
        }
    }

    /// Updates the item count, clamping the current page if it no longer exists.
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.current = self.current.min(self.page_count() - 1);
    }

    /// Applies `request` and returns the resulting page.
    pub fn change(&mut self, request: PageRequest) -> usize {
        let last = self.page_count() - 1;
        self.current = match request {
            PageRequest::Index(index) => index.min(last),
            PageRequest::Prev => self.current.saturating_sub(1),
            PageRequest::Next => (self.current + 1).min(last),
        };
        self.current
    }

    /// Returns the items on the current page.
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.current * self.page_size).min(items.len());
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }

    /// Returns the pager controls state.
    #[must_use]
    pub const fn state(&self) -> PagerState {
        PagerState {
            current: self.current,
            pages: self.page_count(),
        }
    }
}

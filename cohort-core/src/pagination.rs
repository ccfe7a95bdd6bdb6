//! Client-side pagination over caller-owned datasets
//!
//! Only the current page and page size are stored. Everything else (slice
//! bounds, the visible items, page counts) is derived on every read from the
//! dataset the caller passes in, so a `Paginator` never holds on to data.

use crate::error::CohortError;
use std::any::Any;
use std::fmt;
use tracing::debug;

/// Number of pages needed for `total_items`, zero for an empty dataset.
///
/// `items_per_page` must be at least 1.
pub fn total_pages(total_items: usize, items_per_page: usize) -> usize {
    if total_items == 0 {
        0
    } else {
        total_items.div_ceil(items_per_page)
    }
}

/// Pull `current_page` back onto the last page when the page count shrank below it.
///
/// An empty page count leaves the page untouched.
pub fn clamp_page(current_page: usize, total_pages: usize) -> usize {
    if current_page > total_pages && total_pages > 0 {
        total_pages
    } else {
        current_page
    }
}

/// Derive the visible window of `dataset` for a 1-based `current_page`.
///
/// Out-of-range pages are not an error: they produce an empty `current_items`.
pub fn compute<T>(dataset: &[T], items_per_page: usize, current_page: usize) -> PageWindow<'_, T> {
    let total_items = dataset.len();
    let start_index = current_page.saturating_sub(1).saturating_mul(items_per_page);
    let end_index = start_index.saturating_add(items_per_page).min(total_items);
    let current_items = if start_index >= total_items {
        &dataset[..0]
    } else {
        &dataset[start_index..end_index]
    };

    PageWindow {
        current_page,
        start_index,
        end_index,
        current_items,
        total_items,
        total_pages: total_pages(total_items, items_per_page),
    }
}

/// The persisted part of pagination: which page, and how big a page is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    current_page: usize,
    items_per_page: usize,
}

impl PaginationState {
    pub fn new(items_per_page: usize) -> Result<Self, CohortError> {
        if items_per_page == 0 {
            return Err(CohortError::InvalidItemsPerPage(items_per_page));
        }
        Ok(Self {
            current_page: 1,
            items_per_page,
        })
    }

    pub fn with_page(self, page: usize) -> Result<Self, CohortError> {
        if page == 0 {
            return Err(CohortError::InvalidPage(page));
        }
        Ok(Self {
            current_page: page,
            ..self
        })
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }
}

/// A page of borrowed items plus the metadata needed to draw page controls
#[derive(Debug)]
pub struct PageWindow<'a, T> {
    pub current_page: usize,
    pub start_index: usize,
    pub end_index: usize,
    pub current_items: &'a [T],
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Clone for PageWindow<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PageWindow<'_, T> {}

impl<T> PageWindow<'_, T> {
    pub fn is_empty(&self) -> bool {
        self.current_items.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Last observed set of watched values, kept by value so any change is seen
trait ResetTrigger: fmt::Debug {
    fn as_any(&self) -> &dyn Any;
    fn same_as(&self, other: &dyn Any) -> bool;
    fn clone_trigger(&self) -> Box<dyn ResetTrigger>;
}

impl<K: PartialEq + Clone + fmt::Debug + 'static> ResetTrigger for K {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn same_as(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<K>() == Some(self)
    }

    fn clone_trigger(&self) -> Box<dyn ResetTrigger> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn ResetTrigger> {
    fn clone(&self) -> Self {
        (**self).clone_trigger()
    }
}

/// Pagination controller owned by a single list view.
///
/// Bounds are enforced as a reaction to state changes once a dataset size has
/// been observed (`sync_total_items` or `evaluate`). Before that, `go_to`
/// keeps whatever page was requested so a jump coming from a URL or a saved
/// view is not lost while the data is still loading.
#[derive(Debug, Clone)]
pub struct Paginator {
    state: PaginationState,
    total_items: Option<usize>,
    triggers: Option<Box<dyn ResetTrigger>>,
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            state: PaginationState {
                current_page: 1,
                items_per_page: 10,
            },
            total_items: None,
            triggers: None,
        }
    }
}

impl Paginator {
    pub fn new(items_per_page: usize) -> Result<Self, CohortError> {
        Ok(Self {
            state: PaginationState::new(items_per_page)?,
            total_items: None,
            triggers: None,
        })
    }

    pub fn state(&self) -> PaginationState {
        self.state
    }

    pub fn current_page(&self) -> usize {
        self.state.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.state.items_per_page
    }

    /// Last observed dataset size, zero if none has been observed yet
    pub fn total_items(&self) -> usize {
        self.total_items.unwrap_or(0)
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items(), self.state.items_per_page)
    }

    /// Jump to `page`. A page of 0 is treated as page 1.
    pub fn go_to(&mut self, page: usize) -> PaginationState {
        let page = page.max(1);
        if page == self.state.current_page {
            return self.state;
        }
        debug!(from = self.state.current_page, to = page, "go to page");
        self.state.current_page = page;
        self.enforce_bounds()
    }

    pub fn set_current_page(&mut self, page: usize) -> PaginationState {
        self.go_to(page)
    }

    pub fn previous(&mut self) -> PaginationState {
        if self.state.current_page > 1 {
            self.state.current_page -= 1;
            debug!(page = self.state.current_page, "previous page");
        }
        self.state
    }

    pub fn next(&mut self) -> PaginationState {
        if self.state.current_page < self.total_pages() {
            self.state.current_page += 1;
            debug!(page = self.state.current_page, "next page");
        }
        self.state
    }

    pub fn first(&mut self) -> PaginationState {
        self.go_to(1)
    }

    pub fn last(&mut self) -> PaginationState {
        self.go_to(self.total_pages().max(1))
    }

    pub fn reset(&mut self) -> PaginationState {
        if self.state.current_page != 1 {
            debug!(from = self.state.current_page, "reset to first page");
        }
        self.state.current_page = 1;
        self.state
    }

    pub fn set_items_per_page(&mut self, items_per_page: usize) -> Result<PaginationState, CohortError> {
        if items_per_page == 0 {
            return Err(CohortError::InvalidItemsPerPage(items_per_page));
        }
        self.state.items_per_page = items_per_page;
        Ok(self.enforce_bounds())
    }

    /// Record a new dataset size and clamp the current page to it
    pub fn sync_total_items(&mut self, total_items: usize) -> PaginationState {
        self.total_items = Some(total_items);
        self.enforce_bounds()
    }

    /// Compare the watched values with the previous observation and go back
    /// to page 1 if they changed. The first observation only records them.
    ///
    /// Returns whether a reset happened.
    pub fn observe_triggers<K>(&mut self, triggers: &K) -> bool
    where
        K: PartialEq + Clone + fmt::Debug + 'static,
    {
        let changed = match &self.triggers {
            Some(previous) => !ResetTrigger::same_as(triggers, (**previous).as_any()),
            None => false,
        };
        self.triggers = Some(Box::new(triggers.clone()));

        if changed {
            debug!(?triggers, "reset triggers changed");
            self.reset();
        }
        changed
    }

    /// Observe `dataset`'s size, clamp, then derive the window
    pub fn evaluate<'a, T>(&mut self, dataset: &'a [T]) -> PageWindow<'a, T> {
        self.sync_total_items(dataset.len());
        self.window(dataset)
    }

    /// Derive the window for the current state without touching it
    pub fn window<'a, T>(&self, dataset: &'a [T]) -> PageWindow<'a, T> {
        compute(dataset, self.state.items_per_page, self.state.current_page)
    }

    fn enforce_bounds(&mut self) -> PaginationState {
        if let Some(total_items) = self.total_items {
            let total_pages = total_pages(total_items, self.state.items_per_page);
            // An empty dataset has no last page to clamp to, fall back to page 1
            let clamped = clamp_page(self.state.current_page, total_pages).min(total_pages.max(1));
            if clamped != self.state.current_page {
                debug!(
                    from = self.state.current_page,
                    to = clamped,
                    total_pages,
                    "clamped current page"
                );
                self.state.current_page = clamped;
            }
        }
        self.state
    }
}

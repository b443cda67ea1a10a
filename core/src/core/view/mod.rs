//! Pure view-model computation for the paginated catalog grid.
//!
//! Nothing here touches a UI surface; front-ends draw whatever `PageView`
//! says. `total_pages` is the single source of truth for the page count,
//! used by both rendering and navigation.

use crate::types::MovieRecord;

/// Default number of records shown per rendered page.
pub const PAGE_SIZE: usize = 8;

/// Shown when a record has no poster or its poster fails to load.
pub const PLACEHOLDER_POSTER: &str =
    "https://images.unsplash.com/photo-1485846234645-a62644f84728?q=80&w=700&auto=format&fit=crop";

/// Current page position. Clamped against the catalog on every view
/// computation, so external catalog mutations can never leave the view on an
/// invalid page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub current_page: usize,
    pub page_size: usize,
}

/// One page of navigation in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStep {
    Prev,
    Next,
}

impl PageState {
    /// Starts at page 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Returns to the first page.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Steps one page. Steps that would leave `[1, total_pages]` are
    /// silently ignored; navigation never fails.
    pub fn step(&mut self, step: PageStep, catalog_len: usize) {
        let total = total_pages(catalog_len, self.page_size);
        match step {
            PageStep::Prev if self.current_page > 1 => self.current_page -= 1,
            PageStep::Next if self.current_page < total => self.current_page += 1,
            _ => {}
        }
    }

    fn clamp(&mut self, total: usize) {
        if self.current_page > total {
            self.current_page = total;
        }
        if self.current_page < 1 {
            self.current_page = 1;
        }
    }
}

/// The derived, ready-to-draw page of the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    /// At most `page_size` records, most recent first.
    pub items: Vec<MovieRecord>,
    pub current_page: usize,
    pub total_pages: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

impl PageView {
    /// True when the catalog has no records at all. Front-ends render an
    /// explicit empty state instead of a page.
    pub fn is_empty(&self) -> bool {
        self.total_pages == 0
    }
}

/// Single source of truth for the page count.
pub fn total_pages(catalog_len: usize, page_size: usize) -> usize {
    catalog_len.div_ceil(page_size.max(1))
}

/// Sorts the full catalog by creation time descending and extracts the
/// visible slice. The sort is stable: records sharing a timestamp keep their
/// collection order. The page state is clamped on every call.
pub fn compute_view(movies: &[MovieRecord], state: &mut PageState) -> PageView {
    let total = total_pages(movies.len(), state.page_size);
    state.clamp(total);

    if movies.is_empty() {
        return PageView {
            items: Vec::new(),
            current_page: state.current_page,
            total_pages: 0,
            has_prev: false,
            has_next: false,
        };
    }

    let mut sorted: Vec<&MovieRecord> = movies.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let start = (state.current_page - 1) * state.page_size;
    let items = sorted
        .iter()
        .skip(start)
        .take(state.page_size)
        .map(|&m| m.clone())
        .collect();

    PageView {
        items,
        current_page: state.current_page,
        total_pages: total,
        has_prev: state.current_page > 1,
        has_next: state.current_page < total,
    }
}

/// Presentation-layer poster fallback; the stored record is left untouched.
pub fn poster_or_placeholder(record: &MovieRecord) -> &str {
    if record.poster.trim().is_empty() {
        PLACEHOLDER_POSTER
    } else {
        &record.poster
    }
}

#[cfg(test)]
mod tests;

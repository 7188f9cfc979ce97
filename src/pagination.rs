use std::ops::Range;

/// Footer position sampled from the viewport, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSample {
    /// Bottom edge of the footer relative to the top of the viewport.
    pub footer_bottom: f64,
    pub footer_height: f64,
    pub viewport_height: f64,
}

impl ScrollSample {
    /// True once any part of the footer is on screen.
    pub fn footer_visible(&self) -> bool {
        self.footer_bottom - self.viewport_height <= self.footer_height
    }
}

/// Append-only paging: advancing grows the visible prefix, it never swaps pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    page_size: usize,
    current_page: usize,
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 0,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn reset(&mut self) {
        self.current_page = 0;
    }

    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }

    /// Everything shown so far: pages `0..=current_page`.
    pub fn visible_prefix<'a, T>(&self, ordered: &'a [T]) -> &'a [T] {
        &ordered[..self.visible_len(ordered.len())]
    }

    pub fn visible_len(&self, total: usize) -> usize {
        ((self.current_page + 1) * self.page_size).min(total)
    }

    /// Moves to the next page when the footer is in view and pages remain.
    /// Returns the range of newly revealed items, to be appended.
    pub fn maybe_advance(&mut self, total: usize, sample: &ScrollSample) -> Option<Range<usize>> {
        if !sample.footer_visible() || self.current_page + 1 >= self.page_count(total) {
            return None;
        }

        let start = self.visible_len(total);
        self.current_page += 1;
        Some(start..self.visible_len(total))
    }
}

//! Restartable page iterator over rendered book lines.

use std::iter::FusedIterator;
use std::num::NonZeroUsize;

/// Successive pages of up to `page_size` lines.
///
/// The lines are captured when the iterator is created, so later changes to
/// the book do not affect a traversal in progress. Start a new traversal by
/// asking the book for a fresh `Pages`.
#[derive(Debug, Clone)]
pub struct Pages {
    lines: Vec<String>,
    page_size: NonZeroUsize,
    cursor: usize,
}

impl Pages {
    pub(crate) fn new(lines: Vec<String>, page_size: NonZeroUsize) -> Self {
        Self {
            lines,
            page_size,
            cursor: 0,
        }
    }

    /// Lines per page.
    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    /// Total number of pages in this traversal, including those already returned.
    pub fn page_count(&self) -> usize {
        self.lines.len().div_ceil(self.page_size.get())
    }

    /// Number of lines captured for this traversal.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn remaining(&self) -> usize {
        self.lines
            .len()
            .saturating_sub(self.cursor)
            .div_ceil(self.page_size.get())
    }
}

impl Iterator for Pages {
    type Item = Vec<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.lines.len() {
            return None;
        }

        let end = self
            .cursor
            .saturating_add(self.page_size.get())
            .min(self.lines.len());
        let page = self.lines[self.cursor..end].to_vec();
        self.cursor = self.cursor.saturating_add(self.page_size.get());
        Some(page)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Pages {}

impl FusedIterator for Pages {}

//! 1-based offset pagination shared by every listing query

/// Number of items returned per page
pub const PAGE_SIZE: usize = 20;

/// A 1-based page number. Page 0 is treated as page 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(u32);

impl Page {
    pub fn new(number: u32) -> Self {
        Self(number.max(1))
    }

    pub fn offset(&self) -> usize {
        (self.0 as usize - 1) * PAGE_SIZE
    }

    pub fn limit(&self) -> usize {
        PAGE_SIZE
    }

    /// Select this page's window out of an already ordered slice
    pub fn slice<T: Clone>(&self, items: &[T]) -> Vec<T> {
        items
            .iter()
            .skip(self.offset())
            .take(self.limit())
            .cloned()
            .collect()
    }
}

impl Default for Page {
    fn default() -> Self {
        Self(1)
    }
}

impl From<u32> for Page {
    fn from(number: u32) -> Self {
        Self::new(number)
    }
}

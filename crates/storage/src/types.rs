//! Shared storage types.

use serde::{Deserialize, Serialize};

/// One slice of a paged listing plus the metadata the store computed for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
}

impl<T> Page<T> {
    /// Build a page, deriving `total_pages` from the total row count.
    pub fn new(content: Vec<T>, page: u32, size: u32, total_elements: u64) -> Self {
        let total_pages = if size == 0 {
            0
        } else {
            u32::try_from(total_elements.div_ceil(u64::from(size))).unwrap_or(u32::MAX)
        };
        Self { content, page, size, total_elements, total_pages }
    }

    /// Convert the page content while keeping the metadata intact.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        let page = Page::new(vec![1, 2, 3], 0, 20, 41);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_elements, 41);
    }

    #[test]
    fn total_pages_exact_multiple() {
        let page: Page<i64> = Page::new(vec![], 1, 20, 40);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn map_preserves_metadata() {
        let page = Page::new(vec![1, 2], 2, 10, 22).map(|n| n.to_string());
        assert_eq!(page.content, vec!["1", "2"]);
        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 3);
    }
}

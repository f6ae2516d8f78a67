use serde::{Deserialize, Serialize};

/// Which page of a list to fetch (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    pub fn first(page_size: u32) -> Self {
        Self { page: 1, page_size: page_size.max(1) }
    }

    /// Same page size, different page; page 0 is treated as 1
    pub fn with_page(self, page: u32) -> Self {
        Self { page: page.max(1), ..self }
    }

    /// Query string for list endpoints
    pub fn query(&self) -> String {
        format!("page={}&page_size={}", self.page, self.page_size)
    }
}

/// Paginated list envelope returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Total number of items across all pages
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Number of pages; an empty list still has one (empty) page
    pub fn total_pages(&self, page_size: u32) -> u32 {
        let page_size = u64::from(page_size.max(1));
        let pages = self.count.div_ceil(page_size).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }
}

/// Page numbers to show as buttons: at most `width` numbers centred on `current`
pub fn page_window(current: u32, total: u32, width: u32) -> Vec<u32> {
    let total = total.max(1);
    let width = width.clamp(1, total);
    let current = current.clamp(1, total);

    let half = width / 2;
    let start = current.saturating_sub(half).max(1).min(total - width + 1);
    (start..start + width).collect()
}

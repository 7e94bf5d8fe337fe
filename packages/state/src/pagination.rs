//! Page window and pagination controls.
//!
//! The controls never list every page: only Previous, the neighbouring page
//! numbers, the current page and Next. Previous/Next stay visible but inert
//! on the first/last page.

use api::PostPage;

pub const PREVIOUS: &str = "Previous";
pub const NEXT: &str = "Next";

/// Position of the currently shown page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// 1-indexed.
    pub page_num: u32,
    pub num_pages: u32,
}

impl PageWindow {
    pub fn new(page_num: u32, num_pages: u32) -> Self {
        Self {
            page_num,
            num_pages,
        }
    }

    pub fn is_first_page(&self) -> bool {
        self.page_num == 1
    }

    pub fn is_last_page(&self) -> bool {
        self.page_num == self.num_pages
    }

    pub fn controls(&self) -> Vec<PageControl> {
        let mut controls = vec![PageControl::edge(PREVIOUS, self.is_first_page())];
        if !self.is_first_page() {
            controls.push(PageControl::number(self.page_num - 1, false));
        }
        controls.push(PageControl::number(self.page_num, true));
        if !self.is_last_page() {
            controls.push(PageControl::number(self.page_num + 1, false));
        }
        controls.push(PageControl::edge(NEXT, self.is_last_page()));
        controls
    }
}

impl From<&PostPage> for PageWindow {
    fn from(page: &PostPage) -> Self {
        Self::new(page.page_num, page.num_pages)
    }
}

/// One link in the pagination bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControl {
    pub label: String,
    pub disabled: bool,
    pub active: bool,
}

impl PageControl {
    fn edge(label: &str, disabled: bool) -> Self {
        Self {
            label: label.to_string(),
            disabled,
            active: false,
        }
    }

    fn number(page: u32, active: bool) -> Self {
        Self {
            label: page.to_string(),
            disabled: false,
            active,
        }
    }

    /// Page to fetch when this control is clicked, `None` while disabled.
    pub fn request(&self, current: Option<u32>) -> Option<u32> {
        (!self.disabled).then(|| target_page(Some(&self.label), current))
    }
}

/// Resolve the page number a control asks for.
///
/// No label means an initial or refresh load of page 1. `Next`/`Previous`
/// are relative to `current`; any other label is read as a page number.
pub fn target_page(label: Option<&str>, current: Option<u32>) -> u32 {
    let current = current.unwrap_or(0);
    match label.map(str::trim) {
        None => 1,
        Some(NEXT) => current + 1,
        Some(PREVIOUS) => current.saturating_sub(1).max(1),
        Some(number) => number.parse().ok().filter(|n| *n >= 1).unwrap_or(1),
    }
}

//! Feed view model: one page of posts for a [`FeedSource`].

use api::{ApiResult, Credentials, FeedSource, Post, PostPage, PAGE_SIZE};

use crate::pagination::{target_page, PageControl, PageWindow};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedState {
    pub error: Option<String>,
    pub window: Option<PageWindow>,
    pub posts: Vec<Post>,
}

impl FeedState {
    /// Replace the state wholesale with a fetch result. An error drops the
    /// list instead of leaving stale posts behind it.
    pub fn apply_page(&mut self, result: ApiResult<PostPage>) {
        *self = match result {
            Ok(page) => Self {
                error: None,
                window: Some(PageWindow::from(&page)),
                posts: page.posts,
            },
            Err(e) => Self {
                error: Some(e.to_string()),
                ..Self::default()
            },
        };
    }

    /// Page requested by a control label, relative to the shown page.
    pub fn page_for(&self, label: Option<&str>) -> u32 {
        target_page(label, self.window.map(|w| w.page_num))
    }

    /// Put a freshly created post on top, keeping a full page at most.
    pub fn prepend(&mut self, post: Post) {
        self.posts.insert(0, post);
        self.posts.truncate(PAGE_SIZE);
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Pagination controls, empty when there is nothing to paginate.
    pub fn controls(&self) -> Vec<PageControl> {
        match self.window {
            Some(window) if !self.posts.is_empty() => window.controls(),
            _ => Vec::new(),
        }
    }
}

/// The compose panel only sits on top of the global feed, for members.
pub fn shows_compose(source: &FeedSource, credentials: &Credentials) -> bool {
    *source == FeedSource::All && credentials.logged_in
}

use serde::{Deserialize, Serialize};

pub type PostId = u64;

/// One feed item as serialised by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub owner: String,
    pub content: String,
    /// Preformatted by the server, e.g. `"Jan 02 2024, 03:04 PM"`.
    pub date_posted: String,
    pub num_likes: u32,
    pub liked: bool,
}

/// A window of posts returned by the paginated endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPage {
    /// 1-indexed.
    pub page_num: u32,
    pub num_pages: u32,
    pub posts: Vec<Post>,
}

/// Which paginated post list a feed view shows.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FeedSource {
    /// `/api/posts`, every post.
    All,
    /// `/api/posts/following`, posts of followed users only.
    Following,
}

impl FeedSource {
    pub fn path(&self) -> &'static str {
        match self {
            FeedSource::All => "/api/posts",
            FeedSource::Following => "/api/posts/following",
        }
    }

    /// Logical title shown above the feed.
    pub fn title(&self) -> &'static str {
        match self {
            FeedSource::All => "All Posts",
            FeedSource::Following => "Following",
        }
    }
}

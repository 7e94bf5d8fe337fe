//! # Post card shadow state
//!
//! A [`PostCard`] keeps its own copy of the content, like count, like flag
//! and edit mode of one [`Post`] owned by the surrounding feed. Local edits
//! never leak into the feed until saved, and the copy is rebuilt from the
//! feed's post whenever that post changes.
//!
//! Likes are optimistic: a successful `PUT` flips the flag and moves the
//! count by exactly one; the server's view of the count is never read. A
//! failed like only raises the error banner, the displayed fields stay put.

use api::{ApiResult, Credentials, Post, PostId};

#[derive(Debug, Clone, PartialEq)]
pub struct PostCard {
    source: Post,
    pub content: String,
    pub num_likes: u32,
    pub liked: bool,
    pub editing: bool,
    /// Editor buffer while `editing`.
    pub draft: String,
    pub error: Option<String>,
}

/// Outcome a like/unlike click asks for, computed when the click happens.
///
/// Applying an intent sets absolute values, so two overlapping requests from
/// a double click settle on the same state whichever lands last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeIntent {
    pub like: bool,
    pub num_likes: u32,
}

impl PostCard {
    pub fn new(post: &Post) -> Self {
        Self {
            source: post.clone(),
            content: post.content.clone(),
            num_likes: post.num_likes,
            liked: post.liked,
            editing: false,
            draft: String::new(),
            error: None,
        }
    }

    /// Rebuild from `post` if it differs from the post this card was built
    /// from, discarding local edits. Returns whether a reset happened.
    pub fn sync(&mut self, post: &Post) -> bool {
        if self.is_from(post) {
            return false;
        }
        *self = Self::new(post);
        true
    }

    /// Compares the whole post, not just its id: a refetch that returns the
    /// same post with new fields resets the card as well.
    pub fn is_from(&self, post: &Post) -> bool {
        self.source == *post
    }

    pub fn id(&self) -> PostId {
        self.source.id
    }

    pub fn owner(&self) -> &str {
        &self.source.owner
    }

    pub fn date_posted(&self) -> &str {
        &self.source.date_posted
    }

    pub fn can_like(credentials: &Credentials) -> bool {
        credentials.logged_in
    }

    pub fn can_edit(&self, credentials: &Credentials) -> bool {
        credentials.is(&self.source.owner)
    }

    pub fn like_intent(&self) -> LikeIntent {
        if self.liked {
            LikeIntent {
                like: false,
                num_likes: self.num_likes.saturating_sub(1),
            }
        } else {
            LikeIntent {
                like: true,
                num_likes: self.num_likes + 1,
            }
        }
    }

    pub fn apply_like(&mut self, intent: LikeIntent, result: ApiResult<()>) {
        match result {
            Ok(()) => {
                self.liked = intent.like;
                self.num_likes = intent.num_likes;
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub fn begin_edit(&mut self) {
        self.draft = self.content.clone();
        self.editing = true;
    }

    /// Commit `content` on success; on failure stay in edit mode with the error shown.
    pub fn apply_edit(&mut self, content: String, result: ApiResult<()>) {
        match result {
            Ok(()) => {
                self.content = content;
                self.editing = false;
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{ApiError, FeedSource, MemoryBackend, NetworkApi};

    fn post(id: u64, num_likes: u32, liked: bool) -> Post {
        Post {
            id,
            owner: "alice".to_string(),
            content: "hello".to_string(),
            date_posted: "Jan 01 2024, 09:00 AM".to_string(),
            num_likes,
            liked,
        }
    }

    #[test]
    fn test_like_then_unlike() {
        let mut card = PostCard::new(&post(1, 4, false));
        let intent = card.like_intent();
        assert!(intent.like);
        card.apply_like(intent, Ok(()));
        assert!(card.liked);
        assert_eq!(card.num_likes, 5);

        let intent = card.like_intent();
        card.apply_like(intent, Ok(()));
        assert!(!card.liked);
        assert_eq!(card.num_likes, 4);
    }

    #[test]
    fn test_double_click_settles_once() {
        let mut card = PostCard::new(&post(1, 0, false));
        let first = card.like_intent();
        let second = card.like_intent();
        card.apply_like(first, Ok(()));
        card.apply_like(second, Ok(()));
        assert!(card.liked);
        assert_eq!(card.num_likes, 1);
    }

    #[test]
    fn test_failed_like_keeps_display_fields() {
        let mut card = PostCard::new(&post(1, 3, false));
        let intent = card.like_intent();
        card.apply_like(intent, Err(ApiError::message("User is not logged in.")));
        assert_eq!(card.error.as_deref(), Some("User is not logged in."));
        assert_eq!(card.content, "hello");
        assert_eq!(card.num_likes, 3);
        assert!(!card.liked);
    }

    #[test]
    fn test_edit_success_and_failure() {
        let mut card = PostCard::new(&post(1, 0, false));
        card.begin_edit();
        assert!(card.editing);
        assert_eq!(card.draft, "hello");

        card.apply_edit(String::new(), Err(ApiError::message("Invalid post content.")));
        assert!(card.editing);
        assert_eq!(card.error.as_deref(), Some("Invalid post content."));
        assert_eq!(card.content, "hello");

        card.apply_edit("bye".to_string(), Ok(()));
        assert!(!card.editing);
        assert!(card.error.is_none());
        assert_eq!(card.content, "bye");
    }

    #[test]
    fn test_sync_discards_local_state_on_new_post() {
        let original = post(1, 0, false);
        let mut card = PostCard::new(&original);
        card.begin_edit();
        card.draft = "half typed".to_string();

        assert!(!card.sync(&original));
        assert!(card.editing);

        assert!(card.sync(&post(2, 7, true)));
        assert_eq!(card.id(), 2);
        assert!(!card.editing);
        assert_eq!(card.num_likes, 7);
        assert!(card.liked);
    }

    #[test]
    fn test_sync_resets_on_refetched_fields() {
        let mut card = PostCard::new(&post(1, 0, false));
        card.begin_edit();

        assert!(card.sync(&post(1, 3, false)));
        assert_eq!(card.id(), 1);
        assert!(!card.editing);
        assert_eq!(card.num_likes, 3);
    }

    #[test]
    fn test_permissions() {
        let card = PostCard::new(&post(1, 0, false));
        assert!(card.can_edit(&Credentials::user("alice")));
        assert!(!card.can_edit(&Credentials::user("bob")));
        assert!(!card.can_edit(&Credentials::anonymous()));
        assert!(PostCard::can_like(&Credentials::user("bob")));
        assert!(!PostCard::can_like(&Credentials::anonymous()));
    }

    #[tokio::test]
    async fn test_like_and_edit_against_backend() {
        let backend = MemoryBackend::new();
        backend.add_user("alice", "alice@example.com", "pw");
        backend.add_user("bob", "bob@example.com", "pw");
        backend.add_post("alice", "hello");
        backend.sign_in("bob");

        let page = backend.posts(&FeedSource::All, 1).await.unwrap();
        let mut card = PostCard::new(&page.posts[0]);

        let intent = card.like_intent();
        card.apply_like(intent, backend.like_post(card.id(), intent.like).await);
        assert_eq!((card.liked, card.num_likes), (true, 1));

        card.begin_edit();
        let draft = "not yours".to_string();
        let result = backend.edit_post(card.id(), &draft).await;
        card.apply_edit(draft, result);
        assert!(card.editing);
        assert_eq!(
            card.error.as_deref(),
            Some("User cannot edit the post of another user.")
        );

        let page = backend.posts(&FeedSource::All, 1).await.unwrap();
        assert_eq!(page.posts[0].num_likes, card.num_likes);
    }
}

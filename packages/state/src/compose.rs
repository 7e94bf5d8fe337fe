//! New post form.

use api::{ApiResult, Post};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostDraft {
    pub content: String,
    pub error: Option<String>,
}

impl PostDraft {
    /// Clear the form on success and hand the created post to the feed that
    /// owns the list; keep the text and show the error otherwise.
    pub fn apply_created(&mut self, result: ApiResult<Post>) -> Option<Post> {
        match result {
            Ok(post) => {
                *self = Self::default();
                Some(post)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::FeedState;
    use api::{FeedSource, MemoryBackend, NetworkApi};

    #[tokio::test]
    async fn test_created_post_tops_a_full_page() {
        let backend = MemoryBackend::new();
        backend.add_user("alice", "alice@example.com", "pw");
        for n in 1..=12 {
            backend.add_post("alice", &format!("post{n}"));
        }
        backend.sign_in("alice");

        let mut feed = FeedState::default();
        feed.apply_page(backend.posts(&FeedSource::All, 1).await);
        assert_eq!(feed.posts.len(), 10);
        let tenth = feed.posts[9].id;

        let mut draft = PostDraft {
            content: "fresh".to_string(),
            error: None,
        };
        let result = backend.create_post(&draft.content).await;
        if let Some(post) = draft.apply_created(result) {
            feed.prepend(post);
        }

        assert_eq!(draft, PostDraft::default());
        assert_eq!(feed.posts.len(), 10);
        assert_eq!(feed.posts[0].content, "fresh");
        assert!(feed.posts.iter().all(|p| p.id != tenth));
    }

    #[tokio::test]
    async fn test_rejected_post_keeps_text() {
        let backend = MemoryBackend::new();
        let mut draft = PostDraft {
            content: "hello".to_string(),
            error: None,
        };
        let created = draft.apply_created(backend.create_post("hello").await);
        assert!(created.is_none());
        assert_eq!(draft.content, "hello");
        assert_eq!(draft.error.as_deref(), Some("User is not logged in."));
    }
}

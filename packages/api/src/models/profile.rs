use serde::{Deserialize, Serialize};

use super::post::PostPage;

/// Aggregate header of a user's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: u64,
    pub username: String,
    pub num_posts: u32,
    pub num_followers: u32,
    pub num_following: u32,
    /// Whether the viewer follows this user.
    pub followed: bool,
    /// Preformatted by the server, e.g. `"January 2024"`.
    pub date_joined: String,
}

/// `GET /api/{username}?page=N` response: the profile header and one page
/// of that user's posts, flattened into a single object on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePage {
    #[serde(flatten)]
    pub profile: Profile,
    #[serde(flatten)]
    pub page: PostPage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_page_reads_flat_object() {
        let body = r#"{
            "id": 1, "username": "AAA", "num_posts": 2, "num_followers": 2,
            "num_following": 1, "followed": false, "date_joined": "March 2024",
            "posts": [{"id": 2, "content": "post2", "owner": "AAA", "num_likes": 0,
                       "liked": false, "date_posted": "Mar 02 2024, 10:00 AM"}],
            "page_num": 1, "num_pages": 1
        }"#;
        let page: ProfilePage = serde_json::from_str(body).unwrap();
        assert_eq!(page.profile.username, "AAA");
        assert_eq!(page.profile.num_following, 1);
        assert_eq!(page.page.posts.len(), 1);
        assert_eq!(page.page.posts[0].content, "post2");
        assert_eq!(page.page.num_pages, 1);
    }
}

//! # In-memory backend
//!
//! [`MemoryBackend`] implements [`NetworkApi`] and [`MailApi`] against plain
//! collections, following the rules of the real servers: ten posts per page,
//! newest first, the same validation and authorization messages. It also
//! records every request it receives so tests can assert on traffic.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Duration, Utc};

use crate::backend::{MailApi, NetworkApi};
use crate::error::{ApiError, ApiResult, FieldErrors};
use crate::models::{
    Credentials, FeedSource, LoginRequest, Mail, MailId, Mailbox, OutgoingMail, Post, PostId,
    PostPage, Profile, ProfilePage, RegisterRequest,
};

/// Number of posts per page on every paginated endpoint.
pub const PAGE_SIZE: usize = 10;
/// Longest accepted post body, in characters.
pub const MAX_POST_LENGTH: usize = 280;

const NOT_LOGGED_IN: &str = "User is not logged in.";

type UserId = u64;

#[derive(Debug)]
struct User {
    id: UserId,
    username: String,
    email: String,
    password: String,
    followers: BTreeSet<UserId>,
    joined: DateTime<Utc>,
}

#[derive(Debug)]
struct StoredPost {
    id: PostId,
    owner: UserId,
    content: String,
    likers: BTreeSet<UserId>,
    posted: DateTime<Utc>,
}

/// One user's copy of a mail.
#[derive(Debug)]
struct StoredMail {
    id: MailId,
    user: UserId,
    sender: String,
    recipients: Vec<String>,
    subject: String,
    body: String,
    sent: DateTime<Utc>,
    read: bool,
    archived: bool,
}

#[derive(Debug, Default)]
struct State {
    users: Vec<User>,
    posts: Vec<StoredPost>,
    mails: Vec<StoredMail>,
    session: Option<UserId>,
    requests: Vec<String>,
    tick: i64,
}

/// In-memory server for tests and offline demos.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    state: Arc<Mutex<State>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Create an account without signing in.
    pub fn add_user(&self, username: &str, email: &str, password: &str) -> u64 {
        self.state().create_user(username, email, password)
    }

    /// Open a session for `username` without going through `/api/login`.
    pub fn sign_in(&self, username: &str) {
        let mut state = self.state();
        state.session = state.user_by_name(username).map(|u| u.id);
    }

    pub fn sign_out(&self) {
        self.state().session = None;
    }

    /// Publish a post as `owner`; each post is one minute newer than the last.
    pub fn add_post(&self, owner: &str, content: &str) -> Option<PostId> {
        let mut state = self.state();
        let owner = state.user_by_name(owner)?.id;
        Some(state.create_post(owner, content))
    }

    /// Make `follower` follow `username`.
    pub fn add_follower(&self, username: &str, follower: &str) {
        let mut state = self.state();
        let Some(follower) = state.user_by_name(follower).map(|u| u.id) else {
            return;
        };
        if let Some(user) = state.users.iter_mut().find(|u| u.username == username) {
            user.followers.insert(follower);
        }
    }

    /// Every request received so far, formatted as `"METHOD /path"`.
    pub fn requests(&self) -> Vec<String> {
        self.state().requests.clone()
    }

    pub fn clear_requests(&self) {
        self.state().requests.clear();
    }
}

fn now(state: &mut State) -> DateTime<Utc> {
    state.tick += 1;
    // 2024-01-01T00:00:00Z
    DateTime::<Utc>::UNIX_EPOCH + Duration::days(19_723) + Duration::minutes(state.tick)
}

fn paginate<T>(items: Vec<T>, page: u32) -> ApiResult<(Vec<T>, u32)> {
    let num_pages = items.len().div_ceil(PAGE_SIZE).max(1) as u32;
    if page < 1 || page > num_pages {
        return Err(ApiError::message("Page not found."));
    }
    let start = (page as usize - 1) * PAGE_SIZE;
    let window = items.into_iter().skip(start).take(PAGE_SIZE).collect();
    Ok((window, num_pages))
}

fn valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.split('.').count() >= 2
                && domain.split('.').all(|part| !part.is_empty())
        }
        None => false,
    }
}

impl State {
    fn record(&mut self, method: &str, path: impl Into<String>) {
        self.requests.push(format!("{method} {}", path.into()));
    }

    fn user_by_name(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username == username)
    }

    fn user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    fn viewer(&self) -> ApiResult<&User> {
        self.session
            .and_then(|id| self.user(id))
            .ok_or_else(|| ApiError::message(NOT_LOGGED_IN))
    }

    fn credentials(&self) -> Credentials {
        match self.session.and_then(|id| self.user(id)) {
            Some(user) => Credentials::user(&user.username),
            None => Credentials::anonymous(),
        }
    }

    fn create_user(&mut self, username: &str, email: &str, password: &str) -> UserId {
        let id = self.users.len() as UserId + 1;
        let joined = now(self);
        self.users.push(User {
            id,
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            followers: BTreeSet::new(),
            joined,
        });
        id
    }

    fn create_post(&mut self, owner: UserId, content: &str) -> PostId {
        let id = self.posts.len() as PostId + 1;
        let posted = now(self);
        self.posts.push(StoredPost {
            id,
            owner,
            content: content.to_string(),
            likers: BTreeSet::new(),
            posted,
        });
        id
    }

    fn serialize_post(&self, post: &StoredPost) -> Post {
        Post {
            id: post.id,
            owner: self
                .user(post.owner)
                .map(|u| u.username.clone())
                .unwrap_or_default(),
            content: post.content.clone(),
            date_posted: post.posted.format("%b %d %Y, %I:%M %p").to_string(),
            num_likes: post.likers.len() as u32,
            liked: self.session.is_some_and(|id| post.likers.contains(&id)),
        }
    }

    /// Posts matching `keep`, newest first.
    fn post_list(&self, keep: impl Fn(&StoredPost) -> bool) -> Vec<Post> {
        let mut posts: Vec<&StoredPost> = self.posts.iter().filter(|p| keep(p)).collect();
        posts.sort_by(|a, b| b.posted.cmp(&a.posted).then(b.id.cmp(&a.id)));
        posts.into_iter().map(|p| self.serialize_post(p)).collect()
    }

    fn post_page(&self, posts: Vec<Post>, page: u32) -> ApiResult<PostPage> {
        let (posts, num_pages) = paginate(posts, page)?;
        Ok(PostPage {
            page_num: page,
            num_pages,
            posts,
        })
    }

    fn clean_content(content: &str) -> ApiResult<String> {
        let content = content.trim();
        if content.is_empty() || content.chars().count() > MAX_POST_LENGTH {
            return Err(ApiError::message("Invalid post content."));
        }
        Ok(content.to_string())
    }

    fn post_index(&self, id: PostId) -> ApiResult<usize> {
        self.posts
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| ApiError::message("Post not found."))
    }

    fn serialize_mail(mail: &StoredMail) -> Mail {
        Mail {
            id: mail.id,
            sender: mail.sender.clone(),
            recipients: mail.recipients.clone(),
            subject: mail.subject.clone(),
            body: mail.body.clone(),
            timestamp: mail.sent.format("%b %d %Y, %I:%M %p").to_string(),
            read: mail.read,
            archived: mail.archived,
        }
    }

    fn own_mail(&mut self, id: MailId) -> ApiResult<&mut StoredMail> {
        let viewer = self.viewer()?.id;
        self.mails
            .iter_mut()
            .find(|m| m.id == id && m.user == viewer)
            .ok_or_else(|| ApiError::message("Email not found."))
    }
}

impl NetworkApi for MemoryBackend {
    async fn authentication(&self) -> ApiResult<Credentials> {
        let mut state = self.state();
        state.record("GET", "/api/authentication");
        Ok(state.credentials())
    }

    async fn login(&self, request: &LoginRequest) -> ApiResult<Credentials> {
        let mut state = self.state();
        state.record("POST", "/api/login");
        let user = state
            .users
            .iter()
            .find(|u| u.username == request.username && u.password == request.password)
            .map(|u| u.id)
            .ok_or_else(|| ApiError::message("Invalid username and/or password."))?;
        state.session = Some(user);
        Ok(state.credentials())
    }

    async fn register(&self, request: &RegisterRequest) -> ApiResult<Credentials> {
        let mut state = self.state();
        state.record("POST", "/api/register");

        let mut errors = FieldErrors::new();
        for (field, value) in [
            ("username", &request.username),
            ("email", &request.email),
            ("password", &request.password),
            ("confirmation", &request.confirmation),
        ] {
            if value.trim().is_empty() {
                errors.push(field, "This field is required.", "required");
            }
        }
        if !request.username.is_empty() && state.user_by_name(&request.username).is_some() {
            errors.push(
                "username",
                format!("Username {} already taken.", request.username),
                "invalid",
            );
        }
        if !request.email.is_empty() && !valid_email(&request.email) {
            errors.push("email", "Enter a valid email address.", "invalid");
        }
        if !request.password.is_empty()
            && !request.confirmation.is_empty()
            && request.password != request.confirmation
        {
            errors.push(FieldErrors::NON_FIELD, "Passwords must match.", "invalid");
        }
        if !errors.is_empty() {
            return Err(ApiError::Fields(errors));
        }

        let id = state.create_user(&request.username, &request.email, &request.password);
        state.session = Some(id);
        Ok(state.credentials())
    }

    async fn logout(&self) -> ApiResult<Credentials> {
        let mut state = self.state();
        state.record("GET", "/api/logout");
        state.session = None;
        Ok(state.credentials())
    }

    async fn posts(&self, source: &FeedSource, page: u32) -> ApiResult<PostPage> {
        let mut state = self.state();
        state.record("GET", format!("{}?page={page}", source.path()));
        let posts = match source {
            FeedSource::All => state.post_list(|_| true),
            FeedSource::Following => {
                let viewer = state.viewer()?.id;
                let followed: BTreeSet<UserId> = state
                    .users
                    .iter()
                    .filter(|u| u.followers.contains(&viewer))
                    .map(|u| u.id)
                    .collect();
                state.post_list(|p| followed.contains(&p.owner))
            }
        };
        state.post_page(posts, page)
    }

    async fn create_post(&self, content: &str) -> ApiResult<Post> {
        let mut state = self.state();
        state.record("POST", "/api/posts/create");
        let owner = state.viewer()?.id;
        let content = State::clean_content(content)?;
        let id = state.create_post(owner, &content);
        let index = state.post_index(id)?;
        Ok(state.serialize_post(&state.posts[index]))
    }

    async fn like_post(&self, id: PostId, like: bool) -> ApiResult<()> {
        let mut state = self.state();
        state.record("PUT", format!("/api/posts/{id}"));
        let index = state.post_index(id)?;
        let viewer = state.viewer()?.id;
        let likers = &mut state.posts[index].likers;
        if like {
            likers.insert(viewer);
        } else {
            likers.remove(&viewer);
        }
        Ok(())
    }

    async fn edit_post(&self, id: PostId, content: &str) -> ApiResult<()> {
        let mut state = self.state();
        state.record("PUT", format!("/api/posts/{id}"));
        let index = state.post_index(id)?;
        let viewer = state.viewer()?.id;
        let content = State::clean_content(content)?;
        let post = &mut state.posts[index];
        if post.owner != viewer {
            return Err(ApiError::message(
                "User cannot edit the post of another user.",
            ));
        }
        post.content = content;
        Ok(())
    }

    async fn profile(&self, username: &str, page: u32) -> ApiResult<ProfilePage> {
        let mut state = self.state();
        state.record("GET", format!("/api/{username}?page={page}"));
        let user = state
            .user_by_name(username)
            .ok_or_else(|| ApiError::message("User not found."))?;
        let user_id = user.id;
        let profile = Profile {
            id: user.id,
            username: user.username.clone(),
            num_posts: state.posts.iter().filter(|p| p.owner == user_id).count() as u32,
            num_followers: user.followers.len() as u32,
            num_following: state
                .users
                .iter()
                .filter(|u| u.followers.contains(&user_id))
                .count() as u32,
            followed: state.session.is_some_and(|id| user.followers.contains(&id)),
            date_joined: user.joined.format("%B %Y").to_string(),
        };
        let posts = state.post_list(|p| p.owner == user_id);
        let page = state.post_page(posts, page)?;
        Ok(ProfilePage { profile, page })
    }

    async fn follow(&self, username: &str, follow: bool) -> ApiResult<()> {
        let mut state = self.state();
        state.record("PUT", format!("/api/{username}"));
        let target = state
            .user_by_name(username)
            .map(|u| u.id)
            .ok_or_else(|| ApiError::message("User not found."))?;
        let viewer = state.viewer()?.id;
        if target == viewer {
            return Err(ApiError::message("User cannot follow himself."));
        }
        if let Some(user) = state.users.iter_mut().find(|u| u.id == target) {
            if follow {
                user.followers.insert(viewer);
            } else {
                user.followers.remove(&viewer);
            }
        }
        Ok(())
    }
}

impl MailApi for MemoryBackend {
    async fn mailbox(&self, mailbox: Mailbox) -> ApiResult<Vec<Mail>> {
        let mut state = self.state();
        state.record("GET", format!("/emails/{}", mailbox.path_segment()));
        let viewer = state.viewer()?;
        let (id, email) = (viewer.id, viewer.email.clone());
        let mut mails: Vec<&StoredMail> = state
            .mails
            .iter()
            .filter(|m| m.user == id)
            .filter(|m| match mailbox {
                Mailbox::Inbox => m.recipients.contains(&email) && !m.archived,
                Mailbox::Sent => m.sender == email,
                Mailbox::Archive => m.recipients.contains(&email) && m.archived,
            })
            .collect();
        mails.sort_by(|a, b| b.sent.cmp(&a.sent).then(b.id.cmp(&a.id)));
        Ok(mails.into_iter().map(State::serialize_mail).collect())
    }

    async fn send_mail(&self, mail: &OutgoingMail) -> ApiResult<String> {
        let mut state = self.state();
        state.record("POST", "/emails");
        let sender = state.viewer()?;
        let (sender_id, sender_email) = (sender.id, sender.email.clone());

        let recipients = mail.recipient_list();
        if recipients.is_empty() {
            return Err(ApiError::message("At least one recipient required."));
        }
        let mut owners = BTreeSet::from([sender_id]);
        for address in &recipients {
            let user = state
                .users
                .iter()
                .find(|u| &u.email == address)
                .ok_or_else(|| {
                    ApiError::message(format!("User with email {address} does not exist."))
                })?;
            owners.insert(user.id);
        }

        let sent = now(&mut state);
        for owner in owners {
            let id = state.mails.len() as MailId + 1;
            state.mails.push(StoredMail {
                id,
                user: owner,
                sender: sender_email.clone(),
                recipients: recipients.clone(),
                subject: mail.subject.clone(),
                body: mail.body.clone(),
                sent,
                read: owner == sender_id,
                archived: false,
            });
        }
        Ok("Email sent successfully.".to_string())
    }

    async fn set_archived(&self, id: MailId, archived: bool) -> ApiResult<()> {
        let mut state = self.state();
        state.record("PUT", format!("/emails/{id}"));
        state.own_mail(id)?.archived = archived;
        Ok(())
    }

    async fn mark_read(&self, id: MailId) {
        let mut state = self.state();
        state.record("PUT", format!("/emails/{id}"));
        if let Ok(mail) = state.own_mail(id) {
            mail.read = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network() -> MemoryBackend {
        let backend = MemoryBackend::new();
        backend.add_user("AAA", "aaa@example.com", "AAA");
        backend.add_user("BBB", "bbb@example.com", "BBB");
        backend
    }

    #[tokio::test]
    async fn test_posts_paginate_newest_first() {
        let backend = network();
        for n in 1..=12 {
            backend.add_post("AAA", &format!("post{n}"));
        }

        let first = backend.posts(&FeedSource::All, 1).await.unwrap();
        assert_eq!(first.page_num, 1);
        assert_eq!(first.num_pages, 2);
        assert_eq!(first.posts.len(), 10);
        assert_eq!(first.posts[0].content, "post12");

        let second = backend.posts(&FeedSource::All, 2).await.unwrap();
        assert_eq!(second.posts.len(), 2);
        assert_eq!(second.posts[1].content, "post1");

        let err = backend.posts(&FeedSource::All, 3).await.unwrap_err();
        assert_eq!(err, ApiError::message("Page not found."));
    }

    #[tokio::test]
    async fn test_empty_feed_has_one_page() {
        let backend = network();
        let page = backend.posts(&FeedSource::All, 1).await.unwrap();
        assert_eq!(page.num_pages, 1);
        assert!(page.posts.is_empty());
    }

    #[tokio::test]
    async fn test_following_requires_login() {
        let backend = network();
        let err = backend.posts(&FeedSource::Following, 1).await.unwrap_err();
        assert_eq!(err.to_string(), "User is not logged in.");

        backend.add_post("AAA", "from AAA");
        backend.add_post("BBB", "from BBB");
        backend.add_follower("AAA", "BBB");
        backend.sign_in("BBB");
        let page = backend.posts(&FeedSource::Following, 1).await.unwrap();
        assert_eq!(page.posts.len(), 1);
        assert_eq!(page.posts[0].owner, "AAA");
    }

    #[tokio::test]
    async fn test_like_and_edit_rules() {
        let backend = network();
        let id = backend.add_post("AAA", "hello").unwrap();

        assert_eq!(
            backend.like_post(id, true).await.unwrap_err().to_string(),
            "User is not logged in."
        );

        backend.sign_in("BBB");
        backend.like_post(id, true).await.unwrap();
        let page = backend.posts(&FeedSource::All, 1).await.unwrap();
        assert_eq!(page.posts[0].num_likes, 1);
        assert!(page.posts[0].liked);

        let err = backend.edit_post(id, "mine now").await.unwrap_err();
        assert_eq!(err.to_string(), "User cannot edit the post of another user.");

        backend.sign_in("AAA");
        assert_eq!(
            backend.edit_post(id, "   ").await.unwrap_err().to_string(),
            "Invalid post content."
        );
        backend.edit_post(id, "edited").await.unwrap();
        let page = backend.posts(&FeedSource::All, 1).await.unwrap();
        assert_eq!(page.posts[0].content, "edited");
        assert!(!page.posts[0].liked);

        assert_eq!(
            backend.like_post(99, true).await.unwrap_err().to_string(),
            "Post not found."
        );
    }

    #[tokio::test]
    async fn test_profile_counts_and_follow() {
        let backend = network();
        backend.add_user("CCC", "ccc@example.com", "CCC");
        backend.add_post("AAA", "post1");
        backend.add_post("AAA", "post2");
        backend.add_follower("AAA", "BBB");
        backend.add_follower("AAA", "CCC");
        backend.add_follower("BBB", "AAA");

        let page = backend.profile("AAA", 1).await.unwrap();
        assert_eq!(page.profile.num_posts, 2);
        assert_eq!(page.profile.num_followers, 2);
        assert_eq!(page.profile.num_following, 1);
        assert!(!page.profile.followed);
        assert_eq!(page.profile.date_joined, "January 2024");
        assert_eq!(page.page.posts[0].content, "post2");

        assert_eq!(
            backend.profile("DDD", 1).await.unwrap_err().to_string(),
            "User not found."
        );

        backend.sign_in("AAA");
        assert_eq!(
            backend.follow("AAA", true).await.unwrap_err().to_string(),
            "User cannot follow himself."
        );

        backend.sign_in("CCC");
        backend.follow("AAA", false).await.unwrap();
        let page = backend.profile("AAA", 1).await.unwrap();
        assert_eq!(page.profile.num_followers, 1);
        assert!(!page.profile.followed);
    }

    #[tokio::test]
    async fn test_login_register_logout() {
        let backend = network();
        let err = backend
            .login(&LoginRequest {
                username: "AAA".into(),
                password: "wrong".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid username and/or password.");

        let creds = backend
            .login(&LoginRequest {
                username: "AAA".into(),
                password: "AAA".into(),
            })
            .await
            .unwrap();
        assert_eq!(creds, Credentials::user("AAA"));
        assert_eq!(backend.authentication().await.unwrap(), creds);

        assert_eq!(backend.logout().await.unwrap(), Credentials::anonymous());

        let err = backend
            .register(&RegisterRequest {
                username: "AAA".into(),
                email: "new@outlook".into(),
                password: "x".into(),
                confirmation: "y".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.field("username"), Some("Username AAA already taken."));
        assert_eq!(err.field("email"), Some("Enter a valid email address."));
        assert_eq!(err.field(FieldErrors::NON_FIELD), Some("Passwords must match."));

        let creds = backend
            .register(&RegisterRequest {
                username: "DDD".into(),
                email: "ddd@example.com".into(),
                password: "pw".into(),
                confirmation: "pw".into(),
            })
            .await
            .unwrap();
        assert_eq!(creds, Credentials::user("DDD"));
    }

    #[tokio::test]
    async fn test_register_required_fields() {
        let backend = network();
        let err = backend
            .register(&RegisterRequest {
                username: String::new(),
                email: "a@example.com".into(),
                password: "AAA".into(),
                confirmation: "AAA".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.field("username"), Some("This field is required."));
        assert_eq!(err.field("email"), None);
    }

    #[tokio::test]
    async fn test_mail_flow() {
        let backend = network();
        backend.sign_in("AAA");

        let err = backend
            .send_mail(&OutgoingMail {
                recipients: " ".into(),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "At least one recipient required.");

        let err = backend
            .send_mail(&OutgoingMail {
                recipients: "nobody@example.com".into(),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "User with email nobody@example.com does not exist."
        );

        let message = backend
            .send_mail(&OutgoingMail {
                recipients: "bbb@example.com".into(),
                subject: "Budget".into(),
                body: "Numbers attached".into(),
            })
            .await
            .unwrap();
        assert_eq!(message, "Email sent successfully.");

        let sent = backend.mailbox(Mailbox::Sent).await.unwrap();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].read);

        backend.sign_in("BBB");
        let inbox = backend.mailbox(Mailbox::Inbox).await.unwrap();
        assert_eq!(inbox.len(), 1);
        assert!(!inbox[0].read);
        assert_eq!(inbox[0].sender, "aaa@example.com");

        backend.mark_read(inbox[0].id).await;
        backend.set_archived(inbox[0].id, true).await.unwrap();
        assert!(backend.mailbox(Mailbox::Inbox).await.unwrap().is_empty());
        let archive = backend.mailbox(Mailbox::Archive).await.unwrap();
        assert_eq!(archive.len(), 1);
        assert!(archive[0].read);

        // Another user's copy is not reachable.
        assert_eq!(
            backend.set_archived(sent[0].id, true).await.unwrap_err().to_string(),
            "Email not found."
        );
    }

    #[tokio::test]
    async fn test_requests_are_recorded() {
        let backend = network();
        backend.posts(&FeedSource::All, 1).await.unwrap();
        backend.profile("AAA", 1).await.unwrap();
        assert_eq!(
            backend.requests(),
            vec!["GET /api/posts?page=1", "GET /api/AAA?page=1"]
        );
        backend.clear_requests();
        assert!(backend.requests().is_empty());
    }
}

//! # Backend traits
//!
//! [`NetworkApi`] covers the social network endpoints and [`MailApi`] the
//! webmail endpoints. Implementations live in sibling modules:
//! [`crate::http::HttpClient`] talks to a real server,
//! [`crate::memory::MemoryBackend`] reproduces the server rules in memory.
//!
//! | Method | Request |
//! |--------|---------|
//! | [`authentication`](NetworkApi::authentication) | `GET /api/authentication` |
//! | [`login`](NetworkApi::login) | `POST /api/login` |
//! | [`register`](NetworkApi::register) | `POST /api/register` |
//! | [`logout`](NetworkApi::logout) | `GET /api/logout` |
//! | [`posts`](NetworkApi::posts) | `GET /api/posts?page=N`, `GET /api/posts/following?page=N` |
//! | [`create_post`](NetworkApi::create_post) | `POST /api/posts/create` |
//! | [`like_post`](NetworkApi::like_post) / [`edit_post`](NetworkApi::edit_post) | `PUT /api/posts/{id}` |
//! | [`profile`](NetworkApi::profile) | `GET /api/{username}?page=N` |
//! | [`follow`](NetworkApi::follow) | `PUT /api/{username}` |
//! | [`mailbox`](MailApi::mailbox) | `GET /emails/{mailbox}` |
//! | [`send_mail`](MailApi::send_mail) | `POST /emails` |
//! | [`set_archived`](MailApi::set_archived) / [`mark_read`](MailApi::mark_read) | `PUT /emails/{id}` |
//!
//! Every request is a single attempt: no retry, no timeout, no cancellation.

use std::future::Future;

use crate::error::ApiResult;
use crate::models::{
    Credentials, FeedSource, LoginRequest, Mail, MailId, Mailbox, OutgoingMail, Post, PostId,
    PostPage, ProfilePage, RegisterRequest,
};

/// Social network endpoints.
pub trait NetworkApi {
    fn authentication(&self) -> impl Future<Output = ApiResult<Credentials>>;
    fn login(&self, request: &LoginRequest) -> impl Future<Output = ApiResult<Credentials>>;
    fn register(&self, request: &RegisterRequest)
        -> impl Future<Output = ApiResult<Credentials>>;
    fn logout(&self) -> impl Future<Output = ApiResult<Credentials>>;

    fn posts(&self, source: &FeedSource, page: u32) -> impl Future<Output = ApiResult<PostPage>>;
    fn create_post(&self, content: &str) -> impl Future<Output = ApiResult<Post>>;
    /// Only the absence of an error matters; the server sends no new count.
    fn like_post(&self, id: PostId, like: bool) -> impl Future<Output = ApiResult<()>>;
    fn edit_post(&self, id: PostId, content: &str) -> impl Future<Output = ApiResult<()>>;

    fn profile(&self, username: &str, page: u32) -> impl Future<Output = ApiResult<ProfilePage>>;
    fn follow(&self, username: &str, follow: bool) -> impl Future<Output = ApiResult<()>>;
}

/// Webmail endpoints.
pub trait MailApi {
    fn mailbox(&self, mailbox: Mailbox) -> impl Future<Output = ApiResult<Vec<Mail>>>;
    /// Returns the server's confirmation message.
    fn send_mail(&self, mail: &OutgoingMail) -> impl Future<Output = ApiResult<String>>;
    fn set_archived(&self, id: MailId, archived: bool) -> impl Future<Output = ApiResult<()>>;
    /// Best-effort notification. Failures are logged, never reported.
    fn mark_read(&self, id: MailId) -> impl Future<Output = ()>;
}

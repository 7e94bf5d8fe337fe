//! # API crate — HTTP contract of the social network and webmail servers
//!
//! The servers are external collaborators; this crate is everything the
//! front-ends know about them.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Wire models: credentials, posts and pages, profiles, mail |
//! | [`error`] | [`ApiError`]: single-message and per-field error bodies |
//! | [`config`] | [`ClientConfig`]: base URL, CSRF cookie/header, mail identity |
//! | [`backend`] | [`NetworkApi`] and [`MailApi`] traits |
//! | [`http`] | [`HttpClient`], the reqwest implementation |
//! | [`memory`] | [`MemoryBackend`], an in-memory server used by tests |

pub mod backend;
pub mod config;
pub mod error;
pub mod http;
pub mod memory;
pub mod models;

pub use backend::{MailApi, NetworkApi};
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult, FieldErrors, FieldMessage};
pub use http::HttpClient;
pub use memory::{MemoryBackend, PAGE_SIZE};
pub use models::{
    Credentials, FeedSource, LoginRequest, Mail, MailId, Mailbox, OutgoingMail, Post, PostId,
    PostPage, Profile, ProfilePage, RegisterRequest,
};

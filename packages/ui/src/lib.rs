//! This crate contains all shared UI for the workspace: the social network
//! views, the webmail components and the contexts they both rely on.

mod client;
pub use client::{use_client, ClientProvider};

mod session;
pub use session::{reload_page, use_session, SessionProvider};

mod alert;
pub use alert::Alert;

mod pagination;
pub use pagination::Pagination;

mod post_card;
pub use post_card::PostCard;

mod new_post;
pub use new_post::NewPost;

mod navbar;
pub use navbar::Navigation;

pub mod views;
pub use views::{FeedView, LoginView, ProfileView, RegisterView};

pub mod mail;
pub use mail::MailApp;

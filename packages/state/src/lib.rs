//! View models for the social network and webmail clients.
//!
//! Everything here is synchronous and rendering-agnostic: a component reads
//! the state, issues the request the state asks for through an `api` client,
//! and hands the result back to one of the `apply_*` reducers. Each piece of
//! state has exactly one owner; children report back through callbacks.

mod compose;
mod feed;
mod forms;
mod mailbox;
mod pagination;
mod post_card;
mod profile;
mod session;

pub use compose::PostDraft;
pub use feed::{shows_compose, FeedState};
pub use forms::{LoginForm, RegisterForm};
pub use mailbox::{
    preview_address, reply_subject, Banner, BannerKind, Draft, MailState, MailView, MailboxFetch,
    MailboxQuery,
};
pub use pagination::{target_page, PageControl, PageWindow, NEXT, PREVIOUS};
pub use post_card::{LikeIntent, PostCard};
pub use profile::{FollowIntent, ProfileState};
pub use session::{document_title, nav_items, Access, NavItem, SessionState};

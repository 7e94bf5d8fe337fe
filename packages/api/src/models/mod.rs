//! Wire models exchanged with the social network and webmail servers.

mod credentials;
mod mail;
mod post;
mod profile;

pub use credentials::{Credentials, LoginRequest, RegisterRequest};
pub use mail::{Mail, MailId, Mailbox, OutgoingMail};
pub use post::{FeedSource, Post, PostId, PostPage};
pub use profile::{Profile, ProfilePage};

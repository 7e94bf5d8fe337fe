//! Webmail components.
//!
//! [`MailApp`] owns the whole [`MailState`](state::MailState). The children
//! get plain values and report back through callbacks; only
//! [`MailboxList`] and [`ComposeMail`] talk to the server themselves, and
//! they hand the result to the owner too.

mod app;
pub use app::MailApp;

mod navigation;
pub use navigation::MailNavigation;

mod mailbox_list;
pub use mailbox_list::{MailPreview, MailboxList};

mod detail;
pub use detail::MailDetail;

mod compose;
pub use compose::ComposeMail;

const BUTTON: &str = "btn btn-sm btn-outline-primary";

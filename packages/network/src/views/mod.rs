//! Route components. Each one applies the route's access rule and hands off
//! to the shared view in `ui`.

use dioxus::prelude::*;
use state::Access;

use crate::Route;

mod feeds;
pub use feeds::{Following, Home};

mod profile;
pub use profile::Profile;

mod account;
pub use account::{Login, Register};

/// Whether the route may render. Replaces the route with `/` when the
/// session says the viewer does not belong here; renders nothing while the
/// session is still loading.
fn use_access(access: Access) -> bool {
    let session = ui::use_session();
    let nav = use_navigator();

    let session = session();
    if session.loading {
        return false;
    }
    if access.redirect(&session).is_some() {
        nav.replace(Route::Home {});
        return false;
    }
    true
}

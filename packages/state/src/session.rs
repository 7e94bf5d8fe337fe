//! Session state, navigation links and route access rules.

use api::Credentials;

/// Viewer identity for the lifetime of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub credentials: Credentials,
    /// True until the bootstrap request to `/api/authentication` settles.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            credentials: Credentials::anonymous(),
            loading: true,
        }
    }
}

impl SessionState {
    pub fn loaded(credentials: Credentials) -> Self {
        Self {
            credentials,
            loading: false,
        }
    }

    pub fn logged_in(&self) -> bool {
        self.credentials.logged_in
    }

    pub fn username(&self) -> Option<&str> {
        self.credentials.username.as_deref()
    }
}

/// Who may see a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    /// Login and register pages.
    GuestOnly,
    /// The followed-users feed.
    MembersOnly,
}

impl Access {
    /// Path to redirect to, if the viewer may not see the route.
    ///
    /// Nothing redirects while the session is still loading.
    pub fn redirect(&self, session: &SessionState) -> Option<&'static str> {
        if session.loading {
            return None;
        }
        match (self, session.logged_in()) {
            (Access::GuestOnly, true) | (Access::MembersOnly, false) => Some("/"),
            _ => None,
        }
    }
}

/// Entries of the top navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavItem {
    OwnProfile(String),
    AllPosts,
    Following,
    LogOut,
    LogIn,
    Register,
}

impl NavItem {
    pub fn label(&self) -> &str {
        match self {
            NavItem::OwnProfile(username) => username,
            NavItem::AllPosts => "All Posts",
            NavItem::Following => "Following",
            NavItem::LogOut => "Log Out",
            NavItem::LogIn => "Log In",
            NavItem::Register => "Register",
        }
    }

    pub fn path(&self) -> String {
        match self {
            NavItem::OwnProfile(username) => format!("/{username}"),
            NavItem::AllPosts => "/".to_string(),
            NavItem::Following => "/following".to_string(),
            NavItem::LogOut => "/logout".to_string(),
            NavItem::LogIn => "/login".to_string(),
            NavItem::Register => "/register".to_string(),
        }
    }
}

pub fn nav_items(credentials: &Credentials) -> Vec<NavItem> {
    match (&credentials.username, credentials.logged_in) {
        (Some(username), true) => vec![
            NavItem::OwnProfile(username.clone()),
            NavItem::AllPosts,
            NavItem::Following,
            NavItem::LogOut,
        ],
        _ => vec![NavItem::AllPosts, NavItem::LogIn, NavItem::Register],
    }
}

pub fn document_title(title: &str) -> String {
    format!("Social Network - {title}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guest_only_redirects_members() {
        let member = SessionState::loaded(Credentials::user("alice"));
        let guest = SessionState::loaded(Credentials::anonymous());
        assert_eq!(Access::GuestOnly.redirect(&member), Some("/"));
        assert_eq!(Access::GuestOnly.redirect(&guest), None);
        assert_eq!(Access::MembersOnly.redirect(&guest), Some("/"));
        assert_eq!(Access::MembersOnly.redirect(&member), None);
        assert_eq!(Access::Public.redirect(&guest), None);
    }

    #[test]
    fn test_no_redirect_while_loading() {
        let loading = SessionState::default();
        assert_eq!(Access::MembersOnly.redirect(&loading), None);
    }

    #[test]
    fn test_nav_items() {
        let items = nav_items(&Credentials::user("alice"));
        let labels: Vec<_> = items.iter().map(NavItem::label).collect();
        assert_eq!(labels, vec!["alice", "All Posts", "Following", "Log Out"]);
        assert_eq!(items[0].path(), "/alice");

        let items = nav_items(&Credentials::anonymous());
        let paths: Vec<_> = items.iter().map(NavItem::path).collect();
        assert_eq!(paths, vec!["/", "/login", "/register"]);
    }
}

//! Profile view model: aggregate header, follow toggle and the user's feed.

use api::{ApiResult, Credentials, Profile, ProfilePage};

use crate::feed::FeedState;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileState {
    /// Username from the route, known before the first response arrives.
    pub username: String,
    pub error: Option<String>,
    pub profile: Option<Profile>,
    pub feed: FeedState,
    /// Failure of the last follow/unfollow, shown without hiding the header.
    pub follow_error: Option<String>,
}

/// Outcome a follow/unfollow click asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FollowIntent {
    pub follow: bool,
    pub num_followers: u32,
}

impl ProfileState {
    /// Fresh state for `username`, discarding whatever was shown before.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Self::default()
        }
    }

    pub fn is_for(&self, username: &str) -> bool {
        self.username == username
    }

    /// Follow the route to `username`. A different user resets the state and
    /// asks for page 1; the user already shown asks for nothing.
    pub fn navigate(&mut self, username: &str) -> Option<u32> {
        if self.is_for(username) {
            return None;
        }
        *self = Self::new(username);
        Some(self.page_for(None))
    }

    pub fn apply_page(&mut self, result: ApiResult<ProfilePage>) {
        match result {
            Ok(page) => {
                self.error = None;
                self.follow_error = None;
                self.profile = Some(page.profile);
                self.feed.apply_page(Ok(page.page));
            }
            Err(e) => {
                self.error = Some(e.to_string());
                self.profile = None;
                self.feed = FeedState::default();
            }
        }
    }

    pub fn page_for(&self, label: Option<&str>) -> u32 {
        self.feed.page_for(label)
    }

    /// Members may follow anyone but themselves.
    pub fn can_follow(&self, credentials: &Credentials) -> bool {
        credentials.logged_in && !credentials.is(&self.username)
    }

    pub fn follow_intent(&self) -> Option<FollowIntent> {
        let profile = self.profile.as_ref()?;
        Some(if profile.followed {
            FollowIntent {
                follow: false,
                num_followers: profile.num_followers.saturating_sub(1),
            }
        } else {
            FollowIntent {
                follow: true,
                num_followers: profile.num_followers + 1,
            }
        })
    }

    pub fn apply_follow(&mut self, intent: FollowIntent, result: ApiResult<()>) {
        match (result, self.profile.as_mut()) {
            (Ok(()), Some(profile)) => {
                profile.followed = intent.follow;
                profile.num_followers = intent.num_followers;
                self.follow_error = None;
            }
            (Ok(()), None) => {}
            (Err(e), _) => self.follow_error = Some(e.to_string()),
        }
    }

    pub fn follow_label(&self) -> &'static str {
        match &self.profile {
            Some(profile) if profile.followed => "Unfollow",
            _ => "Follow",
        }
    }

    /// Document title: the username, or the error without its final period.
    pub fn title(&self) -> String {
        match &self.error {
            Some(error) => error.strip_suffix('.').unwrap_or(error).to_string(),
            None => self.username.clone(),
        }
    }
}

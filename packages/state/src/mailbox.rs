//! Webmail view model. One [`MailState`] owns everything the client shows:
//! the current view, the loaded mailbox, the open mail, the compose draft and
//! the banner.

use api::{ApiResult, Mail, MailId, Mailbox, OutgoingMail};

/// What the main pane shows.
#[derive(Debug, Clone, PartialEq)]
pub enum MailView {
    Mailbox(Mailbox),
    Compose,
    Detail(Mail),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Danger,
}

impl BannerKind {
    pub fn class(&self) -> &'static str {
        match self {
            BannerKind::Success => "alert alert-success",
            BannerKind::Danger => "alert alert-danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
}

impl Banner {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Success,
            message: message.into(),
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Danger,
            message: message.into(),
        }
    }
}

/// Compose buffer. `sender` is fixed for the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub sender: String,
    pub recipients: String,
    pub subject: String,
    pub body: String,
}

impl Draft {
    pub fn new(sender: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            ..Self::default()
        }
    }

    pub fn reply_to(sender: impl Into<String>, mail: &Mail) -> Self {
        Self {
            sender: sender.into(),
            recipients: mail.sender.clone(),
            subject: reply_subject(&mail.subject),
            body: format!("On {} {} wrote: \n{}", mail.timestamp, mail.sender, mail.body),
        }
    }

    pub fn clear(&mut self) {
        self.recipients.clear();
        self.subject.clear();
        self.body.clear();
    }

    pub fn outgoing(&self) -> OutgoingMail {
        OutgoingMail {
            recipients: self.recipients.clone(),
            subject: self.subject.clone(),
            body: self.body.clone(),
        }
    }
}

pub fn reply_subject(subject: &str) -> String {
    if subject.starts_with("Re:") {
        subject.to_string()
    } else {
        format!("Re: {subject}")
    }
}

/// Address column of a preview row.
pub fn preview_address(mail: &Mail, mailbox: Mailbox) -> String {
    match mailbox {
        Mailbox::Sent => format!("To: {}", mail.recipients.join(", ")),
        _ => format!("From: {}", mail.sender),
    }
}

/// What the mailbox list is asked to show. Selecting the same mailbox again
/// flips `reload`, so the query still changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MailboxQuery {
    pub mailbox: Mailbox,
    pub reload: bool,
}

/// Last query the mailbox list fetched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MailboxFetch {
    last: Option<MailboxQuery>,
}

impl MailboxFetch {
    /// Mailbox to fetch for `query`, `None` when it was fetched already.
    pub fn next(&mut self, query: MailboxQuery) -> Option<Mailbox> {
        if self.last == Some(query) {
            return None;
        }
        self.last = Some(query);
        Some(query.mailbox)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MailState {
    pub view: MailView,
    /// Mailbox the open mail was picked from.
    pub previous: Option<Mailbox>,
    pub mails: Vec<Mail>,
    pub draft: Draft,
    pub banner: Option<Banner>,
    /// Flipped on every explicit mailbox selection to force a refetch.
    pub reload: bool,
}

impl MailState {
    pub fn new(sender: impl Into<String>) -> Self {
        Self {
            view: MailView::Mailbox(Mailbox::Inbox),
            previous: None,
            mails: Vec::new(),
            draft: Draft::new(sender),
            banner: None,
            reload: false,
        }
    }

    pub fn current_mailbox(&self) -> Option<Mailbox> {
        match self.view {
            MailView::Mailbox(mailbox) => Some(mailbox),
            _ => None,
        }
    }

    /// Query for the mailbox list, `None` outside the mailbox view.
    pub fn query(&self) -> Option<MailboxQuery> {
        self.current_mailbox().map(|mailbox| MailboxQuery {
            mailbox,
            reload: self.reload,
        })
    }

    pub fn open_mail(&self) -> Option<&Mail> {
        match &self.view {
            MailView::Detail(mail) => Some(mail),
            _ => None,
        }
    }

    pub fn select_mailbox(&mut self, mailbox: Mailbox) {
        self.view = MailView::Mailbox(mailbox);
        self.reload = !self.reload;
        self.banner = None;
    }

    pub fn compose(&mut self) {
        self.view = MailView::Compose;
    }

    pub fn mails_loaded(&mut self, result: ApiResult<Vec<Mail>>) {
        match result {
            Ok(mails) => self.mails = mails,
            Err(e) => {
                self.mails.clear();
                self.banner = Some(Banner::danger(e.to_string()));
            }
        }
    }

    /// Switch to the detail view, returning the id to mark as read.
    pub fn view_mail(&mut self, mail: Mail) -> MailId {
        let id = mail.id;
        self.previous = self.current_mailbox();
        self.view = MailView::Detail(mail);
        id
    }

    /// Mails opened from Sent cannot be archived.
    pub fn shows_archive_button(&self) -> bool {
        self.previous != Some(Mailbox::Sent)
    }

    pub fn archive_label(&self) -> &'static str {
        match self.open_mail() {
            Some(mail) if mail.archived => "Unarchive",
            _ => "Archive",
        }
    }

    /// Mail id and the `archived` flag a click asks for.
    pub fn archive_intent(&self) -> Option<(MailId, bool)> {
        self.open_mail().map(|mail| (mail.id, !mail.archived))
    }

    pub fn apply_archived(&mut self, archived: bool, result: ApiResult<()>) {
        match result {
            Ok(()) => {
                let done = if archived { "archived" } else { "unarchived" };
                self.view = MailView::Mailbox(Mailbox::Inbox);
                self.banner = Some(Banner::success(format!(
                    "Email has been {done} successfully."
                )));
            }
            Err(e) => self.banner = Some(Banner::danger(e.to_string())),
        }
    }

    pub fn reply(&mut self) {
        let Some(draft) = self
            .open_mail()
            .map(|mail| Draft::reply_to(self.draft.sender.clone(), mail))
        else {
            return;
        };
        self.draft = draft;
        self.view = MailView::Compose;
    }

    /// Successful sends land on Sent; failures keep the draft.
    pub fn apply_sent(&mut self, result: ApiResult<String>) {
        match result {
            Ok(message) => {
                self.draft.clear();
                self.view = MailView::Mailbox(Mailbox::Sent);
                self.banner = Some(Banner::success(message));
            }
            Err(e) => self.banner = Some(Banner::danger(e.to_string())),
        }
    }

    pub fn title(&self) -> &'static str {
        match &self.view {
            MailView::Mailbox(mailbox) => mailbox.name(),
            MailView::Compose => "New Email",
            MailView::Detail(_) => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{ApiError, MailApi, MemoryBackend};

    fn mail(subject: &str) -> Mail {
        Mail {
            id: 7,
            sender: "bob@example.com".to_string(),
            recipients: vec!["alice@example.com".to_string(), "carol@example.com".to_string()],
            subject: subject.to_string(),
            body: "Numbers attached.".to_string(),
            timestamp: "Jan 01 2024, 12:00 AM".to_string(),
            read: false,
            archived: false,
        }
    }

    #[test]
    fn test_reply_prefixes_subject_once() {
        let mut state = MailState::new("alice@example.com");
        state.view_mail(mail("Budget"));
        state.reply();
        assert_eq!(state.view, MailView::Compose);
        assert_eq!(state.draft.subject, "Re: Budget");
        assert_eq!(state.draft.recipients, "bob@example.com");
        assert_eq!(state.draft.sender, "alice@example.com");
        assert_eq!(
            state.draft.body,
            "On Jan 01 2024, 12:00 AM bob@example.com wrote: \nNumbers attached."
        );

        state.view_mail(mail("Re: Budget"));
        state.reply();
        assert_eq!(state.draft.subject, "Re: Budget");
    }

    #[test]
    fn test_preview_address() {
        let mail = mail("Budget");
        assert_eq!(
            preview_address(&mail, Mailbox::Sent),
            "To: alice@example.com, carol@example.com"
        );
        assert_eq!(preview_address(&mail, Mailbox::Inbox), "From: bob@example.com");
    }

    #[test]
    fn test_select_mailbox_toggles_reload_and_clears_banner() {
        let mut state = MailState::new("alice@example.com");
        state.banner = Some(Banner::success("done"));
        state.select_mailbox(Mailbox::Inbox);
        assert!(state.reload);
        assert!(state.banner.is_none());
        state.select_mailbox(Mailbox::Inbox);
        assert!(!state.reload);
        assert_eq!(state.title(), "Inbox");
    }

    async fn refresh(state: &mut MailState, fetch: &mut MailboxFetch, backend: &MemoryBackend) {
        let Some(mailbox) = state.query().and_then(|query| fetch.next(query)) else {
            return;
        };
        state.mails_loaded(backend.mailbox(mailbox).await);
    }

    #[tokio::test]
    async fn test_mailbox_fetches_follow_the_query() {
        let backend = MemoryBackend::new();
        backend.add_user("alice", "alice@example.com", "pw");
        backend.sign_in("alice");
        let mut state = MailState::new("alice@example.com");
        let mut fetch = MailboxFetch::default();

        refresh(&mut state, &mut fetch, &backend).await;
        refresh(&mut state, &mut fetch, &backend).await;
        assert_eq!(backend.requests(), vec!["GET /emails/inbox"]);

        state.select_mailbox(Mailbox::Inbox);
        refresh(&mut state, &mut fetch, &backend).await;
        state.select_mailbox(Mailbox::Sent);
        refresh(&mut state, &mut fetch, &backend).await;
        state.compose();
        refresh(&mut state, &mut fetch, &backend).await;
        assert_eq!(
            backend.requests(),
            vec!["GET /emails/inbox", "GET /emails/inbox", "GET /emails/sent"]
        );
    }

    #[test]
    fn test_archive_hidden_for_sent_mail() {
        let mut state = MailState::new("alice@example.com");
        state.select_mailbox(Mailbox::Sent);
        state.view_mail(mail("Budget"));
        assert!(!state.shows_archive_button());

        state.select_mailbox(Mailbox::Archive);
        state.view_mail(mail("Budget"));
        assert!(state.shows_archive_button());
    }

    #[test]
    fn test_archive_failure_stays_on_mail() {
        let mut state = MailState::new("alice@example.com");
        state.view_mail(mail("Budget"));
        let (_, archived) = state.archive_intent().unwrap();
        state.apply_archived(archived, Err(ApiError::message("Email not found.")));
        assert!(state.open_mail().is_some());
        assert_eq!(state.banner, Some(Banner::danger("Email not found.")));
    }

    #[tokio::test]
    async fn test_send_archive_round_trip() {
        let backend = MemoryBackend::new();
        backend.add_user("alice", "alice@example.com", "pw");
        backend.add_user("bob", "bob@example.com", "pw");
        backend.sign_in("alice");

        let mut state = MailState::new("alice@example.com");
        state.compose();
        state.draft.recipients = "nobody@example.com".to_string();
        state.draft.subject = "Hi".to_string();
        state.apply_sent(backend.send_mail(&state.draft.outgoing()).await);
        assert_eq!(state.view, MailView::Compose);
        assert_eq!(state.draft.subject, "Hi");
        assert_eq!(
            state.banner,
            Some(Banner::danger("User with email nobody@example.com does not exist."))
        );

        state.draft.recipients = "bob@example.com".to_string();
        state.apply_sent(backend.send_mail(&state.draft.outgoing()).await);
        assert_eq!(state.current_mailbox(), Some(Mailbox::Sent));
        assert_eq!(state.banner, Some(Banner::success("Email sent successfully.")));
        assert!(state.draft.subject.is_empty());

        backend.sign_out();
        backend.sign_in("bob");
        let mut state = MailState::new("bob@example.com");
        state.mails_loaded(backend.mailbox(Mailbox::Inbox).await);
        assert_eq!(state.mails.len(), 1);
        assert!(!state.mails[0].read);

        let id = state.view_mail(state.mails[0].clone());
        backend.mark_read(id).await;
        assert_eq!(state.archive_label(), "Archive");
        let (id, archived) = state.archive_intent().unwrap();
        state.apply_archived(archived, backend.set_archived(id, archived).await);
        assert_eq!(state.current_mailbox(), Some(Mailbox::Inbox));
        assert_eq!(
            state.banner,
            Some(Banner::success("Email has been archived successfully."))
        );

        state.mails_loaded(backend.mailbox(Mailbox::Inbox).await);
        assert!(state.mails.is_empty());
        state.mails_loaded(backend.mailbox(Mailbox::Archive).await);
        assert!(state.mails[0].read);
        assert!(state.mails[0].archived);
    }
}

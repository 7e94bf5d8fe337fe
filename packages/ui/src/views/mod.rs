mod feed;
pub use feed::FeedView;

mod profile;
pub use profile::ProfileView;

mod login;
pub use login::LoginView;

mod register;
pub use register::RegisterView;

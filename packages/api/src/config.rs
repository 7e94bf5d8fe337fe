//! # Client configuration — `client.toml`
//!
//! Everything the clients used to read from ambient page content (the CSRF
//! cookie, the signed-in mail address, the logout URL) is gathered once at
//! bootstrap into a [`ClientConfig`] and handed to the components explicitly.
//!
//! ## Structure
//!
//! ```toml
//! base_url = "http://localhost:8000"
//!
//! [csrf]
//! cookie = "csrftoken"      # cookie holding the token
//! header = "X-CSRFToken"    # header sent on state-changing requests
//! token = "..."             # optional, usually read from the cookie
//!
//! [mail]
//! user_email = "me@example.com"
//! logout_url = "/logout"
//! ```
//!
//! ## Sources
//!
//! | Constructor | Where values come from |
//! |-------------|------------------------|
//! | [`ClientConfig::from_toml`] | a TOML document |
//! | [`ClientConfig::from_env`] | `client.toml` if present, then `CLIENT_*` environment variables, `.env` honoured (native only) |
//! | [`ClientConfig::from_document`] | page origin, CSRF cookie and `#user-email` / `#logout_url` JSON script tags (wasm only) |
//!
//! Missing values fall back to [`ClientConfig::default`].

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Origin the API paths are resolved against.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub csrf: CsrfConfig,
    #[serde(default)]
    pub mail: MailConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CsrfConfig {
    #[serde(default = "default_csrf_cookie")]
    pub cookie: String,
    #[serde(default = "default_csrf_header")]
    pub header: String,
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MailConfig {
    /// Address of the signed-in mail user, shown as the draft sender.
    #[serde(default)]
    pub user_email: String,
    #[serde(default = "default_logout_url")]
    pub logout_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_csrf_cookie() -> String {
    "csrftoken".to_string()
}

fn default_csrf_header() -> String {
    "X-CSRFToken".to_string()
}

fn default_logout_url() -> String {
    "/logout".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            csrf: CsrfConfig::default(),
            mail: MailConfig::default(),
        }
    }
}

impl Default for CsrfConfig {
    fn default() -> Self {
        Self {
            cookie: default_csrf_cookie(),
            header: default_csrf_header(),
            token: None,
        }
    }
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            user_email: String::new(),
            logout_url: default_logout_url(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_csrf_token(mut self, token: impl Into<String>) -> Self {
        self.csrf.token = Some(token.into());
        self
    }

    pub fn with_user_email(mut self, email: impl Into<String>) -> Self {
        self.mail.user_email = email.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "client.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Start from `client.toml` in the working directory when present, then
    /// apply `CLIENT_BASE_URL`, `CLIENT_CSRF_TOKEN`, `CLIENT_USER_EMAIL` and
    /// `CLIENT_LOGOUT_URL`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = std::fs::read_to_string(Self::filename())
            .ok()
            .and_then(|text| match Self::from_toml(&text) {
                Ok(config) => Some(config),
                Err(e) => {
                    tracing::warn!("Ignoring invalid {}: {}", Self::filename(), e);
                    None
                }
            })
            .unwrap_or_default();
        if let Ok(url) = std::env::var("CLIENT_BASE_URL") {
            config.base_url = url;
        }
        if let Ok(token) = std::env::var("CLIENT_CSRF_TOKEN") {
            config.csrf.token = Some(token);
        }
        if let Ok(email) = std::env::var("CLIENT_USER_EMAIL") {
            config.mail.user_email = email;
        }
        if let Ok(url) = std::env::var("CLIENT_LOGOUT_URL") {
            config.mail.logout_url = url;
        }
        config
    }

    /// Build from the hosting page.
    #[cfg(target_arch = "wasm32")]
    pub fn from_document() -> Self {
        use wasm_bindgen::JsCast;

        let mut config = Self::default();
        let Some(window) = web_sys::window() else {
            return config;
        };
        if let Ok(origin) = window.location().origin() {
            config.base_url = origin;
        }
        let Some(document) = window.document() else {
            return config;
        };
        if let Ok(html) = document.clone().dyn_into::<web_sys::HtmlDocument>() {
            if let Ok(cookies) = html.cookie() {
                config.csrf.token = cookie_value(&cookies, &config.csrf.cookie);
            }
        }
        if let Some(email) = json_script(&document, "user-email") {
            config.mail.user_email = email;
        }
        if let Some(url) = json_script(&document, "logout_url") {
            config.mail.logout_url = url;
        }
        config
    }
}

#[cfg(target_arch = "wasm32")]
fn json_script(document: &web_sys::Document, id: &str) -> Option<String> {
    let text = document.get_element_by_id(id)?.text_content()?;
    serde_json::from_str(&text).ok()
}

/// Look up `name` in a `document.cookie` style string and percent-decode it.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix(name)?.strip_prefix('='))
        .and_then(|value| urlencoding::decode(value).ok())
        .map(|value| value.into_owned())
}

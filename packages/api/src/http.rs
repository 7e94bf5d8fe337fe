//! Reqwest-backed implementation of [`NetworkApi`] and [`MailApi`].
//!
//! Works natively and in the browser (reqwest compiles to `fetch` on
//! `wasm32`). State-changing requests carry the CSRF header from
//! [`ClientConfig::csrf`]; GETs never do.

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;

use crate::backend::{MailApi, NetworkApi};
use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{
    Credentials, FeedSource, LoginRequest, Mail, MailId, Mailbox, OutgoingMail, Post, PostId,
    PostPage, ProfilePage, RegisterRequest,
};

#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpClient {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Use a preconfigured `reqwest::Client`.
    pub fn with_client(client: reqwest::Client, config: ClientConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn read(&self, path: &str) -> RequestBuilder {
        tracing::debug!(method = "GET", path, "api request");
        self.client.get(self.url(path))
    }

    fn write(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!(method = %method, path, "api request");
        let builder = self.client.request(method, self.url(path));
        match &self.config.csrf.token {
            Some(token) => builder.header(self.config.csrf.header.as_str(), token),
            None => builder,
        }
    }

    async fn send(builder: RequestBuilder) -> ApiResult<Response> {
        let response = builder.send().await.map_err(|e| {
            tracing::error!("request failed: {}", e);
            ApiError::from(e)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await?;
        let err = ApiError::from_body(&body);
        tracing::warn!(%status, error = %err, "request rejected");
        Err(err)
    }

    async fn json<T: DeserializeOwned>(builder: RequestBuilder) -> ApiResult<T> {
        let response = Self::send(builder).await?;
        Ok(response.json::<T>().await?)
    }

    async fn ack(builder: RequestBuilder) -> ApiResult<()> {
        Self::send(builder).await.map(|_| ())
    }
}

fn profile_path(username: &str) -> String {
    format!("/api/{}", urlencoding::encode(username))
}

impl NetworkApi for HttpClient {
    async fn authentication(&self) -> ApiResult<Credentials> {
        Self::json(self.read("/api/authentication")).await
    }

    async fn login(&self, request: &LoginRequest) -> ApiResult<Credentials> {
        Self::json(self.write(Method::POST, "/api/login").json(request)).await
    }

    async fn register(&self, request: &RegisterRequest) -> ApiResult<Credentials> {
        Self::json(self.write(Method::POST, "/api/register").json(request)).await
    }

    async fn logout(&self) -> ApiResult<Credentials> {
        Self::json(self.read("/api/logout")).await
    }

    async fn posts(&self, source: &FeedSource, page: u32) -> ApiResult<PostPage> {
        Self::json(self.read(&format!("{}?page={}", source.path(), page))).await
    }

    async fn create_post(&self, content: &str) -> ApiResult<Post> {
        let body = json!({ "content": content });
        Self::json(self.write(Method::POST, "/api/posts/create").json(&body)).await
    }

    async fn like_post(&self, id: PostId, like: bool) -> ApiResult<()> {
        let body = json!({ "like": like });
        Self::ack(self.write(Method::PUT, &format!("/api/posts/{id}")).json(&body)).await
    }

    async fn edit_post(&self, id: PostId, content: &str) -> ApiResult<()> {
        let body = json!({ "content": content });
        Self::ack(self.write(Method::PUT, &format!("/api/posts/{id}")).json(&body)).await
    }

    async fn profile(&self, username: &str, page: u32) -> ApiResult<ProfilePage> {
        Self::json(self.read(&format!("{}?page={}", profile_path(username), page))).await
    }

    async fn follow(&self, username: &str, follow: bool) -> ApiResult<()> {
        let body = json!({ "follow": follow });
        Self::ack(self.write(Method::PUT, &profile_path(username)).json(&body)).await
    }
}

impl MailApi for HttpClient {
    async fn mailbox(&self, mailbox: Mailbox) -> ApiResult<Vec<Mail>> {
        Self::json(self.read(&format!("/emails/{}", mailbox.path_segment()))).await
    }

    async fn send_mail(&self, mail: &OutgoingMail) -> ApiResult<String> {
        #[derive(Deserialize)]
        struct Sent {
            message: String,
        }

        let sent: Sent = Self::json(self.write(Method::POST, "/emails").json(mail)).await?;
        Ok(sent.message)
    }

    async fn set_archived(&self, id: MailId, archived: bool) -> ApiResult<()> {
        let body = json!({ "archived": archived });
        Self::ack(self.write(Method::PUT, &format!("/emails/{id}")).json(&body)).await
    }

    async fn mark_read(&self, id: MailId) {
        let body = json!({ "read": true });
        let request = self.write(Method::PUT, &format!("/emails/{id}")).json(&body);
        if let Err(e) = Self::ack(request).await {
            tracing::debug!(mail = id, "mark as read not applied: {}", e);
        }
    }
}

//! REST client for the members endpoints.

use std::future::Future;

use serde::Deserialize;

use crate::models::{Member, NewMember};

/// Base URL of the members API, fixed at compile time through `LAB_API_BASE_URL`.
pub const API_BASE_URL: &str = match option_env!("LAB_API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:8080",
};

/// Error type for members API calls.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a usable response: network failure or a
    /// success body that could not be decoded.
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("request failed with status {status}: {}", .message.as_deref().unwrap_or_default())]
    Application { status: u16, message: Option<String> },
}

impl ClientError {
    /// The server-provided message, for application failures.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Application { message, .. } => message.as_deref(),
            ClientError::Transport(_) => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::Transport(e.to_string())
    }
}

/// The operations the members page needs from its backend.
pub trait MembersBackend {
    fn list_members(&self) -> impl Future<Output = Result<Vec<Member>, ClientError>>;
    fn create_member(&self, member: NewMember) -> impl Future<Output = Result<(), ClientError>>;
    fn delete_member(&self, id: i64) -> impl Future<Output = Result<(), ClientError>>;
}

/// HTTP client for `/api/members`.
#[derive(Clone, Debug)]
pub struct MembersClient {
    client: reqwest::Client,
    base_url: String,
}

impl Default for MembersClient {
    fn default() -> Self {
        Self::new(API_BASE_URL)
    }
}

impl MembersClient {
    /// Create a client against `base_url` (scheme, host and port, no path).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn members_url(&self) -> String {
        format!("{}/api/members", self.base_url)
    }

    fn member_url(&self, id: i64) -> String {
        format!("{}/api/members/{id}", self.base_url)
    }

    fn multipart_form(member: NewMember) -> Result<reqwest::multipart::Form, ClientError> {
        let mut form = reqwest::multipart::Form::new()
            .text("name", member.name)
            .text("position", member.position.as_str().to_string())
            .text("research", member.research)
            .text("email", member.email);

        if let Some(image) = member.image {
            let mut part = reqwest::multipart::Part::bytes(image.bytes).file_name(image.file_name);
            if let Some(content_type) = image.content_type.filter(|c| !c.is_empty()) {
                part = part.mime_str(&content_type)?;
            }
            form = form.part("image", part);
        }

        Ok(form)
    }
}

impl MembersBackend for MembersClient {
    async fn list_members(&self) -> Result<Vec<Member>, ClientError> {
        let response = self.client.get(self.members_url()).send().await?;
        let response = ensure_success(response).await?;
        Ok(response.json().await?)
    }

    async fn create_member(&self, member: NewMember) -> Result<(), ClientError> {
        let form = Self::multipart_form(member)?;
        let response = self
            .client
            .post(self.members_url())
            .multipart(form)
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn delete_member(&self, id: i64) -> Result<(), ClientError> {
        let response = self.client.delete(self.member_url(id)).send().await?;
        ensure_success(response).await?;
        Ok(())
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Classify a non-success response from its status and body.
///
/// A JSON body becomes [`ClientError::Application`] carrying its `message`
/// field, if any. A body that is not JSON at all (a proxy error page, say)
/// counts as a transport failure.
pub fn error_from_body(status: u16, body: &str) -> ClientError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => ClientError::Application {
            status,
            message: parsed.message,
        },
        Err(e) => ClientError::Transport(format!("undecodable error body (status {status}): {e}")),
    }
}

async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await?;
    Err(error_from_body(status.as_u16(), &body))
}

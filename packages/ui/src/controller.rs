//! # Members controller
//!
//! Sequences every user-triggered operation of the members page against a
//! [`MembersBackend`] and a [`Prompt`], independent of the rendering layer:
//!
//! | Operation | Requests | On success | On failure |
//! |-----------|----------|-----------|------------|
//! | [`load`](MembersController::load) | `GET` | new list | logged, `None` |
//! | [`add`](MembersController::add) | `POST`, then `GET` | notice, re-fetched list | server message or generic notice |
//! | [`remove`](MembersController::remove) | confirmation, `DELETE`, then `GET` | notice, re-fetched list | server message or generic notice |
//!
//! Mutations never touch the list locally; the only way a change becomes
//! visible is the re-fetch that follows a successful request. Nothing is
//! retried, and concurrent operations are not serialised: each triggers its own
//! re-fetch and the last one to finish wins.

use api::{ClientError, Member, MembersBackend, MembersClient, NewMember};

use crate::prompt::{BrowserPrompt, Prompt};

pub const ADD_SUCCESS: &str = "Member added successfully.";
pub const ADD_FAILURE: &str = "Failed to add member";
pub const DELETE_SUCCESS: &str = "Member deleted successfully.";
pub const DELETE_FAILURE: &str = "Failed to delete member";
const SERVER_ERROR: &str = "server error";

/// The controller the page runs with: the configured API and browser prompts.
pub type BrowserController = MembersController<MembersClient, BrowserPrompt>;

/// Result of a create or delete.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    /// The server accepted the change. Carries the re-fetched directory, or
    /// `None` when the re-fetch itself failed.
    Applied(Option<Vec<Member>>),
    /// The server rejected the change or could not be reached.
    Failed,
    /// The user declined the confirmation. Nothing was sent.
    Cancelled,
}

/// Drives the members page operations.
#[derive(Clone, Debug)]
pub struct MembersController<B, P> {
    backend: B,
    prompt: P,
}

impl BrowserController {
    pub fn browser() -> Self {
        Self::new(MembersClient::default(), BrowserPrompt)
    }
}

impl<B: MembersBackend, P: Prompt> MembersController<B, P> {
    pub fn new(backend: B, prompt: P) -> Self {
        Self { backend, prompt }
    }

    /// Fetch the directory. Failures are logged and yield `None`, leaving the
    /// caller's current list in place.
    pub async fn load(&self) -> Option<Vec<Member>> {
        match self.backend.list_members().await {
            Ok(members) => {
                tracing::debug!(count = members.len(), "loaded members");
                Some(members)
            }
            Err(e) => {
                tracing::error!("Failed to load members: {}", e);
                None
            }
        }
    }

    /// Submit a new member, then re-fetch the directory.
    pub async fn add(&self, member: NewMember) -> Mutation {
        match self.backend.create_member(member).await {
            Ok(()) => {
                self.prompt.alert(ADD_SUCCESS);
                Mutation::Applied(self.load().await)
            }
            Err(e) => {
                self.report(ADD_FAILURE, &e);
                Mutation::Failed
            }
        }
    }

    /// Delete a member after the user confirms, then re-fetch the directory.
    pub async fn remove(&self, id: i64, name: &str) -> Mutation {
        if !self.prompt.confirm(&format!("Delete member {name}?")) {
            return Mutation::Cancelled;
        }
        match self.backend.delete_member(id).await {
            Ok(()) => {
                self.prompt.alert(DELETE_SUCCESS);
                Mutation::Applied(self.load().await)
            }
            Err(e) => {
                self.report(DELETE_FAILURE, &e);
                Mutation::Failed
            }
        }
    }

    fn report(&self, action: &str, error: &ClientError) {
        match error {
            ClientError::Application { .. } => {
                tracing::warn!("{}: {}", action, error);
                let message = error.server_message().unwrap_or_default();
                self.prompt.alert(&format!("{action}: {message}"));
            }
            ClientError::Transport(_) => {
                tracing::error!("{}: {}", action, error);
                self.prompt.alert(&format!("{action}: {SERVER_ERROR}"));
            }
        }
    }
}

//! # Lab member records
//!
//! Defines every representation of a lab member that crosses a crate or network
//! boundary:
//!
//! ## [`MemberRow`] (server only)
//!
//! The complete row from the `members` table, loaded with [`sqlx::FromRow`]. The
//! `image` column stores a relative upload path such as `profile/kim.jpg`, or an
//! empty string when no image was uploaded. [`MemberRow::to_member`] projects it
//! into a [`Member`], turning a stored image path into the absolute URL path the
//! browser can load (`/profile/kim.jpg`).
//!
//! ## [`Member`]
//!
//! The record returned by `GET /api/members`. Deserialization is tolerant: text
//! fields that are missing default to an empty string and `image` may be absent
//! or `null`. Only `id` is mandatory.
//!
//! ## [`Position`]
//!
//! The role of a member. The wire format is a free-text string; [`Position`]
//! gives it a closed interpretation with two known roles and an explicit
//! catch-all, [`Position::Other`], for every other value, the empty string
//! included. Matching is exact and case-sensitive.
//!
//! ## [`NewMember`]
//!
//! The creation command sent as a multipart body to `POST /api/members`, with an
//! optional in-memory [`ImageUpload`].

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use sqlx::FromRow;

/// Image shown when a member has no uploaded picture.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Full member row from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct MemberRow {
    pub id: i64,
    pub name: String,
    pub position: String,
    pub research: String,
    pub email: String,
    pub image: String,
}

#[cfg(feature = "server")]
impl MemberRow {
    /// Convert to a Member for client consumption.
    pub fn to_member(&self) -> Member {
        let image = if self.image.is_empty() {
            String::new()
        } else {
            format!("/{}", self.image)
        };
        Member {
            id: self.id,
            name: self.name.clone(),
            position: self.position.clone(),
            research: self.research.clone(),
            email: self.email.clone(),
            image: Some(image),
        }
    }
}

/// A lab member as listed by the directory endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub research: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl Member {
    /// The member's position, interpreted.
    pub fn role(&self) -> Position {
        Position::parse(&self.position)
    }

    /// Image URL to render, falling back to the placeholder.
    pub fn image_src(&self) -> &str {
        self.image
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(PLACEHOLDER_IMAGE)
    }
}

/// Role of a lab member.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Position {
    /// `"Master's Student"`
    MastersStudent,
    /// `"Undergraduate Researcher"`
    UndergraduateResearcher,
    /// Any other value, kept verbatim.
    Other(String),
}

impl Position {
    pub const MASTERS_STUDENT: &'static str = "Master's Student";
    pub const UNDERGRADUATE_RESEARCHER: &'static str = "Undergraduate Researcher";

    /// Interpret a position string. Exact, case-sensitive match.
    pub fn parse(s: &str) -> Self {
        match s {
            Self::MASTERS_STUDENT => Self::MastersStudent,
            Self::UNDERGRADUATE_RESEARCHER => Self::UndergraduateResearcher,
            other => Self::Other(other.to_string()),
        }
    }

    /// The wire string for this position.
    pub fn as_str(&self) -> &str {
        match self {
            Self::MastersStudent => Self::MASTERS_STUDENT,
            Self::UndergraduateResearcher => Self::UNDERGRADUATE_RESEARCHER,
            Self::Other(s) => s,
        }
    }

    /// Positions offered by the creation form.
    pub fn selectable() -> [Position; 2] {
        [Self::MastersStudent, Self::UndergraduateResearcher]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An image file picked in the creation form, read into memory.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Command to create a member.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMember {
    pub name: String,
    pub position: Position,
    pub research: String,
    pub email: String,
    pub image: Option<ImageUpload>,
}

/// `{ "message": ... }` body returned by every mutating endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

impl ApiMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

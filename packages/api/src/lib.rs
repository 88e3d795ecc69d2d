//! # API crate: members model, client, and backend
//!
//! Shared by the UI and the web binary. Everything outside the `server`
//! feature compiles for WASM.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`models`] | - | `Member`, `Position`, `NewMember`, the hard-coded `Professor`; the server-only `MemberRow` |
//! | [`directory`] | - | Grouping of members into the page's categories |
//! | [`client`] | - | `MembersBackend` trait, the `reqwest` based `MembersClient`, `ClientError` |
//! | [`db`] | `server` | PostgreSQL pool (lazy `OnceCell` singleton) and migrations |
//! | [`server`] | `server` | axum routes for `/api/members`, image uploads, config, `ServerError` |

pub mod client;
pub mod db;
pub mod directory;
pub mod models;
#[cfg(feature = "server")]
pub mod server;

pub use client::{ClientError, MembersBackend, MembersClient, API_BASE_URL};
pub use directory::{group_members, Category, MemberGroup};
pub use models::{ApiMessage, ImageUpload, Member, NewMember, Position, Professor, PROFESSOR};

//! # Database module: PostgreSQL connection pool and migrations
//!
//! Provides the shared PostgreSQL pool behind the members endpoints. It is
//! entirely gated behind `#[cfg(feature = "server")]` so that client (WASM)
//! builds never pull in SQLx or Tokio networking code.
//!
//! ## Design
//!
//! The pool is a **lazy, process-wide singleton** backed by a
//! [`tokio::sync::OnceCell`]. The first call to [`get_pool`] connects with the
//! URL and connection limit from [`crate::server::ServerConfig`] and caches the
//! result for all subsequent callers.
//!
//! ## Re-exports
//!
//! - [`get_pool`]: returns `&'static PgPool`, initialising it on first use.
//! - [`migrate`]: applies the embedded migrations in `packages/api/migrations`.

#[cfg(feature = "server")]
mod pool;

#[cfg(feature = "server")]
pub use pool::{get_pool, migrate};

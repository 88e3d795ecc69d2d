//! Database models and the client-facing records built from them.

pub mod member;
pub mod professor;

pub use member::{ApiMessage, ImageUpload, Member, NewMember, Position};
pub use professor::{Professor, PROFESSOR};

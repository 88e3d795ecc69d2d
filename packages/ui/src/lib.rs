//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const MEMBERS_CSS: Asset = asset!("/assets/members.css");

mod admin;
pub use admin::{use_admin, AdminProvider};

pub mod controller;
pub use controller::{BrowserController, MembersController, Mutation};

mod prompt;
pub use prompt::{BrowserPrompt, Prompt};

mod professor_card;
pub use professor_card::ProfessorCard;

mod member_card;
pub use member_card::MemberCard;

mod add_member_dialog;
pub use add_member_dialog::AddMemberDialog;

mod join_us;
pub use join_us::JoinUs;

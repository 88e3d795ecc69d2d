//! The members page: professor, grouped directory, admin controls.

use api::{group_members, Member, NewMember, PROFESSOR};
use dioxus::prelude::*;

use crate::controller::{BrowserController, Mutation};
use crate::icons::FaPlus;
use crate::views::ModalOverlay;
use crate::{use_admin, AddMemberDialog, Icon, JoinUs, MemberCard, ProfessorCard};

/// What the members page renders from: the directory and whether the add
/// panel is open.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectoryState {
    pub members: Vec<Member>,
    pub adding: bool,
}

impl DirectoryState {
    /// Take a fetched directory. A failed fetch keeps the current list.
    pub fn loaded(&mut self, members: Option<Vec<Member>>) {
        if let Some(members) = members {
            self.members = members;
        }
    }

    /// Take the outcome of a create. Success closes the panel and takes the
    /// re-fetched list, even when the panel was already closed by hand while the
    /// request was running. Failure leaves everything as it was.
    pub fn added(&mut self, outcome: Mutation) {
        if let Mutation::Applied(members) = outcome {
            self.adding = false;
            self.loaded(members);
        }
    }

    /// Take the outcome of a delete.
    pub fn removed(&mut self, outcome: Mutation) {
        if let Mutation::Applied(members) = outcome {
            self.loaded(members);
        }
    }
}

/// Members page body. Needs an [`AdminProvider`](crate::AdminProvider) above it.
///
/// Uses a [`BrowserController`] from context when an ancestor provides one,
/// otherwise one for the configured API. Requests are spawned in this
/// component's scope so they outlive the add dialog.
#[component]
pub fn MembersSection() -> Element {
    let admin = use_admin();
    let controller = use_hook(|| {
        try_consume_context::<BrowserController>().unwrap_or_else(BrowserController::browser)
    });
    let mut state = use_signal(DirectoryState::default);

    // Fetch the directory once the page is live
    let loader = controller.clone();
    use_effect(move || {
        let controller = loader.clone();
        spawn(async move {
            let members = controller.load().await;
            state.write().loaded(members);
        });
    });

    let adder = controller.clone();
    let handle_add = use_callback(move |member: NewMember| {
        let controller = adder.clone();
        spawn(async move {
            let outcome = controller.add(member).await;
            state.write().added(outcome);
        });
    });

    let handle_delete = use_callback(move |(id, name): (i64, String)| {
        let controller = controller.clone();
        spawn(async move {
            let outcome = controller.remove(id, &name).await;
            state.write().removed(outcome);
        });
    });

    let is_admin = admin().is_admin;
    let adding = state.read().adding;
    let groups = group_members(&state.read().members);

    rsx! {
        section {
            class: "members",
            div {
                class: "members-header",
                h2 { "Members" }
                div { class: "members-rule" }
                p { "Meet the researchers of IST Lab." }
            }

            if is_admin {
                div {
                    class: "members-toolbar",
                    button {
                        class: "button button-primary",
                        onclick: move |_| state.write().adding = true,
                        Icon { icon: FaPlus, width: 14, height: 14 }
                        "Add member"
                    }
                }
            }

            ProfessorCard { professor: PROFESSOR }

            div {
                class: "members-block",
                h3 { class: "members-subheading", "Researchers" }
                for group in groups {
                    div {
                        key: "{group.category.heading()}",
                        class: "member-group",
                        h4 { "{group.category.heading()}" }
                        div {
                            class: "member-grid",
                            for member in group.members {
                                MemberCard {
                                    key: "{member.id}",
                                    member: member.clone(),
                                    is_admin,
                                    on_delete: handle_delete,
                                }
                            }
                        }
                    }
                }
            }

            JoinUs {}
        }

        if is_admin && adding {
            ModalOverlay {
                on_close: move |_| state.write().adding = false,
                AddMemberDialog {
                    on_submit: handle_add,
                    on_cancel: move |_| state.write().adding = false,
                }
            }
        }
    }
}

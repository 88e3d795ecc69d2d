use api::Member;
use dioxus::prelude::*;

use crate::icons::{FaEnvelope, FaGraduationCap, FaTrash};
use crate::Icon;

/// A directory entry. The delete control only exists for admins.
#[component]
pub fn MemberCard(member: Member, is_admin: bool, on_delete: EventHandler<(i64, String)>) -> Element {
    let id = member.id;
    let name = member.name.clone();

    rsx! {
        div {
            class: "member-card",
            if is_admin {
                button {
                    class: "member-delete",
                    title: "Delete member",
                    onclick: move |_| on_delete.call((id, name.clone())),
                    Icon { icon: FaTrash, width: 14, height: 14 }
                }
            }
            div {
                class: "member-photo",
                img { src: "{member.image_src()}", alt: "{member.name}" }
            }
            h5 { class: "member-name", "{member.name}" }
            p { class: "member-position", "{member.position}" }
            div {
                class: "card-details",
                div {
                    class: "card-detail",
                    Icon { icon: FaGraduationCap, width: 14, height: 14 }
                    span {
                        strong { "Research: " }
                        "{member.research}"
                    }
                }
                div {
                    class: "card-detail",
                    Icon { icon: FaEnvelope, width: 14, height: 14 }
                    span { "{member.email}" }
                }
            }
        }
    }
}

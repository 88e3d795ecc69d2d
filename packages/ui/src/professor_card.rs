use api::Professor;
use dioxus::prelude::*;

use crate::icons::{FaEnvelope, FaGraduationCap};
use crate::Icon;

/// The professor's profile card. Always rendered, independent of the directory.
#[component]
pub fn ProfessorCard(professor: Professor) -> Element {
    rsx! {
        div {
            class: "members-block",
            h3 { class: "members-subheading", "Professor" }
            div {
                class: "professor-row",
                div {
                    class: "professor-card",
                    div {
                        class: "professor-photo",
                        img { src: professor.image, alt: professor.name }
                    }
                    h4 { class: "professor-name", "{professor.name}" }
                    p { class: "professor-title", "{professor.title}" }
                    div {
                        class: "card-details",
                        div {
                            class: "card-detail",
                            Icon { icon: FaGraduationCap, width: 14, height: 14 }
                            span {
                                strong { "Research: " }
                                "{professor.research}"
                            }
                        }
                        div {
                            class: "card-detail",
                            Icon { icon: FaEnvelope, width: 14, height: 14 }
                            span { "{professor.email}" }
                        }
                    }
                }
            }
        }
    }
}

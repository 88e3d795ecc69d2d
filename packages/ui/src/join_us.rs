use dioxus::prelude::*;

/// Recruitment banner at the bottom of the page.
#[component]
pub fn JoinUs() -> Element {
    rsx! {
        div {
            class: "join-us",
            h3 { class: "members-subheading", "Join Our Team" }
            p { "IST Lab is looking for new researchers to study and grow with us." }
            div {
                class: "join-us-actions",
                button { class: "button button-primary", "Graduate admissions" }
                button { class: "button button-outline", "Undergraduate research" }
            }
        }
    }
}

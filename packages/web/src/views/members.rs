//! The members page.

use dioxus::prelude::*;
use ui::views::MembersSection;

#[component]
pub fn Members() -> Element {
    rsx! {
        document::Title { "Members | IST Lab" }
        MembersSection {}
    }
}

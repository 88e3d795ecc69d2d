//! # Directory grouping
//!
//! Partitions the fetched member list into the categories rendered on the page.
//! Groups come out in a fixed order (Master's Students, Undergraduate
//! Researchers, Other Members) regardless of how many members each holds, and a
//! group with no members is dropped. Within a group members keep the order the
//! server returned them in.

use crate::models::{Member, Position};

/// A rendered section of the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    MastersStudents,
    UndergraduateResearchers,
    OtherMembers,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 3] = [
        Category::MastersStudents,
        Category::UndergraduateResearchers,
        Category::OtherMembers,
    ];

    /// Section heading.
    pub fn heading(self) -> &'static str {
        match self {
            Category::MastersStudents => "Master's Students",
            Category::UndergraduateResearchers => "Undergraduate Researchers",
            Category::OtherMembers => "Other Members",
        }
    }

    /// Category a position falls into. Unknown positions land in `OtherMembers`.
    pub fn of(position: &Position) -> Self {
        match position {
            Position::MastersStudent => Category::MastersStudents,
            Position::UndergraduateResearcher => Category::UndergraduateResearchers,
            Position::Other(_) => Category::OtherMembers,
        }
    }
}

/// A non-empty category with its members.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberGroup {
    pub category: Category,
    pub members: Vec<Member>,
}

/// Group members by category, in display order, omitting empty groups.
pub fn group_members(members: &[Member]) -> Vec<MemberGroup> {
    Category::ALL
        .into_iter()
        .filter_map(|category| {
            let members: Vec<Member> = members
                .iter()
                .filter(|m| Category::of(&m.role()) == category)
                .cloned()
                .collect();
            (!members.is_empty()).then_some(MemberGroup { category, members })
        })
        .collect()
}

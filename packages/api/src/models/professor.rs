//! The lab's professor. Hard-coded, never fetched or persisted.

/// Static profile shown above the member directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Professor {
    pub name: &'static str,
    pub title: &'static str,
    pub image: &'static str,
    pub research: &'static str,
    pub email: &'static str,
}

pub const PROFESSOR: Professor = Professor {
    name: "정동원",
    title: "Professor",
    image: "/profile/professor.jpg",
    research: "정보과학기술, Database",
    email: "professor@kunsan.ac.kr",
};

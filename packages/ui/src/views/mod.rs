mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod members;
pub use members::{DirectoryState, MembersSection};

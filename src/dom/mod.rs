pub mod document;
pub mod html;

pub use document::{Document, NodeId, NodeKind, SELECT_MENU_ID};

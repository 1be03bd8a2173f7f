pub mod events;
pub mod listeners;
pub mod toggle;

pub use events::{ChangeEvent, ClickEvent};
pub use listeners::ListenerManager;
pub use toggle::{
    on_toggle_comments, toggle_comments_button_label, toggle_comments_section_visibility, Toggled,
};

use crate::domain::model::PostId;
use crate::dom::{Document, NodeId};
use crate::render::comments::HIDDEN_CLASS;
use crate::render::posts::{HIDE_COMMENTS, SHOW_COMMENTS};
use crate::ui::events::ClickEvent;

/// Attribute set on a click target once a toggle handler has seen it.
pub const LISTENER_MARK: &str = "data-listener";

/// What a comments toggle touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggled {
    pub section: Option<NodeId>,
    pub button: Option<NodeId>,
}

pub fn toggle_comments_section_visibility(
    doc: &mut Document,
    post_id: Option<PostId>,
) -> Option<NodeId> {
    let post_id = post_id.filter(|id| *id != 0)?;
    let section = doc.query_by_data_post_id("section", &post_id.to_string())?;
    doc.toggle_class(section, HIDDEN_CLASS);
    Some(section)
}

pub fn toggle_comments_button_label(doc: &mut Document, post_id: Option<PostId>) -> Option<NodeId> {
    let post_id = post_id.filter(|id| *id != 0)?;
    let button = doc.query_by_data_post_id("button", &post_id.to_string())?;
    let label = if doc.text_content(button) == SHOW_COMMENTS {
        HIDE_COMMENTS
    } else {
        SHOW_COMMENTS
    };
    doc.set_text_content(button, label);
    Some(button)
}

pub fn on_toggle_comments(
    doc: &mut Document,
    event: Option<&ClickEvent>,
    post_id: Option<PostId>,
) -> Option<Toggled> {
    let event = event?;
    let post_id = post_id.filter(|id| *id != 0)?;
    doc.set_attribute(event.target, LISTENER_MARK, "true");
    let section = toggle_comments_section_visibility(doc, Some(post_id));
    let button = toggle_comments_button_label(doc, Some(post_id));
    Some(Toggled { section, button })
}

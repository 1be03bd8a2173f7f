use crate::domain::model::User;
use crate::dom::{Document, NodeId, SELECT_MENU_ID};

pub const DEFAULT_TAG: &str = "p";

/// Creates `tag` (a paragraph when `None`) holding `text`, with `class_name`
/// set only when given.
pub fn build_text_element(
    doc: &mut Document,
    tag: Option<&str>,
    text: Option<&str>,
    class_name: Option<&str>,
) -> NodeId {
    let element = doc.create_element(tag.unwrap_or(DEFAULT_TAG));
    if let Some(class_name) = class_name.filter(|c| !c.is_empty()) {
        doc.set_attribute(element, "class", class_name);
    }
    doc.set_text_content(element, text.unwrap_or_default());
    element
}

pub fn build_select_options(doc: &mut Document, users: Option<&[User]>) -> Option<Vec<NodeId>> {
    let users = users?;
    let options = users
        .iter()
        .map(|user| {
            let option = doc.create_element("option");
            doc.set_attribute(option, "value", &user.id.to_string());
            doc.set_text_content(option, &user.name);
            option
        })
        .collect();
    Some(options)
}

/// Appends one option per user to `#selectMenu` and returns the menu.
pub fn populate_select_menu(doc: &mut Document, users: Option<&[User]>) -> Option<NodeId> {
    let users = users?;
    let select = doc.get_element_by_id(SELECT_MENU_ID)?;
    let options = build_select_options(doc, Some(users))?;
    doc.append_all(select, &options);
    tracing::debug!("Added {} employees to the select menu", options.len());
    Some(select)
}

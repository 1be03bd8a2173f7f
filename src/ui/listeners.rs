use crate::domain::model::PostId;
use crate::dom::{Document, NodeId};
use crate::ui::events::ClickEvent;
use crate::ui::toggle::{on_toggle_comments, Toggled};
use std::collections::HashMap;
use std::sync::Arc;

pub type ClickHandler = Arc<dyn Fn(&mut Document, &ClickEvent) -> Option<Toggled> + Send + Sync>;

/// Click handlers for the "Show Comments" buttons, keyed by post id so that
/// detaching always finds the handler that was attached.
#[derive(Default)]
pub struct ListenerManager {
    handlers: HashMap<PostId, ClickHandler>,
}

impl std::fmt::Debug for ListenerManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut ids: Vec<&PostId> = self.handlers.keys().collect();
        ids.sort();
        f.debug_struct("ListenerManager").field("post_ids", &ids).finish()
    }
}

fn button_post_id(doc: &Document, button: NodeId) -> Option<PostId> {
    doc.data(button, "post_id")?
        .parse()
        .ok()
        .filter(|id| *id != 0)
}

fn main_buttons(doc: &Document) -> Vec<NodeId> {
    doc.first_by_tag("main")
        .map(|main| doc.descendants_by_tag(main, "button"))
        .unwrap_or_default()
}

impl ListenerManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a toggle handler for every button in `<main>`. Attaching
    /// twice for the same post replaces the earlier handler.
    pub fn attach_button_listeners(&mut self, doc: &Document) -> Vec<NodeId> {
        let buttons = main_buttons(doc);
        for button in &buttons {
            let Some(post_id) = button_post_id(doc, *button) else {
                tracing::debug!("Skipping button without a post id");
                continue;
            };
            let handler: ClickHandler = Arc::new(move |doc: &mut Document, event: &ClickEvent| {
                on_toggle_comments(doc, Some(event), Some(post_id))
            });
            self.handlers.insert(post_id, handler);
        }
        tracing::debug!("Attached {} button listeners", self.handlers.len());
        buttons
    }

    /// Removes the handlers of every button currently in `<main>`.
    pub fn detach_button_listeners(&mut self, doc: &Document) -> Vec<NodeId> {
        let buttons = main_buttons(doc);
        for button in &buttons {
            if let Some(post_id) = button_post_id(doc, *button) {
                self.handlers.remove(&post_id);
            }
        }
        buttons
    }

    /// Delivers a click on `button` to its handler, if one is attached.
    pub fn dispatch_click(&self, doc: &mut Document, button: NodeId) -> Option<Toggled> {
        let post_id = button_post_id(doc, button)?;
        let handler = self.handlers.get(&post_id)?;
        handler(doc, &ClickEvent { target: button })
    }

    pub fn is_attached(&self, post_id: PostId) -> bool {
        self.handlers.contains_key(&post_id)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

use crate::dom::NodeId;

/// A click delivered to an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent {
    pub target: NodeId,
}

/// A change of the employee select menu. `value` is the selected option's
/// value, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeEvent {
    pub value: Option<String>,
}

impl ChangeEvent {
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }
}

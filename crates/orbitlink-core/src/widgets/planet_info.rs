//! Info panel contents for the focused node.

use crate::content::{Action, ContentNode};

/// A rendered call-to-action link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionLink {
    pub label: String,
    pub href: String,
    pub target: &'static str,
    pub rel: &'static str,
}

impl From<&Action> for ActionLink {
    fn from(action: &Action) -> Self {
        Self {
            label: action.label.clone(),
            href: if action.href.is_empty() {
                "#".to_string()
            } else {
                action.href.clone()
            },
            target: if action.external { "_blank" } else { "_self" },
            rel: "noopener noreferrer",
        }
    }
}

/// Text and links applied to the panel's `data-role` hooks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoPanelView {
    pub title: String,
    /// Hidden when `None`
    pub subtitle: Option<String>,
    /// Hidden when `None`
    pub description: Option<String>,
    pub type_label: String,
    pub actions: Vec<ActionLink>,
    /// Back control visibility; true whenever the node has a parent
    pub back_visible: bool,
}

impl InfoPanelView {
    pub fn for_node(node: &ContentNode, can_go_back: bool) -> Self {
        Self {
            title: node.title_or_empty().to_string(),
            subtitle: node.subtitle.clone().filter(|s| !s.is_empty()),
            description: node.description.clone().filter(|s| !s.is_empty()),
            type_label: node.type_label().to_string(),
            actions: node.actions.iter().map(ActionLink::from).collect(),
            back_visible: can_go_back,
        }
    }

    /// CSS `visibility` for the back control.
    pub fn back_visibility(&self) -> &'static str {
        if self.back_visible {
            "visible"
        } else {
            "hidden"
        }
    }
}

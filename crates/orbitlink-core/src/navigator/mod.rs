//! Hierarchical navigator ("planet system") state machine.
//!
//! The navigator keeps the focused node, a back-navigation history and the
//! viewport transform. Every user gesture is expressed as a [`Command`] and
//! fed through [`Navigator::dispatch`], which mutates state synchronously and
//! reports what the rendering adapter has to redo.
//!
//! ## Invariants
//!
//! - `history` is never empty and its last entry equals `current_id`
//! - zoom always lies in `[MIN_ZOOM, MAX_ZOOM]`
//! - focusing an unknown id is an explicit no-op
//!
//! ```ignore
//! let mut nav = Navigator::new(Arc::new(ContentTree::builtin()?));
//! nav.dispatch(Command::Focus("anime".into()));
//! let frame = nav.render();
//! ```

pub mod layout;
pub mod viewport;

use std::sync::Arc;

use crate::content::{ContentNode, ContentTree};

pub use layout::{
    angle_for, layout, OrbitLevel, OrbitView, PlanetVariant, PlanetView, SystemView,
    MAX_SATELLITES,
};
pub use viewport::{
    PanGesture, Point, PointerTarget, Viewport, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP,
};

/// A navigator input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Center the given node
    Focus(String),
    /// Return to the previously focused node
    GoBack,
    /// Set the zoom level (clamped)
    SetZoom(f64),
    /// Add to the zoom level (clamped)
    AdjustZoom(f64),
    /// Move the viewport by a delta
    Pan { dx: f64, dy: f64 },
    /// Zoom 1, pan origin
    Reset,
}

/// What changed after a command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Update {
    /// Center/orbit layers must be rebuilt
    pub rerender: bool,
    /// Replay the enter animation
    pub transition: bool,
    /// Viewport transform must be reapplied
    pub viewport: bool,
}

impl Update {
    pub const NONE: Update = Update {
        rerender: false,
        transition: false,
        viewport: false,
    };

    fn navigation() -> Self {
        Self {
            rerender: true,
            transition: true,
            viewport: false,
        }
    }

    fn viewport(changed: bool) -> Self {
        Self {
            viewport: changed,
            ..Self::NONE
        }
    }

    pub fn is_noop(&self) -> bool {
        *self == Self::NONE
    }
}

/// Navigation and viewport state bound to one content tree.
#[derive(Debug, Clone)]
pub struct Navigator {
    tree: Arc<ContentTree>,
    current_id: String,
    history: Vec<String>,
    viewport: Viewport,
    transition_epoch: u64,
}

impl Navigator {
    /// Start focused on the root.
    pub fn new(tree: Arc<ContentTree>) -> Self {
        let root_id = tree.root().id.clone();
        Self {
            tree,
            current_id: root_id.clone(),
            history: vec![root_id],
            viewport: Viewport::default(),
            transition_epoch: 0,
        }
    }

    pub fn tree(&self) -> &ContentTree {
        &self.tree
    }

    pub fn current_id(&self) -> &str {
        &self.current_id
    }

    pub fn current_node(&self) -> &ContentNode {
        self.tree.node(&self.current_id).unwrap_or_else(|| self.tree.root())
    }

    /// Root-first stack of focused ids; last entry is the current node.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Bumped on every focus change; used to restart the enter animation.
    pub fn transition_epoch(&self) -> u64 {
        self.transition_epoch
    }

    /// Whether the back control should be shown (the focus has a parent).
    pub fn can_go_back(&self) -> bool {
        self.tree.parent_id_of(&self.current_id).is_some()
    }

    /// Apply one command.
    pub fn dispatch(&mut self, command: Command) -> Update {
        match command {
            Command::Focus(id) => self.focus(&id),
            Command::GoBack => self.go_back(),
            Command::SetZoom(zoom) => self.set_zoom(zoom),
            Command::AdjustZoom(delta) => self.adjust_zoom(delta),
            Command::Pan { dx, dy } => self.pan(dx, dy),
            Command::Reset => self.reset_view(),
        }
    }

    /// Focus a node. Already-current and unknown ids are ignored.
    pub fn focus(&mut self, id: &str) -> Update {
        if id == self.current_id || !self.tree.contains(id) {
            return Update::NONE;
        }
        self.current_id = id.to_string();
        self.history.push(self.current_id.clone());
        self.transition_epoch += 1;
        Update::navigation()
    }

    /// Pop one history entry; a no-op at the root entry.
    pub fn go_back(&mut self) -> Update {
        if self.history.len() <= 1 {
            return Update::NONE;
        }
        self.history.pop();
        if let Some(previous) = self.history.last() {
            self.current_id = previous.clone();
        }
        self.transition_epoch += 1;
        Update::navigation()
    }

    pub fn set_zoom(&mut self, zoom: f64) -> Update {
        Update::viewport(self.viewport.set_zoom(zoom))
    }

    pub fn adjust_zoom(&mut self, delta: f64) -> Update {
        Update::viewport(self.viewport.adjust_zoom(delta))
    }

    pub fn pan(&mut self, dx: f64, dy: f64) -> Update {
        Update::viewport(self.viewport.pan_by(dx, dy))
    }

    pub fn reset_view(&mut self) -> Update {
        Update::viewport(self.viewport.reset())
    }

    /// Render plan for the current focus.
    pub fn render(&self) -> SystemView {
        layout(&self.tree, &self.current_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navigator() -> Navigator {
        let root = ContentNode::new("root").with_children(vec![
            ContentNode::new("A").with_children(vec![ContentNode::new("A1")]),
            ContentNode::new("B"),
        ]);
        Navigator::new(Arc::new(ContentTree::new(root).unwrap()))
    }

    #[test]
    fn test_starts_at_root() {
        let nav = navigator();
        assert_eq!(nav.current_id(), "root");
        assert_eq!(nav.history(), ["root"]);
        assert!(!nav.can_go_back());
    }

    #[test]
    fn test_focus_pushes_history() {
        let mut nav = navigator();
        let update = nav.focus("A1");
        assert!(update.rerender && update.transition);
        assert_eq!(nav.history(), ["root", "A1"]);
        assert_eq!(nav.transition_epoch(), 1);
        assert!(nav.can_go_back());
    }

    #[test]
    fn test_focus_current_is_noop() {
        let mut nav = navigator();
        assert!(nav.focus("root").is_noop());
        assert_eq!(nav.history().len(), 1);
        assert_eq!(nav.transition_epoch(), 0);
    }

    #[test]
    fn test_focus_unknown_is_noop() {
        let mut nav = navigator();
        assert!(nav.focus("nowhere").is_noop());
        assert_eq!(nav.current_id(), "root");
    }

    #[test]
    fn test_go_back_at_root_is_noop() {
        let mut nav = navigator();
        assert!(nav.go_back().is_noop());
        assert_eq!(nav.history(), ["root"]);
    }

    #[test]
    fn test_history_allows_revisits() {
        let mut nav = navigator();
        nav.focus("A");
        nav.focus("root");
        assert_eq!(nav.history(), ["root", "A", "root"]);
        nav.go_back();
        assert_eq!(nav.current_id(), "A");
    }

    #[test]
    fn test_viewport_commands() {
        let mut nav = navigator();
        assert!(nav.dispatch(Command::SetZoom(5.0)).viewport);
        assert_eq!(nav.viewport().zoom(), MAX_ZOOM);
        assert!(nav.dispatch(Command::Pan { dx: 3.0, dy: 4.0 }).viewport);
        assert!(!nav.dispatch(Command::Pan { dx: 0.0, dy: 0.0 }).viewport);
        assert!(nav.dispatch(Command::Reset).viewport);
        assert_eq!(nav.viewport().zoom(), 1.0);
        assert_eq!(nav.viewport().pan(), Point::ORIGIN);
    }

    #[test]
    fn test_navigation_keeps_viewport() {
        let mut nav = navigator();
        nav.set_zoom(1.3);
        nav.focus("B");
        assert_eq!(nav.viewport().zoom(), 1.3);
        assert!(!nav.focus("A").viewport);
    }

    #[test]
    fn test_render_follows_focus() {
        let mut nav = navigator();
        nav.focus("A");
        let frame = nav.render();
        assert_eq!(frame.current_id, "A");
        assert_eq!(frame.orbit.planets.len(), 1);
        assert_eq!(frame.parent_id.as_deref(), Some("root"));
    }
}

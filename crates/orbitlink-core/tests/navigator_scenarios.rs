//! End-to-end navigator scenarios against small and built-in trees.

use std::sync::Arc;

use orbitlink_core::navigator::{Command, Navigator, OrbitLevel, PanGesture, Point, PointerTarget};
use orbitlink_core::{ContentNode, ContentTree};

fn two_children() -> Navigator {
    let root = ContentNode::new("root").with_children(vec![ContentNode::new("A"), ContentNode::new("B")]);
    Navigator::new(Arc::new(ContentTree::new(root).unwrap()))
}

#[test]
fn focus_then_back_scenario() {
    let mut nav = two_children();

    nav.dispatch(Command::Focus("B".into()));
    nav.dispatch(Command::Focus("A".into()));
    assert_eq!(nav.history(), ["root", "B", "A"]);
    assert_eq!(nav.current_id(), "A");

    nav.dispatch(Command::GoBack);
    assert_eq!(nav.current_id(), "B");
    assert_eq!(nav.history(), ["root", "B"]);

    nav.dispatch(Command::GoBack);
    nav.dispatch(Command::GoBack);
    assert_eq!(nav.history(), ["root"]);
    assert_eq!(nav.current_id(), "root");
}

#[test]
fn builtin_tree_walkthrough() {
    let tree = Arc::new(ContentTree::builtin().unwrap());
    let mut nav = Navigator::new(tree);

    let frame = nav.render();
    assert!(frame.center.is_root);
    assert_eq!(frame.orbit.level, OrbitLevel::Primary);
    let ids: Vec<&str> = frame.orbit.planets.iter().map(|p| p.node_id.as_str()).collect();
    assert_eq!(ids, ["anime", "gaming", "code"]);
    assert_eq!(frame.orbit.planets[1].angle_deg, 120.0);

    // Every category previews its modules as satellites
    let anime = &frame.orbit.planets[0];
    assert_eq!(anime.satellites.as_ref().unwrap().planets.len(), 3);

    // Satellites are navigable directly
    assert!(nav.dispatch(Command::Focus("buscador-anime".into())).rerender);
    let frame = nav.render();
    assert!(frame.orbit.is_empty());
    assert_eq!(frame.info.actions[0].href, "/buscador-anime");
    assert_eq!(frame.info.actions[0].target, "_self");
    assert!(frame.info.back_visible);
}

#[test]
fn drag_gesture_drives_pan() {
    let mut nav = two_children();
    let mut gesture = PanGesture::default();

    // Pressing a planet never pans
    assert!(!gesture.begin(Point::new(0.0, 0.0), PointerTarget::Node));

    assert!(gesture.begin(Point::new(200.0, 200.0), PointerTarget::Space));
    for at in [Point::new(210.0, 190.0), Point::new(230.0, 180.0)] {
        if let Some((dx, dy)) = gesture.move_to(at) {
            nav.dispatch(Command::Pan { dx, dy });
        }
    }
    gesture.end();

    assert_eq!(nav.viewport().pan(), Point::new(30.0, -20.0));
    assert_eq!(
        nav.viewport().transform_css(),
        "translate(30px, -20px) scale(1)"
    );

    nav.dispatch(Command::Reset);
    assert_eq!(nav.render().current_id, "root");
    assert_eq!(nav.viewport().pan(), Point::ORIGIN);
    assert_eq!(nav.viewport().zoom(), 1.0);
}

#[test]
fn unknown_focus_leaves_state_untouched() {
    let mut nav = two_children();
    nav.dispatch(Command::Focus("A".into()));
    let before = nav.history().to_vec();

    let update = nav.dispatch(Command::Focus("does-not-exist".into()));
    assert!(update.is_noop());
    assert_eq!(nav.history(), before.as_slice());
    assert_eq!(nav.transition_epoch(), 1);
}

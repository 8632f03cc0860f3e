//! Property-based tests for the navigator
//!
//! Uses proptest to check history, zoom and layout invariants over random
//! command sequences on the built-in content tree.

use std::sync::Arc;

use orbitlink_core::navigator::{
    angle_for, layout, Command, Navigator, MAX_SATELLITES, MAX_ZOOM, MIN_ZOOM,
};
use orbitlink_core::{ContentNode, ContentTree};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

const IDS: &[&str] = &[
    "root",
    "anime",
    "anime-lists",
    "buscador-anime",
    "anime-alerts",
    "gaming",
    "gaming-clips",
    "gaming-setup",
    "code",
    "co-components",
    "co-praxis",
    "missing-node",
];

fn builtin() -> Arc<ContentTree> {
    Arc::new(ContentTree::builtin().expect("built-in tree parses"))
}

fn id_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(IDS).prop_map(str::to_string)
}

fn command_strategy() -> impl Strategy<Value = Command> {
    prop_oneof![
        4 => id_strategy().prop_map(Command::Focus),
        2 => Just(Command::GoBack),
        1 => (-5.0f64..5.0).prop_map(Command::SetZoom),
        1 => (-1.0f64..1.0).prop_map(Command::AdjustZoom),
        1 => (-200.0f64..200.0, -200.0f64..200.0).prop_map(|(dx, dy)| Command::Pan { dx, dy }),
        1 => Just(Command::Reset),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The history is never empty and always ends at the current node
    #[test]
    fn history_top_is_current(commands in prop::collection::vec(command_strategy(), 0..60)) {
        let mut nav = Navigator::new(builtin());
        for command in commands {
            nav.dispatch(command);
            prop_assert!(!nav.history().is_empty());
            prop_assert_eq!(nav.history().last().map(String::as_str), Some(nav.current_id()));
            prop_assert_eq!(nav.history()[0].as_str(), "root");
        }
    }

    /// Focusing a new known node pushes exactly one entry
    #[test]
    fn focus_appends_one_entry(
        warmup in prop::collection::vec(command_strategy(), 0..20),
        target in id_strategy(),
    ) {
        let mut nav = Navigator::new(builtin());
        for command in warmup {
            nav.dispatch(command);
        }
        let before = nav.history().len();
        let was_current = nav.current_id() == target;
        let update = nav.dispatch(Command::Focus(target.clone()));

        if !was_current && nav.tree().contains(&target) {
            prop_assert!(update.rerender);
            prop_assert_eq!(nav.history().len(), before + 1);
            prop_assert_eq!(nav.current_id(), target.as_str());
        } else {
            prop_assert!(update.is_noop());
            prop_assert_eq!(nav.history().len(), before);
        }
    }

    /// Zoom stays inside the clamp range whatever is thrown at it
    #[test]
    fn zoom_always_clamped(values in prop::collection::vec(any::<f64>(), 1..30)) {
        let mut nav = Navigator::new(builtin());
        for value in values {
            nav.dispatch(Command::SetZoom(value));
            nav.dispatch(Command::AdjustZoom(value));
            let zoom = nav.viewport().zoom();
            prop_assert!(zoom.is_finite());
            prop_assert!((MIN_ZOOM..=MAX_ZOOM).contains(&zoom));
        }
    }

    /// Ring slots are evenly spaced and stay below a full turn
    #[test]
    fn angles_evenly_spaced(count in 1usize..40) {
        let step = 360.0 / count as f64;
        for index in 0..count {
            let angle = angle_for(index, count);
            prop_assert!((0.0..360.0).contains(&angle));
            prop_assert!((angle - step * index as f64).abs() < 1e-9);
        }
    }

    /// Satellite rings never exceed the cap
    #[test]
    fn satellites_capped(satellite_counts in prop::collection::vec(0usize..12, 1..6)) {
        let children = satellite_counts
            .iter()
            .enumerate()
            .map(|(planet, &count)| {
                let satellites = (0..count)
                    .map(|s| ContentNode::new(format!("s-{}-{}", planet, s)))
                    .collect();
                ContentNode::new(format!("p-{}", planet)).with_children(satellites)
            })
            .collect();
        let tree = ContentTree::new(ContentNode::new("root").with_children(children)).unwrap();

        let frame = layout(&tree, "root");
        prop_assert_eq!(frame.orbit.planets.len(), satellite_counts.len());
        for (planet, &count) in frame.orbit.planets.iter().zip(&satellite_counts) {
            let shown = planet.satellites.as_ref().map_or(0, |ring| ring.planets.len());
            prop_assert_eq!(shown, count.min(MAX_SATELLITES));
        }
    }
}

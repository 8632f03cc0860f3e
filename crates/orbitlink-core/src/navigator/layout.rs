//! Render plan for the planet system.
//!
//! Pure data derived from `(tree, current node)`; the Dioxus component only
//! turns these structs into elements.

use crate::content::{Accent, ContentNode, ContentTree, Logo};
use crate::widgets::planet_info::InfoPanelView;

/// Radius of the ring of children around the focal planet
pub const ORBIT_RADIUS_PX: u32 = 150;
/// Rotation period of that ring
pub const ORBIT_DURATION_S: u32 = 42;
/// Radius of a satellite ring around an orbiting planet
pub const SATELLITE_RADIUS_PX: u32 = 52;
pub const SATELLITE_DURATION_S: u32 = 24;
/// Satellites shown per orbiting planet; deeper levels are never drawn
pub const MAX_SATELLITES: usize = 6;

/// Role of a rendered planet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanetVariant {
    Center,
    Orbit,
    Satellite,
}

impl PlanetVariant {
    pub fn class(&self) -> &'static str {
        match self {
            PlanetVariant::Center => "planet planet--center",
            PlanetVariant::Orbit => "planet planet--orbit",
            PlanetVariant::Satellite => "planet planet--satellite",
        }
    }

    /// Class of the circular body.
    pub fn body_class(&self) -> &'static str {
        match self {
            PlanetVariant::Satellite => "planet__body planet__body--satellite",
            _ => "planet__body",
        }
    }

    /// Satellites are drawn without the glow layer.
    pub fn has_glow(&self) -> bool {
        !matches!(self, PlanetVariant::Satellite)
    }

    pub fn logo_img_class(&self) -> &'static str {
        match self {
            PlanetVariant::Satellite => "planet__logo-img planet__logo-img--satellite",
            _ => "planet__logo-img",
        }
    }

    pub fn logo_class(&self) -> &'static str {
        match self {
            PlanetVariant::Satellite => "planet__logo planet__logo--satellite",
            _ => "planet__logo",
        }
    }
}

/// Ring kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrbitLevel {
    /// Children of the focal planet
    Primary,
    /// Preview of an orbiting planet's own children
    Satellites,
}

impl OrbitLevel {
    pub fn class(&self) -> &'static str {
        match self {
            OrbitLevel::Primary => "orbit orbit--level-1",
            OrbitLevel::Satellites => "orbit orbit--satellites",
        }
    }
}

/// One rendered planet
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetView {
    pub node_id: String,
    pub variant: PlanetVariant,
    /// Position on its ring in degrees; 0 for the center
    pub angle_deg: f64,
    pub is_root: bool,
    pub logo: Logo,
    pub title: Option<String>,
    /// Only the focal planet shows its subtitle
    pub subtitle: Option<String>,
    pub accent: Option<Accent>,
    pub satellites: Option<OrbitView>,
}

impl PlanetView {
    /// Class list of the planet button.
    pub fn class(&self) -> String {
        if self.is_root {
            format!("{} planet--root", self.variant.class())
        } else {
            self.variant.class().to_string()
        }
    }

    /// Inline custom properties (`--planet-angle`, `--planet-level`, `--planet-accent`).
    pub fn style(&self) -> String {
        let mut style = String::new();
        match self.variant {
            PlanetVariant::Orbit => {
                style.push_str(&format!("--planet-angle: {}deg; --planet-level: 1;", self.angle_deg));
            }
            PlanetVariant::Satellite => {
                style.push_str(&format!("--planet-angle: {}deg;", self.angle_deg));
            }
            PlanetVariant::Center => {}
        }
        if let Some(accent) = self.accent {
            if !style.is_empty() {
                style.push(' ');
            }
            style.push_str(&format!("--planet-accent: {};", accent.css_var()));
        }
        style
    }

    /// The title sits below the circle; image logos get extra spacing.
    pub fn title_class(&self) -> &'static str {
        match (self.variant, &self.logo) {
            (PlanetVariant::Satellite, _) => "planet__title planet__title--satellite-below-logo",
            (_, Logo::Image { .. }) => "planet__title planet__title--below-logo",
            (_, Logo::Text(_)) => "planet__title",
        }
    }
}

/// A ring of planets
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitView {
    pub level: OrbitLevel,
    pub radius_px: u32,
    pub duration_s: u32,
    pub planets: Vec<PlanetView>,
}

impl OrbitView {
    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }

    pub fn style(&self) -> String {
        format!(
            "--orbit-radius: {}px; --orbit-duration: {}s;",
            self.radius_px, self.duration_s
        )
    }
}

/// Everything needed to draw one navigator frame
#[derive(Debug, Clone, PartialEq)]
pub struct SystemView {
    pub current_id: String,
    pub parent_id: Option<String>,
    pub center: PlanetView,
    /// Empty for leaf nodes
    pub orbit: OrbitView,
    pub info: InfoPanelView,
}

/// Angle of slot `index` on a ring of `count` evenly spaced slots.
pub fn angle_for(index: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    (360.0 / count as f64) * index as f64
}

/// Build the frame for `current_id`. Unknown ids fall back to the root.
pub fn layout(tree: &ContentTree, current_id: &str) -> SystemView {
    let (current, parent_id) = match tree.find(current_id) {
        Some(found) => (found.node, found.parent_id),
        None => (tree.root(), None),
    };
    let is_root = current.id == tree.root().id;

    let center = PlanetView {
        node_id: current.id.clone(),
        variant: PlanetVariant::Center,
        angle_deg: 0.0,
        is_root,
        logo: current.logo(),
        title: current.title.clone(),
        subtitle: current.subtitle.clone().filter(|s| !s.is_empty()),
        accent: current.accent,
        satellites: None,
    };

    let orbit = primary_orbit(&current.children);
    if orbit.is_empty() {
        tracing::debug!("Node has no children: {}", current.id);
    }

    SystemView {
        current_id: current.id.clone(),
        parent_id: parent_id.map(str::to_string),
        center,
        orbit,
        info: InfoPanelView::for_node(current, parent_id.is_some()),
    }
}

fn primary_orbit(children: &[ContentNode]) -> OrbitView {
    let count = children.len();
    let planets = children
        .iter()
        .enumerate()
        .map(|(index, child)| PlanetView {
            node_id: child.id.clone(),
            variant: PlanetVariant::Orbit,
            angle_deg: angle_for(index, count),
            is_root: false,
            logo: child.logo(),
            title: child.title.clone(),
            subtitle: None,
            accent: child.accent,
            satellites: satellite_orbit(&child.children),
        })
        .collect();

    OrbitView {
        level: OrbitLevel::Primary,
        radius_px: ORBIT_RADIUS_PX,
        duration_s: ORBIT_DURATION_S,
        planets,
    }
}

fn satellite_orbit(children: &[ContentNode]) -> Option<OrbitView> {
    if children.is_empty() {
        return None;
    }
    let shown = &children[..children.len().min(MAX_SATELLITES)];
    let planets = shown
        .iter()
        .enumerate()
        .map(|(index, child)| PlanetView {
            node_id: child.id.clone(),
            variant: PlanetVariant::Satellite,
            angle_deg: angle_for(index, shown.len()),
            is_root: false,
            logo: child.logo(),
            title: child.title.clone(),
            subtitle: None,
            accent: None,
            satellites: None,
        })
        .collect();

    Some(OrbitView {
        level: OrbitLevel::Satellites,
        radius_px: SATELLITE_RADIUS_PX,
        duration_s: SATELLITE_DURATION_S,
        planets,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, children: Vec<ContentNode>) -> ContentNode {
        ContentNode::new(id).with_title(id.to_uppercase()).with_children(children)
    }

    fn leaves(prefix: &str, count: usize) -> Vec<ContentNode> {
        (0..count)
            .map(|i| ContentNode::new(format!("{}-{}", prefix, i)))
            .collect()
    }

    #[test]
    fn orbit_angles_are_evenly_spaced() {
        let tree = ContentTree::new(node("root", leaves("c", 3))).unwrap();
        let view = layout(&tree, "root");

        let angles: Vec<f64> = view.orbit.planets.iter().map(|p| p.angle_deg).collect();
        assert_eq!(angles, vec![0.0, 120.0, 240.0]);
        assert_eq!(view.orbit.radius_px, 150);
        assert_eq!(view.orbit.duration_s, 42);
    }

    #[test]
    fn leaf_has_empty_orbit() {
        let tree = ContentTree::new(node("root", leaves("c", 2))).unwrap();
        let view = layout(&tree, "c-1");

        assert!(view.orbit.is_empty());
        assert_eq!(view.center.node_id, "c-1");
        assert_eq!(view.parent_id.as_deref(), Some("root"));
        assert!(view.info.back_visible);
    }

    #[test]
    fn satellites_capped_at_six() {
        let tree = ContentTree::new(node("root", vec![node("big", leaves("s", 9))])).unwrap();
        let view = layout(&tree, "root");

        let satellites = view.orbit.planets[0].satellites.as_ref().unwrap();
        assert_eq!(satellites.planets.len(), 6);
        assert_eq!(satellites.planets[1].angle_deg, 60.0);
        assert_eq!(satellites.radius_px, 52);
        assert_eq!(satellites.level, OrbitLevel::Satellites);
    }

    #[test]
    fn satellites_never_nest() {
        let deep = node("a", vec![node("a1", vec![node("a1x", vec![])])]);
        let tree = ContentTree::new(node("root", vec![deep])).unwrap();
        let view = layout(&tree, "root");

        let satellites = view.orbit.planets[0].satellites.as_ref().unwrap();
        assert!(satellites.planets[0].satellites.is_none());
    }

    #[test]
    fn center_shows_subtitle_and_root_marker() {
        let mut root = node("root", leaves("c", 1));
        root.subtitle = Some("ANIME · CODE".into());
        root.children[0].subtitle = Some("hidden on the ring".into());
        let tree = ContentTree::new(root).unwrap();
        let view = layout(&tree, "root");

        assert!(view.center.is_root);
        assert_eq!(view.center.class(), "planet planet--center planet--root");
        assert_eq!(view.center.subtitle.as_deref(), Some("ANIME · CODE"));
        assert_eq!(view.orbit.planets[0].subtitle, None);
        assert!(!view.info.back_visible);
    }

    #[test]
    fn unknown_current_falls_back_to_root() {
        let tree = ContentTree::new(node("root", leaves("c", 2))).unwrap();
        let view = layout(&tree, "ghost");
        assert_eq!(view.current_id, "root");
    }

    #[test]
    fn planet_style_carries_angle_and_accent() {
        let mut child = ContentNode::new("c");
        child.accent = Some(Accent::Blue);
        let tree = ContentTree::new(node("root", vec![child, ContentNode::new("d")])).unwrap();
        let view = layout(&tree, "root");

        assert_eq!(
            view.orbit.planets[0].style(),
            "--planet-angle: 0deg; --planet-level: 1; --planet-accent: var(--accent-blue);"
        );
        assert_eq!(
            view.orbit.planets[1].style(),
            "--planet-angle: 180deg; --planet-level: 1;"
        );
        assert_eq!(view.orbit.style(), "--orbit-radius: 150px; --orbit-duration: 42s;");
    }

    #[test]
    fn satellite_classes() {
        let satellite = PlanetVariant::Satellite;
        assert_eq!(satellite.body_class(), "planet__body planet__body--satellite");
        assert_eq!(satellite.logo_class(), "planet__logo planet__logo--satellite");
        assert!(!satellite.has_glow());
        assert_eq!(PlanetVariant::Center.logo_img_class(), "planet__logo-img");
        assert!(PlanetVariant::Orbit.has_glow());
    }

    #[test]
    fn angle_for_zero_count() {
        assert_eq!(angle_for(0, 0), 0.0);
    }
}

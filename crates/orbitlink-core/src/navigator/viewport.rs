//! Zoom/pan arithmetic and the drag-to-pan gesture.

/// Lower bound of the zoom range
pub const MIN_ZOOM: f64 = 0.65;
/// Upper bound of the zoom range
pub const MAX_ZOOM: f64 = 1.6;
/// Increment applied by the zoom buttons
pub const ZOOM_STEP: f64 = 0.15;

/// 2D offset in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Scale and translation applied to the navigator viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    zoom: f64,
    pan: Point,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: Point::ORIGIN,
        }
    }
}

impl Viewport {
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn pan(&self) -> Point {
        self.pan
    }

    /// Clamp into `[MIN_ZOOM, MAX_ZOOM]`. NaN is rejected and returns false.
    pub fn set_zoom(&mut self, zoom: f64) -> bool {
        if zoom.is_nan() {
            return false;
        }
        let clamped = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        let changed = clamped != self.zoom;
        self.zoom = clamped;
        changed
    }

    pub fn adjust_zoom(&mut self, delta: f64) -> bool {
        self.set_zoom(self.zoom + delta)
    }

    /// Accumulate a pan delta. Non-finite deltas are dropped.
    pub fn pan_by(&mut self, dx: f64, dy: f64) -> bool {
        if !dx.is_finite() || !dy.is_finite() || (dx == 0.0 && dy == 0.0) {
            return false;
        }
        self.pan.x += dx;
        self.pan.y += dy;
        true
    }

    pub fn reset(&mut self) -> bool {
        let changed = *self != Viewport::default();
        *self = Viewport::default();
        changed
    }

    /// Combined transform for the viewport element.
    pub fn transform_css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.pan.x, self.pan.y, self.zoom
        )
    }
}

/// What the pointer went down on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// Empty space around the planets
    Space,
    /// A focal, orbiting or satellite planet
    Node,
}

impl PointerTarget {
    /// Classify a press by whether it landed inside a planet.
    pub fn from_hit(on_planet: bool) -> Self {
        if on_planet {
            PointerTarget::Node
        } else {
            PointerTarget::Space
        }
    }
}

/// Drag-to-pan gesture tracker.
///
/// Presses on a planet never start a pan so that click-to-navigate wins.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PanGesture {
    last: Option<Point>,
}

impl PanGesture {
    pub fn is_active(&self) -> bool {
        self.last.is_some()
    }

    /// Start dragging. Returns true when a pan actually began.
    pub fn begin(&mut self, at: Point, target: PointerTarget) -> bool {
        if target == PointerTarget::Node {
            return false;
        }
        self.last = Some(at);
        true
    }

    /// Pointer moved; returns the delta since the previous position while
    /// a drag is active.
    pub fn move_to(&mut self, at: Point) -> Option<(f64, f64)> {
        let last = self.last.as_mut()?;
        let delta = (at.x - last.x, at.y - last.y);
        *last = at;
        Some(delta)
    }

    /// Pointer released or cancelled. Returns true when a drag was active.
    pub fn end(&mut self) -> bool {
        self.last.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_clamps_both_ends() {
        let mut viewport = Viewport::default();
        viewport.set_zoom(10.0);
        assert_eq!(viewport.zoom(), MAX_ZOOM);
        viewport.set_zoom(-3.0);
        assert_eq!(viewport.zoom(), MIN_ZOOM);
        viewport.set_zoom(f64::INFINITY);
        assert_eq!(viewport.zoom(), MAX_ZOOM);
        viewport.set_zoom(f64::NEG_INFINITY);
        assert_eq!(viewport.zoom(), MIN_ZOOM);
    }

    #[test]
    fn nan_zoom_ignored() {
        let mut viewport = Viewport::default();
        assert!(!viewport.set_zoom(f64::NAN));
        assert_eq!(viewport.zoom(), 1.0);
    }

    #[test]
    fn adjust_zoom_steps_until_bound() {
        let mut viewport = Viewport::default();
        for _ in 0..10 {
            viewport.adjust_zoom(ZOOM_STEP);
        }
        assert_eq!(viewport.zoom(), MAX_ZOOM);
        assert!(!viewport.adjust_zoom(ZOOM_STEP));
    }

    #[test]
    fn pan_accumulates_and_reset_restores() {
        let mut viewport = Viewport::default();
        viewport.pan_by(10.0, -5.0);
        viewport.pan_by(2.5, 5.0);
        assert_eq!(viewport.pan(), Point::new(12.5, 0.0));

        viewport.set_zoom(1.3);
        assert!(viewport.reset());
        assert_eq!(viewport.zoom(), 1.0);
        assert_eq!(viewport.pan(), Point::ORIGIN);
        assert!(!viewport.reset());
    }

    #[test]
    fn transform_css_format() {
        let mut viewport = Viewport::default();
        viewport.pan_by(12.0, -4.5);
        viewport.set_zoom(1.25);
        assert_eq!(viewport.transform_css(), "translate(12px, -4.5px) scale(1.25)");
        assert_eq!(
            Viewport::default().transform_css(),
            "translate(0px, 0px) scale(1)"
        );
    }

    #[test]
    fn gesture_ignores_presses_on_nodes() {
        let mut gesture = PanGesture::default();
        assert!(!gesture.begin(Point::new(5.0, 5.0), PointerTarget::Node));
        assert!(!gesture.is_active());
        assert_eq!(gesture.move_to(Point::new(50.0, 50.0)), None);
    }

    #[test]
    fn press_on_planet_never_starts_pan() {
        let mut gesture = PanGesture::default();
        assert_eq!(PointerTarget::from_hit(true), PointerTarget::Node);
        assert!(!gesture.begin(Point::new(5.0, 5.0), PointerTarget::from_hit(true)));
        assert!(gesture.begin(Point::new(5.0, 5.0), PointerTarget::from_hit(false)));
        assert!(gesture.is_active());
    }

    #[test]
    fn gesture_reports_incremental_deltas() {
        let mut gesture = PanGesture::default();
        assert!(gesture.begin(Point::new(100.0, 100.0), PointerTarget::Space));
        assert_eq!(gesture.move_to(Point::new(110.0, 95.0)), Some((10.0, -5.0)));
        assert_eq!(gesture.move_to(Point::new(120.0, 95.0)), Some((10.0, 0.0)));
        assert!(gesture.end());
        assert!(!gesture.end());
        assert_eq!(gesture.move_to(Point::new(0.0, 0.0)), None);
    }
}

//! Planet System Component
//!
//! The hierarchical navigator: the focused node in the center, its children
//! on a rotating orbit, their children as satellites. Clicking a planet
//! focuses it; the info panel's back control walks the history. The space
//! zooms with the control buttons and pans by dragging empty space.

use dioxus::html::input_data::MouseButton;
use dioxus::html::point_interaction::{InteractionLocation, PointerInteraction};
use dioxus::prelude::*;
use gloo::events::EventListener;
use orbitlink_core::navigator::{
    Command, Navigator, OrbitView, PanGesture, PlanetView, Point, PointerTarget, ZOOM_STEP,
};
use orbitlink_core::Logo;
use wasm_bindgen::JsCast;

use super::planet_info::PlanetInfo;
use super::template_host::use_listeners;
use crate::context::use_content_tree;

/// Pointer input arriving from window-level listeners
#[derive(Debug, Clone, Copy)]
enum WindowPointer {
    Move(Point),
    Up,
}

#[component]
pub fn PlanetSystem() -> Element {
    let tree = use_content_tree();
    let mut navigator = use_signal(|| Navigator::new(tree.clone()));
    let mut gesture = use_signal(PanGesture::default);
    let listeners = use_listeners();

    // Unknown ids and out-of-range no-ops come back as an empty update
    let mut dispatch = move |command: Command| {
        navigator.write().dispatch(command);
    };

    // Mouse moves and releases are tracked on the window so a drag keeps
    // going outside the space
    let pointer = use_coroutine(move |mut rx: UnboundedReceiver<WindowPointer>| async move {
        use futures::StreamExt;
        while let Some(input) = rx.next().await {
            match input {
                WindowPointer::Move(at) => {
                    if !gesture.peek().is_active() {
                        continue;
                    }
                    let delta = gesture.write().move_to(at);
                    if let Some((dx, dy)) = delta {
                        navigator.write().dispatch(Command::Pan { dx, dy });
                    }
                }
                WindowPointer::Up => {
                    if gesture.peek().is_active() {
                        gesture.write().end();
                    }
                }
            }
        }
    });

    use_hook(move || {
        let Some(window) = web_sys::window() else {
            return;
        };
        let tx = pointer.tx();
        let on_move = EventListener::new(&window, "mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<web_sys::MouseEvent>() {
                let at = Point::new(event.client_x() as f64, event.client_y() as f64);
                let _ = tx.unbounded_send(WindowPointer::Move(at));
            }
        });
        let tx = pointer.tx();
        let on_up = EventListener::new(&window, "mouseup", move |_| {
            let _ = tx.unbounded_send(WindowPointer::Up);
        });
        listeners.borrow_mut().extend([on_move, on_up]);
    });

    let frame = navigator.read().render();
    let epoch = navigator.read().transition_epoch();
    let transform = navigator.read().viewport().transform_css();
    let panning = gesture.read().is_active();

    let space_class = if panning {
        "planet-system__space planet-system__space--panning"
    } else {
        "planet-system__space"
    };
    // Two identical keyframe sets; switching restarts the enter animation
    let layers_class = match (epoch, epoch % 2) {
        (0, _) => "planet-system__layers",
        (_, 0) => "planet-system__layers planet-system--enter-a",
        _ => "planet-system__layers planet-system--enter-b",
    };

    rsx! {
        section { class: "planet-system",
            div {
                class: "{space_class}",
                onmousedown: move |evt| {
                    if evt.trigger_button() != Some(MouseButton::Primary) {
                        return;
                    }
                    let target = pointer_target(
                        evt.data().downcast::<web_sys::MouseEvent>().and_then(|e| e.target()),
                    );
                    let at = evt.client_coordinates();
                    if gesture.write().begin(Point::new(at.x, at.y), target) {
                        evt.prevent_default();
                    }
                },
                ontouchstart: move |evt| {
                    let touches = evt.touches();
                    if let [touch] = touches.as_slice() {
                        let target = pointer_target(
                            evt.data().downcast::<web_sys::TouchEvent>().and_then(|e| e.target()),
                        );
                        let at = touch.client_coordinates();
                        gesture.write().begin(Point::new(at.x, at.y), target);
                    }
                },
                ontouchmove: move |evt| {
                    let touches = evt.touches();
                    let [touch] = touches.as_slice() else {
                        return;
                    };
                    if !gesture.peek().is_active() {
                        return;
                    }
                    evt.prevent_default();
                    let at = touch.client_coordinates();
                    let delta = gesture.write().move_to(Point::new(at.x, at.y));
                    if let Some((dx, dy)) = delta {
                        dispatch(Command::Pan { dx, dy });
                    }
                },
                ontouchend: move |_| {
                    gesture.write().end();
                },
                ontouchcancel: move |_| {
                    gesture.write().end();
                },

                div {
                    class: "planet-system__viewport",
                    "data-role": "viewport",
                    style: "transform: {transform};",

                    div {
                        class: "{layers_class}",
                        div { class: "planet-system__center-layer", "data-role": "center-layer",
                            PlanetButton {
                                planet: frame.center.clone(),
                                on_focus: move |id| dispatch(Command::Focus(id)),
                            }
                        }
                        div { class: "planet-system__orbits-layer", "data-role": "orbits-layer",
                            if !frame.orbit.is_empty() {
                                OrbitRing {
                                    orbit: frame.orbit.clone(),
                                    on_focus: move |id| dispatch(Command::Focus(id)),
                                }
                            }
                        }
                    }
                }

                div { class: "planet-system__controls",
                    button {
                        class: "planet-system__control",
                        r#type: "button",
                        "data-zoom-in": "",
                        "aria-label": "Acercar",
                        onmousedown: move |evt| evt.stop_propagation(),
                        onclick: move |_| dispatch(Command::AdjustZoom(ZOOM_STEP)),
                        "+"
                    }
                    button {
                        class: "planet-system__control",
                        r#type: "button",
                        "data-zoom-out": "",
                        "aria-label": "Alejar",
                        onmousedown: move |evt| evt.stop_propagation(),
                        onclick: move |_| dispatch(Command::AdjustZoom(-ZOOM_STEP)),
                        "−"
                    }
                    button {
                        class: "planet-system__control",
                        r#type: "button",
                        "data-zoom-reset": "",
                        "aria-label": "Restablecer vista",
                        onmousedown: move |evt| evt.stop_propagation(),
                        onclick: move |_| dispatch(Command::Reset),
                        "⟳"
                    }
                }
            }

            PlanetInfo {
                view: frame.info.clone(),
                on_back: move |_| dispatch(Command::GoBack),
            }
        }
    }
}

/// Presses inside any `.planet` count as node presses.
fn pointer_target(target: Option<web_sys::EventTarget>) -> PointerTarget {
    let on_planet = target
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|element| element.closest(".planet").ok().flatten())
        .is_some();
    PointerTarget::from_hit(on_planet)
}

#[component]
fn OrbitRing(orbit: OrbitView, on_focus: EventHandler<String>) -> Element {
    rsx! {
        div { class: "{orbit.level.class()}", style: "{orbit.style()}",
            for planet in orbit.planets.iter() {
                PlanetButton {
                    key: "{planet.node_id}",
                    planet: planet.clone(),
                    on_focus: move |id| on_focus.call(id),
                }
            }
        }
    }
}

/// One planet or satellite.
#[component]
fn PlanetButton(planet: PlanetView, on_focus: EventHandler<String>) -> Element {
    let node_id = planet.node_id.clone();

    rsx! {
        button {
            r#type: "button",
            class: "{planet.class()}",
            style: "{planet.style()}",
            "data-node-id": "{planet.node_id}",
            onclick: move |evt| {
                evt.stop_propagation();
                on_focus.call(node_id.clone());
            },

            div { class: "{planet.variant.body_class()}",
                if planet.variant.has_glow() {
                    div { class: "planet__glow" }
                }
                match &planet.logo {
                    Logo::Image { src, alt } => rsx! {
                        img { class: "{planet.variant.logo_img_class()}", src: "{src}", alt: "{alt}" }
                    },
                    Logo::Text(text) => rsx! {
                        div { class: "{planet.variant.logo_class()}", "{text}" }
                    },
                }
            }

            if let Some(title) = &planet.title {
                div { class: "{planet.title_class()}", "{title}" }
            }
            if let Some(subtitle) = &planet.subtitle {
                div { class: "planet__subtitle", "{subtitle}" }
            }

            if let Some(satellites) = &planet.satellites {
                OrbitRing {
                    orbit: satellites.clone(),
                    on_focus: move |id| on_focus.call(id),
                }
            }
        }
    }
}

//! Planet Bubble Component
//!
//! A single content node as a small template-backed bubble. Clicking it (or
//! Enter/Space) fills the shared bubble modal with the node's details.

use dioxus::prelude::*;
use orbitlink_core::widgets::{BubbleDetails, BubbleView, WidgetKind, BUBBLE_MODAL_ID};
use orbitlink_core::Logo;
use wasm_bindgen::JsCast;

use super::modal::Modal;
use super::template_host::{use_listeners, use_template};
use crate::context::{use_bubble_details, use_content_tree};
use crate::platform::shadow;

#[component]
pub fn PlanetBubble(
    /// Content node to show
    node_id: String,
) -> Element {
    let tree = use_content_tree();
    let mount = use_template(WidgetKind::PlanetBubble, None);
    let mut details = use_bubble_details();
    let listeners = use_listeners();

    let view = BubbleView::for_id(&tree, &node_id);
    let node_details = tree.node(&node_id).map(BubbleDetails::for_node);

    let opens = use_coroutine(move |mut rx: UnboundedReceiver<BubbleDetails>| async move {
        use futures::StreamExt;
        while let Some(next) = rx.next().await {
            details.set(Some(next));
        }
    });

    let wiring = listeners.clone();
    use_effect(use_reactive((&node_details,), move |(node_details,)| {
        let Some(root) = mount.operational_root() else {
            return;
        };
        let Some(bubble) = shadow::query(&root, ".bubble") else {
            return;
        };
        let mut wiring = wiring.borrow_mut();
        wiring.clear();
        let Some(node_details) = node_details else {
            return;
        };

        let tx = opens.tx();
        let on_click = node_details.clone();
        wiring.push(shadow::listen(&bubble, "click", move |_| {
            let _ = tx.unbounded_send(on_click.clone());
        }));

        let tx = opens.tx();
        wiring.push(shadow::listen_blocking(&bubble, "keydown", move |event| {
            let Some(key) = event.dyn_ref::<web_sys::KeyboardEvent>().map(|k| k.key()) else {
                return;
            };
            if key == "Enter" || key == " " {
                event.prevent_default();
                let _ = tx.unbounded_send(node_details.clone());
            }
        }));
    }));

    let shown = view.clone();
    use_effect(use_reactive((&shown,), move |(shown,)| {
        let Some(root) = mount.operational_root() else {
            return;
        };
        if let Some(view) = shown {
            apply(&root, &view);
        }
    }));

    let accent = view
        .as_ref()
        .and_then(|v| v.accent)
        .map(|accent| format!("--bubble-accent: {};", accent))
        .unwrap_or_default();

    rsx! {
        div {
            class: "planet-bubble-host",
            style: "{accent}",
            "node-id": "{node_id}",
            onmounted: move |evt| mount.bind(evt),
        }
    }
}

fn apply(root: &web_sys::ShadowRoot, view: &BubbleView) {
    let (Some(title), Some(image), Some(fallback)) = (
        shadow::query(root, ".bubble__title"),
        shadow::query(root, ".bubble__img"),
        shadow::query(root, ".bubble__fallback"),
    ) else {
        return;
    };

    shadow::set_text(&title, &view.title);
    match &view.image {
        Some((src, alt)) => {
            shadow::set_attr(&image, "src", src);
            shadow::set_attr(&image, "alt", alt);
            shadow::set_style(&image, "display", "block");
            shadow::set_style(&fallback, "display", "none");
        }
        None => {
            let _ = image.remove_attribute("src");
            shadow::set_style(&image, "display", "none");
            shadow::set_style(&fallback, "display", "grid");
            shadow::set_text(&fallback, &view.fallback);
        }
    }
}

/// Modal shared by every bubble on the page.
#[component]
pub fn BubbleModal() -> Element {
    let mut details = use_bubble_details();
    let current = details();

    rsx! {
        Modal {
            id: BUBBLE_MODAL_ID.to_string(),
            open: current.is_some(),
            on_close: move |_| details.set(None),
            style: "--modal-max-width: 720px; --modal-padding: 1.25rem 1.35rem 1.4rem;".to_string(),
            if let Some(node) = current {
                BubbleDetailsView { details: node }
            }
        }
    }
}

#[component]
fn BubbleDetailsView(details: BubbleDetails) -> Element {
    rsx! {
        div { class: "pb-modal",
            div { class: "pb-modal__header",
                div { class: "pb-modal__thumb",
                    match &details.logo {
                        Logo::Image { src, alt } => rsx! { img { src: "{src}", alt: "{alt}" } },
                        Logo::Text(text) => rsx! { span { "{text}" } },
                    }
                }
                div {
                    p { class: "pb-modal__kicker", "{details.kicker}" }
                    h3 { class: "pb-modal__title", "{details.title}" }
                    if let Some(subtitle) = &details.subtitle {
                        p { class: "pb-modal__subtitle", "{subtitle}" }
                    }
                }
            }
            if let Some(description) = &details.description {
                p { class: "pb-modal__description", "{description}" }
            }
            if !details.actions.is_empty() {
                div { class: "pb-modal__section",
                    div { class: "pb-modal__actions",
                        for action in details.actions.iter() {
                            a {
                                class: "btn btn-outline",
                                href: "{action.href}",
                                target: action.target,
                                rel: action.rel,
                                "{action.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

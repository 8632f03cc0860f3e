//! Planet Info Component
//!
//! Template-backed panel describing the focused node. Text goes into the
//! fragment's `data-role` hooks; the `go-back` control reports through
//! `on_back`.

use dioxus::prelude::*;
use orbitlink_core::widgets::{InfoPanelView, WidgetKind};

use super::template_host::{use_listeners, use_template};
use crate::platform::shadow;

#[component]
pub fn PlanetInfo(
    /// Contents for the focused node
    view: InfoPanelView,
    /// Callback when the back control is pressed
    on_back: EventHandler<()>,
) -> Element {
    let mount = use_template(WidgetKind::PlanetInfo, None);
    let listeners = use_listeners();

    let back_clicks = use_coroutine(move |mut rx: UnboundedReceiver<()>| async move {
        use futures::StreamExt;
        while rx.next().await.is_some() {
            on_back.call(());
        }
    });

    let wiring = listeners.clone();
    use_effect(move || {
        let Some(root) = mount.operational_root() else {
            return;
        };
        if !wiring.borrow().is_empty() {
            return;
        }
        if let Some(back) = shadow::query(&root, "[data-action=\"go-back\"]") {
            let tx = back_clicks.tx();
            wiring.borrow_mut().push(shadow::listen(&back, "click", move |_| {
                let _ = tx.unbounded_send(());
            }));
        }
    });

    use_effect(use_reactive((&view,), move |(view,)| {
        if let Some(root) = mount.operational_root() {
            apply(&root, &view);
        }
    }));

    rsx! {
        div {
            class: "planet-info-host",
            "data-component-root": "planet-info",
            onmounted: move |evt| mount.bind(evt),
        }
    }
}

fn apply(root: &web_sys::ShadowRoot, view: &InfoPanelView) {
    let Some(panel) = shadow::query(root, ".planet-info") else {
        return;
    };
    let _ = panel.class_list().add_1("planet-info--loading");

    if let Some(title) = shadow::query(root, "[data-role=\"title\"]") {
        shadow::set_text(&title, &view.title);
    }
    if let Some(chip) = shadow::query(root, "[data-role=\"type\"]") {
        shadow::set_text(&chip, &view.type_label);
    }
    for (selector, text) in [
        ("[data-role=\"subtitle\"]", &view.subtitle),
        ("[data-role=\"description\"]", &view.description),
    ] {
        if let Some(element) = shadow::query(root, selector) {
            shadow::set_text(&element, text.as_deref().unwrap_or(""));
            shadow::set_shown(&element, text.is_some());
        }
    }

    if let Some(actions) = shadow::query(root, "[data-role=\"actions\"]") {
        actions.set_inner_html("");
        let document = actions.owner_document();
        for action in &view.actions {
            let Some(link) = document.as_ref().and_then(|d| d.create_element("a").ok()) else {
                continue;
            };
            link.set_class_name("planet-info__action-btn");
            shadow::set_attr(&link, "href", &action.href);
            shadow::set_attr(&link, "target", action.target);
            shadow::set_attr(&link, "rel", action.rel);
            shadow::set_text(&link, &action.label);
            let _ = actions.append_child(&link);
        }
    }

    if let Some(back) = shadow::query(root, "[data-action=\"go-back\"]") {
        shadow::set_style(&back, "visibility", view.back_visibility());
    }

    let _ = panel.class_list().remove_1("planet-info--loading");
}

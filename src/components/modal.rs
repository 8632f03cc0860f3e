//! Modal Component
//!
//! Template-backed dialog. The fragment provides `.dialog` (required),
//! `.backdrop` and `.close`; children are projected through its `<slot>`.

use dioxus::prelude::*;
use orbitlink_core::widgets::{focusable_query, ModalEvent, ModalState, WidgetKind};

use super::template_host::{use_listeners, use_template};
use crate::platform::shadow;

/// Modal dialog
///
/// The parent owns the open flag; the modal reports every dismissal
/// (close button, backdrop, Escape) through `on_close`.
///
/// # Example
///
/// ```rust
/// rsx! {
///     Modal {
///         id: "planetBubbleModal",
///         open: show_modal(),
///         on_close: move |_| show_modal.set(false),
///         p { "Contenido" }
///     }
/// }
/// ```
#[component]
pub fn Modal(
    id: String,
    /// Whether the dialog should be open
    open: bool,
    /// Callback when the dialog closes itself
    on_close: EventHandler<()>,
    /// Backdrop clicks do not close (`data-backdrop="static"`)
    #[props(default = false)]
    static_backdrop: bool,
    /// Fragment URL, relative to the document base
    #[props(default = None)]
    src: Option<String>,
    /// Inline style for the host (e.g. `--modal-max-width`)
    #[props(default = None)]
    style: Option<String>,
    children: Element,
) -> Element {
    let mount = use_template(WidgetKind::Modal, src);
    let mut state = use_signal(|| ModalState::new(false, !static_backdrop));
    let listeners = use_listeners();

    let events = use_coroutine(move |mut rx: UnboundedReceiver<ModalEvent>| async move {
        use futures::StreamExt;
        while let Some(event) = rx.next().await {
            let was_open = state.peek().is_open();
            if state.write().handle(event) && was_open {
                on_close.call(());
            }
        }
    });

    // Parent-driven open/close
    use_effect(use_reactive((&open,), move |(open,)| {
        let event = if open { ModalEvent::Open } else { ModalEvent::Close };
        state.write().handle(event);
    }));

    use_effect(use_reactive((&static_backdrop,), move |(static_backdrop,)| {
        state.write().set_dismissible(!static_backdrop);
    }));

    // Wire the fragment's controls once it is live
    let wiring = listeners.clone();
    use_effect(move || {
        let Some(root) = mount.operational_root() else {
            return;
        };
        let mut wiring = wiring.borrow_mut();
        if !wiring.is_empty() {
            return;
        }
        if let Some(backdrop) = shadow::query(&root, ".backdrop") {
            let tx = events.tx();
            wiring.push(shadow::listen(&backdrop, "click", move |_| {
                let _ = tx.unbounded_send(ModalEvent::BackdropClick);
            }));
        }
        if let Some(close) = shadow::query(&root, ".close") {
            let tx = events.tx();
            wiring.push(shadow::listen(&close, "click", move |_| {
                let _ = tx.unbounded_send(ModalEvent::CloseClick);
            }));
        }
        let tx = events.tx();
        let escape = shadow::listen_document_keys(move |event| {
            if event.key() == "Escape" {
                let _ = tx.unbounded_send(ModalEvent::Escape);
            }
        });
        wiring.extend(escape);
    });

    // Reflect state into the dialog and move focus on open
    use_effect(move || {
        let current = state();
        let Some(root) = mount.operational_root() else {
            return;
        };
        let Some(dialog) = shadow::query(&root, ".dialog") else {
            return;
        };
        shadow::set_attr(&dialog, "aria-hidden", current.aria_hidden());
        if current.is_open() {
            let target = dialog
                .query_selector(&focusable_query())
                .ok()
                .flatten()
                .or_else(|| shadow::query(&root, ".close"));
            if let Some(target) = target {
                shadow::focus(&target);
            }
        }
    });

    let current = state();
    let backdrop = if current.is_dismissible() { None } else { Some("static") };

    rsx! {
        div {
            id: "{id}",
            class: "ts-modal",
            style: style.unwrap_or_default(),
            "open": current.is_open().then_some(""),
            "aria-hidden": current.aria_hidden(),
            "aria-live": current.aria_live(),
            "data-backdrop": backdrop,
            onmounted: move |evt| mount.bind(evt),
            {children}
        }
    }
}

//! Toast Component
//!
//! Shows the current toast from context and clears it after its duration.

use dioxus::prelude::*;
use gloo::timers::future::TimeoutFuture;

use crate::context::use_toasts;

#[component]
pub fn ToastHost() -> Element {
    let toasts = use_toasts();

    use_effect(move || {
        let Some(active) = toasts.current() else {
            return;
        };
        let mut toasts = toasts;
        spawn(async move {
            TimeoutFuture::new(active.toast.duration_ms).await;
            toasts.dismiss(active.id);
        });
    });

    let Some(active) = toasts.current() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "{active.toast.kind.class()}",
            role: "status",
            "aria-live": "polite",
            "{active.toast.message}"
        }
    }
}

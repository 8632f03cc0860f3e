//! Newsletter Bar Component
//!
//! Template-backed Brevo signup form. Submitting validates the address,
//! reports it to analytics, posts the form in the background and shows a
//! toast. The page never navigates away.

use dioxus::prelude::*;
use orbitlink_core::newsletter::{NewsletterOrigin, Subscription, Toast};
use orbitlink_core::widgets::WidgetKind;
use wasm_bindgen::JsCast;
use web_sys::{HtmlFormElement, HtmlInputElement};

use super::template_host::{use_listeners, use_template};
use crate::context::{use_analytics, use_toasts};
use crate::platform::{fetch, shadow};

/// Brevo newsletter bar
#[component]
pub fn NewsletterBar(
    /// Fragment URL, relative to the document base
    #[props(default = None)]
    src: Option<String>,
) -> Element {
    let mount = use_template(WidgetKind::NewsletterBar, src);
    let analytics = use_analytics();
    let mut toasts = use_toasts();
    let listeners = use_listeners();

    let submissions = use_coroutine(move |mut rx: UnboundedReceiver<HtmlFormElement>| {
        let analytics = analytics.clone();
        async move {
            use futures::StreamExt;
            while let Some(form) = rx.next().await {
                if !form.check_validity() {
                    form.report_validity();
                    continue;
                }

                let input = form
                    .query_selector("#EMAIL")
                    .ok()
                    .flatten()
                    .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
                let raw = input.as_ref().map(|i| i.value()).unwrap_or_default();

                let subscription = match Subscription::parse(NewsletterOrigin::HomeBarBrevo, &raw) {
                    Ok(subscription) => subscription,
                    Err(e) => {
                        tracing::warn!("[newsletter-bar] {}", e);
                        form.report_validity();
                        continue;
                    }
                };
                analytics.track(&subscription.analytics_event());

                match fetch::post_form_opaque(&form).await {
                    Ok(()) => {
                        if let Some(input) = &input {
                            input.set_value("");
                        }
                        toasts.show(Toast::subscribed());
                    }
                    Err(e) => {
                        tracing::error!("[newsletter-bar] Error posting to Brevo: {}", e);
                        toasts.show(Toast::failed());
                    }
                }
            }
        }
    });

    let wiring = listeners.clone();
    use_effect(move || {
        let Some(root) = (mount.root)() else {
            return;
        };
        if !wiring.borrow().is_empty() || !mount.has_hook("#sib-form") {
            return;
        }
        let Some(form) = shadow::query(&root, "#sib-form") else {
            return;
        };
        let Some(form_element) = form.dyn_ref::<HtmlFormElement>().cloned() else {
            tracing::warn!("[newsletter-bar] #sib-form is not a form; widget left inert");
            return;
        };
        let tx = submissions.tx();
        wiring.borrow_mut().push(shadow::listen_blocking(&form, "submit", move |event| {
            event.prevent_default();
            let _ = tx.unbounded_send(form_element.clone());
        }));
    });

    rsx! {
        div {
            class: "newsletter-bar-host",
            onmounted: move |evt| mount.bind(evt),
        }
    }
}

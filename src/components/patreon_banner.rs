//! Patreon Banner Component
//!
//! Template-backed banner; clicking `#patreon_banner_button` reports a
//! `click_patreon_banner` event. Navigation is left to the link itself.

use dioxus::prelude::*;
use orbitlink_core::widgets::WidgetKind;
use orbitlink_core::AnalyticsEvent;

use super::template_host::{use_listeners, use_template};
use crate::context::{use_analytics, use_site_config};
use crate::platform::shadow;

#[component]
pub fn PatreonBanner(
    /// Fragment URL, relative to the document base
    #[props(default = None)]
    src: Option<String>,
) -> Element {
    let mount = use_template(WidgetKind::PatreonBanner, src);
    let analytics = use_analytics();
    let config = use_site_config();
    let listeners = use_listeners();

    let wiring = listeners.clone();
    use_effect(move || {
        let Some(root) = (mount.root)() else {
            return;
        };
        if !wiring.borrow().is_empty() {
            return;
        }
        let Some(button) = shadow::query(&root, "#patreon_banner_button") else {
            tracing::debug!("[patreon-banner] no #patreon_banner_button in fragment");
            return;
        };
        let analytics = analytics.clone();
        let event = AnalyticsEvent::PatreonBannerClick {
            location: config.patreon.banner_location.clone(),
            link_url: config.patreon.link_url.clone(),
        };
        wiring
            .borrow_mut()
            .push(shadow::listen(&button, "click", move |_| analytics.track(&event)));
    });

    rsx! {
        div {
            class: "patreon-banner-host",
            onmounted: move |evt| mount.bind(evt),
        }
    }
}

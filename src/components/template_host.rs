//! Template Host
//!
//! Hook shared by every template-backed widget: loads the fragment through
//! the shared registry, then instantiates it in the host element's shadow
//! root once both the markup and the host are available.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use gloo::events::EventListener;
use orbitlink_core::widgets::{TemplateWidget, WidgetKind};
use web_sys::{Element, ShadowRoot};

use crate::context::use_site;
use crate::platform::shadow;

/// Handles to one mounted widget instance.
#[derive(Clone, Copy, PartialEq)]
pub struct TemplateMount {
    pub widget: Signal<TemplateWidget>,
    pub host: Signal<Option<Element>>,
    /// Set once the fragment (or its error) is in the shadow root
    pub root: Signal<Option<ShadowRoot>>,
}

impl TemplateMount {
    /// `onmounted` handler for the host element.
    pub fn bind(mut self, event: MountedEvent) {
        match event.data().downcast::<Element>() {
            Some(element) => self.host.set(Some(element.clone())),
            None => tracing::warn!(
                "[{}] host is not a DOM element",
                self.widget.peek().kind().name()
            ),
        }
    }

    /// Shadow root of a widget whose required hooks are all present.
    ///
    /// `None` while loading, after a failure, or when the fragment lacks
    /// hooks (the widget stays inert).
    pub fn operational_root(&self) -> Option<ShadowRoot> {
        let root = (self.root)()?;
        self.widget.read().is_operational().then_some(root)
    }

    pub fn has_hook(&self, selector: &str) -> bool {
        self.widget.peek().has_hook(selector)
    }
}

/// Listeners owned by a widget instance; removed when the instance drops.
pub fn use_listeners() -> Rc<RefCell<Vec<EventListener>>> {
    use_hook(|| Rc::new(RefCell::new(Vec::new())))
}

/// Load `kind`'s fragment (from `src`, or the configured default) and
/// instantiate it in the host once mounted.
pub fn use_template(kind: WidgetKind, src: Option<String>) -> TemplateMount {
    let site = use_site();
    let mut widget = use_signal(|| TemplateWidget::new(kind));
    let host = use_signal(|| Option::<Element>::None);
    let mut root = use_signal(|| Option::<ShadowRoot>::None);

    // Fetch once per instance
    use_hook(|| {
        let site = site.clone();
        spawn(async move {
            let mut pending = widget.peek().clone();
            let default_path = kind.default_path(&site.config.templates).to_string();
            pending
                .attach(&site.templates, &site.base_url, src.as_deref(), &default_path)
                .await;
            widget.set(pending);
        });
    });

    // Instantiate when markup and host are both ready
    use_effect(move || {
        let Some(markup) = widget.read().shadow_markup() else {
            return;
        };
        let Some(element) = host() else {
            return;
        };
        if root.peek().is_some() {
            return;
        }
        match shadow::instantiate(&element, &markup) {
            Ok(shadow_root) => root.set(Some(shadow_root)),
            Err(e) => tracing::error!("[{}] could not attach shadow root: {:?}", kind.name(), e),
        }
    });

    TemplateMount { widget, host, root }
}

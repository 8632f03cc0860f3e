//! Site services shared through Dioxus context.
//!
//! Content tree, site config, template registry, analytics and the toast
//! slot are created once in [`crate::app::App`] and read by components via
//! the hooks below.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| services.clone());
//!
//! // In child components
//! let templates = use_templates();
//! let tree = use_content_tree();
//! ```

use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;
use orbitlink_core::newsletter::Toast;
use orbitlink_core::widgets::BubbleDetails;
use orbitlink_core::{
    Analytics, ContentTree, Preferences, SiteConfig, SiteResult, TemplateRegistry,
};
use url::Url;

use crate::platform::analytics::GtagSink;
use crate::platform::fetch::GlooFetcher;
use crate::platform::storage::LocalStorageStore;
use crate::platform::document_base_url;

/// Everything the page needs that outlives a single component.
#[derive(Clone)]
pub struct SiteServices {
    pub tree: Arc<ContentTree>,
    pub config: Arc<SiteConfig>,
    pub templates: TemplateRegistry,
    pub analytics: Analytics,
    /// Base URL used to resolve fragment sources
    pub base_url: Url,
}

impl PartialEq for SiteServices {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.tree, &other.tree)
            && Arc::ptr_eq(&self.config, &other.config)
            && self.templates == other.templates
    }
}

impl SiteServices {
    /// Load the embedded content and wire the browser adapters.
    pub fn load() -> SiteResult<Self> {
        let tree = ContentTree::builtin()?;
        let base_url = document_base_url()?;
        tracing::info!("Loaded content tree with {} nodes", tree.len());

        Ok(Self {
            tree: Arc::new(tree),
            config: Arc::new(SiteConfig::builtin()),
            templates: TemplateRegistry::new(Rc::new(GlooFetcher)),
            analytics: Analytics::new(Rc::new(GtagSink)),
            base_url,
        })
    }
}

/// Toast currently on screen, tagged so stale timers don't clear a newer one
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveToast {
    pub id: u64,
    pub toast: Toast,
}

/// Single toast slot shared by every widget.
#[derive(Clone, Copy, PartialEq)]
pub struct Toasts {
    current: Signal<Option<ActiveToast>>,
    next_id: Signal<u64>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            current: Signal::new(None),
            next_id: Signal::new(0),
        }
    }

    pub fn current(&self) -> Option<ActiveToast> {
        (self.current)()
    }

    /// Replace whatever is showing.
    pub fn show(&mut self, toast: Toast) {
        let id = *self.next_id.peek() + 1;
        self.next_id.set(id);
        self.current.set(Some(ActiveToast { id, toast }));
    }

    /// Clear the toast if it is still the one with `id`.
    pub fn dismiss(&mut self, id: u64) {
        let still_showing = self.current.peek().as_ref().is_some_and(|t| t.id == id);
        if still_showing {
            self.current.set(None);
        }
    }
}

/// Hook to access every site service at once.
pub fn use_site() -> SiteServices {
    use_context::<SiteServices>()
}

/// Hook to access the shared template registry.
pub fn use_templates() -> TemplateRegistry {
    use_site().templates
}

pub fn use_analytics() -> Analytics {
    use_site().analytics
}

pub fn use_content_tree() -> Arc<ContentTree> {
    use_site().tree
}

pub fn use_site_config() -> Arc<SiteConfig> {
    use_site().config
}

/// Preference flags backed by browser `localStorage`.
pub fn use_preferences() -> Preferences<LocalStorageStore> {
    Preferences::new(LocalStorageStore)
}

/// Hook to access the toast slot.
pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

/// Node details shown in the shared planet bubble modal.
///
/// Set by a bubble on click, cleared when the modal closes.
pub fn use_bubble_details() -> Signal<Option<BubbleDetails>> {
    use_context::<Signal<Option<BubbleDetails>>>()
}

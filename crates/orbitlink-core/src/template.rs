//! Process-wide cache of markup fragments.
//!
//! Each template-backed widget fetches its fragment through a shared
//! [`TemplateRegistry`]. A URL is fetched at most once: later requests reuse
//! the cached markup, and requests that arrive while a fetch is still in
//! flight await that same fetch. Entries are never evicted since the
//! fragments are static for the lifetime of the page.
//!
//! Everything runs on the single UI thread, so the registry is `Rc`-shared
//! and not `Send`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use futures::future::{FutureExt, LocalBoxFuture, Shared};
use url::Url;

use crate::error::FetchError;

/// Markup shared by every widget instance using the same URL
pub type Markup = Arc<str>;

type PendingFetch = Shared<LocalBoxFuture<'static, Result<Markup, FetchError>>>;

/// Source of raw fragment markup (browser `fetch`, in-memory fixtures, ...)
pub trait TemplateFetcher {
    /// Fetch `url` and return its body as text.
    fn fetch(&self, url: &str) -> LocalBoxFuture<'static, Result<String, FetchError>>;
}

enum Slot {
    Ready(Markup),
    Pending(PendingFetch),
}

/// Cache of fragment markup keyed by resolved URL.
///
/// Cheap to clone; clones share the same cache.
#[derive(Clone)]
pub struct TemplateRegistry {
    fetcher: Rc<dyn TemplateFetcher>,
    slots: Rc<RefCell<HashMap<String, Slot>>>,
}

impl fmt::Debug for TemplateRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateRegistry")
            .field("cached", &self.len())
            .finish()
    }
}

impl PartialEq for TemplateRegistry {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slots, &other.slots)
    }
}

impl TemplateRegistry {
    pub fn new(fetcher: Rc<dyn TemplateFetcher>) -> Self {
        Self {
            fetcher,
            slots: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    /// Markup already cached for `url`, without fetching.
    pub fn cached(&self, url: &Url) -> Option<Markup> {
        match self.slots.borrow().get(url.as_str()) {
            Some(Slot::Ready(markup)) => Some(markup.clone()),
            _ => None,
        }
    }

    /// Number of fragments fully cached.
    pub fn len(&self) -> usize {
        self.slots
            .borrow()
            .values()
            .filter(|slot| matches!(slot, Slot::Ready(_)))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the markup for `url`, fetching it on first use.
    ///
    /// Failures are not cached, so a later widget instance may try again.
    pub async fn load(&self, url: &Url) -> Result<Markup, FetchError> {
        let key = url.as_str().to_string();

        let pending = {
            let mut slots = self.slots.borrow_mut();
            let in_flight = match slots.get(&key) {
                Some(Slot::Ready(markup)) => return Ok(markup.clone()),
                Some(Slot::Pending(pending)) => Some(pending.clone()),
                None => None,
            };
            match in_flight {
                Some(pending) => pending,
                None => {
                    tracing::debug!("Fetching template {}", key);
                    let pending = self
                        .fetcher
                        .fetch(&key)
                        .map(|result| result.map(Markup::from))
                        .boxed_local()
                        .shared();
                    slots.insert(key.clone(), Slot::Pending(pending.clone()));
                    pending
                }
            }
        };

        let result = pending.clone().await;

        let mut slots = self.slots.borrow_mut();
        match &result {
            Ok(markup) => {
                slots.insert(key, Slot::Ready(markup.clone()));
            }
            Err(err) => {
                // A retry may already own the slot
                let ours = matches!(slots.get(&key), Some(Slot::Pending(current)) if current.ptr_eq(&pending));
                if ours {
                    slots.remove(&key);
                }
                tracing::error!("Template fetch failed for {}: {}", key, err);
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct StaticFetcher {
        body: &'static str,
        calls: Rc<Cell<usize>>,
    }

    impl TemplateFetcher for StaticFetcher {
        fn fetch(&self, _url: &str) -> LocalBoxFuture<'static, Result<String, FetchError>> {
            self.calls.set(self.calls.get() + 1);
            let body = self.body.to_string();
            async move { Ok(body) }.boxed_local()
        }
    }

    #[tokio::test]
    async fn test_cached_after_first_load() {
        let calls = Rc::new(Cell::new(0));
        let registry = TemplateRegistry::new(Rc::new(StaticFetcher {
            body: "<div class=\"dialog\"></div>",
            calls: calls.clone(),
        }));
        let url = Url::parse("https://site.test/elements/modal.html").unwrap();

        assert!(registry.cached(&url).is_none());
        registry.load(&url).await.unwrap();
        registry.load(&url).await.unwrap();

        assert_eq!(calls.get(), 1);
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.cached(&url).as_deref(),
            Some("<div class=\"dialog\"></div>")
        );
    }

    #[test]
    fn test_clones_share_cache() {
        let registry = TemplateRegistry::new(Rc::new(StaticFetcher {
            body: "",
            calls: Rc::new(Cell::new(0)),
        }));
        let clone = registry.clone();
        assert_eq!(registry, clone);
        assert!(clone.is_empty());
    }
}

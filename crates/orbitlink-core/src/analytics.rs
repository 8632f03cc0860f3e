//! Analytics events.
//!
//! Events are emitted fire-and-forget to an optional [`AnalyticsSink`]
//! (GA4 `gtag` in the browser). A missing or failing sink never affects the
//! page: failures are logged and dropped.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde_json::{json, Value};

use crate::newsletter::NewsletterOrigin;

/// Location tag attached to page-level events
pub const HOME_LOCATION: &str = "home_link_in_bio";

/// Every event the site reports
#[derive(Debug, Clone, PartialEq)]
pub enum AnalyticsEvent {
    NewsletterSubmit {
        origin: NewsletterOrigin,
        email_length: usize,
    },
    PatreonBannerClick {
        location: String,
        link_url: String,
    },
    SocialFooterClick {
        network: String,
        link_url: String,
    },
    MobileMenuOpened,
    MobileMenuClosed,
    AccordionToggled {
        title: String,
        open: bool,
    },
    SearchFromHeader,
    SearchFromHomeCard,
    SupportCoffeeClick,
}

impl AnalyticsEvent {
    /// GA4 event name.
    pub fn name(&self) -> &'static str {
        match self {
            AnalyticsEvent::NewsletterSubmit { .. } => "newsletter_submit",
            AnalyticsEvent::PatreonBannerClick { .. } => "click_patreon_banner",
            AnalyticsEvent::SocialFooterClick { .. } => "click_social_footer",
            AnalyticsEvent::MobileMenuOpened => "open_mobile_menu_home",
            AnalyticsEvent::MobileMenuClosed => "close_mobile_menu_home",
            AnalyticsEvent::AccordionToggled { .. } => "accordion_toggle_home",
            AnalyticsEvent::SearchFromHeader => "go_to_search_from_header",
            AnalyticsEvent::SearchFromHomeCard => "go_to_search_from_home_card",
            AnalyticsEvent::SupportCoffeeClick => "click_support_coffee",
        }
    }

    /// GA4 event parameters.
    pub fn params(&self) -> Value {
        match self {
            AnalyticsEvent::NewsletterSubmit {
                origin,
                email_length,
            } => json!({ "origin": origin.as_str(), "email_length": email_length }),
            AnalyticsEvent::PatreonBannerClick { location, link_url } => {
                json!({ "location": location, "link_url": link_url })
            }
            AnalyticsEvent::SocialFooterClick { network, link_url } => json!({
                "network": network,
                "location": HOME_LOCATION,
                "link_url": link_url,
            }),
            AnalyticsEvent::AccordionToggled { title, open } => {
                json!({ "title": title, "open": open })
            }
            AnalyticsEvent::MobileMenuOpened
            | AnalyticsEvent::MobileMenuClosed
            | AnalyticsEvent::SearchFromHeader
            | AnalyticsEvent::SearchFromHomeCard
            | AnalyticsEvent::SupportCoffeeClick => json!({}),
        }
    }
}

/// Destination for analytics events
pub trait AnalyticsSink {
    /// Deliver one event. Errors are reported as text and swallowed by
    /// [`Analytics::track`].
    fn send(&self, name: &str, params: &Value) -> Result<(), String>;
}

/// Best-effort analytics front door.
#[derive(Clone, Default)]
pub struct Analytics {
    sink: Option<Rc<dyn AnalyticsSink>>,
}

impl fmt::Debug for Analytics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Analytics")
            .field("has_sink", &self.sink.is_some())
            .finish()
    }
}

impl Analytics {
    pub fn new(sink: Rc<dyn AnalyticsSink>) -> Self {
        Self { sink: Some(sink) }
    }

    /// No sink: every event is dropped.
    pub fn disabled() -> Self {
        Self { sink: None }
    }

    /// Emit an event; never fails.
    pub fn track(&self, event: &AnalyticsEvent) {
        let Some(sink) = &self.sink else {
            return;
        };
        if let Err(e) = sink.send(event.name(), &event.params()) {
            tracing::warn!("Analytics event {} dropped: {}", event.name(), e);
        }
    }
}

/// Sink that keeps events in memory (tests, debugging).
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: RefCell<Vec<(String, Value)>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<(String, Value)> {
        self.events.borrow().clone()
    }

    pub fn names(&self) -> Vec<String> {
        self.events.borrow().iter().map(|(n, _)| n.clone()).collect()
    }
}

impl AnalyticsSink for RecordingSink {
    fn send(&self, name: &str, params: &Value) -> Result<(), String> {
        self.events
            .borrow_mut()
            .push((name.to_string(), params.clone()));
        Ok(())
    }
}

//! Orbitlink Core Library
//!
//! Browser-free logic behind the Orbitlink link-in-bio site.
//!
//! ## Overview
//!
//! The site is a themed landing page built around a "planet system": the
//! focused node of a static content tree sits in the middle, its children
//! orbit around it, and their own children show up as small satellites.
//! Around it live a few template-backed widgets (modal, newsletter bar,
//! Patreon banner, info panel, planet bubble) and some page glue.
//!
//! This crate holds everything that can be reasoned about without a DOM:
//!
//! - **content**: the validated content tree and id lookup
//! - **navigator**: focus/history/zoom/pan state machine and render plan
//! - **template**: the shared fragment cache
//! - **widgets**: widget mount lifecycle, modal state, panel/bubble views
//! - **page**: home page reducer (theme, menu, accordions, newsletter modal)
//! - **analytics**, **newsletter**, **preferences**, **config**
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use orbitlink_core::{Command, ContentTree, Navigator};
//!
//! let tree = Arc::new(ContentTree::builtin()?);
//! let mut nav = Navigator::new(tree);
//!
//! nav.dispatch(Command::Focus("anime".into()));
//! nav.dispatch(Command::AdjustZoom(0.15));
//!
//! let frame = nav.render();
//! for planet in &frame.orbit.planets {
//!     println!("{} at {}°", planet.node_id, planet.angle_deg);
//! }
//! ```

pub mod analytics;
pub mod config;
pub mod content;
pub mod error;
pub mod navigator;
pub mod newsletter;
pub mod page;
pub mod preferences;
pub mod template;
pub mod widgets;

// Re-exports
pub use analytics::{Analytics, AnalyticsEvent, AnalyticsSink};
pub use config::SiteConfig;
pub use content::{Accent, Action, ContentNode, ContentTree, Logo};
pub use error::{FetchError, SiteError, SiteResult};
pub use navigator::{Command, Navigator, SystemView, Update};
pub use newsletter::{NewsletterOrigin, Subscription, Toast};
pub use page::{Effect, HomePage, PageEvent};
pub use preferences::{PreferenceStore, Preferences, Theme};
pub use template::{Markup, TemplateFetcher, TemplateRegistry};
pub use widgets::{MountState, TemplateWidget, WidgetKind};

//! UI Components for Orbitlink.
//!
//! Template-backed widgets (modal, newsletter bar, Patreon banner, planet
//! info, planet bubble) plus the planet system and page chrome.

mod accordion;
mod modal;
mod newsletter_bar;
mod newsletter_form;
mod patreon_banner;
mod planet_bubble;
mod planet_info;
mod planet_system;
mod site_footer;
mod site_header;
mod template_host;
mod toast;

pub use accordion::Accordion;
pub use newsletter_bar::NewsletterBar;
pub use newsletter_form::{NewsletterForm, NewsletterModal};
pub use patreon_banner::PatreonBanner;
pub use planet_bubble::{BubbleModal, PlanetBubble};
pub use planet_system::PlanetSystem;
pub use site_footer::SiteFooter;
pub use site_header::SiteHeader;
pub use toast::ToastHost;

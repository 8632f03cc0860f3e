//! Home page glue as a reducer.
//!
//! Theme toggle, mobile menu, accordions, the first-visit newsletter modal
//! and the page's newsletter forms are plain event wiring. Each UI event is
//! a [`PageEvent`]; [`HomePage::handle`] updates the page state and returns
//! the side effects (analytics, storage writes, alerts) for the adapter to
//! perform.

use std::collections::BTreeMap;

use crate::analytics::AnalyticsEvent;
use crate::newsletter::{NewsletterOrigin, Subscription, EMPTY_EMAIL_MESSAGE, THANK_YOU_MESSAGE};
use crate::preferences::Theme;

/// A page-level UI event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    ToggleTheme,
    ToggleMenu,
    CloseMenu,
    MenuBackdrop,
    MenuLinkFollowed,
    /// Escape pressed anywhere on the page
    Escape,
    ToggleAccordion { id: String, title: String },
    /// First-visit timer fired
    NewsletterDelayElapsed,
    CloseNewsletterModal,
    SubmitNewsletter { origin: NewsletterOrigin, email: String },
    SearchFromHeader,
    SearchFromHomeCard,
    SupportCoffee,
    SocialLink { network: String, href: String },
}

/// Side effect requested by the reducer
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Track(AnalyticsEvent),
    /// Set `data-theme` on the document element
    ApplyTheme(Theme),
    PersistTheme(Theme),
    MarkNewsletterSeen,
    /// Empty the email input of the given form
    ClearInput(NewsletterOrigin),
    Alert(&'static str),
}

/// Home page state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HomePage {
    theme: Theme,
    menu_open: bool,
    newsletter_modal_open: bool,
    newsletter_seen: bool,
    accordions: BTreeMap<String, bool>,
}

impl HomePage {
    /// Initial state from stored preferences, plus the effects to run on
    /// load.
    pub fn boot(saved_theme: Option<Theme>, newsletter_seen: bool) -> (Self, Vec<Effect>) {
        let page = Self {
            theme: saved_theme.unwrap_or_default(),
            newsletter_seen,
            ..Self::default()
        };
        let effects = saved_theme.map(Effect::ApplyTheme).into_iter().collect();
        (page, effects)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn newsletter_modal_open(&self) -> bool {
        self.newsletter_modal_open
    }

    /// The first-visit timer should be armed.
    pub fn wants_newsletter_modal(&self) -> bool {
        !self.newsletter_seen
    }

    pub fn accordion_open(&self, id: &str) -> bool {
        self.accordions.get(id).copied().unwrap_or(false)
    }

    pub fn handle(&mut self, event: PageEvent) -> Vec<Effect> {
        match event {
            PageEvent::ToggleTheme => {
                self.theme = self.theme.toggled();
                vec![Effect::ApplyTheme(self.theme), Effect::PersistTheme(self.theme)]
            }
            PageEvent::ToggleMenu => {
                if self.menu_open {
                    self.close_menu()
                } else {
                    self.menu_open = true;
                    vec![Effect::Track(AnalyticsEvent::MobileMenuOpened)]
                }
            }
            PageEvent::CloseMenu | PageEvent::MenuBackdrop | PageEvent::MenuLinkFollowed => {
                self.close_menu()
            }
            PageEvent::Escape => {
                let mut effects = self.close_menu();
                effects.extend(self.close_newsletter_modal());
                effects
            }
            PageEvent::ToggleAccordion { id, title } => {
                let open = !self.accordion_open(&id);
                self.accordions.insert(id, open);
                vec![Effect::Track(AnalyticsEvent::AccordionToggled {
                    title: title.trim().to_string(),
                    open,
                })]
            }
            PageEvent::NewsletterDelayElapsed => {
                if !self.newsletter_seen {
                    self.newsletter_modal_open = true;
                }
                Vec::new()
            }
            PageEvent::CloseNewsletterModal => {
                self.newsletter_modal_open = false;
                self.mark_seen()
            }
            PageEvent::SubmitNewsletter { origin, email } => self.submit(origin, &email),
            PageEvent::SearchFromHeader => vec![Effect::Track(AnalyticsEvent::SearchFromHeader)],
            PageEvent::SearchFromHomeCard => {
                vec![Effect::Track(AnalyticsEvent::SearchFromHomeCard)]
            }
            PageEvent::SupportCoffee => vec![Effect::Track(AnalyticsEvent::SupportCoffeeClick)],
            PageEvent::SocialLink { network, href } => {
                let network = if network.is_empty() {
                    "unknown".to_string()
                } else {
                    network
                };
                vec![Effect::Track(AnalyticsEvent::SocialFooterClick {
                    network,
                    link_url: href,
                })]
            }
        }
    }

    fn close_menu(&mut self) -> Vec<Effect> {
        if !self.menu_open {
            return Vec::new();
        }
        self.menu_open = false;
        vec![Effect::Track(AnalyticsEvent::MobileMenuClosed)]
    }

    fn close_newsletter_modal(&mut self) -> Vec<Effect> {
        if !self.newsletter_modal_open {
            return Vec::new();
        }
        self.newsletter_modal_open = false;
        self.mark_seen()
    }

    fn mark_seen(&mut self) -> Vec<Effect> {
        self.newsletter_seen = true;
        vec![Effect::MarkNewsletterSeen]
    }

    fn submit(&mut self, origin: NewsletterOrigin, email: &str) -> Vec<Effect> {
        let subscription = match Subscription::parse(origin, email) {
            Ok(subscription) => subscription,
            Err(_) => {
                return vec![Effect::Alert(EMPTY_EMAIL_MESSAGE)];
            }
        };

        let mut effects = vec![
            Effect::Track(subscription.analytics_event()),
            Effect::ClearInput(origin),
        ];
        if origin == NewsletterOrigin::Modal {
            self.newsletter_modal_open = false;
            effects.extend(self.mark_seen());
        }
        effects.push(Effect::Alert(THANK_YOU_MESSAGE));
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boot_applies_saved_theme() {
        let (page, effects) = HomePage::boot(Some(Theme::Light), false);
        assert_eq!(page.theme(), Theme::Light);
        assert_eq!(effects, vec![Effect::ApplyTheme(Theme::Light)]);
        assert!(page.wants_newsletter_modal());

        let (page, effects) = HomePage::boot(None, true);
        assert_eq!(page.theme(), Theme::Dark);
        assert!(effects.is_empty());
        assert!(!page.wants_newsletter_modal());
    }

    #[test]
    fn test_theme_toggle_persists() {
        let (mut page, _) = HomePage::boot(None, true);
        let effects = page.handle(PageEvent::ToggleTheme);
        assert_eq!(
            effects,
            vec![Effect::ApplyTheme(Theme::Light), Effect::PersistTheme(Theme::Light)]
        );
    }

    #[test]
    fn test_menu_open_close_tracking() {
        let (mut page, _) = HomePage::boot(None, true);
        assert_eq!(
            page.handle(PageEvent::ToggleMenu),
            vec![Effect::Track(AnalyticsEvent::MobileMenuOpened)]
        );
        assert!(page.menu_open());
        assert_eq!(
            page.handle(PageEvent::MenuLinkFollowed),
            vec![Effect::Track(AnalyticsEvent::MobileMenuClosed)]
        );
        assert!(page.handle(PageEvent::MenuBackdrop).is_empty());
    }

    #[test]
    fn test_escape_closes_menu_and_modal() {
        let (mut page, _) = HomePage::boot(None, false);
        page.handle(PageEvent::ToggleMenu);
        page.handle(PageEvent::NewsletterDelayElapsed);
        assert!(page.newsletter_modal_open());

        let effects = page.handle(PageEvent::Escape);
        assert_eq!(
            effects,
            vec![
                Effect::Track(AnalyticsEvent::MobileMenuClosed),
                Effect::MarkNewsletterSeen
            ]
        );
        assert!(!page.menu_open());
        assert!(!page.newsletter_modal_open());
    }

    #[test]
    fn test_newsletter_timer_respects_seen_flag() {
        let (mut page, _) = HomePage::boot(None, true);
        page.handle(PageEvent::NewsletterDelayElapsed);
        assert!(!page.newsletter_modal_open());
    }

    #[test]
    fn test_accordion_toggle() {
        let (mut page, _) = HomePage::boot(None, true);
        let effects = page.handle(PageEvent::ToggleAccordion {
            id: "faq-1".into(),
            title: "  ¿Qué es esto? ".into(),
        });
        assert!(page.accordion_open("faq-1"));
        assert_eq!(
            effects,
            vec![Effect::Track(AnalyticsEvent::AccordionToggled {
                title: "¿Qué es esto?".into(),
                open: true
            })]
        );
        page.handle(PageEvent::ToggleAccordion {
            id: "faq-1".into(),
            title: "x".into(),
        });
        assert!(!page.accordion_open("faq-1"));
    }

    #[test]
    fn test_empty_email_alerts() {
        let (mut page, _) = HomePage::boot(None, true);
        let effects = page.handle(PageEvent::SubmitNewsletter {
            origin: NewsletterOrigin::Bar,
            email: "  ".into(),
        });
        assert_eq!(effects, vec![Effect::Alert(EMPTY_EMAIL_MESSAGE)]);
    }

    #[test]
    fn test_modal_submit_closes_and_marks_seen() {
        let (mut page, _) = HomePage::boot(None, false);
        page.handle(PageEvent::NewsletterDelayElapsed);
        let effects = page.handle(PageEvent::SubmitNewsletter {
            origin: NewsletterOrigin::Modal,
            email: "fan@anime.es".into(),
        });
        assert_eq!(
            effects,
            vec![
                Effect::Track(AnalyticsEvent::NewsletterSubmit {
                    origin: NewsletterOrigin::Modal,
                    email_length: 12
                }),
                Effect::ClearInput(NewsletterOrigin::Modal),
                Effect::MarkNewsletterSeen,
                Effect::Alert(THANK_YOU_MESSAGE),
            ]
        );
        assert!(!page.newsletter_modal_open());
    }

    #[test]
    fn test_social_link_defaults_network() {
        let (mut page, _) = HomePage::boot(None, true);
        let effects = page.handle(PageEvent::SocialLink {
            network: String::new(),
            href: "https://example.org".into(),
        });
        assert_eq!(
            effects,
            vec![Effect::Track(AnalyticsEvent::SocialFooterClick {
                network: "unknown".into(),
                link_url: "https://example.org".into()
            })]
        );
    }
}

//! Newsletter capture.
//!
//! There is no delivery backend: a submission produces an analytics event
//! and, for the newsletter bar, a fire-and-forget POST to the form's
//! third-party action URL whose response is never read.

use crate::analytics::AnalyticsEvent;
use crate::error::{SiteError, SiteResult};

/// Shown when the bar's background POST was dispatched
pub const SUBSCRIBED_MESSAGE: &str = "¡Listo! Te has suscrito con éxito 🙂";
/// Shown when the POST could not be dispatched
pub const SUBSCRIBE_FAILED_MESSAGE: &str = "Ocurrió un error. Inténtalo de nuevo.";
/// Alert for an empty address in the page forms
pub const EMPTY_EMAIL_MESSAGE: &str = "Añade un email válido :)";
/// Alert after a page form submission
pub const THANK_YOU_MESSAGE: &str = "¡Gracias! En breve tendrás noticias anime por email :)";

/// Which form captured the address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NewsletterOrigin {
    /// Inline form in the page body
    Bar,
    /// First-visit newsletter modal
    Modal,
    /// Template-backed bar posting to Brevo
    HomeBarBrevo,
}

impl NewsletterOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            NewsletterOrigin::Bar => "bar",
            NewsletterOrigin::Modal => "modal",
            NewsletterOrigin::HomeBarBrevo => "home_bar_brevo",
        }
    }
}

/// A validated address ready to be reported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    pub email: String,
    pub origin: NewsletterOrigin,
}

impl Subscription {
    /// Trim and validate the raw input.
    pub fn parse(origin: NewsletterOrigin, raw: &str) -> SiteResult<Self> {
        let email = raw.trim();
        if email.is_empty() {
            return Err(SiteError::InvalidEmail("empty".into()));
        }
        if !looks_like_email(email) {
            return Err(SiteError::InvalidEmail(email.to_string()));
        }
        Ok(Self {
            email: email.to_string(),
            origin,
        })
    }

    /// Only the length of the address is reported, never the address.
    pub fn analytics_event(&self) -> AnalyticsEvent {
        AnalyticsEvent::NewsletterSubmit {
            origin: self.origin,
            email_length: self.email.chars().count(),
        }
    }
}

/// Loose `local@domain` check in the spirit of `<input type="email">`.
pub fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
        }
    }
}

/// Transient feedback message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub duration_ms: u32,
}

impl Toast {
    pub fn subscribed() -> Self {
        Self {
            message: SUBSCRIBED_MESSAGE.into(),
            kind: ToastKind::Success,
            duration_ms: 2800,
        }
    }

    pub fn failed() -> Self {
        Self {
            message: SUBSCRIBE_FAILED_MESSAGE.into(),
            kind: ToastKind::Error,
            duration_ms: 3200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims() {
        let sub = Subscription::parse(NewsletterOrigin::Modal, "  fan@anime.es \n").unwrap();
        assert_eq!(sub.email, "fan@anime.es");
    }

    #[test]
    fn test_parse_rejects_empty_and_malformed() {
        assert!(matches!(
            Subscription::parse(NewsletterOrigin::Bar, "   "),
            Err(SiteError::InvalidEmail(_))
        ));
        assert!(Subscription::parse(NewsletterOrigin::Bar, "no-at-sign").is_err());
        assert!(Subscription::parse(NewsletterOrigin::Bar, "a@b@c").is_err());
        assert!(Subscription::parse(NewsletterOrigin::Bar, "@domain.es").is_err());
        assert!(Subscription::parse(NewsletterOrigin::Bar, "fan@ anime.es").is_err());
    }

    #[test]
    fn test_analytics_event_reports_length_only() {
        let sub = Subscription::parse(NewsletterOrigin::HomeBarBrevo, "ñu@x.io").unwrap();
        assert_eq!(
            sub.analytics_event(),
            AnalyticsEvent::NewsletterSubmit {
                origin: NewsletterOrigin::HomeBarBrevo,
                email_length: 7,
            }
        );
    }

    #[test]
    fn test_toasts() {
        assert_eq!(Toast::subscribed().duration_ms, 2800);
        assert_eq!(Toast::failed().kind.class(), "toast toast--error");
    }
}

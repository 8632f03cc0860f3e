//! Modal dialog state.
//!
//! Open/closed is a boolean reflected on the host as the `open` presence
//! attribute. On open, focus moves to the first focusable control inside
//! the dialog (falling back to the close control); previous focus is not
//! restored on close.

/// Selectors tried, in one combined query, when moving focus into the dialog
pub const FOCUSABLE_SELECTORS: &[&str] = &[
    "button:not([disabled])",
    "a[href]",
    "input:not([disabled])",
    "select:not([disabled])",
    "textarea:not([disabled])",
    "[tabindex]:not([tabindex='-1'])",
];

/// Comma-joined form of [`FOCUSABLE_SELECTORS`] for `querySelector`.
pub fn focusable_query() -> String {
    FOCUSABLE_SELECTORS.join(",")
}

/// Inputs understood by a modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent {
    Open,
    Close,
    /// Flip, or force a state when `Some`
    Toggle(Option<bool>),
    BackdropClick,
    CloseClick,
    /// Escape pressed anywhere in the document
    Escape,
}

/// Open/closed state plus dismissal policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalState {
    open: bool,
    /// Backdrop clicks close the dialog (`data-backdrop` is not `static`)
    dismissible: bool,
}

impl Default for ModalState {
    fn default() -> Self {
        Self {
            open: false,
            dismissible: true,
        }
    }
}

impl ModalState {
    pub fn new(open: bool, dismissible: bool) -> Self {
        Self { open, dismissible }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_dismissible(&self) -> bool {
        self.dismissible
    }

    pub fn set_dismissible(&mut self, dismissible: bool) {
        self.dismissible = dismissible;
    }

    /// Apply an event; returns true when the open state changed.
    pub fn handle(&mut self, event: ModalEvent) -> bool {
        let next = match event {
            ModalEvent::Open => true,
            ModalEvent::Close | ModalEvent::CloseClick => false,
            ModalEvent::Toggle(force) => force.unwrap_or(!self.open),
            ModalEvent::BackdropClick if self.dismissible => false,
            ModalEvent::BackdropClick => self.open,
            ModalEvent::Escape => false,
        };
        let changed = next != self.open;
        self.open = next;
        changed
    }

    /// `aria-hidden` value for host and dialog.
    pub fn aria_hidden(&self) -> &'static str {
        if self.open {
            "false"
        } else {
            "true"
        }
    }

    /// `aria-live` is only present while open.
    pub fn aria_live(&self) -> Option<&'static str> {
        self.open.then_some("polite")
    }
}

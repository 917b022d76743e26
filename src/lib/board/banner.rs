use std::time::Duration;

use log::debug;
use tokio::time::Instant;

/// How long a message stays visible after the last one was shown.
pub const BANNER_TIMEOUT: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BannerState {
    #[default]
    Hidden,
    Visible { kind: MessageKind, text: String },
}

/// The single status message element. Every `show` replaces the text and
/// pushes the hide deadline out to [`BANNER_TIMEOUT`] from now, so an earlier
/// pending hide never fires early.
#[derive(Debug, Clone, Default)]
pub struct MessageBanner {
    state: BannerState,
    hide_at: Option<Instant>,
}

impl MessageBanner {
    pub fn show(&mut self, kind: MessageKind, text: impl Into<String>) {
        self.show_at(kind, text, Instant::now());
    }

    pub fn show_at(&mut self, kind: MessageKind, text: impl Into<String>, now: Instant) {
        let text = text.into();
        debug!("Showing {:?} message: {}", kind, text);
        self.state = BannerState::Visible { kind, text };
        self.hide_at = Some(now + BANNER_TIMEOUT);
    }

    /// Hides the message if its deadline has passed. Returns whether it did.
    pub fn hide_if_due(&mut self, now: Instant) -> bool {
        match self.hide_at {
            Some(deadline) if now >= deadline => {
                self.state = BannerState::Hidden;
                self.hide_at = None;
                true
            }
            _ => false,
        }
    }

    pub fn hide_deadline(&self) -> Option<Instant> {
        self.hide_at
    }

    pub fn state(&self) -> &BannerState {
        &self.state
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.state, BannerState::Visible { .. })
    }

    pub fn text(&self) -> Option<&str> {
        match &self.state {
            BannerState::Visible { text, .. } => Some(text),
            BannerState::Hidden => None,
        }
    }

    pub fn kind(&self) -> Option<MessageKind> {
        match &self.state {
            BannerState::Visible { kind, .. } => Some(*kind),
            BannerState::Hidden => None,
        }
    }
}

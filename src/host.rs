//! Host environment effects.
//!
//! Everything a browser page would do *outside* its own DOM (blocking alerts,
//! scrolling, opening new browsing contexts, navigating) goes through the
//! [`Host`] trait so the renderer and binders can run against a recorder.

use tracing::{info, warn};

use crate::id::StableId;

/// How a scroll is animated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

/// Browsing context a URL is opened in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowTarget {
    /// A new browsing context (`_blank`)
    Blank,
    /// The current browsing context (`_self`)
    SelfContext,
}

impl WindowTarget {
    /// The HTML `target` attribute value
    pub fn as_attr(&self) -> &'static str {
        match self {
            Self::Blank => "_blank",
            Self::SelfContext => "_self",
        }
    }
}

/// Side effects a page can ask of its environment
pub trait Host {
    /// Show a blocking, user-facing notification
    fn alert(&mut self, message: &str);

    /// Bring an element into view
    fn scroll_into_view(&mut self, target: StableId, behavior: ScrollBehavior);

    /// Open a URL in the given browsing context
    fn open(&mut self, url: &str, target: WindowTarget);

    /// Follow a link in the current browsing context (default anchor action)
    fn navigate(&mut self, href: &str);
}

// =============================================================================
// RecordingHost
// =============================================================================

/// One recorded host effect
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Alert(String),
    Scroll { target: StableId, behavior: ScrollBehavior },
    Open { url: String, target: WindowTarget },
    Navigate(String),
}

/// Host that records every effect in order
#[derive(Debug, Default)]
pub struct RecordingHost {
    effects: Vec<Effect>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// All effects so far, oldest first
    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    /// Drain recorded effects
    pub fn take(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    /// Number of alerts shown
    pub fn alert_count(&self) -> usize {
        self.effects.iter().filter(|e| matches!(e, Effect::Alert(_))).count()
    }

    /// URLs opened in any browsing context
    pub fn opened(&self) -> impl Iterator<Item = &str> {
        self.effects.iter().filter_map(|e| match e {
            Effect::Open { url, .. } => Some(url.as_str()),
            _ => None,
        })
    }
}

impl Host for RecordingHost {
    fn alert(&mut self, message: &str) {
        self.effects.push(Effect::Alert(message.to_string()));
    }

    fn scroll_into_view(&mut self, target: StableId, behavior: ScrollBehavior) {
        self.effects.push(Effect::Scroll { target, behavior });
    }

    fn open(&mut self, url: &str, target: WindowTarget) {
        self.effects.push(Effect::Open {
            url: url.to_string(),
            target,
        });
    }

    fn navigate(&mut self, href: &str) {
        self.effects.push(Effect::Navigate(href.to_string()));
    }
}

// =============================================================================
// ConsoleHost
// =============================================================================

/// Host for the command line: alerts go to stderr, the rest is logged
#[derive(Debug, Default)]
pub struct ConsoleHost;

impl Host for ConsoleHost {
    fn alert(&mut self, message: &str) {
        warn!(%message, "alert");
        eprintln!("{message}");
    }

    fn scroll_into_view(&mut self, target: StableId, behavior: ScrollBehavior) {
        info!(%target, ?behavior, "scroll into view");
    }

    fn open(&mut self, url: &str, target: WindowTarget) {
        info!(url, target = target.as_attr(), "open");
    }

    fn navigate(&mut self, href: &str) {
        info!(href, "navigate");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_host_keeps_order() {
        let mut host = RecordingHost::new();
        host.navigate("#");
        host.open("https://github.com/ada", WindowTarget::Blank);
        host.alert("boom");

        assert_eq!(host.alert_count(), 1);
        assert_eq!(host.opened().collect::<Vec<_>>(), vec!["https://github.com/ada"]);
        assert_eq!(host.effects()[0], Effect::Navigate("#".into()));

        let drained = host.take();
        assert_eq!(drained.len(), 3);
        assert!(host.effects().is_empty());
    }

    #[test]
    fn test_window_target_attr() {
        assert_eq!(WindowTarget::Blank.as_attr(), "_blank");
        assert_eq!(WindowTarget::SelfContext.as_attr(), "_self");
    }
}

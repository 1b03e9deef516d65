use shout_util::BannerEvent;
use std::time::Duration;

/// Host message types
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Show a new banner, superseding the current one
    Show {
        title: String,
        subtitle: String,
        /// `None` uses the configured default
        duration: Option<Duration>,
    },
    /// Gesture, timer or animation event for the controller
    Banner(BannerEvent),
    /// Programmatic dismissal
    Dismiss,
    /// Log the controller state
    Status,
    /// Stop the event loop
    Quit,
    /// No-op message
    Ignore,
}

use notify_rust::{Notification, Timeout, Urgency};

use crate::domain::entities::alert::Alert;
use crate::domain::ports::notifier::{NotificationError, Notifier};

const APP_NAME: &str = "Sentinel Health Monitor";
const MAX_MESSAGE_CHARS: usize = 200;

pub struct DesktopNotifier;

impl DesktopNotifier {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for DesktopNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, alert: &Alert) -> Result<(), NotificationError> {
        let summary = sanitize_title(&alert.title);
        let body = truncate(&escape_markup(&alert.message), MAX_MESSAGE_CHARS);

        Notification::new()
            .appname(APP_NAME)
            .summary(&summary)
            .body(&body)
            .urgency(Urgency::Critical)
            .timeout(Timeout::Milliseconds(10_000))
            .show()
            .map_err(|_| {
                NotificationError::ChannelUnavailable(
                    "desktop notification server unreachable".to_string(),
                )
            })?;

        Ok(())
    }
}

/// Keeps letters, digits, spaces, hyphens, and underscores. Everything
/// else in a summary line risks interpretation by the notification server.
fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect()
}

// Truncates on Unicode scalar values (not grapheme clusters; ZWJ sequences may split).
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_owned()
    } else {
        let mut result: String = s.chars().take(max_chars - 1).collect();
        result.push('\u{2026}');
        result
    }
}

fn escape_markup(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

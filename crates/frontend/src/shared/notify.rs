//! Blocking user notifications.

/// Blocking dialogs shown to the user.
pub trait Notifier {
    fn alert(&self, message: &str);

    /// Ask for an explicit yes/no. Anything but an explicit yes is a no.
    fn confirm(&self, message: &str) -> bool;
}

/// `window.alert` / `window.confirm`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            log::warn!("No window to show alert: {}", message);
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            log::error!("Failed to show alert: {:?}", e);
        }
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

//! Desktop notifications for completed mode changes.

use dell_thermal_core::host::NotificationSink;
use notify_rust::{Notification, Timeout};
use tracing::{debug, warn};

const APP_NAME: &str = "Dell Thermal Management";
const ICON_NAME: &str = "applications-system-symbolic";
const NOTIFICATION_TIMEOUT_MS: u32 = 4000;

/// [`NotificationSink`] backed by the desktop notification service.
#[derive(Debug, Clone)]
pub struct DesktopNotifier {
    enabled: bool,
}

impl DesktopNotifier {
    /// Create a notifier; when `enabled` is false messages are only logged.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl NotificationSink for DesktopNotifier {
    fn notify(&self, message: &str) {
        if !self.enabled {
            debug!(message = %message, "Notifications disabled");
            return;
        }

        let message = message.to_string();
        let show = move || {
            let result = Notification::new()
                .appname(APP_NAME)
                .summary(APP_NAME)
                .body(&message)
                .icon(ICON_NAME)
                .timeout(Timeout::Milliseconds(NOTIFICATION_TIMEOUT_MS))
                .show();

            match result {
                Ok(_) => debug!(message = %message, "Notification shown"),
                Err(e) => warn!(error = %e, "Failed to show notification"),
            }
        };

        // D-Bus delivery blocks; keep it off the async workers.
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn_blocking(show);
            }
            Err(_) => show(),
        }
    }
}

//! Collaborators the thermal components are wired to.
//!
//! The tray, the settings file, desktop notifications and native dialogs all
//! sit behind these traits so the selector and the runner can be exercised
//! with in-memory fakes.

use crate::{CoreResult, ThermalMode};

use std::{future::Future, sync::Arc};

/// Menu surface holding one selectable entry per thermal mode.
pub trait MenuHost: Send + Sync {
    /// Show or clear the "selected" marker on the entry for `mode`.
    fn set_marker(&self, mode: ThermalMode, selected: bool);

    /// Remove the four mode entries and their containing item.
    fn remove_entries(&self);
}

/// Persistent storage for the `current-thermal-mode` setting.
pub trait SettingsStore: Send + Sync {
    /// Read the stored mode key, `None` when never written.
    fn current_mode(&self) -> CoreResult<Option<String>>;

    /// Overwrite the stored mode key.
    fn store_mode(&self, key: &str) -> CoreResult<()>;
}

/// Transient user-visible messages.
pub trait NotificationSink: Send + Sync {
    /// Show `message` to the user.
    fn notify(&self, message: &str);
}

/// Modal prompt collecting a masked secret.
pub trait SecretPrompt: Send + Sync {
    /// Resolve to the entered text, or `None` if the dialog was dismissed.
    fn prompt(&self, label: &str) -> impl Future<Output = Option<String>> + Send;
}

/// Read-only presentation of command output.
pub trait OutputViewer: Send + Sync {
    /// Display `text`. Must not wait for the user to dismiss it.
    fn show_output(&self, text: &str);
}

impl<T: MenuHost + ?Sized> MenuHost for Arc<T> {
    fn set_marker(&self, mode: ThermalMode, selected: bool) {
        (**self).set_marker(mode, selected);
    }

    fn remove_entries(&self) {
        (**self).remove_entries();
    }
}

impl<T: SettingsStore + ?Sized> SettingsStore for Arc<T> {
    fn current_mode(&self) -> CoreResult<Option<String>> {
        (**self).current_mode()
    }

    fn store_mode(&self, key: &str) -> CoreResult<()> {
        (**self).store_mode(key)
    }
}

impl<T: NotificationSink + ?Sized> NotificationSink for Arc<T> {
    fn notify(&self, message: &str) {
        (**self).notify(message);
    }
}

impl<T: SecretPrompt> SecretPrompt for Arc<T> {
    fn prompt(&self, label: &str) -> impl Future<Output = Option<String>> + Send {
        (**self).prompt(label)
    }
}

impl<T: OutputViewer + ?Sized> OutputViewer for Arc<T> {
    fn show_output(&self, text: &str) {
        (**self).show_output(text);
    }
}

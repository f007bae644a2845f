//! Toast notifications on top of thaw's toaster.

use crate::shared::config::app_config;
use leptos::prelude::*;
use std::time::Duration;
use thaw::*;

/// Copyable handle to the app toaster.
///
/// Must be created inside a component (it reads the `ToasterProvider`
/// context), but can then be moved into async tasks freely.
#[derive(Clone, Copy)]
pub struct Notifier {
    toaster: StoredValue<Option<ToasterInjection>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            toaster: StoredValue::new(use_context::<ToasterInjection>()),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.dispatch(ToastIntent::Success, "Listo", message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.dispatch(ToastIntent::Error, "Error", message.into());
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.dispatch(ToastIntent::Warning, "Atención", message.into());
    }

    fn dispatch(&self, intent: ToastIntent, title: &'static str, body: String) {
        let timeout = Duration::from_millis(app_config().ui.toast_timeout_ms);
        let shown = self
            .toaster
            .try_with_value(|toaster| {
                if let Some(toaster) = toaster {
                    toaster.dispatch_toast(
                        move || {
                            view! {
                                <Toast>
                                    <ToastTitle>{title}</ToastTitle>
                                    <ToastBody>{body}</ToastBody>
                                </Toast>
                            }
                        },
                        ToastOptions::default()
                            .with_intent(intent)
                            .with_timeout(timeout),
                    );
                    true
                } else {
                    false
                }
            })
            .unwrap_or(false);
        if !shown {
            log::debug!("toast dropped (no toaster): {}", title);
        }
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

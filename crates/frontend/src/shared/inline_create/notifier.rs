/// Shows a failure message to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Blocking `window.alert()`, same as the rest of the admin pages.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.alert_with_message(message) {
                    log::error!("alert failed: {e:?}; message was: {message}");
                }
            }
            None => log::error!("no window to alert: {message}"),
        }
    }
}

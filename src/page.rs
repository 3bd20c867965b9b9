//! Page Effects
//!
//! Navigation and alert seam over `window`.

/// User-visible effects a click can have
pub trait Page {
    /// Navigate without adding a history entry
    fn replace_location(&self, url: &str);
    /// Blocking user-facing message
    fn alert(&self, message: &str);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPage;

impl Page for BrowserPage {
    fn replace_location(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            log::error!("No window, cannot navigate to {}", url);
            return;
        };
        if let Err(e) = window.location().replace(url) {
            log::error!("location.replace({}) failed: {:?}", url, e);
        }
    }

    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            log::error!("No window, cannot alert: {}", message);
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            log::error!("alert failed: {:?}", e);
        }
    }
}

//! Window-level bridges: file download and alert dialogs.

use poster::error::CapabilityError;
use poster::export::{Downloader, Notifier};
use wasm_bindgen::{JsCast, JsValue};

/// Best-effort text for a rejected JS value.
pub fn describe_js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Saves files by clicking a temporary `<a download>` element.
pub struct AnchorDownloader;

impl Downloader for AnchorDownloader {
    fn download(&self, filename: &str, data_url: &str) -> Result<(), CapabilityError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| CapabilityError::Unavailable("document".to_owned()))?;
        let link = document
            .create_element("a")
            .map_err(|e| CapabilityError::Download(describe_js_error(&e)))?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| CapabilityError::Download("created element is not an anchor".to_owned()))?;
        link.set_download(filename);
        link.set_href(data_url);
        link.click();
        Ok(())
    }
}

/// Shows messages with `window.alert`.
pub struct WindowNotifier;

impl Notifier for WindowNotifier {
    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            log::warn!("no window for alert: {message}");
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            log::warn!("alert failed: {}", describe_js_error(&e));
        }
    }
}

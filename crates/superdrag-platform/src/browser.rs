use superdrag_common::PlatformError;

/// Open a URL in the user's default browser.
pub fn open_in_browser(url: &str) -> Result<(), PlatformError> {
    tracing::debug!(url, "opening in system browser");
    open::that(url).map_err(|e| PlatformError::NotSupported(format!("failed to open {url}: {e}")))
}

//! Tab host backed by the user's default browser.
//!
//! The desktop browser is driven through the OS URL handler, so there is no
//! tab position to report and no way to run page scripts.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use serde_json::Value;
use superdrag_common::DispatchError;
use superdrag_dispatch::{TabHost, TabId};

#[derive(Debug, Default)]
pub struct SystemBrowser {
    opened: AtomicU64,
}

impl SystemBrowser {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TabHost for SystemBrowser {
    async fn active_tab_index(&self) -> Option<usize> {
        None
    }

    async fn create_tab(&self, url: &str, _index: Option<usize>) -> Result<TabId, DispatchError> {
        let url = url.to_owned();
        tokio::task::spawn_blocking(move || superdrag_platform::open_in_browser(&url))
            .await
            .map_err(|e| DispatchError::TabError(e.to_string()))?
            .map_err(|e| DispatchError::TabError(e.to_string()))?;
        Ok(TabId(self.opened.fetch_add(1, Ordering::Relaxed)))
    }

    async fn wait_for_load(&self, _tab: TabId) -> Result<(), DispatchError> {
        Ok(())
    }

    async fn evaluate(&self, _tab: TabId, _script: &str) -> Result<Value, DispatchError> {
        Err(DispatchError::ScriptError(
            "the system browser does not accept page scripts".into(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scripts_are_not_supported() {
        let browser = SystemBrowser::new();
        assert_eq!(browser.active_tab_index().await, None);
        let err = browser.evaluate(TabId(0), "1 + 1").await.unwrap_err();
        assert!(matches!(err, DispatchError::ScriptError(_)));
    }
}

use async_trait::async_trait;
use serde_json::Value;
use superdrag_common::DispatchError;

/// Opaque handle to a browser tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabId(pub u64);

/// The browser the dispatcher opens tabs in.
#[async_trait]
pub trait TabHost: Send + Sync {
    /// Position of the active tab, if the host tracks one.
    async fn active_tab_index(&self) -> Option<usize>;

    /// Open `url` in a new active tab at `index` (or the host's default).
    async fn create_tab(&self, url: &str, index: Option<usize>) -> Result<TabId, DispatchError>;

    /// Resolves once the tab finishes loading.
    async fn wait_for_load(&self, tab: TabId) -> Result<(), DispatchError>;

    /// Run `script` in the tab and return its completion value.
    async fn evaluate(&self, tab: TabId, script: &str) -> Result<Value, DispatchError>;
}

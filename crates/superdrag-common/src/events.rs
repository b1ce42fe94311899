use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// One changed setting, as delivered by the storage change feed.
///
/// `new_value` is `null` when the key was removed from storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigChange {
    pub key: String,
    pub new_value: serde_json::Value,
}

impl ConfigChange {
    pub fn new(key: impl Into<String>, new_value: impl Into<serde_json::Value>) -> Self {
        Self {
            key: key.into(),
            new_value: new_value.into(),
        }
    }
}

/// Broadcast channel carrying configuration changes to every open context.
pub struct EventBus {
    sender: broadcast::Sender<ConfigChange>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ConfigChange> {
        self.sender.subscribe()
    }

    pub fn publish(&self, change: ConfigChange) -> usize {
        self.sender.send(change).unwrap_or(0)
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}

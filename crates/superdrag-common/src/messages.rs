//! Wire format for the fire-and-forget hand-off from a gesture context to
//! the dispatcher that opens tabs. The sender never waits for a reply.

use serde::{Deserialize, Serialize};

use crate::actions::ActionId;

/// Messages accepted by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DispatchMessage {
    #[serde(rename = "search")]
    Search {
        #[serde(rename = "engineId")]
        engine_id: String,
        text: String,
    },
}

impl DispatchMessage {
    /// Build a search hand-off for an action that leaves this context.
    ///
    /// Returns `None` for `none` and `copy`, which never reach the dispatcher.
    pub fn for_action(action: ActionId, text: impl Into<String>) -> Option<Self> {
        action.engine_id().map(|engine_id| DispatchMessage::Search {
            engine_id: engine_id.to_owned(),
            text: text.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::SearchEngine;

    #[test]
    fn search_message_wire_shape() {
        let msg = DispatchMessage::for_action(
            ActionId::OpenSearch(SearchEngine::Google),
            "hello world",
        )
        .unwrap();
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "search", "engineId": "google", "text": "hello world"})
        );
    }

    #[test]
    fn local_actions_have_no_message() {
        assert!(DispatchMessage::for_action(ActionId::Copy, "x").is_none());
        assert!(DispatchMessage::for_action(ActionId::None, "x").is_none());
    }

    #[test]
    fn parses_incoming_message() {
        let raw = r#"{"type":"search","engineId":"deepl","text":"こんにちは"}"#;
        let msg: DispatchMessage = serde_json::from_str(raw).unwrap();
        assert_eq!(
            msg,
            DispatchMessage::Search {
                engine_id: "deepl".into(),
                text: "こんにちは".into(),
            }
        );
    }
}

//! Filling a chat service's prompt box once its page has rendered.
//!
//! Each attempt evaluates a small script that tries the selectors in order,
//! writes the text into the first match and fires `input`/`change` so the
//! page's own framework notices. Attempts repeat on an interval because
//! these pages build their editors after load.

use std::time::Duration;

use serde_json::Value;
use superdrag_common::DispatchError;
use tokio::time::sleep;
use tracing::{debug, info};

use crate::tabs::{TabHost, TabId};

/// Timing of the load, settle and retry phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutofillPolicy {
    pub load_timeout: Duration,
    pub settle_delay: Duration,
    pub retry_interval: Duration,
    pub max_attempts: u32,
}

impl Default for AutofillPolicy {
    fn default() -> Self {
        Self {
            load_timeout: Duration::from_secs(10),
            settle_delay: Duration::from_millis(500),
            retry_interval: Duration::from_millis(100),
            max_attempts: 50,
        }
    }
}

/// Script for one fill attempt. Evaluates to `true` when an element was
/// found and filled.
pub fn fill_script(text: &str, selectors: &[&str]) -> String {
    let text_json = serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_string());
    let selectors_json = serde_json::to_string(selectors).unwrap_or_else(|_| "[]".to_string());
    format!(
        r#"(function(text, selectors) {{
    for (const selector of selectors) {{
        const el = document.querySelector(selector);
        if (!el) continue;
        el.focus();
        if (el.tagName === 'TEXTAREA' || el.tagName === 'INPUT') {{
            el.value = text;
        }} else if (el.isContentEditable) {{
            el.textContent = text;
            el.dispatchEvent(new InputEvent('input', {{ bubbles: true, cancelable: true, inputType: 'insertText', data: text }}));
        }} else {{
            continue;
        }}
        el.dispatchEvent(new Event('input', {{ bubbles: true }}));
        el.dispatchEvent(new Event('change', {{ bubbles: true }}));
        return true;
    }}
    return false;
}})({text_json}, {selectors_json});"#
    )
}

/// Retry the fill script until it succeeds or attempts run out. Returns the
/// number of attempts used.
pub async fn autofill(
    host: &dyn TabHost,
    tab: TabId,
    text: &str,
    selectors: &[&str],
    policy: &AutofillPolicy,
) -> Result<u32, DispatchError> {
    let script = fill_script(text, selectors);
    for attempt in 1..=policy.max_attempts {
        match host.evaluate(tab, &script).await? {
            Value::Bool(true) => {
                info!(tab = tab.0, attempt, "prompt autofilled");
                return Ok(attempt);
            }
            _ => debug!(tab = tab.0, attempt, "prompt input not found yet"),
        }
        if attempt < policy.max_attempts {
            sleep(policy.retry_interval).await;
        }
    }
    Err(DispatchError::AutofillTimeout {
        attempts: policy.max_attempts,
    })
}

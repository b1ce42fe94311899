//! Receives search hand-offs and opens tabs.
//!
//! Senders never wait: messages arrive over an unbounded channel and every
//! failure here ends in a log line.

use std::sync::{Arc, RwLock};

use superdrag_common::{ActionId, AiService, ConfigChange, DispatchError, DispatchMessage};
use tokio::sync::{broadcast, mpsc};
use tokio::time::{sleep, timeout};
use tracing::{debug, error, info, warn};

use crate::ai::chat_target;
use crate::autofill::{autofill, AutofillPolicy};
use crate::tabs::{TabHost, TabId};
use crate::templates::{fill, search_template, translate_template};

const LOCALE_KEY: &str = "locale";
const DEFAULT_LOCALE: &str = "en";

/// What handling one message did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// `none`, `copy`, or a malformed message.
    Ignored,
    Opened(TabId),
    Filled { tab: TabId, attempts: u32 },
}

pub struct Dispatcher<H: TabHost> {
    host: Arc<H>,
    locale: Arc<RwLock<String>>,
    policy: AutofillPolicy,
}

impl<H: TabHost> Clone for Dispatcher<H> {
    fn clone(&self) -> Self {
        Self {
            host: Arc::clone(&self.host),
            locale: Arc::clone(&self.locale),
            policy: self.policy,
        }
    }
}

impl<H: TabHost + 'static> Dispatcher<H> {
    pub fn new(host: H, locale: impl Into<String>) -> Self {
        Self {
            host: Arc::new(host),
            locale: Arc::new(RwLock::new(locale.into())),
            policy: AutofillPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: AutofillPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn locale(&self) -> String {
        match self.locale.read() {
            Ok(locale) => locale.clone(),
            Err(_) => DEFAULT_LOCALE.to_owned(),
        }
    }

    pub fn set_locale(&self, locale: impl Into<String>) {
        if let Ok(mut current) = self.locale.write() {
            *current = locale.into();
        }
    }

    /// Follow `locale` entries on the change feed.
    pub fn apply_change(&self, change: &ConfigChange) {
        if change.key != LOCALE_KEY {
            return;
        }
        let locale = change
            .new_value
            .as_str()
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_LOCALE);
        debug!(locale, "dispatcher locale changed");
        self.set_locale(locale);
    }

    pub async fn handle(&self, message: DispatchMessage) -> Result<Handled, DispatchError> {
        let DispatchMessage::Search { engine_id, text } = message;
        if engine_id.is_empty() || text.is_empty() {
            error!("invalid message: missing engineId or text");
            return Ok(Handled::Ignored);
        }

        let action = ActionId::parse(&engine_id)
            .ok_or_else(|| DispatchError::UnknownEngine(engine_id.clone()))?;
        let locale = self.locale();
        match action {
            ActionId::None | ActionId::Copy => Ok(Handled::Ignored),
            ActionId::OpenSearch(engine) => {
                let url = fill(search_template(engine, &locale), &text);
                self.open_adjacent(&url).await.map(Handled::Opened)
            }
            ActionId::OpenTranslate(translator) => {
                let url = fill(translate_template(translator, &locale), &text);
                self.open_adjacent(&url).await.map(Handled::Opened)
            }
            ActionId::OpenAiChat(service) => self.open_chat(service, &text).await,
        }
    }

    async fn open_adjacent(&self, url: &str) -> Result<TabId, DispatchError> {
        let index = self.host.active_tab_index().await.map(|i| i + 1);
        let tab = self.host.create_tab(url, index).await?;
        info!(tab = tab.0, url, "opened tab");
        Ok(tab)
    }

    async fn open_chat(&self, service: AiService, text: &str) -> Result<Handled, DispatchError> {
        let target = chat_target(service);
        let tab = self.open_adjacent(target.url).await?;

        match timeout(self.policy.load_timeout, self.host.wait_for_load(tab)).await {
            Ok(result) => result?,
            Err(_) => {
                return Err(DispatchError::TabError(format!(
                    "tab {} did not finish loading within {:?}",
                    tab.0, self.policy.load_timeout
                )))
            }
        }
        sleep(self.policy.settle_delay).await;

        let attempts =
            autofill(self.host.as_ref(), tab, text, target.selectors, &self.policy).await?;
        Ok(Handled::Filled { tab, attempts })
    }

    /// Serve messages until every sender is gone. Each message runs on its
    /// own task so a slow autofill never delays the next hand-off.
    pub async fn run(
        self,
        mut messages: mpsc::UnboundedReceiver<DispatchMessage>,
        mut changes: broadcast::Receiver<ConfigChange>,
    ) {
        info!("dispatcher started");
        let mut changes_open = true;
        loop {
            tokio::select! {
                message = messages.recv() => {
                    let Some(message) = message else { break };
                    let dispatcher = self.clone();
                    tokio::spawn(async move {
                        if let Err(e) = dispatcher.handle(message).await {
                            warn!("dispatch failed: {e}");
                        }
                    });
                }
                change = changes.recv(), if changes_open => match change {
                    Ok(change) => self.apply_change(&change),
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        warn!(skipped = n, "dispatcher missed settings changes");
                    }
                    Err(broadcast::error::RecvError::Closed) => changes_open = false,
                },
            }
        }
        info!("dispatcher stopped");
    }
}

#[cfg(test)]
mod tests;

use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use superdrag_common::EventBus;

use super::*;

#[derive(Default)]
struct FakeBrowser {
    active: Option<usize>,
    created: Mutex<Vec<(String, Option<usize>)>>,
    scripts: Mutex<Vec<String>>,
    next_id: AtomicU64,
    /// Evaluations that report "not found" before one succeeds.
    misses_before_fill: u32,
    evaluations: AtomicU32,
    never_loads: bool,
}

impl FakeBrowser {
    fn at_tab(active: usize) -> Self {
        Self {
            active: Some(active),
            ..Self::default()
        }
    }

    fn created(&self) -> Vec<(String, Option<usize>)> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl TabHost for FakeBrowser {
    async fn active_tab_index(&self) -> Option<usize> {
        self.active
    }

    async fn create_tab(&self, url: &str, index: Option<usize>) -> Result<TabId, DispatchError> {
        self.created.lock().unwrap().push((url.to_owned(), index));
        Ok(TabId(self.next_id.fetch_add(1, Ordering::SeqCst)))
    }

    async fn wait_for_load(&self, _tab: TabId) -> Result<(), DispatchError> {
        if self.never_loads {
            std::future::pending::<()>().await;
        }
        Ok(())
    }

    async fn evaluate(&self, _tab: TabId, script: &str) -> Result<Value, DispatchError> {
        self.scripts.lock().unwrap().push(script.to_owned());
        let n = self.evaluations.fetch_add(1, Ordering::SeqCst);
        Ok(Value::Bool(n >= self.misses_before_fill))
    }
}

fn fast_policy() -> AutofillPolicy {
    AutofillPolicy {
        load_timeout: Duration::from_millis(50),
        settle_delay: Duration::ZERO,
        retry_interval: Duration::from_millis(1),
        max_attempts: 5,
    }
}

fn search(engine: &str, text: &str) -> DispatchMessage {
    DispatchMessage::Search {
        engine_id: engine.into(),
        text: text.into(),
    }
}

#[tokio::test]
async fn search_opens_next_to_active_tab() {
    let dispatcher = Dispatcher::new(FakeBrowser::at_tab(3), "en");

    let handled = dispatcher.handle(search("google", "hello world")).await.unwrap();

    assert_eq!(handled, Handled::Opened(TabId(0)));
    assert_eq!(
        dispatcher.host().created(),
        vec![(
            "https://www.google.com/search?q=hello%20world".to_owned(),
            Some(4)
        )]
    );
}

#[tokio::test]
async fn no_active_tab_uses_host_default_position() {
    let dispatcher = Dispatcher::new(FakeBrowser::default(), "en");
    dispatcher.handle(search("youtube", "rust")).await.unwrap();
    assert_eq!(dispatcher.host().created()[0].1, None);
}

#[tokio::test]
async fn locale_selects_template_variant() {
    let dispatcher = Dispatcher::new(FakeBrowser::default(), "ja");
    dispatcher.handle(search("amazon", "本")).await.unwrap();
    dispatcher.apply_change(&ConfigChange::new("locale", "en"));
    dispatcher.handle(search("amazon", "book")).await.unwrap();

    let created = dispatcher.host().created();
    assert!(created[0].0.starts_with("https://www.amazon.co.jp/s?k="));
    assert_eq!(created[1].0, "https://www.amazon.com/s?k=book");
}

#[tokio::test]
async fn translate_uses_translator_template() {
    let dispatcher = Dispatcher::new(FakeBrowser::default(), "ja");
    dispatcher.handle(search("deepl", "good morning")).await.unwrap();
    assert_eq!(
        dispatcher.host().created()[0].0,
        "https://www.deepl.com/translator#en/ja/good%20morning"
    );
}

#[tokio::test]
async fn local_and_malformed_messages_are_ignored() {
    let dispatcher = Dispatcher::new(FakeBrowser::default(), "en");
    for message in [
        search("none", "x"),
        search("copy", "x"),
        search("", "x"),
        search("google", ""),
    ] {
        assert_eq!(dispatcher.handle(message).await.unwrap(), Handled::Ignored);
    }
    assert!(dispatcher.host().created().is_empty());
}

#[tokio::test]
async fn unknown_engine_is_an_error() {
    let dispatcher = Dispatcher::new(FakeBrowser::default(), "en");
    let err = dispatcher.handle(search("bing", "x")).await.unwrap_err();
    assert!(matches!(err, DispatchError::UnknownEngine(id) if id == "bing"));
}

#[tokio::test]
async fn chat_opens_service_and_retries_fill() {
    let browser = FakeBrowser {
        misses_before_fill: 2,
        ..FakeBrowser::at_tab(0)
    };
    let dispatcher = Dispatcher::new(browser, "en").with_policy(fast_policy());

    let handled = dispatcher.handle(search("claude", "explain this")).await.unwrap();

    assert_eq!(
        handled,
        Handled::Filled {
            tab: TabId(0),
            attempts: 3
        }
    );
    assert_eq!(
        dispatcher.host().created(),
        vec![("https://claude.ai/new".to_owned(), Some(1))]
    );
    let scripts = dispatcher.host().scripts.lock().unwrap();
    assert!(scripts[0].contains("\"explain this\""));
    assert!(scripts[0].contains("ProseMirror"));
}

#[tokio::test]
async fn chat_fill_gives_up_after_budget() {
    let browser = FakeBrowser {
        misses_before_fill: u32::MAX,
        ..FakeBrowser::default()
    };
    let dispatcher = Dispatcher::new(browser, "en").with_policy(fast_policy());

    let err = dispatcher.handle(search("gemini", "x")).await.unwrap_err();
    assert!(matches!(err, DispatchError::AutofillTimeout { attempts: 5 }));
    assert_eq!(dispatcher.host().evaluations.load(Ordering::SeqCst), 5);
}

#[tokio::test]
async fn chat_load_timeout_skips_fill() {
    let browser = FakeBrowser {
        never_loads: true,
        ..FakeBrowser::default()
    };
    let dispatcher = Dispatcher::new(browser, "en").with_policy(fast_policy());

    let err = dispatcher.handle(search("chatgpt", "x")).await.unwrap_err();
    assert!(matches!(err, DispatchError::TabError(_)));
    assert_eq!(dispatcher.host().evaluations.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn run_serves_until_senders_drop() {
    let dispatcher = Dispatcher::new(FakeBrowser::default(), "en");
    let probe = dispatcher.clone();
    let bus = EventBus::default();
    let (tx, rx) = mpsc::unbounded_channel();

    let task = tokio::spawn(dispatcher.run(rx, bus.subscribe()));
    tx.send(search("twitter", "rust")).unwrap();
    drop(tx);
    task.await.unwrap();

    // The spawned handler may still be finishing.
    for _ in 0..50 {
        if !probe.host().created().is_empty() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    assert_eq!(
        probe.host().created()[0].0,
        "https://x.com/search?q=rust"
    );
}

#[tokio::test]
async fn run_follows_locale_changes() {
    let dispatcher = Dispatcher::new(FakeBrowser::default(), "en");
    let probe = dispatcher.clone();
    let bus = EventBus::default();
    let (tx, rx) = mpsc::unbounded_channel();
    let task = tokio::spawn(dispatcher.run(rx, bus.subscribe()));

    bus.publish(ConfigChange::new("locale", "ja"));
    for _ in 0..50 {
        if probe.locale() == "ja" {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    assert_eq!(probe.locale(), "ja");

    bus.publish(ConfigChange::new("locale", Value::Null));
    for _ in 0..50 {
        if probe.locale() == "en" {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    assert_eq!(probe.locale(), "en");

    drop(tx);
    task.await.unwrap();
}

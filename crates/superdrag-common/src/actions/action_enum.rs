use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Web search engines reachable through a URL template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchEngine {
    Google,
    Youtube,
    Twitter,
    Rakuten,
    Amazon,
    Maps,
}

/// Translation services reachable through a URL template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Translator {
    DeepL,
    GoogleTranslate,
}

/// AI chat services whose input field is filled after the page opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AiService {
    ChatGpt,
    Claude,
    Gemini,
}

impl SearchEngine {
    pub const ALL: [SearchEngine; 6] = [
        SearchEngine::Google,
        SearchEngine::Youtube,
        SearchEngine::Twitter,
        SearchEngine::Rakuten,
        SearchEngine::Amazon,
        SearchEngine::Maps,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchEngine::Google => "google",
            SearchEngine::Youtube => "youtube",
            SearchEngine::Twitter => "twitter",
            SearchEngine::Rakuten => "rakuten",
            SearchEngine::Amazon => "amazon",
            SearchEngine::Maps => "maps",
        }
    }
}

impl Translator {
    pub const ALL: [Translator; 2] = [Translator::DeepL, Translator::GoogleTranslate];

    pub fn as_str(&self) -> &'static str {
        match self {
            Translator::DeepL => "deepl",
            Translator::GoogleTranslate => "gtranslate",
        }
    }
}

impl AiService {
    pub const ALL: [AiService; 3] = [AiService::ChatGpt, AiService::Claude, AiService::Gemini];

    pub fn as_str(&self) -> &'static str {
        match self {
            AiService::ChatGpt => "chatgpt",
            AiService::Claude => "claude",
            AiService::Gemini => "gemini",
        }
    }
}

/// Everything a gesture or a guide label can trigger.
///
/// Configuration stores these as plain identifiers (`"google"`, `"copy"`,
/// `"none"`); parsing happens once at the edge so the executor can match
/// exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ActionId {
    None,
    Copy,
    OpenSearch(SearchEngine),
    OpenTranslate(Translator),
    OpenAiChat(AiService),
}

/// Returned when a configured identifier names no known action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown action id: {0:?}")]
pub struct UnknownActionId(pub String);

impl ActionId {
    /// The configuration identifier for this action.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionId::None => "none",
            ActionId::Copy => "copy",
            ActionId::OpenSearch(engine) => engine.as_str(),
            ActionId::OpenTranslate(translator) => translator.as_str(),
            ActionId::OpenAiChat(service) => service.as_str(),
        }
    }

    pub fn parse(id: &str) -> Option<ActionId> {
        match id {
            "none" => return Some(ActionId::None),
            "copy" => return Some(ActionId::Copy),
            _ => {}
        }
        if let Some(engine) = SearchEngine::ALL.iter().find(|e| e.as_str() == id) {
            return Some(ActionId::OpenSearch(*engine));
        }
        if let Some(translator) = Translator::ALL.iter().find(|t| t.as_str() == id) {
            return Some(ActionId::OpenTranslate(*translator));
        }
        AiService::ALL
            .iter()
            .find(|s| s.as_str() == id)
            .map(|s| ActionId::OpenAiChat(*s))
    }

    /// Identifier sent to the dispatcher, `None` for actions handled locally.
    pub fn engine_id(&self) -> Option<&'static str> {
        match self {
            ActionId::None | ActionId::Copy => None,
            other => Some(other.as_str()),
        }
    }

    /// Every selectable action, in the order a settings view lists them.
    pub fn all() -> Vec<ActionId> {
        let mut all = Vec::with_capacity(13);
        all.extend(SearchEngine::ALL.iter().map(|e| ActionId::OpenSearch(*e)));
        all.extend(Translator::ALL.iter().map(|t| ActionId::OpenTranslate(*t)));
        all.extend(AiService::ALL.iter().map(|s| ActionId::OpenAiChat(*s)));
        all.push(ActionId::Copy);
        all.push(ActionId::None);
        all
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionId {
    type Err = UnknownActionId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionId::parse(s).ok_or_else(|| UnknownActionId(s.to_owned()))
    }
}

impl TryFrom<String> for ActionId {
    type Error = UnknownActionId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ActionId> for String {
    fn from(action: ActionId) -> Self {
        action.as_str().to_owned()
    }
}

use super::{ActionId, AiService, SearchEngine, Translator};

impl ActionId {
    /// Human-readable label shown on guide overlay entries.
    pub fn label(&self) -> &'static str {
        match self {
            ActionId::None => "",
            ActionId::Copy => "📋 Copy",
            ActionId::OpenSearch(SearchEngine::Google) => "🔍 Google",
            ActionId::OpenSearch(SearchEngine::Youtube) => "🎬 YouTube",
            ActionId::OpenSearch(SearchEngine::Twitter) => "𝕏 (Twitter)",
            ActionId::OpenSearch(SearchEngine::Rakuten) => "🛒 Rakuten",
            ActionId::OpenSearch(SearchEngine::Amazon) => "📦 Amazon",
            ActionId::OpenSearch(SearchEngine::Maps) => "🗺️ Maps",
            ActionId::OpenTranslate(Translator::DeepL) => "🌐 DeepL",
            ActionId::OpenTranslate(Translator::GoogleTranslate) => "🌐 Google Translate",
            ActionId::OpenAiChat(AiService::ChatGpt) => "🤖 ChatGPT",
            ActionId::OpenAiChat(AiService::Claude) => "🧠 Claude",
            ActionId::OpenAiChat(AiService::Gemini) => "✨ Gemini",
        }
    }
}

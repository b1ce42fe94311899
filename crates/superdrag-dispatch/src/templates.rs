//! Search and translation URL templates.
//!
//! `%s` in a template is replaced by the percent-encoded query. Locale `ja`
//! selects the Japanese regional variants; every other locale uses the
//! global ones.

use superdrag_common::{SearchEngine, Translator};

const QUERY_PLACEHOLDER: &str = "%s";

fn is_japanese(locale: &str) -> bool {
    locale.eq_ignore_ascii_case("ja") || locale.to_ascii_lowercase().starts_with("ja-")
}

pub fn search_template(engine: SearchEngine, locale: &str) -> &'static str {
    let ja = is_japanese(locale);
    match engine {
        SearchEngine::Google => "https://www.google.com/search?q=%s",
        SearchEngine::Youtube => "https://www.youtube.com/results?search_query=%s",
        SearchEngine::Twitter => "https://x.com/search?q=%s",
        SearchEngine::Rakuten => "https://search.rakuten.co.jp/search/mall/%s/",
        SearchEngine::Amazon if ja => "https://www.amazon.co.jp/s?k=%s",
        SearchEngine::Amazon => "https://www.amazon.com/s?k=%s",
        SearchEngine::Maps if ja => "https://www.google.co.jp/maps?q=%s",
        SearchEngine::Maps => "https://www.google.com/maps?q=%s",
    }
}

pub fn translate_template(translator: Translator, locale: &str) -> &'static str {
    let ja = is_japanese(locale);
    match translator {
        Translator::DeepL if ja => "https://www.deepl.com/translator#en/ja/%s",
        Translator::DeepL => "https://www.deepl.com/translator#auto/en/%s",
        Translator::GoogleTranslate if ja => "https://translate.google.com/?sl=auto&tl=ja&text=%s",
        Translator::GoogleTranslate => "https://translate.google.com/?sl=auto&tl=en&text=%s",
    }
}

/// Substitute the encoded `text` into `template`.
pub fn fill(template: &str, text: &str) -> String {
    template.replacen(QUERY_PLACEHOLDER, &urlencoding::encode(text), 1)
}

use superdrag_common::AiService;

/// Where a chat service lives and how to find its prompt box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatTarget {
    pub url: &'static str,
    /// CSS selectors for the prompt input, most specific first.
    pub selectors: &'static [&'static str],
}

const CHATGPT: ChatTarget = ChatTarget {
    url: "https://chatgpt.com/",
    selectors: &[
        "#prompt-textarea",
        "textarea[placeholder*=\"Message\"]",
        "textarea[data-id=\"root\"]",
        "div[contenteditable=\"true\"][id=\"prompt-textarea\"]",
    ],
};

const CLAUDE: ChatTarget = ChatTarget {
    url: "https://claude.ai/new",
    selectors: &[
        "div[contenteditable=\"true\"].ProseMirror",
        "div[contenteditable=\"true\"][data-placeholder]",
        "fieldset div[contenteditable=\"true\"]",
        "div.ProseMirror[contenteditable=\"true\"]",
    ],
};

const GEMINI: ChatTarget = ChatTarget {
    url: "https://gemini.google.com/app",
    selectors: &[
        "rich-textarea div[contenteditable=\"true\"]",
        "div[contenteditable=\"true\"][aria-label*=\"prompt\"]",
        ".ql-editor[contenteditable=\"true\"]",
        "div[contenteditable=\"true\"][role=\"textbox\"]",
    ],
};

pub fn chat_target(service: AiService) -> &'static ChatTarget {
    match service {
        AiService::ChatGpt => &CHATGPT,
        AiService::Claude => &CLAUDE,
        AiService::Gemini => &GEMINI,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_service_has_https_url_and_selectors() {
        for service in AiService::ALL {
            let target = chat_target(service);
            assert!(target.url.starts_with("https://"));
            assert!(!target.selectors.is_empty());
        }
    }
}

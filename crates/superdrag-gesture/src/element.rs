//! The slice of the host document a gesture needs to know about: the element
//! a drag started on and its ancestors.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Element {
    /// Tag name, compared case-insensitively.
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub content_editable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Box<Element>>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn link(href: impl Into<String>) -> Self {
        Self {
            tag: "a".into(),
            href: Some(href.into()),
            ..Self::default()
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn editable(mut self) -> Self {
        self.content_editable = true;
        self
    }

    pub fn inside(mut self, parent: Element) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }

    fn is_tag(&self, tag: &str) -> bool {
        self.tag.eq_ignore_ascii_case(tag)
    }

    /// This element followed by its ancestors, nearest first.
    pub fn lineage(&self) -> impl Iterator<Item = &Element> {
        std::iter::successors(Some(self), |e| e.parent.as_deref())
    }

    /// Text fields, text areas and anything inside an editable region.
    pub fn is_input_like(&self) -> bool {
        self.is_tag("input") || self.is_tag("textarea") || self.lineage().any(|e| e.content_editable)
    }

    /// Whether this element or an ancestor is a link with a target, a button,
    /// or exposes the button role.
    pub fn is_interactive(&self) -> bool {
        self.lineage().any(|e| {
            (e.is_tag("a") && e.href.as_deref().is_some_and(|h| !h.is_empty()))
                || e.is_tag("button")
                || e.role.as_deref() == Some("button")
        })
    }

    /// The element's own link target, used as payload when nothing is selected.
    pub fn link_target(&self) -> Option<&str> {
        self.href.as_deref().filter(|h| !h.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_like_elements() {
        assert!(Element::new("INPUT").is_input_like());
        assert!(Element::new("textarea").is_input_like());
        assert!(Element::new("div").editable().is_input_like());
        assert!(Element::new("span")
            .inside(Element::new("div").editable())
            .is_input_like());
        assert!(!Element::new("p").is_input_like());
    }

    #[test]
    fn interactive_through_ancestors() {
        assert!(Element::link("https://example.com").is_interactive());
        assert!(Element::new("button").is_interactive());
        assert!(Element::new("div").with_role("button").is_interactive());
        assert!(Element::new("img")
            .inside(Element::link("https://example.com").inside(Element::new("li")))
            .is_interactive());
        assert!(!Element::new("a").is_interactive());
        assert!(!Element::new("span").inside(Element::new("p")).is_interactive());
    }

    #[test]
    fn link_target_is_own_href_only() {
        let img = Element::new("img").inside(Element::link("https://example.com"));
        assert_eq!(img.link_target(), None);
        assert_eq!(
            Element::link("https://example.com").link_target(),
            Some("https://example.com")
        );
    }

    #[test]
    fn deserializes_nested_lineage() {
        let raw = r#"{"tag":"span","parent":{"tag":"a","href":"https://x.test"}}"#;
        let element: Element = serde_json::from_str(raw).unwrap();
        assert_eq!(element.lineage().count(), 2);
        assert!(element.is_interactive());
    }
}

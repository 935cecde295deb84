//! Element markers: a tag name plus an optional class or id.

use std::fmt;

use super::document::Node;

/// Identifies elements by tag name and, optionally, a class or an id.
///
/// Class matching follows HTML semantics: the class attribute is a
/// whitespace-separated list and any entry may match.
///
/// # Examples
/// ```
/// use futurebusiness::html::{Document, Marker};
///
/// let doc = Document::parse(r#"<div class="note wide">x</div>"#);
/// let div = doc.root().find(Marker::class("div", "note"));
/// assert!(div.is_some());
/// assert!(doc.root().find(Marker::class("div", "narrow")).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker<'m> {
    tag: &'m str,
    class: Option<&'m str>,
    id: Option<&'m str>,
}

impl<'m> Marker<'m> {
    /// Match any element with the given tag name.
    #[must_use]
    pub const fn tag(tag: &'m str) -> Self {
        Self {
            tag,
            class: None,
            id: None,
        }
    }

    /// Match elements with the given tag name carrying `class`.
    #[must_use]
    pub const fn class(tag: &'m str, class: &'m str) -> Self {
        Self {
            tag,
            class: Some(class),
            id: None,
        }
    }

    /// Match elements with the given tag name and id.
    #[must_use]
    pub const fn id(tag: &'m str, id: &'m str) -> Self {
        Self {
            tag,
            class: None,
            id: Some(id),
        }
    }

    /// Check whether `node` is an element matching this marker.
    #[must_use]
    pub fn matches(&self, node: Node<'_>) -> bool {
        if node.tag_name() != Some(self.tag) {
            return false;
        }
        if let Some(class) = self.class {
            if !node.has_class(class) {
                return false;
            }
        }
        if let Some(id) = self.id {
            if node.attribute("id") != Some(id) {
                return false;
            }
        }
        true
    }
}

impl fmt::Display for Marker<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag)?;
        if let Some(class) = self.class {
            write!(f, ".{class}")?;
        }
        if let Some(id) = self.id {
            write!(f, "#{id}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::Document;

    #[test]
    fn test_marker_display() {
        assert_eq!(Marker::tag("table").to_string(), "table");
        assert_eq!(
            Marker::class("div", "paraFutureBusinessDate").to_string(),
            "div.paraFutureBusinessDate"
        );
        assert_eq!(Marker::id("div", "maincontent").to_string(), "div#maincontent");
    }

    #[test]
    fn test_marker_matches_class_list() {
        let doc = Document::parse(r#"<span class="a charFutureBusinessDivisionLetter b">A</span>"#);
        let span = doc.root().find(Marker::tag("span")).unwrap();

        assert!(Marker::class("span", "charFutureBusinessDivisionLetter").matches(span));
        assert!(!Marker::class("div", "charFutureBusinessDivisionLetter").matches(span));
        assert!(!Marker::class("span", "charFutureBusiness").matches(span));
    }

    #[test]
    fn test_marker_matches_id() {
        let doc = Document::parse(r#"<div id="maincontent"></div><div id="footer"></div>"#);
        let found: Vec<_> = doc
            .root()
            .find_all(Marker::id("div", "maincontent"))
            .collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].attribute("id"), Some("maincontent"));
    }
}

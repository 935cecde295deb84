//! Owned HTML tree built from the html5ever DOM.

use std::fmt;

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData as DomNode, RcDom};

use super::marker::Marker;

type NodeId = usize;

#[derive(Debug, Clone, PartialEq, Eq)]
enum NodeKind {
    Root,
    Element {
        tag: String,
        attributes: Vec<(String, String)>,
    },
    Text(String),
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    next_sibling: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A parsed HTML page.
///
/// Comments, doctypes and processing instructions are dropped; elements and
/// text are kept in document order.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<NodeData>,
}

impl Document {
    /// Parse an HTML page.
    ///
    /// Parsing follows the HTML5 algorithm and never fails: malformed markup
    /// is repaired the way a browser would repair it.
    ///
    /// # Examples
    /// ```
    /// use futurebusiness::html::{Document, Marker};
    ///
    /// let doc = Document::parse("<p>Future <b>Business</b></p>");
    /// let p = doc.root().find(Marker::tag("p")).unwrap();
    /// assert_eq!(p.text_content(), "Future Business");
    /// ```
    pub fn parse(html: &str) -> Self {
        let dom = parse_document(RcDom::default(), Default::default()).one(html);

        let mut document = Self {
            nodes: vec![NodeData {
                kind: NodeKind::Root,
                parent: None,
                next_sibling: None,
                children: Vec::new(),
            }],
        };
        for child in dom.document.children.borrow().iter() {
            document.append(child, 0);
        }
        document
    }

    /// The document root. Its children are the top-level elements.
    #[must_use]
    pub fn root(&self) -> Node<'_> {
        Node { doc: self, id: 0 }
    }

    fn append(&mut self, handle: &Handle, parent: NodeId) {
        match &handle.data {
            DomNode::Element { name, attrs, .. } => {
                let attributes = attrs
                    .borrow()
                    .iter()
                    .map(|attr| (String::from(&*attr.name.local), String::from(&*attr.value)))
                    .collect();
                let id = self.push(
                    NodeKind::Element {
                        tag: String::from(&*name.local),
                        attributes,
                    },
                    parent,
                );
                for child in handle.children.borrow().iter() {
                    self.append(child, id);
                }
            }
            DomNode::Text { contents } => {
                let contents = contents.borrow();
                self.push(NodeKind::Text(String::from(&**contents)), parent);
            }
            _ => {}
        }
    }

    fn push(&mut self, kind: NodeKind, parent: NodeId) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(NodeData {
            kind,
            parent: Some(parent),
            next_sibling: None,
            children: Vec::new(),
        });
        if let Some(&previous) = self.nodes[parent].children.last() {
            self.nodes[previous].next_sibling = Some(id);
        }
        self.nodes[parent].children.push(id);
        id
    }
}

/// A handle to a node of a [`Document`].
#[derive(Clone, Copy)]
pub struct Node<'a> {
    doc: &'a Document,
    id: NodeId,
}

impl<'a> Node<'a> {
    fn data(&self) -> &'a NodeData {
        &self.doc.nodes[self.id]
    }

    fn node(&self, id: NodeId) -> Node<'a> {
        Node { doc: self.doc, id }
    }

    /// Whether this node is an element.
    #[must_use]
    pub fn is_element(&self) -> bool {
        matches!(self.data().kind, NodeKind::Element { .. })
    }

    /// Tag name of an element, `None` for text and the root.
    #[must_use]
    pub fn tag_name(&self) -> Option<&'a str> {
        match &self.data().kind {
            NodeKind::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    /// Value of an attribute of an element.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        match &self.data().kind {
            NodeKind::Element { attributes, .. } => attributes
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str()),
            _ => None,
        }
    }

    /// Whether the element's class list contains `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    /// Contents of a text node.
    #[must_use]
    pub fn text(&self) -> Option<&'a str> {
        match &self.data().kind {
            NodeKind::Text(text) => Some(text),
            _ => None,
        }
    }

    /// All descendant text concatenated in document order.
    #[must_use]
    pub fn text_content(&self) -> String {
        if let Some(text) = self.text() {
            return text.to_string();
        }
        self.descendants().filter_map(|n| n.text()).collect()
    }

    /// Parent node, `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<Node<'a>> {
        self.data().parent.map(|id| self.node(id))
    }

    /// Whether `ancestor` is a strict ancestor of this node.
    #[must_use]
    pub fn is_inside(&self, ancestor: Node<'a>) -> bool {
        std::iter::successors(self.parent(), Node::parent).any(|n| n == ancestor)
    }

    /// Child nodes (elements and text) in document order.
    pub fn children(&self) -> impl Iterator<Item = Node<'a>> + 'a {
        let doc = self.doc;
        self.data().children.iter().map(move |&id| Node { doc, id })
    }

    /// Child at position `index`, counting text nodes.
    #[must_use]
    pub fn child(&self, index: usize) -> Option<Node<'a>> {
        self.data().children.get(index).map(|&id| self.node(id))
    }

    /// Siblings after this node (elements and text) in document order.
    pub fn next_siblings(&self) -> impl Iterator<Item = Node<'a>> + 'a {
        let doc = self.doc;
        std::iter::successors(self.data().next_sibling, move |&id| doc.nodes[id].next_sibling)
            .map(move |id| Node { doc, id })
    }

    /// The first element after this node among its siblings.
    #[must_use]
    pub fn next_element_sibling(&self) -> Option<Node<'a>> {
        self.next_siblings().find(|n| n.is_element())
    }

    /// Later sibling elements matching `marker`.
    pub fn next_siblings_matching<'m>(
        &self,
        marker: Marker<'m>,
    ) -> impl Iterator<Item = Node<'a>> + 'm
    where
        'a: 'm,
    {
        self.next_siblings().filter(move |n| marker.matches(*n))
    }

    /// All descendants (not including this node) in document order.
    pub fn descendants(&self) -> Descendants<'a> {
        Descendants {
            doc: self.doc,
            stack: self.data().children.iter().rev().copied().collect(),
        }
    }

    /// First descendant element matching `marker`.
    #[must_use]
    pub fn find(&self, marker: Marker<'_>) -> Option<Node<'a>> {
        self.descendants().find(|n| marker.matches(*n))
    }

    /// All descendant elements matching `marker`, in document order.
    pub fn find_all<'m>(&self, marker: Marker<'m>) -> impl Iterator<Item = Node<'a>> + 'm
    where
        'a: 'm,
    {
        self.descendants().filter(move |n| marker.matches(*n))
    }
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.doc, other.doc) && self.id == other.id
    }
}

impl Eq for Node<'_> {}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data().kind {
            NodeKind::Root => f.write_str("Root"),
            NodeKind::Element { tag, attributes } => {
                write!(f, "<{tag}")?;
                for (key, value) in attributes {
                    write!(f, " {key}=\"{value}\"")?;
                }
                f.write_str(">")
            }
            NodeKind::Text(text) => write!(f, "{text:?}"),
        }
    }
}

/// Pre-order iterator over the descendants of a node.
pub struct Descendants<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = Node<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.doc.nodes[id].children.iter().rev().copied());
        Some(Node { doc: self.doc, id })
    }
}

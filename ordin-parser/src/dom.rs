//! Read-only access to parsed markup trees
//!
//! The extraction core never fetches or parses markup on its own authority:
//! pages arrive as already-fetched strings and are handed over as immutable
//! trees. [`Fragment`] is the typed window onto one node of such a tree
//! (ordered children, tag identity, text content, attributes, id-based
//! lookup), so the rest of the crate never touches the underlying DOM
//! library directly.
//!
//! The same module also exposes node constructors (`element`, `text`,
//! `append`). Builders are needed by the report renderer and by tests that
//! assemble deeply nested paragraph structures: the HTML5 tree builder
//! normalizes nested `<p>` elements during parsing, so trees with real
//! sub-paragraph nesting can only be produced programmatically.

use html5ever::tendril::TendrilSink;
use html5ever::{ns, parse_document, Attribute, LocalName, ParseOpts, QualName};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// A read-only handle to one node of a parsed markup tree.
///
/// Cloning is cheap (reference-counted). All accessors observe the tree in
/// document order.
#[derive(Clone)]
pub struct Fragment {
    handle: Handle,
}

/// Parse an already-fetched markup string into a tree and return its root.
pub fn parse_markup(source: &str) -> Fragment {
    let dom = parse_document(RcDom::default(), ParseOpts::default()).one(source);
    Fragment {
        handle: dom.document,
    }
}

impl Fragment {
    /// The ordered child nodes of this node.
    pub fn children(&self) -> Vec<Fragment> {
        self.handle
            .children
            .borrow()
            .iter()
            .map(|child| Fragment {
                handle: child.clone(),
            })
            .collect()
    }

    /// The element's local tag name, `None` for non-element nodes.
    pub fn tag(&self) -> Option<&str> {
        match &self.handle.data {
            NodeData::Element { name, .. } => Some(&*name.local),
            _ => None,
        }
    }

    /// Whether this node is an element with the given local tag name.
    pub fn is_tag(&self, tag: &str) -> bool {
        self.tag() == Some(tag)
    }

    /// The contents of a text node, `None` for anything else.
    pub fn text_value(&self) -> Option<String> {
        match &self.handle.data {
            NodeData::Text { contents } => Some(contents.borrow().to_string()),
            _ => None,
        }
    }

    /// All descendant text concatenated in document order.
    pub fn text(&self) -> String {
        let mut out = String::new();
        collect_text(&self.handle, &mut out);
        out
    }

    /// The value of the named attribute, if this node is an element
    /// carrying it.
    pub fn attribute(&self, name: &str) -> Option<String> {
        match &self.handle.data {
            NodeData::Element { attrs, .. } => attrs
                .borrow()
                .iter()
                .find(|attr| &*attr.name.local == name)
                .map(|attr| attr.value.to_string()),
            _ => None,
        }
    }

    /// The first descendant element (document order) with the given id.
    pub fn find_by_id(&self, id: &str) -> Option<Fragment> {
        self.find_first(&|fragment| fragment.attribute("id").as_deref() == Some(id))
    }

    /// The first descendant element whose class list contains the given
    /// token.
    pub fn find_by_class(&self, class: &str) -> Option<Fragment> {
        self.find_first(&|fragment| {
            fragment
                .attribute("class")
                .map(|value| value.split_whitespace().any(|token| token == class))
                .unwrap_or(false)
        })
    }

    /// All descendant elements with the given tag name, in document order.
    pub fn find_all(&self, tag: &str) -> Vec<Fragment> {
        let mut found = Vec::new();
        self.visit_descendants(&mut |fragment| {
            if fragment.is_tag(tag) {
                found.push(fragment.clone());
            }
        });
        found
    }

    /// The underlying DOM handle, for serialization.
    pub fn as_handle(&self) -> Handle {
        self.handle.clone()
    }

    fn find_first(&self, matches: &dyn Fn(&Fragment) -> bool) -> Option<Fragment> {
        for child in self.children() {
            if matches(&child) {
                return Some(child);
            }
            if let Some(found) = child.find_first(matches) {
                return Some(found);
            }
        }
        None
    }

    fn visit_descendants(&self, visit: &mut dyn FnMut(&Fragment)) {
        for child in self.children() {
            visit(&child);
            child.visit_descendants(visit);
        }
    }
}

fn collect_text(handle: &Handle, out: &mut String) {
    if let NodeData::Text { contents } = &handle.data {
        out.push_str(&contents.borrow());
    }
    for child in handle.children.borrow().iter() {
        collect_text(child, out);
    }
}

impl std::fmt::Debug for Fragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.handle.data {
            NodeData::Element { name, .. } => {
                write!(f, "Fragment(<{}>)", &*name.local)
            }
            NodeData::Text { contents } => {
                write!(f, "Fragment({:?})", contents.borrow().to_string())
            }
            NodeData::Document => write!(f, "Fragment(#document)"),
            _ => write!(f, "Fragment(..)"),
        }
    }
}

/// Create a detached element node with the given attributes.
pub fn element(tag: &str, attrs: Vec<(&str, &str)>) -> Fragment {
    let qual_name = QualName::new(None, ns!(html), LocalName::from(tag));
    let attributes = attrs
        .into_iter()
        .map(|(name, value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(name)),
            value: value.to_string().into(),
        })
        .collect();

    Fragment {
        handle: Rc::new(Node {
            parent: Cell::new(None),
            children: RefCell::new(Vec::new()),
            data: NodeData::Element {
                name: qual_name,
                attrs: RefCell::new(attributes),
                template_contents: Default::default(),
                mathml_annotation_xml_integration_point: false,
            },
        }),
    }
}

/// Create a detached text node.
pub fn text(content: &str) -> Fragment {
    Fragment {
        handle: Rc::new(Node {
            parent: Cell::new(None),
            children: RefCell::new(Vec::new()),
            data: NodeData::Text {
                contents: RefCell::new(content.to_string().into()),
            },
        }),
    }
}

/// Append a child node to a parent.
pub fn append(parent: &Fragment, child: &Fragment) {
    parent
        .handle
        .children
        .borrow_mut()
        .push(child.handle.clone());
}

//! Minimal element tree the page is built from.
//!
//! Nodes are shared as `Rc<RefCell<Element>>`. Async work that writes to a
//! node later (photo loading) keeps a `Weak` so a node dropped by a re-render
//! is simply gone rather than written to.

use maud::Render;
use std::cell::RefCell;
use std::fmt::Write;
use std::rc::{Rc, Weak};

pub type NodeRef = Rc<RefCell<Element>>;
pub type WeakNode = Weak<RefCell<Element>>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
    style: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<NodeRef>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.push((name.to_string(), value.to_string()));
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.set_text(text);
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child.into_node());
        self
    }

    pub fn into_node(self) -> NodeRef {
        Rc::new(RefCell::new(self))
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[NodeRef] {
        &self.children
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Idempotent, like `classList.add`.
    pub fn add_class(&mut self, class: &str) {
        if !class.is_empty() && !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = Some(text.to_string());
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.style
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }

    pub fn set_style(&mut self, property: &str, value: &str) {
        match self.style.iter_mut().find(|(name, _)| name == property) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.style.push((property.to_string(), value.to_string())),
        }
    }

    pub fn append(&mut self, child: NodeRef) {
        self.children.push(child);
    }

    /// Inserts a whole batch at once.
    pub fn append_all(&mut self, fragment: Vec<NodeRef>) {
        self.children.extend(fragment);
    }

    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    /// Depth-first, first match wins. Only descendants are searched.
    pub fn find_by_class(&self, class: &str) -> Option<NodeRef> {
        self.find(&|el| el.has_class(class))
    }

    pub fn find_by_id(&self, id: &str) -> Option<NodeRef> {
        self.find(&|el| el.id.as_deref() == Some(id))
    }

    fn find(&self, pred: &dyn Fn(&Element) -> bool) -> Option<NodeRef> {
        for child in &self.children {
            if pred(&child.borrow()) {
                return Some(Rc::clone(child));
            }
            if let Some(found) = child.borrow().find(pred) {
                return Some(found);
            }
        }
        None
    }

    /// Copies the whole subtree into fresh nodes (`cloneNode(true)`).
    pub fn deep_clone(&self) -> Element {
        let children = self
            .children
            .iter()
            .map(|child| child.borrow().deep_clone().into_node())
            .collect();
        Element {
            children,
            ..self.clone()
        }
    }
}

impl Render for Element {
    fn render_to(&self, buffer: &mut String) {
        buffer.push('<');
        buffer.push_str(&self.tag);

        if let Some(id) = &self.id {
            push_attr(buffer, "id", id);
        }
        if !self.classes.is_empty() {
            push_attr(buffer, "class", &self.classes.join(" "));
        }
        if !self.style.is_empty() {
            let style = self
                .style
                .iter()
                .map(|(name, value)| format!("{name}: {value}"))
                .collect::<Vec<_>>()
                .join("; ");
            push_attr(buffer, "style", &style);
        }
        for (name, value) in &self.attrs {
            push_attr(buffer, name, value);
        }
        buffer.push('>');

        if let Some(text) = &self.text {
            escape_into(buffer, text);
        }
        for child in &self.children {
            child.borrow().render_to(buffer);
        }

        let _ = write!(buffer, "</{}>", self.tag);
    }
}

fn push_attr(buffer: &mut String, name: &str, value: &str) {
    let _ = write!(buffer, " {name}=\"");
    escape_into(buffer, value);
    buffer.push('"');
}

// `str` renders escaped.
fn escape_into(buffer: &mut String, text: &str) {
    text.render_to(buffer);
}

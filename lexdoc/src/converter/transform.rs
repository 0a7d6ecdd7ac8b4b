//! Recursive DOM-to-document-node transformer
//!
//! Walks a parsed HTML fragment and emits document nodes, threading the
//! inherited inline format bitmask down through styling tags. The walk
//! is total: unknown or malformed structures degrade to plain-text
//! extraction, and no input can make it fail.

use scraper::{ElementRef, Node};

use crate::document_model::{DocumentNode, HeadingTag, ListType, TextFormat};

/// Closed classification of element tags the transformer understands
///
/// Every tag maps to exactly one kind; anything unrecognized is a
/// transparent container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ElementKind {
    /// `<strong>` / `<b>`: sets the bold bit before recursing
    Bold,
    /// `<em>` / `<i>`: sets the italic bit before recursing
    Italic,
    /// `<u>`: sets the underline bit before recursing
    Underline,
    /// `<p>`: wraps its children in a paragraph block
    Paragraph,
    /// `<h1>`..`<h6>`: wraps its children in a heading block
    Heading(HeadingTag),
    /// `<ul>` / `<ol>`: collects direct `<li>` children
    List(ListType),
    /// `<li>`: handled by its parent list; stray items degrade to content
    ListItem,
    /// `<a>`: unwrapped to its inline text runs, href discarded
    Link,
    /// Elements that carry no renderable content
    Void,
    /// Everything else: recurse transparently, no wrapper node
    Container,
}

/// Classify a lowercase element name into its transformer kind
fn classify(name: &str) -> ElementKind {
    match name {
        "strong" | "b" => ElementKind::Bold,
        "em" | "i" => ElementKind::Italic,
        "u" => ElementKind::Underline,
        "p" => ElementKind::Paragraph,
        "ul" => ElementKind::List(ListType::Bullet),
        "ol" => ElementKind::List(ListType::Number),
        "li" => ElementKind::ListItem,
        "a" => ElementKind::Link,
        "script" | "style" | "br" | "img" | "hr" | "iframe" | "embed" | "object" | "input"
        | "meta" | "link" | "area" | "base" | "col" | "source" | "track" | "wbr" | "param" => {
            ElementKind::Void
        }
        other => match HeadingTag::from_tag_name(other) {
            Some(tag) => ElementKind::Heading(tag),
            None => ElementKind::Container,
        },
    }
}

/// Transform all child nodes of an element with an inherited format
///
/// # Parameters
/// * `element` - Parent element whose children are transformed
/// * `format` - Inline format bitmask inherited from enclosing tags
///
/// # Returns
/// * `Vec<DocumentNode>` - The resulting forest; possibly empty, never
///   an error
pub fn transform_children(element: ElementRef<'_>, format: TextFormat) -> Vec<DocumentNode> {
    let mut nodes = Vec::new();

    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                // Whitespace-only text nodes are dropped, not emptied
                if text.trim().is_empty() {
                    continue;
                }
                nodes.push(DocumentNode::text(text.text.to_string(), format));
            }
            Node::Element(_) => {
                if let Some(element) = ElementRef::wrap(child) {
                    nodes.extend(transform_element(element, format));
                }
            }
            // Comments, doctypes and processing instructions carry no content
            _ => {}
        }
    }

    nodes
}

/// Dispatch one element to its kind-specific transformation
fn transform_element(element: ElementRef<'_>, format: TextFormat) -> Vec<DocumentNode> {
    match classify(element.value().name()) {
        ElementKind::Bold => transform_children(element, format.with_bold()),
        ElementKind::Italic => transform_children(element, format.with_italic()),
        ElementKind::Underline => transform_children(element, format.with_underline()),
        ElementKind::Paragraph => {
            vec![DocumentNode::paragraph(transform_children(element, format))]
        }
        ElementKind::Heading(tag) => {
            // Headings keep whatever children they produce, even none;
            // only paragraphs and list items get the empty-leaf substitute.
            vec![DocumentNode::Heading {
                tag,
                children: transform_children(element, format),
            }]
        }
        ElementKind::List(list_type) => transform_list(element, list_type, format),
        ElementKind::ListItem => transform_children(element, format),
        ElementKind::Link => transform_link(element, format),
        ElementKind::Void => Vec::new(),
        ElementKind::Container => transform_children(element, format),
    }
}

/// Transform a `<ul>`/`<ol>` element into a list block
///
/// Only direct `<li>` children become items; list items of nested lists
/// stay inside their own list. A list with no items produces nothing.
fn transform_list(
    element: ElementRef<'_>,
    list_type: ListType,
    format: TextFormat,
) -> Vec<DocumentNode> {
    let mut items = Vec::new();

    for child in element.children() {
        let Some(item) = ElementRef::wrap(child) else {
            continue;
        };
        if item.value().name() != "li" {
            continue;
        }

        let mut children = transform_children(item, format);
        if children.is_empty() {
            children.push(DocumentNode::empty_text(TextFormat::NONE));
        }
        items.push(DocumentNode::ListItem { children });
    }

    if items.is_empty() {
        return Vec::new();
    }

    vec![DocumentNode::List {
        list_type,
        children: items,
    }]
}

/// Transform an `<a>` element by unwrapping it to its text runs
///
/// The consumer schema has no hyperlink node in this pipeline, so the
/// href is discarded and only inline leaves survive; nested block
/// results are dropped entirely.
fn transform_link(element: ElementRef<'_>, format: TextFormat) -> Vec<DocumentNode> {
    let mut leaves: Vec<DocumentNode> = transform_children(element, format)
        .into_iter()
        .filter(DocumentNode::is_inline)
        .collect();

    if leaves.is_empty() {
        leaves.push(DocumentNode::empty_text(format));
    }

    leaves
}

//! Document tree node types
//!
//! Defines the block and inline node variants of the Lexical-style
//! document tree. Nodes are plain owned values; each node is owned
//! exclusively by its parent and the tree is never mutated after the
//! converter returns it.

use serde::{Deserialize, Serialize};

use super::format::TextFormat;

/// Heading tag level (h1 through h6)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingTag {
    /// `<h1>`
    H1,
    /// `<h2>`
    H2,
    /// `<h3>`
    H3,
    /// `<h4>`
    H4,
    /// `<h5>`
    H5,
    /// `<h6>`
    H6,
}

impl HeadingTag {
    /// Parse a heading tag from a lowercase element name ("h1".."h6")
    pub fn from_tag_name(name: &str) -> Option<Self> {
        match name {
            "h1" => Some(Self::H1),
            "h2" => Some(Self::H2),
            "h3" => Some(Self::H3),
            "h4" => Some(Self::H4),
            "h5" => Some(Self::H5),
            "h6" => Some(Self::H6),
            _ => None,
        }
    }

    /// Numeric heading level (1 for h1, 6 for h6)
    pub fn level(self) -> u8 {
        match self {
            Self::H1 => 1,
            Self::H2 => 2,
            Self::H3 => 3,
            Self::H4 => 4,
            Self::H5 => 5,
            Self::H6 => 6,
        }
    }
}

/// Ordered/unordered flag for list blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    /// Unordered list (`<ul>`)
    Bullet,
    /// Ordered list (`<ol>`)
    Number,
}

/// A node of the document tree
///
/// Serializes internally tagged on `"type"` so the JSON shape matches
/// the consumer's rich-text schema directly (`paragraph`, `heading`,
/// `list`, `listitem`, `text`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DocumentNode {
    /// A paragraph owning inline children
    Paragraph {
        /// Inline content of the paragraph
        children: Vec<DocumentNode>,
    },

    /// A heading with its tag level and inline children
    Heading {
        /// Heading level tag ("h1".."h6")
        tag: HeadingTag,
        /// Inline content of the heading
        children: Vec<DocumentNode>,
    },

    /// An ordered or unordered list owning list items
    List {
        /// Bullet or number rendering
        #[serde(rename = "listType")]
        list_type: ListType,
        /// The list items
        children: Vec<DocumentNode>,
    },

    /// A single list item
    ///
    /// Children are usually inline leaves, but a nested list parsed
    /// inside an `<li>` stays a child of that item.
    ListItem {
        /// Content of the list item
        children: Vec<DocumentNode>,
    },

    /// An inline text leaf carrying a format bitmask
    Text {
        /// The text content
        text: String,
        /// Composed inline style flags
        format: TextFormat,
    },
}

impl DocumentNode {
    /// Create a text leaf
    pub fn text(text: impl Into<String>, format: TextFormat) -> Self {
        Self::Text {
            text: text.into(),
            format,
        }
    }

    /// Create the empty-text leaf substituted for empty child sequences
    pub fn empty_text(format: TextFormat) -> Self {
        Self::text("", format)
    }

    /// Create a paragraph, substituting one empty leaf for no children
    pub fn paragraph(children: Vec<DocumentNode>) -> Self {
        let children = if children.is_empty() {
            vec![Self::empty_text(TextFormat::NONE)]
        } else {
            children
        };
        Self::Paragraph { children }
    }

    /// Check whether this node is an inline leaf
    pub fn is_inline(&self) -> bool {
        matches!(self, Self::Text { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_heading_tag_parses_only_h1_through_h6() {
        assert_eq!(HeadingTag::from_tag_name("h1"), Some(HeadingTag::H1));
        assert_eq!(HeadingTag::from_tag_name("h6"), Some(HeadingTag::H6));
        assert_eq!(HeadingTag::from_tag_name("h7"), None);
        assert_eq!(HeadingTag::from_tag_name("header"), None);
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(HeadingTag::H1.level(), 1);
        assert_eq!(HeadingTag::H4.level(), 4);
    }

    #[test]
    fn test_empty_paragraph_gets_fallback_leaf() {
        // Act: build a paragraph from zero children
        let paragraph = DocumentNode::paragraph(Vec::new());

        // Assert: one empty-text leaf substituted, never an empty array
        match paragraph {
            DocumentNode::Paragraph { children } => {
                assert_eq!(children.len(), 1);
                assert_eq!(children[0], DocumentNode::empty_text(TextFormat::NONE));
            }
            _ => panic!("Expected Paragraph"),
        }
    }

    #[test]
    fn test_text_leaf_serialization_shape() {
        // Arrange
        let leaf = DocumentNode::text("Hello ", TextFormat::NONE);

        // Act
        let value = serde_json::to_value(&leaf).unwrap();

        // Assert
        assert_eq!(value, json!({"type": "text", "text": "Hello ", "format": 0}));
    }

    #[test]
    fn test_list_serialization_uses_consumer_field_names() {
        // Arrange: bullet list with one item
        let list = DocumentNode::List {
            list_type: ListType::Bullet,
            children: vec![DocumentNode::ListItem {
                children: vec![DocumentNode::text("a", TextFormat::NONE)],
            }],
        };

        // Act
        let value = serde_json::to_value(&list).unwrap();

        // Assert: "listType" and "listitem" spellings match the schema
        assert_eq!(
            value,
            json!({
                "type": "list",
                "listType": "bullet",
                "children": [{
                    "type": "listitem",
                    "children": [{"type": "text", "text": "a", "format": 0}],
                }],
            })
        );
    }

    #[test]
    fn test_heading_serialization_shape() {
        let heading = DocumentNode::Heading {
            tag: HeadingTag::H2,
            children: vec![DocumentNode::text("Titlu", TextFormat::NONE)],
        };

        let value = serde_json::to_value(&heading).unwrap();

        assert_eq!(value["type"], "heading");
        assert_eq!(value["tag"], "h2");
    }
}

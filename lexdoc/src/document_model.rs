//! Lexical-style document model
//!
//! This module defines the output value of the converter: a root node
//! owning an ordered sequence of block nodes, with inline text leaves
//! carrying a format bitmask. The tree is built once per conversion and
//! returned as an immutable value; persistence belongs to the caller.

use serde::{Deserialize, Serialize};

// Submodules
mod format;
mod nodes;

// Re-export public types
pub use format::TextFormat;
pub use nodes::{DocumentNode, HeadingTag, ListType};

/// The root document returned by the converter
///
/// Serializes as `{"type": "root", "children": [...]}` so it can be
/// stored directly into the consumer's rich-text field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Node type discriminator, always `"root"`
    #[serde(rename = "type", default = "root_type")]
    kind: String,

    /// Ordered block children; never empty
    pub children: Vec<DocumentNode>,
}

/// The root node's type tag
fn root_type() -> String {
    "root".to_string()
}

impl Document {
    /// Create a document from a sequence of block nodes
    ///
    /// # Parameters
    /// * `children` - Ordered block nodes; an empty sequence is replaced
    ///   by the minimal paragraph so the root is never empty
    ///
    /// # Returns
    /// * `Document` - A root document with at least one child block
    pub fn new(children: Vec<DocumentNode>) -> Self {
        if children.is_empty() {
            return Self::minimal();
        }

        Self {
            kind: root_type(),
            children,
        }
    }

    /// The canonical minimal document: one paragraph holding one
    /// empty-text leaf with format 0
    pub fn minimal() -> Self {
        Self {
            kind: root_type(),
            children: vec![DocumentNode::paragraph(Vec::new())],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_children_fall_back_to_minimal_document() {
        // Act
        let document = Document::new(Vec::new());

        // Assert: identical to the canonical minimal document
        assert_eq!(document, Document::minimal());
        assert_eq!(document.children.len(), 1);
    }

    #[test]
    fn test_minimal_document_serialization() {
        // Act
        let value = serde_json::to_value(Document::minimal()).unwrap();

        // Assert: root -> one paragraph -> one empty leaf, format 0
        assert_eq!(
            value,
            json!({
                "type": "root",
                "children": [{
                    "type": "paragraph",
                    "children": [{"type": "text", "text": "", "format": 0}],
                }],
            })
        );
    }

    #[test]
    fn test_round_trips_through_json() {
        // Arrange
        let document = Document::new(vec![DocumentNode::paragraph(vec![
            DocumentNode::text("Bună ziua", TextFormat::NONE.with_bold()),
        ])]);

        // Act
        let json = serde_json::to_string(&document).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();

        // Assert
        assert_eq!(back, document);
    }
}

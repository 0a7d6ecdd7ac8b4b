//! HTML-to-document conversion pipeline
//!
//! This module orchestrates the full conversion of a raw WordPress post
//! body into a Lexical-style document: video URL side-scan, markup
//! sanitization, fragment parsing, the recursive node transform, and
//! final root assembly with a guaranteed-non-empty fallback.
//!
//! The pipeline never fails the caller. Every failure path resolves to
//! a valid, storable document; degraded outcomes are reported through
//! the returned warnings and the log, never as errors.

use itertools::Itertools;
use scraper::Html;

use crate::document_model::{Document, DocumentNode, TextFormat};

// Submodules
mod sanitize;
mod transform;
mod videos;
mod warning;

// Re-export public types
pub use videos::extract_video_urls;
pub use warning::ConversionWarning;

/// Marker prefix for video placeholder paragraphs
///
/// Extracted video URLs become trailing paragraphs carrying this
/// human-readable marker plus the URL text. They are placeholders for
/// an editor to replace, not true embed blocks.
pub const VIDEO_PLACEHOLDER_PREFIX: &str = "[video] ";

/// The outcome of a conversion: an always-valid document plus warnings
///
/// The document is populated on every path, including degenerate ones;
/// callers log or persist the warnings as they see fit.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    /// The converted document; always has at least one block
    pub document: Document,

    /// Non-fatal issues encountered along the way
    pub warnings: Vec<ConversionWarning>,
}

/// Convert raw WordPress post-body HTML into a document
///
/// # Parameters
/// * `html` - Raw HTML string (UTF-8, arbitrary post-body markup)
///
/// # Returns
/// * `Conversion` - The document (never empty) and collected warnings
pub fn convert(html: &str) -> Conversion {
    let mut warnings = Vec::new();

    if html.trim().is_empty() {
        log::warn!("empty input HTML; returning the minimal document");
        warnings.push(ConversionWarning::EmptyInput);
        return Conversion {
            document: Document::minimal(),
            warnings,
        };
    }

    // The video scan runs over the raw string so URLs inside markup the
    // sanitizer discards (iframes, shortcode wrappers) are still found.
    let video_urls = videos::extract_video_urls(html);

    let cleaned = sanitize::sanitize(html);
    let fragment = Html::parse_fragment(&cleaned);

    for error in &fragment.errors {
        log::warn!("skipping malformed HTML node: {}", error);
        warnings.push(ConversionWarning::NodeSkipped {
            detail: error.to_string(),
        });
    }

    let nodes = transform::transform_children(fragment.root_element(), TextFormat::NONE);
    let mut blocks = wrap_loose_leaves(nodes);

    for url in &video_urls {
        blocks.push(video_placeholder(url));
    }

    if blocks.is_empty() {
        log::warn!("conversion produced no blocks; substituting an empty paragraph");
        warnings.push(ConversionWarning::EmptyOutput);
    }

    Conversion {
        document: Document::new(blocks),
        warnings,
    }
}

/// Wrap root-level inline leaves into paragraphs
///
/// The transformer leaves bare text runs where the input had no block
/// wrapper (e.g. loose text between paragraphs, or an unwrapped link at
/// the top level). The stored document only accepts blocks under the
/// root, so consecutive leaves are grouped into one paragraph each.
fn wrap_loose_leaves(nodes: Vec<DocumentNode>) -> Vec<DocumentNode> {
    let mut blocks = Vec::new();

    for (inline, group) in &nodes.into_iter().chunk_by(DocumentNode::is_inline) {
        if inline {
            blocks.push(DocumentNode::paragraph(group.collect()));
        } else {
            blocks.extend(group);
        }
    }

    blocks
}

/// Build the trailing placeholder paragraph for one extracted video URL
fn video_placeholder(url: &str) -> DocumentNode {
    DocumentNode::paragraph(vec![DocumentNode::text(
        format!("{}{}", VIDEO_PLACEHOLDER_PREFIX, url),
        TextFormat::NONE,
    )])
}

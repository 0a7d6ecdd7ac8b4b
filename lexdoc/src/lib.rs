//! lexdoc - WordPress HTML to Lexical document converter
//!
//! Converts raw WordPress post-body HTML into the Lexical-style
//! rich-text JSON tree used by the CMS import pipeline. The conversion
//! is a pure function from an HTML string to a document value: no
//! persistence, no network I/O, and no failure path surfaced to the
//! caller — degraded results come back as a valid minimal document
//! plus warnings.

#![deny(unsafe_code)]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::all))]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(missing_docs))]
// Allow some pedantic lints that are too strict for this project
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub mod converter;
pub mod document_model;

pub use converter::{convert, Conversion, ConversionWarning};
pub use document_model::{Document, DocumentNode, HeadingTag, ListType, TextFormat};

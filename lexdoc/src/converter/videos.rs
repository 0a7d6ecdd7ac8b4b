//! Video-hosting URL extraction
//!
//! A side scan over the raw HTML string, independent of the DOM walk, so
//! URLs survive even when their surrounding markup (iframe embeds,
//! shortcode wrappers) is discarded before parsing.

use std::sync::LazyLock;

use regex::Regex;

/// Recognized video-hosting URL forms: YouTube `watch?v=`, YouTube
/// `embed/<id>`, `youtu.be/<id>`, and numeric Vimeo URLs.
static VIDEO_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"https?://(?:www\.)?(?:youtube\.com/watch\?v=[A-Za-z0-9_-]+|youtube\.com/embed/[A-Za-z0-9_-]+|youtu\.be/[A-Za-z0-9_-]+|vimeo\.com/[0-9]+)",
    )
    .expect("video URL pattern is valid")
});

/// Extract all recognizable video URLs from raw HTML
///
/// # Parameters
/// * `html` - Raw, pre-sanitize HTML string
///
/// # Returns
/// * `Vec<String>` - Matched URLs in document order; duplicates are kept
pub fn extract_video_urls(html: &str) -> Vec<String> {
    VIDEO_URL
        .find_iter(html)
        .map(|m| m.as_str().to_string())
        .collect()
}

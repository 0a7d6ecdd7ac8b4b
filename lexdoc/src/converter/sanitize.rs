//! Pre-parse HTML cleanup
//!
//! WordPress post bodies carry markup the document model has no use
//! for: script/style blocks, structural block comments, embed wrappers
//! (whose URLs the video scan has already captured from the raw string),
//! shortcode markers, and empty paragraph spacers. These are removed or
//! neutralized before the fragment is parsed.

use std::sync::LazyLock;

use regex::Regex;

/// `<script>...</script>` blocks, including their content
static SCRIPT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script\b[^>]*>.*?</script>").expect("valid pattern"));

/// `<style>...</style>` blocks, including their content
static STYLE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style\b[^>]*>.*?</style>").expect("valid pattern"));

/// HTML comments, which include WordPress structural block markers
/// such as `<!-- wp:paragraph -->`
static HTML_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("valid pattern"));

/// `<iframe>...</iframe>` embed wrappers
static IFRAME_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<iframe\b[^>]*>.*?</iframe>").expect("valid pattern"));

/// Standalone `<embed>` / `<object>` tags
static EMBED_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</?(?:embed|object)\b[^>]*>").expect("valid pattern"));

/// WordPress `[embed]` / `[caption]` shortcode markers
static SHORTCODE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\[/?(?:embed|caption)[^\]]*\]").expect("valid pattern"));

/// Opening `<figure>` / `<figcaption>` tags
static FIGURE_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<(?:figure|figcaption)\b[^>]*>").expect("valid pattern"));

/// Closing `</figure>` / `</figcaption>` tags
static FIGURE_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</(?:figure|figcaption)\s*>").expect("valid pattern"));

/// Paragraphs containing only whitespace or `&nbsp;` spacers
static EMPTY_PARAGRAPH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<p\b[^>]*>(?:\s|&nbsp;)*</p>").expect("valid pattern"));

/// Strip non-content markup from a raw WordPress post body
///
/// # Parameters
/// * `html` - Raw post-body HTML
///
/// # Returns
/// * `String` - Cleaned HTML ready for fragment parsing
pub fn sanitize(html: &str) -> String {
    let html = SCRIPT_BLOCK.replace_all(html, "");
    let html = STYLE_BLOCK.replace_all(&html, "");
    let html = HTML_COMMENT.replace_all(&html, "");
    let html = IFRAME_BLOCK.replace_all(&html, "");
    let html = EMBED_TAG.replace_all(&html, "");
    let html = SHORTCODE_MARKER.replace_all(&html, "");
    // Figures degrade to plain containers so their inner content (images
    // aside) still flows through the transformer.
    let html = FIGURE_OPEN.replace_all(&html, "<div>");
    let html = FIGURE_CLOSE.replace_all(&html, "</div>");
    let html = EMPTY_PARAGRAPH.replace_all(&html, "");
    html.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_and_style_blocks_are_removed_with_content() {
        // Arrange
        let html = "<p>a</p><script>alert('x')</script><style>p{color:red}</style><p>b</p>";

        // Act
        let cleaned = sanitize(html);

        // Assert
        assert_eq!(cleaned, "<p>a</p><p>b</p>");
    }

    #[test]
    fn test_wordpress_block_comments_are_removed() {
        let html = "<!-- wp:paragraph --><p>text</p><!-- /wp:paragraph -->";

        let cleaned = sanitize(html);

        assert_eq!(cleaned, "<p>text</p>");
    }

    #[test]
    fn test_iframe_embeds_are_removed() {
        let html = r#"<p>x</p><iframe src="https://www.youtube.com/embed/abc">fallback</iframe>"#;

        let cleaned = sanitize(html);

        assert_eq!(cleaned, "<p>x</p>");
    }

    #[test]
    fn test_shortcode_markers_are_removed_but_inner_text_kept() {
        let html = r#"[caption id="attachment_5" width="300"]O legendă[/caption]"#;

        let cleaned = sanitize(html);

        assert_eq!(cleaned, "O legendă");
    }

    #[test]
    fn test_figure_wrappers_become_plain_containers() {
        let html = r#"<figure class="wp-block-image"><figcaption>Legenda</figcaption></figure>"#;

        let cleaned = sanitize(html);

        assert_eq!(cleaned, "<div><div>Legenda</div></div>");
    }

    #[test]
    fn test_empty_paragraph_spacers_are_removed() {
        let html = "<p>real</p><p>&nbsp;</p><p>   </p><p></p>";

        let cleaned = sanitize(html);

        assert_eq!(cleaned, "<p>real</p>");
    }

    #[test]
    fn test_case_insensitive_tags() {
        let html = "<SCRIPT>x</SCRIPT><P>&nbsp;</P>ok";

        let cleaned = sanitize(html);

        assert_eq!(cleaned, "ok");
    }
}

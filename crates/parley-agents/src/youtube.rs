//! YouTube URL recognition and video id extraction.

use std::sync::LazyLock;

use regex::Regex;

/// Literal path shapes of the known sharing domains. Presence anywhere in
/// the lowercased text counts; no further well-formedness checks.
const URL_PATTERNS: &[&str] = &["youtube.com/watch", "youtu.be/", "youtube.com/embed/"];

/// Ordered id-extraction rules. The first capture of the first matching rule
/// wins; `&`, `/`, and `?` terminate the id segment.
static ID_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/)([^&/?]+)")
            .expect("valid video id pattern"),
        Regex::new(r"youtube\.com/watch\?.*v=([^&]+)").expect("valid video id pattern"),
    ]
});

/// Check whether free text contains a YouTube URL.
pub fn is_video_url(text: &str) -> bool {
    let text = text.to_lowercase();
    URL_PATTERNS.iter().any(|p| text.contains(p))
}

/// Extract the video id from a URL, if one parses.
pub fn extract_video_id(url: &str) -> Option<String> {
    ID_PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(url))
        .map(|captures| captures[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_video_url() {
        assert!(is_video_url("https://www.youtube.com/watch?v=abc123"));
        assert!(is_video_url("https://youtu.be/abc123"));
        assert!(is_video_url("https://youtube.com/embed/abc123"));
        assert!(is_video_url("Summarize HTTPS://YOUTU.BE/abc please"));
        assert!(!is_video_url("https://example.com"));
        assert!(!is_video_url("just some text about videos"));
    }

    #[test]
    fn test_extract_watch_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_extract_short_url_with_params() {
        assert_eq!(
            extract_video_id("https://youtu.be/abc123?t=5"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_extract_embed_url() {
        assert_eq!(
            extract_video_id("https://youtube.com/embed/xyz789/extra"),
            Some("xyz789".to_string())
        );
    }

    #[test]
    fn test_terminators() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=abc123&list=PLx"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_no_match() {
        assert_eq!(extract_video_id("https://example.com"), None);
        assert_eq!(extract_video_id("not a url"), None);
    }
}

//! Keyword intent router.
//!
//! Rules are evaluated in a fixed priority order and the first match wins.
//! The order is part of the observable contract: a prompt mentioning both a
//! YouTube URL and "debug" routes to the video summarizer, not the code
//! helper. Do not rescore or refine the heuristic.

use crate::AgentRole;

const VIDEO_TOKENS: &[&str] = &["youtube.com", "youtu.be"];

const RESEARCH_KEYWORDS: &[&str] = &["research", "study", "paper", "academic", "scholarly"];

const CODE_KEYWORDS: &[&str] = &[
    "code",
    "program",
    "debug",
    "algorithm",
    "python",
    "javascript",
    "java",
    "html",
    "css",
];

const CONTENT_KEYWORDS: &[&str] = &[
    "write", "content", "blog", "article", "post", "copy", "draft",
];

/// Select the role for a prompt, plus the processing label shown while the
/// turn is in flight. Pure and deterministic: routing never fails because
/// web search is the catch-all.
pub fn select_role(prompt: &str) -> (AgentRole, &'static str) {
    let prompt = prompt.to_lowercase();

    let contains_any = |keywords: &[&str]| keywords.iter().any(|k| prompt.contains(k));

    if contains_any(VIDEO_TOKENS) {
        (AgentRole::VideoSummarizer, "Analyzing YouTube video...")
    } else if contains_any(RESEARCH_KEYWORDS) {
        (AgentRole::Research, "Researching information...")
    } else if contains_any(CODE_KEYWORDS) {
        (AgentRole::Code, "Analyzing code...")
    } else if contains_any(CONTENT_KEYWORDS) {
        (AgentRole::Content, "Writing content...")
    } else {
        (AgentRole::WebSearch, "Searching for information...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_routing() {
        let (role, label) = select_role("summarize https://youtube.com/watch?v=abc123");
        assert_eq!(role, AgentRole::VideoSummarizer);
        assert!(label.contains("YouTube"));

        let (role, _) = select_role("check out youtu.be/xyz");
        assert_eq!(role, AgentRole::VideoSummarizer);
    }

    #[test]
    fn test_video_wins_over_other_keywords() {
        // Priority order holds: the video token beats the "debug" keyword.
        let (role, _) = select_role("debug this youtube.com/watch?v=abc123 video");
        assert_eq!(role, AgentRole::VideoSummarizer);
    }

    #[test]
    fn test_research_routing() {
        for prompt in [
            "find research on sleep",
            "summarize this academic paper",
            "scholarly sources on climate",
        ] {
            assert_eq!(select_role(prompt).0, AgentRole::Research);
        }
    }

    #[test]
    fn test_code_routing() {
        for prompt in [
            "help me debug this function",
            "explain this algorithm",
            "Python list comprehension",
        ] {
            assert_eq!(select_role(prompt).0, AgentRole::Code);
        }
    }

    #[test]
    fn test_content_routing() {
        let (role, _) = select_role("Write a blog post about AI trends");
        assert_eq!(role, AgentRole::Content);
    }

    #[test]
    fn test_research_wins_over_code() {
        // "research" is rule 2, "debug" is rule 3; first match wins.
        let (role, _) = select_role("research how to debug memory leaks");
        assert_eq!(role, AgentRole::Research);
    }

    #[test]
    fn test_default_is_web_search() {
        let (role, label) = select_role("hello there");
        assert_eq!(role, AgentRole::WebSearch);
        assert!(label.contains("Searching"));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(select_role("RESEARCH papers").0, AgentRole::Research);
        assert_eq!(select_role("DEBUG me").0, AgentRole::Code);
    }

    #[test]
    fn test_deterministic() {
        let prompt = "write some python code";
        assert_eq!(select_role(prompt).0, select_role(prompt).0);
    }
}

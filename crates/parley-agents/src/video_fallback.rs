//! Tool-free fallback for video turns whose first reply shows failure signs.

use crate::{AgentRole, RoleProfile};

const INSTRUCTIONS: &[&str] = &[
    "When given a YouTube URL, acknowledge that detailed transcript analysis isn't available",
    "Provide general guidance about what type of content the video might contain",
    "Suggest how users could analyze the video themselves",
    "Offer to help with other types of queries",
    "Be helpful and honest about the limitations",
];

pub struct VideoFallbackAgent;

impl VideoFallbackAgent {
    pub fn new() -> Self {
        Self
    }
}

impl Default for VideoFallbackAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl RoleProfile for VideoFallbackAgent {
    fn role(&self) -> AgentRole {
        AgentRole::VideoFallback
    }

    fn description(&self) -> &str {
        "You are a YouTube video analyst that provides insights about videos."
    }

    fn instructions(&self) -> &[&str] {
        INSTRUCTIONS
    }

    fn summary(&self) -> &str {
        "Answers video questions from general knowledge when transcript tools fail"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_has_no_tools() {
        let agent = VideoFallbackAgent::new();
        assert_eq!(agent.role(), AgentRole::VideoFallback);
        assert!(agent.tool_names().is_empty());
        assert!(agent.system_prompt().contains("limitations"));
    }
}

//! Web/news search role, the router's default catch-all.

use crate::{AgentRole, RoleProfile};

const INSTRUCTIONS: &[&str] = &[
    "Provide concise, clean responses without internal metadata",
    "Search for 10 news items and select the top 4 unique items",
    "Format responses in clear bullet points with sources",
    "Never show internal tool calls or raw API responses",
];

pub struct WebSearchAgent;

impl WebSearchAgent {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WebSearchAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl RoleProfile for WebSearchAgent {
    fn role(&self) -> AgentRole {
        AgentRole::WebSearch
    }

    fn description(&self) -> &str {
        "You are a news agent that helps users find the latest news."
    }

    fn instructions(&self) -> &[&str] {
        INSTRUCTIONS
    }

    fn tool_names(&self) -> &[&str] {
        &["web_search"]
    }

    fn summary(&self) -> &str {
        "Ask about current events and get top stories with sources"
    }

    fn example_prompts(&self) -> &[&str] {
        &["What's today's tech news?"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_search_profile() {
        let agent = WebSearchAgent::new();
        assert_eq!(agent.role(), AgentRole::WebSearch);
        assert!(agent.tool_names().contains(&"web_search"));
        assert!(agent.system_prompt().contains("news"));
    }
}

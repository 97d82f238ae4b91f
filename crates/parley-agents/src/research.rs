//! Academic research assistant role.

use crate::{AgentRole, RoleProfile};

const INSTRUCTIONS: &[&str] = &[
    "Help users find scholarly information and research papers",
    "Provide detailed explanations with sources",
    "Break down complex topics into understandable concepts",
    "Include relevant statistics and studies",
    "Format with clear sections and citations",
    "Provide comprehensive overviews of research topics",
    "Always cite sources and provide references",
];

pub struct ResearchAgent;

impl ResearchAgent {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ResearchAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl RoleProfile for ResearchAgent {
    fn role(&self) -> AgentRole {
        AgentRole::Research
    }

    fn description(&self) -> &str {
        "You are an academic research assistant."
    }

    fn instructions(&self) -> &[&str] {
        INSTRUCTIONS
    }

    fn tool_names(&self) -> &[&str] {
        &["web_search"]
    }

    fn summary(&self) -> &str {
        "Academic and scholarly research with citations and topic breakdowns"
    }

    fn example_prompts(&self) -> &[&str] {
        &["Explain quantum computing research"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_research_profile() {
        let agent = ResearchAgent::new();
        assert_eq!(agent.role(), AgentRole::Research);
        assert!(agent.tool_names().contains(&"web_search"));
        assert!(agent.system_prompt().contains("cite sources"));
    }
}

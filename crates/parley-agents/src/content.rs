//! Content writer role. Pure LLM, no tools.

use crate::{AgentRole, RoleProfile};

const INSTRUCTIONS: &[&str] = &[
    "Help create blog posts, social media content, and articles",
    "Provide outlines, drafts, and editing suggestions",
    "Adapt tone for different audiences (professional, casual, technical)",
    "Include SEO best practices where relevant",
    "Offer multiple versions or approaches",
    "Structure content with clear headings and sections",
    "Provide engaging introductions and conclusions",
    "Suggest improvements for readability and impact",
];

pub struct ContentAgent;

impl ContentAgent {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ContentAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl RoleProfile for ContentAgent {
    fn role(&self) -> AgentRole {
        AgentRole::Content
    }

    fn description(&self) -> &str {
        "You are a professional content creator and writer."
    }

    fn instructions(&self) -> &[&str] {
        INSTRUCTIONS
    }

    fn summary(&self) -> &str {
        "Blog posts, articles, social media content, and writing assistance"
    }

    fn example_prompts(&self) -> &[&str] {
        &["Write a blog post about AI trends"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_profile() {
        let agent = ContentAgent::new();
        assert_eq!(agent.role(), AgentRole::Content);
        assert!(agent.tool_names().is_empty());
        assert!(agent.system_prompt().contains("blog posts"));
    }
}

//! Programming assistant role. Pure LLM, no tools.

use crate::{AgentRole, RoleProfile};

const INSTRUCTIONS: &[&str] = &[
    "Help with coding problems in multiple languages",
    "Explain programming concepts clearly",
    "Debug and optimize code",
    "Suggest best practices and design patterns",
    "Provide code examples with explanations",
    "Use code formatting with proper syntax highlighting",
    "Break down complex algorithms step by step",
    "Recommend appropriate libraries and frameworks",
];

pub struct CodeAgent;

impl CodeAgent {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CodeAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl RoleProfile for CodeAgent {
    fn role(&self) -> AgentRole {
        AgentRole::Code
    }

    fn description(&self) -> &str {
        "You are an expert programming assistant."
    }

    fn instructions(&self) -> &[&str] {
        INSTRUCTIONS
    }

    fn summary(&self) -> &str {
        "Programming help in any language, debugging, and code explanations"
    }

    fn example_prompts(&self) -> &[&str] {
        &["Help me debug this Python code"]
    }
}

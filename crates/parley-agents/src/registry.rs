//! Eagerly-built registry of live agents, one per role.

use std::collections::HashMap;
use std::sync::Arc;

use parley_core::{Agent, AgentConfig, Provider, ToolRegistry};

use crate::AgentRole;

/// One `Agent` per `AgentRole`, constructed up front and `Arc`-shared.
///
/// Construction performs no network calls and cannot fail given a provider;
/// every `get` for the same role returns the same instance. The registry is
/// immutable after `build`, so it needs no locking in the single-session
/// loop it is injected into.
pub struct AgentRegistry {
    agents: HashMap<AgentRole, Arc<Agent>>,
}

impl AgentRegistry {
    /// Build every role's agent from its profile. Each agent gets the tool
    /// subset its profile names, carved out of the shared registry.
    pub fn build(provider: Arc<dyn Provider>, tools: &ToolRegistry) -> Self {
        let mut agents = HashMap::new();

        for role in AgentRole::all() {
            let profile = role.profile();
            let config = AgentConfig::new(profile.role().name(), profile.model())
                .with_system_prompt(profile.system_prompt())
                .with_markdown(profile.markdown());
            let agent_tools = tools.subset(profile.tool_names());
            agents.insert(
                role,
                Arc::new(Agent::new(Arc::clone(&provider), agent_tools, config)),
            );
        }

        Self { agents }
    }

    /// Get the agent for a role. Every role has one by construction.
    pub fn get(&self, role: AgentRole) -> Arc<Agent> {
        Arc::clone(&self.agents[&role])
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parley_core::testing::MockProvider;

    fn registry() -> AgentRegistry {
        let provider = Arc::new(MockProvider::new());
        AgentRegistry::build(provider, &ToolRegistry::new())
    }

    #[test]
    fn test_one_agent_per_role() {
        let registry = registry();
        assert_eq!(registry.len(), AgentRole::all().len());
    }

    #[test]
    fn test_get_returns_same_instance() {
        let registry = registry();
        let first = registry.get(AgentRole::Research);
        let second = registry.get(AgentRole::Research);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_distinct_roles_distinct_agents() {
        let registry = registry();
        let code = registry.get(AgentRole::Code);
        let content = registry.get(AgentRole::Content);
        assert!(!Arc::ptr_eq(&code, &content));
        assert_ne!(code.id(), content.id());
    }

    #[test]
    fn test_agent_configs_come_from_profiles() {
        let registry = registry();
        let video = registry.get(AgentRole::VideoSummarizer);
        assert_eq!(video.config.model, crate::DEFAULT_MODEL);
        assert!(video.config.system_prompt.contains("summarizer"));
    }
}

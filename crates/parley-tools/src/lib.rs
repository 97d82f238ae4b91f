//! Built-in tools for parley agents.

use std::sync::Arc;

use parley_core::ToolRegistry;

mod transcript;
mod web;

pub use transcript::FetchTranscriptTool;
pub use web::WebSearchTool;

/// Build the shared tool registry. Each agent later receives the subset its
/// profile names, so a disabled tool simply never reaches an agent.
pub fn create_tool_registry(enable_web: bool, enable_transcript: bool) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    if enable_web {
        registry.register(Arc::new(WebSearchTool::new()));
    }
    if enable_transcript {
        registry.register(Arc::new(FetchTranscriptTool::new()));
    }
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tool_registry_full() {
        let registry = create_tool_registry(true, true);
        assert_eq!(registry.len(), 2);
        assert!(registry.get("web_search").is_some());
        assert!(registry.get("fetch_transcript").is_some());
    }

    #[test]
    fn test_create_tool_registry_toggles() {
        let registry = create_tool_registry(true, false);
        assert_eq!(registry.len(), 1);
        assert!(registry.get("fetch_transcript").is_none());

        assert!(create_tool_registry(false, false).is_empty());
    }
}

//! Agent role definitions for parley.
//!
//! This crate provides:
//! - `RoleProfile` trait and one built-in profile per role
//! - The keyword intent router
//! - YouTube URL utilities
//! - The eagerly-built `AgentRegistry`

mod code;
mod content;
mod registry;
mod research;
pub mod router;
mod video;
mod video_fallback;
mod web_search;
pub mod youtube;

pub use code::CodeAgent;
pub use content::ContentAgent;
pub use registry::AgentRegistry;
pub use research::ResearchAgent;
pub use router::select_role;
pub use video::VideoSummarizerAgent;
pub use video_fallback::VideoFallbackAgent;
pub use web_search::WebSearchAgent;

/// Model every built-in role targets unless its profile overrides it.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// The fixed set of agent roles. Defined at startup, never extended at
/// runtime. `VideoFallback` is reachable only through the fallback path,
/// never the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentRole {
    VideoSummarizer,
    WebSearch,
    VideoFallback,
    Research,
    Code,
    Content,
}

impl AgentRole {
    /// All roles, in sidebar display order.
    pub fn all() -> [AgentRole; 6] {
        [
            Self::VideoSummarizer,
            Self::WebSearch,
            Self::Research,
            Self::Code,
            Self::Content,
            Self::VideoFallback,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::VideoSummarizer => "video-summarizer",
            Self::WebSearch => "web-search",
            Self::VideoFallback => "video-fallback",
            Self::Research => "research",
            Self::Code => "code",
            Self::Content => "content",
        }
    }

    /// Create the profile for this role.
    pub fn profile(&self) -> Box<dyn RoleProfile> {
        match self {
            Self::VideoSummarizer => Box::new(VideoSummarizerAgent::new()),
            Self::WebSearch => Box::new(WebSearchAgent::new()),
            Self::VideoFallback => Box::new(VideoFallbackAgent::new()),
            Self::Research => Box::new(ResearchAgent::new()),
            Self::Code => Box::new(CodeAgent::new()),
            Self::Content => Box::new(ContentAgent::new()),
        }
    }
}

impl std::fmt::Display for AgentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Static description of one agent role: what model it targets, how it is
/// instructed, and which tools it may call. Profiles are pure data; the live
/// handle is built from them by the registry.
pub trait RoleProfile: Send + Sync {
    /// The role this profile describes.
    fn role(&self) -> AgentRole;

    /// One-line persona, e.g. "You are a professional YouTube video summarizer."
    fn description(&self) -> &str;

    /// Ordered instruction strings appended to the persona.
    fn instructions(&self) -> &[&str];

    /// Tool names this role needs. Empty for pure-LLM roles.
    fn tool_names(&self) -> &[&str] {
        &[]
    }

    /// Whether responses should be rendered as markdown.
    fn markdown(&self) -> bool {
        true
    }

    /// Target model identifier.
    fn model(&self) -> &str {
        DEFAULT_MODEL
    }

    /// Short capability summary for the `/agents` listing.
    fn summary(&self) -> &str;

    /// Example prompts for the `/agents` listing.
    fn example_prompts(&self) -> &[&str] {
        &[]
    }

    /// Assemble the system prompt from the persona and instruction list.
    fn system_prompt(&self) -> String {
        let mut prompt = String::from(self.description());
        if !self.instructions().is_empty() {
            prompt.push_str("\n\nInstructions:\n");
            for line in self.instructions() {
                prompt.push_str("- ");
                prompt.push_str(line);
                prompt.push('\n');
            }
        }
        if self.markdown() {
            prompt.push_str("\nUse markdown formatting in your response.");
        }
        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_roles_have_profiles() {
        for role in AgentRole::all() {
            let profile = role.profile();
            assert_eq!(profile.role(), role);
            assert!(!profile.description().is_empty());
            assert!(!profile.summary().is_empty());
            assert!(!profile.system_prompt().is_empty());
        }
    }

    #[test]
    fn test_system_prompt_assembly() {
        let profile = AgentRole::Code.profile();
        let prompt = profile.system_prompt();
        assert!(prompt.starts_with(profile.description()));
        assert!(prompt.contains("Instructions:"));
        assert!(prompt.contains("markdown"));
    }

    #[test]
    fn test_tooled_roles() {
        assert!(AgentRole::VideoSummarizer
            .profile()
            .tool_names()
            .contains(&"fetch_transcript"));
        assert!(AgentRole::WebSearch
            .profile()
            .tool_names()
            .contains(&"web_search"));
        assert!(AgentRole::Research
            .profile()
            .tool_names()
            .contains(&"web_search"));
        // The fallback agent is deliberately tool-free.
        assert!(AgentRole::VideoFallback.profile().tool_names().is_empty());
        assert!(AgentRole::Code.profile().tool_names().is_empty());
        assert!(AgentRole::Content.profile().tool_names().is_empty());
    }

    #[test]
    fn test_role_names_unique() {
        let names: Vec<_> = AgentRole::all().iter().map(|r| r.name()).collect();
        let mut deduped = names.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(names.len(), deduped.len());
    }
}

//! parley-core: Core types and traits for parley
//!
//! This crate provides the foundational types used throughout the
//! parley multi-agent chat assistant.

pub mod agent;
pub mod error;
pub mod message;
pub mod provider;
pub mod reply;
pub mod tool;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use agent::{Agent, AgentConfig, AgentId};
pub use error::Error;
pub use message::{ConversationTurn, Message, Role, ToolCall, Usage};
pub use provider::{CompletionRequest, CompletionResponse, FinishReason, Provider};
pub use reply::{normalize, RawReply};
pub use tool::{PropertySchema, Tool, ToolDefinition, ToolOutput, ToolParameters, ToolRegistry};

pub type Result<T> = std::result::Result<T, Error>;

//! The live agent handle: one configured binding of a model, instructions,
//! and an optional tool set, invoked as a single request/response unit.

use std::sync::Arc;

use tracing::debug;

use crate::error::Error;
use crate::message::Message;
use crate::provider::{CompletionRequest, Provider};
use crate::reply::RawReply;
use crate::tool::ToolRegistry;

/// Unique identifier for an agent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AgentId(pub String);

impl AgentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AgentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Configuration for an agent. Built once per role at startup, never mutated.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Unique agent identifier.
    pub id: AgentId,
    /// Target model identifier.
    pub model: String,
    /// System prompt assembled from the role's instruction strings.
    pub system_prompt: String,
    /// Whether output should be rendered as markdown.
    pub markdown: bool,
    /// Maximum tool-call round trips per invocation.
    pub max_iterations: usize,
}

impl AgentConfig {
    pub fn new(id: impl Into<AgentId>, model: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            model: model.into(),
            system_prompt: String::new(),
            markdown: true,
            max_iterations: 8,
        }
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    pub fn with_markdown(mut self, markdown: bool) -> Self {
        self.markdown = markdown;
        self
    }

    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max;
        self
    }
}

/// An LLM-backed agent bound to one config, a shared provider, and the tool
/// subset its role asks for. Stateless across invocations: each `run` builds
/// its message list from scratch.
pub struct Agent {
    pub config: AgentConfig,
    provider: Arc<dyn Provider>,
    tools: ToolRegistry,
}

impl Agent {
    pub fn new(provider: Arc<dyn Provider>, tools: ToolRegistry, config: AgentConfig) -> Self {
        Self {
            config,
            provider,
            tools,
        }
    }

    pub fn id(&self) -> &AgentId {
        &self.config.id
    }

    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.names()
    }

    /// Run one invocation. The model may request tool calls; those are
    /// executed here and the loop continues until a plain response arrives
    /// or the iteration bound is hit.
    pub async fn run(&self, prompt: &str) -> Result<RawReply, Error> {
        debug!(
            agent = %self.config.id,
            tools_available = self.tools.len(),
            prompt_len = prompt.len(),
            "Agent invocation starting"
        );

        let mut messages = vec![
            Message::system(self.config.system_prompt.as_str()),
            Message::user(prompt),
        ];

        for iteration in 0..self.config.max_iterations {
            let request = CompletionRequest::new(messages.clone())
                .with_model(self.config.model.as_str())
                .with_tools(self.tools.definitions());

            let response = self.provider.complete(request).await?;

            if !response.message.tool_calls.is_empty() {
                debug!(
                    agent = %self.config.id,
                    iteration = iteration,
                    tool_count = response.message.tool_calls.len(),
                    "Agent executing tools"
                );

                let tool_calls = response.message.tool_calls.clone();
                messages.push(Message::assistant_with_tool_calls("", tool_calls.clone()));

                for tool_call in &tool_calls {
                    let result = execute_tool(&self.tools, tool_call).await;
                    messages.push(Message::tool_result(&tool_call.id, result));
                }

                continue;
            }

            debug!(
                agent = %self.config.id,
                iterations = iteration + 1,
                response_len = response.message.content.len(),
                "Agent completed"
            );
            return Ok(RawReply::Chat(response.message));
        }

        Err(Error::Unknown(format!(
            "Agent {} exceeded max iterations ({})",
            self.config.id, self.config.max_iterations
        )))
    }
}

/// Execute a single tool call. Errors become text fed back to the model
/// rather than aborting the invocation.
async fn execute_tool(registry: &ToolRegistry, tool_call: &crate::message::ToolCall) -> String {
    let Some(tool) = registry.get(&tool_call.name) else {
        return format!("Error: Unknown tool '{}'", tool_call.name);
    };

    match tool.execute(tool_call.arguments.clone()).await {
        Ok(output) => {
            if output.is_error {
                format!("Error: {}", output.content)
            } else {
                output.content
            }
        }
        Err(e) => format!("Error executing tool: {}", e),
    }
}

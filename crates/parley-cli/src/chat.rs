//! Interactive chat loop.
//!
//! Reads prompts with rustyline, runs each through the turn pipeline, and
//! keeps the in-memory transcript. Slash commands are handled locally and
//! never reach an agent.

use std::path::PathBuf;

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::history::FileHistory;
use rustyline::{Config as ReadlineConfig, Editor};

use parley_agents::{AgentRegistry, AgentRole};
use parley_core::ConversationTurn;

use crate::turn::run_turn;

/// What a line of input asks the session to do.
#[derive(Debug, PartialEq)]
enum Command {
    Prompt(String),
    Help,
    Agents,
    History,
    Clear,
    Quit,
    Empty,
    Unknown(String),
}

pub struct ChatSession {
    registry: AgentRegistry,
    history: Vec<ConversationTurn>,
    history_path: Option<PathBuf>,
}

impl ChatSession {
    pub fn new(registry: AgentRegistry) -> Self {
        Self {
            registry,
            history: Vec::new(),
            history_path: history_path(),
        }
    }

    /// Run the loop until /quit or EOF.
    pub async fn run(&mut self) -> Result<()> {
        let config = ReadlineConfig::builder()
            .history_ignore_space(true)
            .history_ignore_dups(true)?
            .build();
        let mut editor: Editor<(), FileHistory> = Editor::with_config(config)?;
        if let Some(ref path) = self.history_path {
            let _ = editor.load_history(path);
        }

        println!("parley — ask anything. /help for commands.");

        loop {
            match editor.readline("you> ") {
                Ok(line) => {
                    let _ = editor.add_history_entry(&line);
                    match parse_command(&line) {
                        Command::Prompt(prompt) => self.handle_prompt(&prompt).await,
                        Command::Help => print_help(),
                        Command::Agents => print_agents(),
                        Command::History => self.print_history(),
                        Command::Clear => {
                            self.history.clear();
                            println!("History cleared.");
                        }
                        Command::Quit => break,
                        Command::Empty => {}
                        Command::Unknown(cmd) => {
                            println!("Unknown command: {}. Try /help.", cmd);
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                }
                Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
            }
        }

        if let Some(ref path) = self.history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = editor.save_history(path);
        }
        println!("Goodbye!");
        Ok(())
    }

    /// One full turn: record the user side, run the pipeline, record and
    /// print exactly one assistant answer.
    async fn handle_prompt(&mut self, prompt: &str) {
        self.history.push(ConversationTurn::user(prompt));

        let outcome = run_turn(&self.registry, prompt).await;

        println!("{}", outcome.label);
        if outcome.used_fallback {
            println!("(transcript unavailable, answering from general knowledge)");
        }
        println!();
        println!("{}", outcome.text);
        println!();

        self.history.push(ConversationTurn::assistant(&outcome.text));
    }

    fn print_history(&self) {
        if self.history.is_empty() {
            println!("No conversation yet.");
            return;
        }
        for turn in &self.history {
            println!("[{}] {}", turn.role, turn.content);
        }
    }

    #[cfg(test)]
    fn history(&self) -> &[ConversationTurn] {
        &self.history
    }
}

fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::Empty;
    }
    if !trimmed.starts_with('/') {
        return Command::Prompt(trimmed.to_string());
    }
    match trimmed {
        "/help" | "/h" | "/?" => Command::Help,
        "/agents" => Command::Agents,
        "/history" => Command::History,
        "/clear" => Command::Clear,
        "/quit" | "/q" | "/exit" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    }
}

fn print_help() {
    println!("Commands:");
    println!("  /help     Show this help");
    println!("  /agents   List agents and what they handle");
    println!("  /history  Show the conversation so far");
    println!("  /clear    Forget the conversation");
    println!("  /quit     Exit");
}

fn print_agents() {
    for role in AgentRole::all() {
        if role == AgentRole::VideoFallback {
            continue;
        }
        let profile = role.profile();
        println!("  {:<18} {}", role.name(), profile.summary());
        for example in profile.example_prompts() {
            println!("  {:<18}   e.g. {}", "", example);
        }
    }
}

fn history_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("parley").join("chat_history"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use parley_core::testing::MockProvider;
    use parley_core::ToolRegistry;

    #[test]
    fn test_parse_command_variants() {
        assert_eq!(parse_command("/help"), Command::Help);
        assert_eq!(parse_command("/q"), Command::Quit);
        assert_eq!(parse_command("  /agents  "), Command::Agents);
        assert_eq!(parse_command(""), Command::Empty);
        assert_eq!(parse_command("   "), Command::Empty);
        assert_eq!(
            parse_command("/frobnicate"),
            Command::Unknown("/frobnicate".to_string())
        );
        assert_eq!(
            parse_command("what is rust?"),
            Command::Prompt("what is rust?".to_string())
        );
    }

    #[tokio::test]
    async fn test_each_prompt_appends_one_exchange() {
        let provider = Arc::new(MockProvider::new());
        provider.queue_response("First answer.");
        provider.queue_response("Second answer.");
        let registry = AgentRegistry::build(provider, &ToolRegistry::new());
        let mut session = ChatSession::new(registry);

        session.handle_prompt("tell me about rust").await;
        session.handle_prompt("and about go").await;

        let history = session.history();
        assert_eq!(history.len(), 4);
        assert_eq!(history[0].content, "tell me about rust");
        assert_eq!(history[1].content, "First answer.");
        assert_eq!(history[3].content, "Second answer.");
    }

    #[tokio::test]
    async fn test_failed_turn_still_appends_assistant_text() {
        // Nothing queued: the invocation errors and the generic message is
        // recorded as the answer.
        let provider = Arc::new(MockProvider::new());
        let registry = AgentRegistry::build(provider, &ToolRegistry::new());
        let mut session = ChatSession::new(registry);

        session.handle_prompt("hello").await;

        let history = session.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].content, crate::turn::GENERIC_ERROR_MESSAGE);
    }
}

//! LLM provider implementations for parley.

mod groq;

pub use groq::GroqProvider;

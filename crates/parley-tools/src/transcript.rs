//! YouTube transcript fetch via the public timedtext captions endpoint.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use serde::Deserialize;

use parley_core::{Error, PropertySchema, Tool, ToolDefinition, ToolOutput, ToolParameters};

const TIMEDTEXT_URL: &str = "https://www.youtube.com/api/timedtext";
const MAX_TRANSCRIPT_CHARS: usize = 50000;

/// Caption cues arrive as `<text start="..." dur="...">...</text>` elements.
static CUE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<text[^>]*>([^<]*)</text>").expect("valid cue pattern"));

pub struct FetchTranscriptTool {
    client: Client,
}

impl Default for FetchTranscriptTool {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchTranscriptTool {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .user_agent("parley/0.1.0")
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
        }
    }

    /// Join cue texts into one transcript, decoding the entities the
    /// timedtext endpoint emits.
    fn parse_cues(xml: &str) -> String {
        let mut transcript = String::new();
        for capture in CUE_PATTERN.captures_iter(xml) {
            let cue = decode_entities(capture[1].trim());
            if cue.is_empty() {
                continue;
            }
            if !transcript.is_empty() {
                transcript.push(' ');
            }
            transcript.push_str(&cue);
        }
        transcript
    }
}

fn decode_entities(text: &str) -> String {
    text.replace("&amp;#39;", "'")
        .replace("&#39;", "'")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
}

#[derive(Deserialize)]
struct FetchTranscriptArgs {
    video_id: String,
    #[serde(default)]
    language: Option<String>,
}

#[async_trait]
impl Tool for FetchTranscriptTool {
    fn name(&self) -> &str {
        "fetch_transcript"
    }

    fn description(&self) -> &str {
        "Fetch the caption transcript of a YouTube video by its video id."
    }

    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(self.name(), self.description()).with_parameters(
            ToolParameters::new()
                .add_property(
                    "video_id",
                    PropertySchema::string("The YouTube video id, e.g. dQw4w9WgXcQ"),
                    true,
                )
                .add_property(
                    "language",
                    PropertySchema::string("Caption language code (default 'en')"),
                    false,
                ),
        )
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolOutput, Error> {
        let args: FetchTranscriptArgs = serde_json::from_value(arguments)
            .map_err(|e| Error::tool("fetch_transcript", format!("Invalid arguments: {}", e)))?;
        let language = args.language.as_deref().unwrap_or("en");

        let response = self
            .client
            .get(TIMEDTEXT_URL)
            .query(&[("v", args.video_id.as_str()), ("lang", language)])
            .send()
            .await
            .map_err(|e| {
                Error::tool(
                    "fetch_transcript",
                    format!("Failed to fetch transcript for '{}': {}", args.video_id, e),
                )
            })?;

        if !response.status().is_success() {
            return Err(Error::tool(
                "fetch_transcript",
                format!(
                    "HTTP error {} fetching transcript for '{}'",
                    response.status(),
                    args.video_id
                ),
            ));
        }

        let xml = response.text().await.map_err(|e| {
            Error::tool("fetch_transcript", format!("Failed to read response: {}", e))
        })?;

        let transcript = Self::parse_cues(&xml);
        tracing::debug!(
            video_id = %args.video_id,
            chars = transcript.len(),
            "Transcript fetched"
        );

        if transcript.is_empty() {
            // Videos without captions return an empty document; report that
            // as a tool error so the agent can explain the limitation.
            return Ok(ToolOutput::error(format!(
                "No captions available for video '{}' (language '{}')",
                args.video_id, language
            )));
        }

        if transcript.len() > MAX_TRANSCRIPT_CHARS {
            let mut end = MAX_TRANSCRIPT_CHARS;
            while !transcript.is_char_boundary(end) {
                end -= 1;
            }
            Ok(ToolOutput::success(format!(
                "{}\n\n... (truncated, {} total characters)",
                &transcript[..end],
                transcript.len()
            )))
        } else {
            Ok(ToolOutput::success(transcript))
        }
    }
}

//! Web search tool backed by the DuckDuckGo HTML endpoint.

use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};
use serde::Deserialize;

use parley_core::{Error, PropertySchema, Tool, ToolDefinition, ToolOutput, ToolParameters};

const SEARCH_URL: &str = "https://html.duckduckgo.com/html/";
const DEFAULT_MAX_RESULTS: usize = 10;

pub struct WebSearchTool {
    client: Client,
}

impl Default for WebSearchTool {
    fn default() -> Self {
        Self::new()
    }
}

impl WebSearchTool {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .user_agent("parley/0.1.0")
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
        }
    }

    /// Pull result titles, URLs, and snippets out of the result page markup.
    fn parse_results(html: &str, max_results: usize) -> Vec<SearchResult> {
        let document = Html::parse_document(html);

        let result_selector = match Selector::parse(".result") {
            Ok(s) => s,
            Err(_) => return Vec::new(),
        };
        let title_selector = Selector::parse(".result__a").ok();
        let snippet_selector = Selector::parse(".result__snippet").ok();

        let mut results = Vec::new();
        for element in document.select(&result_selector).take(max_results) {
            let title_el = title_selector
                .as_ref()
                .and_then(|s| element.select(s).next());
            let Some(title_el) = title_el else { continue };

            let title = title_el.text().collect::<String>().trim().to_string();
            let url = title_el.value().attr("href").unwrap_or_default().to_string();
            let snippet = snippet_selector
                .as_ref()
                .and_then(|s| element.select(s).next())
                .map(|el| el.text().collect::<String>().trim().to_string())
                .unwrap_or_default();

            if !title.is_empty() {
                results.push(SearchResult {
                    title,
                    url,
                    snippet,
                });
            }
        }

        results
    }

    fn format_results(query: &str, results: &[SearchResult]) -> String {
        if results.is_empty() {
            return format!("No results found for '{}'", query);
        }

        let mut out = format!("Search results for '{}':\n", query);
        for (i, result) in results.iter().enumerate() {
            out.push_str(&format!("\n{}. {}\n   {}\n", i + 1, result.title, result.url));
            if !result.snippet.is_empty() {
                out.push_str(&format!("   {}\n", result.snippet));
            }
        }
        out
    }
}

struct SearchResult {
    title: String,
    url: String,
    snippet: String,
}

#[derive(Deserialize)]
struct WebSearchArgs {
    query: String,
    #[serde(default)]
    max_results: Option<usize>,
}

#[async_trait]
impl Tool for WebSearchTool {
    fn name(&self) -> &str {
        "web_search"
    }

    fn description(&self) -> &str {
        "Search the web and return result titles, URLs, and snippets."
    }

    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(self.name(), self.description()).with_parameters(
            ToolParameters::new()
                .add_property("query", PropertySchema::string("The search query"), true)
                .add_property(
                    "max_results",
                    PropertySchema::integer("Maximum number of results to return (default 10)")
                        .with_default(serde_json::json!(DEFAULT_MAX_RESULTS)),
                    false,
                ),
        )
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolOutput, Error> {
        let args: WebSearchArgs = serde_json::from_value(arguments)
            .map_err(|e| Error::tool("web_search", format!("Invalid arguments: {}", e)))?;
        let max_results = args.max_results.unwrap_or(DEFAULT_MAX_RESULTS);

        let response = self
            .client
            .post(SEARCH_URL)
            .form(&[("q", args.query.as_str())])
            .send()
            .await
            .map_err(|e| Error::tool("web_search", format!("Search request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::tool(
                "web_search",
                format!("HTTP error {} from search endpoint", response.status()),
            ));
        }

        let html = response
            .text()
            .await
            .map_err(|e| Error::tool("web_search", format!("Failed to read response: {}", e)))?;

        let results = Self::parse_results(&html, max_results);
        tracing::debug!(query = %args.query, results = results.len(), "Web search completed");
        Ok(ToolOutput::success(Self::format_results(
            &args.query,
            &results,
        )))
    }
}

use crate::config::AnthropicConfig;
use crate::error::{AppError, AppResult};
use crate::models::SearchFilters;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

const ANTHROPIC_VERSION: &str = "2023-06-01";

const SYSTEM_PROMPT: &str = "\
You convert a recruiter's natural-language talent search into JSON filters. \
Respond with exactly one JSON object and nothing else, with these fields: \
experience_title (array of job title strings), \
country (array of country names; empty array searches all countries), \
experience_company_name (company name string, empty string for any), \
education_institution_name (institution name string, empty string for any), \
location (city string, empty string for any), \
keyword (array of keyword strings). \
Leave out constraints the request does not mention by using empty values.";

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    #[serde(default)]
    text: String,
}

#[derive(Clone)]
pub struct AnthropicClient {
    client: Client,
    config: AnthropicConfig,
}

impl AnthropicClient {
    pub fn new(config: AnthropicConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Ask the model to turn a natural-language query into `SearchFilters`.
    pub async fn structure_query(&self, natural_language_query: &str) -> AppResult<SearchFilters> {
        let url = format!("{}/v1/messages", self.config.base_url);

        let body = json!({
            "model": self.config.model,
            "max_tokens": 1024,
            "temperature": 0,
            "system": SYSTEM_PROMPT,
            "messages": [
                { "role": "user", "content": natural_language_query }
            ]
        });

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApiError(format!(
                "Anthropic API request failed: {status}, {text}"
            )));
        }

        let result: MessagesResponse = response.json().await?;
        let text = result
            .content
            .iter()
            .find(|block| block.block_type == "text")
            .map(|block| block.text.as_str())
            .ok_or_else(|| {
                AppError::ExternalApiError("Anthropic response contained no text block".to_string())
            })?;

        parse_filters(text)
    }
}

/// Parse the model output into filters, tolerating a fenced code block
/// around the JSON object.
fn parse_filters(text: &str) -> AppResult<SearchFilters> {
    let trimmed = text.trim();
    let inner = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .unwrap_or(trimmed)
        .trim();

    serde_json::from_str(inner).map_err(|e| {
        AppError::ExternalApiError(format!("Anthropic returned unparseable filters: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_json() {
        let filters = parse_filters(
            r#"{"experience_title": ["Software Engineer"], "country": ["Germany"], "keyword": ["rust"]}"#,
        )
        .unwrap();
        assert_eq!(filters.experience_title, vec!["Software Engineer"]);
        assert_eq!(filters.country, vec!["Germany"]);
        assert_eq!(filters.keyword, vec!["rust"]);
        assert!(filters.location.is_empty());
    }

    #[test]
    fn test_parse_fenced_json() {
        let text = "```json\n{\"location\": \"Berlin\"}\n```";
        let filters = parse_filters(text).unwrap();
        assert_eq!(filters.location, "Berlin");
    }

    #[test]
    fn test_parse_rejects_prose() {
        assert!(parse_filters("Here are your filters!").is_err());
    }
}

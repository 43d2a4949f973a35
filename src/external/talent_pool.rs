use crate::config::TalentPoolConfig;
use crate::error::{AppError, AppResult};
use crate::models::SearchFilters;
use reqwest::Client;
use serde_json::Value;

#[derive(Clone)]
pub struct TalentPoolClient {
    client: Client,
    config: TalentPoolConfig,
}

impl TalentPoolClient {
    pub fn new(config: TalentPoolConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Search for member ids matching the structured filters. The upstream
    /// service returns numeric ids; they are normalized to strings here.
    pub async fn search(&self, filters: &SearchFilters) -> AppResult<Vec<String>> {
        let url = format!("{}/search/filter", self.config.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.token)
            .json(&filters.to_query_body())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApiError(format!(
                "Talent pool search failed: {status}, {text}"
            )));
        }

        let ids: Vec<Value> = response.json().await?;
        Ok(ids.iter().map(id_to_string).collect())
    }

    /// Fetch the full detail payload for one member.
    pub async fn collect(&self, member_id: &str) -> AppResult<Value> {
        let url = format!("{}/collect/{}", self.config.base_url, member_id);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.config.token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApiError(format!(
                "Talent pool collect failed for {member_id}: {status}, {text}"
            )));
        }

        Ok(response.json().await?)
    }
}

fn id_to_string(id: &Value) -> String {
    match id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_id_normalization() {
        assert_eq!(id_to_string(&json!(12345)), "12345");
        assert_eq!(id_to_string(&json!("abc-1")), "abc-1");
    }
}

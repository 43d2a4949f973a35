use crate::entities::talents;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTalentQueryRequest {
    pub nature_language_query: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateTalentQueryResponse {
    pub talent_query_id: Uuid,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TalentPageQuery {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

/// Structured search filters the LLM extracts from a natural-language
/// request. Field semantics follow the talent-pool `/search/filter` API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SearchFilters {
    #[serde(default)]
    pub experience_title: Vec<String>,
    #[serde(default)]
    pub country: Vec<String>,
    #[serde(default)]
    pub experience_company_name: String,
    #[serde(default)]
    pub education_institution_name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub keyword: Vec<String>,
}

/// `["a", "b"]` becomes `"(a) OR (b)"`, the OR syntax the talent pool
/// expects for list-valued filters.
fn list_to_or_string(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("({item})"))
        .collect::<Vec<_>>()
        .join(" OR ")
}

impl SearchFilters {
    /// Builds the talent-pool query body. Empty fields are dropped so the
    /// upstream service treats them as unconstrained.
    pub fn to_query_body(&self) -> Value {
        let mut body = Map::new();
        if !self.experience_title.is_empty() {
            body.insert(
                "experience_title".to_string(),
                json!(list_to_or_string(&self.experience_title)),
            );
        }
        if !self.country.is_empty() {
            body.insert("country".to_string(), json!(list_to_or_string(&self.country)));
        }
        if !self.keyword.is_empty() {
            body.insert("keyword".to_string(), json!(list_to_or_string(&self.keyword)));
        }
        if !self.experience_company_name.is_empty() {
            body.insert(
                "experience_company_name".to_string(),
                json!(self.experience_company_name),
            );
        }
        if !self.education_institution_name.is_empty() {
            body.insert(
                "education_institution_name".to_string(),
                json!(self.education_institution_name),
            );
        }
        if !self.location.is_empty() {
            body.insert("location".to_string(), json!(self.location));
        }
        Value::Object(body)
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TalentDetailResponse {
    pub id: Uuid,
    pub external_id: String,
    pub name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub location: Option<String>,
    pub industry: Option<String>,
    pub summary: Option<String>,
    pub country: Option<String>,
    pub logo_url: Option<String>,
    pub connections_count: Option<i32>,
    pub experience_count: Option<i32>,
    #[schema(value_type = Option<Object>)]
    pub profile: Option<Value>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<talents::Model> for TalentDetailResponse {
    fn from(talent: talents::Model) -> Self {
        Self {
            id: talent.id,
            external_id: talent.external_id,
            name: talent.name,
            first_name: talent.first_name,
            last_name: talent.last_name,
            title: talent.title,
            url: talent.url,
            location: talent.location,
            industry: talent.industry,
            summary: talent.summary,
            country: talent.country,
            logo_url: talent.logo_url,
            connections_count: talent.connections_count,
            experience_count: talent.experience_count,
            profile: talent.profile,
            created_at: talent.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TalentPageResponse {
    pub total: i64,
    pub page: i64,
    pub size: i64,
    pub data: Vec<TalentDetailResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_to_or_string() {
        let items = vec!["Software Engineer".to_string(), "Backend Developer".to_string()];
        assert_eq!(
            list_to_or_string(&items),
            "(Software Engineer) OR (Backend Developer)"
        );
    }

    #[test]
    fn test_query_body_drops_empty_fields() {
        let filters = SearchFilters {
            experience_title: vec!["Data Scientist".to_string()],
            location: "Berlin".to_string(),
            ..Default::default()
        };

        let body = filters.to_query_body();
        let obj = body.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["experience_title"], "(Data Scientist)");
        assert_eq!(obj["location"], "Berlin");
        assert!(!obj.contains_key("country"));
        assert!(!obj.contains_key("experience_company_name"));
    }

    #[test]
    fn test_query_body_empty_filters() {
        let body = SearchFilters::default().to_query_body();
        assert!(body.as_object().unwrap().is_empty());
    }
}

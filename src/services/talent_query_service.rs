use crate::entities::{talent_entity as talents, talent_query_entity as talent_queries};
use crate::error::{AppError, AppResult};
use crate::external::{AnthropicClient, TalentPoolClient};
use crate::models::*;
use crate::services::CreditService;
use chrono::Utc;
use futures_util::future::try_join_all;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    Set,
};
use serde_json::Value;
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Clone)]
pub struct TalentQueryService {
    pool: DatabaseConnection,
    anthropic: AnthropicClient,
    talent_pool: TalentPoolClient,
    credit_service: CreditService,
}

impl TalentQueryService {
    pub fn new(
        pool: DatabaseConnection,
        anthropic: AnthropicClient,
        talent_pool: TalentPoolClient,
        credit_service: CreditService,
    ) -> Self {
        Self {
            pool,
            anthropic,
            talent_pool,
            credit_service,
        }
    }

    /// Turn a natural-language request into structured filters, run the
    /// talent-pool search and persist both on the query row. The row is
    /// written before the search so a failed search still leaves the
    /// structured filters on record.
    pub async fn create_query(
        &self,
        user_id: Uuid,
        request: CreateTalentQueryRequest,
    ) -> AppResult<CreateTalentQueryResponse> {
        let query_text = request.nature_language_query.trim();
        if query_text.is_empty() {
            return Err(AppError::ValidationError(
                "Query must not be empty".to_string(),
            ));
        }

        let filters = self.anthropic.structure_query(query_text).await?;

        let query = talent_queries::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            nature_language_query: Set(query_text.to_string()),
            structured_query: Set(Some(serde_json::to_value(&filters)?)),
            query_result: Set(None),
            created_at: Set(Some(Utc::now())),
        }
        .insert(&self.pool)
        .await?;

        let member_ids = self.talent_pool.search(&filters).await?;
        log::info!(
            "Talent query {} matched {} members",
            query.id,
            member_ids.len()
        );

        let mut model = query.into_active_model();
        model.query_result = Set(Some(serde_json::to_value(&member_ids)?));
        let query = model.update(&self.pool).await?;

        Ok(CreateTalentQueryResponse {
            talent_query_id: query.id,
        })
    }

    /// One page of talent details for a stored query. Contact credits are
    /// consumed for the whole page before any upstream call is made, so an
    /// insufficient balance aborts with no external fetch and no debit.
    pub async fn get_talent_details(
        &self,
        user_id: Uuid,
        query_id: Uuid,
        page_query: TalentPageQuery,
    ) -> AppResult<TalentPageResponse> {
        let query = talent_queries::Entity::find_by_id(query_id)
            .filter(talent_queries::Column::UserId.eq(user_id))
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Talent query not found".to_string()))?;

        let member_ids: Vec<String> = match &query.query_result {
            Some(value) => serde_json::from_value(value.clone())?,
            None => Vec::new(),
        };

        let params = PaginationParams {
            page: page_query.page,
            page_size: page_query.page_size,
        };
        let page = params.page.unwrap_or(1).max(1);
        let size = params.get_limit();
        let total = member_ids.len() as i64;

        let page_ids: Vec<String> = member_ids
            .into_iter()
            .skip(params.get_offset() as usize)
            .take(size as usize)
            .collect();

        if page_ids.is_empty() {
            return Ok(TalentPageResponse {
                total,
                page,
                size,
                data: Vec::new(),
            });
        }

        self.credit_service
            .consume(user_id, CreditType::ContactCredit, page_ids.len() as i64)
            .await?;

        let cached = talents::Entity::find()
            .filter(talents::Column::ExternalId.is_in(page_ids.clone()))
            .all(&self.pool)
            .await?;
        let mut by_external_id: HashMap<String, talents::Model> = cached
            .into_iter()
            .map(|talent| (talent.external_id.clone(), talent))
            .collect();

        let missing: Vec<String> = page_ids
            .iter()
            .filter(|id| !by_external_id.contains_key(*id))
            .cloned()
            .collect();

        if !missing.is_empty() {
            let payloads =
                try_join_all(missing.iter().map(|id| self.talent_pool.collect(id))).await?;
            for (external_id, payload) in missing.iter().zip(payloads) {
                let talent = self.cache_talent(external_id, payload).await?;
                by_external_id.insert(external_id.clone(), talent);
            }
        }

        let data = page_ids
            .iter()
            .filter_map(|id| by_external_id.remove(id))
            .map(TalentDetailResponse::from)
            .collect();

        Ok(TalentPageResponse {
            total,
            page,
            size,
            data,
        })
    }

    /// Upsert keyed on `external_id`: a concurrent request that cached the
    /// same member first just gets its row refreshed instead of tripping
    /// the unique index.
    async fn cache_talent(&self, external_id: &str, payload: Value) -> AppResult<talents::Model> {
        let talent = talents::Entity::insert(talents::ActiveModel {
            id: Set(Uuid::new_v4()),
            external_id: Set(external_id.to_string()),
            name: Set(str_field(&payload, "name")),
            first_name: Set(str_field(&payload, "first_name")),
            last_name: Set(str_field(&payload, "last_name")),
            title: Set(str_field(&payload, "title")),
            url: Set(str_field(&payload, "url")),
            location: Set(str_field(&payload, "location")),
            industry: Set(str_field(&payload, "industry")),
            summary: Set(str_field(&payload, "summary")),
            country: Set(str_field(&payload, "country")),
            logo_url: Set(str_field(&payload, "logo_url")),
            connections_count: Set(int_field(&payload, "connections_count")),
            experience_count: Set(int_field(&payload, "experience_count")),
            profile: Set(Some(payload)),
            created_at: Set(Some(Utc::now())),
        })
        .on_conflict(
            OnConflict::column(talents::Column::ExternalId)
                .update_columns([
                    talents::Column::Name,
                    talents::Column::FirstName,
                    talents::Column::LastName,
                    talents::Column::Title,
                    talents::Column::Url,
                    talents::Column::Location,
                    talents::Column::Industry,
                    talents::Column::Summary,
                    talents::Column::Country,
                    talents::Column::LogoUrl,
                    talents::Column::ConnectionsCount,
                    talents::Column::ExperienceCount,
                    talents::Column::Profile,
                ])
                .to_owned(),
        )
        .exec_with_returning(&self.pool)
        .await?;

        Ok(talent)
    }
}

fn str_field(payload: &Value, key: &str) -> Option<String> {
    payload.get(key).and_then(Value::as_str).map(str::to_string)
}

fn int_field(payload: &Value, key: &str) -> Option<i32> {
    payload.get(key).and_then(Value::as_i64).map(|n| n as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AnthropicConfig, TalentPoolConfig};
    use sea_orm::{DatabaseBackend, MockDatabase};
    use serde_json::json;

    fn service_with(db: DatabaseConnection) -> TalentQueryService {
        TalentQueryService::new(
            db.clone(),
            AnthropicClient::new(AnthropicConfig {
                api_key: String::new(),
                base_url: "http://localhost".to_string(),
                model: "test".to_string(),
            }),
            TalentPoolClient::new(TalentPoolConfig {
                base_url: "http://localhost".to_string(),
                token: String::new(),
            }),
            CreditService::new(db),
        )
    }

    #[tokio::test]
    async fn test_cache_talent_tolerates_concurrent_insert() {
        let row = talents::Model {
            id: Uuid::new_v4(),
            external_id: "8841".to_string(),
            name: Some("Ada Lovelace".to_string()),
            first_name: None,
            last_name: None,
            title: None,
            url: None,
            location: None,
            industry: None,
            summary: None,
            country: None,
            logo_url: None,
            connections_count: None,
            experience_count: None,
            profile: Some(json!({"name": "Ada Lovelace"})),
            created_at: None,
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row]])
            .into_connection();

        let service = service_with(db.clone());
        let talent = service
            .cache_talent("8841", json!({"name": "Ada Lovelace"}))
            .await
            .unwrap();
        assert_eq!(talent.external_id, "8841");

        // A single statement carries the write; a row cached by a
        // concurrent request is refreshed, not a unique violation.
        let log = format!("{:?}", db.into_transaction_log());
        assert!(log.contains("ON CONFLICT"));
        assert!(log.contains("external_id"));
    }

    #[test]
    fn test_scalar_field_extraction() {
        let payload = json!({
            "name": "Ada Lovelace",
            "connections_count": 512,
            "title": null
        });

        assert_eq!(str_field(&payload, "name").as_deref(), Some("Ada Lovelace"));
        assert_eq!(str_field(&payload, "title"), None);
        assert_eq!(str_field(&payload, "missing"), None);
        assert_eq!(int_field(&payload, "connections_count"), Some(512));
        assert_eq!(int_field(&payload, "name"), None);
    }
}

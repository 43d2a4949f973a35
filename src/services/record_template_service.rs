use crate::entities::record_template_entity as record_templates;
use crate::error::{AppError, AppResult};
use crate::models::*;
use chrono::Utc;
use sea_orm::sea_query::{Expr, ExprTrait};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

#[derive(Clone)]
pub struct RecordTemplateService {
    pool: DatabaseConnection,
}

impl RecordTemplateService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn create_template(
        &self,
        user_id: Uuid,
        request: CreateRecordTemplateRequest,
    ) -> AppResult<RecordTemplateResponse> {
        if request.default_title.trim().is_empty() {
            return Err(AppError::ValidationError(
                "default_title must not be empty".to_string(),
            ));
        }

        let template = record_templates::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            default_title: Set(request.default_title),
            default_focus: Set(request.default_focus),
            default_point: Set(request.default_point),
            default_note: Set(request.default_note),
            created_at: Set(Some(Utc::now())),
        }
        .insert(&self.pool)
        .await?;

        Ok(template.into())
    }

    pub async fn get_template(
        &self,
        user_id: Uuid,
        template_id: Uuid,
    ) -> AppResult<RecordTemplateResponse> {
        let template = self.find_owned(user_id, template_id).await?;
        Ok(template.into())
    }

    pub async fn list_templates(
        &self,
        user_id: Uuid,
        params: &PaginationParams,
    ) -> AppResult<PaginatedResponse<RecordTemplateResponse>> {
        #[derive(Debug, sea_orm::FromQueryResult)]
        struct CountRow {
            count: i64,
        }
        let total = record_templates::Entity::find()
            .filter(record_templates::Column::UserId.eq(user_id))
            .select_only()
            .column_as(Expr::val(1).count(), "count")
            .into_model::<CountRow>()
            .one(&self.pool)
            .await?
            .map(|r| r.count)
            .unwrap_or(0);

        let templates = record_templates::Entity::find()
            .filter(record_templates::Column::UserId.eq(user_id))
            .order_by_desc(record_templates::Column::CreatedAt)
            .offset(params.get_offset() as u64)
            .limit(params.get_limit() as u64)
            .all(&self.pool)
            .await?;

        Ok(PaginatedResponse::new(
            templates.into_iter().map(Into::into).collect(),
            Ord::max(params.page.unwrap_or(1), 1),
            params.get_limit(),
            total,
        ))
    }

    pub async fn update_template(
        &self,
        user_id: Uuid,
        template_id: Uuid,
        request: UpdateRecordTemplateRequest,
    ) -> AppResult<RecordTemplateResponse> {
        let mut model = self.find_owned(user_id, template_id).await?.into_active_model();
        if let Some(title) = request.default_title {
            if title.trim().is_empty() {
                return Err(AppError::ValidationError(
                    "default_title must not be empty".to_string(),
                ));
            }
            model.default_title = Set(title);
        }
        if let Some(focus) = request.default_focus {
            model.default_focus = Set(focus);
        }
        if let Some(point) = request.default_point {
            model.default_point = Set(point);
        }
        if let Some(note) = request.default_note {
            model.default_note = Set(Some(note));
        }
        let template = model.update(&self.pool).await?;

        Ok(template.into())
    }

    pub async fn delete_template(&self, user_id: Uuid, template_id: Uuid) -> AppResult<()> {
        let result = record_templates::Entity::delete_many()
            .filter(record_templates::Column::Id.eq(template_id))
            .filter(record_templates::Column::UserId.eq(user_id))
            .exec(&self.pool)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Record template not found".to_string()));
        }
        Ok(())
    }

    async fn find_owned(
        &self,
        user_id: Uuid,
        template_id: Uuid,
    ) -> AppResult<record_templates::Model> {
        record_templates::Entity::find_by_id(template_id)
            .filter(record_templates::Column::UserId.eq(user_id))
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Record template not found".to_string()))
    }
}

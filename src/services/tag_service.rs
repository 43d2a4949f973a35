use crate::entities::tag_entity as tags;
use crate::error::{AppError, AppResult};
use crate::models::*;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

#[derive(Clone)]
pub struct TagService {
    pool: DatabaseConnection,
}

impl TagService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn create_tag(&self, user_id: Uuid, request: CreateTagRequest) -> AppResult<TagResponse> {
        let name = request.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::ValidationError(
                "Tag name must not be empty".to_string(),
            ));
        }

        let duplicate = tags::Entity::find()
            .filter(tags::Column::UserId.eq(user_id))
            .filter(tags::Column::Name.eq(&name))
            .one(&self.pool)
            .await?;
        if duplicate.is_some() {
            return Err(AppError::ValidationError("Tag already exists".to_string()));
        }

        let tag = tags::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            name: Set(name),
            created_at: Set(Some(Utc::now())),
        }
        .insert(&self.pool)
        .await?;

        Ok(tag.into())
    }

    pub async fn get_tag(&self, user_id: Uuid, tag_id: Uuid) -> AppResult<TagResponse> {
        let tag = self.find_owned(user_id, tag_id).await?;
        Ok(tag.into())
    }

    /// A user's tag list is expected to stay small, so it is not paginated.
    pub async fn list_tags(&self, user_id: Uuid) -> AppResult<Vec<TagResponse>> {
        let tags = tags::Entity::find()
            .filter(tags::Column::UserId.eq(user_id))
            .order_by_asc(tags::Column::Name)
            .all(&self.pool)
            .await?;

        Ok(tags.into_iter().map(Into::into).collect())
    }

    pub async fn update_tag(
        &self,
        user_id: Uuid,
        tag_id: Uuid,
        request: CreateTagRequest,
    ) -> AppResult<TagResponse> {
        let name = request.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::ValidationError(
                "Tag name must not be empty".to_string(),
            ));
        }

        let mut model = self.find_owned(user_id, tag_id).await?.into_active_model();
        model.name = Set(name);
        let tag = model.update(&self.pool).await?;

        Ok(tag.into())
    }

    pub async fn delete_tag(&self, user_id: Uuid, tag_id: Uuid) -> AppResult<()> {
        let result = tags::Entity::delete_many()
            .filter(tags::Column::Id.eq(tag_id))
            .filter(tags::Column::UserId.eq(user_id))
            .exec(&self.pool)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Tag not found".to_string()));
        }
        Ok(())
    }

    async fn find_owned(&self, user_id: Uuid, tag_id: Uuid) -> AppResult<tags::Model> {
        tags::Entity::find_by_id(tag_id)
            .filter(tags::Column::UserId.eq(user_id))
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Tag not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_create_rejects_duplicate_name() {
        let user_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![tags::Model {
                id: Uuid::new_v4(),
                user_id,
                name: "rust".to_string(),
                created_at: None,
            }]])
            .into_connection();

        let service = TagService::new(db);
        let err = service
            .create_tag(
                user_id,
                CreateTagRequest {
                    name: "rust".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_create_rejects_blank_name() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let service = TagService::new(db);

        let err = service
            .create_tag(
                Uuid::new_v4(),
                CreateTagRequest {
                    name: "   ".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }
}

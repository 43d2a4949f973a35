use crate::entities::user_entity as users;
use crate::error::{AppError, AppResult};
use crate::models::*;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, Set};
use uuid::Uuid;

#[derive(Clone)]
pub struct UserService {
    pool: DatabaseConnection,
}

impl UserService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn get_user(&self, user_id: Uuid) -> AppResult<UserResponse> {
        let user = users::Entity::find_by_id(user_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(user.into())
    }

    pub async fn update_user(
        &self,
        user_id: Uuid,
        request: UpdateUserRequest,
    ) -> AppResult<UserResponse> {
        let username = match request.username {
            Some(username) => username,
            None => {
                return Err(AppError::ValidationError(
                    "No fields to update".to_string(),
                ));
            }
        };
        if username.len() < 2 || username.len() > 50 {
            return Err(AppError::ValidationError(
                "Username length must be between 2 and 50 characters".to_string(),
            ));
        }

        let mut model = users::Entity::find_by_id(user_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?
            .into_active_model();
        model.username = Set(username);
        let user = model.update(&self.pool).await?;

        Ok(user.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_get_unknown_user() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<users::Model>::new()])
            .into_connection();

        let service = UserService::new(db);
        let err = service.get_user(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_requires_a_field() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let service = UserService::new(db);

        let err = service
            .update_user(Uuid::new_v4(), UpdateUserRequest { username: None })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }
}

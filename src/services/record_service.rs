use crate::entities::record_entity as records;
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
pub struct RecordService {
    pool: DatabaseConnection,
}

impl RecordService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn create_record(
        &self,
        user_id: Uuid,
        request: CreateRecordRequest,
    ) -> AppResult<RecordResponse> {
        if request.end_time < request.start_time {
            return Err(AppError::ValidationError(
                "end_time must not be before start_time".to_string(),
            ));
        }

        let record = records::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            start_time: Set(request.start_time),
            end_time: Set(request.end_time),
            title: Set(request.title),
            note: Set(request.note),
            focus: Set(request.focus),
            point: Set(request.point),
            created_at: Set(Some(Utc::now())),
        }
        .insert(&self.pool)
        .await?;

        Ok(record.into())
    }

    pub async fn get_record(&self, user_id: Uuid, record_id: Uuid) -> AppResult<RecordResponse> {
        let record = self.find_owned(user_id, record_id).await?;
        Ok(record.into())
    }

    /// List the user's records, newest end_time first. The optional time
    /// window keeps every record that overlaps it.
    pub async fn list_records(
        &self,
        user_id: Uuid,
        query: RecordQuery,
    ) -> AppResult<PaginatedResponse<RecordResponse>> {
        let params = PaginationParams {
            page: query.page,
            page_size: query.page_size,
        };

        let mut finder = records::Entity::find().filter(records::Column::UserId.eq(user_id));
        if let Some(start) = query.start_time {
            finder = finder.filter(records::Column::EndTime.gte(start));
        }
        if let Some(end) = query.end_time {
            finder = finder.filter(records::Column::StartTime.lte(end));
        }

        #[derive(Debug, sea_orm::FromQueryResult)]
        struct CountRow {
            count: i64,
        }
        let total = finder
            .clone()
            .select_only()
            .column_as(Expr::val(1).count(), "count")
            .into_model::<CountRow>()
            .one(&self.pool)
            .await?
            .map(|r| r.count)
            .unwrap_or(0);

        let items = finder
            .order_by_desc(records::Column::EndTime)
            .offset(params.get_offset() as u64)
            .limit(params.get_limit() as u64)
            .all(&self.pool)
            .await?;

        Ok(PaginatedResponse::new(
            items.into_iter().map(Into::into).collect(),
            Ord::max(params.page.unwrap_or(1), 1),
            params.get_limit(),
            total,
        ))
    }

    pub async fn update_record(
        &self,
        user_id: Uuid,
        record_id: Uuid,
        request: UpdateRecordRequest,
    ) -> AppResult<RecordResponse> {
        let record = self.find_owned(user_id, record_id).await?;

        let start_time = request.start_time.unwrap_or(record.start_time);
        let end_time = request.end_time.unwrap_or(record.end_time);
        if end_time < start_time {
            return Err(AppError::ValidationError(
                "end_time must not be before start_time".to_string(),
            ));
        }

        let mut model = record.into_active_model();
        model.start_time = Set(start_time);
        model.end_time = Set(end_time);
        if let Some(title) = request.title {
            model.title = Set(title);
        }
        if let Some(note) = request.note {
            model.note = Set(Some(note));
        }
        if let Some(focus) = request.focus {
            model.focus = Set(focus);
        }
        if let Some(point) = request.point {
            model.point = Set(point);
        }
        let record = model.update(&self.pool).await?;

        Ok(record.into())
    }

    pub async fn delete_record(&self, user_id: Uuid, record_id: Uuid) -> AppResult<()> {
        let result = records::Entity::delete_many()
            .filter(records::Column::Id.eq(record_id))
            .filter(records::Column::UserId.eq(user_id))
            .exec(&self.pool)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Record not found".to_string()));
        }
        Ok(())
    }

    async fn find_owned(&self, user_id: Uuid, record_id: Uuid) -> AppResult<records::Model> {
        records::Entity::find_by_id(record_id)
            .filter(records::Column::UserId.eq(user_id))
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Record not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    #[tokio::test]
    async fn test_create_rejects_inverted_time_range() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let service = RecordService::new(db);

        let now = Utc::now();
        let err = service
            .create_record(
                Uuid::new_v4(),
                CreateRecordRequest {
                    start_time: now,
                    end_time: now - Duration::hours(1),
                    title: "deep work".to_string(),
                    note: None,
                    focus: 5,
                    point: 10,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_delete_missing_record() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let service = RecordService::new(db);
        let err = service
            .delete_record(Uuid::new_v4(), Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}

use crate::handlers::user::get_user_id_from_request;
use crate::models::*;
use crate::services::RecordService;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/records",
    tag = "record",
    request_body = CreateRecordRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Record created", body = RecordResponse),
        (status = 400, description = "Invalid request"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn create_record(
    record_service: web::Data<RecordService>,
    req: HttpRequest,
    request: web::Json<CreateRecordRequest>,
) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req)?;

    match record_service.create_record(user_id, request.into_inner()).await {
        Ok(record) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": record
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/records",
    tag = "record",
    params(
        ("page" = Option<i64>, Query, description = "Page number, 1-based"),
        ("page_size" = Option<i64>, Query, description = "Items per page"),
        ("start_time" = Option<String>, Query, description = "Keep records ending at or after this instant"),
        ("end_time" = Option<String>, Query, description = "Keep records starting at or before this instant")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Records, newest end_time first"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_records(
    record_service: web::Data<RecordService>,
    req: HttpRequest,
    query: web::Query<RecordQuery>,
) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req)?;

    match record_service.list_records(user_id, query.into_inner()).await {
        Ok(records) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": records
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/records/{id}",
    tag = "record",
    params(
        ("id" = Uuid, Path, description = "Record id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Record detail", body = RecordResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Record not found")
    )
)]
pub async fn get_record(
    record_service: web::Data<RecordService>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req)?;

    match record_service.get_record(user_id, path.into_inner()).await {
        Ok(record) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": record
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/records/{id}",
    tag = "record",
    request_body = UpdateRecordRequest,
    params(
        ("id" = Uuid, Path, description = "Record id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Record updated", body = RecordResponse),
        (status = 400, description = "Invalid request"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Record not found")
    )
)]
pub async fn update_record(
    record_service: web::Data<RecordService>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    request: web::Json<UpdateRecordRequest>,
) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req)?;

    match record_service
        .update_record(user_id, path.into_inner(), request.into_inner())
        .await
    {
        Ok(record) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": record
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/records/{id}",
    tag = "record",
    params(
        ("id" = Uuid, Path, description = "Record id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Record deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Record not found")
    )
)]
pub async fn delete_record(
    record_service: web::Data<RecordService>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req)?;

    match record_service.delete_record(user_id, path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Record deleted"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn record_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/records")
            .route("", web::post().to(create_record))
            .route("", web::get().to(list_records))
            .route("/{id}", web::get().to(get_record))
            .route("/{id}", web::put().to(update_record))
            .route("/{id}", web::delete().to(delete_record)),
    );
}

use crate::handlers::user::get_user_id_from_request;
use crate::models::*;
use crate::services::RecordTemplateService;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/record-templates",
    tag = "record_template",
    request_body = CreateRecordTemplateRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Template created", body = RecordTemplateResponse),
        (status = 400, description = "Invalid request"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn create_template(
    template_service: web::Data<RecordTemplateService>,
    req: HttpRequest,
    request: web::Json<CreateRecordTemplateRequest>,
) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req)?;

    match template_service
        .create_template(user_id, request.into_inner())
        .await
    {
        Ok(template) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": template
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/record-templates",
    tag = "record_template",
    params(
        ("page" = Option<i64>, Query, description = "Page number, 1-based"),
        ("page_size" = Option<i64>, Query, description = "Items per page")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Templates, newest first"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_templates(
    template_service: web::Data<RecordTemplateService>,
    req: HttpRequest,
    params: web::Query<PaginationParams>,
) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req)?;

    match template_service.list_templates(user_id, &params).await {
        Ok(templates) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": templates
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/record-templates/{id}",
    tag = "record_template",
    params(
        ("id" = Uuid, Path, description = "Template id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Template detail", body = RecordTemplateResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Template not found")
    )
)]
pub async fn get_template(
    template_service: web::Data<RecordTemplateService>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req)?;

    match template_service.get_template(user_id, path.into_inner()).await {
        Ok(template) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": template
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/record-templates/{id}",
    tag = "record_template",
    request_body = UpdateRecordTemplateRequest,
    params(
        ("id" = Uuid, Path, description = "Template id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Template updated", body = RecordTemplateResponse),
        (status = 400, description = "Invalid request"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Template not found")
    )
)]
pub async fn update_template(
    template_service: web::Data<RecordTemplateService>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    request: web::Json<UpdateRecordTemplateRequest>,
) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req)?;

    match template_service
        .update_template(user_id, path.into_inner(), request.into_inner())
        .await
    {
        Ok(template) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": template
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/record-templates/{id}",
    tag = "record_template",
    params(
        ("id" = Uuid, Path, description = "Template id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Template deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Template not found")
    )
)]
pub async fn delete_template(
    template_service: web::Data<RecordTemplateService>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req)?;

    match template_service
        .delete_template(user_id, path.into_inner())
        .await
    {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Record template deleted"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn record_template_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/record-templates")
            .route("", web::post().to(create_template))
            .route("", web::get().to(list_templates))
            .route("/{id}", web::get().to(get_template))
            .route("/{id}", web::put().to(update_template))
            .route("/{id}", web::delete().to(delete_template)),
    );
}

use crate::handlers::user::get_user_id_from_request;
use crate::models::*;
use crate::services::TagService;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/tags",
    tag = "tag",
    request_body = CreateTagRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Tag created", body = TagResponse),
        (status = 400, description = "Invalid or duplicate name"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn create_tag(
    tag_service: web::Data<TagService>,
    req: HttpRequest,
    request: web::Json<CreateTagRequest>,
) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req)?;

    match tag_service.create_tag(user_id, request.into_inner()).await {
        Ok(tag) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": tag
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/tags",
    tag = "tag",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "All tags of the user", body = [TagResponse]),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_tags(tag_service: web::Data<TagService>, req: HttpRequest) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req)?;

    match tag_service.list_tags(user_id).await {
        Ok(tags) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": tags
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/tags/{id}",
    tag = "tag",
    params(
        ("id" = Uuid, Path, description = "Tag id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Tag detail", body = TagResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Tag not found")
    )
)]
pub async fn get_tag(
    tag_service: web::Data<TagService>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req)?;

    match tag_service.get_tag(user_id, path.into_inner()).await {
        Ok(tag) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": tag
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/tags/{id}",
    tag = "tag",
    request_body = CreateTagRequest,
    params(
        ("id" = Uuid, Path, description = "Tag id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Tag renamed", body = TagResponse),
        (status = 400, description = "Invalid name"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Tag not found")
    )
)]
pub async fn update_tag(
    tag_service: web::Data<TagService>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    request: web::Json<CreateTagRequest>,
) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req)?;

    match tag_service
        .update_tag(user_id, path.into_inner(), request.into_inner())
        .await
    {
        Ok(tag) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": tag
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/tags/{id}",
    tag = "tag",
    params(
        ("id" = Uuid, Path, description = "Tag id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Tag deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Tag not found")
    )
)]
pub async fn delete_tag(
    tag_service: web::Data<TagService>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req)?;

    match tag_service.delete_tag(user_id, path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Tag deleted"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn tag_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/tags")
            .route("", web::post().to(create_tag))
            .route("", web::get().to(list_tags))
            .route("/{id}", web::get().to(get_tag))
            .route("/{id}", web::put().to(update_tag))
            .route("/{id}", web::delete().to(delete_tag)),
    );
}

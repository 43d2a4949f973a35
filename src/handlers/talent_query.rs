use crate::handlers::user::get_user_id_from_request;
use crate::models::*;
use crate::services::TalentQueryService;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/talent-query",
    tag = "talent_query",
    request_body = CreateTalentQueryRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Query structured and searched", body = CreateTalentQueryResponse),
        (status = 400, description = "Empty query"),
        (status = 401, description = "Unauthorized"),
        (status = 502, description = "Upstream service failure")
    )
)]
pub async fn create_query(
    talent_service: web::Data<TalentQueryService>,
    req: HttpRequest,
    request: web::Json<CreateTalentQueryRequest>,
) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req)?;

    match talent_service.create_query(user_id, request.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/talent-query/{id}",
    tag = "talent_query",
    params(
        ("id" = Uuid, Path, description = "Talent query id"),
        ("page" = Option<i64>, Query, description = "Page number, 1-based"),
        ("page_size" = Option<i64>, Query, description = "Items per page")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "One page of talent details", body = TalentPageResponse),
        (status = 400, description = "Insufficient contact credits"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Talent query not found"),
        (status = 502, description = "Upstream service failure")
    )
)]
pub async fn get_talent_details(
    talent_service: web::Data<TalentQueryService>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    query: web::Query<TalentPageQuery>,
) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req)?;

    match talent_service
        .get_talent_details(user_id, path.into_inner(), query.into_inner())
        .await
    {
        Ok(page) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": page
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn talent_query_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/talent-query")
            .route("", web::post().to(create_query))
            .route("/{id}", web::get().to(get_talent_details)),
    );
}

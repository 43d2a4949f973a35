use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::services::UserService;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;
use uuid::Uuid;

pub(crate) fn get_user_id_from_request(req: &HttpRequest) -> AppResult<Uuid> {
    req.extensions()
        .get::<Uuid>()
        .copied()
        .ok_or_else(|| AppError::AuthError("Missing access token".to_string()))
}

#[utoipa::path(
    get,
    path = "/user/me",
    tag = "user",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Current user profile", body = UserResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_me(user_service: web::Data<UserService>, req: HttpRequest) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req)?;

    match user_service.get_user(user_id).await {
        Ok(user) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": user
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/user/me",
    tag = "user",
    request_body = UpdateUserRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Profile updated", body = UserResponse),
        (status = 400, description = "Invalid request"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn update_me(
    user_service: web::Data<UserService>,
    req: HttpRequest,
    request: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req)?;

    match user_service.update_user(user_id, request.into_inner()).await {
        Ok(user) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": user
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn user_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/user")
            .route("/me", web::get().to(get_me))
            .route("/me", web::put().to(update_me)),
    );
}

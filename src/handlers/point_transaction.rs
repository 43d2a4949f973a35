use crate::handlers::user::get_user_id_from_request;
use crate::models::*;
use crate::services::PointTransactionService;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/point-transactions",
    tag = "point_transaction",
    request_body = CreatePointTransactionRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Transfer recorded", body = PointTransactionResponse),
        (status = 400, description = "Invalid request"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Recipient not found")
    )
)]
pub async fn create_transaction(
    point_service: web::Data<PointTransactionService>,
    req: HttpRequest,
    request: web::Json<CreatePointTransactionRequest>,
) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req)?;

    match point_service
        .create_transaction(user_id, request.into_inner())
        .await
    {
        Ok(transaction) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": transaction
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/point-transactions",
    tag = "point_transaction",
    params(
        ("page" = Option<i64>, Query, description = "Page number, 1-based"),
        ("page_size" = Option<i64>, Query, description = "Items per page")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Transfers involving the user, newest first"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_transactions(
    point_service: web::Data<PointTransactionService>,
    req: HttpRequest,
    params: web::Query<PaginationParams>,
) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req)?;

    match point_service.list_transactions(user_id, &params).await {
        Ok(transactions) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": transactions
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/point-transactions/{id}",
    tag = "point_transaction",
    params(
        ("id" = Uuid, Path, description = "Transaction id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Transfer detail", body = PointTransactionResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Transaction not found")
    )
)]
pub async fn get_transaction(
    point_service: web::Data<PointTransactionService>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req)?;

    match point_service.get_transaction(user_id, path.into_inner()).await {
        Ok(transaction) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": transaction
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn point_transaction_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/point-transactions")
            .route("", web::post().to(create_transaction))
            .route("", web::get().to(list_transactions))
            .route("/{id}", web::get().to(get_transaction)),
    );
}

use crate::handlers::user::get_user_id_from_request;
use crate::models::*;
use crate::services::CreditService;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/credits",
    tag = "credit",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Credit balances", body = [CreditBalanceResponse]),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_balances(
    credit_service: web::Data<CreditService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req)?;

    match credit_service.get_balances(user_id).await {
        Ok(balances) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": balances
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/credits/transactions",
    tag = "credit",
    params(
        ("page" = Option<i64>, Query, description = "Page number, 1-based"),
        ("page_size" = Option<i64>, Query, description = "Items per page")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Credit transaction log, newest first"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_transactions(
    credit_service: web::Data<CreditService>,
    req: HttpRequest,
    params: web::Query<PaginationParams>,
) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req)?;

    match credit_service.list_transactions(user_id, &params).await {
        Ok(transactions) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": transactions
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn credit_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/credits")
            .route("", web::get().to(get_balances))
            .route("/transactions", web::get().to(list_transactions)),
    );
}

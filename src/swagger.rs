use actix_web::web;
use utoipa::OpenApi;
use utoipa::{
    Modify,
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models::*;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.as_mut().unwrap();
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        )
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::auth::register,
        handlers::auth::login,
        handlers::auth::refresh,
        handlers::auth::logout,
        handlers::user::get_me,
        handlers::user::update_me,
        handlers::credit::get_balances,
        handlers::credit::list_transactions,
        handlers::record::create_record,
        handlers::record::list_records,
        handlers::record::get_record,
        handlers::record::update_record,
        handlers::record::delete_record,
        handlers::record_template::create_template,
        handlers::record_template::list_templates,
        handlers::record_template::get_template,
        handlers::record_template::update_template,
        handlers::record_template::delete_template,
        handlers::tag::create_tag,
        handlers::tag::list_tags,
        handlers::tag::get_tag,
        handlers::tag::update_tag,
        handlers::tag::delete_tag,
        handlers::point_transaction::create_transaction,
        handlers::point_transaction::list_transactions,
        handlers::point_transaction::get_transaction,
        handlers::talent_query::create_query,
        handlers::talent_query::get_talent_details,
    ),
    components(
        schemas(
            CreateUserRequest,
            LoginRequest,
            UpdateUserRequest,
            UserResponse,
            AuthResponse,
            CreditType,
            TransactionType,
            CreditBalanceResponse,
            CreditTransactionResponse,
            CreateRecordRequest,
            UpdateRecordRequest,
            RecordResponse,
            CreateRecordTemplateRequest,
            UpdateRecordTemplateRequest,
            RecordTemplateResponse,
            CreateTagRequest,
            TagResponse,
            CreatePointTransactionRequest,
            PointTransactionResponse,
            CreateTalentQueryRequest,
            CreateTalentQueryResponse,
            SearchFilters,
            TalentDetailResponse,
            TalentPageResponse,
            ApiError,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Authentication API"),
        (name = "user", description = "User profile API"),
        (name = "credit", description = "Credit balance and transaction log API"),
        (name = "record", description = "Work record API"),
        (name = "record_template", description = "Record template API"),
        (name = "tag", description = "Tag API"),
        (name = "point_transaction", description = "Point transfer API"),
        (name = "talent_query", description = "Talent search API"),
    ),
    info(
        title = "TalentScout Backend API",
        version = "1.0.0",
        description = "Talent sourcing backend REST API documentation"
    ),
    servers(
        (url = "/api/v1", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}

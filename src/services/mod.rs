pub mod auth_service;
pub mod credit_service;
pub mod point_transaction_service;
pub mod record_service;
pub mod record_template_service;
pub mod tag_service;
pub mod talent_query_service;
pub mod user_service;

pub use auth_service::AuthService;
pub use credit_service::CreditService;
pub use point_transaction_service::PointTransactionService;
pub use record_service::RecordService;
pub use record_template_service::RecordTemplateService;
pub use tag_service::TagService;
pub use talent_query_service::TalentQueryService;
pub use user_service::UserService;

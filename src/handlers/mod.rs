pub mod auth;
pub mod credit;
pub mod point_transaction;
pub mod record;
pub mod record_template;
pub mod tag;
pub mod talent_query;
pub mod user;

pub use auth::auth_config;
pub use credit::credit_config;
pub use point_transaction::point_transaction_config;
pub use record::record_config;
pub use record_template::record_template_config;
pub use tag::tag_config;
pub use talent_query::talent_query_config;
pub use user::user_config;

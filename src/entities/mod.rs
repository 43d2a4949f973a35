pub mod credit_transactions;
pub mod credit_types;
pub mod point_transactions;
pub mod record_templates;
pub mod records;
pub mod tags;
pub mod talent_queries;
pub mod talents;
pub mod user_credits;
pub mod users;

pub use credit_transactions as credit_transaction_entity;
pub use credit_types as credit_type_entity;
pub use point_transactions as point_transaction_entity;
pub use record_templates as record_template_entity;
pub use records as record_entity;
pub use tags as tag_entity;
pub use talent_queries as talent_query_entity;
pub use talents as talent_entity;
pub use user_credits as user_credit_entity;
pub use users as user_entity;

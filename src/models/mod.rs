pub mod common;
pub mod credit;
pub mod pagination;
pub mod point_transaction;
pub mod record;
pub mod record_template;
pub mod tag;
pub mod talent;
pub mod user;

pub use common::*;
pub use credit::*;
pub use pagination::*;
pub use point_transaction::*;
pub use record::*;
pub use record_template::*;
pub use tag::*;
pub use talent::*;
pub use user::*;

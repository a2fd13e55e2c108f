pub mod product;
pub mod tag;
pub mod transaction;
pub mod user;

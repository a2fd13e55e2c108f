//! Betsy: a small webshop catalog/ordering backend over SQLite.
//!
//! The [`store`] module is the persistence boundary (typed repository
//! methods on a [`Store`] handle); [`catalog`] holds the operations built
//! on top of it: fuzzy product [`catalog::search`], user/tag listings,
//! catalog mutation and [`catalog::purchase_product`].
//!
//! [`Store`]: store::Store

pub mod catalog;
pub mod database;
pub mod error;
pub mod matching;
pub mod models;
pub mod seed;
pub mod store;

pub use error::AppError;
pub use store::Store;

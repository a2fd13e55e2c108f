//! The query/command layer: stateless functions over a [`Store`] handle.
//!
//! [`Store`]: crate::store::Store

mod listings;
mod mutations;
mod purchase;
mod search;

pub use listings::{list_products_per_tag, list_user_products};
pub use mutations::{add_product_to_catalog, remove_product, update_stock};
pub use purchase::purchase_product;
pub use search::{search, SearchHit};

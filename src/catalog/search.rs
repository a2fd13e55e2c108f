use std::fmt;

use serde::Serialize;
use tracing::instrument;

use crate::error::AppError;
use crate::matching::similarity_ratio;
use crate::store::Store;

#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub rank: usize,
    /// Integer percentage 0..=100, truncated from the similarity ratio.
    pub score: u8,
    pub name: String,
    pub product_id: i64,
}

impl fmt::Display for SearchHit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Match: {}% | Product: {} | ID: {}",
            self.score, self.name, self.product_id
        )
    }
}

/// Scores every product against `term` (case-insensitive, best of name and
/// description) and returns them ranked from 1, highest score first. Ties
/// keep catalog order. Read-only.
#[instrument(skip(store))]
pub async fn search(store: &Store, term: &str) -> Result<Vec<SearchHit>, AppError> {
    let needle = term.to_lowercase();
    let mut scored: Vec<(u8, String, i64)> = store
        .all_products()
        .await?
        .into_iter()
        .map(|product| {
            let by_name = similarity_ratio(&needle, &product.name.to_lowercase());
            let by_description = similarity_ratio(&needle, &product.description.to_lowercase());
            let score = (by_name.max(by_description) * 100.0) as u8;
            (score, product.name, product.id)
        })
        .collect();

    // Stable sort: equal scores stay in enumeration order.
    scored.sort_by(|left, right| right.0.cmp(&left.0));

    Ok(scored
        .into_iter()
        .enumerate()
        .map(|(index, (score, name, product_id))| SearchHit {
            rank: index + 1,
            score,
            name,
            product_id,
        })
        .collect())
}

use super::filters_model::{CoinCategory, FilterRule};
use crate::market_data::Coin;

pub struct FilterEngine;

impl FilterEngine {
    /// Recompute the filtered view from the full canonical list.
    pub fn apply(coins: &[Coin], rule: &FilterRule) -> Vec<Coin> {
        match rule {
            FilterRule::Category(CoinCategory::All) => coins.to_vec(),
            FilterRule::Category(CoinCategory::Rising) => coins
                .iter()
                .filter(|coin| coin.change_24h > 0.0)
                .cloned()
                .collect(),
            FilterRule::Category(CoinCategory::Falling) => coins
                .iter()
                .filter(|coin| coin.change_24h < 0.0)
                .cloned()
                .collect(),
            FilterRule::Search(query) => {
                let query = query.to_lowercase();
                coins
                    .iter()
                    .filter(|coin| {
                        coin.name.to_lowercase().contains(&query)
                            || coin.symbol.to_lowercase().contains(&query)
                    })
                    .cloned()
                    .collect()
            }
        }
    }
}

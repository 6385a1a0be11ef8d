use super::portfolio_constants::NOTIONAL_UNITS;
use super::portfolio_model::PortfolioSnapshot;
use crate::market_data::Coin;

pub struct PortfolioService;

impl PortfolioService {
    /// Recompute the summary over the canonical list.
    ///
    /// A coin counts iff its price is present and nonzero AND its 24h
    /// change is nonzero; a coin at exactly 0% change is excluded from
    /// both sums. When nothing counts, the previous snapshot is
    /// retained unchanged rather than zeroed.
    pub fn recompute(coins: &[Coin], previous: &PortfolioSnapshot) -> PortfolioSnapshot {
        let mut total_value = 0.0;
        let mut total_change = 0.0;
        let mut valid_count = 0usize;

        for coin in coins {
            let price = match coin.current_price {
                Some(price) if price != 0.0 => price,
                _ => continue,
            };
            if coin.change_24h == 0.0 {
                continue;
            }
            total_value += price * NOTIONAL_UNITS;
            total_change += coin.change_24h;
            valid_count += 1;
        }

        if valid_count == 0 {
            return previous.clone();
        }

        PortfolioSnapshot {
            total_value,
            average_change: total_change / valid_count as f64,
            valid_count,
        }
    }
}

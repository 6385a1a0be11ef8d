use super::market_data_model::Coin;

/// In-memory holder of the canonical coin list and its derived filtered
/// view. Replaced wholesale on each successful acquisition, never
/// partially mutated.
#[derive(Debug, Default)]
pub struct CoinRepository {
    coins: Vec<Coin>,
    filtered: Vec<Coin>,
    /// Generation token of the last applied acquisition.
    generation: u64,
}

impl CoinRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the canonical list. The filtered view resets to the full
    /// list; any active filter or search is recomputed by the caller's
    /// next action rather than carried over.
    ///
    /// The generation must be strictly newer than the last applied one;
    /// a stale acquisition racing a newer one is rejected here, under
    /// the same lock the caller holds for the apply, and the repository
    /// is left untouched.
    pub fn replace(&mut self, coins: Vec<Coin>, generation: u64) -> bool {
        if generation <= self.generation {
            return false;
        }
        self.filtered = coins.clone();
        self.coins = coins;
        self.generation = generation;
        true
    }

    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    pub fn filtered(&self) -> &[Coin] {
        &self.filtered
    }

    /// Install a freshly computed filtered view. Callers derive it from
    /// the canonical list, so subset-by-identity holds by construction.
    pub fn set_filtered(&mut self, filtered: Vec<Coin>) {
        self.filtered = filtered;
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Distinguishes "never loaded" from a legitimately empty result.
    pub fn is_loaded(&self) -> bool {
        self.generation > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market_data::market_data_model::{Coin, Provenance};

    fn coin(id: &str, change: f64) -> Coin {
        Coin {
            id: id.to_string(),
            symbol: id.to_string(),
            name: id.to_string(),
            current_price: Some(1.0),
            change_24h: change,
            market_cap: None,
            volume_24h: None,
            image: None,
            last_updated: None,
            provenance: Provenance::Local,
        }
    }

    #[test]
    fn replace_resets_filtered_view() {
        let mut repo = CoinRepository::new();
        repo.replace(vec![coin("btc", 5.0), coin("eth", -2.0)], 1);
        repo.set_filtered(vec![coin("btc", 5.0)]);
        assert_eq!(repo.filtered().len(), 1);

        repo.replace(vec![coin("btc", 6.0)], 2);
        assert_eq!(repo.filtered().len(), 1);
        assert_eq!(repo.filtered()[0].change_24h, 6.0);
        assert_eq!(repo.generation(), 2);
    }

    #[test]
    fn stale_generation_cannot_overwrite_newer_data() {
        let mut repo = CoinRepository::new();
        assert!(repo.replace(vec![coin("eth", 1.0)], 2));

        // A slower cycle issued earlier arrives after the newer one.
        assert!(!repo.replace(vec![coin("btc", 5.0)], 1));
        assert_eq!(repo.coins()[0].id, "eth");
        assert_eq!(repo.generation(), 2);

        // Replaying the applied generation is rejected too.
        assert!(!repo.replace(vec![coin("btc", 5.0)], 2));
        assert_eq!(repo.generation(), 2);
    }

    #[test]
    fn loaded_is_distinct_from_empty() {
        let mut repo = CoinRepository::new();
        assert!(!repo.is_loaded());
        repo.replace(Vec::new(), 1);
        assert!(repo.is_loaded());
        assert!(repo.coins().is_empty());
    }
}

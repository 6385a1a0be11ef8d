use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CoinCategory {
    #[default]
    All,
    Rising,
    Falling,
}

/// One filtering action. A category selection and a text search are
/// mutually exclusive triggers: each recomputes the view from the full
/// canonical list using only its own criterion, never combined.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterRule {
    Category(CoinCategory),
    Search(String),
}

/// Last-known filter inputs, retained for presentation echo (active
/// button, search box contents). The applied view always comes from a
/// single [`FilterRule`].
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    pub query: String,
    pub category: CoinCategory,
}

use serde::{Deserialize, Serialize};

/// Derived portfolio-level summary, recomputed whenever the canonical
/// list changes. Never persisted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    pub total_value: f64,
    pub average_change: f64,
    pub valid_count: usize,
}

impl PortfolioSnapshot {
    /// Display fog intensity derived from the average change. Heavier
    /// fog the deeper the market average sinks.
    pub fn fog_opacity(&self) -> f64 {
        if self.average_change < -5.0 {
            0.4
        } else if self.average_change < -2.0 {
            0.2
        } else if self.average_change < 0.0 {
            0.1
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(average_change: f64) -> PortfolioSnapshot {
        PortfolioSnapshot {
            total_value: 1000.0,
            average_change,
            valid_count: 1,
        }
    }

    #[test]
    fn fog_thickens_with_deeper_losses() {
        assert_eq!(snapshot(2.0).fog_opacity(), 0.0);
        assert_eq!(snapshot(0.0).fog_opacity(), 0.0);
        assert_eq!(snapshot(-1.0).fog_opacity(), 0.1);
        assert_eq!(snapshot(-3.0).fog_opacity(), 0.2);
        assert_eq!(snapshot(-7.5).fog_opacity(), 0.4);
    }
}

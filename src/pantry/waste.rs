use std::collections::BTreeMap;

use crate::models::PerKind;

/// Daily record of discarded mass, split by cause.
///
/// Strategy discards are proactive (the pantry policy chose to throw food
/// out); expired discards are forced (the food became unsafe). Every
/// simulated day gets an entry in both maps, zeros included.
#[derive(Debug, Default)]
pub struct WasteLog {
    expired: BTreeMap<u32, PerKind<f64>>,
    strategy: BTreeMap<u32, PerKind<f64>>,
}

impl WasteLog {
    pub fn record(&mut self, day: u32, expired: PerKind<f64>, strategy: PerKind<f64>) {
        self.expired.insert(day, expired);
        self.strategy.insert(day, strategy);
    }

    /// Expired-discard masses for a day (zeros when the day is unknown).
    pub fn expired_on(&self, day: u32) -> PerKind<f64> {
        self.expired.get(&day).copied().unwrap_or_default()
    }

    /// Strategy-discard masses for a day (zeros when the day is unknown).
    pub fn strategy_on(&self, day: u32) -> PerKind<f64> {
        self.strategy.get(&day).copied().unwrap_or_default()
    }

    /// All expired-discard entries, by day.
    pub fn expired_discards(&self) -> &BTreeMap<u32, PerKind<f64>> {
        &self.expired
    }

    /// All strategy-discard entries, by day.
    pub fn strategy_discards(&self) -> &BTreeMap<u32, PerKind<f64>> {
        &self.strategy
    }

    /// Total mass lost to expiry over the whole run.
    pub fn total_expired(&self) -> f64 {
        self.expired.values().map(PerKind::total).sum()
    }

    /// Total mass discarded by policy over the whole run.
    pub fn total_strategy(&self) -> f64 {
        self.strategy.values().map(PerKind::total).sum()
    }
}

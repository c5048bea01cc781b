pub mod policy;
pub mod waste;

pub use policy::{LaxPolicy, PantryPolicy, StrictPolicy};
pub use waste::WasteLog;

use crate::models::food::EMPTY_EPSILON;
use crate::models::{FoodItem, FoodKind, PerKind};

/// A household's food storage: one ordered list of items per kind, a day
/// counter, and a ledger of everything thrown away.
///
/// Each kind's list is kept sorted ascending by spoilage date after every
/// insertion, so index 0 is always the item closest to spoiling. FIFO-style
/// consumption relies on this ordering.
#[derive(Debug, Default)]
pub struct Pantry {
    items: PerKind<Vec<FoodItem>>,
    waste_log: WasteLog,
    current_day: u32,
}

impl Pantry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an item, keeping the kind's list sorted soonest-to-spoil first.
    pub fn add_item(&mut self, item: FoodItem) {
        let list = self.items.get_mut(item.kind);
        list.push(item);
        list.sort_by_key(|i| i.spoilage_date());
    }

    /// Items of one kind, soonest-to-spoil first.
    pub fn items(&self, kind: FoodKind) -> &[FoodItem] {
        self.items.get(kind)
    }

    /// Mutable access to one item by its position in the kind's list.
    pub fn item_mut(&mut self, kind: FoodKind, index: usize) -> &mut FoodItem {
        &mut self.items.get_mut(kind)[index]
    }

    /// Total stored mass of one kind, in kg.
    pub fn total_by_kind(&self, kind: FoodKind) -> f64 {
        self.items.get(kind).iter().map(|i| i.quantity()).sum()
    }

    /// Total stored mass across all kinds, in kg.
    pub fn total(&self) -> f64 {
        FoodKind::ALL.iter().map(|&k| self.total_by_kind(k)).sum()
    }

    /// The number of `step` calls so far.
    pub fn current_day(&self) -> u32 {
        self.current_day
    }

    pub fn waste_log(&self) -> &WasteLog {
        &self.waste_log
    }

    /// Advance one day: age every item, then prune.
    ///
    /// Classification order per item is fixed: finished items (quantity at or
    /// below the near-zero epsilon) leave without counting as waste; expired
    /// items land in the expired bucket; only items that survive both checks
    /// are offered to the policy. An item is therefore never counted twice.
    /// Both waste buckets are written for every day, zeros included.
    pub fn step(&mut self, policy: &dyn PantryPolicy) {
        self.current_day += 1;

        let mut expired_weights = PerKind::<f64>::default();
        let mut strategy_weights = PerKind::<f64>::default();

        for &kind in &FoodKind::ALL {
            let list = self.items.get_mut(kind);
            let mut kept = Vec::with_capacity(list.len());

            for mut item in list.drain(..) {
                item.day_passes();

                if item.quantity() <= EMPTY_EPSILON {
                    // Finished, not wasted.
                } else if item.is_expired() {
                    *expired_weights.get_mut(kind) += item.quantity();
                } else if policy.should_discard(&item) {
                    *strategy_weights.get_mut(kind) += item.quantity();
                } else {
                    kept.push(item);
                }
            }

            *list = kept;
        }

        self.waste_log
            .record(self.current_day, expired_weights, strategy_weights);
    }

    /// Empty every kind's list. The waste ledger and day counter survive.
    pub fn reset(&mut self) {
        self.items = PerKind::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoodItem;
    use assert_float_eq::assert_float_absolute_eq;

    fn item(name: &str, kind: FoodKind, best_before: i32, spoilage: i32, qty: f64) -> FoodItem {
        FoodItem::new(name, kind, best_before, spoilage, qty).unwrap()
    }

    #[test]
    fn test_insertion_keeps_spoilage_order() {
        let mut pantry = Pantry::new();
        pantry.add_item(item("late", FoodKind::Perishable, 5, 9, 1.0));
        pantry.add_item(item("soon", FoodKind::Perishable, 1, 2, 1.0));
        pantry.add_item(item("mid", FoodKind::Perishable, 3, 5, 1.0));

        let names: Vec<&str> = pantry
            .items(FoodKind::Perishable)
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names, vec!["soon", "mid", "late"]);
    }

    #[test]
    fn test_step_expires_items_into_waste_log() {
        let mut pantry = Pantry::new();
        pantry.add_item(item("old milk", FoodKind::Perishable, 1, 1, 2.0));
        pantry.add_item(item("fresh", FoodKind::Perishable, 3, 6, 1.0));

        pantry.step(&LaxPolicy);

        assert_eq!(pantry.items(FoodKind::Perishable).len(), 1);
        let expired = pantry.waste_log().expired_on(1);
        assert_float_absolute_eq!(expired.perishable, 2.0, 1e-9);
        assert_float_absolute_eq!(expired.leftover, 0.0, 1e-9);
        assert_float_absolute_eq!(expired.non_perishable, 0.0, 1e-9);
    }

    #[test]
    fn test_strict_discards_past_best_before_lax_keeps() {
        // Past best-before after one day, but not expired.
        let stale = || item("stale", FoodKind::NonPerishable, 1, 10, 3.0);

        let mut strict_pantry = Pantry::new();
        strict_pantry.add_item(stale());
        strict_pantry.step(&StrictPolicy);
        assert!(strict_pantry.items(FoodKind::NonPerishable).is_empty());
        assert_float_absolute_eq!(strict_pantry.waste_log().strategy_on(1).non_perishable, 3.0);

        let mut lax_pantry = Pantry::new();
        lax_pantry.add_item(stale());
        lax_pantry.step(&LaxPolicy);
        assert_eq!(lax_pantry.items(FoodKind::NonPerishable).len(), 1);
        assert_float_absolute_eq!(lax_pantry.waste_log().strategy_on(1).non_perishable, 0.0);
    }

    #[test]
    fn test_empty_items_are_removed_without_waste() {
        let mut pantry = Pantry::new();
        pantry.add_item(item("crumbs", FoodKind::NonPerishable, 5, 10, 0.0005));

        pantry.step(&StrictPolicy);

        assert!(pantry.items(FoodKind::NonPerishable).is_empty());
        assert_float_absolute_eq!(pantry.waste_log().expired_on(1).total(), 0.0);
        assert_float_absolute_eq!(pantry.waste_log().strategy_on(1).total(), 0.0);
    }

    #[test]
    fn test_waste_conservation_no_double_counting() {
        let mut pantry = Pantry::new();
        // Will expire: counted once, in the expired bucket only.
        pantry.add_item(item("expiring", FoodKind::Perishable, 1, 1, 4.0));
        // Past best-before but safe: strategy bucket under Strict.
        pantry.add_item(item("stale", FoodKind::Perishable, 1, 10, 2.5));
        // Fresh: survives.
        pantry.add_item(item("fresh", FoodKind::Perishable, 5, 8, 1.0));

        let before = pantry.total();
        pantry.step(&StrictPolicy);
        let after = pantry.total();

        let expired = pantry.waste_log().expired_on(1).total();
        let strategy = pantry.waste_log().strategy_on(1).total();
        assert_float_absolute_eq!(expired, 4.0, 1e-9);
        assert_float_absolute_eq!(strategy, 2.5, 1e-9);
        assert_float_absolute_eq!(before - after, expired + strategy, 1e-9);
    }

    #[test]
    fn test_reset_clears_items_but_not_ledger() {
        let mut pantry = Pantry::new();
        pantry.add_item(item("expiring", FoodKind::Perishable, 1, 1, 4.0));
        pantry.step(&LaxPolicy);
        pantry.add_item(item("fresh", FoodKind::Perishable, 3, 6, 1.0));

        pantry.reset();

        assert_float_absolute_eq!(pantry.total(), 0.0);
        assert_float_absolute_eq!(pantry.waste_log().expired_on(1).perishable, 4.0);
        assert_eq!(pantry.current_day(), 1);
    }
}

use rand::RngCore;

use crate::consumption::{ConsumptionStrategy, Pick};
use crate::error::Result;
use crate::models::{FoodItem, FoodKind, PerKind};
use crate::pantry::Pantry;

/// Name of the synthetic item used when the pantry cannot cover a meal's
/// target. It is recorded as consumption but never subtracted from storage.
pub const EMERGENCY_TAKEOUT: &str = "Emergency Takeout";

/// A meal occasion's target mass in grams, before any breakdown by kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannedMeal {
    pub total_grams: f64,
}

impl PlannedMeal {
    pub fn new(total_grams: f64) -> Self {
        Self { total_grams }
    }
}

/// One realized portion of a meal: what was eaten, of which kind, how much.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsumedPortion {
    pub name: String,
    pub kind: FoodKind,
    pub amount: f64,
}

impl ConsumedPortion {
    pub fn is_emergency_takeout(&self) -> bool {
        self.name == EMERGENCY_TAKEOUT
    }
}

/// Selected picks for one kind, plus the mass the pantry could not cover.
#[derive(Debug, Clone)]
pub struct KindSelection {
    pub kind: FoodKind,
    pub picks: Vec<Pick>,
    pub shortfall: f64,
}

/// A concrete meal: a per-kind consumption pattern resolved against a pantry.
#[derive(Debug, Clone, PartialEq)]
pub struct Meal {
    pattern: PerKind<f64>,
}

impl Meal {
    pub fn new(pattern: PerKind<f64>) -> Self {
        Self { pattern }
    }

    /// Target mass per kind for this occasion.
    pub fn pattern(&self) -> &PerKind<f64> {
        &self.pattern
    }

    /// Ask the consumption strategy for specific picks per kind.
    ///
    /// Any gap between a kind's target and what the strategy could source is
    /// reported as a shortfall, later surfaced as Emergency Takeout.
    pub fn choose_food_to_eat(
        &self,
        pantry: &Pantry,
        strategy: &dyn ConsumptionStrategy,
        rng: &mut dyn RngCore,
    ) -> Vec<KindSelection> {
        let mut selections = Vec::with_capacity(FoodKind::ALL.len());

        for &kind in &FoodKind::ALL {
            let target = *self.pattern.get(kind);
            let picks = strategy.select_food(pantry, kind, target, rng);
            let sourced: f64 = picks.iter().map(|p| p.amount).sum();
            let shortfall = (target - sourced).max(0.0);
            selections.push(KindSelection {
                kind,
                picks,
                shortfall,
            });
        }

        selections
    }

    /// Choose picks, subtract them from the pantry, and return the realized
    /// consumption record with any Emergency Takeout portions included.
    pub fn consume(
        &self,
        pantry: &mut Pantry,
        strategy: &dyn ConsumptionStrategy,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<ConsumedPortion>> {
        let selections = self.choose_food_to_eat(pantry, strategy, rng);
        let mut portions = Vec::new();

        for selection in selections {
            for pick in &selection.picks {
                let item = pantry.item_mut(selection.kind, pick.index);
                item.consume(pick.amount)?;
                portions.push(ConsumedPortion {
                    name: item.name.clone(),
                    kind: selection.kind,
                    amount: pick.amount,
                });
            }
            if selection.shortfall > 0.0 {
                // The takeout placeholder mirrors the FoodItem it stands in
                // for: perishable, already at its horizons, never stored.
                let takeout =
                    FoodItem::new(EMERGENCY_TAKEOUT, FoodKind::Perishable, 0, 0, selection.shortfall)?;
                portions.push(ConsumedPortion {
                    name: takeout.name,
                    kind: takeout.kind,
                    amount: selection.shortfall,
                });
            }
        }

        Ok(portions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consumption::BasicConsumptionStrategy;
    use assert_float_eq::assert_float_absolute_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pantry_with(kind: FoodKind, qty: f64) -> Pantry {
        let mut pantry = Pantry::new();
        pantry.add_item(FoodItem::new("stock", kind, 3, 6, qty).unwrap());
        pantry
    }

    #[test]
    fn test_consume_subtracts_from_pantry() {
        let mut pantry = pantry_with(FoodKind::Perishable, 500.0);
        let meal = Meal::new(PerKind {
            perishable: 200.0,
            ..Default::default()
        });
        let mut rng = StdRng::seed_from_u64(1);

        let portions = meal
            .consume(&mut pantry, &BasicConsumptionStrategy, &mut rng)
            .unwrap();

        assert_eq!(portions.len(), 1);
        assert_float_absolute_eq!(portions[0].amount, 200.0);
        assert_float_absolute_eq!(pantry.total_by_kind(FoodKind::Perishable), 300.0);
    }

    #[test]
    fn test_shortfall_becomes_emergency_takeout() {
        let mut pantry = pantry_with(FoodKind::Perishable, 150.0);
        let meal = Meal::new(PerKind {
            perishable: 400.0,
            ..Default::default()
        });
        let mut rng = StdRng::seed_from_u64(1);

        let portions = meal
            .consume(&mut pantry, &BasicConsumptionStrategy, &mut rng)
            .unwrap();

        let takeout: Vec<&ConsumedPortion> = portions
            .iter()
            .filter(|p| p.is_emergency_takeout())
            .collect();
        assert_eq!(takeout.len(), 1);
        assert_float_absolute_eq!(takeout[0].amount, 250.0);
        assert_eq!(takeout[0].kind, FoodKind::Perishable);

        // The placeholder never touches the pantry.
        assert_float_absolute_eq!(pantry.total_by_kind(FoodKind::Perishable), 0.0);
    }

    #[test]
    fn test_total_consumption_matches_pattern() {
        let mut pantry = pantry_with(FoodKind::Perishable, 100.0);
        pantry.add_item(FoodItem::new("cans", FoodKind::NonPerishable, 30, 90, 50.0).unwrap());

        let meal = Meal::new(PerKind {
            leftover: 0.0,
            perishable: 300.0,
            non_perishable: 200.0,
        });
        let mut rng = StdRng::seed_from_u64(1);
        let portions = meal
            .consume(&mut pantry, &BasicConsumptionStrategy, &mut rng)
            .unwrap();

        let total: f64 = portions.iter().map(|p| p.amount).sum();
        assert_float_absolute_eq!(total, 500.0, 1e-9);
    }
}

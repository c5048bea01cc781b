//! Strategies that turn a planned meal's target mass into a per-kind
//! consumption pattern, given the pantry's current contents.

use crate::household::HouseholdProfile;
use crate::models::{FoodKind, Meal, PerKind, PlannedMeal};
use crate::pantry::Pantry;

/// Converts a target mass into a concrete breakdown over the three kinds.
///
/// The returned pattern always sums to the planned total; targets may exceed
/// what the pantry holds, in which case the gap surfaces downstream as
/// Emergency Takeout.
pub trait MealPlanningStrategy {
    fn plan_meal(
        &self,
        planned: &PlannedMeal,
        profile: &HouseholdProfile,
        pantry: &Pantry,
    ) -> Meal;
}

/// Eats leftovers first, then perishables, then non-perishables.
///
/// Whatever leftovers and perishables cannot cover is assigned to
/// non-perishables unconditionally, even when the pantry holds less.
#[derive(Debug, Clone, Copy, Default)]
pub struct FreshFirstStrategy;

impl MealPlanningStrategy for FreshFirstStrategy {
    fn plan_meal(
        &self,
        planned: &PlannedMeal,
        _profile: &HouseholdProfile,
        pantry: &Pantry,
    ) -> Meal {
        let mut remaining = planned.total_grams;

        let leftovers = pantry
            .total_by_kind(FoodKind::Leftover)
            .min(remaining);
        remaining -= leftovers;

        let perishables = pantry
            .total_by_kind(FoodKind::Perishable)
            .min(remaining);
        remaining -= perishables;

        Meal::new(PerKind {
            leftover: leftovers,
            perishable: perishables,
            non_perishable: remaining,
        })
    }
}

/// Eats leftovers first, then splits the remainder between perishables and
/// non-perishables at a fixed ratio.
///
/// When perishable availability falls short of its share, the shortfall is
/// shifted onto the non-perishable target.
#[derive(Debug, Clone, Copy)]
pub struct ProportionalStrategy {
    pub perishable_share: f64,
}

impl ProportionalStrategy {
    pub fn new(perishable_share: f64) -> Self {
        Self { perishable_share }
    }
}

impl Default for ProportionalStrategy {
    fn default() -> Self {
        Self::new(0.7)
    }
}

impl MealPlanningStrategy for ProportionalStrategy {
    fn plan_meal(
        &self,
        planned: &PlannedMeal,
        _profile: &HouseholdProfile,
        pantry: &Pantry,
    ) -> Meal {
        let mut remaining = planned.total_grams;

        let leftovers_available = pantry.total_by_kind(FoodKind::Leftover);
        let perishables_available = pantry.total_by_kind(FoodKind::Perishable);

        let leftovers = leftovers_available.min(remaining);
        remaining -= leftovers;

        let mut perishables = remaining * self.perishable_share;
        let mut non_perishables = remaining - perishables;

        if perishables_available <= perishables {
            non_perishables += perishables - perishables_available;
            perishables = perishables_available;
        }

        Meal::new(PerKind {
            leftover: leftovers,
            perishable: perishables,
            non_perishable: non_perishables,
        })
    }
}

//! The household: one pantry, one set of policies, and the daily cycle
//! that ties them together.

use std::collections::VecDeque;
use std::sync::Arc;

use rand::rngs::StdRng;

use crate::consumption::{BasicConsumptionStrategy, ConsumptionStrategy};
use crate::error::{Result, SimError};
use crate::mealgen::{MealGenerator, StandardMealGenerator};
use crate::models::{DailyRecord, FoodItem, FoodKind, PlannedMeal};
use crate::orders::{FixedConsumptionPolicy, OrderPolicy};
use crate::pantry::{LaxPolicy, Pantry, PantryPolicy};
use crate::planning::{FreshFirstStrategy, MealPlanningStrategy};
use crate::store::GroceryStore;
use crate::waste_calc::{
    FixedPercentageLeftoverGenerator, FixedPercentageWasteCalculator, LeftoversGenerator,
    PlateWasteCalculator,
};

/// Shelf life, in days, of leftovers returned to the pantry.
const LEFTOVER_SHELF_LIFE: i32 = 2;

/// Demographic facts about a household, passed to strategies that may want
/// to condition on them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseholdProfile {
    pub adults: u32,
    pub children: u32,
    pub income_percentile: f64,
}

/// The full policy set a household is wired with at construction.
///
/// One boxed handle per strategy family; swapping any one of them changes
/// behavior without touching the others.
pub struct HouseholdPolicies {
    pub meal_generator: Box<dyn MealGenerator>,
    pub meal_planning: Box<dyn MealPlanningStrategy>,
    pub consumption: Box<dyn ConsumptionStrategy>,
    pub pantry_policy: Box<dyn PantryPolicy>,
    pub order_policy: Box<dyn OrderPolicy>,
    pub grocery_store: Arc<GroceryStore>,
    pub leftover_generator: Box<dyn LeftoversGenerator>,
    pub plate_waste: Box<dyn PlateWasteCalculator>,
}

impl HouseholdPolicies {
    /// A plain baseline: half of meals at home, fresh-first planning, FIFO
    /// consumption, keep-until-unsafe pantry, weekly fixed-rate orders, no
    /// plate waste, no leftovers.
    pub fn standard(grocery_store: Arc<GroceryStore>) -> Self {
        Self {
            meal_generator: Box::new(StandardMealGenerator::new(0.5)),
            meal_planning: Box::new(FreshFirstStrategy),
            consumption: Box::new(BasicConsumptionStrategy),
            pantry_policy: Box::new(LaxPolicy),
            order_policy: Box::new(FixedConsumptionPolicy::new(20000.0, 20000.0, 7, 0.0, 0.0)),
            grocery_store,
            leftover_generator: Box::new(FixedPercentageLeftoverGenerator::new(0.0)),
            plate_waste: Box::new(FixedPercentageWasteCalculator::new(0.0)),
        }
    }
}

/// One simulated household.
pub struct Household {
    profile: HouseholdProfile,
    pub pantry: Pantry,
    pub history: Vec<DailyRecord>,
    weekly_meals: VecDeque<Vec<PlannedMeal>>,
    policies: HouseholdPolicies,
    rng: StdRng,
}

impl Household {
    pub fn new(
        adults: u32,
        children: u32,
        income_percentile: f64,
        policies: HouseholdPolicies,
        rng: StdRng,
    ) -> Self {
        Self {
            profile: HouseholdProfile {
                adults,
                children,
                income_percentile,
            },
            pantry: Pantry::new(),
            history: Vec::new(),
            weekly_meals: VecDeque::new(),
            policies,
            rng,
        }
    }

    pub fn profile(&self) -> HouseholdProfile {
        self.profile
    }

    /// Total stored mass across the pantry, in kg.
    pub fn total_food(&self) -> f64 {
        self.pantry.total()
    }

    pub fn food_by_kind(&self, kind: FoodKind) -> f64 {
        self.pantry.total_by_kind(kind)
    }

    /// Planned meal days not yet consumed this week.
    pub fn planned_days_remaining(&self) -> usize {
        self.weekly_meals.len()
    }

    /// Regenerate the week's meal plan. Must be called once for every seven
    /// `daily_step` calls.
    pub fn start_of_week(&mut self) {
        self.weekly_meals = self
            .policies
            .meal_generator
            .generate_weekly_meals(&self.profile, &mut self.rng)
            .into();
    }

    /// Run one simulated day and return its outcome record.
    ///
    /// Plans and consumes today's meals, applies plate waste, returns
    /// leftovers to the pantry, ages and prunes storage, then runs the
    /// order countdown and restocks when due. Fails when the current week's
    /// plan is already used up.
    pub fn daily_step(&mut self) -> Result<DailyRecord> {
        let meals_today = self
            .weekly_meals
            .pop_front()
            .ok_or(SimError::WeekExhausted)?;

        let mut record = DailyRecord::default();
        let profile = self.profile;

        for planned in &meals_today {
            let meal = self
                .policies
                .meal_planning
                .plan_meal(planned, &profile, &self.pantry);
            let consumption = meal.consume(
                &mut self.pantry,
                self.policies.consumption.as_ref(),
                &mut self.rng,
            )?;
            record.meals_eaten += 1;

            let plate_waste = self.policies.plate_waste.compute_plate_waste(&consumption);
            record.plate_waste += plate_waste.iter().map(|w| w.amount).sum::<f64>();

            let leftovers = self
                .policies
                .leftover_generator
                .compute_leftovers(&consumption, &plate_waste);
            if leftovers > 0.0 {
                self.pantry.add_item(FoodItem::new(
                    "leftover",
                    FoodKind::Leftover,
                    LEFTOVER_SHELF_LIFE,
                    LEFTOVER_SHELF_LIFE,
                    leftovers,
                )?);
                record.leftovers_generated += leftovers;
            }

            for portion in &consumption {
                *record.daily_consumption.get_mut(portion.kind) += portion.amount;
                if portion.is_emergency_takeout() {
                    record.emergency_takeouts += portion.amount;
                }
            }
        }

        self.pantry.step(self.policies.pantry_policy.as_ref());

        if self.policies.order_policy.schedule_mut().tick() {
            let quantities = self
                .policies
                .order_policy
                .determine_order(&self.pantry, &self.history);

            let perishables = self.policies.grocery_store.get_order(
                FoodKind::Perishable,
                quantities.perishable,
                &mut self.rng,
            )?;
            for item in perishables {
                record.perishable_bought += item.quantity();
                self.pantry.add_item(item);
            }

            let non_perishables = self.policies.grocery_store.get_order(
                FoodKind::NonPerishable,
                quantities.non_perishable,
                &mut self.rng,
            )?;
            for item in non_perishables {
                record.non_perishable_bought += item.quantity();
                self.pantry.add_item(item);
            }

            self.policies.order_policy.schedule_mut().reset();
        }

        let day = self.pantry.current_day();
        record.expired_discards = self.pantry.waste_log().expired_on(day).total();
        record.strategy_discards = self.pantry.waste_log().strategy_on(day).total();
        record.total_food_stored = self.pantry.total();
        record.perishables_stored = self.pantry.total_by_kind(FoodKind::Perishable);
        record.non_perishables_stored = self.pantry.total_by_kind(FoodKind::NonPerishable);
        record.leftovers_stored = self.pantry.total_by_kind(FoodKind::Leftover);

        self.history.push(record.clone());
        Ok(record)
    }
}

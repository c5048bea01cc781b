//! Weekly meal plan generators.

use rand::{Rng, RngCore};
use rand_distr::{Distribution, Normal};

use crate::error::{Result, SimError};
use crate::household::HouseholdProfile;
use crate::models::PlannedMeal;

/// Days in a generated week.
pub const DAYS_PER_WEEK: usize = 7;

/// The three daily meal occasions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 3] = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner];

    /// Grams one adult eats at this occasion.
    pub fn adult_grams(self) -> f64 {
        match self {
            MealSlot::Breakfast => 400.0,
            MealSlot::Lunch | MealSlot::Dinner => 600.0,
        }
    }

    /// Grams one child eats at this occasion.
    pub fn child_grams(self) -> f64 {
        match self {
            MealSlot::Breakfast => 250.0,
            MealSlot::Lunch | MealSlot::Dinner => 400.0,
        }
    }
}

/// Produces a week of planned meals (7 days, up to 3 occasions each).
pub trait MealGenerator {
    fn generate_weekly_meals(
        &self,
        profile: &HouseholdProfile,
        rng: &mut dyn RngCore,
    ) -> Vec<Vec<PlannedMeal>>;
}

/// Includes each of the week's 21 meal occasions independently with
/// probability `meals_at_home_ratio`; an included meal's mass is the fixed
/// per-person sum for that occasion, identical across all seven days.
#[derive(Debug, Clone, Copy)]
pub struct StandardMealGenerator {
    pub meals_at_home_ratio: f64,
}

impl StandardMealGenerator {
    pub fn new(meals_at_home_ratio: f64) -> Self {
        Self {
            meals_at_home_ratio,
        }
    }

    fn occasion_grams(slot: MealSlot, profile: &HouseholdProfile) -> f64 {
        slot.adult_grams() * profile.adults as f64 + slot.child_grams() * profile.children as f64
    }
}

impl MealGenerator for StandardMealGenerator {
    fn generate_weekly_meals(
        &self,
        profile: &HouseholdProfile,
        rng: &mut dyn RngCore,
    ) -> Vec<Vec<PlannedMeal>> {
        let mut weekly_meals = Vec::with_capacity(DAYS_PER_WEEK);

        for _ in 0..DAYS_PER_WEEK {
            let mut day_meals = Vec::new();
            for slot in MealSlot::ALL {
                if rng.r#gen::<f64>() <= self.meals_at_home_ratio {
                    day_meals.push(PlannedMeal::new(Self::occasion_grams(slot, profile)));
                }
            }
            weekly_meals.push(day_meals);
        }

        weekly_meals
    }
}

/// Wraps a base generator with demand noise and surprise guests.
///
/// Per meal: with `guest_probability`, between 1 and `max_guests` guests
/// each add an adult lunch's worth of mass (regardless of occasion); the
/// result is then scaled by `1 + gauss(0, noise_std)`, floored at zero and
/// truncated to a whole number of grams.
pub struct VariableMealGenerator {
    base: Box<dyn MealGenerator>,
    noise: Normal<f64>,
    guest_probability: f64,
    max_guests: u32,
}

impl VariableMealGenerator {
    pub fn new(
        base: Box<dyn MealGenerator>,
        noise_std: f64,
        guest_probability: f64,
        max_guests: u32,
    ) -> Result<Self> {
        if max_guests < 1 {
            return Err(SimError::InvalidScenario(
                "max_guests must be at least 1".to_string(),
            ));
        }
        let noise = Normal::new(0.0, noise_std).map_err(|e| {
            SimError::InvalidScenario(format!("bad noise_std {}: {}", noise_std, e))
        })?;
        Ok(Self {
            base,
            noise,
            guest_probability,
            max_guests,
        })
    }
}

impl MealGenerator for VariableMealGenerator {
    fn generate_weekly_meals(
        &self,
        profile: &HouseholdProfile,
        rng: &mut dyn RngCore,
    ) -> Vec<Vec<PlannedMeal>> {
        let mut weekly_meals = self.base.generate_weekly_meals(profile, rng);

        for day_meals in &mut weekly_meals {
            for meal in day_meals {
                if rng.r#gen::<f64>() < self.guest_probability {
                    let num_guests = rng.gen_range(1..=self.max_guests);
                    // Guests always eat an adult lunch's worth.
                    meal.total_grams += num_guests as f64 * MealSlot::Lunch.adult_grams();
                }

                let noise = 1.0 + self.noise.sample(rng);
                meal.total_grams = (meal.total_grams * noise).max(0.0).trunc();
            }
        }

        weekly_meals
    }
}

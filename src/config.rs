//! Scenario configuration: every knob of a simulation run, loadable from a
//! JSON file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consumption::{
    BasicConsumptionStrategy, ConsumptionStrategy, MixedConsumptionStrategy,
    RandomConsumptionStrategy,
};
use crate::error::{Result, SimError};
use crate::mealgen::{MealGenerator, StandardMealGenerator, VariableMealGenerator};
use crate::orders::{AdaptiveOrderPolicy, OrderPolicy};
use crate::pantry::{LaxPolicy, PantryPolicy, StrictPolicy};
use crate::planning::{FreshFirstStrategy, MealPlanningStrategy, ProportionalStrategy};
use crate::store::{GroceryStore, HorizonParams, StoreCatalog};
use crate::waste_calc::{
    FixedPercentageLeftoverGenerator, FixedPercentageWasteCalculator, LeftoversGenerator,
    PerishableLeftoversGenerator, PlateWasteCalculator,
};

/// Grams one adult is assumed to eat per day, used to size order baselines.
pub const ADULT_DAILY_GRAMS: f64 = 1800.0;

/// Grams one child is assumed to eat per day.
pub const CHILD_DAILY_GRAMS: f64 = 1050.0;

/// Which meal-planning strategy a scenario uses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum PlanningChoice {
    FreshFirst,
    Proportional { perishable_share: f64 },
}

impl PlanningChoice {
    pub fn build(&self) -> Box<dyn MealPlanningStrategy> {
        match *self {
            PlanningChoice::FreshFirst => Box::new(FreshFirstStrategy),
            PlanningChoice::Proportional { perishable_share } => {
                Box::new(ProportionalStrategy::new(perishable_share))
            }
        }
    }
}

/// Which consumption strategy a scenario uses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum ConsumptionChoice {
    Basic,
    Random,
    Mixed { fifo_probability: f64 },
}

impl ConsumptionChoice {
    pub fn build(&self) -> Box<dyn ConsumptionStrategy> {
        match *self {
            ConsumptionChoice::Basic => Box::new(BasicConsumptionStrategy),
            ConsumptionChoice::Random => Box::new(RandomConsumptionStrategy),
            ConsumptionChoice::Mixed { fifo_probability } => {
                Box::new(MixedConsumptionStrategy::new(fifo_probability))
            }
        }
    }
}

/// Which pantry discard policy a scenario uses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PantryChoice {
    Strict,
    Lax,
}

impl PantryChoice {
    pub fn build(&self) -> Box<dyn PantryPolicy> {
        match self {
            PantryChoice::Strict => Box::new(StrictPolicy),
            PantryChoice::Lax => Box::new(LaxPolicy),
        }
    }
}

/// Which leftover generator a scenario uses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(tag = "generator", rename_all = "snake_case")]
pub enum LeftoversChoice {
    FixedPercentage { percentage: f64 },
    PerishableOnly { percentage: f64 },
}

impl LeftoversChoice {
    pub fn build(&self) -> Box<dyn LeftoversGenerator> {
        match *self {
            LeftoversChoice::FixedPercentage { percentage } => {
                Box::new(FixedPercentageLeftoverGenerator::new(percentage))
            }
            LeftoversChoice::PerishableOnly { percentage } => {
                Box::new(PerishableLeftoversGenerator::new(percentage))
            }
        }
    }
}

/// Optional demand variability wrapped around the base meal generator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GuestConfig {
    pub noise_std: f64,
    pub guest_probability: f64,
    pub max_guests: u32,
}

/// The full parameter set of one simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Number of households in the population.
    pub households: usize,
    /// Weeks to simulate.
    pub weeks: u32,
    /// Days between grocery trips.
    pub grocery_frequency: u32,
    /// Probability of any given meal being eaten at home.
    pub meals_at_home_ratio: f64,
    /// Demand noise and guests; `None` keeps the standard generator.
    pub guests: Option<GuestConfig>,
    pub planning: PlanningChoice,
    pub consumption: ConsumptionChoice,
    pub pantry: PantryChoice,
    /// Service-level multiplier for the adaptive order policy.
    pub critical_value: f64,
    /// Extra days of shelf life on perishables (store-side improvements).
    pub store_improvement_days: f64,
    pub leftovers: LeftoversChoice,
    pub plate_waste_percentage: f64,
    /// Inclusive range of adults per household.
    pub adult_range: (u32, u32),
    /// Inclusive range of children per household.
    pub child_range: (u32, u32),
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            households: 500,
            weeks: 30,
            grocery_frequency: 7,
            meals_at_home_ratio: 1.0,
            guests: None,
            planning: PlanningChoice::FreshFirst,
            consumption: ConsumptionChoice::Basic,
            pantry: PantryChoice::Strict,
            critical_value: 1.96,
            store_improvement_days: 0.0,
            leftovers: LeftoversChoice::FixedPercentage { percentage: 0.0 },
            plate_waste_percentage: 0.0,
            adult_range: (1, 5),
            child_range: (0, 5),
        }
    }
}

impl ScenarioConfig {
    pub fn validate(&self) -> Result<()> {
        if self.households == 0 {
            return Err(SimError::InvalidScenario("households must be > 0".into()));
        }
        if self.grocery_frequency == 0 {
            return Err(SimError::InvalidScenario(
                "grocery_frequency must be > 0".into(),
            ));
        }
        if self.adult_range.0 > self.adult_range.1 || self.child_range.0 > self.child_range.1 {
            return Err(SimError::InvalidScenario(
                "demographic ranges must be min <= max".into(),
            ));
        }
        Ok(())
    }

    /// The grocery store this scenario shops at.
    pub fn build_store(&self) -> Result<GroceryStore> {
        GroceryStore::new(
            StoreCatalog {
                best_before: HorizonParams::new(3.0 + self.store_improvement_days, 1.0),
                spoilage_date: HorizonParams::new(5.0 + self.store_improvement_days, 2.0),
            },
            StoreCatalog {
                best_before: HorizonParams::new(50.0, 10.0),
                spoilage_date: HorizonParams::new(100.0, 20.0),
            },
        )
    }

    pub fn build_meal_generator(&self) -> Result<Box<dyn MealGenerator>> {
        let base = Box::new(StandardMealGenerator::new(self.meals_at_home_ratio));
        match self.guests {
            None => Ok(base),
            Some(g) => Ok(Box::new(VariableMealGenerator::new(
                base,
                g.noise_std,
                g.guest_probability,
                g.max_guests,
            )?)),
        }
    }

    /// The adaptive order policy for a household of the given size, seeded
    /// with a generous size-based baseline until history accumulates.
    pub fn build_order_policy(&self, adults: u32, children: u32) -> Box<dyn OrderPolicy> {
        let baseline =
            (adults as f64 * ADULT_DAILY_GRAMS + children as f64 * CHILD_DAILY_GRAMS) * 2.0;
        Box::new(AdaptiveOrderPolicy::new(
            baseline,
            baseline,
            self.grocery_frequency,
            0.0,
            0.0,
            self.critical_value,
        ))
    }

    pub fn build_plate_waste(&self) -> Box<dyn PlateWasteCalculator> {
        Box::new(FixedPercentageWasteCalculator::new(
            self.plate_waste_percentage,
        ))
    }
}

/// Load a scenario from a JSON file.
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<ScenarioConfig> {
    let content = fs::read_to_string(path)?;
    let config: ScenarioConfig = serde_json::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Save a scenario to a JSON file.
pub fn save_scenario<P: AsRef<Path>>(path: P, config: &ScenarioConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_scenario_is_valid() {
        let config = ScenarioConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.build_store().is_ok());
        assert!(config.build_meal_generator().is_ok());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let mut config = ScenarioConfig::default();
        config.households = 10;
        config.planning = PlanningChoice::Proportional {
            perishable_share: 0.5,
        };
        config.consumption = ConsumptionChoice::Mixed {
            fifo_probability: 0.25,
        };

        let file = NamedTempFile::new().unwrap();
        save_scenario(file.path(), &config).unwrap();
        let reloaded = load_scenario(file.path()).unwrap();

        assert_eq!(reloaded.households, 10);
        assert!(matches!(
            reloaded.planning,
            PlanningChoice::Proportional { perishable_share } if perishable_share == 0.5
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), r#"{"households": 3, "weeks": 2}"#).unwrap();

        let config = load_scenario(file.path()).unwrap();
        assert_eq!(config.households, 3);
        assert_eq!(config.weeks, 2);
        assert_eq!(config.grocery_frequency, 7);
    }

    #[test]
    fn test_invalid_ranges_rejected() {
        let mut config = ScenarioConfig::default();
        config.adult_range = (5, 1);
        assert!(config.validate().is_err());
    }
}

//! Batch runner: builds a household population from a scenario, steps it
//! week by week, and exports the per-day records as CSV.

use std::path::Path;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::config::{self, ScenarioConfig};
use crate::error::Result;
use crate::household::{Household, HouseholdPolicies};
use crate::mealgen::DAYS_PER_WEEK;
use crate::models::{DailyRecord, FoodItem, FoodKind};

/// One CSV row: a single household-day.
#[derive(Debug, Serialize)]
pub struct SimulationRow {
    pub household_number: usize,
    pub simulated_day: u32,
    pub meals_eaten: u32,
    pub daily_consumption_leftover: f64,
    pub daily_consumption_perishable: f64,
    pub daily_consumption_non_perishable: f64,
    pub emergency_takeouts: f64,
    pub perishable_bought: f64,
    pub non_perishable_bought: f64,
    pub expired_discards: f64,
    pub strategy_discards: f64,
    pub total_food_stored: f64,
    pub perishables_stored: f64,
    pub non_perishables_stored: f64,
    pub leftovers_stored: f64,
    pub plate_waste: f64,
    pub leftovers_generated: f64,
}

impl SimulationRow {
    fn from_record(household_number: usize, simulated_day: u32, record: &DailyRecord) -> Self {
        Self {
            household_number,
            simulated_day,
            meals_eaten: record.meals_eaten,
            daily_consumption_leftover: record.daily_consumption.leftover,
            daily_consumption_perishable: record.daily_consumption.perishable,
            daily_consumption_non_perishable: record.daily_consumption.non_perishable,
            emergency_takeouts: record.emergency_takeouts,
            perishable_bought: record.perishable_bought,
            non_perishable_bought: record.non_perishable_bought,
            expired_discards: record.expired_discards,
            strategy_discards: record.strategy_discards,
            total_food_stored: record.total_food_stored,
            perishables_stored: record.perishables_stored,
            non_perishables_stored: record.non_perishables_stored,
            leftovers_stored: record.leftovers_stored,
            plate_waste: record.plate_waste,
            leftovers_generated: record.leftovers_generated,
        }
    }
}

/// A scenario plus the population built from it.
pub struct SimulationRun {
    config: ScenarioConfig,
    households: Vec<Household>,
}

impl SimulationRun {
    /// Build the population. Each household gets its own `StdRng` derived
    /// from the master seed, so runs are reproducible and households are
    /// statistically independent.
    pub fn new(config: ScenarioConfig, master_seed: u64) -> Result<Self> {
        config.validate()?;
        let store = Arc::new(config.build_store()?);
        let mut seeder = StdRng::seed_from_u64(master_seed);

        let mut households = Vec::with_capacity(config.households);
        for _ in 0..config.households {
            let adults = seeder.gen_range(config.adult_range.0..=config.adult_range.1);
            let children = seeder.gen_range(config.child_range.0..=config.child_range.1);
            let income_percentile = seeder.r#gen::<f64>();

            let policies = HouseholdPolicies {
                meal_generator: config.build_meal_generator()?,
                meal_planning: config.planning.build(),
                consumption: config.consumption.build(),
                pantry_policy: config.pantry.build(),
                order_policy: config.build_order_policy(adults, children),
                grocery_store: Arc::clone(&store),
                leftover_generator: config.leftovers.build(),
                plate_waste: config.build_plate_waste(),
            };

            let rng = StdRng::seed_from_u64(seeder.r#gen::<u64>());
            let mut household =
                Household::new(adults, children, income_percentile, policies, rng);
            stock_initial_pantry(&mut household, &config, adults, children)?;
            households.push(household);
        }

        Ok(Self { config, households })
    }

    pub fn households(&self) -> &[Household] {
        &self.households
    }

    /// Run the whole scenario and collect every household-day row.
    pub fn run(&mut self) -> Result<Vec<SimulationRow>> {
        let days = self.config.weeks * DAYS_PER_WEEK as u32;
        let mut rows = Vec::with_capacity(self.households.len() * days as usize);

        for week in 0..self.config.weeks {
            for household in &mut self.households {
                household.start_of_week();
            }
            for day_of_week in 0..DAYS_PER_WEEK as u32 {
                let simulated_day = week * DAYS_PER_WEEK as u32 + day_of_week + 1;
                for (number, household) in self.households.iter_mut().enumerate() {
                    let record = household.daily_step()?;
                    rows.push(SimulationRow::from_record(number, simulated_day, &record));
                }
            }
            println!("Simulated week {} of {}", week + 1, self.config.weeks);
        }

        Ok(rows)
    }
}

/// Seed the pantry so households do not start the run on takeout alone.
///
/// One item per orderable kind, holding twice the order-policy baseline
/// (four days of consumption) and timed to expire just before the first
/// grocery order arrives. A daily grocery frequency gives a zero-day
/// horizon: the stock expires after its first day.
fn stock_initial_pantry(
    household: &mut Household,
    config: &ScenarioConfig,
    adults: u32,
    children: u32,
) -> Result<()> {
    let daily =
        adults as f64 * config::ADULT_DAILY_GRAMS + children as f64 * config::CHILD_DAILY_GRAMS;
    let baseline = daily * 2.0;
    let horizon = config.grocery_frequency as i32 - 1;

    household.pantry.add_item(FoodItem::new(
        "perishable - initial stock",
        FoodKind::Perishable,
        horizon,
        horizon,
        baseline * 2.0,
    )?);
    household.pantry.add_item(FoodItem::new(
        "non-perishable - initial stock",
        FoodKind::NonPerishable,
        horizon,
        horizon,
        baseline * 2.0,
    )?);
    Ok(())
}

/// Write collected rows to a CSV file with a header row.
pub fn write_csv<P: AsRef<Path>>(path: P, rows: &[SimulationRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

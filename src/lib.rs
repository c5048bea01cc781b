//! Household food-waste simulation.
//!
//! Models a population of households that plan meals, eat from a pantry,
//! generate waste and leftovers, and restock from a grocery store. Every
//! behavioral axis (meal generation, planning, consumption order, discard
//! policy, ordering) is a swappable strategy, and all randomness flows
//! through per-household seeded RNGs so runs are reproducible.

pub mod cli;
pub mod config;
pub mod consumption;
pub mod error;
pub mod household;
pub mod mealgen;
pub mod models;
pub mod orders;
pub mod pantry;
pub mod planning;
pub mod runner;
pub mod store;
pub mod waste_calc;

pub use config::ScenarioConfig;
pub use error::{Result, SimError};
pub use household::{Household, HouseholdPolicies, HouseholdProfile};
pub use models::{DailyRecord, FoodItem, FoodKind, Meal, PerKind, PlannedMeal};
pub use pantry::Pantry;
pub use runner::SimulationRun;
pub use store::GroceryStore;

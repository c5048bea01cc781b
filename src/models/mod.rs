pub mod food;
pub mod meal;
pub mod record;

pub use food::{FoodItem, FoodKind, PerKind};
pub use meal::{ConsumedPortion, Meal, PlannedMeal, EMERGENCY_TAKEOUT};
pub use record::DailyRecord;

use crate::models::PerKind;

/// One household-day outcome, appended to `Household::history` after every
/// `daily_step`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyRecord {
    /// Meals actually eaten at home today.
    pub meals_eaten: u32,
    /// Mass consumed today, by kind (Emergency Takeout counts as perishable).
    pub daily_consumption: PerKind<f64>,
    /// Mass covered by Emergency Takeout because the pantry fell short.
    pub emergency_takeouts: f64,
    /// Perishable mass delivered by today's grocery order, if any.
    pub perishable_bought: f64,
    /// Non-perishable mass delivered by today's grocery order, if any.
    pub non_perishable_bought: f64,
    /// Mass discarded today because it spoiled.
    pub expired_discards: f64,
    /// Mass discarded today by the pantry policy.
    pub strategy_discards: f64,
    /// Pantry totals at end of day.
    pub total_food_stored: f64,
    pub perishables_stored: f64,
    pub non_perishables_stored: f64,
    pub leftovers_stored: f64,
    /// Mass scraped off plates today.
    pub plate_waste: f64,
    /// Leftover mass returned to the pantry today.
    pub leftovers_generated: f64,
}

use thiserror::Error;

use crate::models::FoodKind;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("best before ({best_before}) cannot be later than spoilage date ({spoilage_date})")]
    InvalidHorizons {
        best_before: i32,
        spoilage_date: i32,
    },

    #[error("cannot consume {requested} kg of {name}: only {available} kg available")]
    Overconsumption {
        name: String,
        requested: f64,
        available: f64,
    },

    #[error("no planned meals left this week: call start_of_week() before the next daily_step()")]
    WeekExhausted,

    #[error("the store has no {0} catalog")]
    NoCatalog(FoodKind),

    #[error("invalid scenario parameter: {0}")]
    InvalidScenario(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;

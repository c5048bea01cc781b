//! Ordering policies: when a household reorders and how much.

use crate::models::{DailyRecord, FoodKind};
use crate::pantry::Pantry;

/// Days of history an adaptive policy looks back over.
pub const HISTORY_WINDOW: usize = 7;

/// Masses to reorder, split by orderable kind.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrderQuantities {
    pub perishable: f64,
    pub non_perishable: f64,
}

/// Countdown to the next grocery trip.
///
/// Starts at `frequency`, ticks down once per simulated day, triggers
/// exactly at zero, then resets to `frequency`.
#[derive(Debug, Clone, Copy)]
pub struct OrderSchedule {
    frequency: u32,
    days_until_next_order: u32,
}

impl OrderSchedule {
    /// A zero frequency would leave the countdown pinned at zero and order
    /// every day; it is clamped to at least one.
    pub fn new(frequency: u32) -> Self {
        let frequency = frequency.max(1);
        Self {
            frequency,
            days_until_next_order: frequency,
        }
    }

    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    pub fn days_until_next_order(&self) -> u32 {
        self.days_until_next_order
    }

    /// Advance one day; true when an order is due today.
    pub fn tick(&mut self) -> bool {
        self.days_until_next_order = self.days_until_next_order.saturating_sub(1);
        self.days_until_next_order == 0
    }

    pub fn reset(&mut self) {
        self.days_until_next_order = self.frequency;
    }
}

/// Computes how much a household should reorder.
///
/// Each variant owns its full rate and safety-stock state; adaptive variants
/// recompute that state from the household's history on every call instead
/// of mutating some wrapped base policy.
pub trait OrderPolicy {
    fn schedule(&self) -> &OrderSchedule;

    fn schedule_mut(&mut self) -> &mut OrderSchedule;

    fn determine_order(&mut self, pantry: &Pantry, history: &[DailyRecord]) -> OrderQuantities;
}

/// Order up to `rate * frequency + safety_stock`, net of current stock.
#[derive(Debug, Clone)]
pub struct FixedConsumptionPolicy {
    schedule: OrderSchedule,
    pub daily_consumption_perishable: f64,
    pub daily_consumption_non_perishable: f64,
    pub safety_stock_perishable: f64,
    pub safety_stock_non_perishable: f64,
}

impl FixedConsumptionPolicy {
    pub fn new(
        daily_consumption_perishable: f64,
        daily_consumption_non_perishable: f64,
        frequency: u32,
        safety_stock_perishable: f64,
        safety_stock_non_perishable: f64,
    ) -> Self {
        Self {
            schedule: OrderSchedule::new(frequency),
            daily_consumption_perishable,
            daily_consumption_non_perishable,
            safety_stock_perishable,
            safety_stock_non_perishable,
        }
    }
}

/// The order-up-to formula shared by every policy in this module.
fn order_up_to(
    pantry: &Pantry,
    frequency: u32,
    rate_perishable: f64,
    rate_non_perishable: f64,
    safety_perishable: f64,
    safety_non_perishable: f64,
) -> OrderQuantities {
    let perishable = rate_perishable * frequency as f64 + safety_perishable
        - pantry.total_by_kind(FoodKind::Perishable);
    let non_perishable = rate_non_perishable * frequency as f64 + safety_non_perishable
        - pantry.total_by_kind(FoodKind::NonPerishable);

    OrderQuantities {
        perishable: perishable.max(0.0),
        non_perishable: non_perishable.max(0.0),
    }
}

impl OrderPolicy for FixedConsumptionPolicy {
    fn schedule(&self) -> &OrderSchedule {
        &self.schedule
    }

    fn schedule_mut(&mut self) -> &mut OrderSchedule {
        &mut self.schedule
    }

    fn determine_order(&mut self, pantry: &Pantry, _history: &[DailyRecord]) -> OrderQuantities {
        order_up_to(
            pantry,
            self.schedule.frequency(),
            self.daily_consumption_perishable,
            self.daily_consumption_non_perishable,
            self.safety_stock_perishable,
            self.safety_stock_non_perishable,
        )
    }
}

/// Mean daily consumption of one kind over the trailing window.
fn trailing_mean(history: &[DailyRecord], kind: FoodKind) -> f64 {
    let window = &history[history.len() - HISTORY_WINDOW..];
    let sum: f64 = window
        .iter()
        .map(|day| *day.daily_consumption.get(kind))
        .sum();
    sum / window.len() as f64
}

/// Sample standard deviation (Bessel-corrected) of one kind's daily
/// consumption over the trailing window.
fn trailing_std_dev(history: &[DailyRecord], kind: FoodKind) -> f64 {
    let window = &history[history.len() - HISTORY_WINDOW..];
    let n = window.len();
    if n <= 1 {
        return 0.0;
    }
    let mean = trailing_mean(history, kind);
    let variance: f64 = window
        .iter()
        .map(|day| {
            let x = *day.daily_consumption.get(kind);
            (x - mean) * (x - mean)
        })
        .sum::<f64>()
        / (n - 1) as f64;
    variance.sqrt()
}

/// Like [`FixedConsumptionPolicy`], but once a week of history exists the
/// rates become the trailing 7-day mean consumption.
#[derive(Debug, Clone)]
pub struct HistoricalConsumptionPolicy {
    schedule: OrderSchedule,
    pub baseline_perishable: f64,
    pub baseline_non_perishable: f64,
    pub safety_stock_perishable: f64,
    pub safety_stock_non_perishable: f64,
}

impl HistoricalConsumptionPolicy {
    pub fn new(
        baseline_perishable: f64,
        baseline_non_perishable: f64,
        frequency: u32,
        safety_stock_perishable: f64,
        safety_stock_non_perishable: f64,
    ) -> Self {
        Self {
            schedule: OrderSchedule::new(frequency),
            baseline_perishable,
            baseline_non_perishable,
            safety_stock_perishable,
            safety_stock_non_perishable,
        }
    }
}

impl OrderPolicy for HistoricalConsumptionPolicy {
    fn schedule(&self) -> &OrderSchedule {
        &self.schedule
    }

    fn schedule_mut(&mut self) -> &mut OrderSchedule {
        &mut self.schedule
    }

    fn determine_order(&mut self, pantry: &Pantry, history: &[DailyRecord]) -> OrderQuantities {
        let (rate_perishable, rate_non_perishable) = if history.len() >= HISTORY_WINDOW {
            (
                trailing_mean(history, FoodKind::Perishable),
                trailing_mean(history, FoodKind::NonPerishable),
            )
        } else {
            (self.baseline_perishable, self.baseline_non_perishable)
        };

        order_up_to(
            pantry,
            self.schedule.frequency(),
            rate_perishable,
            rate_non_perishable,
            self.safety_stock_perishable,
            self.safety_stock_non_perishable,
        )
    }
}

/// Service-level-driven policy: rates become the trailing 7-day mean and
/// safety stock becomes `delta` standard deviations of observed demand.
#[derive(Debug, Clone)]
pub struct AdaptiveOrderPolicy {
    schedule: OrderSchedule,
    pub baseline_perishable: f64,
    pub baseline_non_perishable: f64,
    pub baseline_safety_perishable: f64,
    pub baseline_safety_non_perishable: f64,
    /// Service-level multiplier on demand standard deviation (e.g. 1.96).
    pub delta: f64,
}

impl AdaptiveOrderPolicy {
    pub fn new(
        baseline_perishable: f64,
        baseline_non_perishable: f64,
        frequency: u32,
        baseline_safety_perishable: f64,
        baseline_safety_non_perishable: f64,
        delta: f64,
    ) -> Self {
        Self {
            schedule: OrderSchedule::new(frequency),
            baseline_perishable,
            baseline_non_perishable,
            baseline_safety_perishable,
            baseline_safety_non_perishable,
            delta,
        }
    }
}

impl OrderPolicy for AdaptiveOrderPolicy {
    fn schedule(&self) -> &OrderSchedule {
        &self.schedule
    }

    fn schedule_mut(&mut self) -> &mut OrderSchedule {
        &mut self.schedule
    }

    fn determine_order(&mut self, pantry: &Pantry, history: &[DailyRecord]) -> OrderQuantities {
        if history.len() < HISTORY_WINDOW {
            return order_up_to(
                pantry,
                self.schedule.frequency(),
                self.baseline_perishable,
                self.baseline_non_perishable,
                self.baseline_safety_perishable,
                self.baseline_safety_non_perishable,
            );
        }

        let rate_perishable = trailing_mean(history, FoodKind::Perishable);
        let rate_non_perishable = trailing_mean(history, FoodKind::NonPerishable);
        let safety_perishable = self.delta * trailing_std_dev(history, FoodKind::Perishable);
        let safety_non_perishable = self.delta * trailing_std_dev(history, FoodKind::NonPerishable);

        order_up_to(
            pantry,
            self.schedule.frequency(),
            rate_perishable,
            rate_non_perishable,
            safety_perishable,
            safety_non_perishable,
        )
    }
}

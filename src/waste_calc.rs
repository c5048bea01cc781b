//! Post-consumption transformations: plate waste and returned leftovers.

use crate::models::{ConsumedPortion, FoodKind};

/// Mass scraped off the plate from one consumed portion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WastedPortion {
    pub kind: FoodKind,
    pub amount: f64,
}

/// Computes how much of each consumed portion ends up as plate waste.
pub trait PlateWasteCalculator {
    fn compute_plate_waste(&self, consumed: &[ConsumedPortion]) -> Vec<WastedPortion>;
}

/// A fixed fraction of every portion is wasted.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPercentageWasteCalculator {
    pub waste_percentage: f64,
}

impl FixedPercentageWasteCalculator {
    pub fn new(waste_percentage: f64) -> Self {
        Self { waste_percentage }
    }
}

impl PlateWasteCalculator for FixedPercentageWasteCalculator {
    fn compute_plate_waste(&self, consumed: &[ConsumedPortion]) -> Vec<WastedPortion> {
        consumed
            .iter()
            .map(|portion| WastedPortion {
                kind: portion.kind,
                amount: portion.amount * self.waste_percentage,
            })
            .collect()
    }
}

/// Computes the leftover mass a meal returns to the pantry.
pub trait LeftoversGenerator {
    fn compute_leftovers(
        &self,
        consumed: &[ConsumedPortion],
        plate_waste: &[WastedPortion],
    ) -> f64;
}

/// Every meal produces a fixed fraction of its mass as leftovers.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPercentageLeftoverGenerator {
    pub leftover_percentage: f64,
}

impl FixedPercentageLeftoverGenerator {
    pub fn new(leftover_percentage: f64) -> Self {
        Self {
            leftover_percentage,
        }
    }
}

impl LeftoversGenerator for FixedPercentageLeftoverGenerator {
    fn compute_leftovers(
        &self,
        consumed: &[ConsumedPortion],
        _plate_waste: &[WastedPortion],
    ) -> f64 {
        consumed
            .iter()
            .map(|portion| portion.amount * self.leftover_percentage)
            .sum()
    }
}

/// Only perishable portions leave leftovers; dry goods are assumed to be
/// portioned exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct PerishableLeftoversGenerator {
    pub leftover_percentage: f64,
}

impl PerishableLeftoversGenerator {
    pub fn new(leftover_percentage: f64) -> Self {
        Self {
            leftover_percentage,
        }
    }
}

impl LeftoversGenerator for PerishableLeftoversGenerator {
    fn compute_leftovers(
        &self,
        consumed: &[ConsumedPortion],
        _plate_waste: &[WastedPortion],
    ) -> f64 {
        consumed
            .iter()
            .filter(|portion| portion.kind == FoodKind::Perishable)
            .map(|portion| portion.amount * self.leftover_percentage)
            .sum()
    }
}

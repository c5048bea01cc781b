use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

/// Quantities at or below this are treated as "the item is finished" and
/// removed from the pantry without counting as waste.
pub const EMPTY_EPSILON: f64 = 0.001;

/// The three storage categories a pantry tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodKind {
    Leftover,
    Perishable,
    NonPerishable,
}

impl FoodKind {
    /// All kinds, in pantry iteration order.
    pub const ALL: [FoodKind; 3] = [
        FoodKind::Leftover,
        FoodKind::Perishable,
        FoodKind::NonPerishable,
    ];
}

impl fmt::Display for FoodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FoodKind::Leftover => "leftover",
            FoodKind::Perishable => "perishable",
            FoodKind::NonPerishable => "non-perishable",
        };
        write!(f, "{}", name)
    }
}

/// One value per food kind.
///
/// Used for consumption tallies, waste buckets, and pantry availability so
/// every kind is always present (no missing map keys).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PerKind<T> {
    pub leftover: T,
    pub perishable: T,
    pub non_perishable: T,
}

impl<T> PerKind<T> {
    pub fn get(&self, kind: FoodKind) -> &T {
        match kind {
            FoodKind::Leftover => &self.leftover,
            FoodKind::Perishable => &self.perishable,
            FoodKind::NonPerishable => &self.non_perishable,
        }
    }

    pub fn get_mut(&mut self, kind: FoodKind) -> &mut T {
        match kind {
            FoodKind::Leftover => &mut self.leftover,
            FoodKind::Perishable => &mut self.perishable,
            FoodKind::NonPerishable => &mut self.non_perishable,
        }
    }
}

impl PerKind<f64> {
    /// Sum across all three kinds.
    pub fn total(&self) -> f64 {
        self.leftover + self.perishable + self.non_perishable
    }
}

/// A quantity of food with two expiry horizons.
///
/// `best_before` is the quality threshold, `spoilage_date` the safety
/// threshold; both count days remaining and floor at zero.
#[derive(Debug, Clone)]
pub struct FoodItem {
    pub name: String,
    pub kind: FoodKind,
    best_before: i32,
    spoilage_date: i32,
    quantity: f64,
}

impl FoodItem {
    /// Create a food item.
    ///
    /// Fails when `best_before > spoilage_date`: food cannot degrade in
    /// quality after it has already become unsafe.
    pub fn new(
        name: impl Into<String>,
        kind: FoodKind,
        best_before: i32,
        spoilage_date: i32,
        quantity: f64,
    ) -> Result<Self> {
        if best_before > spoilage_date {
            return Err(SimError::InvalidHorizons {
                best_before,
                spoilage_date,
            });
        }
        Ok(Self {
            name: name.into(),
            kind,
            best_before,
            spoilage_date,
            quantity,
        })
    }

    /// Remaining mass in kg.
    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    /// Days until quality degrades (never negative).
    pub fn best_before(&self) -> i32 {
        self.best_before
    }

    /// Days until the item becomes unsafe (never negative).
    pub fn spoilage_date(&self) -> i32 {
        self.spoilage_date
    }

    /// Remove `amount` kg from the item.
    ///
    /// Fails when `amount` exceeds the remaining quantity.
    pub fn consume(&mut self, amount: f64) -> Result<()> {
        if amount > self.quantity {
            return Err(SimError::Overconsumption {
                name: self.name.clone(),
                requested: amount,
                available: self.quantity,
            });
        }
        self.quantity -= amount;
        Ok(())
    }

    /// Age the item by one day. Callers must invoke at most once per
    /// simulated day; horizons never go below zero.
    pub fn day_passes(&mut self) {
        if self.best_before > 0 {
            self.best_before -= 1;
        }
        if self.spoilage_date > 0 {
            self.spoilage_date -= 1;
        }
    }

    pub fn is_past_best_before(&self) -> bool {
        self.best_before <= 0
    }

    pub fn is_expired(&self) -> bool {
        self.spoilage_date <= 0
    }
}

impl fmt::Display for FoodItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {:.3} kg, best before {}d, spoils {}d",
            self.name, self.kind, self.quantity, self.best_before, self.spoilage_date
        )
    }
}

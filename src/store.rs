//! The grocery store: turns order quantities into concrete food items with
//! randomly drawn expiry horizons.

use rand::{Rng, RngCore};
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};
use crate::models::{FoodItem, FoodKind};

/// Attempted draws that produced a zero quantity before the store gives up
/// on filling the rest of an order.
const MAX_ZERO_DRAWS: u32 = 100;

/// Mean and standard deviation of a Gaussian horizon distribution, in days.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizonParams {
    pub mean: f64,
    pub std_dev: f64,
}

impl HorizonParams {
    pub fn new(mean: f64, std_dev: f64) -> Self {
        Self { mean, std_dev }
    }
}

/// Horizon distributions for one orderable kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StoreCatalog {
    pub best_before: HorizonParams,
    pub spoilage_date: HorizonParams,
}

/// Prebuilt samplers for one kind.
#[derive(Debug, Clone, Copy)]
struct KindSamplers {
    best_before: Normal<f64>,
    spoilage_date: Normal<f64>,
}

impl KindSamplers {
    fn build(catalog: &StoreCatalog) -> Result<Self> {
        let normal = |p: &HorizonParams| {
            Normal::new(p.mean, p.std_dev)
                .map_err(|e| SimError::InvalidScenario(format!("bad horizon params: {}", e)))
        };
        Ok(Self {
            best_before: normal(&catalog.best_before)?,
            spoilage_date: normal(&catalog.spoilage_date)?,
        })
    }
}

/// Stateless generator of replenishment orders.
///
/// All parameters are fixed at construction; `get_order` only reads them, so
/// one store can be shared (for example behind an `Arc`) by any number of
/// households.
#[derive(Debug, Clone)]
pub struct GroceryStore {
    perishable: KindSamplers,
    non_perishable: KindSamplers,
}

impl GroceryStore {
    pub fn new(perishable: StoreCatalog, non_perishable: StoreCatalog) -> Result<Self> {
        Ok(Self {
            perishable: KindSamplers::build(&perishable)?,
            non_perishable: KindSamplers::build(&non_perishable)?,
        })
    }

    fn samplers(&self, kind: FoodKind) -> Result<&KindSamplers> {
        match kind {
            FoodKind::Perishable => Ok(&self.perishable),
            FoodKind::NonPerishable => Ok(&self.non_perishable),
            FoodKind::Leftover => Err(SimError::NoCatalog(kind)),
        }
    }

    /// Assemble an order totalling `int(total_quantity)` kg of one kind.
    ///
    /// Item quantities are drawn from `uniform(0.1 * total, 0.5 * total)`,
    /// capped at the remaining need and truncated to whole kilograms. Tiny
    /// requests can produce zero-quantity draws; after 100 of those the
    /// order is returned short rather than erroring. Every item's spoilage
    /// date is clamped to at least one day past its best-before date.
    pub fn get_order(
        &self,
        kind: FoodKind,
        total_quantity: f64,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<FoodItem>> {
        let samplers = self.samplers(kind)?;

        let mut order = Vec::new();
        let mut remaining = total_quantity.trunc();
        let mut zero_draws = 0;

        while remaining > 0.0 && zero_draws < MAX_ZERO_DRAWS {
            let best_before = samplers.best_before.sample(rng) as i32;
            let spoilage_date = (samplers.spoilage_date.sample(rng) as i32).max(best_before + 1);

            let drawn = rng.gen_range(0.1 * total_quantity..0.5 * total_quantity);
            let quantity = drawn.min(remaining).trunc();

            if quantity == 0.0 {
                zero_draws += 1;
                continue;
            }

            order.push(FoodItem::new(
                format!("{} - item", kind),
                kind,
                best_before,
                spoilage_date,
                quantity,
            )?);
            remaining -= quantity;
        }

        Ok(order)
    }
}

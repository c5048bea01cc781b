use crate::models::FoodItem;

/// Decides which non-expired items should be discarded anyway.
///
/// The pantry checks expiry before consulting the policy, so implementations
/// only ever see items that are still safe to keep.
pub trait PantryPolicy {
    fn should_discard(&self, item: &FoodItem) -> bool;
}

/// Discards anything past its best-before date, even though it is still safe.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictPolicy;

impl PantryPolicy for StrictPolicy {
    fn should_discard(&self, item: &FoodItem) -> bool {
        item.is_past_best_before()
    }
}

/// Keeps everything until it is actually unsafe.
///
/// Because the pantry removes expired items before asking the policy, this
/// never fires in practice; it exists as the explicit "keep until unsafe"
/// variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct LaxPolicy;

impl PantryPolicy for LaxPolicy {
    fn should_discard(&self, item: &FoodItem) -> bool {
        item.is_expired()
    }
}

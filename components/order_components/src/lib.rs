use bevy::prelude::*;

/// A live customer order. Spawned as its own entity; despawned on
/// completion or when patience runs out.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct Order {
    /// Monotonic per-session number; the lowest live one is the oldest
    /// order and gets served first.
    pub number: u64,
    pub customer: String,
    pub customer_name: String,
    pub recipe: String,
    pub tip_multiplier: f32,
    pub forgiving: bool,
    /// Seconds left before the customer walks out.
    pub patience_remaining: u32,
    /// Patience at creation, used for the speed bonus.
    pub patience_total: u32,
}

impl Default for Order {
    fn default() -> Self {
        Self {
            number: 0,
            customer: String::new(),
            customer_name: String::new(),
            recipe: String::new(),
            tip_multiplier: 1.0,
            forgiving: false,
            patience_remaining: 0,
            patience_total: 0,
        }
    }
}

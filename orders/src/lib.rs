//! Restaurant mode: customer spawning, patience, serving and reputation.
//!
//! Orders are entities carrying an `Order` component. Patience counts down
//! on the second tick while the restaurant is open; closing the restaurant
//! clears every live order without a reputation penalty.

pub mod systems;

#[cfg(test)]
mod tests;

use {bevy::prelude::*, order_components::Order, states::RestaurantState};

/// Concurrent order cap.
pub const MAX_ACTIVE_ORDERS: usize = 3;

/// Chance that a spawn tick actually seats a customer.
pub const SPAWN_CHANCE: f64 = 0.7;

/// Serving with more than this much patience left improves reputation.
pub const GOOD_SERVICE_BONUS: f32 = 0.8;

/// Star rating out of five. Only failed orders drag it down.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Reputation(pub f32);

impl Default for Reputation {
    fn default() -> Self {
        Self(5.0)
    }
}

impl Reputation {
    pub fn reward(&mut self) {
        self.0 = (self.0 + 0.1).min(5.0);
    }

    pub fn penalize(&mut self, forgiving: bool) {
        let loss = if forgiving { 0.05 } else { 0.15 };
        self.0 = (self.0 - loss).max(0.0);
    }
}

/// Monotonic order numbers; the lowest live number is served first.
#[derive(Resource, Debug, Default)]
pub struct OrderNumberGen(u64);

impl OrderNumberGen {
    pub fn next(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }
}

pub struct OrdersPlugin;

impl Plugin for OrdersPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<RestaurantState>()
            .register_type::<Order>()
            .init_resource::<Reputation>()
            .init_resource::<OrderNumberGen>()
            .add_observer(systems::auto_spawn)
            .add_observer(systems::spawn_customer)
            .add_observer(systems::tick_patience)
            .add_observer(systems::serve_dish)
            .add_systems(
                OnEnter(RestaurantState::Closed),
                systems::clear_orders_on_close,
            );
    }
}

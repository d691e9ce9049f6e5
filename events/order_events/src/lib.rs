use bevy::prelude::*;

/// Player serves a finished dish to whoever ordered it first.
#[derive(Event, Debug)]
pub struct ServeDish {
    pub recipe_id: String,
}

/// Request to seat a new customer. `customer`/`recipe` override the random
/// draws when set; the auto-spawner and the "New Customer" button leave
/// them empty.
#[derive(Event, Debug, Default)]
pub struct SpawnCustomerRequest {
    pub customer: Option<String>,
    pub recipe: Option<String>,
}

/// An order was served in time.
#[derive(Event, Debug, Clone)]
pub struct OrderCompleted {
    pub customer: String,
    pub recipe_id: String,
    pub xp: u32,
    pub speed_bonus: f32,
}

/// An order's patience ran out before it was served.
#[derive(Event, Debug, Clone)]
pub struct OrderFailed {
    pub customer: String,
    pub recipe_id: String,
}

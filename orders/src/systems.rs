use {
    crate::{GOOD_SERVICE_BONUS, MAX_ACTIVE_ORDERS, OrderNumberGen, Reputation, SPAWN_CHANCE},
    bevy::prelude::*,
    clock::{SecondTick, SpawnTick},
    customer_assets::{CustomerCatalog, CustomerDefinition},
    kitchen_events::Notification,
    kitchen_resources::{ItemKind, Kitchen, StationKind},
    order_components::Order,
    order_events::{OrderCompleted, OrderFailed, ServeDish, SpawnCustomerRequest},
    progression::PlayerProfile,
    progression_events::GainXp,
    rand::Rng,
    recipe_assets::RecipeCatalog,
    states::RestaurantState,
};

/// Fallback XP when a served recipe is missing from the catalog.
const DEFAULT_DISH_XP: u32 = 20;

/// Rolls the spawn gate on every spawn tick while the restaurant is open.
pub fn auto_spawn(
    _trigger: On<SpawnTick>,
    mut commands: Commands,
    state: Res<State<RestaurantState>>,
    orders: Query<&Order>,
) {
    if *state.get() != RestaurantState::Open {
        return;
    }
    if orders.iter().count() >= MAX_ACTIVE_ORDERS {
        return;
    }
    if !rand::random_bool(SPAWN_CHANCE) {
        return;
    }
    commands.trigger(SpawnCustomerRequest::default());
}

/// Seats a customer and creates their order. Random draws are skipped when
/// the request pins a customer or recipe.
pub fn spawn_customer(
    trigger: On<SpawnCustomerRequest>,
    mut commands: Commands,
    state: Res<State<RestaurantState>>,
    customers: Res<CustomerCatalog>,
    recipes: Res<RecipeCatalog>,
    profile: Res<PlayerProfile>,
    mut numbers: ResMut<OrderNumberGen>,
    orders: Query<&Order>,
) {
    if *state.get() != RestaurantState::Open {
        commands.trigger(Notification::warning("The restaurant is closed."));
        return;
    }
    if orders.iter().count() >= MAX_ACTIVE_ORDERS {
        commands.trigger(Notification::info("The counter is full right now."));
        return;
    }

    let event = trigger.event();
    let customer = match &event.customer {
        Some(id) => customers.get(id),
        None => draw_customer(&customers, profile.level),
    };
    let Some(customer) = customer else {
        warn!("no customer available to seat");
        return;
    };

    let recipe_id = match &event.recipe {
        Some(id) => id.clone(),
        None => match draw_recipe(customer, &recipes) {
            Some(id) => id,
            None => {
                warn!("no recipes in catalog, cannot create an order");
                return;
            }
        },
    };

    // Lower levels get more breathing room.
    let multiplier = patience_multiplier(profile.level);
    let patience = (customer.patience as f32 * multiplier).floor() as u32;

    let number = numbers.next();
    commands.spawn(Order {
        number,
        customer: customer.id.clone(),
        customer_name: customer.display_name.clone(),
        recipe: recipe_id.clone(),
        tip_multiplier: customer.tip_multiplier,
        forgiving: customer.forgiving,
        patience_remaining: patience,
        patience_total: patience,
    });

    let dish_name = recipes
        .get(&recipe_id)
        .map_or_else(|| recipe_id.clone(), |r| r.display_name.clone());
    info!(customer = %customer.id, recipe_id = %recipe_id, patience, "customer seated");
    commands.trigger(Notification::info(format!(
        "{} ordered {dish_name}!",
        customer.display_name
    )));
}

fn patience_multiplier(level: u32) -> f32 {
    match level {
        0..=2 => 2.0,
        3..=4 => 1.5,
        _ => 1.0,
    }
}

/// Probability-weighted draw over the customers unlocked at this level.
fn draw_customer(catalog: &CustomerCatalog, level: u32) -> Option<&CustomerDefinition> {
    let available: Vec<_> = catalog
        .sorted()
        .into_iter()
        .filter(|c| c.unlock_level.is_none_or(|required| level >= required))
        .collect();
    let total: f32 = available.iter().map(|c| c.probability).sum();
    if available.is_empty() || total <= 0.0 {
        return None;
    }
    let mut roll = rand::rng().random_range(0.0..total);
    for customer in &available {
        roll -= customer.probability;
        if roll <= 0.0 {
            return Some(customer);
        }
    }
    available.first().copied()
}

fn draw_recipe(customer: &CustomerDefinition, recipes: &RecipeCatalog) -> Option<String> {
    let preferred: Vec<_> = customer
        .preferred_dishes
        .iter()
        .filter(|id| recipes.get(id).is_some())
        .collect();
    if !preferred.is_empty() {
        let pick = rand::rng().random_range(0..preferred.len());
        return Some(preferred[pick].clone());
    }
    let all = recipes.sorted();
    if all.is_empty() {
        return None;
    }
    let pick = rand::rng().random_range(0..all.len());
    Some(all[pick].id.clone())
}

/// Counts every order down once per second and walks out the ones that ran
/// dry. All expiries in a tick are batched before despawning.
pub fn tick_patience(
    _trigger: On<SecondTick>,
    mut commands: Commands,
    state: Res<State<RestaurantState>>,
    mut reputation: ResMut<Reputation>,
    mut orders: Query<(Entity, &mut Order)>,
) {
    if *state.get() != RestaurantState::Open {
        return;
    }
    let mut expired = Vec::new();
    for (entity, mut order) in &mut orders {
        // Already expired and waiting on its despawn to flush.
        if order.patience_remaining == 0 {
            continue;
        }
        order.patience_remaining -= 1;
        if order.patience_remaining == 0 {
            expired.push((entity, order.clone()));
        }
    }
    for (entity, order) in expired {
        reputation.penalize(order.forgiving);
        info!(customer = %order.customer, recipe_id = %order.recipe, "order expired");
        commands.entity(entity).despawn();
        commands.trigger(Notification::warning(format!(
            "{} left unhappy...",
            order.customer_name
        )));
        commands.trigger(OrderFailed {
            customer: order.customer.clone(),
            recipe_id: order.recipe.clone(),
        });
    }
}

/// Serves a plated dish to the oldest matching order.
pub fn serve_dish(
    trigger: On<ServeDish>,
    mut commands: Commands,
    mut kitchen: ResMut<Kitchen>,
    mut reputation: ResMut<Reputation>,
    recipes: Res<RecipeCatalog>,
    orders: Query<(Entity, &Order)>,
) {
    let recipe_id = &trigger.event().recipe_id;

    let dish = kitchen
        .items(StationKind::Plate)
        .iter()
        .find(|item| {
            matches!(&item.kind, ItemKind::CompletedDish { recipe } if recipe == recipe_id)
        })
        .map(|item| item.id);
    let Some(dish) = dish else {
        commands.trigger(Notification::warning("That dish isn't on the plate."));
        return;
    };

    let matched = orders
        .iter()
        .filter(|(_, order)| order.recipe == *recipe_id)
        .min_by_key(|(_, order)| order.number);
    let Some((entity, order)) = matched else {
        commands.trigger(Notification::warning("Nobody ordered that right now."));
        return;
    };

    let base_xp = recipes
        .get(recipe_id)
        .map_or(DEFAULT_DISH_XP, |r| r.xp_reward);
    let ratio = order.patience_remaining as f32 / order.patience_total.max(1) as f32;
    let speed_bonus = ratio.max(0.5);
    let xp = (base_xp as f32 * order.tip_multiplier * speed_bonus).floor() as u32;

    if speed_bonus > GOOD_SERVICE_BONUS {
        reputation.reward();
    }

    kitchen.remove(StationKind::Plate, dish);
    let completed = OrderCompleted {
        customer: order.customer.clone(),
        recipe_id: recipe_id.clone(),
        xp,
        speed_bonus,
    };
    let dish_name = recipes
        .get(recipe_id)
        .map_or_else(|| recipe_id.clone(), |r| r.display_name.clone());
    let customer_name = order.customer_name.clone();
    commands.entity(entity).despawn();

    info!(customer = %completed.customer, recipe_id = %recipe_id, xp, speed_bonus, "order served");
    commands.trigger(GainXp {
        amount: xp,
        reason: format!("Served {customer_name}"),
    });
    commands.trigger(Notification::info(format!(
        "{customer_name} loved the {dish_name}!"
    )));
    commands.trigger(completed);
}

/// Closing time sends everyone home with no hard feelings.
pub fn clear_orders_on_close(mut commands: Commands, orders: Query<Entity, With<Order>>) {
    let mut cleared = 0;
    for entity in &orders {
        commands.entity(entity).despawn();
        cleared += 1;
    }
    if cleared > 0 {
        info!(cleared, "restaurant closed, orders cleared");
    }
}

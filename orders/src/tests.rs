use {
    crate::{OrdersPlugin, Reputation},
    bevy::{prelude::*, state::app::StatesPlugin},
    clock::SecondTick,
    customer_assets::{CustomerCatalog, CustomerDefinition},
    kitchen_resources::{ItemIdGen, ItemInstance, Kitchen, StationKind},
    order_components::Order,
    order_events::{OrderCompleted, OrderFailed, ServeDish, SpawnCustomerRequest},
    progression::PlayerProfile,
    recipe_assets::{RecipeAction, RecipeCatalog, RecipeDefinition, RecipeRequirement},
    states::RestaurantState,
};

#[derive(Resource, Default)]
struct SeenCompleted(Vec<OrderCompleted>);

#[derive(Resource, Default)]
struct SeenFailed(Vec<OrderFailed>);

fn customer(id: &str, patience: u32, tip: f32, forgiving: bool) -> CustomerDefinition {
    CustomerDefinition {
        id: id.to_string(),
        display_name: id.to_string(),
        patience,
        tip_multiplier: tip,
        probability: 0.5,
        unlock_level: None,
        preferred_dishes: Vec::new(),
        forgiving,
    }
}

fn test_customers() -> CustomerCatalog {
    let mut catalog = CustomerCatalog::default();
    catalog.insert(customer("regular", 180, 1.0, false));
    catalog.insert(customer("kid", 120, 0.5, true));
    catalog.insert(CustomerDefinition {
        unlock_level: Some(5),
        ..customer("vip", 300, 5.0, false)
    });
    catalog
}

fn test_recipes() -> RecipeCatalog {
    let mut catalog = RecipeCatalog::default();
    catalog.insert(RecipeDefinition {
        id: "friedRice".to_string(),
        display_name: "Fried Rice".to_string(),
        description: String::new(),
        required: vec![RecipeRequirement {
            ingredient: "rice".to_string(),
            state: "cooked".to_string(),
        }],
        optional: vec![],
        action: RecipeAction::Fry,
        xp_reward: 20,
    });
    catalog
}

fn test_app(level: u32) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(StatesPlugin)
        .add_plugins(OrdersPlugin)
        .insert_state(RestaurantState::Open)
        .insert_resource(test_customers())
        .insert_resource(test_recipes())
        .insert_resource(PlayerProfile {
            level,
            ..default()
        })
        .init_resource::<Kitchen>()
        .init_resource::<ItemIdGen>()
        .init_resource::<SeenCompleted>()
        .init_resource::<SeenFailed>()
        .add_observer(|trigger: On<OrderCompleted>, mut seen: ResMut<SeenCompleted>| {
            seen.0.push(trigger.event().clone());
        })
        .add_observer(|trigger: On<OrderFailed>, mut seen: ResMut<SeenFailed>| {
            seen.0.push(trigger.event().clone());
        });
    app.update();
    app
}

fn seat(app: &mut App, customer: &str) {
    app.world_mut().trigger(SpawnCustomerRequest {
        customer: Some(customer.to_string()),
        recipe: Some("friedRice".to_string()),
    });
    app.update();
}

fn live_orders(app: &mut App) -> Vec<Order> {
    let mut orders: Vec<Order> = app
        .world_mut()
        .query::<&Order>()
        .iter(app.world())
        .cloned()
        .collect();
    orders.sort_by_key(|order| order.number);
    orders
}

#[test]
fn seating_scales_patience_by_chef_level() {
    let mut app = test_app(1);
    seat(&mut app, "regular");

    let orders = live_orders(&mut app);
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].patience_total, 360, "level 1 doubles 180s");
    assert_eq!(orders[0].patience_remaining, 360);
    assert_eq!(orders[0].recipe, "friedRice");

    let mut app = test_app(5);
    seat(&mut app, "regular");
    assert_eq!(live_orders(&mut app)[0].patience_total, 180);
}

#[test]
fn order_cap_holds_at_three() {
    let mut app = test_app(1);
    for _ in 0..5 {
        seat(&mut app, "regular");
    }
    assert_eq!(live_orders(&mut app).len(), 3);
}

#[test]
fn closed_restaurant_seats_nobody() {
    let mut app = test_app(1);
    app.insert_state(RestaurantState::Closed);
    app.update();
    seat(&mut app, "regular");
    assert!(live_orders(&mut app).is_empty());
}

#[test]
fn patience_runs_out_and_costs_reputation() {
    let mut app = test_app(5);
    seat(&mut app, "regular");
    seat(&mut app, "kid");

    // regular: 180s, kid: 120s at level 5.
    for _ in 0..120 {
        app.world_mut().trigger(SecondTick);
    }
    app.update();

    let remaining = live_orders(&mut app);
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].customer, "regular");

    let failed = app.world().resource::<SeenFailed>();
    assert_eq!(failed.0.len(), 1);
    assert_eq!(failed.0[0].customer, "kid");

    // Forgiving kid only costs 0.05.
    let reputation = app.world().resource::<Reputation>();
    assert!((reputation.0 - 4.95).abs() < f32::EPSILON * 8.0);
}

#[test]
fn unforgiving_walkout_costs_more() {
    let mut app = test_app(5);
    seat(&mut app, "regular");
    for _ in 0..180 {
        app.world_mut().trigger(SecondTick);
    }
    app.update();

    assert!(live_orders(&mut app).is_empty());
    let reputation = app.world().resource::<Reputation>();
    assert!((reputation.0 - 4.85).abs() < f32::EPSILON * 8.0);
}

#[test]
fn serving_fast_pays_full_tip_and_rewards_reputation() {
    let mut app = test_app(5);
    seat(&mut app, "kid");

    let id = app.world_mut().resource_mut::<ItemIdGen>().next_id();
    app.world_mut()
        .resource_mut::<Kitchen>()
        .insert(StationKind::Plate, ItemInstance::completed_dish(id, "friedRice"));

    app.world_mut().trigger(ServeDish {
        recipe_id: "friedRice".to_string(),
    });
    app.update();

    assert!(live_orders(&mut app).is_empty());
    assert!(app.world().resource::<Kitchen>().is_empty(StationKind::Plate));

    let completed = app.world().resource::<SeenCompleted>();
    assert_eq!(completed.0.len(), 1);
    // 20 XP * 0.5 tip * 1.0 speed bonus.
    assert_eq!(completed.0[0].xp, 10);
    assert!((completed.0[0].speed_bonus - 1.0).abs() < f32::EPSILON);

    let reputation = app.world().resource::<Reputation>();
    assert_eq!(reputation.0, 5.0, "already capped at five stars");
}

#[test]
fn slow_service_bottoms_out_at_half_bonus() {
    let mut app = test_app(5);
    seat(&mut app, "regular");
    // Let 170 of 180 seconds burn away.
    for _ in 0..170 {
        app.world_mut().trigger(SecondTick);
    }
    app.update();

    let id = app.world_mut().resource_mut::<ItemIdGen>().next_id();
    app.world_mut()
        .resource_mut::<Kitchen>()
        .insert(StationKind::Plate, ItemInstance::completed_dish(id, "friedRice"));
    app.world_mut().trigger(ServeDish {
        recipe_id: "friedRice".to_string(),
    });
    app.update();

    let completed = app.world().resource::<SeenCompleted>();
    assert_eq!(completed.0.len(), 1);
    assert!((completed.0[0].speed_bonus - 0.5).abs() < f32::EPSILON);
    // 20 XP * 1.0 tip * 0.5 bonus.
    assert_eq!(completed.0[0].xp, 10);
}

#[test]
fn serving_without_a_plated_dish_changes_nothing() {
    let mut app = test_app(5);
    seat(&mut app, "regular");

    app.world_mut().trigger(ServeDish {
        recipe_id: "friedRice".to_string(),
    });
    app.update();

    assert_eq!(live_orders(&mut app).len(), 1);
    assert!(app.world().resource::<SeenCompleted>().0.is_empty());
}

#[test]
fn oldest_matching_order_is_served_first() {
    let mut app = test_app(5);
    seat(&mut app, "regular");
    seat(&mut app, "kid");

    let id = app.world_mut().resource_mut::<ItemIdGen>().next_id();
    app.world_mut()
        .resource_mut::<Kitchen>()
        .insert(StationKind::Plate, ItemInstance::completed_dish(id, "friedRice"));
    app.world_mut().trigger(ServeDish {
        recipe_id: "friedRice".to_string(),
    });
    app.update();

    let completed = app.world().resource::<SeenCompleted>();
    assert_eq!(completed.0[0].customer, "regular");
    let remaining = live_orders(&mut app);
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].customer, "kid");
}

#[test]
fn closing_clears_all_orders_without_penalty() {
    let mut app = test_app(5);
    seat(&mut app, "regular");
    seat(&mut app, "kid");

    app.world_mut()
        .resource_mut::<NextState<RestaurantState>>()
        .set(RestaurantState::Closed);
    app.update();
    app.update();

    assert!(live_orders(&mut app).is_empty());
    assert_eq!(app.world().resource::<Reputation>().0, 5.0);
}

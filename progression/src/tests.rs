use {
    crate::{PlayerProfile, ProgressionPlugin},
    bevy::prelude::*,
    disaster_events::DisasterResolved,
    kitchen_events::DishCompleted,
    order_events::OrderCompleted,
    progression_assets::{ChefLevel, ProgressionConfig},
    progression_events::{GainXp, LevelUp, RecipeDiscovered},
    recipe_assets::RecipeCatalog,
};

#[derive(Resource, Default)]
struct SeenLevelUps(Vec<LevelUp>);

#[derive(Resource, Default)]
struct SeenDiscoveries(Vec<String>);

fn chef_level(level: u32, title: &str, xp_required: u32, unlocks: &[&str]) -> ChefLevel {
    ChefLevel {
        level,
        title: title.to_string(),
        xp_required,
        unlocks_message: String::new(),
        unlock_ingredients: unlocks.iter().map(|s| s.to_string()).collect(),
    }
}

fn test_config() -> ProgressionConfig {
    ProgressionConfig {
        levels: vec![
            chef_level(1, "Kitchen Helper", 0, &[]),
            chef_level(2, "Junior Chef", 100, &["mahi", "butter"]),
            chef_level(3, "Line Cook", 300, &["wagyu", "mushroom"]),
            chef_level(4, "Sous Chef", 600, &["crab"]),
        ],
        starter_ingredients: vec!["rice".to_string(), "egg".to_string()],
        discovery_bonus_xp: 25,
    }
}

fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(ProgressionPlugin)
        .insert_resource(test_config())
        .init_resource::<RecipeCatalog>()
        .init_resource::<SeenLevelUps>()
        .init_resource::<SeenDiscoveries>()
        .add_observer(|trigger: On<LevelUp>, mut seen: ResMut<SeenLevelUps>| {
            seen.0.push(trigger.event().clone());
        })
        .add_observer(
            |trigger: On<RecipeDiscovered>, mut seen: ResMut<SeenDiscoveries>| {
                seen.0.push(trigger.event().recipe_id.clone());
            },
        );
    app
}

fn gain(app: &mut App, amount: u32) {
    app.world_mut().trigger(GainXp {
        amount,
        reason: "test".to_string(),
    });
    app.update();
}

#[test]
fn xp_accumulates_without_leveling_below_threshold() {
    let mut app = test_app();
    gain(&mut app, 99);

    let profile = app.world().resource::<PlayerProfile>();
    assert_eq!(profile.level, 1);
    assert_eq!(profile.total_xp, 99);
    assert_eq!(profile.xp, 99);
    assert!(app.world().resource::<SeenLevelUps>().0.is_empty());
}

#[test]
fn crossing_a_threshold_levels_up_and_unlocks() {
    let mut app = test_app();
    gain(&mut app, 120);

    let profile = app.world().resource::<PlayerProfile>();
    assert_eq!(profile.level, 2);
    assert_eq!(profile.xp, 20);
    assert!(profile.is_unlocked("mahi"));
    assert!(profile.is_unlocked("butter"));

    let seen = app.world().resource::<SeenLevelUps>();
    assert_eq!(seen.0.len(), 1);
    assert_eq!(seen.0[0].new_level, 2);
    assert_eq!(seen.0[0].title, "Junior Chef");
}

#[test]
fn one_award_can_cross_several_levels() {
    let mut app = test_app();
    gain(&mut app, 650);

    let profile = app.world().resource::<PlayerProfile>();
    assert_eq!(profile.level, 4);
    assert_eq!(profile.total_xp, 650);
    assert_eq!(profile.xp, 50);
    for ingredient in ["mahi", "butter", "wagyu", "mushroom", "crab"] {
        assert!(profile.is_unlocked(ingredient), "{ingredient} should unlock");
    }

    let seen = app.world().resource::<SeenLevelUps>();
    assert_eq!(seen.0.len(), 1);
    assert_eq!(seen.0[0].new_level, 4);
    assert_eq!(seen.0[0].unlocked_ingredients.len(), 5);
}

#[test]
fn completing_a_dish_awards_xp_and_discovery_bonus_once() {
    let mut app = test_app();
    app.world_mut().trigger(DishCompleted {
        recipe_id: "friedRice".to_string(),
        xp_reward: 20,
    });
    app.update();

    let profile = app.world().resource::<PlayerProfile>();
    assert_eq!(profile.stats.recipes_completed, 1);
    assert_eq!(profile.total_xp, 45, "base 20 plus 25 discovery bonus");
    assert!(profile.has_discovered("friedRice"));
    assert_eq!(app.world().resource::<SeenDiscoveries>().0, vec!["friedRice"]);

    app.world_mut().trigger(DishCompleted {
        recipe_id: "friedRice".to_string(),
        xp_reward: 20,
    });
    app.update();

    let profile = app.world().resource::<PlayerProfile>();
    assert_eq!(profile.stats.recipes_completed, 2);
    assert_eq!(profile.total_xp, 65, "no second discovery bonus");
    assert_eq!(app.world().resource::<SeenDiscoveries>().0.len(), 1);
}

#[test]
fn order_and_disaster_events_bump_stats() {
    let mut app = test_app();
    app.world_mut().trigger(OrderCompleted {
        customer: "regular".to_string(),
        recipe_id: "friedRice".to_string(),
        xp: 20,
        speed_bonus: 0.95,
    });
    app.world_mut().trigger(OrderCompleted {
        customer: "kid".to_string(),
        recipe_id: "friedRice".to_string(),
        xp: 10,
        speed_bonus: 0.5,
    });
    app.world_mut().trigger(DisasterResolved {
        disaster: "fire".to_string(),
        message: String::new(),
        xp_reward: 15,
    });
    app.update();

    let stats = &app.world().resource::<PlayerProfile>().stats;
    assert_eq!(stats.customers_served, 2);
    assert_eq!(stats.perfect_dishes, 1);
    assert_eq!(stats.disasters_handled, 1);
}

#[test]
fn seeding_starters_never_duplicates() {
    let mut profile = PlayerProfile::default();
    let starters = vec!["rice".to_string(), "egg".to_string()];
    profile.seed_starters(&starters);
    profile.unlocked_ingredients.push("mahi".to_string());
    profile.seed_starters(&starters);

    assert_eq!(profile.unlocked_ingredients, vec!["rice", "egg", "mahi"]);
}

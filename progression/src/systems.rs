use {
    crate::PlayerProfile,
    bevy::prelude::*,
    disaster_events::DisasterResolved,
    kitchen_events::{DishCompleted, Notification},
    order_events::OrderCompleted,
    progression_assets::ProgressionConfig,
    progression_events::{GainXp, LevelUp, RecipeDiscovered},
    recipe_assets::RecipeCatalog,
};

/// Serving fast enough for this bonus counts as a perfect dish.
const PERFECT_BONUS_THRESHOLD: f32 = 0.8;

/// Awards XP and walks the level table. A single award can cross several
/// thresholds; one `LevelUp` reports the final level and everything
/// unlocked on the way.
pub fn gain_xp(
    trigger: On<GainXp>,
    mut commands: Commands,
    mut profile: ResMut<PlayerProfile>,
    config: Res<ProgressionConfig>,
) {
    let event = trigger.event();
    profile.total_xp += event.amount;
    profile.xp += event.amount;
    commands.trigger(Notification::info(format!(
        "+{} XP - {}",
        event.amount, event.reason
    )));

    let mut unlocked = Vec::new();
    let mut leveled_up = false;
    while let Some(next) = config.level(profile.level + 1) {
        if profile.total_xp < next.xp_required {
            break;
        }
        profile.level += 1;
        profile.xp = profile.total_xp - next.xp_required;
        for ingredient in &next.unlock_ingredients {
            if !profile.is_unlocked(ingredient) {
                profile.unlocked_ingredients.push(ingredient.clone());
                unlocked.push(ingredient.clone());
            }
        }
        leveled_up = true;
    }

    if leveled_up {
        let reached = config.level(profile.level);
        let title = reached.map_or_else(|| "Chef".to_string(), |l| l.title.clone());
        let message = reached.map_or_else(String::new, |l| l.unlocks_message.clone());
        info!(level = profile.level, title = %title, "level up");
        commands.trigger(Notification::info(format!("Level Up! You are now a {title}!")));
        commands.trigger(LevelUp {
            new_level: profile.level,
            title,
            message,
            unlocked_ingredients: unlocked,
        });
    }
}

/// Counts the dish, awards its XP and handles first-time discovery.
pub fn on_dish_completed(
    trigger: On<DishCompleted>,
    mut commands: Commands,
    mut profile: ResMut<PlayerProfile>,
    config: Res<ProgressionConfig>,
    recipes: Res<RecipeCatalog>,
) {
    let event = trigger.event();
    profile.stats.recipes_completed += 1;

    let name = recipes
        .get(&event.recipe_id)
        .map_or_else(|| event.recipe_id.clone(), |r| r.display_name.clone());
    commands.trigger(GainXp {
        amount: event.xp_reward,
        reason: format!("Completed {name}"),
    });

    if !profile.has_discovered(&event.recipe_id) {
        profile.discovered_recipes.push(event.recipe_id.clone());
        info!(recipe_id = %event.recipe_id, "recipe discovered");
        commands.trigger(RecipeDiscovered {
            recipe_id: event.recipe_id.clone(),
        });
        if config.discovery_bonus_xp > 0 {
            commands.trigger(GainXp {
                amount: config.discovery_bonus_xp,
                reason: format!("New recipe discovered: {name}"),
            });
        }
    }
}

pub fn on_order_completed(trigger: On<OrderCompleted>, mut profile: ResMut<PlayerProfile>) {
    let event = trigger.event();
    profile.stats.customers_served += 1;
    if event.speed_bonus > PERFECT_BONUS_THRESHOLD {
        profile.stats.perfect_dishes += 1;
    }
}

pub fn on_disaster_resolved(_trigger: On<DisasterResolved>, mut profile: ResMut<PlayerProfile>) {
    profile.stats.disasters_handled += 1;
}

use bevy::prelude::*;

/// Award XP to the chef. `reason` is surfaced in the notification.
#[derive(Event, Debug, Clone)]
pub struct GainXp {
    pub amount: u32,
    pub reason: String,
}

/// Emitted once per `GainXp` call that crosses at least one level
/// threshold, reporting the highest level reached and every ingredient
/// unlocked along the way.
#[derive(Event, Debug, Clone)]
pub struct LevelUp {
    pub new_level: u32,
    pub title: String,
    pub message: String,
    pub unlocked_ingredients: Vec<String>,
}

/// A recipe was completed for the first time.
#[derive(Event, Debug, Clone)]
pub struct RecipeDiscovered {
    pub recipe_id: String,
}

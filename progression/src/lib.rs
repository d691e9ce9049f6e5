//! Chef progression: lifetime XP, levels, ingredient unlocks, recipe
//! discovery and the session stat counters.

pub mod systems;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

#[derive(Reflect, Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerStats {
    pub recipes_completed: u32,
    pub customers_served: u32,
    pub disasters_handled: u32,
    pub perfect_dishes: u32,
}

/// The persistent chef profile. This is the only resource that goes into
/// save files.
#[derive(Resource, Reflect, Debug, Clone)]
#[reflect(Resource)]
pub struct PlayerProfile {
    pub level: u32,
    /// XP gained since the last level-up.
    pub xp: u32,
    /// Lifetime XP; level thresholds compare against this.
    pub total_xp: u32,
    pub unlocked_ingredients: Vec<String>,
    pub discovered_recipes: Vec<String>,
    pub stats: PlayerStats,
}

impl Default for PlayerProfile {
    fn default() -> Self {
        Self {
            level: 1,
            xp: 0,
            total_xp: 0,
            unlocked_ingredients: Vec::new(),
            discovered_recipes: Vec::new(),
            stats: PlayerStats::default(),
        }
    }
}

impl PlayerProfile {
    pub fn is_unlocked(&self, ingredient: &str) -> bool {
        self.unlocked_ingredients.iter().any(|i| i == ingredient)
    }

    pub fn has_discovered(&self, recipe: &str) -> bool {
        self.discovered_recipes.iter().any(|r| r == recipe)
    }

    /// Merges the starter set in without duplicating anything, so loaded
    /// profiles pick up starters added after the save was written.
    pub fn seed_starters(&mut self, starters: &[String]) {
        for starter in starters {
            if !self.is_unlocked(starter) {
                self.unlocked_ingredients.push(starter.clone());
            }
        }
    }
}

pub struct ProgressionPlugin;

impl Plugin for ProgressionPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<PlayerProfile>()
            .register_type::<PlayerStats>()
            .init_resource::<PlayerProfile>()
            .add_observer(systems::gain_xp)
            .add_observer(systems::on_dish_completed)
            .add_observer(systems::on_order_completed)
            .add_observer(systems::on_disaster_resolved);
    }
}

//! Chef-level table and starter set, loaded from `.progression.ron`.

use {
    bevy::prelude::*,
    bevy_common_assets::ron::RonAssetPlugin,
    serde::{Deserialize, Serialize},
};

pub struct ProgressionAssetsPlugin;

impl Plugin for ProgressionAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RonAssetPlugin::<ChefLevelsDefinition>::new(&[
            "progression.ron",
        ]))
        .init_resource::<ProgressionConfig>();
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChefLevel {
    pub level: u32,
    pub title: String,
    /// Lifetime XP needed to reach this level.
    pub xp_required: u32,
    #[serde(default)]
    pub unlocks_message: String,
    /// Ingredients unlocked on reaching this level.
    #[serde(default)]
    pub unlock_ingredients: Vec<String>,
}

#[derive(Asset, TypePath, Debug, Clone, Serialize, Deserialize)]
pub struct ChefLevelsDefinition {
    /// Ascending by level; thresholds are non-decreasing.
    pub levels: Vec<ChefLevel>,
    /// Unlocked from the first session onward.
    pub starter_ingredients: Vec<String>,
    /// One-time bonus for completing a recipe never made before.
    pub discovery_bonus_xp: u32,
}

/// Plain-resource copy of the loaded definition, built during the loading
/// phase so gameplay systems never touch `Assets` handles.
#[derive(Resource, Debug, Clone, Default)]
pub struct ProgressionConfig {
    pub levels: Vec<ChefLevel>,
    pub starter_ingredients: Vec<String>,
    pub discovery_bonus_xp: u32,
}

impl ProgressionConfig {
    pub fn from_definition(def: &ChefLevelsDefinition) -> Self {
        Self {
            levels: def.levels.clone(),
            starter_ingredients: def.starter_ingredients.clone(),
            discovery_bonus_xp: def.discovery_bonus_xp,
        }
    }

    pub fn level(&self, level: u32) -> Option<&ChefLevel> {
        self.levels.iter().find(|l| l.level == level)
    }
}

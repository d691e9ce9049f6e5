//! Recipe catalog definitions, loaded from `.recipe.ron` files.

use {
    bevy::{platform::collections::HashMap, prelude::*},
    bevy_common_assets::ron::RonAssetPlugin,
    serde::{Deserialize, Serialize},
};

pub struct RecipeAssetsPlugin;

impl Plugin for RecipeAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RonAssetPlugin::<RecipeDefinition>::new(&["recipe.ron"]))
            .init_resource::<RecipeCatalog>()
            .register_type::<RecipeAction>();
    }
}

/// The station action that completes a recipe.
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecipeAction {
    /// Cook in the pan.
    Fry,
    /// Cook in the pot.
    Boil,
    /// Roll on the cutting board.
    Roll,
}

/// One required ingredient in a specific state. All requirements must be
/// satisfied by distinct items at the target station.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeRequirement {
    pub ingredient: String,
    pub state: String,
}

#[derive(Asset, TypePath, Debug, Clone, Serialize, Deserialize)]
pub struct RecipeDefinition {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    pub required: Vec<RecipeRequirement>,
    /// Flavor-text extras, never enforced.
    #[serde(default)]
    pub optional: Vec<String>,
    pub action: RecipeAction,
    pub xp_reward: u32,
}

#[derive(Resource, Default)]
pub struct RecipeCatalog {
    inner: HashMap<String, RecipeDefinition>,
}

impl RecipeCatalog {
    pub fn get(&self, id: &str) -> Option<&RecipeDefinition> {
        self.inner.get(id)
    }

    pub fn insert(&mut self, def: RecipeDefinition) {
        self.inner.insert(def.id.clone(), def);
    }

    /// Recipes in a stable (id-sorted) order, so matching and random picks
    /// are deterministic regardless of map iteration order.
    pub fn sorted(&self) -> Vec<&RecipeDefinition> {
        let mut recipes: Vec<_> = self.inner.values().collect();
        recipes.sort_by(|a, b| a.id.cmp(&b.id));
        recipes
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

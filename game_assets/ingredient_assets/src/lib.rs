//! Ingredient catalog definitions.
//!
//! Ingredients are grouped per category into `.ingredients.ron` files. The
//! states list is ordered: tools only ever move an item forward along it.

use {
    bevy::{platform::collections::HashMap, prelude::*},
    bevy_common_assets::ron::RonAssetPlugin,
    serde::{Deserialize, Serialize},
};

pub struct IngredientAssetsPlugin;

impl Plugin for IngredientAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RonAssetPlugin::<IngredientSetDefinition>::new(&[
            "ingredients.ron",
        ]))
        .init_resource::<IngredientCatalog>()
        .register_type::<IngredientCategory>();
    }
}

/// One category's worth of ingredients, loaded from `.ingredients.ron`.
#[derive(Asset, TypePath, Debug, Clone, Serialize, Deserialize)]
pub struct IngredientSetDefinition {
    pub category: IngredientCategory,
    pub ingredients: Vec<IngredientEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientEntry {
    /// Unique identifier (e.g., "soySauce"). Ids match the original recipe
    /// data, hence the camelCase.
    pub id: String,
    pub display_name: String,
    /// Ordered list of reachable states, first entry is the spawn state.
    pub states: Vec<String>,
}

#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IngredientCategory {
    Seafood,
    Meat,
    #[default]
    Vegetable,
    Starch,
    Dairy,
    Sauce,
    Spice,
    Wrapper,
    Protein,
}

/// A single catalog entry, category attached.
#[derive(Debug, Clone)]
pub struct IngredientDefinition {
    pub id: String,
    pub display_name: String,
    pub category: IngredientCategory,
    pub states: Vec<String>,
}

impl IngredientDefinition {
    /// Index of a state within this ingredient's ordered state list.
    pub fn state_index(&self, state: &str) -> Option<usize> {
        self.states.iter().position(|s| s == state)
    }

    pub fn has_state(&self, state: &str) -> bool {
        self.state_index(state).is_some()
    }

    pub fn initial_state(&self) -> &str {
        self.states.first().map_or("", String::as_str)
    }
}

/// Resource mapping ingredient ids to their definitions. Built during the
/// loading phase; tests fill it by hand.
#[derive(Resource, Default)]
pub struct IngredientCatalog {
    inner: HashMap<String, IngredientDefinition>,
}

impl IngredientCatalog {
    pub fn get(&self, id: &str) -> Option<&IngredientDefinition> {
        self.inner.get(id)
    }

    pub fn insert(&mut self, def: IngredientDefinition) {
        self.inner.insert(def.id.clone(), def);
    }

    pub fn insert_set(&mut self, set: &IngredientSetDefinition) {
        for entry in &set.ingredients {
            self.insert(IngredientDefinition {
                id: entry.id.clone(),
                display_name: entry.display_name.clone(),
                category: set.category,
                states: entry.states.clone(),
            });
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

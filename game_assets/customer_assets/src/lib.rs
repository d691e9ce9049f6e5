//! Customer type definitions, loaded from `.customer.ron` files.

use {
    bevy::{platform::collections::HashMap, prelude::*},
    bevy_common_assets::ron::RonAssetPlugin,
    serde::{Deserialize, Serialize},
};

pub struct CustomerAssetsPlugin;

impl Plugin for CustomerAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RonAssetPlugin::<CustomerDefinition>::new(&["customer.ron"]))
            .init_resource::<CustomerCatalog>();
    }
}

#[derive(Asset, TypePath, Debug, Clone, Serialize, Deserialize)]
pub struct CustomerDefinition {
    pub id: String,
    pub display_name: String,
    /// Base patience in seconds before level scaling.
    pub patience: u32,
    pub tip_multiplier: f32,
    /// Weight in the random customer draw.
    pub probability: f32,
    /// Customer only appears once the chef reaches this level.
    #[serde(default)]
    pub unlock_level: Option<u32>,
    /// When non-empty, orders are drawn from these recipes.
    #[serde(default)]
    pub preferred_dishes: Vec<String>,
    /// Forgiving customers cost less reputation when they walk out.
    #[serde(default)]
    pub forgiving: bool,
}

#[derive(Resource, Default)]
pub struct CustomerCatalog {
    inner: HashMap<String, CustomerDefinition>,
}

impl CustomerCatalog {
    pub fn get(&self, id: &str) -> Option<&CustomerDefinition> {
        self.inner.get(id)
    }

    pub fn insert(&mut self, def: CustomerDefinition) {
        self.inner.insert(def.id.clone(), def);
    }

    /// Stable id-sorted listing for deterministic weighted draws.
    pub fn sorted(&self) -> Vec<&CustomerDefinition> {
        let mut customers: Vec<_> = self.inner.values().collect();
        customers.sort_by(|a, b| a.id.cmp(&b.id));
        customers
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

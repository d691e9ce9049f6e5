//! Disaster definitions, loaded from `.disaster.ron` files.

use {
    bevy::{platform::collections::HashMap, prelude::*},
    bevy_common_assets::ron::RonAssetPlugin,
    serde::{Deserialize, Serialize},
};

pub struct DisasterAssetsPlugin;

impl Plugin for DisasterAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RonAssetPlugin::<DisasterDefinition>::new(&["disaster.ron"]))
            .init_resource::<DisasterCatalog>()
            .register_type::<Vessel>();
    }
}

/// Which heated vessel a disaster watches.
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Vessel {
    Pan,
    Pot,
}

#[derive(Asset, TypePath, Debug, Clone, Serialize, Deserialize)]
pub struct DisasterDefinition {
    pub id: String,
    pub display_name: String,
    /// Seconds the player has to react once the disaster goes active.
    pub response_time: u32,
    pub xp_reward: u32,
    pub warning_message: String,
    pub failure_message: String,
    pub success_message: String,
    /// Heat trigger: fires once `vessel`'s sustained-heat seconds exceed
    /// `heat_threshold`. Definitions without one only start on request.
    #[serde(default)]
    pub vessel: Option<Vessel>,
    #[serde(default)]
    pub heat_threshold: Option<u32>,
}

#[derive(Resource, Default)]
pub struct DisasterCatalog {
    inner: HashMap<String, DisasterDefinition>,
}

impl DisasterCatalog {
    pub fn get(&self, id: &str) -> Option<&DisasterDefinition> {
        self.inner.get(id)
    }

    pub fn insert(&mut self, def: DisasterDefinition) {
        self.inner.insert(def.id.clone(), def);
    }

    /// Stable id-sorted listing; condition checks walk this so the pan
    /// fire is always evaluated before the pot overflow.
    pub fn sorted(&self) -> Vec<&DisasterDefinition> {
        let mut disasters: Vec<_> = self.inner.values().collect();
        disasters.sort_by(|a, b| a.id.cmp(&b.id));
        disasters
    }
}

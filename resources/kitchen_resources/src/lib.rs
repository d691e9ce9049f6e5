//! Runtime kitchen model: stations, item instances and vessel heat.
//!
//! The `Kitchen` resource owns every live item. An item belongs to exactly
//! one station list (or to a composite that does), and moving an item is
//! always remove-then-insert, never a copy.

use {
    bevy::prelude::*,
    serde::{Deserialize, Serialize},
    std::collections::HashMap,
};

/// How long a single cook action keeps a vessel visibly heating.
pub const HEAT_PULSE_SECS: f32 = 2.5;

/// A fixed location in the kitchen holding zero or more items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum StationKind {
    CuttingBoard,
    MixingBowl,
    Pot,
    Pan,
    Plate,
    Sink,
    Workspace,
}

impl StationKind {
    pub const ALL: [StationKind; 7] = [
        StationKind::CuttingBoard,
        StationKind::MixingBowl,
        StationKind::Pot,
        StationKind::Pan,
        StationKind::Plate,
        StationKind::Sink,
        StationKind::Workspace,
    ];

    /// Pot and pan accumulate heat; no other station does.
    pub fn is_vessel(self) -> bool {
        matches!(self, StationKind::Pot | StationKind::Pan)
    }
}

/// Hand tools the player can apply to a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum Tool {
    Knife,
    Peeler,
    Grater,
    Whisk,
    RollingMat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u64);

/// Hands out unique item ids for the lifetime of a session.
#[derive(Resource, Debug, Default)]
pub struct ItemIdGen(u64);

impl ItemIdGen {
    pub fn next_id(&mut self) -> ItemId {
        self.0 += 1;
        ItemId(self.0)
    }
}

/// What an item instance actually is.
///
/// Composites (`MixedBowl`, `SushiRoll`) own their children exclusively;
/// absorbed items are removed from their station and live only inside the
/// composite from then on.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemKind {
    Ingredient { ingredient: String, state: String },
    MixedBowl { contents: Vec<ItemInstance> },
    SushiRoll { contents: Vec<ItemInstance> },
    CompletedDish { recipe: String },
}

/// A mutable runtime item. `washed`/`peeled`/`grated` are cosmetic flags
/// that never affect recipe matching.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemInstance {
    pub id: ItemId,
    pub kind: ItemKind,
    pub washed: bool,
    pub peeled: bool,
    pub grated: bool,
}

impl ItemInstance {
    pub fn ingredient(id: ItemId, ingredient: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            id,
            kind: ItemKind::Ingredient {
                ingredient: ingredient.into(),
                state: state.into(),
            },
            washed: false,
            peeled: false,
            grated: false,
        }
    }

    pub fn completed_dish(id: ItemId, recipe: impl Into<String>) -> Self {
        Self {
            id,
            kind: ItemKind::CompletedDish {
                recipe: recipe.into(),
            },
            washed: false,
            peeled: false,
            grated: false,
        }
    }

    pub fn mixed_bowl(id: ItemId, contents: Vec<ItemInstance>) -> Self {
        Self {
            id,
            kind: ItemKind::MixedBowl { contents },
            washed: false,
            peeled: false,
            grated: false,
        }
    }

    pub fn sushi_roll(id: ItemId, contents: Vec<ItemInstance>) -> Self {
        Self {
            id,
            kind: ItemKind::SushiRoll { contents },
            washed: false,
            peeled: false,
            grated: false,
        }
    }

    /// Ingredient id and current state, if this is a plain ingredient.
    pub fn as_ingredient(&self) -> Option<(&str, &str)> {
        match &self.kind {
            ItemKind::Ingredient { ingredient, state } => {
                Some((ingredient.as_str(), state.as_str()))
            }
            _ => None,
        }
    }

    pub fn is_ingredient(&self, id: &str) -> bool {
        matches!(&self.kind, ItemKind::Ingredient { ingredient, .. } if ingredient == id)
    }

    pub fn is_composite(&self) -> bool {
        matches!(
            self.kind,
            ItemKind::MixedBowl { .. } | ItemKind::SushiRoll { .. }
        )
    }
}

/// All station contents. Insertion order within a station is preserved for
/// the UI but carries no gameplay meaning.
#[derive(Resource, Debug, Default)]
pub struct Kitchen {
    stations: HashMap<StationKind, Vec<ItemInstance>>,
}

impl Kitchen {
    pub fn items(&self, station: StationKind) -> &[ItemInstance] {
        self.stations.get(&station).map_or(&[], Vec::as_slice)
    }

    pub fn items_mut(&mut self, station: StationKind) -> &mut Vec<ItemInstance> {
        self.stations.entry(station).or_default()
    }

    pub fn is_empty(&self, station: StationKind) -> bool {
        self.items(station).is_empty()
    }

    pub fn insert(&mut self, station: StationKind, item: ItemInstance) {
        self.items_mut(station).push(item);
    }

    /// Removes and returns the item, keeping single-ownership intact.
    pub fn remove(&mut self, station: StationKind, id: ItemId) -> Option<ItemInstance> {
        let items = self.stations.get_mut(&station)?;
        let index = items.iter().position(|item| item.id == id)?;
        Some(items.remove(index))
    }

    /// Empties the station and hands back whatever was there.
    pub fn clear(&mut self, station: StationKind) -> Vec<ItemInstance> {
        self.stations.remove(&station).unwrap_or_default()
    }

    pub fn find(&self, station: StationKind, id: ItemId) -> Option<&ItemInstance> {
        self.items(station).iter().find(|item| item.id == id)
    }

    /// The station currently holding the item, if any.
    pub fn station_of(&self, id: ItemId) -> Option<StationKind> {
        StationKind::ALL
            .into_iter()
            .find(|&station| self.find(station, id).is_some())
    }
}

/// Sustained-heat state for one vessel.
///
/// `heating` flips on with every cook action and off when the pulse timer
/// lapses; `seconds` counts sustained-heat seconds for the disaster engine
/// and resets the instant heat stops.
#[derive(Debug)]
pub struct VesselHeat {
    pub heating: bool,
    pub pulse: Timer,
    pub seconds: u32,
}

impl Default for VesselHeat {
    fn default() -> Self {
        Self {
            heating: false,
            pulse: Timer::from_seconds(HEAT_PULSE_SECS, TimerMode::Once),
            seconds: 0,
        }
    }
}

impl VesselHeat {
    /// Starts (or refreshes) the heat pulse.
    pub fn pulse_on(&mut self) {
        self.heating = true;
        self.pulse.reset();
    }

    pub fn shut_off(&mut self) {
        self.heating = false;
        self.seconds = 0;
    }
}

#[derive(Resource, Debug, Default)]
pub struct HeatTracker {
    pub pan: VesselHeat,
    pub pot: VesselHeat,
}

impl HeatTracker {
    pub fn vessel_mut(&mut self, station: StationKind) -> Option<&mut VesselHeat> {
        match station {
            StationKind::Pan => Some(&mut self.pan),
            StationKind::Pot => Some(&mut self.pot),
            _ => None,
        }
    }

    pub fn reset_all(&mut self) {
        self.pan.shut_off();
        self.pot.shut_off();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_then_insert_keeps_single_ownership() {
        let mut id_gen = ItemIdGen::default();
        let mut kitchen = Kitchen::default();
        let item = ItemInstance::ingredient(id_gen.next_id(), "rice", "dry");
        let id = item.id;

        kitchen.insert(StationKind::Sink, item);
        assert_eq!(kitchen.station_of(id), Some(StationKind::Sink));

        let moved = kitchen.remove(StationKind::Sink, id).expect("item present");
        kitchen.insert(StationKind::Pot, moved);

        assert_eq!(kitchen.station_of(id), Some(StationKind::Pot));
        assert!(kitchen.is_empty(StationKind::Sink));
    }

    #[test]
    fn clear_empties_the_station() {
        let mut id_gen = ItemIdGen::default();
        let mut kitchen = Kitchen::default();
        kitchen.insert(
            StationKind::Pan,
            ItemInstance::ingredient(id_gen.next_id(), "egg", "raw"),
        );
        kitchen.insert(
            StationKind::Pan,
            ItemInstance::ingredient(id_gen.next_id(), "rice", "cooked"),
        );

        let removed = kitchen.clear(StationKind::Pan);
        assert_eq!(removed.len(), 2);
        assert!(kitchen.is_empty(StationKind::Pan));
    }

    #[test]
    fn heat_pulse_refresh_and_shut_off() {
        let mut heat = HeatTracker::default();
        let pan = heat.vessel_mut(StationKind::Pan).unwrap();
        pan.pulse_on();
        pan.seconds = 12;
        assert!(pan.heating);

        pan.shut_off();
        assert!(!pan.heating);
        assert_eq!(pan.seconds, 0);

        assert!(heat.vessel_mut(StationKind::Sink).is_none());
    }
}

use bevy::prelude::*;

#[derive(States, Default, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameState {
    #[default]
    Loading,
    Running,
}

#[derive(States, Default, Debug, Clone, PartialEq, Eq, Hash)]
pub enum LoadingPhase {
    #[default]
    Assets,
    BuildCatalogs, // Turn loaded definitions into catalog resources
    Ready,
}

/// Restaurant mode: orders only spawn and tick while the restaurant is open.
#[derive(States, Default, Debug, Clone, PartialEq, Eq, Hash)]
pub enum RestaurantState {
    #[default]
    Closed,
    Open,
}

//! Asset loading pipeline: loads every catalog folder, builds the runtime
//! catalogs and hands control to the running game.

use {
    bevy::{asset::LoadedFolder, prelude::*},
    customer_assets::{CustomerCatalog, CustomerDefinition},
    disaster_assets::{DisasterCatalog, DisasterDefinition},
    ingredient_assets::{IngredientCatalog, IngredientSetDefinition},
    progression::PlayerProfile,
    progression_assets::{ChefLevelsDefinition, ProgressionConfig},
    recipe_assets::{RecipeCatalog, RecipeDefinition},
    states::{GameState, LoadingPhase},
};

#[derive(Debug, Resource)]
struct IngredientsFolderHandle(Handle<LoadedFolder>);

#[derive(Debug, Resource)]
struct RecipesFolderHandle(Handle<LoadedFolder>);

#[derive(Debug, Resource)]
struct CustomersFolderHandle(Handle<LoadedFolder>);

#[derive(Debug, Resource)]
struct DisastersFolderHandle(Handle<LoadedFolder>);

#[derive(Debug, Resource)]
struct ProgressionHandle(Handle<ChefLevelsDefinition>);

pub struct LoadingManagerPlugin;

impl Plugin for LoadingManagerPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<LoadingPhase>()
            .add_systems(Startup, start_loading)
            .add_systems(
                Update,
                check_assets_loaded
                    .run_if(in_state(GameState::Loading).and(in_state(LoadingPhase::Assets))),
            )
            .add_systems(OnEnter(LoadingPhase::BuildCatalogs), build_catalogs)
            .add_systems(OnEnter(LoadingPhase::Ready), finish_loading);
    }
}

fn start_loading(mut commands: Commands, asset_server: Res<AssetServer>) {
    info!("started loading assets");
    commands.insert_resource(IngredientsFolderHandle(
        asset_server.load_folder("ingredients"),
    ));
    commands.insert_resource(RecipesFolderHandle(asset_server.load_folder("recipes")));
    commands.insert_resource(CustomersFolderHandle(asset_server.load_folder("customers")));
    commands.insert_resource(DisastersFolderHandle(asset_server.load_folder("disasters")));
    commands.insert_resource(ProgressionHandle(
        asset_server.load("chef.progression.ron"),
    ));
}

#[allow(clippy::too_many_arguments)]
fn check_assets_loaded(
    mut next_phase: ResMut<NextState<LoadingPhase>>,
    asset_server: Res<AssetServer>,
    ingredients: Res<IngredientsFolderHandle>,
    recipes: Res<RecipesFolderHandle>,
    customers: Res<CustomersFolderHandle>,
    disasters: Res<DisastersFolderHandle>,
    progression: Res<ProgressionHandle>,
) {
    let folders_loaded = [
        ingredients.0.id().untyped(),
        recipes.0.id().untyped(),
        customers.0.id().untyped(),
        disasters.0.id().untyped(),
    ]
    .into_iter()
    .all(|id| asset_server.is_loaded_with_dependencies(id));

    if folders_loaded && asset_server.is_loaded_with_dependencies(&progression.0) {
        info!("assets loaded");
        next_phase.set(LoadingPhase::BuildCatalogs);
    }
}

/// Moves every loaded definition into its runtime catalog and seeds the
/// starter ingredients into the profile.
#[allow(clippy::too_many_arguments)]
fn build_catalogs(
    ingredient_sets: Res<Assets<IngredientSetDefinition>>,
    recipe_defs: Res<Assets<RecipeDefinition>>,
    customer_defs: Res<Assets<CustomerDefinition>>,
    disaster_defs: Res<Assets<DisasterDefinition>>,
    progression_defs: Res<Assets<ChefLevelsDefinition>>,
    progression_handle: Res<ProgressionHandle>,
    mut ingredients: ResMut<IngredientCatalog>,
    mut recipes: ResMut<RecipeCatalog>,
    mut customers: ResMut<CustomerCatalog>,
    mut disasters: ResMut<DisasterCatalog>,
    mut config: ResMut<ProgressionConfig>,
    mut profile: ResMut<PlayerProfile>,
    mut next_phase: ResMut<NextState<LoadingPhase>>,
) {
    for (_, set) in ingredient_sets.iter() {
        ingredients.insert_set(set);
    }
    for (_, def) in recipe_defs.iter() {
        recipes.insert(def.clone());
    }
    for (_, def) in customer_defs.iter() {
        customers.insert(def.clone());
    }
    for (_, def) in disaster_defs.iter() {
        disasters.insert(def.clone());
    }

    if let Some(def) = progression_defs.get(&progression_handle.0) {
        *config = ProgressionConfig::from_definition(def);
        profile.seed_starters(&config.starter_ingredients);
    } else {
        warn!("progression definition missing, keeping defaults");
    }

    info!(
        ingredients = ingredients.len(),
        recipes = recipes.len(),
        "catalogs built"
    );
    next_phase.set(LoadingPhase::Ready);
}

fn finish_loading(mut next_state: ResMut<NextState<GameState>>) {
    info!("Loading complete, transitioning to Running");
    next_state.set(GameState::Running);
}

use {
    bevy::prelude::*,
    clock::GameClockPlugin,
    customer_assets::CustomerAssetsPlugin,
    disaster_assets::DisasterAssetsPlugin,
    disasters::DisastersPlugin,
    ingredient_assets::IngredientAssetsPlugin,
    kitchen::KitchenPlugin,
    loading::LoadingManagerPlugin,
    orders::OrdersPlugin,
    progression::ProgressionPlugin,
    progression_assets::ProgressionAssetsPlugin,
    recipe_assets::RecipeAssetsPlugin,
    save_load::SaveLoadPlugin,
    states::GameState,
    system_schedule::GameSchedule,
};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .configure_sets(
                Update,
                (
                    GameSchedule::FrameStart,
                    GameSchedule::ResolveIntent,
                    GameSchedule::PerformAction,
                    GameSchedule::Effect,
                    GameSchedule::FrameEnd,
                )
                    .chain(),
            )
            .add_plugins((
                IngredientAssetsPlugin,
                RecipeAssetsPlugin,
                CustomerAssetsPlugin,
                DisasterAssetsPlugin,
                ProgressionAssetsPlugin,
            ))
            .add_plugins((
                GameClockPlugin,
                KitchenPlugin,
                ProgressionPlugin,
                OrdersPlugin,
                DisastersPlugin,
            ))
            .add_plugins((LoadingManagerPlugin, SaveLoadPlugin))
            .add_systems(Startup, setup_camera);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

//! Save/Load system for the chef profile.
//!
//! This crate provides:
//! - F5 keyboard shortcut for manual saves
//! - F9 keyboard shortcut to load the latest manual save
//! - F8 keyboard shortcut to load the autosave
//! - Automatic saves every 30 seconds
//! - Scene-based serialization using Bevy's DynamicSceneBuilder
//!
//! Only the `PlayerProfile` resource goes into save files; orders, station
//! contents and disasters are session state and start fresh.

use {
    bevy::prelude::*,
    chrono::Local,
    progression::PlayerProfile,
    progression_assets::ProgressionConfig,
    states::GameState,
    std::{fs, io::Write as _, path::Path},
};

/// Save files live under the asset root so loads can go through the
/// regular `DynamicScene` asset path.
const SAVES_DIR: &str = "assets/saves";

/// Event to trigger loading a save file.
#[derive(Event)]
pub struct LoadGame {
    is_autosave: bool,
}

/// Timer resource for automatic saves.
#[derive(Resource)]
pub struct AutosaveTimer(Timer);

impl Default for AutosaveTimer {
    fn default() -> Self {
        Self(Timer::from_seconds(30.0, TimerMode::Repeating))
    }
}

pub struct SaveLoadPlugin;

impl Plugin for SaveLoadPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AutosaveTimer>()
            .add_systems(
                Update,
                trigger_load_on_keypress.run_if(in_state(GameState::Running)),
            )
            .add_systems(
                Update,
                reseed_starters.run_if(resource_changed::<PlayerProfile>),
            )
            .add_systems(
                PostUpdate,
                execute_save.run_if(in_state(GameState::Running)),
            )
            .add_observer(execute_load)
            .add_systems(OnExit(GameState::Running), reset_autosave_timer);
    }
}

/// Exclusive system that handles manual and automatic saves.
fn execute_save(world: &mut World) {
    let mut is_autosave = false;
    let mut manual_triggered = false;

    if let Some(keyboard) = world.get_resource::<ButtonInput<KeyCode>>()
        && keyboard.just_pressed(KeyCode::F5)
    {
        info!("Manual save triggered (F5)");
        manual_triggered = true;
    }

    if manual_triggered {
        // Reset the autosave timer to avoid back-to-back saves.
        if let Some(mut timer) = world.get_resource_mut::<AutosaveTimer>() {
            timer.0.reset();
        }
    } else {
        let Some(delta) = world.get_resource::<Time>().map(|t| t.delta()) else {
            return;
        };
        let Some(mut timer) = world.get_resource_mut::<AutosaveTimer>() else {
            return;
        };
        if timer.0.tick(delta).just_finished() {
            info!("Autosave triggered");
            is_autosave = true;
        } else {
            return;
        }
    }

    let filename = if is_autosave {
        "autosave.scn.ron".to_string()
    } else {
        let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
        format!("save_{timestamp}.scn.ron")
    };

    let saves_dir = Path::new(SAVES_DIR);
    let filepath = saves_dir.join(&filename);

    if let Err(e) = fs::create_dir_all(saves_dir) {
        error!("Failed to create saves directory: {e}");
        return;
    }

    let scene = DynamicSceneBuilder::from_world(world)
        .allow_resource::<PlayerProfile>()
        .extract_resources()
        .build();

    let type_registry = world.resource::<AppTypeRegistry>().clone();
    let type_registry = type_registry.read();

    let serialized = match scene.serialize(&type_registry) {
        Ok(data) => data,
        Err(e) => {
            error!("Failed to serialize save scene: {e}");
            return;
        }
    };

    match fs::File::options()
        .write(true)
        .truncate(true)
        .create(true)
        .open(&filepath)
    {
        Ok(mut file) => {
            if let Err(e) = file.write_all(serialized.as_bytes()) {
                error!("Failed to write save file: {e}");
                return;
            }
            info!("Game saved to {}", filepath.display());
        }
        Err(e) => {
            error!("Failed to create save file: {e}");
        }
    }
}

/// Triggers a load when F9 (latest manual save) or F8 (autosave) is pressed.
fn trigger_load_on_keypress(keyboard: Res<ButtonInput<KeyCode>>, mut commands: Commands) {
    if keyboard.just_pressed(KeyCode::F9) {
        info!("Load triggered (F9)");
        commands.trigger(LoadGame { is_autosave: false });
    }

    if keyboard.just_pressed(KeyCode::F8) {
        info!("Load triggered (F8)");
        commands.trigger(LoadGame { is_autosave: true });
    }
}

/// Observer that handles the LoadGame event. The spawned dynamic scene
/// overwrites `PlayerProfile` when it applies.
fn execute_load(
    trigger: On<LoadGame>,
    asset_server: Res<AssetServer>,
    mut scene_spawner: ResMut<SceneSpawner>,
) {
    let LoadGame { is_autosave } = trigger.event();
    let saves_dir = Path::new(SAVES_DIR);

    let latest_save = if *is_autosave {
        saves_dir.join("autosave.scn.ron")
    } else {
        match find_latest_save(saves_dir) {
            Some(path) => path,
            None => {
                warn!("No save files found in saves directory");
                return;
            }
        }
    };

    info!("Loading save file: {}", latest_save.display());

    // Asset paths are relative to the asset root.
    let relative = latest_save
        .strip_prefix("assets")
        .unwrap_or(&latest_save)
        .to_string_lossy()
        .trim_start_matches('/')
        .to_string();
    let handle: Handle<DynamicScene> = asset_server.load(relative);
    scene_spawner.spawn_dynamic(handle);
}

/// Finds the most recent manual save file in the saves directory.
fn find_latest_save(saves_dir: &Path) -> Option<std::path::PathBuf> {
    let entries = fs::read_dir(saves_dir).ok()?;

    entries
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext == "ron")
        })
        .filter(|e| {
            e.path()
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with("save_"))
        })
        .max_by_key(|e| e.metadata().and_then(|m| m.modified()).ok())
        .map(|e| e.path())
}

/// Keeps the starter set merged into the profile. Runs whenever the
/// profile changes, so freshly loaded saves pick up starters that were
/// added after the save was written.
fn reseed_starters(mut profile: ResMut<PlayerProfile>, config: Option<Res<ProgressionConfig>>) {
    let Some(config) = config else {
        return;
    };
    if config.starter_ingredients.iter().all(|s| profile.is_unlocked(s)) {
        return;
    }
    profile.seed_starters(&config.starter_ingredients);
}

fn reset_autosave_timer(mut timer: ResMut<AutosaveTimer>) {
    *timer = AutosaveTimer::default();
}

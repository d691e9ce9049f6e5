use {
    bevy::{log::LogPlugin, prelude::*},
    kitchen_core::CorePlugin,
};

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins.set(LogPlugin {
                filter: "error,loading=info,\
                    kitchen=debug,\
                    orders=debug,\
                    disasters=debug,\
                    progression=debug,\
                    save_load=info"
                    .into(),
                level: bevy::log::Level::TRACE,
                ..Default::default()
            }),
        )
        .add_plugins(CorePlugin)
        .run();
}

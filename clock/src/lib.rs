//! Game clock: turns wall-clock time into discrete tick events.
//!
//! Patience decay, heat accumulation and disaster checks all run on a
//! one-second granularity; customer auto-spawning on a fifteen-second one.
//! Everything downstream observes `SecondTick` / `SpawnTick` instead of
//! reading `Time` directly, so tick-driven logic stays testable without
//! real waiting.

use {bevy::prelude::*, states::GameState, system_schedule::GameSchedule};

/// Seconds between customer auto-spawn attempts.
pub const SPAWN_INTERVAL_SECS: f32 = 15.0;

/// Fired once per simulated second while the game is running.
#[derive(Event, Debug, Default)]
pub struct SecondTick;

/// Fired on the customer auto-spawn cadence while the game is running.
#[derive(Event, Debug, Default)]
pub struct SpawnTick;

#[derive(Resource)]
pub struct ClockTimers {
    second: Timer,
    spawn: Timer,
}

impl Default for ClockTimers {
    fn default() -> Self {
        Self {
            second: Timer::from_seconds(1.0, TimerMode::Repeating),
            spawn: Timer::from_seconds(SPAWN_INTERVAL_SECS, TimerMode::Repeating),
        }
    }
}

pub struct GameClockPlugin;

impl Plugin for GameClockPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ClockTimers>().add_systems(
            Update,
            advance_clock
                .in_set(GameSchedule::FrameStart)
                .run_if(in_state(GameState::Running)),
        );
    }
}

fn advance_clock(time: Res<Time>, mut timers: ResMut<ClockTimers>, mut commands: Commands) {
    timers.second.tick(time.delta());
    timers.spawn.tick(time.delta());

    for _ in 0..timers.second.times_finished_this_tick() {
        commands.trigger(SecondTick);
    }
    for _ in 0..timers.spawn.times_finished_this_tick() {
        commands.trigger(SpawnTick);
    }
}

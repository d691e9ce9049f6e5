//! Kitchen disasters: heat-triggered emergencies with a warn, active and
//! resolve/fail lifecycle. At most one disaster runs at a time.

pub mod systems;


use bevy::prelude::*;

/// Where the disaster engine currently is. Warned and Active both count as
/// busy; no second disaster starts until the state returns to Idle.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Default)]
pub enum DisasterState {
    #[default]
    Idle,
    /// Trigger fired; the disaster goes active when the delay lapses.
    Warned {
        disaster: String,
        delay_remaining: u32,
    },
    /// Countdown running; the player must resolve before it hits zero.
    Active {
        disaster: String,
        time_remaining: u32,
    },
}

impl DisasterState {
    pub fn is_idle(&self) -> bool {
        matches!(self, DisasterState::Idle)
    }

    pub fn active_disaster(&self) -> Option<&str> {
        match self {
            DisasterState::Active { disaster, .. } => Some(disaster),
            _ => None,
        }
    }
}

/// Tunables for the random trigger. Tests pin `trigger_chance` to 0 or 1.
#[derive(Resource, Debug, Clone, Copy)]
pub struct DisasterSettings {
    pub trigger_chance: f64,
    /// Seconds between the warning and the disaster going active.
    pub warning_delay: u32,
}

impl Default for DisasterSettings {
    fn default() -> Self {
        Self {
            trigger_chance: 0.3,
            warning_delay: 2,
        }
    }
}

pub struct DisastersPlugin;

impl Plugin for DisastersPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DisasterState>()
            .init_resource::<DisasterSettings>()
            .add_observer(systems::advance_disasters)
            .add_observer(systems::resolve_disaster)
            .add_observer(systems::force_disaster);
    }
}

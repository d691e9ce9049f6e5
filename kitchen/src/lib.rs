//! The item-state transformation and station-routing engine.
//!
//! Every player action (apply a tool, move an item, clear a station)
//! arrives as an observer event, mutates the `Kitchen` resource and
//! answers with a `Notification`. Cook and Roll additionally run recipe
//! matching and, on a full match, clear the station and put a completed
//! dish on the plate.

pub mod matching;
pub mod systems;
pub mod transitions;


use {
    bevy::prelude::*,
    kitchen_events::Notification,
    kitchen_resources::{HeatTracker, ItemIdGen, Kitchen},
    system_schedule::GameSchedule,
};

/// How many notifications the log keeps around.
const NOTIFICATION_LOG_CAP: usize = 50;

/// Bounded history of player-facing messages, oldest first. The UI layer
/// drains it; tests assert on it.
#[derive(Resource, Debug, Default)]
pub struct NotificationLog {
    entries: Vec<Notification>,
}

impl NotificationLog {
    pub fn push(&mut self, notification: Notification) {
        self.entries.push(notification);
        if self.entries.len() > NOTIFICATION_LOG_CAP {
            self.entries.remove(0);
        }
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.entries.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

pub struct KitchenPlugin;

impl Plugin for KitchenPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Kitchen>()
            .init_resource::<ItemIdGen>()
            .init_resource::<HeatTracker>()
            .init_resource::<NotificationLog>()
            .add_observer(systems::handle_apply_tool)
            .add_observer(systems::handle_move_item)
            .add_observer(systems::handle_clear_station)
            .add_observer(systems::accumulate_heat)
            .add_observer(systems::record_notification)
            .add_systems(
                Update,
                systems::expire_heat_pulses.in_set(GameSchedule::FrameEnd),
            );
    }
}

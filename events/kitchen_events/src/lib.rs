use {
    bevy::prelude::*,
    kitchen_resources::{ItemId, StationKind, Tool},
};

/// Player applies a tool (or the station's intrinsic action, for pot, pan
/// and sink) to a station. Used with observers via `commands.trigger()`.
#[derive(Event, Debug)]
pub struct ApplyTool {
    pub tool: Option<Tool>,
    pub station: StationKind,
}

/// Player drags an item from one station to another.
#[derive(Event, Debug)]
pub struct MoveItem {
    pub item: ItemId,
    pub from: StationKind,
    pub to: StationKind,
}

/// Player empties a station. Also resets the vessel's heat counters.
#[derive(Event, Debug)]
pub struct ClearStation {
    pub station: StationKind,
}

/// A full recipe match was assembled and the dish placed on the plate.
#[derive(Event, Debug, Clone)]
pub struct DishCompleted {
    pub recipe_id: String,
    pub xp_reward: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Transient player-facing message. Every recoverable failure in the core
/// surfaces as one of these; nothing in the engine panics on player input.
#[derive(Event, Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Info,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

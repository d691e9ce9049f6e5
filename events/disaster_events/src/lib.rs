use bevy::prelude::*;

/// Player hits the single recovery action while a disaster is active.
#[derive(Event, Debug, Default)]
pub struct ResolveDisasterRequest;

/// Force a specific disaster to start. Exists for the catalog entries with
/// no heat trigger (and for tests); normal play goes through the heat
/// conditions.
#[derive(Event, Debug)]
pub struct TriggerDisasterRequest {
    pub disaster: String,
}

/// A trigger condition fired; the disaster goes active after a short delay.
#[derive(Event, Debug, Clone)]
pub struct DisasterWarning {
    pub disaster: String,
    pub message: String,
}

/// The countdown is running; the player must respond in time.
#[derive(Event, Debug, Clone)]
pub struct DisasterStarted {
    pub disaster: String,
    pub response_time: u32,
}

#[derive(Event, Debug, Clone)]
pub struct DisasterResolved {
    pub disaster: String,
    pub message: String,
    pub xp_reward: u32,
}

#[derive(Event, Debug, Clone)]
pub struct DisasterFailed {
    pub disaster: String,
    pub message: String,
}

use {
    crate::{DisasterSettings, DisasterState},
    bevy::prelude::*,
    clock::SecondTick,
    disaster_assets::{DisasterCatalog, Vessel},
    disaster_events::{
        DisasterFailed, DisasterResolved, DisasterStarted, DisasterWarning,
        ResolveDisasterRequest, TriggerDisasterRequest,
    },
    kitchen_events::Notification,
    kitchen_resources::HeatTracker,
    progression_events::GainXp,
};

fn vessel_seconds(heat: &HeatTracker, vessel: Vessel) -> u32 {
    match vessel {
        Vessel::Pan => heat.pan.seconds,
        Vessel::Pot => heat.pot.seconds,
    }
}

/// Drives the whole lifecycle once per second: counts active disasters
/// down, promotes warnings and checks the heat triggers while idle.
pub fn advance_disasters(
    _trigger: On<SecondTick>,
    mut commands: Commands,
    mut state: ResMut<DisasterState>,
    mut heat: ResMut<HeatTracker>,
    settings: Res<DisasterSettings>,
    catalog: Res<DisasterCatalog>,
) {
    match &mut *state {
        DisasterState::Active {
            disaster,
            time_remaining,
        } => {
            *time_remaining = time_remaining.saturating_sub(1);
            if *time_remaining > 0 {
                return;
            }
            let id = disaster.clone();
            let message = catalog
                .get(&id)
                .map_or_else(String::new, |d| d.failure_message.clone());
            warn!(disaster = %id, "disaster ran out the clock");
            heat.reset_all();
            *state = DisasterState::Idle;
            commands.trigger(Notification::error(message.clone()));
            commands.trigger(DisasterFailed {
                disaster: id,
                message,
            });
        }
        DisasterState::Warned {
            disaster,
            delay_remaining,
        } => {
            *delay_remaining = delay_remaining.saturating_sub(1);
            if *delay_remaining > 0 {
                return;
            }
            let id = disaster.clone();
            let Some(def) = catalog.get(&id) else {
                warn!(disaster = %id, "warned disaster missing from catalog");
                *state = DisasterState::Idle;
                return;
            };
            let response_time = def.response_time;
            info!(disaster = %id, response_time, "disaster active");
            *state = DisasterState::Active {
                disaster: id.clone(),
                time_remaining: response_time,
            };
            commands.trigger(Notification::error(format!("{}!", def.display_name)));
            commands.trigger(DisasterStarted {
                disaster: id,
                response_time,
            });
        }
        DisasterState::Idle => {
            check_triggers(&mut commands, &mut state, &heat, &settings, &catalog);
        }
    }
}

fn check_triggers(
    commands: &mut Commands,
    state: &mut DisasterState,
    heat: &HeatTracker,
    settings: &DisasterSettings,
    catalog: &DisasterCatalog,
) {
    for def in catalog.sorted() {
        let (Some(vessel), Some(threshold)) = (def.vessel, def.heat_threshold) else {
            continue;
        };
        if vessel_seconds(heat, vessel) <= threshold {
            continue;
        }
        if !rand::random_bool(settings.trigger_chance) {
            continue;
        }
        warn!(disaster = %def.id, "disaster trigger fired");
        *state = DisasterState::Warned {
            disaster: def.id.clone(),
            delay_remaining: settings.warning_delay,
        };
        commands.trigger(Notification::warning(def.warning_message.clone()));
        commands.trigger(DisasterWarning {
            disaster: def.id.clone(),
            message: def.warning_message.clone(),
        });
        return;
    }

    // Nothing fired; nag about vessels running hot.
    if heat.pan.seconds > 20 && heat.pan.seconds % 10 == 0 {
        commands.trigger(Notification::warning("The pan is getting very hot!"));
    }
    if heat.pot.seconds > 30 && heat.pot.seconds % 15 == 0 {
        commands.trigger(Notification::warning("The pot is boiling vigorously!"));
    }
}

/// The single recovery action. Resolving awards XP and cools everything
/// down; with no active disaster it just shrugs.
pub fn resolve_disaster(
    _trigger: On<ResolveDisasterRequest>,
    mut commands: Commands,
    mut state: ResMut<DisasterState>,
    mut heat: ResMut<HeatTracker>,
    catalog: Res<DisasterCatalog>,
) {
    let Some(id) = state.active_disaster().map(str::to_string) else {
        commands.trigger(Notification::info("Nothing needs putting out right now."));
        return;
    };
    let Some(def) = catalog.get(&id) else {
        warn!(disaster = %id, "active disaster missing from catalog");
        *state = DisasterState::Idle;
        return;
    };
    info!(disaster = %id, xp_reward = def.xp_reward, "disaster resolved");
    heat.reset_all();
    commands.trigger(Notification::info(def.success_message.clone()));
    commands.trigger(GainXp {
        amount: def.xp_reward,
        reason: format!("Handled the {}", def.display_name),
    });
    commands.trigger(DisasterResolved {
        disaster: id,
        message: def.success_message.clone(),
        xp_reward: def.xp_reward,
    });
    *state = DisasterState::Idle;
}

/// Starts a specific disaster immediately, bypassing the heat triggers.
/// Used by catalog entries without a trigger; still single-flight.
pub fn force_disaster(
    trigger: On<TriggerDisasterRequest>,
    mut commands: Commands,
    mut state: ResMut<DisasterState>,
    catalog: Res<DisasterCatalog>,
) {
    if !state.is_idle() {
        debug!("disaster already in flight, request ignored");
        return;
    }
    let id = &trigger.event().disaster;
    let Some(def) = catalog.get(id) else {
        warn!(disaster = %id, "unknown disaster requested");
        return;
    };
    info!(disaster = %id, "disaster forced");
    *state = DisasterState::Active {
        disaster: def.id.clone(),
        time_remaining: def.response_time,
    };
    commands.trigger(Notification::error(format!("{}!", def.display_name)));
    commands.trigger(DisasterStarted {
        disaster: def.id.clone(),
        response_time: def.response_time,
    });
}

use {
    crate::{
        NotificationLog, matching,
        transitions::{self, GrateOutcome, PeelOutcome},
    },
    bevy::prelude::*,
    clock::SecondTick,
    ingredient_assets::IngredientCatalog,
    kitchen_events::{ApplyTool, ClearStation, DishCompleted, MoveItem, Notification},
    kitchen_resources::{
        HeatTracker, ItemIdGen, ItemInstance, ItemKind, Kitchen, StationKind, Tool,
    },
    recipe_assets::{RecipeAction, RecipeCatalog},
};

/// Routes a tool (or intrinsic station action) to the right operation.
pub fn handle_apply_tool(
    trigger: On<ApplyTool>,
    mut commands: Commands,
    mut kitchen: ResMut<Kitchen>,
    mut heat: ResMut<HeatTracker>,
    mut id_gen: ResMut<ItemIdGen>,
    ingredients: Res<IngredientCatalog>,
    recipes: Res<RecipeCatalog>,
) {
    let event = trigger.event();
    match (event.station, event.tool) {
        (StationKind::CuttingBoard, Some(Tool::Knife)) => {
            chop(&mut commands, &mut kitchen, &ingredients);
        }
        (StationKind::CuttingBoard, Some(Tool::Peeler)) => {
            peel(&mut commands, &mut kitchen, &ingredients);
        }
        (StationKind::CuttingBoard, Some(Tool::Grater)) => {
            grate(&mut commands, &mut kitchen, &ingredients);
        }
        (StationKind::CuttingBoard, Some(Tool::RollingMat)) => {
            roll(&mut commands, &mut kitchen, &mut id_gen, &recipes);
        }
        (StationKind::MixingBowl, Some(Tool::Whisk)) => {
            mix(&mut commands, &mut kitchen, &mut id_gen, &ingredients);
        }
        (StationKind::Pot, None) => cook(
            &mut commands,
            &mut kitchen,
            &mut heat,
            &mut id_gen,
            &ingredients,
            &recipes,
            StationKind::Pot,
            RecipeAction::Boil,
        ),
        (StationKind::Pan, None) => cook(
            &mut commands,
            &mut kitchen,
            &mut heat,
            &mut id_gen,
            &ingredients,
            &recipes,
            StationKind::Pan,
            RecipeAction::Fry,
        ),
        (StationKind::Sink, None) => wash(&mut commands, &mut kitchen),
        (StationKind::CuttingBoard | StationKind::MixingBowl, None) => {
            commands.trigger(Notification::warning("Pick a tool first."));
        }
        (station, Some(tool)) => {
            debug!(?tool, ?station, "tool has no effect here");
            commands.trigger(Notification::warning("That tool doesn't work here."));
        }
        (station, None) => {
            debug!(?station, "station has no intrinsic action");
            commands.trigger(Notification::info("Nothing to do here."));
        }
    }
}

fn chop(commands: &mut Commands, kitchen: &mut Kitchen, ingredients: &IngredientCatalog) {
    if kitchen.is_empty(StationKind::CuttingBoard) {
        commands.trigger(Notification::warning("Nothing on the cutting board to chop."));
        return;
    }
    let mut advanced = 0;
    for item in kitchen.items_mut(StationKind::CuttingBoard) {
        let Some((ingredient, state)) = item.as_ingredient() else {
            continue;
        };
        let Some(def) = ingredients.get(ingredient) else {
            warn!(ingredient = %ingredient, "unknown ingredient on cutting board");
            continue;
        };
        let Some(next) = transitions::chop_target(def, state) else {
            continue;
        };
        if let ItemKind::Ingredient { state, .. } = &mut item.kind {
            *state = next;
            advanced += 1;
        }
    }
    if advanced > 0 {
        commands.trigger(Notification::info("Chop chop!"));
    } else {
        commands.trigger(Notification::info("Nothing here needs the knife."));
    }
}

fn peel(commands: &mut Commands, kitchen: &mut Kitchen, ingredients: &IngredientCatalog) {
    if kitchen.is_empty(StationKind::CuttingBoard) {
        commands.trigger(Notification::warning("Nothing on the cutting board to peel."));
        return;
    }
    let mut changed = 0;
    for item in kitchen.items_mut(StationKind::CuttingBoard) {
        let Some((ingredient, state)) = item.as_ingredient() else {
            continue;
        };
        let Some(def) = ingredients.get(ingredient) else {
            continue;
        };
        match transitions::peel_outcome(def, ingredient, state) {
            PeelOutcome::Advance(target) => {
                if let ItemKind::Ingredient { state, .. } = &mut item.kind {
                    *state = target.to_string();
                }
                item.peeled = true;
                changed += 1;
            }
            PeelOutcome::FlagOnly => {
                item.peeled = true;
                changed += 1;
            }
            PeelOutcome::Unchanged => {}
        }
    }
    if changed > 0 {
        commands.trigger(Notification::info("Peeled and ready."));
    } else {
        commands.trigger(Notification::info("Nothing here needs peeling."));
    }
}

fn grate(commands: &mut Commands, kitchen: &mut Kitchen, ingredients: &IngredientCatalog) {
    if kitchen.is_empty(StationKind::CuttingBoard) {
        commands.trigger(Notification::warning("Nothing on the cutting board to grate."));
        return;
    }
    let mut changed = 0;
    for item in kitchen.items_mut(StationKind::CuttingBoard) {
        let Some((ingredient, state)) = item.as_ingredient() else {
            continue;
        };
        let Some(def) = ingredients.get(ingredient) else {
            continue;
        };
        match transitions::grate_outcome(def, ingredient, state) {
            GrateOutcome::Advance(target) => {
                if let ItemKind::Ingredient { state, .. } = &mut item.kind {
                    *state = target.to_string();
                }
                item.grated = true;
                changed += 1;
            }
            GrateOutcome::SliceAndFlag => {
                if transitions::forward_to(def, state, "sliced")
                    && let ItemKind::Ingredient { state, .. } = &mut item.kind
                {
                    *state = "sliced".to_string();
                }
                item.grated = true;
                changed += 1;
            }
            GrateOutcome::Unchanged => {}
        }
    }
    if changed > 0 {
        commands.trigger(Notification::info("Grated fine."));
    } else {
        commands.trigger(Notification::info("The grater does nothing to this."));
    }
}

/// Whisk the bowl. Seasoning takes priority, then beating eggs, then
/// folding everything into one mixed bowl.
fn mix(
    commands: &mut Commands,
    kitchen: &mut Kitchen,
    id_gen: &mut ItemIdGen,
    ingredients: &IngredientCatalog,
) {
    if kitchen.is_empty(StationKind::MixingBowl) {
        commands.trigger(Notification::warning("The mixing bowl is empty."));
        return;
    }

    let can_reach = |ingredient: &str, state: &str| {
        ingredients.get(ingredient).is_some_and(|def| def.has_state(state))
    };

    let bowl = kitchen.items_mut(StationKind::MixingBowl);
    let rice_index = bowl.iter().position(|item| item.is_ingredient("rice"));
    let vinegar_index = bowl.iter().position(|item| item.is_ingredient("vinegar"));
    if let (Some(rice), Some(vinegar)) = (rice_index, vinegar_index)
        && can_reach("rice", "seasoned")
    {
        let cooked = bowl[rice]
            .as_ingredient()
            .is_some_and(|(_, state)| state == "cooked");
        if cooked {
            if let ItemKind::Ingredient { state, .. } = &mut bowl[rice].kind {
                *state = "seasoned".to_string();
            }
            bowl.remove(vinegar);
            commands.trigger(Notification::info("Seasoned sushi rice, glossy and sticky."));
        } else {
            commands.trigger(Notification::info("Cook the rice before seasoning it."));
        }
        return;
    }

    let mut beaten = 0;
    for item in bowl.iter_mut() {
        if item
            .as_ingredient()
            .is_some_and(|(ingredient, state)| ingredient == "egg" && state == "raw")
            && can_reach("egg", "beaten")
            && let ItemKind::Ingredient { state, .. } = &mut item.kind
        {
            *state = "beaten".to_string();
            beaten += 1;
        }
    }
    if beaten > 0 {
        commands.trigger(Notification::info("Eggs beaten until fluffy."));
        return;
    }

    let contents = kitchen.clear(StationKind::MixingBowl);
    let mixed = ItemInstance::mixed_bowl(id_gen.next_id(), contents);
    kitchen.insert(StationKind::MixingBowl, mixed);
    commands.trigger(Notification::info("Mixed it all together."));
}

#[allow(clippy::too_many_arguments)]
fn cook(
    commands: &mut Commands,
    kitchen: &mut Kitchen,
    heat: &mut HeatTracker,
    id_gen: &mut ItemIdGen,
    ingredients: &IngredientCatalog,
    recipes: &RecipeCatalog,
    vessel: StationKind,
    action: RecipeAction,
) {
    // The burner fires whether or not anything changes.
    if let Some(state) = heat.vessel_mut(vessel) {
        state.pulse_on();
    }

    if kitchen.is_empty(vessel) {
        commands.trigger(Notification::warning("There's nothing in there to cook."));
        return;
    }

    if let Some(recipe) = matching::find_full_match(kitchen.items(vessel), action, recipes) {
        let recipe = recipe.clone();
        complete_recipe(kitchen, id_gen, vessel, &recipe.id);
        commands.trigger(DishCompleted {
            recipe_id: recipe.id.clone(),
            xp_reward: recipe.xp_reward,
        });
        commands.trigger(Notification::info(format!(
            "{} is ready and plated!",
            recipe.display_name
        )));
        info!(recipe_id = %recipe.id, ?vessel, "dish completed");
        return;
    }

    let mut changed = 0;
    for item in kitchen.items_mut(vessel) {
        let Some((ingredient, state)) = item.as_ingredient() else {
            continue;
        };
        let Some(def) = ingredients.get(ingredient) else {
            warn!(ingredient = %ingredient, "unknown ingredient in vessel");
            continue;
        };
        let Some(next) = transitions::cook_target(def, ingredient, state, vessel) else {
            continue;
        };
        if let ItemKind::Ingredient { state, .. } = &mut item.kind {
            *state = next;
            changed += 1;
        }
    }

    if let Some(hint) = matching::near_miss_hint(kitchen.items(vessel), action, recipes) {
        commands.trigger(Notification::info(hint));
    } else if changed > 0 {
        commands.trigger(Notification::info("Sizzling away."));
    } else {
        commands.trigger(Notification::info("It's already done; more heat won't help."));
    }
}

/// Rolling mat on the cutting board. A full Roll recipe match plates a
/// dish; otherwise a freestyle roll needs nori, rice and a filling.
fn roll(
    commands: &mut Commands,
    kitchen: &mut Kitchen,
    id_gen: &mut ItemIdGen,
    recipes: &RecipeCatalog,
) {
    if kitchen.is_empty(StationKind::CuttingBoard) {
        commands.trigger(Notification::warning("Nothing on the cutting board to roll."));
        return;
    }

    if let Some(recipe) =
        matching::find_full_match(kitchen.items(StationKind::CuttingBoard), RecipeAction::Roll, recipes)
    {
        let recipe = recipe.clone();
        complete_recipe(kitchen, id_gen, StationKind::CuttingBoard, &recipe.id);
        commands.trigger(DishCompleted {
            recipe_id: recipe.id.clone(),
            xp_reward: recipe.xp_reward,
        });
        commands.trigger(Notification::info(format!(
            "{} rolled and plated!",
            recipe.display_name
        )));
        info!(recipe_id = %recipe.id, "dish completed");
        return;
    }

    let board = kitchen.items(StationKind::CuttingBoard);
    if !board.iter().any(|item| item.is_ingredient("nori")) {
        commands.trigger(Notification::warning("You need nori to roll sushi."));
        return;
    }
    let rice_state = board.iter().find_map(|item| {
        item.as_ingredient()
            .filter(|(ingredient, _)| *ingredient == "rice")
            .map(|(_, state)| state.to_string())
    });
    let Some(rice_state) = rice_state else {
        commands.trigger(Notification::warning("You need rice to roll sushi."));
        return;
    };
    let filling = board.iter().find_map(|item| {
        item.as_ingredient()
            .filter(|(ingredient, _)| transitions::ROLL_FILLINGS.contains(ingredient))
            .map(|(ingredient, state)| (ingredient.to_string(), state.to_string()))
    });
    let Some((filling, filling_state)) = filling else {
        commands.trigger(Notification::warning(
            "Add a filling: salmon, avocado, cucumber or shrimp.",
        ));
        return;
    };

    if rice_state != "seasoned" {
        commands.trigger(Notification::info("Tip: season the rice for a proper roll."));
    }
    if filling == "salmon" && filling_state != "sliced" {
        commands.trigger(Notification::info("Tip: slice the salmon before rolling."));
    }

    let contents = kitchen.clear(StationKind::CuttingBoard);
    let sushi = ItemInstance::sushi_roll(id_gen.next_id(), contents);
    kitchen.insert(StationKind::CuttingBoard, sushi);
    commands.trigger(Notification::info(format!("Rolled a {filling} sushi roll.")));
}

fn wash(commands: &mut Commands, kitchen: &mut Kitchen) {
    if kitchen.is_empty(StationKind::Sink) {
        commands.trigger(Notification::warning("The sink is empty."));
        return;
    }
    let mut changed = 0;
    for item in kitchen.items_mut(StationKind::Sink) {
        let Some((ingredient, state)) = item.as_ingredient() else {
            continue;
        };
        if ingredient == "rice" && state == "dry" {
            if let ItemKind::Ingredient { state, .. } = &mut item.kind {
                *state = "washed".to_string();
                changed += 1;
            }
        } else if transitions::WASH_FLAG_ONLY.contains(&ingredient) && !item.washed {
            item.washed = true;
            changed += 1;
        }
    }
    if changed > 0 {
        commands.trigger(Notification::info("Rinsed clean."));
    } else {
        commands.trigger(Notification::info("Already clean."));
    }
}

/// Clears the station and drops a finished dish on the plate.
fn complete_recipe(
    kitchen: &mut Kitchen,
    id_gen: &mut ItemIdGen,
    station: StationKind,
    recipe_id: &str,
) {
    let consumed = kitchen.clear(station);
    debug!(recipe_id = %recipe_id, consumed = consumed.len(), "recipe consumed station contents");
    let dish = ItemInstance::completed_dish(id_gen.next_id(), recipe_id);
    kitchen.insert(StationKind::Plate, dish);
}

pub fn handle_move_item(
    trigger: On<MoveItem>,
    mut commands: Commands,
    mut kitchen: ResMut<Kitchen>,
    mut id_gen: ResMut<ItemIdGen>,
) {
    let event = trigger.event();
    let Some(item) = kitchen.find(event.from, event.item) else {
        warn!(item = ?event.item, from = ?event.from, "move requested for missing item");
        commands.trigger(Notification::warning("That item isn't there anymore."));
        return;
    };

    if event.to == StationKind::CuttingBoard
        && item.as_ingredient().is_some_and(|(_, state)| state == "liquid")
    {
        commands.trigger(Notification::warning(
            "Liquids would just run off the cutting board.",
        ));
        return;
    }

    let Some(mut item) = kitchen.remove(event.from, event.item) else {
        return;
    };
    // Composites get a fresh identity at their destination.
    if item.is_composite() {
        item.id = id_gen.next_id();
    }
    debug!(item = ?item.id, from = ?event.from, to = ?event.to, "item moved");
    kitchen.insert(event.to, item);
}

pub fn handle_clear_station(
    trigger: On<ClearStation>,
    mut commands: Commands,
    mut kitchen: ResMut<Kitchen>,
    mut heat: ResMut<HeatTracker>,
) {
    let station = trigger.event().station;
    let removed = kitchen.clear(station);
    if let Some(state) = heat.vessel_mut(station) {
        state.shut_off();
    }
    debug!(?station, removed = removed.len(), "station cleared");
    commands.trigger(Notification::info("Station cleared."));
}

/// Appends every notification to the bounded log.
pub fn record_notification(trigger: On<Notification>, mut log: ResMut<NotificationLog>) {
    let notification = trigger.event();
    debug!(severity = ?notification.severity, message = %notification.message, "notification");
    log.push(notification.clone());
}

/// Counts sustained-heat seconds while a vessel is heating.
pub fn accumulate_heat(_trigger: On<SecondTick>, mut heat: ResMut<HeatTracker>) {
    for vessel in [StationKind::Pan, StationKind::Pot] {
        if let Some(state) = heat.vessel_mut(vessel)
            && state.heating
        {
            state.seconds += 1;
        }
    }
}

/// Lets heat lapse once no cook action has refreshed the pulse.
pub fn expire_heat_pulses(time: Res<Time>, mut heat: ResMut<HeatTracker>) {
    for vessel in [StationKind::Pan, StationKind::Pot] {
        let Some(state) = heat.vessel_mut(vessel) else {
            continue;
        };
        if !state.heating {
            continue;
        }
        state.pulse.tick(time.delta());
        if state.pulse.is_finished() {
            state.shut_off();
        }
    }
}

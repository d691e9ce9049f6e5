//! Per-tool state transition rules.
//!
//! All transitions are forward-only along the ingredient's ordered state
//! list; a target is only returned when the definition actually has it.

use {ingredient_assets::IngredientDefinition, kitchen_resources::StationKind};

/// States the knife can advance an item into, searched in list order past
/// the current state.
pub const CHOP_TARGETS: &[&str] = &["sliced", "diced", "minced", "peeled", "chopped", "shredded"];

/// States that count as already cooked for the general cook rule.
pub const COOKED_FAMILY: &[&str] = &["cooked", "caramelized", "fried", "boiled"];

/// Ingredients accepted as the filling of a hand-rolled sushi roll.
pub const ROLL_FILLINGS: &[&str] = &["salmon", "avocado", "cucumber", "shrimp"];

/// Ingredients where washing sets the cosmetic flag instead of a state.
pub const WASH_FLAG_ONLY: &[&str] = &["cucumber", "avocado", "ginger", "onion", "garlic"];

/// Next state the knife would produce, if any.
pub fn chop_target(def: &IngredientDefinition, state: &str) -> Option<String> {
    let current = def.state_index(state)?;
    def.states
        .iter()
        .skip(current + 1)
        .find(|s| CHOP_TARGETS.contains(&s.as_str()))
        .cloned()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeelOutcome {
    /// State changes and the peeled flag is set.
    Advance(&'static str),
    /// Only the peeled flag is set.
    FlagOnly,
    Unchanged,
}

pub fn peel_outcome(def: &IngredientDefinition, ingredient: &str, state: &str) -> PeelOutcome {
    let advance = |target: &'static str| {
        if def.has_state(target) {
            PeelOutcome::Advance(target)
        } else {
            PeelOutcome::Unchanged
        }
    };
    match (ingredient, state) {
        ("shrimp", "raw") | ("ginger", "whole") => advance("peeled"),
        // Avocado skips straight past peeling once the skin is off.
        ("avocado", "whole") => advance("sliced"),
        ("cucumber", "whole") => PeelOutcome::FlagOnly,
        _ => PeelOutcome::Unchanged,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrateOutcome {
    Advance(&'static str),
    /// Cucumber ribbons: advance to sliced (if not already past it) and set
    /// the grated flag.
    SliceAndFlag,
    Unchanged,
}

pub fn grate_outcome(def: &IngredientDefinition, ingredient: &str, state: &str) -> GrateOutcome {
    match ingredient {
        "ginger" | "garlic" if forward_to(def, state, "minced") => GrateOutcome::Advance("minced"),
        "cucumber" => GrateOutcome::SliceAndFlag,
        _ => GrateOutcome::Unchanged,
    }
}

/// Next state after cooking in the given vessel, if any.
pub fn cook_target(
    def: &IngredientDefinition,
    ingredient: &str,
    state: &str,
    vessel: StationKind,
) -> Option<String> {
    let target = match (ingredient, state) {
        ("rice", "dry" | "washed") => "cooked",
        ("egg", "raw") if vessel == StationKind::Pot => "boiled",
        ("egg", "raw") => "cooked",
        ("onion", "diced") => "caramelized",
        ("garlic", "minced") => "fried",
        _ if !COOKED_FAMILY.contains(&state) => "cooked",
        _ => return None,
    };
    def.has_state(target).then(|| target.to_string())
}

/// Whether `target` lies strictly ahead of `state` in the state list.
pub fn forward_to(def: &IngredientDefinition, state: &str, target: &str) -> bool {
    match (def.state_index(state), def.state_index(target)) {
        (Some(current), Some(goal)) => goal > current,
        _ => false,
    }
}

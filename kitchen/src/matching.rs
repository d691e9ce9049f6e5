//! Recipe matching over the contents of a station.
//!
//! Each requirement must be satisfied by a distinct item; two requirements
//! never consume the same physical item. Catalog iteration is id-sorted so
//! ties resolve the same way every run.

use {
    kitchen_resources::ItemInstance,
    recipe_assets::{RecipeAction, RecipeCatalog, RecipeDefinition},
};

/// First recipe (in id order) whose action matches and whose requirements
/// are all satisfied by distinct items.
pub fn find_full_match<'a>(
    items: &[ItemInstance],
    action: RecipeAction,
    catalog: &'a RecipeCatalog,
) -> Option<&'a RecipeDefinition> {
    catalog
        .sorted()
        .into_iter()
        .find(|recipe| recipe.action == action && satisfied_count(items, recipe) == recipe.required.len())
}

/// How many requirements an injective assignment of items can cover.
fn satisfied_count(items: &[ItemInstance], recipe: &RecipeDefinition) -> usize {
    let mut used = vec![false; items.len()];
    recipe
        .required
        .iter()
        .filter(|req| {
            items.iter().enumerate().any(|(i, item)| {
                if used[i] {
                    return false;
                }
                let Some((ingredient, state)) = item.as_ingredient() else {
                    return false;
                };
                if ingredient == req.ingredient && state == req.state {
                    used[i] = true;
                    true
                } else {
                    false
                }
            })
        })
        .count()
}

/// Guidance toward the closest recipe for this action, if the station holds
/// at least one of its required ingredient types.
///
/// Picks the recipe with the most requirements already satisfied and names
/// the first unmet one, distinguishing wrong-state from missing entirely.
pub fn near_miss_hint(
    items: &[ItemInstance],
    action: RecipeAction,
    catalog: &RecipeCatalog,
) -> Option<String> {
    let mut best: Option<(usize, String)> = None;
    for recipe in catalog.sorted() {
        if recipe.action != action {
            continue;
        }
        let relevant = recipe.required.iter().any(|req| {
            items
                .iter()
                .any(|item| item.is_ingredient(&req.ingredient))
        });
        if !relevant {
            continue;
        }
        let satisfied = satisfied_count(items, recipe);
        if satisfied == recipe.required.len() {
            continue;
        }
        let Some(advice) = first_unmet(items, recipe) else {
            continue;
        };
        let hint = format!("Almost a {}! {advice}", recipe.display_name);
        if best.as_ref().is_none_or(|(count, _)| satisfied > *count) {
            best = Some((satisfied, hint));
        }
    }
    best.map(|(_, hint)| hint)
}

fn first_unmet(items: &[ItemInstance], recipe: &RecipeDefinition) -> Option<String> {
    for req in &recipe.required {
        let exact = items.iter().any(|item| {
            item.as_ingredient()
                .is_some_and(|(ingredient, state)| ingredient == req.ingredient && state == req.state)
        });
        if exact {
            continue;
        }
        let wrong_state = items.iter().find_map(|item| {
            item.as_ingredient()
                .filter(|(ingredient, _)| *ingredient == req.ingredient)
                .map(|(_, state)| state.to_string())
        });
        return Some(match wrong_state {
            Some(actual) => format!(
                "The {} needs to be {}, not {actual}.",
                req.ingredient, req.state
            ),
            None => format!("Still missing {} ({}).", req.ingredient, req.state),
        });
    }
    None
}

use std::collections::BTreeSet;

use rand::{Rng, seq::IndexedRandom};

use crate::{Equipment, Exercise, MuscleGroup, SubGroup, catalog};

/// Chooses one exercise for a muscle group, relaxing constraints until a
/// choice can be made: first only equipment-matching exercises that have not
/// been performed recently are considered, then equipment-matching ones, then
/// the whole catalog slot. `None` is only returned for an empty slot.
#[must_use]
pub fn select_exercise(
    muscle_group: MuscleGroup,
    sub_group: SubGroup,
    equipment: &BTreeSet<Equipment>,
    recent: &BTreeSet<&str>,
    rng: &mut impl Rng,
) -> Option<&'static Exercise> {
    let slot = catalog::exercises(muscle_group, sub_group);

    let fresh = slot
        .iter()
        .filter(|e| equipment.contains(&e.equipment) && !recent.contains(e.name))
        .collect::<Vec<_>>();
    if let Some(exercise) = fresh.choose(rng).copied() {
        return Some(exercise);
    }

    let matching = slot
        .iter()
        .filter(|e| equipment.contains(&e.equipment))
        .collect::<Vec<_>>();
    if let Some(exercise) = matching.choose(rng).copied() {
        log::debug!("repeating a recently performed exercise for {muscle_group}/{sub_group}");
        return Some(exercise);
    }

    if let Some(exercise) = slot.choose(rng) {
        log::warn!("ignoring equipment constraint for {muscle_group}/{sub_group}");
        return Some(exercise);
    }

    None
}

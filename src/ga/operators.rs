//! Genetic operators: crossover with repair, and mutation.
//!
//! Both operators work on whole [`Schedule`]s. Naive splicing of two
//! parents can double-book a slot, repeat a workshop, or overfill a
//! session, so every spliced row passes through the
//! [`ensure_valid_sessions`] repair before it is recorded — no
//! incoherent state ever survives into the population. Mutation swaps a
//! booked workshop for a different preference and only commits when the
//! swap re-validates.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use crate::models::{Camper, Schedule};

/// Recombines two parents at 1–2 cut points in the slot sequence.
///
/// For every camper, each child row alternates parent segments at the
/// cut points, then [`ensure_valid_sessions`] re-validates the spliced
/// row against the child's own fresh booking table. Returns two
/// children.
pub fn crossover<R: Rng>(
    campers: &[Camper],
    parent1: &Schedule,
    parent2: &Schedule,
    rng: &mut R,
) -> (Schedule, Schedule) {
    let policy = parent1.policy().clone();
    let slots = policy.slot_count;

    // 1 or 2 interior cut points, as the slot count allows.
    let mut interior: Vec<usize> = (1..slots).collect();
    interior.shuffle(rng);
    let wanted = if slots > 2 && rng.random_bool(0.5) { 2 } else { 1 };
    let mut cuts: Vec<usize> = interior.into_iter().take(wanted).collect();
    cuts.sort_unstable();

    let mut child1 = Schedule::new(policy.clone());
    let mut child2 = Schedule::new(policy);

    for camper in campers {
        let empty = vec![None; slots];
        let row1 = parent1.row(&camper.id).unwrap_or(&empty);
        let row2 = parent2.row(&camper.id).unwrap_or(&empty);

        let mut spliced1 = Vec::with_capacity(slots);
        let mut spliced2 = Vec::with_capacity(slots);
        for slot in 0..slots {
            // Segment index = number of cut points at or before this slot.
            let segment = cuts.iter().filter(|&&c| c <= slot).count();
            if segment % 2 == 0 {
                spliced1.push(row1[slot].clone());
                spliced2.push(row2[slot].clone());
            } else {
                spliced1.push(row2[slot].clone());
                spliced2.push(row1[slot].clone());
            }
        }

        ensure_valid_sessions(&mut child1, camper, &spliced1);
        ensure_valid_sessions(&mut child2, camper, &spliced2);
    }

    (child1, child2)
}

/// Records a spliced row into `child`, keeping only entries that
/// validate against the child's own booking table.
///
/// Duplicate workshops, taken slots, full sessions, cohort mismatches
/// and ceiling breaches are all demoted to the sentinel; afterwards the
/// child's booking table exactly reflects its rows.
pub fn ensure_valid_sessions(child: &mut Schedule, camper: &Camper, desired: &[Option<String>]) {
    child.register_camper(&camper.id);
    for (slot, entry) in desired.iter().enumerate() {
        if let Some(workshop) = entry {
            if child.can_assign(&camper.id, camper.age_group, workshop, slot) {
                child.add_booking(&camper.id, camper.age_group, workshop, slot);
            }
        }
    }
}

/// Mutates one camper's schedule in 1–2 slots.
///
/// Each chosen slot tries to swap its workshop for a different
/// preference of the same camper. The swap is atomic: the old booking
/// is removed first, the replacement is validated against the vacated
/// state, and on failure the old booking is restored unchanged.
pub fn mutate<R: Rng>(campers: &[Camper], schedule: &mut Schedule, rng: &mut R) {
    let Some(camper) = campers.choose(rng) else {
        return;
    };
    let slots = schedule.policy().slot_count;
    if slots == 0 {
        return;
    }

    let mut slot_order: Vec<usize> = (0..slots).collect();
    slot_order.shuffle(rng);
    let count = if slots > 1 && rng.random_bool(0.5) { 2 } else { 1 };

    for &slot in slot_order.iter().take(count) {
        let current = schedule
            .row(&camper.id)
            .and_then(|row| row[slot].clone());

        let alternatives: Vec<&String> = camper
            .preferences
            .iter()
            .filter(|w| current.as_deref() != Some(w.as_str()))
            .collect();
        let Some(&replacement) = alternatives.choose(rng) else {
            continue;
        };

        if let Some(old) = &current {
            schedule.remove_booking(&camper.id, camper.age_group, old, slot);
        }
        if schedule.can_assign(&camper.id, camper.age_group, replacement, slot) {
            schedule.add_booking(&camper.id, camper.age_group, replacement, slot);
        } else if let Some(old) = &current {
            // Swap failed: the vacated seat is still free, put it back.
            schedule.add_booking(&camper.id, camper.age_group, old, slot);
        }
    }
}

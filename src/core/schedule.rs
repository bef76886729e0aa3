use crate::models::TimeSlot;

/// Hours shared by two availability windows
///
/// Windows on different days never overlap. Touching windows
/// (one ends when the other starts) share zero hours.
#[inline]
pub fn slot_overlap_hours(a: &TimeSlot, b: &TimeSlot) -> f64 {
    if a.day != b.day {
        return 0.0;
    }

    let overlap_start = a.start_hour.max(b.start_hour);
    let overlap_end = a.end_hour.min(b.end_hour);

    (overlap_end - overlap_start).max(0.0)
}

/// Total overlap across every (student slot, mentor slot) pair
///
/// Overlapping slots on the same side are not merged, so a student listing
/// the same window twice counts it twice.
pub fn total_overlap_hours(student_slots: &[TimeSlot], mentor_slots: &[TimeSlot]) -> f64 {
    student_slots
        .iter()
        .flat_map(|s| mentor_slots.iter().map(move |m| slot_overlap_hours(s, m)))
        .sum()
}

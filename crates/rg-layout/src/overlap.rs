//! Maximum simultaneous overlap (clique number of the interval graph).

use rg_core::ScheduleItem;

/// Largest number of items active at a single instant.
///
/// Intervals are half-open, so at a shared instant ends are processed before
/// starts.  Zero-width and reversed items are never active and do not count.
pub fn max_overlap(items: &[ScheduleItem]) -> usize {
    // (minute, delta): -1 sorts before +1 at the same minute.
    let mut events: Vec<(i32, i8)> = items
        .iter()
        .filter(|i| i.start_minutes < i.end_minutes)
        .flat_map(|i| [(i.start_minutes, 1), (i.end_minutes, -1)])
        .collect();
    events.sort_unstable();

    let mut active: i64 = 0;
    let mut peak: i64 = 0;
    for (_, delta) in events {
        active += delta as i64;
        peak = peak.max(active);
    }
    peak as usize
}

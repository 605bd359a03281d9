//! Tick auto-skipping.
//!
//! When an axis cannot show every tick label without overlap, the selector
//! keeps an evenly spread subset. Major ticks act as anchors: the sequence is
//! cut into segments at each major and every segment is thinned on its own,
//! so minors stay evenly spaced between the majors that bound them.

use tracing::{debug, trace};

use crate::core::math::{even_spacing, factorize, round_half_up};
use crate::core::{AxisGeometry, MajorTick};

use super::TickOptions;

/// Returns the ticks that fit on the axis, in their original order.
#[must_use]
pub fn select_visible_ticks<T: MajorTick + Clone>(
    geometry: AxisGeometry,
    options: TickOptions,
    ticks: &[T],
) -> Vec<T> {
    select_visible_indices(geometry, options, ticks)
        .into_iter()
        .map(|index| ticks[index].clone())
        .collect()
}

/// Same selection as [`select_visible_ticks`], reported as ascending
/// positions into `ticks`.
#[must_use]
pub fn select_visible_indices<T: MajorTick>(
    geometry: AxisGeometry,
    options: TickOptions,
    ticks: &[T],
) -> Vec<usize> {
    if !options.auto_skip {
        return (0..ticks.len()).collect();
    }

    let capacity = geometry.capacity();
    let limit = options.resolve_limit(capacity);
    trace!(
        capacity,
        limit,
        ticks = ticks.len(),
        "resolved auto-skip tick limit"
    );
    select_indices_with_limit(ticks, limit, options.major_enabled)
}

/// Selection against an already resolved tick limit.
#[must_use]
pub fn select_indices_with_limit<T: MajorTick>(
    ticks: &[T],
    limit: usize,
    major_enabled: bool,
) -> Vec<usize> {
    if ticks.is_empty() || limit == 0 {
        return Vec::new();
    }

    let majors = if major_enabled {
        major_indices(ticks)
    } else {
        Vec::new()
    };

    if majors.len() > limit {
        debug!(
            majors = majors.len(),
            limit, "too many major ticks, decimating majors"
        );
        return skip_majors(&majors, limit);
    }

    let spacing = calculate_spacing(&majors, ticks.len(), limit);
    trace!(spacing, majors = majors.len(), "auto-skip spacing");

    let (Some(&first), Some(&last)) = (majors.first(), majors.last()) else {
        let mut selected = Vec::with_capacity(limit.min(ticks.len()));
        skip(&mut selected, ticks.len(), spacing, Segment::open());
        debug!(kept = selected.len(), ticks = ticks.len(), "uniform auto-skip");
        return selected;
    };

    let average_major_spacing = (majors.len() > 1).then(|| {
        let span = (last - first) as f64 / (majors.len() - 1) as f64;
        round_half_up(span) as usize
    });

    let mut selected = Vec::with_capacity(limit.min(ticks.len()));
    let leading = match average_major_spacing {
        Some(average) => Segment::bounded(to_signed(first) - to_signed(average), first),
        None => Segment::bounded(0, first),
    };
    skip(&mut selected, ticks.len(), spacing, leading);
    for pair in majors.windows(2) {
        skip(
            &mut selected,
            ticks.len(),
            spacing,
            Segment::bounded(to_signed(pair[0]), pair[1]),
        );
    }
    let trailing_end = average_major_spacing.map_or(ticks.len(), |average| last + average);
    skip(
        &mut selected,
        ticks.len(),
        spacing,
        Segment::bounded(to_signed(last), trailing_end),
    );

    if selected.len() > limit {
        // Dense clusters of majors can push segment rounding one pick over.
        debug!(
            kept = selected.len(),
            limit, "segmented auto-skip overflowed, keeping majors only"
        );
        return majors;
    }

    debug!(
        kept = selected.len(),
        majors = majors.len(),
        ticks = ticks.len(),
        "segmented auto-skip"
    );
    selected
}

/// Range of raw positions thinned in one pass. `start` may be negative for
/// the segment ahead of the first major, which is laid out as if it began a
/// full major interval earlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Segment {
    start: i64,
    end: Option<usize>,
}

impl Segment {
    fn open() -> Self {
        Self {
            start: 0,
            end: None,
        }
    }

    fn bounded(start: i64, end: usize) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    /// Bound used to even out the spacing. An end at index zero only occurs
    /// ahead of a major sitting at the very first tick and keeps the raw
    /// spacing.
    fn spacing_bound(self) -> Option<usize> {
        self.end.filter(|end| *end > 0)
    }
}

fn to_signed(index: usize) -> i64 {
    i64::try_from(index).unwrap_or(i64::MAX)
}

fn major_indices<T: MajorTick>(ticks: &[T]) -> Vec<usize> {
    ticks
        .iter()
        .enumerate()
        .filter_map(|(index, tick)| tick.is_major().then_some(index))
        .collect()
}

/// Raw positions to advance per kept tick. Evenly spaced majors get a
/// spacing that divides their interval into whole chunks when one exists.
fn calculate_spacing(majors: &[usize], tick_count: usize, limit: usize) -> f64 {
    let raw = tick_count as f64 / limit as f64;
    let fallback = raw.max(1.0);

    let Some(major_spacing) = even_spacing(majors) else {
        return fallback;
    };

    let divisors = factorize(major_spacing);
    divisors
        .split_last()
        .and_then(|(_, proper)| proper.iter().copied().find(|divisor| *divisor as f64 > raw))
        .map_or(fallback, |divisor| divisor as f64)
}

fn skip_majors(majors: &[usize], limit: usize) -> Vec<usize> {
    let step = majors.len().div_ceil(limit);
    majors.iter().copied().step_by(step).collect()
}

fn skip(selected: &mut Vec<usize>, tick_count: usize, spacing: f64, segment: Segment) {
    let start = segment.start;
    let end = segment.end.map_or(tick_count, |end| end.min(tick_count));

    let mut spacing = spacing.ceil();
    if let Some(bound) = segment.spacing_bound() {
        let length = (to_signed(bound) - start) as f64;
        spacing = length / (length / spacing).floor();
    }

    let position = |count: usize| round_half_up(start as f64 + count as f64 * spacing);
    let mut count = 0usize;
    let mut next = start as f64;
    while next < 0.0 {
        count += 1;
        next = position(count);
    }

    // A segment shorter than one spacing has infinite spacing and keeps only
    // its first position.
    let first = usize::try_from(start.max(0)).unwrap_or(usize::MAX);
    for index in first..end {
        if index as f64 == next {
            selected.push(index);
            count += 1;
            next = position(count);
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::{Segment, calculate_spacing, select_indices_with_limit, skip, skip_majors};
    use crate::core::Tick;

    fn ticks_with_majors(count: usize, majors: &[usize]) -> Vec<Tick<usize>> {
        (0..count)
            .map(|index| Tick {
                value: index,
                major: majors.contains(&index),
            })
            .collect()
    }

    #[test]
    fn spacing_prefers_divisor_of_even_major_interval() {
        // raw spacing 2.4, interval 12 -> divisors 1,2,3,4,6 -> 3
        assert_relative_eq!(calculate_spacing(&[0, 12, 24], 24, 10), 3.0);
    }

    #[test]
    fn spacing_never_uses_full_major_interval() {
        assert_relative_eq!(calculate_spacing(&[0, 10, 20, 30, 40], 50, 5), 10.0);
        assert_relative_eq!(calculate_spacing(&[0, 7, 14], 21, 2), 10.5);
    }

    #[test]
    fn spacing_falls_back_for_uneven_or_missing_majors() {
        assert_relative_eq!(calculate_spacing(&[0, 5, 15], 20, 4), 5.0);
        assert_relative_eq!(calculate_spacing(&[], 5, 10), 1.0);
        assert_relative_eq!(calculate_spacing(&[4], 30, 4), 7.5);
    }

    #[test]
    fn skip_majors_keeps_every_nth_major() {
        assert_eq!(skip_majors(&[0, 2, 4, 6, 8, 10, 12, 14, 16, 18], 3), vec![0, 8, 16]);
        assert_eq!(skip_majors(&[1, 3, 5], 2), vec![1, 5]);
    }

    #[test]
    fn open_segment_rounds_fractional_spacing_up() {
        let mut selected = Vec::new();
        skip(&mut selected, 10, 2.5, Segment::open());
        assert_eq!(selected, vec![0, 3, 6, 9]);
    }

    #[test]
    fn bounded_segment_spreads_remainder_evenly() {
        let mut selected = Vec::new();
        // length 15 with spacing 7 -> two chunks of 7.5
        skip(&mut selected, 20, 7.0, Segment::bounded(5, 20));
        assert_eq!(selected, vec![5, 13]);
    }

    #[test]
    fn leading_segment_with_negative_start_aligns_to_grid() {
        let mut selected = Vec::new();
        skip(&mut selected, 20, 3.0, Segment::bounded(-4, 8));
        assert_eq!(selected, vec![2, 5]);
    }

    #[test]
    fn leading_segment_ending_at_zero_keeps_raw_spacing() {
        let mut selected = Vec::new();
        skip(&mut selected, 20, 4.0, Segment::bounded(-6, 0));
        assert!(selected.is_empty());
    }

    #[test]
    fn short_segment_keeps_only_its_start() {
        let mut selected = Vec::new();
        skip(&mut selected, 20, 5.0, Segment::bounded(0, 3));
        assert_eq!(selected, vec![0]);
    }

    #[test]
    fn clustered_majors_fall_back_to_majors_only() {
        let ticks = ticks_with_majors(30, &[0, 1, 29]);
        let selected = select_indices_with_limit(&ticks, 3, true);
        assert_eq!(selected, vec![0, 1, 29]);
    }

    #[test]
    fn single_major_splits_sequence_in_two_segments() {
        let ticks = ticks_with_majors(20, &[5]);
        let selected = select_indices_with_limit(&ticks, 3, true);
        assert_eq!(selected, vec![0, 5, 13]);
    }

    #[test]
    fn zero_limit_keeps_nothing() {
        let ticks = ticks_with_majors(10, &[0, 5]);
        assert!(select_indices_with_limit(&ticks, 0, true).is_empty());
    }
}

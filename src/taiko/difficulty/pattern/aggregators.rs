use std::ops::Range;

use crate::taiko::difficulty::{
    object::TaikoDifficultyObject,
    pattern::{HasInterval, Pattern, Repetition},
};

/// Splits the given range of objects into maximal runs of the same color.
pub fn mono_streaks(objects: &[TaikoDifficultyObject], range: Range<usize>) -> Vec<Range<usize>> {
    let mut streaks = Vec::new();
    let Some(slice) = objects.get(range.clone()) else {
        return streaks;
    };

    let mut start = range.start;

    for (i, pair) in slice.windows(2).enumerate() {
        if pair[0].hit_type != pair[1].hit_type {
            let end = range.start + i + 1;
            streaks.push(start..end);
            start = end;
        }
    }

    if start < range.end {
        streaks.push(start..range.end);
    }

    streaks
}

/// Groups items whose intervals are equal within a margin of error.
#[derive(Copy, Clone, Debug)]
pub struct RhythmAggregator {
    margin_of_error: f64,
}

impl RhythmAggregator {
    pub const fn new(margin_of_error: f64) -> Self {
        Self { margin_of_error }
    }

    fn is_flat<T: HasInterval>(&self, curr: &T, next: &T) -> bool {
        (curr.interval() - next.interval()).abs() <= self.margin_of_error
    }

    /// Partitions all items into consecutive groups of flat rhythm.
    pub fn group<T: HasInterval>(&self, items: &[T]) -> Vec<Range<usize>> {
        let mut groups = Vec::new();
        let mut i = 0;

        while i < items.len() {
            let start = i;
            i = self.next_group_end(items, start);
            groups.push(start..i);
        }

        groups
    }

    fn next_group_end<T: HasInterval>(&self, items: &[T], start: usize) -> usize {
        let n = items.len();

        // * The first item always belongs to the group
        let mut i = start + 1;

        while i + 1 < n {
            if !self.is_flat(&items[i], &items[i + 1]) {
                // * The edge item belongs to the group with the smaller interval
                if items[i + 1].interval() > items[i].interval() + self.margin_of_error {
                    i += 1;
                }

                return i;
            }

            i += 1;
        }

        // * Include the final item if it continues the rhythm
        if i < n && n > 2 && self.is_flat(&items[n - 1], &items[n - 2]) {
            i += 1;
        }

        i
    }
}

/// Groups consecutive items for which `is_repetition` holds between each
/// item and its predecessor.
pub fn repetitions<T, F>(items: &[T], is_repetition: F) -> Vec<Range<usize>>
where
    F: Fn(&T, &T) -> bool,
{
    let mut groups = Vec::new();
    let mut start = 0;

    for (i, pair) in items.windows(2).enumerate() {
        if !is_repetition(&pair[0], &pair[1]) {
            groups.push(start..i + 1);
            start = i + 1;
        }
    }

    if start < items.len() {
        groups.push(start..items.len());
    }

    groups
}

/// Groups flat rhythm groups into repeated or alternating patterns.
#[derive(Copy, Clone, Debug)]
pub struct RepeatingAggregator {
    margin_of_error: f64,
}

impl RepeatingAggregator {
    pub const fn new(margin_of_error: f64) -> Self {
        Self { margin_of_error }
    }

    /// Returns each repeating pattern's range of flat groups alongside its
    /// repetition length.
    pub fn group(&self, flat_groups: &[Pattern]) -> Vec<(Range<usize>, usize)> {
        let mut repeats: Vec<(Range<usize>, usize)> = Vec::new();

        for i in 0..flat_groups.len() {
            let appended = repeats
                .last_mut()
                .is_some_and(|(children, length)| self.try_append(flat_groups, children, length, i));

            if !appended {
                repeats.push((i..i + 1, 1));
            }
        }

        repeats
    }

    fn try_append(
        &self,
        flat_groups: &[Pattern],
        children: &mut Range<usize>,
        length: &mut usize,
        i: usize,
    ) -> bool {
        let curr = &flat_groups[i];

        let append = if children.len() == 1 {
            let first = &flat_groups[children.start];

            if first.is_repetition_of(curr, self.margin_of_error) {
                *length = 1;

                true
            } else if flat_groups
                .get(i + 1)
                .is_some_and(|next| first.is_repetition_of(next, self.margin_of_error))
            {
                *length = 2;

                true
            } else {
                false
            }
        } else {
            flat_groups[children.end - 2].is_repetition_of(curr, self.margin_of_error)
        };

        if append {
            children.end = i + 1;
        }

        append
    }

    /// Whether the leading flat groups of two repeating patterns are
    /// repetitions of each other.
    fn is_repetition_of(&self, flat_groups: &[Pattern], curr: &Pattern, other: &Pattern) -> bool {
        let n = curr.len().min(other.len()).min(2);

        (0..n).all(|k| {
            flat_groups[curr.children.start + k]
                .is_repetition_of(&flat_groups[other.children.start + k], self.margin_of_error)
        })
    }

    /// Amount of objects since a repeating pattern has last been seen.
    pub fn repetition_interval(
        &self,
        repeats: &[Pattern],
        flat_groups: &[Pattern],
        idx: usize,
    ) -> usize {
        let curr = &repeats[idx];
        let mut interval = 1;
        let mut other = curr.previous;

        while let Some(other_idx) = other {
            if interval >= Repetition::MAX_INTERVAL {
                break;
            }

            let prev = &repeats[other_idx];
            interval += prev.objects.len();

            if self.is_repetition_of(flat_groups, curr, prev) {
                return interval.min(Repetition::MAX_INTERVAL);
            }

            other = prev.previous;
        }

        Repetition::MAX_INTERVAL
    }
}

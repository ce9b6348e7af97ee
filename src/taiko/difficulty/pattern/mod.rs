use std::ops::{Index, Range};

use crate::any::difficulty::object::HasStartTime;

pub use self::preprocessor::PatternPreprocessor;

pub mod aggregators;
pub mod preprocessor;

/// Items that are aligned in time relative to their predecessor.
pub trait HasInterval: HasStartTime {
    /// Time since the start of the previous item of the same level.
    ///
    /// `NaN` if there is no previous item.
    fn interval(&self) -> f64;

    /// Indices of all covered difficulty objects.
    fn objects(&self) -> Range<usize>;
}

/// What the items of a [`PatternLayer`] consist of.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Level {
    /// A single difficulty object.
    Event,
    /// Consecutive hits of the same color.
    MonoStreak,
    /// Evenly spaced items.
    FlatGroup,
    /// Repeated or alternating flat groups.
    RepeatGroup,
    /// Consecutive mono streaks of equal length.
    ColorSequence,
}

/// Repetition data of a [`Level::RepeatGroup`] pattern.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Repetition {
    /// `1` for simple repetitions, `2` for alternating pairs.
    pub length: usize,
    /// Amount of objects since this pattern has last been seen, capped at
    /// [`Repetition::MAX_INTERVAL`].
    pub interval: usize,
}

impl Repetition {
    pub const MAX_INTERVAL: usize = 32;
}

/// A group of consecutive items of a lower level.
#[derive(Clone, Debug, PartialEq)]
pub struct Pattern {
    /// Indices into the lower layer.
    pub children: Range<usize>,
    /// Indices of the covered difficulty objects.
    pub objects: Range<usize>,
    /// Index of the preceding pattern in the same layer.
    pub previous: Option<usize>,
    pub start_time: f64,
    /// Start time of the last child.
    pub end_time: f64,
    /// Time since the previous pattern's start, `NaN` if there is none.
    pub interval: f64,
    /// Interval of the first child.
    pub first_child_interval: f64,
    /// Interval of the second child, `NaN` if there is only one child.
    pub children_interval: f64,
    pub repetition: Option<Repetition>,
}

impl Pattern {
    fn new<T: HasInterval>(items: &[T], children: Range<usize>, previous: Option<&Pattern>) -> Option<Self> {
        let group = items.get(children.clone())?;
        let (first, last) = (group.first()?, group.last()?);

        let start_time = first.start_time();

        Some(Self {
            objects: first.objects().start..last.objects().end,
            previous: None,
            start_time,
            end_time: last.start_time(),
            interval: previous.map_or(f64::NAN, |prev| start_time - prev.start_time),
            first_child_interval: first.interval(),
            children_interval: group.get(1).map_or(f64::NAN, HasInterval::interval),
            repetition: None,
            children,
        })
    }

    /// Amount of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Time between the first and the last child.
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    /// Whether both patterns have the same amount of children and their
    /// children are equally spaced.
    ///
    /// Single-child patterns compare their own child's interval, all others
    /// compare the interval between their first two children.
    pub fn is_repetition_of(&self, other: &Self, margin_of_error: f64) -> bool {
        if self.len() != other.len() {
            return false;
        }

        let (this, that) = if self.len() <= 1 {
            (self.first_child_interval, other.first_child_interval)
        } else {
            (self.children_interval, other.children_interval)
        };

        (this - that).abs() < margin_of_error
    }
}

impl HasStartTime for Pattern {
    fn start_time(&self) -> f64 {
        self.start_time
    }
}

impl HasInterval for Pattern {
    fn interval(&self) -> f64 {
        self.interval
    }

    fn objects(&self) -> Range<usize> {
        self.objects.clone()
    }
}

/// Append-only arena of all patterns of a [`Level`].
///
/// Each pattern's `previous` is the pattern right before it.
#[derive(Clone, Debug, PartialEq)]
pub struct PatternLayer {
    level: Level,
    child_level: Level,
    patterns: Vec<Pattern>,
}

impl PatternLayer {
    /// Creates a pattern for each group of items; empty groups are skipped.
    pub fn new<T, I>(level: Level, child_level: Level, items: &[T], groups: I) -> Self
    where
        T: HasInterval,
        I: IntoIterator<Item = Range<usize>>,
    {
        let mut patterns: Vec<Pattern> = Vec::new();

        for children in groups {
            let Some(mut pattern) = Pattern::new(items, children, patterns.last()) else {
                continue;
            };

            pattern.previous = patterns.len().checked_sub(1);
            patterns.push(pattern);
        }

        Self {
            level,
            child_level,
            patterns,
        }
    }

    pub const fn level(&self) -> Level {
        self.level
    }

    pub const fn child_level(&self) -> Level {
        self.child_level
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Pattern> {
        self.patterns.get(idx)
    }

    pub fn previous(&self, pattern: &Pattern) -> Option<&Pattern> {
        pattern.previous.and_then(|idx| self.patterns.get(idx))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pattern> {
        self.patterns.iter()
    }

    pub fn as_slice(&self) -> &[Pattern] {
        &self.patterns
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Pattern] {
        &mut self.patterns
    }
}

impl Index<usize> for PatternLayer {
    type Output = Pattern;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.patterns[idx]
    }
}

/// Where a pass-1 flat group is positioned within its repeating pattern.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RepetitionPosition {
    /// Index of the repeating pattern.
    pub pattern: usize,
    /// How many repetitions preceded the group within the repeating
    /// pattern.
    pub repetitions: usize,
}

/// Indices of the patterns that start at a difficulty object.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ObjectPatterns {
    pub flat: [Option<usize>; 3],
    pub mono: Option<usize>,
    pub color_rhythm: [Option<usize>; 2],
    pub repeating: Option<usize>,
    pub color_sequence: Option<usize>,
}

/// The full pattern hierarchy of a map.
#[derive(Clone, Debug)]
pub struct TaikoPatterns {
    /// Flat rhythm groups of three passes, each pass grouping the previous.
    pub flat: [PatternLayer; 3],
    /// Mono streaks, never exceeding the bounds of a pass-1 flat group.
    pub monos: PatternLayer,
    /// Flat rhythm groups of mono streaks, two passes.
    pub color_rhythm: [PatternLayer; 2],
    /// Repeated or alternating pass-1 flat groups.
    pub repeating: PatternLayer,
    /// Consecutive mono streaks of the same length.
    pub color_sequences: PatternLayer,
    /// For each pass-1 flat group.
    pub repetition_positions: Vec<RepetitionPosition>,
    starts: Vec<ObjectPatterns>,
}

impl TaikoPatterns {
    pub(crate) fn new(
        flat: [PatternLayer; 3],
        monos: PatternLayer,
        color_rhythm: [PatternLayer; 2],
        repeating: PatternLayer,
        color_sequences: PatternLayer,
        n_objects: usize,
    ) -> Self {
        fn assign<F>(starts: &mut [ObjectPatterns], layer: &PatternLayer, f: F)
        where
            F: Fn(&mut ObjectPatterns) -> &mut Option<usize>,
        {
            for (i, pattern) in layer.iter().enumerate() {
                if let Some(entry) = starts.get_mut(pattern.objects.start) {
                    *f(entry) = Some(i);
                }
            }
        }

        let mut starts = vec![ObjectPatterns::default(); n_objects];

        assign(&mut starts, &flat[0], |entry| &mut entry.flat[0]);
        assign(&mut starts, &flat[1], |entry| &mut entry.flat[1]);
        assign(&mut starts, &flat[2], |entry| &mut entry.flat[2]);
        assign(&mut starts, &monos, |entry| &mut entry.mono);
        assign(&mut starts, &color_rhythm[0], |entry| &mut entry.color_rhythm[0]);
        assign(&mut starts, &color_rhythm[1], |entry| &mut entry.color_rhythm[1]);
        assign(&mut starts, &repeating, |entry| &mut entry.repeating);
        assign(&mut starts, &color_sequences, |entry| &mut entry.color_sequence);

        let mut repetition_positions = vec![RepetitionPosition::default(); flat[0].len()];

        for (i, pattern) in repeating.iter().enumerate() {
            let length = pattern.repetition.map_or(1, |repetition| repetition.length).max(1);

            for (nth, group) in pattern.children.clone().enumerate() {
                if let Some(position) = repetition_positions.get_mut(group) {
                    *position = RepetitionPosition {
                        pattern: i,
                        repetitions: nth / length,
                    };
                }
            }
        }

        Self {
            flat,
            monos,
            color_rhythm,
            repeating,
            color_sequences,
            repetition_positions,
            starts,
        }
    }

    /// The patterns that start at the difficulty object of the given index.
    pub fn starting_at(&self, idx: usize) -> ObjectPatterns {
        self.starts.get(idx).copied().unwrap_or_default()
    }
}

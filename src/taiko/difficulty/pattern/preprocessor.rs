use crate::taiko::difficulty::{
    object::TaikoDifficultyObjects,
    pattern::{
        aggregators::{mono_streaks, repetitions, RepeatingAggregator, RhythmAggregator},
        Level, PatternLayer, Repetition, TaikoPatterns,
    },
};

/// Builds the [`TaikoPatterns`] of a map.
#[derive(Copy, Clone, Debug)]
pub struct PatternPreprocessor {
    margin_of_error: f64,
}

impl PatternPreprocessor {
    pub const fn new(margin_of_error: f64) -> Self {
        Self { margin_of_error }
    }

    pub fn process(&self, objects: &TaikoDifficultyObjects) -> TaikoPatterns {
        let hits = objects.as_slice();
        let rhythm = RhythmAggregator::new(self.margin_of_error);

        let first_pass = PatternLayer::new(Level::FlatGroup, Level::Event, hits, rhythm.group(hits));
        let second_pass = Self::regroup(rhythm, &first_pass);
        let third_pass = Self::regroup(rhythm, &second_pass);

        // * Mono streaks are split at flat group boundaries but stay linked
        // * across them
        let mono_groups = first_pass
            .iter()
            .flat_map(|group| mono_streaks(hits, group.children.clone()));
        let monos = PatternLayer::new(Level::MonoStreak, Level::Event, hits, mono_groups);

        let first_color_pass = Self::regroup(rhythm, &monos);
        let second_color_pass = Self::regroup(rhythm, &first_color_pass);

        let repeating = self.repeating(&first_pass);

        let sequences = repetitions(monos.as_slice(), |prev, curr| prev.len() == curr.len());
        let color_sequences =
            PatternLayer::new(Level::ColorSequence, Level::MonoStreak, monos.as_slice(), sequences);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            objects = hits.len(),
            flat = ?[first_pass.len(), second_pass.len(), third_pass.len()],
            monos = monos.len(),
            repeating = repeating.len(),
            color_sequences = color_sequences.len(),
            "Built pattern hierarchy",
        );

        TaikoPatterns::new(
            [first_pass, second_pass, third_pass],
            monos,
            [first_color_pass, second_color_pass],
            repeating,
            color_sequences,
            hits.len(),
        )
    }

    /// Flat rhythm grouping over the patterns of a layer.
    fn regroup(rhythm: RhythmAggregator, layer: &PatternLayer) -> PatternLayer {
        let groups = rhythm.group(layer.as_slice());

        PatternLayer::new(Level::FlatGroup, layer.level(), layer.as_slice(), groups)
    }

    fn repeating(&self, flat_groups: &PatternLayer) -> PatternLayer {
        let aggregator = RepeatingAggregator::new(self.margin_of_error);
        let repeats = aggregator.group(flat_groups.as_slice());

        let mut layer = PatternLayer::new(
            Level::RepeatGroup,
            Level::FlatGroup,
            flat_groups.as_slice(),
            repeats.iter().map(|(children, _)| children.clone()),
        );

        let intervals: Vec<_> = (0..layer.len())
            .map(|idx| aggregator.repetition_interval(layer.as_slice(), flat_groups.as_slice(), idx))
            .collect();

        let iter = layer
            .as_mut_slice()
            .iter_mut()
            .zip(repeats)
            .zip(intervals);

        for ((pattern, (_, length)), interval) in iter {
            pattern.repetition = Some(Repetition { length, interval });
        }

        layer
    }
}

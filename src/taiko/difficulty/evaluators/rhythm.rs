use std::f64::consts::PI;

use crate::{
    taiko::difficulty::{
        object::TaikoDifficultyObject,
        pattern::{Pattern, PatternLayer, TaikoPatterns},
    },
    util::{
        difficulty::{bell_curve, inverted_sigmoid, sigmoid},
        float_ext::FloatExt,
    },
};

/// Rates changes between the intervals of consecutive flat rhythm groups
/// across all levels of the pattern hierarchy.
#[derive(Clone, Debug)]
pub struct RhythmEvaluator {
    patterns: TaikoPatterns,
    great_hit_window: f64,
}

impl RhythmEvaluator {
    pub const fn new(patterns: TaikoPatterns, great_hit_window: f64) -> Self {
        Self {
            patterns,
            great_hit_window,
        }
    }

    pub fn evaluate_diff_of(&self, curr: &TaikoDifficultyObject) -> f64 {
        let starts = self.patterns.starting_at(curr.idx);
        let [first_pass, second_pass, third_pass] = &self.patterns.flat;
        let mut total = 0.0;

        if let Some(idx) = starts.flat[0] {
            total += 0.25 * self.evaluate(first_pass, idx) * self.repetition_factor(idx);
        }

        if let Some(idx) = starts.flat[1] {
            total += 0.5 * self.evaluate(second_pass, idx);
        }

        if let Some(idx) = starts.flat[2] {
            total += self.evaluate(third_pass, idx);
        }

        if let (Some(idx), None) = (starts.mono, starts.flat[0]) {
            total += 0.2 * f64::from(self.patterns_to_even(idx));
        }

        if let Some(idx) = starts.color_rhythm[1] {
            total += 0.5 * self.evaluate(&self.patterns.color_rhythm[1], idx);
        }

        total.max(0.0)
    }

    fn evaluate(&self, layer: &PatternLayer, idx: usize) -> f64 {
        let Some(pattern) = layer.get(idx) else {
            return 0.0;
        };

        let previous = layer.previous(pattern);

        let interval_ratio = ratio(pattern.interval, previous.map(|prev| prev.interval));
        let children_ratio = ratio(
            pattern.children_interval,
            previous.map(|prev| prev.children_interval),
        );

        let interval_strain = ratio_difficulty(interval_ratio);
        let children_strain = ratio_difficulty(children_ratio)
            * self.children_interval_penalty(pattern, previous)
            * self.burst_penalty(pattern);

        ratio_difficulty(interval_strain + children_strain)
    }

    /// Penalizes patterns that can be played with the same interval as the
    /// previous pattern.
    fn children_interval_penalty(&self, pattern: &Pattern, previous: Option<&Pattern>) -> f64 {
        let Some(prev_interval) = previous
            .map(|prev| prev.interval)
            .filter(|interval| !interval.is_nan())
        else {
            return 1.0;
        };

        if pattern.len() <= 1 {
            return 1.0;
        }

        let expected_duration = prev_interval * (pattern.len() - 1) as f64;
        let duration_diff = (pattern.duration() - expected_duration).abs();

        sigmoid(duration_diff / self.great_hit_window, 1.5, 0.5, 0.5, 1.0)
    }

    /// Penalizes patterns that can be hit within a single hit window.
    fn burst_penalty(&self, pattern: &Pattern) -> f64 {
        sigmoid(
            pattern.duration() / self.great_hit_window,
            1.0,
            0.5,
            0.5,
            1.0,
        )
    }

    /// Repeated flat groups are easier to play than new ones. The first
    /// occurrence is scaled by how recently the same pattern was seen.
    fn repetition_factor(&self, flat_idx: usize) -> f64 {
        let Some(position) = self.patterns.repetition_positions.get(flat_idx) else {
            return 1.0;
        };

        if position.repetitions > 0 {
            return inverted_sigmoid(position.repetitions as f64, 2.0, 2.0, 0.5, 1.0);
        }

        self.patterns
            .repeating
            .get(position.pattern)
            .and_then(|pattern| pattern.repetition)
            .map_or(1.0, |repetition| {
                sigmoid(repetition.interval as f64, 2.0, 2.0, 1.0, 2.0) / 2.0
            })
    }

    /// Amount of mono streaks, counting backwards from the given one, that
    /// are needed to reach an even amount of hits. Capped at 3.
    fn patterns_to_even(&self, mono_idx: usize) -> u8 {
        let monos = &self.patterns.monos;
        let mut note_count = 0;
        let mut pattern_count = 0;
        let mut curr = monos.get(mono_idx);

        while let Some(mono) = curr {
            if note_count != 0 && note_count % 2 != 0 {
                break;
            }

            pattern_count += 1;

            if pattern_count >= 3 {
                return 3;
            }

            note_count += mono.len();
            curr = monos.previous(mono);
        }

        pattern_count.max(1)
    }
}

/// `interval / prev_interval`, or `1.0` if either is missing.
fn ratio(interval: f64, prev_interval: Option<f64>) -> f64 {
    prev_interval.map_or(1.0, |prev| (interval / prev).finite_or(1.0))
}

/// Rates how hard it is to switch between two intervals of the given ratio.
///
/// Ratios of simple fractions are penalized by every matching term,
/// resulting in a lower difficulty than complicated ratios.
pub fn ratio_difficulty(ratio: f64) -> f64 {
    const TERMS: u8 = 8;

    let mut difficulty = (1..=TERMS)
        .map(|i| -f64::powi(f64::cos(f64::from(i) * PI * ratio), 2))
        .sum::<f64>();

    difficulty += f64::from(TERMS);

    // * Give bonus to near-1 ratios
    difficulty += bell_curve(ratio, 1.0, 0.5, None);

    // * Penalize ratios that are VERY near 1
    difficulty -= bell_curve(ratio, 1.0, 0.3, None);

    // * Penalize 1/2s specifically
    difficulty -= bell_curve(ratio, 0.5, 0.1, Some(0.2));

    difficulty / f64::sqrt(8.0)
}

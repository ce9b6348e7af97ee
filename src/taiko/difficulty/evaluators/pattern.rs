use crate::{
    taiko::difficulty::{
        config::TaikoDifficultyConfig,
        field::{amplitude::AmplitudeField, PatternFields},
        object::TaikoDifficultyObject,
    },
    util::difficulty::norm,
};

/// Rates how far a hit is off from the timings that its predecessors
/// suggest.
#[derive(Clone, Debug)]
pub struct PatternEvaluator {
    fields: PatternFields,
    hit_window_deviation: f64,
    error_deviation: f64,
    amplitude_floor: f64,
}

impl PatternEvaluator {
    pub fn new(fields: PatternFields, great_hit_window: f64, config: &TaikoDifficultyConfig) -> Self {
        Self {
            fields,
            hit_window_deviation: great_hit_window,
            error_deviation: config.error_deviation_offset + great_hit_window,
            amplitude_floor: config.amplitude_floor,
        }
    }

    pub fn evaluate_diff_of(&self, curr: &TaikoDifficultyObject) -> f64 {
        let time = curr.start_time;

        let rhythm = self.misalignment(&self.fields.rhythm, time);
        let color_change = self.misalignment(&self.fields.color_change, time);
        let center = self.misalignment(&self.fields.center, time);
        let rim = self.misalignment(&self.fields.rim, time);

        norm(2.0, [rhythm, color_change]) + center + rim
    }

    /// Amplitude within the tolerated error relative to the amplitude
    /// within the hit window.
    fn misalignment(&self, field: &AmplitudeField, time: f64) -> f64 {
        let hit = f64::max(
            self.amplitude_floor,
            field.amplitude_at(time, self.hit_window_deviation),
        );
        let error = field.amplitude_at(time, self.error_deviation);

        error / hit
    }
}

/// Overall scaling of all skills when combining their peaks.
const FINAL_MULTIPLIER: f64 = 0.15;
const PATTERN_MULTIPLIER: f64 = 0.33 * FINAL_MULTIPLIER;
const RHYTHM_MULTIPLIER: f64 = 0.33 * FINAL_MULTIPLIER;
const STAMINA_MULTIPLIER: f64 = 0.42 * FINAL_MULTIPLIER;

/// Tuning constants of the osu!taiko difficulty calculation.
///
/// The defaults are the canonical values; changing them yields star ratings
/// that are not comparable with the defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct TaikoDifficultyConfig {
    /// Shape of the impulse train each note emits into the rhythm fields.
    pub impulses: ImpulseTrainConfig,
    /// Lower bound of a field's amplitude within the hit window.
    pub amplitude_floor: f64,
    /// Added to the great hit window to get the standard deviation of the
    /// tolerated error.
    pub error_deviation_offset: f64,
    /// Maximum difference in milliseconds for two intervals to be
    /// considered equal.
    pub margin_of_error: f64,
    /// Exponent of the p-norm that combines the skills of a section.
    pub peak_norm: f64,
    /// Weight decay between consecutive sections sorted by difficulty.
    pub decay_weight: f64,
    pub pattern_multiplier: f64,
    pub rhythm_multiplier: f64,
    pub stamina_multiplier: f64,
}

impl TaikoDifficultyConfig {
    pub const fn new() -> Self {
        Self {
            impulses: ImpulseTrainConfig::new(),
            amplitude_floor: 0.1,
            error_deviation_offset: 1000.0,
            margin_of_error: 3.0,
            peak_norm: 1.5,
            decay_weight: 0.9,
            pattern_multiplier: PATTERN_MULTIPLIER,
            rhythm_multiplier: RHYTHM_MULTIPLIER,
            stamina_multiplier: STAMINA_MULTIPLIER,
        }
    }
}

impl Default for TaikoDifficultyConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Shape of the harmonic impulse trains.
///
/// Harmonic `h` subdivides the interval into `2^h` parts with a starting
/// amplitude of `harmonic_decay_base^h`. Its impulses repeat
/// `cycles * (h + 1)` times while decaying by `cycle_decay_base` per full
/// interval.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ImpulseTrainConfig {
    pub harmonics: u32,
    pub harmonic_decay_base: f64,
    pub cycles: u32,
    pub cycle_decay_base: f64,
}

impl ImpulseTrainConfig {
    pub const fn new() -> Self {
        Self {
            harmonics: 4,
            harmonic_decay_base: 0.5,
            cycles: 6,
            cycle_decay_base: 0.5,
        }
    }
}

impl Default for ImpulseTrainConfig {
    fn default() -> Self {
        Self::new()
    }
}

use std::{
    error::Error as StdError,
    fmt::{Debug, Display, Formatter, Result as FmtResult},
};

use crate::{
    model::{beatmap::Beatmap, mods::GameMods},
    taiko::{
        difficulty::config::TaikoDifficultyConfig, TaikoDifficultyAttributes, TaikoStrains,
    },
};

pub mod object;
#[macro_use]
pub mod skills;

/// Difficulty calculator on maps.
///
/// # Example
///
/// ```
/// use taiko_pattern::{Beatmap, Difficulty, model::note::HitType};
/// use rosu_mods::GameModsLegacy;
///
/// let map = Beatmap::from_hits([
///     (0.0, HitType::Center),
///     (200.0, HitType::Rim),
///     (400.0, HitType::Center),
/// ]);
///
/// let attrs = Difficulty::new()
///     .mods(GameModsLegacy::HardRock | GameModsLegacy::DoubleTime)
///     .passed_objects(2)
///     .calculate(&map)
///     .unwrap();
///
/// assert_eq!(attrs.max_combo, 2);
/// ```
#[derive(Clone, PartialEq)]
#[must_use]
pub struct Difficulty {
    mods: GameMods,
    passed_objects: Option<u32>,
    clock_rate: Option<f64>,
    od: Option<ModsDependent>,
    config: TaikoDifficultyConfig,
}

/// Wrapper for beatmap attributes in [`Difficulty`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ModsDependent {
    /// Value of the beatmap attribute.
    pub value: f32,
    /// Whether `value` should be used as is or modified based on mods.
    ///
    /// `true` means "value already considers mods" i.e. use as is;
    /// `false` means modify with mods.
    pub with_mods: bool,
}

impl ModsDependent {
    pub const fn new(value: f32) -> Self {
        Self {
            value,
            with_mods: false,
        }
    }
}

impl Difficulty {
    /// Create a new difficulty calculator.
    pub const fn new() -> Self {
        Self {
            mods: GameMods::DEFAULT,
            passed_objects: None,
            clock_rate: None,
            od: None,
            config: TaikoDifficultyConfig::new(),
        }
    }

    /// Use the specified beatmap to calculate attributes.
    pub fn calculate(&self, map: &Beatmap) -> Result<TaikoDifficultyAttributes, DifficultyError> {
        crate::taiko::difficulty::difficulty(self, map)
    }

    /// Use the specified beatmap to calculate the strain peaks of each
    /// skill.
    pub fn strains(&self, map: &Beatmap) -> Result<TaikoStrains, DifficultyError> {
        crate::taiko::strains::strains(self, map)
    }

    /// Specify mods.
    pub fn mods(self, mods: impl Into<GameMods>) -> Self {
        Self {
            mods: mods.into(),
            ..self
        }
    }

    /// Amount of passed objects for partial plays, e.g. a fail.
    ///
    /// Only hits count towards this limit, drum rolls and swells are
    /// ignored.
    pub const fn passed_objects(mut self, passed_objects: u32) -> Self {
        self.passed_objects = Some(passed_objects);

        self
    }

    /// Adjust the clock rate used in the calculation.
    ///
    /// If none is specified, it will take the clock rate based on the mods
    /// i.e. 1.5 for DT, 0.75 for HT and 1.0 otherwise.
    ///
    /// | Minimum | Maximum |
    /// | :-----: | :-----: |
    /// | 0.01    | 100     |
    pub fn clock_rate(mut self, clock_rate: f64) -> Self {
        self.clock_rate = Some(clock_rate.clamp(0.01, 100.0));

        self
    }

    /// Override a beatmap's set OD.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods, e.g. on `true` the value will be
    /// used as is and on `false` it will be modified based on the mods.
    ///
    /// | Minimum | Maximum |
    /// | :-----: | :-----: |
    /// | -20     | 20      |
    pub fn od(mut self, od: f32, with_mods: bool) -> Self {
        self.od = Some(ModsDependent {
            value: od.clamp(-20.0, 20.0),
            with_mods,
        });

        self
    }

    /// Adjust the tuning constants of the calculation.
    pub fn config(mut self, config: TaikoDifficultyConfig) -> Self {
        self.config = config;

        self
    }

    pub const fn get_mods(&self) -> &GameMods {
        &self.mods
    }

    pub fn get_clock_rate(&self) -> f64 {
        self.clock_rate
            .unwrap_or_else(|| self.mods.clock_rate())
    }

    pub fn get_passed_objects(&self) -> usize {
        self.passed_objects.map_or(usize::MAX, |n| n as usize)
    }

    pub const fn get_od(&self) -> Option<ModsDependent> {
        self.od
    }

    pub const fn get_config(&self) -> &TaikoDifficultyConfig {
        &self.config
    }
}

impl Debug for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let Self {
            mods,
            passed_objects,
            clock_rate,
            od,
            config,
        } = self;

        f.debug_struct("Difficulty")
            .field("mods", mods)
            .field("passed_objects", passed_objects)
            .field("clock_rate", clock_rate)
            .field("od", od)
            .field("config", config)
            .finish()
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::new()
    }
}

/// Error when a [`Difficulty`] calculation cannot be performed.
#[derive(Clone, Debug, PartialEq)]
pub enum DifficultyError {
    /// The clock rate is not a number.
    ClockRate(f64),
    /// A note's start time is not finite.
    NonFiniteTime { idx: usize },
    /// A note starts before its preceding note.
    UnsortedNotes { idx: usize, prev: f64, curr: f64 },
    /// The resolved great hit window cannot be used as standard deviation
    /// of the rhythm fields.
    HitWindow(f64),
}

impl StdError for DifficultyError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        None
    }
}

impl Display for DifficultyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::ClockRate(clock_rate) => write!(f, "invalid clock rate {clock_rate}"),
            Self::NonFiniteTime { idx } => {
                write!(f, "start time of note at index {idx} is not finite")
            }
            Self::UnsortedNotes { idx, prev, curr } => write!(
                f,
                "note at index {idx} starts at {curr}ms which is before its predecessor at {prev}ms"
            ),
            Self::HitWindow(hit_window) => write!(f, "invalid great hit window {hit_window}ms"),
        }
    }
}

#[cfg(test)]
mod tests {
    use rosu_mods::GameModsLegacy;

    use super::*;

    #[test]
    fn clock_rate_from_mods() {
        let nomod = Difficulty::new();
        assert!((nomod.get_clock_rate() - 1.0).abs() < f64::EPSILON);

        let dt = Difficulty::new().mods(GameModsLegacy::DoubleTime);
        assert!((dt.get_clock_rate() - 1.5).abs() < f64::EPSILON);

        let ht = Difficulty::new().mods(GameModsLegacy::HalfTime);
        assert!((ht.get_clock_rate() - 0.75).abs() < f64::EPSILON);

        let custom = Difficulty::new()
            .mods(GameModsLegacy::DoubleTime)
            .clock_rate(1.2);
        assert!((custom.get_clock_rate() - 1.2).abs() < f64::EPSILON);
    }

    #[test]
    fn clock_rate_is_clamped() {
        let slow = Difficulty::new().clock_rate(0.0);
        assert!((slow.get_clock_rate() - 0.01).abs() < f64::EPSILON);

        let fast = Difficulty::new().clock_rate(f64::INFINITY);
        assert!((fast.get_clock_rate() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn passed_objects_default_to_all() {
        assert_eq!(Difficulty::new().get_passed_objects(), usize::MAX);
        assert_eq!(Difficulty::new().passed_objects(5).get_passed_objects(), 5);
    }
}

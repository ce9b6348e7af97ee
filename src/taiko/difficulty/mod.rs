use crate::{
    any::{difficulty::skills::StrainSkill, DifficultyError, ModsDependent},
    model::{beatmap::Beatmap, hit_windows::HitWindows, note::Note},
    taiko::attributes::TaikoDifficultyAttributes,
    Difficulty,
};

use self::{
    config::TaikoDifficultyConfig,
    evaluators::{PatternEvaluator, RhythmEvaluator},
    field::preprocessor::{ImpulseTable, PatternFieldPreprocessor},
    object::TaikoDifficultyObjects,
    pattern::PatternPreprocessor,
    peaks::combine_peaks,
};

pub(crate) use self::skills::TaikoSkills;

pub mod config;
mod evaluators;
pub mod field;
pub mod object;
pub mod pattern;
mod peaks;
mod skills;

pub(crate) fn difficulty(
    difficulty: &Difficulty,
    map: &Beatmap,
) -> Result<TaikoDifficultyAttributes, DifficultyError> {
    let DifficultyValues { skills, mut attrs } = DifficultyValues::calculate(difficulty, map)?;

    if let Some(skills) = skills {
        DifficultyValues::eval(&mut attrs, skills, difficulty.get_config());
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        n_objects = attrs.n_objects,
        peak = attrs.peak,
        stars = attrs.stars,
        "Calculated difficulty",
    );

    Ok(attrs)
}

/// Resolved parameters of a calculation.
pub(crate) struct TaikoDifficultySetup {
    pub clock_rate: f64,
    pub hit_windows: HitWindows,
    pub global_slider_velocity: f64,
}

impl TaikoDifficultySetup {
    pub fn new(difficulty: &Difficulty, map: &Beatmap) -> Result<Self, DifficultyError> {
        validate_notes(&map.notes)?;

        let mods = difficulty.get_mods();
        let clock_rate = difficulty.get_clock_rate();

        if !(clock_rate.is_finite() && clock_rate > 0.0) {
            return Err(DifficultyError::ClockRate(clock_rate));
        }

        let od = match difficulty.get_od() {
            Some(ModsDependent {
                value,
                with_mods: true,
            }) => f64::from(value),
            Some(ModsDependent {
                value,
                with_mods: false,
            }) => mods.apply_od(f64::from(value)),
            None => mods.apply_od(f64::from(map.od)),
        };

        let hit_windows = HitWindows::new(od, clock_rate);

        // The great hit window is the standard deviation of the field queries
        if hit_windows.great.is_nan() || hit_windows.great <= 0.0 {
            return Err(DifficultyError::HitWindow(hit_windows.great));
        }

        let mut global_slider_velocity = map.slider_multiplier;

        if mods.hr() {
            const SLIDER_MULTIPLIER: f64 = 1.4 * 4.0 / 3.0;

            global_slider_velocity *= SLIDER_MULTIPLIER;
        } else if mods.ez() {
            const SLIDER_MULTIPLIER: f64 = 0.8;

            global_slider_velocity *= SLIDER_MULTIPLIER;
        }

        Ok(Self {
            clock_rate,
            hit_windows,
            global_slider_velocity,
        })
    }
}

fn validate_notes(notes: &[Note]) -> Result<(), DifficultyError> {
    let mut prev = f64::NEG_INFINITY;

    for (idx, note) in notes.iter().enumerate() {
        let curr = note.start_time;

        if !curr.is_finite() {
            return Err(DifficultyError::NonFiniteTime { idx });
        }

        if curr < prev {
            return Err(DifficultyError::UnsortedNotes { idx, prev, curr });
        }

        prev = curr;
    }

    Ok(())
}

fn rescale(stars: f64) -> f64 {
    if stars < 0.0 {
        stars
    } else {
        10.43 * f64::ln(stars / 8.0 + 1.0)
    }
}

pub(crate) struct DifficultyValues {
    /// `None` if there are no hits to process.
    pub skills: Option<TaikoSkills>,
    pub attrs: TaikoDifficultyAttributes,
}

impl DifficultyValues {
    pub fn calculate(difficulty: &Difficulty, map: &Beatmap) -> Result<Self, DifficultyError> {
        let TaikoDifficultySetup {
            clock_rate,
            hit_windows,
            global_slider_velocity,
        } = TaikoDifficultySetup::new(difficulty, map)?;

        let config = difficulty.get_config();
        let take = difficulty.get_passed_objects();

        let diff_objects =
            TaikoDifficultyObjects::new(map, global_slider_velocity, take, clock_rate);

        let skills = (!diff_objects.is_empty()).then(|| {
            let mut skills = Self::create_skills(&diff_objects, hit_windows.great, config);
            skills.process(&diff_objects);

            skills
        });

        let attrs = TaikoDifficultyAttributes {
            great_hit_window: hit_windows.great,
            ok_hit_window: hit_windows.ok,
            max_combo: diff_objects.len() as u32,
            n_objects: diff_objects.len(),
            mods: *difficulty.get_mods(),
            ..Default::default()
        };

        Ok(Self { skills, attrs })
    }

    fn create_skills(
        diff_objects: &TaikoDifficultyObjects,
        great_hit_window: f64,
        config: &TaikoDifficultyConfig,
    ) -> TaikoSkills {
        let table = ImpulseTable::new(&config.impulses);
        let fields = PatternFieldPreprocessor::new(table).process(diff_objects);
        let patterns = PatternPreprocessor::new(config.margin_of_error).process(diff_objects);

        TaikoSkills::new(
            PatternEvaluator::new(fields, great_hit_window, config),
            RhythmEvaluator::new(patterns, great_hit_window),
        )
    }

    /// Process the difficulty values and store the results in `attrs`.
    pub fn eval(
        attrs: &mut TaikoDifficultyAttributes,
        skills: TaikoSkills,
        config: &TaikoDifficultyConfig,
    ) {
        let TaikoSkills {
            pattern,
            rhythm,
            stamina,
        } = skills;

        let ratings = combine_peaks(
            &pattern.into_current_strain_peaks(),
            &rhythm.into_current_strain_peaks(),
            &stamina.into_current_strain_peaks(),
            config,
        );

        attrs.pattern = ratings.pattern;
        attrs.rhythm = ratings.rhythm;
        attrs.stamina = ratings.stamina;
        attrs.peak = ratings.combined;
        attrs.stars = rescale(ratings.combined);
    }
}

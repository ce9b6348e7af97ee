use crate::{
    any::difficulty::skills::StrainSkill,
    taiko::difficulty::{
        evaluators::{PatternEvaluator, RhythmEvaluator, StaminaEvaluator},
        object::TaikoDifficultyObjects,
    },
};

use self::{pattern::Pattern, rhythm::Rhythm, stamina::Stamina};

pub mod pattern;
pub mod rhythm;
pub mod stamina;

#[derive(Clone)]
pub struct TaikoSkills {
    pub pattern: Pattern,
    pub rhythm: Rhythm,
    pub stamina: Stamina,
}

impl TaikoSkills {
    pub fn new(pattern: PatternEvaluator, rhythm: RhythmEvaluator) -> Self {
        Self {
            pattern: Pattern::new(pattern),
            rhythm: Rhythm::new(rhythm),
            stamina: Stamina::new(),
        }
    }

    /// Processes all objects in order.
    pub fn process(&mut self, objects: &TaikoDifficultyObjects) {
        for hit_object in objects {
            self.pattern.process(hit_object, objects);
            self.rhythm.process(hit_object, objects);
            self.stamina.process(hit_object, objects);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        model::{beatmap::Beatmap, note::HitType},
        taiko::difficulty::{
            config::TaikoDifficultyConfig,
            field::preprocessor::{ImpulseTable, PatternFieldPreprocessor},
            pattern::PatternPreprocessor,
        },
    };

    use super::*;

    fn skills(times: &[f64]) -> TaikoSkills {
        let map = Beatmap::from_hits(times.iter().enumerate().map(|(i, &time)| {
            let hit_type = if i % 4 == 0 { HitType::Rim } else { HitType::Center };

            (time, hit_type)
        }));

        let objects = TaikoDifficultyObjects::new(&map, 1.0, usize::MAX, 1.0);
        let config = TaikoDifficultyConfig::default();

        let fields = PatternFieldPreprocessor::new(ImpulseTable::new(&config.impulses))
            .process(&objects);
        let patterns = PatternPreprocessor::new(config.margin_of_error).process(&objects);

        let mut skills = TaikoSkills::new(
            PatternEvaluator::new(fields, 35.0, &config),
            RhythmEvaluator::new(patterns, 35.0),
        );
        skills.process(&objects);

        skills
    }

    #[test]
    fn one_strain_per_object() {
        let times = [0.0, 150.0, 300.0, 375.0, 450.0, 900.0];
        let skills = skills(&times);

        assert_eq!(skills.pattern.object_strains().len(), times.len());
        assert_eq!(skills.rhythm.object_strains().len(), times.len());
        assert_eq!(skills.stamina.object_strains().len(), times.len());
    }

    #[test]
    fn peaks_per_section() {
        // Sections end at 400, 800, 1200 and 1600
        let times = [50.0, 100.0, 500.0, 1500.0];
        let skills = skills(&times);

        assert_eq!(skills.stamina.current_strain_peaks().len(), 4);
        assert_eq!(skills.pattern.current_strain_peaks().len(), 4);
    }

    #[test]
    fn stamina_strain_decays() {
        let skills = skills(&[0.0, 100.0, 200.0, 5000.0]);
        let strains = skills.stamina.object_strains();

        assert!(strains[3] < strains[2]);
    }
}

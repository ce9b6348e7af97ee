use crate::taiko::difficulty::{
    evaluators::RhythmEvaluator,
    object::{TaikoDifficultyObject, TaikoDifficultyObjects},
};

define_skill! {
    #[derive(Clone)]
    pub struct Rhythm: StrainDecaySkill => TaikoDifficultyObjects[TaikoDifficultyObject] {
        evaluator: RhythmEvaluator,
    }
}

impl Rhythm {
    const SKILL_MULTIPLIER: f64 = 1.0;
    const STRAIN_DECAY_BASE: f64 = 0.0;

    fn strain_value_of(&self, curr: &TaikoDifficultyObject, _: &TaikoDifficultyObjects) -> f64 {
        self.evaluator.evaluate_diff_of(curr)
    }
}

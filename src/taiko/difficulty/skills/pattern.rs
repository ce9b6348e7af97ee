use crate::taiko::difficulty::{
    evaluators::PatternEvaluator,
    object::{TaikoDifficultyObject, TaikoDifficultyObjects},
};

define_skill! {
    #[derive(Clone)]
    pub struct Pattern: StrainDecaySkill => TaikoDifficultyObjects[TaikoDifficultyObject] {
        evaluator: PatternEvaluator,
    }
}

impl Pattern {
    const SKILL_MULTIPLIER: f64 = 0.04;
    const STRAIN_DECAY_BASE: f64 = 0.0;

    fn strain_value_of(&self, curr: &TaikoDifficultyObject, _: &TaikoDifficultyObjects) -> f64 {
        self.evaluator.evaluate_diff_of(curr)
    }
}

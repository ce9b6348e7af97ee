pub use self::{
    pattern::PatternEvaluator, rhythm::RhythmEvaluator, stamina::StaminaEvaluator,
};

mod pattern;
mod rhythm;
mod stamina;

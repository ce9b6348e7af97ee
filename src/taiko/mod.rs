pub use self::{
    attributes::TaikoDifficultyAttributes,
    difficulty::config::{ImpulseTrainConfig, TaikoDifficultyConfig},
    strains::TaikoStrains,
};

mod attributes;
pub mod difficulty;
pub(crate) mod strains;
